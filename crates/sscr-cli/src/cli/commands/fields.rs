//! `sscr fields <url>` – identifiers embedded in a result URL.

use sscr_core::url_model::{export_filename, registration_number_from_url, roll_number_from_url};

pub fn run_fields(url: &str) {
    let roll = roll_number_from_url(url);
    let registration = registration_number_from_url(url);
    println!("Roll Number:          {}", roll.as_deref().unwrap_or("-"));
    println!("Registration Number:  {}", registration.as_deref().unwrap_or("-"));
    if let Some(roll) = roll {
        println!("Export File:          {}", export_filename(&roll));
    }
}
