//! Randomized candidate names for the mock extractor.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: [&str; 8] = [
    "RAJESH", "PRIYA", "AMIT", "SUNITA", "RAHUL", "KAVITA", "SURESH", "MEERA",
];
// Empty entry means "no middle name".
const MIDDLE_NAMES: [&str; 7] = ["KUMAR", "DEVI", "SINGH", "KUMARI", "", "CHAND", "PRASAD"];
const LAST_NAMES: [&str; 8] = [
    "SHARMA", "PATEL", "SINGH", "GUPTA", "AGARWAL", "YADAV", "JAIN", "VERMA",
];

/// Picks `FIRST MIDDLE LAST`, or `FIRST LAST` when the middle draw is empty.
pub fn random_candidate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("RAJESH");
    let middle = MIDDLE_NAMES.choose(rng).copied().unwrap_or("");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("SHARMA");
    if middle.is_empty() {
        format!("{first} {last}")
    } else {
        format!("{first} {middle} {last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_come_from_the_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let name = random_candidate_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert!(parts.len() == 2 || parts.len() == 3, "{name}");
            assert!(FIRST_NAMES.contains(&parts[0]));
            assert!(LAST_NAMES.contains(parts.last().unwrap()));
            if parts.len() == 3 {
                assert!(MIDDLE_NAMES.contains(&parts[1]));
            }
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = random_candidate_name(&mut StdRng::seed_from_u64(42));
        let b = random_candidate_name(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
