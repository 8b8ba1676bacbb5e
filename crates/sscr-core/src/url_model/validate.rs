//! Syntactic URL validation.

use url::Url;

use crate::error::ExtractError;

/// Returns true iff `input` parses as a well-formed absolute URL.
///
/// Never panics; any parse failure is `false`.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Validates user input for an extraction request.
///
/// Blank input (after trimming) is `EmptyInput`; anything that does not parse
/// as an absolute URL is `InvalidUrlFormat`.
pub fn check_url(input: &str) -> Result<Url, ExtractError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    Url::parse(trimmed).map_err(|e| ExtractError::InvalidUrlFormat(e.to_string()))
}
