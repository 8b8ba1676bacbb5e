//! Classify extraction errors into retry policy error kinds.

use crate::error::ExtractError;
use crate::retry::policy::ErrorKind;

pub fn classify(e: &ExtractError) -> ErrorKind {
    match e {
        ExtractError::EmptyInput | ExtractError::InvalidUrlFormat(_) => ErrorKind::Input,
        ExtractError::Integrity(_) => ErrorKind::Integrity,
        ExtractError::ExtractionFailure(_) => ErrorKind::Transient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_not_transient() {
        assert_eq!(classify(&ExtractError::EmptyInput), ErrorKind::Input);
        assert_eq!(
            classify(&ExtractError::InvalidUrlFormat("relative URL".into())),
            ErrorKind::Input
        );
    }

    #[test]
    fn extraction_failure_is_transient() {
        assert_eq!(
            classify(&ExtractError::ExtractionFailure("timeout".into())),
            ErrorKind::Transient
        );
    }
}
