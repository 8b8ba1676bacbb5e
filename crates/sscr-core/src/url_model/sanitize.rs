//! Linux-safe file name component for export files.

/// Sanitizes a roll number (or any identifier) for use inside a file name.
///
/// - Replaces NUL, `/`, `\`, whitespace, and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing dots and underscores
/// - Limits length to 200 bytes so the `_result.csv.part` suffix still fits NAME_MAX
pub fn sanitize_component(name: &str) -> String {
    const MAX_COMPONENT: usize = 200;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let unsafe_char = c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace();
        if unsafe_char || c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');

    if trimmed.len() > MAX_COMPONENT {
        let mut take = MAX_COMPONENT;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_pass_through() {
        assert_eq!(sanitize_component("2201057187"), "2201057187");
    }

    #[test]
    fn path_separators_replaced() {
        assert_eq!(sanitize_component("../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_component("a\\b"), "a_b");
    }

    #[test]
    fn whitespace_and_controls_collapse() {
        assert_eq!(sanitize_component(" 22 \t 01\x00"), "22_01");
    }

    #[test]
    fn long_names_truncated_on_char_boundary() {
        let long = "é".repeat(150);
        let s = sanitize_component(&long);
        assert!(s.len() <= 200);
        assert!(s.chars().all(|c| c == 'é'));
    }
}
