//! Incoming value classification and sanitization
//!
//! Raw values arrive as spreadsheet-sourced text. A blank value (empty
//! after trimming, or the literal "nan" in any case) means "remove this
//! key" and is never sanitized. Everything else passes through a ladder of
//! mutually exclusive folding rules, evaluated top to bottom, first hit
//! wins.

/// True when the raw text means "no value": empty after trim, or "nan"
pub fn is_blank(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Normalize a non-blank raw value.
///
/// Exactly one rule applies:
/// 1. contains `&`: drop every space, then `&` becomes `-`
/// 2. contains `/`: drop every space, then `/` becomes `-`
/// 3. contains a space: spaces become `-`
/// 4. otherwise the trimmed text is returned unchanged
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains('&') {
        trimmed.replace(' ', "").replace('&', "-")
    } else if trimmed.contains('/') {
        trimmed.replace(' ', "").replace('/', "-")
    } else if trimmed.contains(' ') {
        trimmed.replace(' ', "-")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("nan"));
        assert!(is_blank("NaN"));
        assert!(is_blank(" NAN "));
        assert!(!is_blank("0"));
        assert!(!is_blank("nano"));
    }

    #[test]
    fn test_ampersand_rule_is_exclusive() {
        // the & rule alone fires: spaces dropped, & folded, slash untouched
        assert_eq!(sanitize("A & B/C"), "A-B/C");
    }

    #[test]
    fn test_slash_rule() {
        assert_eq!(sanitize("Panel A / 2"), "PanelA-2");
    }

    #[test]
    fn test_space_rule() {
        assert_eq!(sanitize("Ground Floor"), "Ground-Floor");
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(sanitize("  Basement  "), "Basement");
        assert_eq!(sanitize("B-12"), "B-12");
    }

    #[test]
    fn test_interior_spaces_dropped_by_fold_rules() {
        assert_eq!(sanitize("A & B"), "A-B");
        assert_eq!(sanitize("a / b / c"), "a-b-c");
    }
}
