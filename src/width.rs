//! Display-column measurement for delimiter validation.
//!
//! Widths follow Unicode East-Asian-width rules via `unicode-width`, so the
//! result does not depend on the process locale. Ambiguous-width glyphs such
//! as the box-drawing characters count as one column.

use unicode_width::UnicodeWidthStr;

use crate::error::HrError;

/// Number of terminal columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Accept `delimiter` only if it is exactly one column wide.
pub fn validate_delimiter(delimiter: &str) -> Result<(), HrError> {
    match display_width(delimiter) {
        1 => Ok(()),
        columns => Err(HrError::InvalidDelimiter { columns }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_constants::DELIMITER;

    #[test]
    fn ascii_is_one_column() {
        assert_eq!(display_width("*"), 1);
        assert_eq!(display_width("-"), 1);
        assert_eq!(display_width("ab"), 2);
    }

    #[test]
    fn default_delimiter_is_one_column() {
        assert_eq!(display_width(DELIMITER), 1);
        assert!(validate_delimiter(DELIMITER).is_ok());
    }

    #[test]
    fn cjk_is_two_columns() {
        assert_eq!(display_width("中"), 2);
        assert_eq!(
            validate_delimiter("中"),
            Err(HrError::InvalidDelimiter { columns: 2 })
        );
    }

    #[test]
    fn combining_mark_adds_nothing() {
        // e + COMBINING ACUTE ACCENT
        assert_eq!(display_width("e\u{301}"), 1);
        assert!(validate_delimiter("e\u{301}").is_ok());
        assert_eq!(display_width("\u{301}"), 0);
    }

    #[test]
    fn zero_width_joiner_alone_is_rejected() {
        assert_eq!(display_width("\u{200D}"), 0);
        assert_eq!(
            validate_delimiter("\u{200D}"),
            Err(HrError::InvalidDelimiter { columns: 0 })
        );
    }

    #[test]
    fn emoji_zwj_sequence_is_rejected() {
        // MAN, ZWJ, WOMAN: at least one wide glyph regardless of ligature handling
        assert!(validate_delimiter("\u{1F468}\u{200D}\u{1F469}").is_err());
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            validate_delimiter(""),
            Err(HrError::InvalidDelimiter { columns: 0 })
        );
    }

    #[test]
    fn multi_char_is_rejected() {
        assert_eq!(
            validate_delimiter("=="),
            Err(HrError::InvalidDelimiter { columns: 2 })
        );
    }
}
