// errmsg.rs - Error code to string conversion.
//
// Maps error codes to human-readable messages. Codes whose message names
// the offending text carry a `%n` placeholder.

use crate::types::*;

/// Get the format string for an error code.
pub fn error_code_to_format(code: i32) -> &'static str {
    match code {
        PROP_NORMAL => "success",
        PROPERR_END_PATTERN_AT_LEFT_BRACE => "end pattern at left brace",
        PROPERR_INVALID_PROPERTY_ESCAPE => "invalid property escape (expected '{')",
        PROPERR_EMPTY_PROPERTY_NAME => "property name is empty",
        PROPERR_EMPTY_PROPERTY_VALUE => "property value is empty",
        PROPERR_MULTIPLE_PROPERTY_SEPARATORS => "multiple '=' in property escape {%n}",
        PROPERR_INVALID_CHAR_IN_PROPERTY_NAME => "invalid char in property name {%n}",
        PROPERR_TOO_LONG_PROPERTY_NAME => "too long property name",
        PROPERR_PREMATURE_END_OF_CHAR_CLASS => "premature end of char-class",
        PROPERR_EMPTY_RANGE_IN_CHAR_CLASS => "empty range in char class",
        PROPERR_CHAR_CLASS_VALUE_AT_END_OF_RANGE => "char-class value at end of range",
        PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE => "char-class value at start of range",
        PROPERR_END_PATTERN_AT_ESCAPE => "end pattern at escape",
        PROPERR_INVALID_ESCAPE => "invalid escape \\%n",
        PROPERR_INVALID_CODE_POINT_VALUE => "invalid code point value",
        PROPERR_TRAILING_CHARACTERS => "unexpected characters after char-class <%n>",
        PROPERR_NOT_A_CHAR_CLASS => "pattern is not a char-class or property escape",
        PROPERR_UNKNOWN_PROPERTY_NAME => "invalid character property name {%n}",
        PROPERR_UNKNOWN_PROPERTY_VALUE => "invalid character property value {%n}",
        PROPERR_UNKNOWN_SHORTHAND_TOKEN => "invalid character property name or value {%n}",
        _ => "undefined error code",
    }
}

/// Check if an error code requires a parameter (name/pattern text).
pub fn is_error_code_needs_param(code: i32) -> bool {
    matches!(
        code,
        PROPERR_MULTIPLE_PROPERTY_SEPARATORS
            | PROPERR_INVALID_CHAR_IN_PROPERTY_NAME
            | PROPERR_INVALID_ESCAPE
            | PROPERR_TRAILING_CHARACTERS
            | PROPERR_UNKNOWN_PROPERTY_NAME
            | PROPERR_UNKNOWN_PROPERTY_VALUE
            | PROPERR_UNKNOWN_SHORTHAND_TOKEN
    )
}

/// Convert an error code to a human-readable string.
/// For parameterized errors, pass the offending text in `param`.
pub fn error_code_to_str(code: i32, param: Option<&str>) -> String {
    let fmt = error_code_to_format(code);

    if is_error_code_needs_param(code) {
        match param {
            // Control and non-ASCII characters are shown escaped
            Some(par) => {
                let par_str = par
                    .chars()
                    .map(|c| {
                        if c.is_ascii_graphic() || c == ' ' {
                            c.to_string()
                        } else {
                            format!("\\u{{{:x}}}", c as u32)
                        }
                    })
                    .collect::<String>();
                fmt.replace("%n", &par_str)
            }
            None => fmt.replace("%n", ""),
        }
    } else {
        fmt.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated() {
        assert_eq!(
            error_code_to_str(PROPERR_END_PATTERN_AT_LEFT_BRACE, None),
            "end pattern at left brace"
        );
    }

    #[test]
    fn test_undefined_error() {
        assert_eq!(error_code_to_str(-9999, None), "undefined error code");
    }

    #[test]
    fn test_parameterized_error() {
        let msg = error_code_to_str(PROPERR_UNKNOWN_PROPERTY_NAME, Some("Scirpt"));
        assert_eq!(msg, "invalid character property name {Scirpt}");
    }

    #[test]
    fn test_parameterized_error_escapes_non_ascii() {
        let msg = error_code_to_str(PROPERR_INVALID_CHAR_IN_PROPERTY_NAME, Some("L\u{e9}"));
        assert_eq!(msg, "invalid char in property name {L\\u{e9}}");
    }

    #[test]
    fn test_parameterized_error_no_param() {
        let msg = error_code_to_str(PROPERR_UNKNOWN_SHORTHAND_TOKEN, None);
        assert_eq!(msg, "invalid character property name or value {}");
    }

    #[test]
    fn test_needs_param() {
        assert!(is_error_code_needs_param(PROPERR_UNKNOWN_PROPERTY_VALUE));
        assert!(!is_error_code_needs_param(PROPERR_EMPTY_PROPERTY_NAME));
        assert!(!is_error_code_needs_param(PROP_NORMAL));
    }
}
