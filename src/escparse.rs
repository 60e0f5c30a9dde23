// escparse.rs - Property escape tokenizer.
//
// Recognizes `\p{...}` and `\P{...}` at the start of a pattern slice and
// splits the body into a lone token or a `Name=Value` pair. Only ASCII
// letters, digits and `_` may appear in a name or value; nothing is
// normalized.

use memchr::memchr;

use crate::error::PropertyError;
use crate::types::*;

/// Body of a property escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyToken<'a> {
    /// `\p{Token}`: a binary property or a General_Category value.
    Lone(&'a str),
    /// `\p{Name=Value}`.
    NameValue { name: &'a str, value: &'a str },
}

impl<'a> PropertyToken<'a> {
    /// The text between the braces.
    pub fn to_text(&self) -> String {
        match self {
            PropertyToken::Lone(token) => token.to_string(),
            PropertyToken::NameValue { name, value } => format!("{}={}", name, value),
        }
    }
}

/// A scanned escape and the number of bytes it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEscape<'a> {
    /// `\P` rather than `\p`.
    pub negated: bool,
    pub token: PropertyToken<'a>,
    pub len: usize,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn syntax_error(code: i32, param: Option<&str>) -> PropertyError {
    PropertyError::from_code(code, param)
}

/// Scan a property escape at the start of `text`.
///
/// Returns `Ok(None)` when `text` does not start with `\p` or `\P`. Once
/// that prefix is seen, any deviation from the escape grammar is an error.
pub fn scan_property_escape(text: &str) -> Result<Option<PropertyEscape<'_>>, PropertyError> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'\\' || !matches!(bytes[1], b'p' | b'P') {
        return Ok(None);
    }
    let negated = bytes[1] == b'P';

    if bytes.get(2) != Some(&b'{') {
        return Err(syntax_error(PROPERR_INVALID_PROPERTY_ESCAPE, None));
    }

    let close = memchr(b'}', &bytes[3..])
        .ok_or_else(|| syntax_error(PROPERR_END_PATTERN_AT_LEFT_BRACE, None))?;
    let body = &text[3..3 + close];

    if body.len() > get_property_name_length_limit() {
        return Err(syntax_error(PROPERR_TOO_LONG_PROPERTY_NAME, None));
    }
    if body.is_empty() {
        return Err(syntax_error(PROPERR_EMPTY_PROPERTY_NAME, None));
    }
    if !body.bytes().all(|b| is_name_byte(b) || b == b'=') {
        return Err(syntax_error(PROPERR_INVALID_CHAR_IN_PROPERTY_NAME, Some(body)));
    }

    let token = match body.split_once('=') {
        None => PropertyToken::Lone(body),
        Some((_, value)) if value.contains('=') => {
            return Err(syntax_error(PROPERR_MULTIPLE_PROPERTY_SEPARATORS, Some(body)));
        }
        Some(("", _)) => return Err(syntax_error(PROPERR_EMPTY_PROPERTY_NAME, None)),
        Some((_, "")) => return Err(syntax_error(PROPERR_EMPTY_PROPERTY_VALUE, None)),
        Some((name, value)) => PropertyToken::NameValue { name, value },
    };

    Ok(Some(PropertyEscape {
        negated,
        token,
        len: 3 + close + 1,
    }))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> PropertyEscape<'_> {
        scan_property_escape(text).unwrap().unwrap()
    }

    fn scan_err(text: &str) -> i32 {
        scan_property_escape(text).unwrap_err().code()
    }

    #[test]
    fn lone_token() {
        let esc = scan("\\p{Lu}");
        assert!(!esc.negated);
        assert_eq!(esc.token, PropertyToken::Lone("Lu"));
        assert_eq!(esc.len, 6);
    }

    #[test]
    fn name_value_negated() {
        let esc = scan("\\P{Script=Greek}abc");
        assert!(esc.negated);
        assert_eq!(
            esc.token,
            PropertyToken::NameValue {
                name: "Script",
                value: "Greek"
            }
        );
        assert_eq!(esc.len, "\\P{Script=Greek}".len());
        assert_eq!(esc.token.to_text(), "Script=Greek");
    }

    #[test]
    fn not_an_escape() {
        assert_eq!(scan_property_escape("abc").unwrap(), None);
        assert_eq!(scan_property_escape("\\d").unwrap(), None);
        assert_eq!(scan_property_escape("\\").unwrap(), None);
        assert_eq!(scan_property_escape("").unwrap(), None);
    }

    #[test]
    fn missing_brace() {
        assert_eq!(scan_err("\\pL"), PROPERR_INVALID_PROPERTY_ESCAPE);
        assert_eq!(scan_err("\\P"), PROPERR_INVALID_PROPERTY_ESCAPE);
        assert_eq!(scan_err("\\p(L)"), PROPERR_INVALID_PROPERTY_ESCAPE);
    }

    #[test]
    fn unterminated() {
        assert_eq!(scan_err("\\p{L"), PROPERR_END_PATTERN_AT_LEFT_BRACE);
        assert_eq!(scan_err("\\p{"), PROPERR_END_PATTERN_AT_LEFT_BRACE);
        assert_eq!(scan_err("\\p{L]"), PROPERR_END_PATTERN_AT_LEFT_BRACE);
    }

    #[test]
    fn empty_parts() {
        assert_eq!(scan_err("\\p{}"), PROPERR_EMPTY_PROPERTY_NAME);
        assert_eq!(scan_err("\\p{=L}"), PROPERR_EMPTY_PROPERTY_NAME);
        assert_eq!(scan_err("\\p{gc=}"), PROPERR_EMPTY_PROPERTY_VALUE);
    }

    #[test]
    fn multiple_separators() {
        assert_eq!(scan_err("\\p{gc=L=x}"), PROPERR_MULTIPLE_PROPERTY_SEPARATORS);
        assert_eq!(scan_err("\\p{a==b}"), PROPERR_MULTIPLE_PROPERTY_SEPARATORS);
    }

    #[test]
    fn invalid_characters() {
        for text in [
            "\\p{gc:L}",
            "\\p{Script = Greek}",
            "\\p{ L}",
            "\\p{Line-Break=AL}",
            "\\p{L&}",
            "\\p{\u{e9}}",
            "\\p{Lu\t}",
        ] {
            assert_eq!(scan_err(text), PROPERR_INVALID_CHAR_IN_PROPERTY_NAME, "{}", text);
        }
    }

    #[test]
    fn invalid_character_message_names_body() {
        let err = scan_property_escape("\\p{gc:L}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid property escape: invalid char in property name {gc:L}"
        );
    }

    #[test]
    fn body_longer_than_limit() {
        let body = "a".repeat(DEFAULT_PROPERTY_NAME_LENGTH_LIMIT + 1);
        let text = format!("\\p{{{}}}", body);
        assert_eq!(scan_err(&text), PROPERR_TOO_LONG_PROPERTY_NAME);
    }
}
