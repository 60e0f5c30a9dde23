// types.rs - Public types and constants.
//
// Code point domain, compile options, error codes and the process-wide
// limits shared by the escape parser and the class parser.

use std::sync::atomic::{AtomicUsize, Ordering};

use bitflags::bitflags;

// ============================================================================
// Code points
// ============================================================================

pub type CodePoint = u32;

pub const MIN_CODE_POINT: CodePoint = 0;
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

// ============================================================================
// Compile options
// ============================================================================

bitflags! {
    /// Per-pattern compile settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompileOptions: u32 {
        /// Interpret `\p{...}` / `\P{...}` as property escapes and enable
        /// `\u{...}` code point escapes.
        const UNICODE = 1;
    }
}

impl CompileOptions {
    pub const NONE: CompileOptions = CompileOptions::empty();

    pub fn unicode_mode(self) -> bool {
        self.contains(CompileOptions::UNICODE)
    }
}

// ============================================================================
// Limits
// ============================================================================

pub const DEFAULT_PROPERTY_NAME_LENGTH_LIMIT: usize = 128;

static PROPERTY_NAME_LENGTH_LIMIT: AtomicUsize =
    AtomicUsize::new(DEFAULT_PROPERTY_NAME_LENGTH_LIMIT);

/// Maximum byte length of the text between the braces of `\p{...}`.
pub fn get_property_name_length_limit() -> usize {
    PROPERTY_NAME_LENGTH_LIMIT.load(Ordering::Relaxed)
}

/// Set the maximum byte length of a property escape body.
/// A limit of 0 restores the default.
pub fn set_property_name_length_limit(len: usize) {
    let len = if len == 0 {
        DEFAULT_PROPERTY_NAME_LENGTH_LIMIT
    } else {
        len
    };
    PROPERTY_NAME_LENGTH_LIMIT.store(len, Ordering::Relaxed);
}

// ============================================================================
// Error codes
// ============================================================================

pub const PROP_NORMAL: i32 = 0;

// escape syntax
pub const PROPERR_END_PATTERN_AT_LEFT_BRACE: i32 = -100;
pub const PROPERR_INVALID_PROPERTY_ESCAPE: i32 = -101;
pub const PROPERR_EMPTY_PROPERTY_NAME: i32 = -102;
pub const PROPERR_EMPTY_PROPERTY_VALUE: i32 = -103;
pub const PROPERR_MULTIPLE_PROPERTY_SEPARATORS: i32 = -104;
pub const PROPERR_INVALID_CHAR_IN_PROPERTY_NAME: i32 = -105;
pub const PROPERR_TOO_LONG_PROPERTY_NAME: i32 = -106;

// char class syntax
pub const PROPERR_PREMATURE_END_OF_CHAR_CLASS: i32 = -110;
pub const PROPERR_EMPTY_RANGE_IN_CHAR_CLASS: i32 = -111;
pub const PROPERR_CHAR_CLASS_VALUE_AT_END_OF_RANGE: i32 = -112;
pub const PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE: i32 = -113;
pub const PROPERR_END_PATTERN_AT_ESCAPE: i32 = -114;
pub const PROPERR_INVALID_ESCAPE: i32 = -115;
pub const PROPERR_INVALID_CODE_POINT_VALUE: i32 = -116;
pub const PROPERR_TRAILING_CHARACTERS: i32 = -117;
pub const PROPERR_NOT_A_CHAR_CLASS: i32 = -118;

// name resolution
pub const PROPERR_UNKNOWN_PROPERTY_NAME: i32 = -223;
pub const PROPERR_UNKNOWN_PROPERTY_VALUE: i32 = -224;
pub const PROPERR_UNKNOWN_SHORTHAND_TOKEN: i32 = -225;

pub fn prop_is_escape_syntax_error(code: i32) -> bool {
    (-109..=-100).contains(&code)
}

pub fn prop_is_class_syntax_error(code: i32) -> bool {
    (-199..=-110).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_is_not_unicode() {
        assert!(!CompileOptions::default().unicode_mode());
        assert!(!CompileOptions::NONE.unicode_mode());
        assert!(CompileOptions::UNICODE.unicode_mode());
    }

    #[test]
    fn error_code_ranges() {
        assert!(prop_is_escape_syntax_error(PROPERR_END_PATTERN_AT_LEFT_BRACE));
        assert!(prop_is_escape_syntax_error(PROPERR_TOO_LONG_PROPERTY_NAME));
        assert!(!prop_is_escape_syntax_error(PROPERR_PREMATURE_END_OF_CHAR_CLASS));
        assert!(prop_is_class_syntax_error(PROPERR_NOT_A_CHAR_CLASS));
        assert!(!prop_is_class_syntax_error(PROPERR_UNKNOWN_PROPERTY_NAME));
    }
}
