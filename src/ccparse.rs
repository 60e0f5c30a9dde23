// ccparse.rs - Bracket expression parsing.
//
// Collects literals, ranges, class escapes and property escapes into one
// RangeSet. A negated class is complemented once, after every member has
// been unioned.

use crate::error::PropertyError;
use crate::escparse::scan_property_escape;
use crate::rangeset::RangeSet;
use crate::registry::PropertyRegistry;
use crate::resolve::compile_escape;
use crate::types::*;

// ============================================================================
// Class escape sets
// ============================================================================

/// `\d`
pub fn digit_set() -> RangeSet {
    RangeSet::from_range('0' as u32, '9' as u32)
}

/// `\w`
pub fn word_set() -> RangeSet {
    RangeSet::from_table(&[(0x30, 0x39), (0x41, 0x5A), (0x5F, 0x5F), (0x61, 0x7A)])
}

/// `\s`: white space and line terminators.
pub fn space_set() -> RangeSet {
    RangeSet::from_table(&[
        (0x0009, 0x000D),
        (0x0020, 0x0020),
        (0x00A0, 0x00A0),
        (0x1680, 0x1680),
        (0x2000, 0x200A),
        (0x2028, 0x2029),
        (0x202F, 0x202F),
        (0x205F, 0x205F),
        (0x3000, 0x3000),
        (0xFEFF, 0xFEFF),
    ])
}

fn is_syntax_char(c: char) -> bool {
    matches!(
        c,
        '^' | '$' | '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '/' | '-'
    )
}

fn class_error(code: i32, param: Option<&str>) -> PropertyError {
    PropertyError::from_code(code, param)
}

// ============================================================================
// Class builder
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassState {
    /// Nothing pushed yet.
    Start,
    /// A value is pending and may still become a range start.
    Value,
    /// A range operator follows the pending literal.
    Range,
    /// The last member was a finished range.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingValue {
    None,
    Char(CodePoint),
    /// A set member, already unioned; it can't start a range.
    Set,
}

/// Incremental builder for the members of one bracket expression.
///
/// Literals stay pending until the next member shows whether they start a
/// range.
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    set: RangeSet,
    state: ClassState,
    pending: PendingValue,
}

impl Default for ClassBuilder {
    fn default() -> Self {
        ClassBuilder::new()
    }
}

impl ClassBuilder {
    pub fn new() -> ClassBuilder {
        ClassBuilder {
            set: RangeSet::new(),
            state: ClassState::Start,
            pending: PendingValue::None,
        }
    }

    fn flush_pending(&mut self) {
        if let PendingValue::Char(code) = self.pending {
            self.set.add_code_point(code);
        }
        self.pending = PendingValue::None;
    }

    /// Push a literal code point.
    pub fn push_char(&mut self, code: CodePoint) -> Result<(), PropertyError> {
        match self.state {
            ClassState::Range => {
                let from = match self.pending {
                    PendingValue::Char(from) => from,
                    _ => return Err(class_error(PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE, None)),
                };
                if from > code {
                    return Err(class_error(PROPERR_EMPTY_RANGE_IN_CHAR_CLASS, None));
                }
                self.set.add_range(from, code);
                self.pending = PendingValue::None;
                self.state = ClassState::Complete;
            }
            ClassState::Value => {
                self.flush_pending();
                self.pending = PendingValue::Char(code);
            }
            ClassState::Start | ClassState::Complete => {
                self.pending = PendingValue::Char(code);
                self.state = ClassState::Value;
            }
        }
        Ok(())
    }

    /// Push an unescaped `-` that is not directly before the closing `]`.
    pub fn push_dash(&mut self) -> Result<(), PropertyError> {
        match (self.state, self.pending) {
            (ClassState::Value, PendingValue::Char(_)) => {
                self.state = ClassState::Range;
                Ok(())
            }
            (ClassState::Value, _) => Err(class_error(PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE, None)),
            // leading dash, dash after a range, or `!--` ending a range
            _ => self.push_char('-' as u32),
        }
    }

    /// Push a class escape or property escape member.
    pub fn push_set(&mut self, set: &RangeSet) -> Result<(), PropertyError> {
        if self.state == ClassState::Range {
            return Err(class_error(PROPERR_CHAR_CLASS_VALUE_AT_END_OF_RANGE, None));
        }
        self.flush_pending();
        self.set.union_with(set);
        self.pending = PendingValue::Set;
        self.state = ClassState::Value;
        Ok(())
    }

    /// Flush the pending member, then complement once if `negated`.
    pub fn finish(mut self, negated: bool) -> RangeSet {
        self.flush_pending();
        // a dangling range operator is a literal dash
        if self.state == ClassState::Range {
            self.set.add_code_point('-' as u32);
        }
        if negated {
            self.set.complement()
        } else {
            self.set
        }
    }
}

// ============================================================================
// Bracket expression parser
// ============================================================================

/// A parsed bracket expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass {
    /// Final members, complement already applied.
    pub set: RangeSet,
    /// The class was written `[^...]`.
    pub negated: bool,
    /// Bytes consumed, up to and including the closing `]`.
    pub len: usize,
}

struct ClassScanner<'a> {
    text: &'a str,
    pos: usize,
    unicode: bool,
    registry: &'a PropertyRegistry,
}

impl<'a> ClassScanner<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume exactly `count` hex digits, or nothing.
    fn scan_hex(&mut self, count: usize) -> Option<CodePoint> {
        let digits = self.text.get(self.pos..self.pos + count)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        self.pos += count;
        Some(value)
    }

    fn invalid_escape(&self, c: char) -> PropertyError {
        let mut buf = [0u8; 4];
        class_error(PROPERR_INVALID_ESCAPE, Some(&*c.encode_utf8(&mut buf)))
    }

    /// `\u{...}`, after the `u`.
    fn scan_braced_code_point(&mut self) -> Result<CodePoint, PropertyError> {
        let rest = &self.text[self.pos + 1..];
        let close = rest
            .find('}')
            .ok_or_else(|| self.invalid_escape('u'))?;
        let digits = &rest[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.invalid_escape('u'));
        }
        let value = digits
            .trim_start_matches('0')
            .chars()
            .try_fold(0u32, |acc, d| {
                let v = acc.checked_mul(16)?.checked_add(d.to_digit(16)?)?;
                (v <= MAX_CODE_POINT).then_some(v)
            })
            .ok_or_else(|| class_error(PROPERR_INVALID_CODE_POINT_VALUE, None))?;
        self.pos += 1 + close + 1;
        Ok(value)
    }

    /// `\uHHHH`, after the `u`. In Unicode mode an escaped surrogate pair
    /// combines into one code point.
    fn scan_u_escape(&mut self) -> Option<CodePoint> {
        let lead = self.scan_hex(4)?;
        if self.unicode && (0xD800..=0xDBFF).contains(&lead) && self.text[self.pos..].starts_with("\\u") {
            let save = self.pos;
            self.pos += 2;
            match self.scan_hex(4) {
                Some(trail) if (0xDC00..=0xDFFF).contains(&trail) => {
                    return Some(0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00));
                }
                _ => self.pos = save,
            }
        }
        Some(lead)
    }

    /// Handle one escape; `self.pos` is just past the backslash.
    fn parse_escape(&mut self, builder: &mut ClassBuilder) -> Result<(), PropertyError> {
        let start = self.pos - 1;
        let c = self
            .next_char()
            .ok_or_else(|| class_error(PROPERR_END_PATTERN_AT_ESCAPE, None))?;

        match c {
            'p' | 'P' if self.unicode => {
                let esc = scan_property_escape(&self.text[start..])?
                    .ok_or_else(|| self.invalid_escape(c))?;
                self.pos = start + esc.len;
                let set = compile_escape(self.registry, esc.negated, &esc.token)?;
                builder.push_set(&set)
            }
            'd' => builder.push_set(&digit_set()),
            'D' => builder.push_set(&digit_set().complement()),
            's' => builder.push_set(&space_set()),
            'S' => builder.push_set(&space_set().complement()),
            'w' => builder.push_set(&word_set()),
            'W' => builder.push_set(&word_set().complement()),
            'n' => builder.push_char(0x0A),
            'r' => builder.push_char(0x0D),
            't' => builder.push_char(0x09),
            'f' => builder.push_char(0x0C),
            'v' => builder.push_char(0x0B),
            'b' => builder.push_char(0x08),
            '0' => {
                if self.unicode && self.peek().is_some_and(|d| d.is_ascii_digit()) {
                    return Err(self.invalid_escape('0'));
                }
                builder.push_char(0)
            }
            'c' => match self.peek() {
                Some(l) if l.is_ascii_alphabetic() => {
                    self.pos += 1;
                    builder.push_char(l as u32 % 32)
                }
                _ if self.unicode => Err(self.invalid_escape('c')),
                _ => builder.push_char('c' as u32),
            },
            'x' => match self.scan_hex(2) {
                Some(code) => builder.push_char(code),
                None if self.unicode => Err(self.invalid_escape('x')),
                None => builder.push_char('x' as u32),
            },
            'u' if self.unicode && self.peek() == Some('{') => {
                let code = self.scan_braced_code_point()?;
                builder.push_char(code)
            }
            'u' => match self.scan_u_escape() {
                Some(code) => builder.push_char(code),
                None if self.unicode => Err(self.invalid_escape('u')),
                None => builder.push_char('u' as u32),
            },
            c if is_syntax_char(c) => builder.push_char(c as u32),
            c if self.unicode => Err(self.invalid_escape(c)),
            c => builder.push_char(c as u32),
        }
    }
}

/// Parse one bracket expression at the start of `pattern`.
///
/// Trailing text after the closing `]` is left for the caller; `len`
/// reports how far parsing got.
pub fn parse_char_class(
    pattern: &str,
    options: CompileOptions,
    registry: &PropertyRegistry,
) -> Result<ParsedClass, PropertyError> {
    if !pattern.starts_with('[') {
        return Err(class_error(PROPERR_NOT_A_CHAR_CLASS, None));
    }
    let mut scanner = ClassScanner {
        text: pattern,
        pos: 1,
        unicode: options.unicode_mode(),
        registry,
    };
    let negated = scanner.peek() == Some('^');
    if negated {
        scanner.pos += 1;
    }

    let mut builder = ClassBuilder::new();
    loop {
        let c = scanner
            .next_char()
            .ok_or_else(|| class_error(PROPERR_PREMATURE_END_OF_CHAR_CLASS, None))?;
        match c {
            ']' => break,
            '\\' => scanner.parse_escape(&mut builder)?,
            '-' if scanner.peek() == Some(']') => builder.push_char('-' as u32)?,
            '-' => builder.push_dash()?,
            c => builder.push_char(c as u32)?,
        }
    }

    Ok(ParsedClass {
        set: builder.finish(negated),
        negated,
        len: scanner.pos,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::global;

    fn parse(pattern: &str) -> RangeSet {
        parse_char_class(pattern, CompileOptions::UNICODE, global())
            .unwrap()
            .set
    }

    fn parse_legacy(pattern: &str) -> RangeSet {
        parse_char_class(pattern, CompileOptions::NONE, global())
            .unwrap()
            .set
    }

    fn parse_err(pattern: &str) -> i32 {
        parse_char_class(pattern, CompileOptions::UNICODE, global())
            .unwrap_err()
            .code()
    }

    fn pairs(set: &RangeSet) -> Vec<(u32, u32)> {
        set.iter().map(|r| (r.lo(), r.hi())).collect()
    }

    #[test]
    fn builder_state_machine() {
        let mut b = ClassBuilder::new();
        b.push_char('a' as u32).unwrap();
        b.push_dash().unwrap();
        b.push_char('c' as u32).unwrap();
        b.push_char('x' as u32).unwrap();
        let set = b.finish(false);
        assert_eq!(pairs(&set), vec![(0x61, 0x63), (0x78, 0x78)]);
    }

    #[test]
    fn builder_set_cannot_end_range() {
        let mut b = ClassBuilder::new();
        b.push_char('a' as u32).unwrap();
        b.push_dash().unwrap();
        let err = b.push_set(&digit_set()).unwrap_err();
        assert_eq!(err.code(), PROPERR_CHAR_CLASS_VALUE_AT_END_OF_RANGE);
    }

    #[test]
    fn builder_set_cannot_start_range() {
        let mut b = ClassBuilder::new();
        b.push_set(&digit_set()).unwrap();
        let err = b.push_dash().unwrap_err();
        assert_eq!(err.code(), PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE);
    }

    #[test]
    fn literals_and_ranges() {
        assert_eq!(pairs(&parse("[a-z0-9_]")), vec![(0x30, 0x39), (0x5F, 0x5F), (0x61, 0x7A)]);
        assert_eq!(pairs(&parse("[abc]")), vec![(0x61, 0x63)]);
    }

    #[test]
    fn empty_and_negated_empty() {
        assert!(parse("[]").is_empty());
        assert!(parse("[^]").is_full());
    }

    #[test]
    fn literal_dashes() {
        assert!(parse("[-a]").contains('-' as u32));
        assert!(parse("[a-]").contains('-' as u32));
        let set = parse("[a-c-e]");
        assert_eq!(pairs(&set), vec![(0x2D, 0x2D), (0x61, 0x63), (0x65, 0x65)]);
        assert!(parse("[\\d-]").contains('-' as u32));
        assert!(parse("[a\\-z]").contains('-' as u32));
        assert!(!parse("[a\\-z]").contains('b' as u32));
    }

    #[test]
    fn reversed_range() {
        assert_eq!(parse_err("[z-a]"), PROPERR_EMPTY_RANGE_IN_CHAR_CLASS);
    }

    #[test]
    fn property_escape_members() {
        let set = parse("[\\p{Script=Greek}a-c]");
        assert!(set.contains(0x03C0));
        assert!(set.contains('b' as u32));
        assert!(!set.contains('d' as u32));
    }

    #[test]
    fn negation_applies_once() {
        let set = parse("[^\\p{Lu}\\P{Lu}]");
        assert!(set.is_empty());
        let set = parse("[^\\P{Lu}]");
        assert_eq!(&set, global().resolve_shorthand("Lu").unwrap());
    }

    #[test]
    fn property_escape_cannot_bound_range() {
        assert_eq!(parse_err("[\\p{Lu}-z]"), PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE);
        assert_eq!(parse_err("[a-\\p{Lu}]"), PROPERR_CHAR_CLASS_VALUE_AT_END_OF_RANGE);
        assert_eq!(parse_err("[\\d-z]"), PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE);
    }

    #[test]
    fn unterminated_property_escape_in_class() {
        assert_eq!(parse_err("[\\p{L]"), PROPERR_END_PATTERN_AT_LEFT_BRACE);
    }

    #[test]
    fn property_errors_propagate() {
        assert_eq!(parse_err("[\\p{IsGreek}]"), PROPERR_UNKNOWN_SHORTHAND_TOKEN);
        assert_eq!(parse_err("[\\pL]"), PROPERR_INVALID_PROPERTY_ESCAPE);
    }

    #[test]
    fn premature_end() {
        assert_eq!(parse_err("[abc"), PROPERR_PREMATURE_END_OF_CHAR_CLASS);
        assert_eq!(parse_err("["), PROPERR_PREMATURE_END_OF_CHAR_CLASS);
        assert_eq!(parse_err("[a\\"), PROPERR_END_PATTERN_AT_ESCAPE);
        assert_eq!(parse_err("abc"), PROPERR_NOT_A_CHAR_CLASS);
    }

    #[test]
    fn class_escapes() {
        let set = parse("[\\w]");
        assert_eq!(set, word_set());
        let set = parse("[\\D]");
        assert!(!set.contains('5' as u32));
        assert!(set.contains('a' as u32));
        let set = parse("[\\s]");
        assert!(set.contains(0x3000));
        assert!(set.contains('\n' as u32));
    }

    #[test]
    fn control_and_hex_escapes() {
        assert_eq!(pairs(&parse("[\\n\\t]")), vec![(0x09, 0x0A)]);
        assert_eq!(pairs(&parse("[\\x41-\\x43]")), vec![(0x41, 0x43)]);
        assert_eq!(pairs(&parse("[\\u0391]")), vec![(0x391, 0x391)]);
        assert_eq!(pairs(&parse("[\\u{1F600}]")), vec![(0x1F600, 0x1F600)]);
        assert_eq!(pairs(&parse("[\\uD83D\\uDE00]")), vec![(0x1F600, 0x1F600)]);
        assert_eq!(pairs(&parse("[\\cJ]")), vec![(0x0A, 0x0A)]);
        assert_eq!(pairs(&parse("[\\b\\0]")), vec![(0x00, 0x00), (0x08, 0x08)]);
    }

    #[test]
    fn code_point_out_of_range() {
        assert_eq!(parse_err("[\\u{110000}]"), PROPERR_INVALID_CODE_POINT_VALUE);
        assert_eq!(parse_err("[\\u{FFFFFFFFF}]"), PROPERR_INVALID_CODE_POINT_VALUE);
        assert_eq!(pairs(&parse("[\\u{0010FFFF}]")), vec![(0x10FFFF, 0x10FFFF)]);
        assert_eq!(parse_err("[\\u{}]"), PROPERR_INVALID_ESCAPE);
        assert_eq!(parse_err("[\\u{12]"), PROPERR_INVALID_ESCAPE);
    }

    #[test]
    fn unknown_escape_in_unicode_mode() {
        assert_eq!(parse_err("[\\q]"), PROPERR_INVALID_ESCAPE);
        assert_eq!(parse_err("[\\xZ]"), PROPERR_INVALID_ESCAPE);
        let err = parse_char_class("[\\q]", CompileOptions::UNICODE, global()).unwrap_err();
        assert_eq!(err.to_string(), "invalid char-class: invalid escape \\q");
    }

    #[test]
    fn legacy_mode_identity_escapes() {
        let set = parse_legacy("[\\p{L}]");
        assert_eq!(
            pairs(&set),
            vec![(0x4C, 0x4C), (0x70, 0x70), (0x7B, 0x7B), (0x7D, 0x7D)]
        );
        assert_eq!(pairs(&parse_legacy("[\\q]")), vec![(0x71, 0x71)]);
        assert_eq!(pairs(&parse_legacy("[\\u{41}]")), vec![(0x31, 0x31), (0x34, 0x34), (0x75, 0x75), (0x7B, 0x7B), (0x7D, 0x7D)]);
    }

    #[test]
    fn syntax_char_identity_escapes() {
        assert_eq!(pairs(&parse("[\\]\\[]")), vec![(0x5B, 0x5B), (0x5D, 0x5D)]);
        assert!(parse("[\\^]").contains('^' as u32));
        assert!(parse("[\\/]").contains('/' as u32));
    }

    #[test]
    fn reports_consumed_length() {
        let parsed = parse_char_class("[^a-z]rest", CompileOptions::UNICODE, global()).unwrap();
        assert!(parsed.negated);
        assert_eq!(parsed.len, 6);
    }

    #[test]
    fn non_ascii_literals() {
        let set = parse("[\u{3b1}-\u{3c9}\u{1F600}]");
        assert!(set.contains(0x3C0));
        assert!(set.contains(0x1F600));
        assert!(!set.contains('a' as u32));
    }
}
