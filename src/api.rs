// api.rs - Idiomatic Rust API for ferroprop.
//
// Entry points a pattern parser calls when it meets `\p` / `\P`, plus a
// small matcher type over a single bracket expression or property escape:
// CompiledAtom, CharClass, CharClassBuilder, Match, FindIter.

use std::ops::Range;

use crate::ccparse::parse_char_class;
use crate::error::PropertyError;
use crate::escparse::scan_property_escape;
use crate::rangeset::RangeSet;
use crate::registry::{global, PropertyRegistry};
use crate::resolve::compile_escape;
use crate::types::*;

// === CodePointMatcher ===

/// Total, side-effect free membership test over code points.
pub trait CodePointMatcher {
    fn matches(&self, code: CodePoint) -> bool;

    fn matches_char(&self, c: char) -> bool {
        self.matches(c as CodePoint)
    }
}

impl CodePointMatcher for RangeSet {
    fn matches(&self, code: CodePoint) -> bool {
        self.contains(code)
    }
}

// === CompiledAtom ===

/// A compiled `\p{...}` / `\P{...}` escape.
///
/// # Examples
///
/// ```
/// use ferroprop::api::{try_compile_property_escape, CodePointMatcher};
///
/// let atom = try_compile_property_escape(true, r"\p{Script=Greek}")
///     .unwrap()
///     .compiled()
///     .unwrap();
/// assert!(atom.matches_char('\u{03C0}'));
/// assert!(!atom.matches_char('a'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledAtom {
    set: RangeSet,
    negated: bool,
    escape_len: usize,
}

impl CompiledAtom {
    /// The matched code points, negation already applied.
    pub fn as_range_set(&self) -> &RangeSet {
        &self.set
    }

    pub fn into_range_set(self) -> RangeSet {
        self.set
    }

    /// Written as `\P{...}`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Bytes of the escape, from the backslash to the closing brace.
    pub fn escape_len(&self) -> usize {
        self.escape_len
    }

    /// Matches no code point at all, as `\P{Any}` does.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl CodePointMatcher for CompiledAtom {
    fn matches(&self, code: CodePoint) -> bool {
        self.set.contains(code)
    }
}

/// Result of offering an escape to the property subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeOutcome {
    Compiled(CompiledAtom),
    /// Not in Unicode mode, or the text is not a `\p` / `\P` escape; the
    /// surrounding parser keeps its own interpretation.
    NotApplicable,
}

impl EscapeOutcome {
    pub fn compiled(self) -> Option<CompiledAtom> {
        match self {
            EscapeOutcome::Compiled(atom) => Some(atom),
            EscapeOutcome::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, EscapeOutcome::Compiled(_))
    }
}

/// Compile the property escape at the start of `raw` against the bundled
/// Unicode tables.
///
/// Text after the closing brace is ignored; [`CompiledAtom::len`] tells how
/// much was consumed.
pub fn try_compile_property_escape(
    unicode_mode: bool,
    raw: &str,
) -> Result<EscapeOutcome, PropertyError> {
    try_compile_property_escape_with(global(), unicode_mode, raw)
}

/// Same as [`try_compile_property_escape`] with an explicit registry.
pub fn try_compile_property_escape_with(
    registry: &PropertyRegistry,
    unicode_mode: bool,
    raw: &str,
) -> Result<EscapeOutcome, PropertyError> {
    if !unicode_mode {
        return Ok(EscapeOutcome::NotApplicable);
    }
    let esc = match scan_property_escape(raw)? {
        Some(esc) => esc,
        None => return Ok(EscapeOutcome::NotApplicable),
    };
    let set = compile_escape(registry, esc.negated, &esc.token)?;
    Ok(EscapeOutcome::Compiled(CompiledAtom {
        set,
        negated: esc.negated,
        escape_len: esc.len,
    }))
}

// === CharClass ===

/// A compiled bracket expression or standalone property escape.
///
/// # Examples
///
/// ```
/// use ferroprop::api::CharClass;
///
/// let cc = CharClass::new(r"[\p{Lu}\d]").unwrap();
/// assert!(cc.is_match("abc X"));
///
/// let m = cc.find("hello 42").unwrap();
/// assert_eq!(m.as_str(), "4");
/// assert_eq!(m.start(), 6);
/// assert_eq!(m.end(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    set: RangeSet,
}

impl CharClass {
    /// Compile `pattern` with Unicode mode on.
    pub fn new(pattern: &str) -> Result<CharClass, PropertyError> {
        CharClassBuilder::new(pattern).build()
    }

    /// Create a [`CharClassBuilder`] for control over compilation.
    pub fn builder(pattern: &str) -> CharClassBuilder<'static> {
        CharClassBuilder::new(pattern)
    }

    pub fn contains(&self, code: CodePoint) -> bool {
        self.set.contains(code)
    }

    /// Check whether any character of `text` is a member.
    pub fn is_match(&self, text: &str) -> bool {
        text.chars().any(|c| self.set.contains_char(c))
    }

    /// Return the first member character in `text`, or `None`.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        text[start..]
            .char_indices()
            .find(|&(_, c)| self.set.contains_char(c))
            .map(|(i, c)| Match {
                text,
                start: start + i,
                end: start + i + c.len_utf8(),
            })
    }

    /// Iterate over every member character in `text`.
    pub fn find_iter<'c, 't>(&'c self, text: &'t str) -> FindIter<'c, 't> {
        FindIter {
            class: self,
            text,
            last_end: 0,
        }
    }

    pub fn as_range_set(&self) -> &RangeSet {
        &self.set
    }

    pub fn into_range_set(self) -> RangeSet {
        self.set
    }
}

impl CodePointMatcher for CharClass {
    fn matches(&self, code: CodePoint) -> bool {
        self.set.contains(code)
    }
}

// === CharClassBuilder ===

/// Builder for compiling a [`CharClass`] with custom options.
///
/// # Examples
///
/// ```
/// use ferroprop::api::CharClass;
///
/// // outside Unicode mode `\p` is the letter `p`
/// let cc = CharClass::builder(r"[\p]").unicode(false).build().unwrap();
/// assert!(cc.is_match("p"));
/// ```
#[derive(Debug, Clone)]
pub struct CharClassBuilder<'r> {
    pattern: String,
    options: CompileOptions,
    registry: &'r PropertyRegistry,
}

impl CharClassBuilder<'static> {
    /// Create a builder with Unicode mode on and the bundled tables.
    pub fn new(pattern: &str) -> Self {
        CharClassBuilder {
            pattern: pattern.to_string(),
            options: CompileOptions::UNICODE,
            registry: global(),
        }
    }
}

impl<'r> CharClassBuilder<'r> {
    /// Enable or disable Unicode mode.
    pub fn unicode(mut self, yes: bool) -> Self {
        self.options.set(CompileOptions::UNICODE, yes);
        self
    }

    /// Replace all compile options.
    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve property names against `registry` instead of the bundled one.
    pub fn registry<'a>(self, registry: &'a PropertyRegistry) -> CharClassBuilder<'a> {
        CharClassBuilder {
            pattern: self.pattern,
            options: self.options,
            registry,
        }
    }

    /// Compile the pattern. It must be exactly one bracket expression or
    /// one property escape.
    pub fn build(self) -> Result<CharClass, PropertyError> {
        let pattern = self.pattern.as_str();
        let (set, len) = if pattern.starts_with('[') {
            let parsed = parse_char_class(pattern, self.options, self.registry)?;
            (parsed.set, parsed.len)
        } else {
            match try_compile_property_escape_with(
                self.registry,
                self.options.unicode_mode(),
                pattern,
            )? {
                EscapeOutcome::Compiled(atom) => {
                    let len = atom.escape_len();
                    (atom.into_range_set(), len)
                }
                EscapeOutcome::NotApplicable => {
                    return Err(PropertyError::from_code(PROPERR_NOT_A_CHAR_CLASS, None));
                }
            }
        };

        if len < pattern.len() {
            return Err(PropertyError::from_code(
                PROPERR_TRAILING_CHARACTERS,
                Some(&pattern[len..]),
            ));
        }
        Ok(CharClass { set })
    }
}

// === Match ===

/// A single matched character referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// The matched character.
    pub fn as_char(&self) -> char {
        self.as_str().chars().next().unwrap_or_default()
    }

    /// Returns the length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === FindIter ===

/// Iterator over all member characters in a text.
pub struct FindIter<'c, 't> {
    class: &'c CharClass,
    text: &'t str,
    last_end: usize,
}

impl<'c, 't> Iterator for FindIter<'c, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        if self.last_end >= self.text.len() {
            return None;
        }
        let m = self.class.find_at(self.text, self.last_end)?;
        self.last_end = m.end;
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_not_applicable_outside_unicode_mode() {
        let outcome = try_compile_property_escape(false, r"\p{L}").unwrap();
        assert_eq!(outcome, EscapeOutcome::NotApplicable);
        // even a malformed escape is left to the caller
        let outcome = try_compile_property_escape(false, r"\p{").unwrap();
        assert!(!outcome.is_applicable());
    }

    #[test]
    fn escape_not_applicable_for_other_text() {
        assert_eq!(
            try_compile_property_escape(true, r"\d").unwrap(),
            EscapeOutcome::NotApplicable
        );
        assert_eq!(
            try_compile_property_escape(true, "abc").unwrap(),
            EscapeOutcome::NotApplicable
        );
    }

    #[test]
    fn escape_compiled() {
        let atom = try_compile_property_escape(true, r"\P{Number}rest")
            .unwrap()
            .compiled()
            .unwrap();
        assert!(atom.is_negated());
        assert_eq!(atom.escape_len(), r"\P{Number}".len());
        assert!(!atom.is_empty());
        assert!(atom.matches_char('A'));
        assert!(!atom.matches_char('1'));
    }

    #[test]
    fn escape_error_is_fatal() {
        let err = try_compile_property_escape(true, r"\p{Greek}").unwrap_err();
        assert_eq!(err.code(), PROPERR_UNKNOWN_SHORTHAND_TOKEN);
        let err = try_compile_property_escape(true, r"\pL").unwrap_err();
        assert!(err.is_syntax_error());
    }

    #[test]
    fn char_class_find() {
        let cc = CharClass::new(r"[\p{Script=Greek}]").unwrap();
        let m = cc.find("abc \u{3c0}r\u{b2}").unwrap();
        assert_eq!(m.as_str(), "\u{3c0}");
        assert_eq!(m.as_char(), '\u{3c0}');
        assert_eq!(m.start(), 4);
        assert_eq!(m.end(), 6);
        assert_eq!(m.range(), 4..6);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn char_class_no_match() {
        let cc = CharClass::new(r"\p{Nd}").unwrap();
        assert!(cc.find("no digits here").is_none());
        assert!(!cc.is_match(""));
    }

    #[test]
    fn char_class_find_iter() {
        let cc = CharClass::new(r"\p{Nd}").unwrap();
        let matches: Vec<&str> = cc.find_iter("1 + 22 = \u{663}").map(|m| m.as_str()).collect();
        assert_eq!(matches, vec!["1", "2", "2", "\u{663}"]);
    }

    #[test]
    fn char_class_trailing_text() {
        let err = CharClass::new(r"[a-z]x").unwrap_err();
        assert_eq!(err.code(), PROPERR_TRAILING_CHARACTERS);
        assert_eq!(
            err.to_string(),
            "invalid char-class: unexpected characters after char-class <x>"
        );
        let err = CharClass::new(r"\p{Lu}\p{Ll}").unwrap_err();
        assert_eq!(err.code(), PROPERR_TRAILING_CHARACTERS);
    }

    #[test]
    fn char_class_not_a_class() {
        let err = CharClass::new("abc").unwrap_err();
        assert_eq!(err.code(), PROPERR_NOT_A_CHAR_CLASS);
        let err = CharClass::builder(r"\p{L}").unicode(false).build().unwrap_err();
        assert_eq!(err.code(), PROPERR_NOT_A_CHAR_CLASS);
    }

    #[test]
    fn builder_options() {
        let cc = CharClass::builder(r"[\u{41}]")
            .options(CompileOptions::UNICODE)
            .build()
            .unwrap();
        assert!(cc.contains(0x41));
        assert!(!cc.contains('u' as u32));
    }

    #[test]
    fn builder_custom_registry() {
        let registry = PropertyRegistry::build(&crate::unicode::Ucd).unwrap();
        let cc = CharClass::builder(r"[\p{ASCII}]")
            .registry(&registry)
            .build()
            .unwrap();
        assert_eq!(cc.as_range_set(), &RangeSet::from_range(0, 0x7F));
    }

    #[test]
    fn matcher_trait_is_uniform() {
        fn first_member(m: &dyn CodePointMatcher, text: &str) -> Option<char> {
            text.chars().find(|&c| m.matches_char(c))
        }
        let cc = CharClass::new(r"[\p{Lu}]").unwrap();
        let atom = try_compile_property_escape(true, r"\p{Lu}")
            .unwrap()
            .compiled()
            .unwrap();
        assert_eq!(first_member(&cc, "abC"), Some('C'));
        assert_eq!(first_member(&atom, "abC"), Some('C'));
        assert_eq!(first_member(atom.as_range_set(), "abC"), Some('C'));
    }
}
