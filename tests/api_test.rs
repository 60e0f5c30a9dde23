// api_test.rs - Integration tests for the idiomatic Rust API.

use ferroprop::api::{try_compile_property_escape_with, CharClassBuilder};
use ferroprop::error::PropertyError;
use ferroprop::prelude::*;
use ferroprop::registry::PropertyRegistry;
use ferroprop::types::*;
use ferroprop::unicode::Ucd;

// === CharClass::new ===

#[test]
fn simple_class() {
    let cc = CharClass::new(r"[a-c]").unwrap();
    let m = cc.find("xyz b").unwrap();
    assert_eq!(m.as_str(), "b");
}

#[test]
fn unicode_property_class() {
    let cc = CharClass::new(r"\p{Script=Hiragana}").unwrap();
    let matched: String = cc.find_iter("hello \u{305b}\u{304b}\u{3044} world").map(|m| m.as_str()).collect();
    assert_eq!(matched, "\u{305b}\u{304b}\u{3044}");
}

#[test]
fn no_match_returns_none() {
    let cc = CharClass::new(r"[xyz]").unwrap();
    assert!(cc.find("abc").is_none());
}

#[test]
fn empty_class_matches_nothing() {
    let cc = CharClass::new(r"[]").unwrap();
    assert!(!cc.is_match("anything at all"));
    assert!(cc.as_range_set().is_empty());
}

#[test]
fn negated_empty_class_matches_everything() {
    let cc = CharClass::new(r"[^]").unwrap();
    assert!(cc.contains(0));
    assert!(cc.contains(MAX_CODE_POINT));
}

#[test]
fn invalid_pattern_syntax_error() {
    let err = CharClass::new(r"[\p{Script:Greek}]").unwrap_err();
    match err {
        PropertyError::MalformedEscapeSyntax { code, .. } => {
            assert_eq!(code, PROPERR_INVALID_CHAR_IN_PROPERTY_NAME)
        }
        other => panic!("expected MalformedEscapeSyntax, got {:?}", other),
    }
}

#[test]
fn invalid_class_error() {
    let err = CharClass::new(r"[a-").unwrap_err();
    assert!(matches!(err, PropertyError::MalformedClass { .. }));
    assert!(err.is_syntax_error());
}

// === CharClass::is_match ===

#[test]
fn is_match_true() {
    let cc = CharClass::new(r"\p{Lu}").unwrap();
    assert!(cc.is_match("hello World"));
}

#[test]
fn is_match_false() {
    let cc = CharClass::new(r"\p{Lu}").unwrap();
    assert!(!cc.is_match("hello world"));
}

// === CharClass::find ===

#[test]
fn find_start_end_range() {
    let cc = CharClass::new(r"\p{Nd}").unwrap();
    let m = cc.find("foo7baz").unwrap();
    assert_eq!(m.start(), 3);
    assert_eq!(m.end(), 4);
    assert_eq!(m.range(), 3..4);
    assert_eq!(m.len(), 1);
    assert!(!m.is_empty());
    assert_eq!(m.as_char(), '7');
}

#[test]
fn find_multibyte_offsets() {
    let cc = CharClass::new(r"\p{Emoji_Presentation}").unwrap();
    let m = cc.find("ok \u{1F600}!").unwrap();
    assert_eq!(m.start(), 3);
    assert_eq!(m.end(), 7);
}

#[test]
fn find_iter_all_members() {
    let cc = CharClass::new(r"[\p{Lu}\d]").unwrap();
    let found: Vec<(usize, &str)> = cc
        .find_iter("aB1c\u{e9}D")
        .map(|m| (m.start(), m.as_str()))
        .collect();
    assert_eq!(found, vec![(1, "B"), (2, "1"), (6, "D")]);
}

#[test]
fn find_iter_empty_text() {
    let cc = CharClass::new(r"[^]").unwrap();
    assert_eq!(cc.find_iter("").count(), 0);
}

// === CharClassBuilder ===

#[test]
fn builder_unicode_off() {
    let cc = CharClass::builder(r"[\P]").unicode(false).build().unwrap();
    assert!(cc.is_match("P"));
    assert!(!cc.is_match("p"));
}

#[test]
fn builder_unicode_off_rejects_standalone_escape() {
    let err = CharClassBuilder::new(r"\p{L}").unicode(false).build().unwrap_err();
    assert_eq!(err.code(), PROPERR_NOT_A_CHAR_CLASS);
}

#[test]
fn builder_with_registry() {
    let registry = PropertyRegistry::build(&Ucd).unwrap();
    let cc = CharClass::builder(r"[^\p{ASCII}]")
        .registry(&registry)
        .build()
        .unwrap();
    assert!(!cc.contains(0x7F));
    assert!(cc.contains(0x80));
}

#[test]
fn builder_options_none() {
    let cc = CharClass::builder(r"[\x41]")
        .options(CompileOptions::NONE)
        .build()
        .unwrap();
    assert!(cc.contains(0x41));
}

// === try_compile_property_escape ===

#[test]
fn escape_outcomes() {
    assert!(try_compile_property_escape(true, r"\p{L}").unwrap().is_applicable());
    assert!(!try_compile_property_escape(false, r"\p{L}").unwrap().is_applicable());
    assert!(!try_compile_property_escape(true, r"\w").unwrap().is_applicable());
}

#[test]
fn escape_with_explicit_registry() {
    let registry = PropertyRegistry::build(&Ucd).unwrap();
    let atom = try_compile_property_escape_with(&registry, true, r"\P{Any}")
        .unwrap()
        .compiled()
        .unwrap();
    assert!(atom.as_range_set().is_empty());
    assert!(!atom.matches(0x41));
}

#[test]
fn escape_consumes_only_the_escape() {
    let atom = try_compile_property_escape(true, r"\p{Lu}+")
        .unwrap()
        .compiled()
        .unwrap();
    assert_eq!(atom.escape_len(), 6);
}

#[test]
fn negated_any_matches_nothing() {
    let atom = try_compile_property_escape(true, r"\P{Any}")
        .unwrap()
        .compiled()
        .unwrap();
    assert!(atom.is_empty());
    assert_eq!(atom.escape_len(), 7);
    assert!(!atom.matches(0));
    assert!(!atom.matches(MAX_CODE_POINT));
}

#[test]
fn error_display_and_code() {
    let err = try_compile_property_escape(true, r"\p{Line_Break=al}").unwrap_err();
    assert_eq!(err.code(), PROPERR_UNKNOWN_PROPERTY_VALUE);
    assert_eq!(
        err.to_string(),
        "invalid character property value {Line_Break=al}"
    );
    let err: Box<dyn std::error::Error> = Box::new(err);
    assert!(err.to_string().contains("Line_Break=al"));
}

// === RangeSet through the prelude ===

#[test]
fn range_set_matcher() {
    let set: RangeSet = vec![CodeRange::new(0x41, 0x5A)].into_iter().collect();
    assert!(set.matches_char('Q'));
    assert!(!set.matches_char('q'));
}
