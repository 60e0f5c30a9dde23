// compat_property.rs - Property escape conformance tests.
//
// Uses the same helpers as the regex test suites:
//   x(pattern, string, from, to)   -> search, expect a member at from..to
//   n(pattern, string)             -> search, expect no member
//   e(pattern, code)               -> compile, expect error `code`
//
// Every pattern is compiled with Unicode mode on.

use ferroprop::api::CharClass;
use ferroprop::types::*;

fn compile(pattern: &str) -> CharClass {
    CharClass::new(pattern)
        .unwrap_or_else(|e| panic!("compile failed for {:?}: error {}", pattern, e))
}

fn x(pattern: &str, input: &str, from: usize, to: usize) {
    let cc = compile(pattern);
    let m = cc.find(input).unwrap_or_else(|| {
        panic!("x: expected match for {:?} against {:?}", pattern, input)
    });
    assert_eq!(
        (m.start(), m.end()),
        (from, to),
        "x: wrong span for {:?} against {:?}",
        pattern,
        input
    );
}

fn n(pattern: &str, input: &str) {
    let cc = compile(pattern);
    assert!(
        cc.find(input).is_none(),
        "n: expected no match for {:?} against {:?}",
        pattern,
        input
    );
}

fn e(pattern: &str, code: i32) {
    match CharClass::new(pattern) {
        Ok(_) => panic!("e: expected error {} for {:?}, compiled fine", code, pattern),
        Err(err) => assert_eq!(err.code(), code, "e: wrong error for {:?}: {}", pattern, err),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn script_greek() {
    x(r"\p{Script=Greek}", "\u{3c0}", 0, 2);
    n(r"\p{Script=Greek}", "a");
    x(r"\p{sc=Grek}", "a\u{3c0}", 1, 3);
}

#[test]
fn shorthand_number() {
    x(r"\p{Number}", "1", 0, 1);
    x(r"\P{Number}", "A", 0, 1);
    n(r"\P{Number}", "123");
}

#[test]
fn line_break_aliases() {
    x(r"\p{Line_Break=Alphabetic}", "a", 0, 1);
    x(r"\p{LB=AL}", "a", 0, 1);
    x(r"\p{lb=AL}", "a", 0, 1);
    e(r"\p{lb=al}", PROPERR_UNKNOWN_PROPERTY_VALUE);
}

#[test]
fn is_prefix_rejected() {
    e(r"\p{IsGreek}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{InGreek}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{IsAlphabetic}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
}

#[test]
fn block_arrows() {
    x(r"\p{Block=Arrows}", "\u{2190}", 0, 3);
    x(r"\p{Block=Arrows}", "\u{21ff}", 0, 3);
    n(r"\p{Block=Arrows}", "\u{218f}");
    n(r"\p{Block=Arrows}", "\u{2200}");
    let cc = compile(r"\p{blk=Arrows}");
    assert_eq!(cc.as_range_set().code_point_count(), 0x70);
}

// ============================================================================
// General_Category
// ============================================================================

#[test]
fn general_category_values() {
    x(r"\p{Lu}", "aA", 1, 2);
    x(r"\p{Uppercase_Letter}", "aA", 1, 2);
    x(r"\p{gc=Lu}", "aA", 1, 2);
    x(r"\p{General_Category=Uppercase_Letter}", "aA", 1, 2);
    x(r"\p{Lt}", "a\u{1c5}", 1, 3);
    x(r"\p{Nd}", "x\u{663}", 1, 3);
    x(r"\p{No}", "1\u{b2}", 1, 3);
    x(r"\p{Zs}", "a b", 1, 2);
    x(r"\p{Cc}", "a\u{7}", 1, 2);
    x(r"\p{Sm}", "a+", 1, 2);
}

#[test]
fn general_category_groups() {
    x(r"\p{L}", "1a", 1, 2);
    x(r"\p{Letter}", "1\u{5d0}", 1, 3);
    x(r"\p{LC}", "1\u{1c5}", 1, 3);
    x(r"\p{M}", "a\u{301}", 1, 3);
    x(r"\p{Combining_Mark}", "a\u{301}", 1, 3);
    x(r"\p{P}", "a!", 1, 2);
    x(r"\p{punct}", "a!", 1, 2);
    x(r"\p{S}", "a$", 1, 2);
    x(r"\p{Z}", "a\u{2028}", 1, 4);
    x(r"\p{C}", "a\u{200b}", 1, 4);
    n(r"\p{LC}", "\u{5d0}");
}

#[test]
fn general_category_extra_aliases() {
    x(r"\p{digit}", "a5", 1, 2);
    x(r"\p{cntrl}", "a\u{1f}", 1, 2);
}

#[test]
fn unassigned_and_private_use() {
    x(r"\p{Cn}", "a\u{378}", 1, 3);
    x(r"\p{Co}", "a\u{e000}", 1, 4);
    n(r"\p{Assigned}", "\u{378}");
}

// ============================================================================
// Binary properties
// ============================================================================

#[test]
fn binary_properties() {
    x(r"\p{Alphabetic}", "1a", 1, 2);
    x(r"\p{Alpha}", "1a", 1, 2);
    x(r"\p{White_Space}", "a b", 1, 2);
    x(r"\p{space}", "a\tb", 1, 2);
    x(r"\p{ASCII_Hex_Digit}", "xF", 1, 2);
    x(r"\p{AHex}", "xf", 1, 2);
    x(r"\p{Emoji}", "a\u{2b50}", 1, 4);
    n(r"\p{Emoji}", "\u{ff13}");
    x(r"\p{Extended_Pictographic}", "\u{26a1}", 0, 3);
    n(r"\p{Extended_Pictographic}", "\u{3042}");
    x(r"\p{Any}", "\u{10ffff}", 0, 4);
    x(r"\p{ASCII}", "\u{e9}~", 2, 3);
    x(r"\p{ID_Start}", "1_a", 2, 3);
    x(r"\p{Regional_Indicator}", "a\u{1f1e6}", 1, 5);
}

#[test]
fn binary_property_with_value_rejected() {
    e(r"\p{Alphabetic=Yes}", PROPERR_UNKNOWN_PROPERTY_VALUE);
    e(r"\p{White_Space=True}", PROPERR_UNKNOWN_PROPERTY_VALUE);
    e(r"\p{ASCII=Y}", PROPERR_UNKNOWN_PROPERTY_VALUE);
}

// ============================================================================
// Other enumerated properties
// ============================================================================

#[test]
fn script_extensions() {
    // U+0640 ARABIC TATWEEL is Common, but extends to Arabic
    n(r"\p{Script=Arabic}", "\u{640}");
    x(r"\p{Script_Extensions=Arabic}", "\u{640}", 0, 2);
    x(r"\p{scx=Arab}", "\u{640}", 0, 2);
    // U+30FC is used by both kana scripts
    x(r"\p{scx=Hira}", "\u{30fc}", 0, 3);
    x(r"\p{scx=Kana}", "\u{30fc}", 0, 3);
    x(r"\p{sc=Zyyy}", "\u{30fc}", 0, 3);
}

#[test]
fn katakana_or_hiragana_is_empty() {
    n(r"\p{sc=Hrkt}", "\u{3042}\u{30a2}");
    n(r"\p{Script=Katakana_Or_Hiragana}", "\u{30fc}");
}

#[test]
fn blocks() {
    x(r"\p{Block=Basic_Latin}", "\u{e9}z", 2, 3);
    x(r"\p{blk=ASCII}", "\u{e9}z", 2, 3);
    x(r"\p{blk=Greek}", "a\u{3c0}", 1, 3);
    x(r"\p{Block=Greek_And_Coptic}", "a\u{3c0}", 1, 3);
    x(r"\p{blk=NB}", "a\u{2fe0}", 1, 4);
}

#[test]
fn east_asian_width() {
    x(r"\p{East_Asian_Width=Wide}", "a\u{4e00}", 1, 4);
    x(r"\p{ea=W}", "a\u{4e00}", 1, 4);
    x(r"\p{ea=F}", "a\u{ff21}", 1, 4);
    x(r"\p{ea=Na}", "\u{4e00}a", 3, 4);
}

#[test]
fn bidi_class() {
    x(r"\p{Bidi_Class=Right_To_Left}", "a\u{5d0}", 1, 3);
    x(r"\p{bc=AL}", "a\u{627}", 1, 3);
    x(r"\p{bc=L}", "\u{5d0}a", 2, 3);
    x(r"\p{bc=EN}", "a1", 1, 2);
}

#[test]
fn hangul_syllable_type() {
    x(r"\p{Hangul_Syllable_Type=LV_Syllable}", "a\u{ac00}", 1, 4);
    x(r"\p{hst=LVT}", "\u{ac00}\u{ac01}", 3, 6);
    x(r"\p{hst=L}", "a\u{1100}", 1, 4);
    // `L` is scoped: Letter under gc, Leading_Jamo under hst
    n(r"\p{hst=L}", "a");
    x(r"\p{gc=L}", "a", 0, 1);
}

#[test]
fn line_break_values() {
    x(r"\p{lb=NU}", "a1", 1, 2);
    x(r"\p{Line_Break=Numeric}", "a1", 1, 2);
    x(r"\p{lb=SP}", "a ", 1, 2);
}

// ============================================================================
// Strictness
// ============================================================================

#[test]
fn case_sensitive_names() {
    e(r"\p{script=Greek}", PROPERR_UNKNOWN_PROPERTY_NAME);
    e(r"\p{Script=greek}", PROPERR_UNKNOWN_PROPERTY_VALUE);
    e(r"\p{SC=Grek}", PROPERR_UNKNOWN_PROPERTY_NAME);
    e(r"\p{lu}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{alphabetic}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{ascii}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
}

#[test]
fn no_loose_matching() {
    e(r"\p{WhiteSpace}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{Script=Old_italic}", PROPERR_UNKNOWN_PROPERTY_VALUE);
    e(r"\p{GeneralCategory=Lu}", PROPERR_UNKNOWN_PROPERTY_NAME);
    e(r"\p{White Space}", PROPERR_INVALID_CHAR_IN_PROPERTY_NAME);
    e(r"\p{White-Space}", PROPERR_INVALID_CHAR_IN_PROPERTY_NAME);
    e(r"\p{ Lu}", PROPERR_INVALID_CHAR_IN_PROPERTY_NAME);
}

#[test]
fn shorthand_restricted_to_binary_and_gc() {
    e(r"\p{Greek}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{Latn}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{Script}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{Arrows}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    e(r"\p{Wide}", PROPERR_UNKNOWN_SHORTHAND_TOKEN);
}

#[test]
fn unknown_names_and_values() {
    e(r"\p{Scirpt=Greek}", PROPERR_UNKNOWN_PROPERTY_NAME);
    e(r"\p{Script=Klingon}", PROPERR_UNKNOWN_PROPERTY_VALUE);
    e(r"\p{gc=Greek}", PROPERR_UNKNOWN_PROPERTY_VALUE);
}

// ============================================================================
// Escape syntax
// ============================================================================

#[test]
fn escape_syntax_errors() {
    e(r"\p{L", PROPERR_END_PATTERN_AT_LEFT_BRACE);
    e(r"[\p{L]", PROPERR_END_PATTERN_AT_LEFT_BRACE);
    e(r"\pL", PROPERR_INVALID_PROPERTY_ESCAPE);
    e(r"\p", PROPERR_INVALID_PROPERTY_ESCAPE);
    e(r"\p{}", PROPERR_EMPTY_PROPERTY_NAME);
    e(r"\p{=Lu}", PROPERR_EMPTY_PROPERTY_NAME);
    e(r"\p{gc=}", PROPERR_EMPTY_PROPERTY_VALUE);
    e(r"\p{gc=L=M}", PROPERR_MULTIPLE_PROPERTY_SEPARATORS);
    e(r"\p{gc:L}", PROPERR_INVALID_CHAR_IN_PROPERTY_NAME);
    e(r"\p{^L}", PROPERR_INVALID_CHAR_IN_PROPERTY_NAME);
    e("\\p{L\u{e9}}", PROPERR_INVALID_CHAR_IN_PROPERTY_NAME);
}

// ============================================================================
// Character classes
// ============================================================================

#[test]
fn class_union() {
    x(r"[\p{Script=Greek}\p{Nd}]", "a5", 1, 2);
    x(r"[\p{Script=Greek}\p{Nd}]", "a\u{3b1}", 1, 3);
    x(r"[\p{Lu}a-c]", "xb", 1, 2);
    n(r"[\p{Lu}a-c]", "xyz");
}

#[test]
fn class_negation() {
    n(r"[^\p{L}]", "abc");
    x(r"[^\p{L}]", "ab1", 2, 3);
    x(r"[^\P{L}]", "1a", 1, 2);
    n(r"[^\p{L}\P{L}]", "a1 ");
    x(r"[\P{L}]", "a1", 1, 2);
}

#[test]
fn class_ranges_with_escapes() {
    x(r"[\u{3b1}-\u{3c9}]", "a\u{3c0}", 1, 3);
    e(r"[\p{L}-z]", PROPERR_CHAR_CLASS_VALUE_AT_START_OF_RANGE);
    e(r"[a-\p{L}]", PROPERR_CHAR_CLASS_VALUE_AT_END_OF_RANGE);
    e(r"[z-a]", PROPERR_EMPTY_RANGE_IN_CHAR_CLASS);
}

#[test]
fn class_syntax_errors() {
    e(r"[\p{L}", PROPERR_PREMATURE_END_OF_CHAR_CLASS);
    e(r"[\", PROPERR_END_PATTERN_AT_ESCAPE);
    e(r"[\k]", PROPERR_INVALID_ESCAPE);
    e(r"[\u{110000}]", PROPERR_INVALID_CODE_POINT_VALUE);
    e(r"[a]b", PROPERR_TRAILING_CHARACTERS);
}
