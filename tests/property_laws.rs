// property_laws.rs - Algebraic and alias laws, checked with proptest.

use ferroprop::api::{try_compile_property_escape, EscapeOutcome};
use ferroprop::rangeset::{CodeRange, RangeSet};
use ferroprop::registry::global;
use ferroprop::types::*;
use ferroprop::unicode::{Ucd, UnicodeSource};
use proptest::collection::vec;
use proptest::prelude::*;

fn code_point_strategy() -> BoxedStrategy<u32> {
    prop_oneof![
        0u32..0x80,
        0x80u32..0x800,
        0x800u32..0x10000,
        0x10000u32..=MAX_CODE_POINT,
        Just(0u32),
        Just(MAX_CODE_POINT),
    ]
    .boxed()
}

fn range_set_strategy() -> BoxedStrategy<RangeSet> {
    vec((code_point_strategy(), 0u32..64), 0..24)
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(lo, width)| CodeRange::new(lo, lo.saturating_add(width)))
                .collect::<RangeSet>()
        })
        .boxed()
}

/// Every lone token accepted by the bundled tables.
fn shorthand_tokens() -> Vec<&'static str> {
    let mut tokens = Vec::new();
    for p in Ucd.binary_properties() {
        tokens.push(p.name);
        tokens.extend_from_slice(p.aliases);
    }
    let gc = &Ucd.enumerated_properties()[0];
    for v in gc.values {
        tokens.push(v.name);
        tokens.extend_from_slice(v.aliases);
    }
    tokens
}

fn compile(raw: &str) -> Result<RangeSet, ferroprop::error::PropertyError> {
    match try_compile_property_escape(true, raw)? {
        EscapeOutcome::Compiled(atom) => Ok(atom.into_range_set()),
        EscapeOutcome::NotApplicable => panic!("{:?} was not applicable", raw),
    }
}

fn flip_case_at(token: &str, index: usize) -> Option<String> {
    let letters: Vec<usize> = token
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();
    let at = *letters.get(index % letters.len().max(1))?;
    let mut bytes = token.as_bytes().to_vec();
    bytes[at] ^= 0x20;
    String::from_utf8(bytes).ok()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn normal_form_after_every_operation(a in range_set_strategy(), b in range_set_strategy()) {
        prop_assert!(a.is_normalized());
        prop_assert!(a.union(&b).is_normalized());
        prop_assert!(a.intersection(&b).is_normalized());
        prop_assert!(a.difference(&b).is_normalized());
        prop_assert!(a.complement().is_normalized());
    }

    #[test]
    fn complement_is_an_involution(a in range_set_strategy()) {
        prop_assert_eq!(a.complement().complement(), a);
    }

    #[test]
    fn complement_flips_membership(a in range_set_strategy(), c in code_point_strategy()) {
        prop_assert_ne!(a.contains(c), a.complement().contains(c));
    }

    #[test]
    fn algebra_matches_membership(
        a in range_set_strategy(),
        b in range_set_strategy(),
        c in code_point_strategy(),
    ) {
        prop_assert_eq!(a.union(&b).contains(c), a.contains(c) || b.contains(c));
        prop_assert_eq!(a.intersection(&b).contains(c), a.contains(c) && b.contains(c));
        prop_assert_eq!(a.difference(&b).contains(c), a.contains(c) && !b.contains(c));
    }

    #[test]
    fn add_range_matches_union(a in range_set_strategy(), lo in code_point_strategy(), width in 0u32..300) {
        let hi = lo.saturating_add(width).min(MAX_CODE_POINT);
        let mut added = a.clone();
        added.add_range(lo, hi);
        prop_assert_eq!(added, a.union(&RangeSet::from_range(lo, hi)));
    }

    #[test]
    fn code_point_counts_are_complementary(a in range_set_strategy()) {
        prop_assert_eq!(
            a.code_point_count() + a.complement().code_point_count(),
            MAX_CODE_POINT + 1
        );
    }

    #[test]
    fn escape_negation_flips_membership(
        token in prop::sample::select(shorthand_tokens()),
        c in code_point_strategy(),
    ) {
        let pos = compile(&format!("\\p{{{}}}", token)).unwrap();
        let neg = compile(&format!("\\P{{{}}}", token)).unwrap();
        prop_assert_ne!(pos.contains(c), neg.contains(c));
    }

    #[test]
    fn case_flipped_tokens_are_rejected(
        token in prop::sample::select(shorthand_tokens()),
        index in 0usize..16,
    ) {
        let flipped = flip_case_at(token, index);
        prop_assume!(flipped.is_some());
        let flipped = flipped.unwrap();
        prop_assume!(global().resolve_shorthand(&flipped).is_none());
        let err = compile(&format!("\\p{{{}}}", flipped)).unwrap_err();
        prop_assert_eq!(err.code(), PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    }
}

#[test]
fn property_aliases_compile_identically() {
    for p in Ucd.enumerated_properties() {
        for v in p.values {
            let canonical = compile(&format!("\\p{{{}={}}}", p.name, v.name)).unwrap();
            for prop_alias in p.aliases {
                for value_alias in v.aliases {
                    let aliased =
                        compile(&format!("\\p{{{}={}}}", prop_alias, value_alias)).unwrap();
                    assert_eq!(aliased, canonical, "{}={}", prop_alias, value_alias);
                }
            }
        }
    }
}

#[test]
fn binary_aliases_compile_identically() {
    for p in Ucd.binary_properties() {
        let canonical = compile(&format!("\\p{{{}}}", p.name)).unwrap();
        assert!(!canonical.is_empty(), "{}", p.name);
        for alias in p.aliases {
            assert_eq!(compile(&format!("\\p{{{}}}", alias)).unwrap(), canonical, "{}", alias);
        }
    }
}

#[test]
fn general_category_shorthand_matches_name_value() {
    let gc = &Ucd.enumerated_properties()[0];
    for v in gc.values {
        assert_eq!(
            compile(&format!("\\p{{{}}}", v.name)).unwrap(),
            compile(&format!("\\p{{gc={}}}", v.name)).unwrap(),
            "{}",
            v.name
        );
    }
}

#[test]
fn general_category_partitions_the_domain() {
    let registry = global();
    let gc = registry.general_category().unwrap();
    let mut seen = RangeSet::new();
    let mut total = 0u32;
    for (id, name) in registry.values(gc) {
        let composed = Ucd.enumerated_properties()[0]
            .values
            .iter()
            .any(|v| v.name == name && !v.composed_of.is_empty());
        if composed {
            continue;
        }
        let set = registry.value_set(gc, id).unwrap();
        assert!(seen.intersection(set).is_empty(), "{} overlaps", name);
        seen.union_with(set);
        total += set.code_point_count();
    }
    assert!(seen.is_full());
    assert_eq!(total, MAX_CODE_POINT + 1);
}

fn assert_partitions_domain(property: &str) {
    let registry = global();
    let id = registry.lookup_property_name(property).unwrap();
    let data = Ucd
        .enumerated_properties()
        .iter()
        .find(|p| p.name == property)
        .unwrap();
    let mut seen = RangeSet::new();
    for v in data.values.iter().filter(|v| v.composed_of.is_empty()) {
        let value = registry.lookup_property_value(id, v.name).unwrap();
        let set = registry.value_set(id, value).unwrap();
        let overlap = seen.intersection(set);
        assert!(overlap.is_empty(), "{}={} overlaps at {:?}", property, v.name, overlap.ranges());
        seen.union_with(set);
    }
    assert!(seen.is_full(), "{} misses {:?}", property, seen.complement().ranges());
}

#[test]
fn single_valued_properties_partition_the_domain() {
    for property in [
        "Script",
        "Block",
        "Line_Break",
        "East_Asian_Width",
        "Bidi_Class",
        "Hangul_Syllable_Type",
    ] {
        assert_partitions_domain(property);
    }
}

#[test]
fn last_code_point_has_one_block_and_bidi_class() {
    let registry = global();
    let blk = registry.lookup_property_name("blk").unwrap();
    let nb = registry.lookup_property_value(blk, "NB").unwrap();
    let pua_b = registry.lookup_property_value(blk, "Sup_PUA_B").unwrap();
    assert!(!registry.value_set(blk, nb).unwrap().contains(MAX_CODE_POINT));
    assert!(registry.value_set(blk, pua_b).unwrap().contains(MAX_CODE_POINT));

    let bc = registry.lookup_property_name("bc").unwrap();
    let l = registry.lookup_property_value(bc, "L").unwrap();
    let bn = registry.lookup_property_value(bc, "BN").unwrap();
    assert!(!registry.value_set(bc, l).unwrap().contains(MAX_CODE_POINT));
    assert!(registry.value_set(bc, bn).unwrap().contains(MAX_CODE_POINT));
    assert!(compile(r"\P{bc=L}").unwrap().contains_char('\u{10FFFF}'));
}

#[test]
fn underscore_stripped_names_are_rejected() {
    for p in Ucd.binary_properties().iter().filter(|p| p.name.contains('_')) {
        let stripped = p.name.replace('_', "");
        if global().resolve_shorthand(&stripped).is_some() {
            continue;
        }
        let err = compile(&format!("\\p{{{}}}", stripped)).unwrap_err();
        assert_eq!(err.code(), PROPERR_UNKNOWN_SHORTHAND_TOKEN, "{}", stripped);
    }
}
