// resolve.rs - Property escape resolution.
//
// Turns a scanned token into an owned RangeSet using the registry, then
// applies negation.

use log::trace;

use crate::error::PropertyError;
use crate::escparse::PropertyToken;
use crate::rangeset::RangeSet;
use crate::registry::{PropertyKind, PropertyRegistry};

/// Resolve `token` and return the matching code points, complemented when
/// `negated`.
pub fn compile_escape(
    registry: &PropertyRegistry,
    negated: bool,
    token: &PropertyToken<'_>,
) -> Result<RangeSet, PropertyError> {
    let set = match *token {
        PropertyToken::Lone(text) => registry
            .resolve_shorthand(text)
            .ok_or_else(|| PropertyError::unknown_shorthand_token(text))?,
        PropertyToken::NameValue { name, value } => {
            let property = registry
                .lookup_property_name(name)
                .ok_or_else(|| PropertyError::unknown_property_name(name))?;
            match registry.kind(property) {
                // binary properties take no value, including True/False spellings
                Some(PropertyKind::Binary) | None => {
                    return Err(PropertyError::unknown_property_value(name, value));
                }
                Some(PropertyKind::Enumerated) => {
                    let id = registry
                        .lookup_property_value(property, value)
                        .ok_or_else(|| PropertyError::unknown_property_value(name, value))?;
                    registry.value_set(property, id)?
                }
            }
        }
    };

    let result = if negated { set.complement() } else { set.clone() };
    trace!(
        "resolved \\{}{{{}}} to {} ranges",
        if negated { 'P' } else { 'p' },
        token.to_text(),
        result.range_count()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::global;
    use crate::types::*;

    fn compile(negated: bool, token: PropertyToken<'_>) -> Result<RangeSet, PropertyError> {
        compile_escape(global(), negated, &token)
    }

    fn name_value<'a>(name: &'a str, value: &'a str) -> PropertyToken<'a> {
        PropertyToken::NameValue { name, value }
    }

    #[test]
    fn script_greek() {
        let set = compile(false, name_value("Script", "Greek")).unwrap();
        assert!(set.contains(0x03C0));
        assert!(!set.contains('a' as u32));
    }

    #[test]
    fn number_shorthand_and_negation() {
        let set = compile(false, PropertyToken::Lone("Number")).unwrap();
        assert!(set.contains('1' as u32));
        let neg = compile(true, PropertyToken::Lone("Number")).unwrap();
        assert!(neg.contains('A' as u32));
        assert!(!neg.contains('1' as u32));
    }

    #[test]
    fn line_break_aliases_compile_identically() {
        let long = compile(false, name_value("Line_Break", "Alphabetic")).unwrap();
        let short = compile(false, name_value("LB", "AL")).unwrap();
        assert_eq!(long, short);
        assert!(!long.is_empty());
    }

    #[test]
    fn line_break_value_is_case_sensitive() {
        let err = compile(false, name_value("lb", "al")).unwrap_err();
        assert_eq!(
            err,
            PropertyError::UnknownPropertyValue {
                property: "lb".into(),
                value: "al".into()
            }
        );
    }

    #[test]
    fn is_prefix_is_not_a_shorthand() {
        let err = compile(false, PropertyToken::Lone("IsGreek")).unwrap_err();
        assert_eq!(err.code(), PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    }

    #[test]
    fn block_arrows_exact() {
        let set = compile(false, name_value("Block", "Arrows")).unwrap();
        assert_eq!(set, RangeSet::from_range(0x2190, 0x21FF));
        assert!(!set.contains(0x218F));
        assert!(set.contains(0x2190));
        assert!(set.contains(0x21FF));
        assert!(!set.contains(0x2200));
    }

    #[test]
    fn unknown_property_name() {
        let err = compile(false, name_value("Scirpt", "Greek")).unwrap_err();
        assert_eq!(
            err,
            PropertyError::UnknownPropertyName {
                name: "Scirpt".into()
            }
        );
    }

    #[test]
    fn binary_property_rejects_a_value() {
        for value in ["Yes", "True", "Y", "T"] {
            let err = compile(false, name_value("Alphabetic", value)).unwrap_err();
            assert_eq!(err.code(), PROPERR_UNKNOWN_PROPERTY_VALUE);
        }
    }

    #[test]
    fn values_do_not_leak_across_properties() {
        // `Greek` is a Script value, not a General_Category one
        let err = compile(false, name_value("gc", "Greek")).unwrap_err();
        assert_eq!(err.code(), PROPERR_UNKNOWN_PROPERTY_VALUE);
        let err = compile(false, PropertyToken::Lone("Latin")).unwrap_err();
        assert_eq!(err.code(), PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    }

    #[test]
    fn enumerated_property_name_alone_is_not_a_shorthand() {
        let err = compile(false, PropertyToken::Lone("General_Category")).unwrap_err();
        assert_eq!(err.code(), PROPERR_UNKNOWN_SHORTHAND_TOKEN);
    }

    #[test]
    fn negated_any_is_empty() {
        let set = compile(true, PropertyToken::Lone("Any")).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains(0));
    }

    #[test]
    fn empty_value_set_negates_to_full() {
        let set = compile(true, name_value("sc", "Hrkt")).unwrap();
        assert!(set.is_full());
    }
}
