// registry.rs - Canonical property registry.
//
// Built once from a UnicodeSource, then read-only. Every canonical
// property owns its materialized RangeSets; grouped General_Category
// values are unioned while building.

use std::sync::OnceLock;

use log::debug;

pub use crate::alias::{PropertyId, ValueId};
use crate::alias::AliasTable;
use crate::error::{PropertyError, RegistryBuildError};
use crate::rangeset::RangeSet;
use crate::unicode::{Ucd, UnicodeSource};

pub const GENERAL_CATEGORY: &str = "General_Category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A code point has or does not have the property.
    Binary,
    /// The property partitions code points into named values.
    Enumerated,
}

#[derive(Debug)]
enum PropertyData {
    Binary(RangeSet),
    Enumerated(Vec<RangeSet>),
}

impl PropertyData {
    fn kind(&self) -> PropertyKind {
        match self {
            PropertyData::Binary(_) => PropertyKind::Binary,
            PropertyData::Enumerated(_) => PropertyKind::Enumerated,
        }
    }
}

/// Alias table plus the code point data of every canonical property.
#[derive(Debug)]
pub struct PropertyRegistry {
    aliases: AliasTable,
    data: Vec<PropertyData>,
    general_category: Option<PropertyId>,
    version: (u8, u8, u8),
}

impl PropertyRegistry {
    /// Build the registry. Fails on conflicting aliases or a grouped value
    /// naming a component the property does not define.
    pub fn build(source: &dyn UnicodeSource) -> Result<PropertyRegistry, RegistryBuildError> {
        let mut aliases = AliasTable::new();
        let mut data = Vec::new();
        let mut general_category = None;

        for prop in source.binary_properties() {
            aliases.add_property(prop.name, prop.aliases)?;
            data.push(PropertyData::Binary(RangeSet::from_table(prop.ranges)));
        }

        for prop in source.enumerated_properties() {
            let id = aliases.add_property(prop.name, prop.aliases)?;
            if prop.name == GENERAL_CATEGORY {
                general_category = Some(id);
            }

            let mut sets = Vec::with_capacity(prop.values.len());
            for value in prop.values {
                aliases.add_value(id, value.name, value.aliases)?;
                sets.push(RangeSet::from_table(value.ranges));
            }

            for (i, value) in prop.values.iter().enumerate() {
                for &member in value.composed_of {
                    let m = aliases
                        .lookup_property_value(id, member)
                        .filter(|m| !prop.values[m.index()].is_grouped())
                        .ok_or_else(|| RegistryBuildError::UnknownComponentValue {
                            property: prop.name.to_string(),
                            value: member.to_string(),
                        })?;
                    let merged = sets[i].union(&sets[m.index()]);
                    sets[i] = merged;
                }
            }
            data.push(PropertyData::Enumerated(sets));
        }

        debug!(
            "property registry built: unicode {:?}, {} properties, {} aliases",
            source.unicode_version(),
            aliases.property_count(),
            aliases.alias_count()
        );

        Ok(PropertyRegistry {
            aliases,
            data,
            general_category,
            version: source.unicode_version(),
        })
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn lookup_property_name(&self, text: &str) -> Option<PropertyId> {
        self.aliases.lookup_property_name(text)
    }

    pub fn lookup_property_value(&self, property: PropertyId, text: &str) -> Option<ValueId> {
        self.aliases.lookup_property_value(property, text)
    }

    /// Kind of a canonical property; `None` for an id this registry did not issue.
    pub fn kind(&self, property: PropertyId) -> Option<PropertyKind> {
        self.data.get(property.index()).map(PropertyData::kind)
    }

    /// Code points of a binary property.
    pub fn binary_set(&self, property: PropertyId) -> Result<&RangeSet, PropertyError> {
        match self.data.get(property.index()) {
            Some(PropertyData::Binary(set)) => Ok(set),
            _ => Err(PropertyError::unknown_property_name(
                self.property_name(property).unwrap_or(""),
            )),
        }
    }

    /// Code points of one value of an enumerated property.
    pub fn value_set(&self, property: PropertyId, value: ValueId) -> Result<&RangeSet, PropertyError> {
        match self.data.get(property.index()) {
            Some(PropertyData::Enumerated(sets)) => sets.get(value.index()).ok_or_else(|| {
                PropertyError::unknown_property_value(
                    self.property_name(property).unwrap_or(""),
                    &format!("#{}", value.index()),
                )
            }),
            _ => Err(PropertyError::unknown_property_value(
                self.property_name(property).unwrap_or(""),
                self.value_name(property, value).unwrap_or(""),
            )),
        }
    }

    /// Resolve a lone token: a binary property name first, then a
    /// General_Category value. Nothing else is eligible.
    pub fn resolve_shorthand(&self, text: &str) -> Option<&RangeSet> {
        if let Some(id) = self.lookup_property_name(text) {
            if let Some(PropertyData::Binary(set)) = self.data.get(id.index()) {
                return Some(set);
            }
        }
        let gc = self.general_category?;
        let value = self.lookup_property_value(gc, text)?;
        self.value_set(gc, value).ok()
    }

    // === Introspection ===

    pub fn property_name(&self, property: PropertyId) -> Option<&'static str> {
        self.aliases.property_name(property)
    }

    pub fn value_name(&self, property: PropertyId, value: ValueId) -> Option<&'static str> {
        self.aliases.value_name(property, value)
    }

    pub fn general_category(&self) -> Option<PropertyId> {
        self.general_category
    }

    /// Every canonical property in registration order.
    pub fn properties(&self) -> impl Iterator<Item = (PropertyId, &'static str, PropertyKind)> + '_ {
        self.data.iter().enumerate().map(move |(i, d)| {
            let id = PropertyId(i as u16);
            (id, self.property_name(id).unwrap_or(""), d.kind())
        })
    }

    /// Canonical values of `property`; empty for binary properties.
    pub fn values(&self, property: PropertyId) -> impl Iterator<Item = (ValueId, &'static str)> + '_ {
        (0..self.aliases.value_count(property)).map(move |i| {
            let id = ValueId(i as u16);
            (id, self.value_name(property, id).unwrap_or(""))
        })
    }

    pub fn unicode_version(&self) -> (u8, u8, u8) {
        self.version
    }
}

static GLOBAL_REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();

/// The registry over the bundled Unicode tables, built on first use.
///
/// # Panics
///
/// Panics if the bundled tables fail to build, which only happens when
/// the generated data is inconsistent.
pub fn global() -> &'static PropertyRegistry {
    GLOBAL_REGISTRY.get_or_init(|| match PropertyRegistry::build(&Ucd) {
        Ok(registry) => registry,
        Err(err) => panic!("failed to build property registry: {}", err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{BinaryPropertyData, EnumeratedPropertyData, PropertyValueData};

    struct TestSource {
        binary: &'static [BinaryPropertyData],
        enumerated: &'static [EnumeratedPropertyData],
    }

    impl UnicodeSource for TestSource {
        fn binary_properties(&self) -> &[BinaryPropertyData] {
            self.binary
        }
        fn enumerated_properties(&self) -> &[EnumeratedPropertyData] {
            self.enumerated
        }
        fn unicode_version(&self) -> (u8, u8, u8) {
            (0, 0, 1)
        }
    }

    static BINARY: &[BinaryPropertyData] = &[BinaryPropertyData {
        name: "ASCII_Hex_Digit",
        aliases: &["AHex"],
        ranges: &[(0x30, 0x39), (0x41, 0x46), (0x61, 0x66)],
    }];

    static GC: &[PropertyValueData] = &[
        PropertyValueData {
            name: "Uppercase_Letter",
            aliases: &["Lu"],
            ranges: &[(0x41, 0x5A)],
            composed_of: &[],
        },
        PropertyValueData {
            name: "Lowercase_Letter",
            aliases: &["Ll"],
            ranges: &[(0x61, 0x7A)],
            composed_of: &[],
        },
        PropertyValueData {
            name: "Letter",
            aliases: &["L"],
            ranges: &[],
            composed_of: &["Lu", "Ll"],
        },
    ];

    static SC: &[PropertyValueData] = &[PropertyValueData {
        name: "Latin",
        aliases: &["Latn"],
        ranges: &[(0x41, 0x5A), (0x61, 0x7A)],
        composed_of: &[],
    }];

    static ENUMERATED: &[EnumeratedPropertyData] = &[
        EnumeratedPropertyData {
            name: "General_Category",
            aliases: &["gc"],
            values: GC,
        },
        EnumeratedPropertyData {
            name: "Script",
            aliases: &["sc"],
            values: SC,
        },
    ];

    fn test_registry() -> PropertyRegistry {
        PropertyRegistry::build(&TestSource {
            binary: BINARY,
            enumerated: ENUMERATED,
        })
        .unwrap()
    }

    #[test]
    fn kinds() {
        let r = test_registry();
        let ahex = r.lookup_property_name("AHex").unwrap();
        let sc = r.lookup_property_name("sc").unwrap();
        assert_eq!(r.kind(ahex), Some(PropertyKind::Binary));
        assert_eq!(r.kind(sc), Some(PropertyKind::Enumerated));
        assert!(r.binary_set(ahex).is_ok());
        assert!(r.binary_set(sc).is_err());
    }

    #[test]
    fn foreign_property_id_is_rejected() {
        let r = test_registry();
        let big = global();
        let hst = big.lookup_property_name("Hangul_Syllable_Type").unwrap();
        let lv = big.lookup_property_value(hst, "LV").unwrap();
        assert_eq!(r.kind(hst), None);
        assert!(r.binary_set(hst).is_err());
        assert!(r.value_set(hst, lv).is_err());
        assert!(r.property_name(hst).is_none());
    }

    #[test]
    fn grouped_value_is_union_of_members() {
        let r = test_registry();
        let gc = r.general_category().unwrap();
        let l = r.lookup_property_value(gc, "L").unwrap();
        let set = r.value_set(gc, l).unwrap();
        assert_eq!(set, &RangeSet::from_table(&[(0x41, 0x5A), (0x61, 0x7A)]));
    }

    #[test]
    fn shorthand_binary_then_general_category() {
        let r = test_registry();
        assert!(r.resolve_shorthand("ASCII_Hex_Digit").unwrap().contains(0x46));
        assert!(r.resolve_shorthand("Lu").unwrap().contains(0x41));
        assert!(r.resolve_shorthand("Letter").unwrap().contains(0x61));
        // enumerated property names and other properties' values are not shorthands
        assert!(r.resolve_shorthand("Script").is_none());
        assert!(r.resolve_shorthand("Latin").is_none());
        assert!(r.resolve_shorthand("lu").is_none());
    }

    #[test]
    fn introspection() {
        let r = test_registry();
        let names: Vec<&str> = r.properties().map(|(_, name, _)| name).collect();
        assert_eq!(names, ["ASCII_Hex_Digit", "General_Category", "Script"]);
        let gc = r.general_category().unwrap();
        let values: Vec<&str> = r.values(gc).map(|(_, name)| name).collect();
        assert_eq!(values, ["Uppercase_Letter", "Lowercase_Letter", "Letter"]);
        assert_eq!(r.unicode_version(), (0, 0, 1));
    }

    #[test]
    fn unknown_component_fails_build() {
        static BAD_GC: &[PropertyValueData] = &[PropertyValueData {
            name: "Letter",
            aliases: &["L"],
            ranges: &[],
            composed_of: &["Lx"],
        }];
        static BAD: &[EnumeratedPropertyData] = &[EnumeratedPropertyData {
            name: "General_Category",
            aliases: &["gc"],
            values: BAD_GC,
        }];
        let err = PropertyRegistry::build(&TestSource {
            binary: &[],
            enumerated: BAD,
        })
        .unwrap_err();
        assert_eq!(
            err,
            RegistryBuildError::UnknownComponentValue {
                property: "General_Category".into(),
                value: "Lx".into(),
            }
        );
    }

    #[test]
    fn property_alias_conflict_across_kinds_fails_build() {
        static CLASH: &[BinaryPropertyData] = &[BinaryPropertyData {
            name: "Script_Like",
            aliases: &["sc"],
            ranges: &[],
        }];
        let err = PropertyRegistry::build(&TestSource {
            binary: CLASH,
            enumerated: ENUMERATED,
        })
        .unwrap_err();
        assert!(matches!(err, RegistryBuildError::DuplicateAlias { .. }));
    }

    #[test]
    fn global_registry_is_shared() {
        let a = global() as *const PropertyRegistry;
        let b = global() as *const PropertyRegistry;
        assert_eq!(a, b);
        assert_eq!(global().unicode_version(), (14, 0, 0));
    }

    #[test]
    fn global_shorthand_restriction() {
        let r = global();
        assert!(r.resolve_shorthand("Alphabetic").is_some());
        assert!(r.resolve_shorthand("Lu").is_some());
        assert!(r.resolve_shorthand("Number").is_some());
        assert!(r.resolve_shorthand("Greek").is_none());
        assert!(r.resolve_shorthand("Script").is_none());
        assert!(r.resolve_shorthand("IsGreek").is_none());
        assert!(r.resolve_shorthand("L&").is_none());
    }
}
