// unicode/mod.rs - Unicode metadata source.
// Table layout shared with the generated property data, and the trait the
// registry builds from.

mod property_data;

use crate::types::CodePoint;

pub use property_data::UNICODE_VERSION;

// === Table Layout ===

/// One binary property: canonical name, extra aliases and its code points.
#[derive(Debug, Clone, Copy)]
pub struct BinaryPropertyData {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub ranges: &'static [(CodePoint, CodePoint)],
}

/// One value of an enumerated property.
///
/// A grouped value (General_Category `L`, `P`, ...) has empty `ranges` and
/// lists the canonical names or aliases of its members in `composed_of`.
#[derive(Debug, Clone, Copy)]
pub struct PropertyValueData {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub ranges: &'static [(CodePoint, CodePoint)],
    pub composed_of: &'static [&'static str],
}

impl PropertyValueData {
    pub fn is_grouped(&self) -> bool {
        !self.composed_of.is_empty()
    }
}

/// One enumerated property with all of its values.
#[derive(Debug, Clone, Copy)]
pub struct EnumeratedPropertyData {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub values: &'static [PropertyValueData],
}

// === Source Trait ===

/// Supplier of Unicode property metadata.
///
/// Names are the published canonical names. Aliases equal to the canonical
/// name may be listed or omitted.
pub trait UnicodeSource {
    fn binary_properties(&self) -> &[BinaryPropertyData];
    fn enumerated_properties(&self) -> &[EnumeratedPropertyData];
    fn unicode_version(&self) -> (u8, u8, u8);
}

/// The bundled Unicode 14.0.0 tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ucd;

impl UnicodeSource for Ucd {
    fn binary_properties(&self) -> &[BinaryPropertyData] {
        property_data::BINARY_PROPERTIES
    }

    fn enumerated_properties(&self) -> &[EnumeratedPropertyData] {
        property_data::ENUMERATED_PROPERTIES
    }

    fn unicode_version(&self) -> (u8, u8, u8) {
        UNICODE_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_sorted(ranges: &[(CodePoint, CodePoint)]) -> bool {
        ranges.iter().all(|&(lo, hi)| lo <= hi && hi <= 0x10FFFF)
            && ranges.windows(2).all(|w| w[0].1 < w[1].0)
    }

    #[test]
    fn bundled_tables_are_sorted() {
        for p in Ucd.binary_properties() {
            assert!(tables_sorted(p.ranges), "{}", p.name);
        }
        for p in Ucd.enumerated_properties() {
            for v in p.values {
                assert!(tables_sorted(v.ranges), "{}={}", p.name, v.name);
            }
        }
    }

    #[test]
    fn bundled_tables_cover_required_properties() {
        let enumerated: Vec<&str> = Ucd.enumerated_properties().iter().map(|p| p.name).collect();
        for name in ["General_Category", "Script", "Script_Extensions", "Block", "Line_Break"] {
            assert!(enumerated.contains(&name), "{}", name);
        }
        let binary: Vec<&str> = Ucd.binary_properties().iter().map(|p| p.name).collect();
        for name in ["Alphabetic", "White_Space", "ASCII", "Any", "Emoji"] {
            assert!(binary.contains(&name), "{}", name);
        }
    }

    #[test]
    fn grouped_values_have_no_ranges() {
        let gc = &Ucd.enumerated_properties()[0];
        assert_eq!(gc.name, "General_Category");
        for v in gc.values {
            if v.is_grouped() {
                assert!(v.ranges.is_empty(), "{}", v.name);
            }
        }
        assert!(gc.values.iter().any(|v| v.name == "Letter" && v.is_grouped()));
    }

    #[test]
    fn version() {
        assert_eq!(Ucd.unicode_version(), (14, 0, 0));
    }
}
