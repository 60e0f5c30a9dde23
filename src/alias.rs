// alias.rs - Property and value alias lookup.
//
// Two independent lookup axes: property aliases, and value aliases scoped
// to one property. Keys are compared byte for byte.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::RegistryBuildError;

/// Index of a canonical property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(pub(crate) u16);

/// Index of a canonical value, scoped to its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueId(pub(crate) u16);

impl PropertyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ValueId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
struct PropertyAliases {
    canonical: &'static str,
    value_names: Vec<&'static str>,
    values: HashMap<&'static str, ValueId>,
}

/// Immutable once built: insertion is only reachable during registry build.
#[derive(Debug, Default)]
pub struct AliasTable {
    by_name: HashMap<&'static str, PropertyId>,
    properties: Vec<PropertyAliases>,
}

impl AliasTable {
    pub fn new() -> AliasTable {
        AliasTable::default()
    }

    /// Exact lookup of a property name or alias.
    pub fn lookup_property_name(&self, text: &str) -> Option<PropertyId> {
        self.by_name.get(text).copied()
    }

    /// Exact lookup of a value name or alias within `property`.
    pub fn lookup_property_value(&self, property: PropertyId, text: &str) -> Option<ValueId> {
        self.properties
            .get(property.index())
            .and_then(|p| p.values.get(text).copied())
    }

    pub fn property_name(&self, property: PropertyId) -> Option<&'static str> {
        self.properties.get(property.index()).map(|p| p.canonical)
    }

    pub fn value_name(&self, property: PropertyId, value: ValueId) -> Option<&'static str> {
        self.properties
            .get(property.index())
            .and_then(|p| p.value_names.get(value.index()).copied())
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn value_count(&self, property: PropertyId) -> usize {
        self.properties
            .get(property.index())
            .map_or(0, |p| p.value_names.len())
    }

    /// Total number of distinct alias strings on both axes.
    pub fn alias_count(&self) -> usize {
        self.by_name.len() + self.properties.iter().map(|p| p.values.len()).sum::<usize>()
    }

    // === Building ===

    /// Register a canonical property under its name and every alias.
    pub(crate) fn add_property(
        &mut self,
        canonical: &'static str,
        aliases: &[&'static str],
    ) -> Result<PropertyId, RegistryBuildError> {
        let id = u16::try_from(self.properties.len())
            .map(PropertyId)
            .map_err(|_| RegistryBuildError::TooManyEntries)?;
        self.properties.push(PropertyAliases {
            canonical,
            ..PropertyAliases::default()
        });

        for &alias in std::iter::once(&canonical).chain(aliases) {
            match self.by_name.entry(alias) {
                Entry::Vacant(e) => {
                    e.insert(id);
                }
                Entry::Occupied(e) if *e.get() == id => {}
                Entry::Occupied(e) => {
                    let existing = self.properties[e.get().index()].canonical;
                    return Err(RegistryBuildError::DuplicateAlias {
                        alias: alias.to_string(),
                        existing: existing.to_string(),
                        conflicting: canonical.to_string(),
                    });
                }
            }
        }
        Ok(id)
    }

    /// Register a canonical value of `property` under its name and every alias.
    pub(crate) fn add_value(
        &mut self,
        property: PropertyId,
        canonical: &'static str,
        aliases: &[&'static str],
    ) -> Result<ValueId, RegistryBuildError> {
        let prop = self
            .properties
            .get_mut(property.index())
            .ok_or(RegistryBuildError::TooManyEntries)?;
        let id = u16::try_from(prop.value_names.len())
            .map(ValueId)
            .map_err(|_| RegistryBuildError::TooManyEntries)?;
        prop.value_names.push(canonical);

        for &alias in std::iter::once(&canonical).chain(aliases) {
            match prop.values.entry(alias) {
                Entry::Vacant(e) => {
                    e.insert(id);
                }
                Entry::Occupied(e) if *e.get() == id => {}
                Entry::Occupied(e) => {
                    let existing = prop.value_names[e.get().index()];
                    return Err(RegistryBuildError::DuplicateAlias {
                        alias: format!("{}={}", prop.canonical, alias),
                        existing: existing.to_string(),
                        conflicting: canonical.to_string(),
                    });
                }
            }
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (AliasTable, PropertyId, PropertyId) {
        let mut t = AliasTable::new();
        let gc = t.add_property("General_Category", &["gc"]).unwrap();
        t.add_value(gc, "Letter", &["L"]).unwrap();
        t.add_value(gc, "Uppercase_Letter", &["Lu"]).unwrap();
        let lb = t.add_property("Line_Break", &["lb", "LB"]).unwrap();
        t.add_value(lb, "Alphabetic", &["AL"]).unwrap();
        (t, gc, lb)
    }

    #[test]
    fn lookup_by_canonical_and_alias() {
        let (t, gc, lb) = sample();
        assert_eq!(t.lookup_property_name("General_Category"), Some(gc));
        assert_eq!(t.lookup_property_name("gc"), Some(gc));
        assert_eq!(t.lookup_property_name("LB"), Some(lb));
        let l = t.lookup_property_value(gc, "L").unwrap();
        assert_eq!(t.lookup_property_value(gc, "Letter"), Some(l));
        assert_eq!(t.value_name(gc, l), Some("Letter"));
        assert_eq!(t.property_name(lb), Some("Line_Break"));
    }

    #[test]
    fn lookup_is_exact() {
        let (t, gc, lb) = sample();
        assert_eq!(t.lookup_property_name("GC"), None);
        assert_eq!(t.lookup_property_name("general_category"), None);
        assert_eq!(t.lookup_property_name("General Category"), None);
        assert_eq!(t.lookup_property_name("GeneralCategory"), None);
        assert_eq!(t.lookup_property_value(lb, "al"), None);
        assert_eq!(t.lookup_property_value(gc, "letter"), None);
    }

    #[test]
    fn values_are_scoped_to_their_property() {
        let (t, gc, lb) = sample();
        assert_eq!(t.lookup_property_value(lb, "L"), None);
        assert_eq!(t.lookup_property_value(gc, "AL"), None);
    }

    #[test]
    fn alias_equal_to_canonical_is_accepted() {
        let mut t = AliasTable::new();
        let id = t.add_property("Dash", &["Dash"]).unwrap();
        assert_eq!(t.lookup_property_name("Dash"), Some(id));
        assert_eq!(t.alias_count(), 1);
    }

    #[test]
    fn conflicting_property_alias_is_rejected() {
        let mut t = AliasTable::new();
        t.add_property("Script", &["sc"]).unwrap();
        let err = t.add_property("Script_Extensions", &["sc"]).unwrap_err();
        assert_eq!(
            err,
            RegistryBuildError::DuplicateAlias {
                alias: "sc".into(),
                existing: "Script".into(),
                conflicting: "Script_Extensions".into(),
            }
        );
    }

    #[test]
    fn conflicting_value_alias_is_rejected() {
        let mut t = AliasTable::new();
        let gc = t.add_property("General_Category", &["gc"]).unwrap();
        t.add_value(gc, "Letter", &["L"]).unwrap();
        let err = t.add_value(gc, "Lowercase_Letter", &["L"]).unwrap_err();
        assert!(matches!(err, RegistryBuildError::DuplicateAlias { .. }));
        assert_eq!(
            err.to_string(),
            "alias `General_Category=L` maps to both `Letter` and `Lowercase_Letter`"
        );
    }

    #[test]
    fn same_value_alias_in_different_properties() {
        let mut t = AliasTable::new();
        let gc = t.add_property("General_Category", &[]).unwrap();
        let hst = t.add_property("Hangul_Syllable_Type", &[]).unwrap();
        t.add_value(gc, "Letter", &["L"]).unwrap();
        t.add_value(hst, "Leading_Jamo", &["L"]).unwrap();
        assert_eq!(t.value_count(gc), 1);
        assert_eq!(t.value_count(hst), 1);
    }
}
