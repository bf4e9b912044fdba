//! # Catalogs
//!
//! Named thread and material tables for selection in a front end. Each
//! builder takes rows in a caller-defined order and returns a [`Catalog`]
//! with the same order plus a trailing `"Custom"` sentinel entry, which
//! stands for "the user will type the value in".
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::catalog::{build_thread_catalog, ThreadDimensions, CUSTOM_KEY};
//!
//! let catalog = build_thread_catalog(vec![(
//!     "M10".to_string(),
//!     ThreadDimensions { major_diameter_mm: 10.0, diameter_mm: 8.16, pitch_mm: 1.5 },
//! )]);
//!
//! assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["M10", CUSTOM_KEY]);
//! assert!(catalog.get(CUSTOM_KEY).unwrap().stress_area_mm2().is_none());
//! ```

pub mod config;
pub mod materials;
pub mod threads;

pub use config::{
    default_material_catalog, default_thread_catalog, parse_material_table, parse_thread_table,
    DEFAULT_MATERIALS_TOML, DEFAULT_THREADS_TOML,
};
pub use materials::{build_material_catalog, MaterialSpec, CUSTOM_MATERIAL_COLOR, CUSTOM_MATERIAL_DESCRIPTION};
pub use threads::{build_thread_catalog, ThreadDimensions, ThreadGeometry, ThreadSpec};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::{CalcError, CalcResult};

/// Key of the sentinel entry appended to every catalog
pub const CUSTOM_KEY: &str = "Custom";

/// Insertion-ordered name → value table.
///
/// Re-inserting an existing name replaces its value without moving it.
/// Serializes as a JSON object whose keys keep the insertion order.
///
/// Built catalogs are read-only outside this crate:
///
/// ```compile_fail
/// use bolt_core::catalog::{build_thread_catalog, ThreadDimensions, ThreadSpec};
///
/// let mut catalog = build_thread_catalog(Vec::<(String, ThreadDimensions)>::new());
/// catalog.insert("M99", ThreadSpec::Custom);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    kind: &'static str,
    entries: Vec<(String, T)>,
}

impl<T> Catalog<T> {
    /// Create an empty catalog. `kind` names the catalog in lookup errors.
    pub fn new(kind: &'static str) -> Self {
        Catalog {
            kind,
            entries: Vec::new(),
        }
    }

    /// Insert or replace an entry, keeping the position of an existing name.
    ///
    /// Crate-only so a built catalog always ends with the `"Custom"` entry.
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert an entry as the last one, dropping any earlier entry of that name.
    pub(crate) fn push_last(&mut self, name: &str, value: T) {
        self.entries.retain(|(n, _)| n != name);
        self.entries.push((name.to_string(), value));
    }

    /// Name of this catalog ("Thread", "Material")
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Like [`Catalog::get`] but with an `EntryNotFound` error for unknown names.
    pub fn lookup(&self, name: &str) -> CalcResult<&T> {
        self.get(name)
            .ok_or_else(|| CalcError::entry_not_found(self.kind, name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entry names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
