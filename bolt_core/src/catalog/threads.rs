//! Thread catalog
//!
//! Geometry rows as supplied by a table, and the catalog entry type that
//! adds the computed stress area.

use serde::{Deserialize, Serialize};

use super::{Catalog, CUSTOM_KEY};
use crate::equations::thread::stress_area;

/// Raw thread row from a table, before the stress area is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreadDimensions {
    /// Nominal major diameter D (mm), display only
    pub major_diameter_mm: f64,
    /// Diameter basis d used by the stress-area formula (mm)
    pub diameter_mm: f64,
    /// Thread pitch P (mm)
    pub pitch_mm: f64,
}

/// Known thread geometry with its stress area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreadGeometry {
    /// Nominal major diameter D (mm)
    pub major_diameter_mm: f64,
    /// Diameter basis d (mm)
    pub diameter_mm: f64,
    /// Thread pitch P (mm)
    pub pitch_mm: f64,
    /// Tensile stress area As (mm²)
    pub stress_area_mm2: f64,
}

impl ThreadGeometry {
    /// Copy the dimensions and derive As from `d` and `P`.
    pub fn from_dimensions(dims: ThreadDimensions) -> Self {
        ThreadGeometry {
            major_diameter_mm: dims.major_diameter_mm,
            diameter_mm: dims.diameter_mm,
            pitch_mm: dims.pitch_mm,
            stress_area_mm2: stress_area(dims.diameter_mm, dims.pitch_mm),
        }
    }
}

/// Thread catalog entry.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "Standard", "major_diameter_mm": 10.0, "diameter_mm": 8.16,
///   "pitch_mm": 1.5, "stress_area_mm2": 35.82 }
/// { "kind": "Custom" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ThreadSpec {
    /// Tabulated thread with known geometry
    Standard(ThreadGeometry),
    /// No geometry yet; the user enters it
    Custom,
}

impl ThreadSpec {
    pub fn geometry(&self) -> Option<&ThreadGeometry> {
        match self {
            ThreadSpec::Standard(geometry) => Some(geometry),
            ThreadSpec::Custom => None,
        }
    }

    pub fn stress_area_mm2(&self) -> Option<f64> {
        self.geometry().map(|g| g.stress_area_mm2)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ThreadSpec::Custom)
    }
}

/// Build the thread catalog.
///
/// Rows keep their order; a repeated name overwrites the earlier row in
/// place. `"Custom"` is always appended last as [`ThreadSpec::Custom`],
/// replacing any row of that name. Dimensions are not validated.
pub fn build_thread_catalog<I, S>(entries: I) -> Catalog<ThreadSpec>
where
    I: IntoIterator<Item = (S, ThreadDimensions)>,
    S: Into<String>,
{
    let mut catalog = Catalog::new("Thread");
    for (name, dims) in entries {
        catalog.insert(name, ThreadSpec::Standard(ThreadGeometry::from_dimensions(dims)));
    }
    catalog.push_last(CUSTOM_KEY, ThreadSpec::Custom);

    tracing::debug!(entries = catalog.len(), "Built thread catalog");
    catalog
}
