//! Material catalog
//!
//! Bolt materials (property classes) with their tensile strength and the
//! colour a front end uses to tag them.

use serde::{Deserialize, Serialize};

use super::{Catalog, CUSTOM_KEY};

/// Description of the `"Custom"` sentinel material
pub const CUSTOM_MATERIAL_DESCRIPTION: &str = "User defined";

/// Display colour of the `"Custom"` sentinel material
pub const CUSTOM_MATERIAL_COLOR: &str = "#64748b";

/// Material catalog entry.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tensile_strength_mpa": 800.0,
///   "description": "Medium carbon steel, quenched and tempered",
///   "color": "#3b82f6"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Tensile strength σB (MPa). `None` when the user enters it.
    pub tensile_strength_mpa: Option<f64>,

    /// Free-form description
    pub description: String,

    /// Display colour (CSS hex)
    pub color: String,
}

impl MaterialSpec {
    /// Material with a known strength
    pub fn new(tensile_strength_mpa: f64, description: impl Into<String>, color: impl Into<String>) -> Self {
        MaterialSpec {
            tensile_strength_mpa: Some(tensile_strength_mpa),
            description: description.into(),
            color: color.into(),
        }
    }

    /// The `"Custom"` sentinel entry
    pub fn custom() -> Self {
        MaterialSpec {
            tensile_strength_mpa: None,
            description: CUSTOM_MATERIAL_DESCRIPTION.to_string(),
            color: CUSTOM_MATERIAL_COLOR.to_string(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.tensile_strength_mpa.is_none()
    }
}

/// Build the material catalog.
///
/// Entries are copied unchanged and keep their order. `"Custom"` is always
/// appended last as [`MaterialSpec::custom`], replacing any entry of that
/// name.
pub fn build_material_catalog<I, S>(entries: I) -> Catalog<MaterialSpec>
where
    I: IntoIterator<Item = (S, MaterialSpec)>,
    S: Into<String>,
{
    let mut catalog = Catalog::new("Material");
    for (name, spec) in entries {
        catalog.insert(name, spec);
    }
    catalog.push_last(CUSTOM_KEY, MaterialSpec::custom());

    tracing::debug!(entries = catalog.len(), "Built material catalog");
    catalog
}
