//! Catalog tables from TOML.
//!
//! Tables are arrays of tables so row order is part of the document:
//!
//! ```toml
//! [[thread]]
//! name = "M10"
//! major_diameter_mm = 10.0
//! diameter_mm = 8.16
//! pitch_mm = 1.5
//!
//! [[material]]
//! name = "8.8"
//! tensile_strength_mpa = 800.0
//! description = "Medium carbon steel, quenched and tempered"
//! color = "#3b82f6"
//! ```
//!
//! Default tables are embedded at compile time from `bolt_core/data/`.

use serde::Deserialize;

use super::materials::{build_material_catalog, MaterialSpec};
use super::threads::{build_thread_catalog, ThreadDimensions, ThreadSpec};
use super::Catalog;
use crate::errors::CalcResult;

/// Bundled ISO metric coarse thread table
pub const DEFAULT_THREADS_TOML: &str = include_str!("../../data/threads.toml");

/// Bundled bolt property class table
pub const DEFAULT_MATERIALS_TOML: &str = include_str!("../../data/materials.toml");

#[derive(Debug, Deserialize)]
struct ThreadTable {
    #[serde(default)]
    thread: Vec<ThreadRow>,
}

#[derive(Debug, Deserialize)]
struct ThreadRow {
    name: String,
    major_diameter_mm: f64,
    diameter_mm: f64,
    pitch_mm: f64,
}

#[derive(Debug, Deserialize)]
struct MaterialTable {
    #[serde(default)]
    material: Vec<MaterialRow>,
}

#[derive(Debug, Deserialize)]
struct MaterialRow {
    name: String,
    tensile_strength_mpa: Option<f64>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: String,
}

/// Parse `[[thread]]` rows in document order.
pub fn parse_thread_table(source: &str) -> CalcResult<Vec<(String, ThreadDimensions)>> {
    let table: ThreadTable = toml::from_str(source)?;
    Ok(table
        .thread
        .into_iter()
        .map(|row| {
            (
                row.name,
                ThreadDimensions {
                    major_diameter_mm: row.major_diameter_mm,
                    diameter_mm: row.diameter_mm,
                    pitch_mm: row.pitch_mm,
                },
            )
        })
        .collect())
}

/// Parse `[[material]]` rows in document order.
pub fn parse_material_table(source: &str) -> CalcResult<Vec<(String, MaterialSpec)>> {
    let table: MaterialTable = toml::from_str(source)?;
    Ok(table
        .material
        .into_iter()
        .map(|row| {
            (
                row.name,
                MaterialSpec {
                    tensile_strength_mpa: row.tensile_strength_mpa,
                    description: row.description,
                    color: row.color,
                },
            )
        })
        .collect())
}

/// Thread catalog built from the bundled table
pub fn default_thread_catalog() -> CalcResult<Catalog<ThreadSpec>> {
    Ok(build_thread_catalog(parse_thread_table(DEFAULT_THREADS_TOML)?))
}

/// Material catalog built from the bundled table
pub fn default_material_catalog() -> CalcResult<Catalog<MaterialSpec>> {
    Ok(build_material_catalog(parse_material_table(DEFAULT_MATERIALS_TOML)?))
}
