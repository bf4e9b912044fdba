//! # bolt_core - Bolted Joint Calculation Engine
//!
//! `bolt_core` computes the mechanics of a preloaded bolted joint: the thread
//! stress area, the preload from material strength, how an external axial
//! force is shared between bolt and clamped parts, and the forces at which
//! the joint separates or the bolt breaks. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **No hidden failures**: Degenerate input gives non-finite numbers, not errors
//! - **Explicit sentinels**: "Custom" catalog entries carry no numbers to misuse
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_core::calculations::{calculate, JointInput, JointParameters};
//! use bolt_core::catalog::{default_material_catalog, default_thread_catalog};
//!
//! let threads = default_thread_catalog().unwrap();
//! let materials = default_material_catalog().unwrap();
//!
//! let input = JointInput::from_selection(
//!     threads.lookup("M12").unwrap(),
//!     materials.lookup("8.8").unwrap(),
//!     JointParameters {
//!         bolt_stiffness_kn_per_mm: 500.0,
//!         clamp_stiffness_kn_per_mm: 1500.0,
//!         preload_percent: 70.0,
//!         external_force_kn: 5.0,
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! let result = calculate(&input);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Stress area and joint formulas
//! - [`calculations`] - Joint input/result types and `calculate`
//! - [`catalog`] - Thread and material catalogs with the "Custom" sentinel
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, JointInput, JointParameters, JointResult};
pub use catalog::{build_material_catalog, build_thread_catalog, Catalog, MaterialSpec, ThreadSpec};
pub use equations::stress_area;
pub use errors::{CalcError, CalcResult};
