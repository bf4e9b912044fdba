//! # Joint Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`joint`] - Preloaded bolted joint under axial external force

pub mod joint;

pub use joint::{calculate, JointInput, JointParameters, JointResult};
