//! # Bolted Joint Equations
//!
//! All fundamental formulas used by the joint calculation live here, one
//! small pure function per formula, so each can be checked against its
//! reference on its own.
//!
//! ## Modules
//!
//! - [`thread`] - Thread stress area
//! - [`joint`] - Preload, load sharing, deformations and critical forces
//!
//! ## Units
//!
//! Fixed convention, no conversions:
//! - Length: mm
//! - Area: mm²
//! - Stress: MPa (N/mm²)
//! - Force: kN
//! - Stiffness: kN/mm
//!
//! ## Sign Conventions
//!
//! - **External force**: Positive in tension (pulling the joint apart)
//! - **Bolt force**: Positive in tension
//! - **Clamp force**: Positive in compression (parts pressed together)

pub mod joint;
pub mod thread;

pub use joint::{
    added_deformation,
    bolt_load_increment,
    breaking_load,
    clamp_load_relief,
    fracture_force,
    load_factor,
    preload,
    preload_deformation,
    separation_force,
};

pub use thread::stress_area;
