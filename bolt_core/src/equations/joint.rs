//! # Bolted Joint Formulas
//!
//! Linear spring model of a preloaded bolted joint. The bolt and the clamped
//! parts act as two springs in parallel with respect to an external axial
//! load applied after tightening.
//!
//! ```text
//!            W (external)
//!               ↑
//!        ┌──────┴──────┐
//!        │ ▓▓  bolt ▓▓ │  Kb  ← takes φ·W as extra tension
//!        │ ░░ clamp ░░ │  Kc  ← loses (1-φ)·W of compression
//!        └──────┬──────┘
//!               ↓
//! ```
//!
//! ## Notation
//!
//! - `σB` = Tensile strength of the bolt material (MPa = N/mm²)
//! - `As` = Tensile stress area (mm²)
//! - `Kb`, `Kc` = Axial stiffness of bolt and clamped parts (kN/mm)
//! - `W0` = Preload (kN)
//! - `W` = External axial force (kN), positive in tension
//! - `φ` = Load factor Kb / (Kb + Kc)
//!
//! ## Division by Zero
//!
//! None of these functions guard their divisors. A zero stiffness sum, a
//! zero stiffness or a load factor of exactly 0 or 1 yields ±inf or NaN,
//! which the caller is expected to carry through as data.

// =============================================================================
// PRELOAD
// Bolt capacity and initial tightening force
// =============================================================================

/// Axial breaking load of the bolt
///
/// # Formula
/// Fu = σB × As / 1000
///
/// The division converts N (MPa × mm²) to kN.
///
/// # Example
/// ```rust
/// use bolt_core::equations::joint::breaking_load;
///
/// let fu = breaking_load(800.0, 157.9);
/// assert!((fu - 126.32).abs() < 1e-9);
/// ```
#[inline]
pub fn breaking_load(tensile_strength_mpa: f64, stress_area_mm2: f64) -> f64 {
    tensile_strength_mpa * stress_area_mm2 / 1000.0
}

/// Initial preload as a percentage of the breaking load
///
/// # Formula
/// W0 = Fu × pct / 100
#[inline]
pub fn preload(breaking_load_kn: f64, preload_percent: f64) -> f64 {
    breaking_load_kn * preload_percent / 100.0
}

// =============================================================================
// LOAD SHARING
// Split of the external force between bolt and clamped parts
// =============================================================================

/// Load factor: share of the external force carried by the bolt
///
/// # Formula
/// φ = Kb / (Kb + Kc)
///
/// Non-finite when `Kb + Kc == 0`.
#[inline]
pub fn load_factor(bolt_stiffness: f64, clamp_stiffness: f64) -> f64 {
    bolt_stiffness / (bolt_stiffness + clamp_stiffness)
}

/// Additional bolt tension from the external force: ΔWb = W × φ
#[inline]
pub fn bolt_load_increment(external_force_kn: f64, phi: f64) -> f64 {
    external_force_kn * phi
}

/// Reduction of clamp force from the external force: ΔWc = W × (1 - φ)
#[inline]
pub fn clamp_load_relief(external_force_kn: f64, phi: f64) -> f64 {
    external_force_kn * (1.0 - phi)
}

// =============================================================================
// DEFORMATIONS
// =============================================================================

/// Deformation of one spring under the preload
///
/// # Formula
/// δ = W0 / K
///
/// Used for both bolt elongation (K = Kb) and clamp compression (K = Kc).
/// Result is in mm.
#[inline]
pub fn preload_deformation(preload_kn: f64, stiffness_kn_per_mm: f64) -> f64 {
    preload_kn / stiffness_kn_per_mm
}

/// Additional joint deformation once the external force is applied
///
/// # Formula
/// Δδ = W / (Kb + Kc)
#[inline]
pub fn added_deformation(external_force_kn: f64, bolt_stiffness: f64, clamp_stiffness: f64) -> f64 {
    external_force_kn / (bolt_stiffness + clamp_stiffness)
}

// =============================================================================
// CRITICAL FORCES
// External force at which a risk condition is reached exactly
// =============================================================================

/// External force at which the residual clamp force reaches zero
///
/// # Formula
/// Wsep = W0 / (1 - φ)
///
/// Non-finite when φ = 1 (no clamp stiffness).
#[inline]
pub fn separation_force(preload_kn: f64, phi: f64) -> f64 {
    preload_kn / (1.0 - phi)
}

/// External force at which bolt tension reaches the breaking load
///
/// # Formula
/// Wfrac = (Fu - W0) / φ
///
/// Non-finite when φ = 0 (no bolt stiffness).
#[inline]
pub fn fracture_force(breaking_load_kn: f64, preload_kn: f64, phi: f64) -> f64 {
    (breaking_load_kn - preload_kn) / phi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaking_load_and_preload() {
        let fu = breaking_load(800.0, 157.9);
        assert!((fu - 126.32).abs() < 1e-9);
        assert!((preload(fu, 75.0) - 94.74).abs() < 1e-9);
    }

    #[test]
    fn test_load_factor() {
        assert_eq!(load_factor(500.0, 1500.0), 0.25);
        assert_eq!(load_factor(1.0, 0.0), 1.0);
        assert_eq!(load_factor(0.0, 1.0), 0.0);
        assert!(load_factor(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_increment_and_relief_sum_to_external() {
        let phi = load_factor(300.0, 900.0);
        let w = 12.5;
        let sum = bolt_load_increment(w, phi) + clamp_load_relief(w, phi);
        assert!((sum - w).abs() < 1e-12);
    }

    #[test]
    fn test_deformations() {
        assert!((preload_deformation(94.74, 500.0) - 0.18948).abs() < 1e-12);
        assert!((added_deformation(10.0, 500.0, 1500.0) - 0.005).abs() < 1e-12);
        assert!(preload_deformation(10.0, 0.0).is_infinite());
    }

    #[test]
    fn test_critical_forces_degenerate() {
        assert!(separation_force(50.0, 1.0).is_infinite());
        assert!(fracture_force(100.0, 50.0, 0.0).is_infinite());
        // 0/0 when the preload equals the breaking load and φ = 0
        assert!(fracture_force(100.0, 100.0, 0.0).is_nan());
    }
}
