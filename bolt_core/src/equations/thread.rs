//! # Thread Geometry Formulas
//!
//! Formulas for the load-bearing cross-section of a threaded fastener.
//!
//! ## Notation
//!
//! - `d` = Diameter basis for the stress area (mm)
//! - `P` = Thread pitch (mm)
//! - `As` = Tensile stress area (mm²)
//!
//! ## References
//!
//! - ISO 898-1: Mechanical properties of fasteners, stress area definition

// =============================================================================
// CONSTANTS
// =============================================================================

/// Fixed four-decimal approximation of π/4 used by the stress-area formula.
///
/// Results are expected to match tables computed with this exact value, so
/// it is intentionally not `std::f64::consts::FRAC_PI_4`.
pub const QUARTER_PI_APPROX: f64 = 0.7854;

/// Pitch multiplier subtracted from the diameter basis.
pub const PITCH_REDUCTION: f64 = 0.9382;

// =============================================================================
// STRESS AREA
// Metric thread, single-start
// =============================================================================

/// Calculate the tensile stress area of a thread
///
/// ```text
///      ╱╲╱╲╱╲╱╲╱╲
///     │          │  ← d
///      ╲╱╲╱╲╱╲╱╲╱
///       ←P→
/// ```
///
/// # Formula
/// As = 0.7854 × (d - 0.9382·P)²
///
/// # Arguments
/// * `d` - Diameter basis in mm
/// * `p` - Thread pitch in mm
///
/// # Returns
/// Stress area in mm². The squared term keeps the result non-negative even
/// when `d < 0.9382·P`. No validation is performed: zero or negative inputs
/// are evaluated as-is and NaN propagates.
///
/// # Example
/// ```rust
/// use bolt_core::equations::thread::stress_area;
///
/// // M16 coarse: d = 16 mm, P = 2 mm
/// let a_s = stress_area(16.0, 2.0);
/// assert!((a_s - 156.67).abs() < 0.01);
/// ```
#[inline]
pub fn stress_area(d: f64, p: f64) -> f64 {
    QUARTER_PI_APPROX * (d - PITCH_REDUCTION * p).powi(2)
}
