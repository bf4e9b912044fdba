//! # Bolted Joint Calculation
//!
//! Preload, load sharing and risk thresholds for a single bolt clamping a
//! stack of parts, using the linear two-spring joint model.
//!
//! ## Assumptions
//!
//! - Axial loading only, applied concentrically
//! - Linear-elastic bolt and clamped parts (constant stiffness)
//! - Preload specified as a percentage of the breaking load
//!
//! ## Degenerate Input
//!
//! [`calculate`] never fails and never validates. A zero divisor poisons
//! only the fields that depend on it, which then hold ±inf or NaN. Use
//! [`JointInput::validate`] beforehand when strict input is wanted, and
//! [`JointResult::non_finite_fields`] to find fields that need an "N/A".
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::calculations::joint::{calculate, JointInput};
//!
//! let input = JointInput {
//!     tensile_strength_mpa: 800.0,
//!     stress_area_mm2: 157.9,
//!     bolt_stiffness_kn_per_mm: 500.0,
//!     clamp_stiffness_kn_per_mm: 1500.0,
//!     preload_percent: 75.0,
//!     external_force_kn: 10.0,
//! };
//!
//! let result = calculate(&input);
//! assert!((result.breaking_load_kn - 126.32).abs() < 1e-9);
//! assert!((result.bolt_force_kn - 97.24).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{MaterialSpec, ThreadSpec};
use crate::equations::joint::{
    added_deformation, bolt_load_increment, breaking_load, clamp_load_relief, fracture_force,
    load_factor, preload, preload_deformation, separation_force,
};
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a bolted joint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tensile_strength_mpa": 800.0,
///   "stress_area_mm2": 157.9,
///   "bolt_stiffness_kn_per_mm": 500.0,
///   "clamp_stiffness_kn_per_mm": 1500.0,
///   "preload_percent": 75.0,
///   "external_force_kn": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointInput {
    /// Tensile strength σB of the bolt material (MPa)
    pub tensile_strength_mpa: f64,

    /// Tensile stress area As (mm²)
    pub stress_area_mm2: f64,

    /// Axial stiffness of the bolt Kb (kN/mm)
    pub bolt_stiffness_kn_per_mm: f64,

    /// Axial stiffness of the clamped parts Kc (kN/mm)
    pub clamp_stiffness_kn_per_mm: f64,

    /// Preload as a percentage of the breaking load (0-100)
    pub preload_percent: f64,

    /// External axial force (kN), positive in tension
    pub external_force_kn: f64,
}

/// Everything except the thread and material, used to resolve a catalog
/// selection into a [`JointInput`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointParameters {
    /// Overrides the thread's stress area; required for a Custom thread
    pub stress_area_mm2: Option<f64>,
    /// Overrides the material's strength; required for a Custom material
    pub tensile_strength_mpa: Option<f64>,
    pub bolt_stiffness_kn_per_mm: f64,
    pub clamp_stiffness_kn_per_mm: f64,
    pub preload_percent: f64,
    pub external_force_kn: f64,
}

impl JointInput {
    /// Resolve a thread and material selection.
    ///
    /// Explicit overrides in `params` win over catalog values. A Custom
    /// sentinel without an override is a `MissingField` error.
    pub fn from_selection(
        thread: &ThreadSpec,
        material: &MaterialSpec,
        params: JointParameters,
    ) -> CalcResult<Self> {
        let stress_area_mm2 = params
            .stress_area_mm2
            .or_else(|| thread.stress_area_mm2())
            .ok_or_else(|| CalcError::missing_field("stress_area_mm2"))?;
        let tensile_strength_mpa = params
            .tensile_strength_mpa
            .or(material.tensile_strength_mpa)
            .ok_or_else(|| CalcError::missing_field("tensile_strength_mpa"))?;

        Ok(JointInput {
            tensile_strength_mpa,
            stress_area_mm2,
            bolt_stiffness_kn_per_mm: params.bolt_stiffness_kn_per_mm,
            clamp_stiffness_kn_per_mm: params.clamp_stiffness_kn_per_mm,
            preload_percent: params.preload_percent,
            external_force_kn: params.external_force_kn,
        })
    }

    /// Check that the input is physically meaningful.
    ///
    /// [`calculate`] does not call this. The external force may have either
    /// sign, but must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("tensile_strength_mpa", self.tensile_strength_mpa, "Tensile strength must be positive"),
            ("stress_area_mm2", self.stress_area_mm2, "Stress area must be positive"),
            ("bolt_stiffness_kn_per_mm", self.bolt_stiffness_kn_per_mm, "Bolt stiffness must be positive"),
            ("clamp_stiffness_kn_per_mm", self.clamp_stiffness_kn_per_mm, "Clamp stiffness must be positive"),
        ];
        for (field, value, reason) in positive {
            // also rejects NaN
            if !(value > 0.0 && value.is_finite()) {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }
        if !(0.0..=100.0).contains(&self.preload_percent) {
            return Err(CalcError::invalid_input(
                "preload_percent",
                self.preload_percent.to_string(),
                "Preload must be between 0 and 100 percent",
            ));
        }
        if !self.external_force_kn.is_finite() {
            return Err(CalcError::invalid_input(
                "external_force_kn",
                self.external_force_kn.to_string(),
                "External force must be finite",
            ));
        }
        Ok(())
    }
}

/// Results from the joint calculation.
///
/// Non-finite values serialize as JSON `null`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "breaking_load_kn": 126.32,
///   "preload_kn": 94.74,
///   "load_factor": 0.25,
///   "bolt_load_increment_kn": 2.5,
///   "clamp_load_relief_kn": 7.5,
///   "bolt_force_kn": 97.24,
///   "clamp_force_kn": 87.24,
///   "bolt_elongation_mm": 0.18948,
///   "clamp_compression_mm": 0.06316,
///   "added_deformation_mm": 0.005,
///   "loosening_danger": false,
///   "breakage_danger": false,
///   "loosening_force_kn": 126.32,
///   "breakage_force_kn": 126.32
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointResult {
    /// Breaking load Fu = σB·As/1000 (kN)
    pub breaking_load_kn: f64,

    /// Preload W0 (kN)
    pub preload_kn: f64,

    /// Load factor φ = Kb/(Kb+Kc)
    pub load_factor: f64,

    /// Additional bolt tension ΔWb (kN)
    pub bolt_load_increment_kn: f64,

    /// Clamp force relief ΔWc (kN)
    pub clamp_load_relief_kn: f64,

    /// Final bolt tension Wb = W0 + ΔWb (kN)
    pub bolt_force_kn: f64,

    /// Residual clamp force Wc = W0 - ΔWc (kN)
    pub clamp_force_kn: f64,

    /// Bolt elongation from preload (mm)
    pub bolt_elongation_mm: f64,

    /// Clamped parts compression from preload (mm)
    pub clamp_compression_mm: f64,

    /// Additional joint deformation under the external force (mm)
    pub added_deformation_mm: f64,

    /// Joint has separated (Wc ≤ 0)
    pub loosening_danger: bool,

    /// Bolt tension at or above the breaking load (Wb ≥ Fu)
    pub breakage_danger: bool,

    /// External force at which Wc reaches zero (kN)
    pub loosening_force_kn: f64,

    /// External force at which Wb reaches Fu (kN)
    pub breakage_force_kn: f64,
}

impl JointResult {
    /// Neither separation nor fracture is predicted
    pub fn passes(&self) -> bool {
        !self.loosening_danger && !self.breakage_danger
    }

    /// Which risk condition(s) are triggered
    pub fn governing_condition(&self) -> &'static str {
        match (self.loosening_danger, self.breakage_danger) {
            (true, true) => "Separation + Fracture",
            (true, false) => "Separation",
            (false, true) => "Fracture",
            (false, false) => "None",
        }
    }

    /// Additional external force the joint takes before separating (kN).
    /// Negative once separated.
    pub fn separation_margin_kn(&self, external_force_kn: f64) -> f64 {
        self.loosening_force_kn - external_force_kn
    }

    /// Additional external force the bolt takes before breaking (kN).
    /// Negative once past the breaking load.
    pub fn fracture_margin_kn(&self, external_force_kn: f64) -> f64 {
        self.breakage_force_kn - external_force_kn
    }

    /// Names and values of all numeric fields, in declaration order
    pub fn numeric_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("breaking_load_kn", self.breaking_load_kn),
            ("preload_kn", self.preload_kn),
            ("load_factor", self.load_factor),
            ("bolt_load_increment_kn", self.bolt_load_increment_kn),
            ("clamp_load_relief_kn", self.clamp_load_relief_kn),
            ("bolt_force_kn", self.bolt_force_kn),
            ("clamp_force_kn", self.clamp_force_kn),
            ("bolt_elongation_mm", self.bolt_elongation_mm),
            ("clamp_compression_mm", self.clamp_compression_mm),
            ("added_deformation_mm", self.added_deformation_mm),
            ("loosening_force_kn", self.loosening_force_kn),
            ("breakage_force_kn", self.breakage_force_kn),
        ]
    }

    /// Fields holding NaN or ±inf
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        self.numeric_fields()
            .into_iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Calculate preload, load distribution, deformations and risk thresholds.
///
/// Pure arithmetic in a fixed order; identical input gives bit-identical
/// output. No validation is performed, see the module docs for degenerate
/// input.
pub fn calculate(input: &JointInput) -> JointResult {
    let kb = input.bolt_stiffness_kn_per_mm;
    let kc = input.clamp_stiffness_kn_per_mm;
    let w = input.external_force_kn;

    let breaking_load_kn = breaking_load(input.tensile_strength_mpa, input.stress_area_mm2);
    let preload_kn = preload(breaking_load_kn, input.preload_percent);
    let phi = load_factor(kb, kc);

    let bolt_load_increment_kn = bolt_load_increment(w, phi);
    let clamp_load_relief_kn = clamp_load_relief(w, phi);

    let bolt_force_kn = preload_kn + bolt_load_increment_kn;
    let clamp_force_kn = preload_kn - clamp_load_relief_kn;

    let result = JointResult {
        breaking_load_kn,
        preload_kn,
        load_factor: phi,
        bolt_load_increment_kn,
        clamp_load_relief_kn,
        bolt_force_kn,
        clamp_force_kn,
        bolt_elongation_mm: preload_deformation(preload_kn, kb),
        clamp_compression_mm: preload_deformation(preload_kn, kc),
        added_deformation_mm: added_deformation(w, kb, kc),
        loosening_danger: clamp_force_kn <= 0.0,
        breakage_danger: bolt_force_kn >= breaking_load_kn,
        loosening_force_kn: separation_force(preload_kn, phi),
        breakage_force_kn: fracture_force(breaking_load_kn, preload_kn, phi),
    };

    tracing::debug!(
        preload_kn = result.preload_kn,
        bolt_force_kn = result.bolt_force_kn,
        clamp_force_kn = result.clamp_force_kn,
        governing = result.governing_condition(),
        "Joint calculated"
    );
    let non_finite = result.non_finite_fields();
    if !non_finite.is_empty() {
        tracing::warn!(fields = ?non_finite, "Joint result contains non-finite values");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ThreadDimensions, ThreadGeometry};
    use proptest::prelude::*;

    fn test_joint() -> JointInput {
        JointInput {
            tensile_strength_mpa: 800.0,
            stress_area_mm2: 157.9,
            bolt_stiffness_kn_per_mm: 500.0,
            clamp_stiffness_kn_per_mm: 1500.0,
            preload_percent: 75.0,
            external_force_kn: 10.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_example() {
        let result = calculate(&test_joint());

        assert!(close(result.breaking_load_kn, 126.32));
        assert!(close(result.preload_kn, 94.74));
        assert_eq!(result.load_factor, 0.25);
        assert!(close(result.bolt_load_increment_kn, 2.5));
        assert!(close(result.clamp_load_relief_kn, 7.5));
        assert!(close(result.bolt_force_kn, 97.24));
        assert!(close(result.clamp_force_kn, 87.24));
        assert!(!result.loosening_danger);
        assert!(!result.breakage_danger);
        assert!(result.passes());
        assert_eq!(result.governing_condition(), "None");
    }

    #[test]
    fn test_deformations() {
        let result = calculate(&test_joint());
        // 94.74 / 500, 94.74 / 1500, 10 / 2000
        assert!(close(result.bolt_elongation_mm, 0.18948));
        assert!(close(result.clamp_compression_mm, 0.06316));
        assert!(close(result.added_deformation_mm, 0.005));
    }

    #[test]
    fn test_critical_forces() {
        let result = calculate(&test_joint());
        // 94.74 / 0.75 and (126.32 - 94.74) / 0.25
        assert!(close(result.loosening_force_kn, 126.32));
        assert!(close(result.breakage_force_kn, 126.32));
        assert!(close(result.separation_margin_kn(10.0), 116.32));
        assert!(close(result.fracture_margin_kn(10.0), 116.32));
    }

    #[test]
    fn test_separation_at_critical_force() {
        let base = calculate(&test_joint());
        let mut input = test_joint();
        input.external_force_kn = base.loosening_force_kn;

        let result = calculate(&input);
        assert!(result.clamp_force_kn.abs() < 1e-9);
    }

    #[test]
    fn test_fracture_at_critical_force() {
        let mut input = test_joint();
        input.bolt_stiffness_kn_per_mm = 1500.0;
        input.clamp_stiffness_kn_per_mm = 500.0;
        let base = calculate(&input);
        input.external_force_kn = base.breakage_force_kn;

        let result = calculate(&input);
        assert!((result.bolt_force_kn - result.breaking_load_kn).abs() < 1e-9);
    }

    #[test]
    fn test_loosening_danger() {
        let mut input = test_joint();
        input.external_force_kn = 200.0;
        let result = calculate(&input);
        assert!(result.loosening_danger);
        assert!(result.clamp_force_kn < 0.0);
        assert!(result.separation_margin_kn(200.0) < 0.0);
    }

    #[test]
    fn test_breakage_danger() {
        let mut input = test_joint();
        input.preload_percent = 100.0;
        input.external_force_kn = 1.0;
        let result = calculate(&input);
        assert!(result.breakage_danger);
        assert!(!result.loosening_danger);
        assert_eq!(result.governing_condition(), "Fracture");
        assert!(!result.passes());
    }

    #[test]
    fn test_breakage_flag_at_exact_breaking_load() {
        // Fu = 800 × 125 / 1000 = 100 kN exactly
        let input = JointInput {
            tensile_strength_mpa: 800.0,
            stress_area_mm2: 125.0,
            preload_percent: 100.0,
            external_force_kn: 0.0,
            ..test_joint()
        };
        let result = calculate(&input);
        assert_eq!(result.breaking_load_kn, 100.0);
        assert_eq!(result.bolt_force_kn, result.breaking_load_kn);
        assert!(result.breakage_danger);
        assert!(!result.loosening_danger);
    }

    #[test]
    fn test_loosening_flag_at_zero_clamp_force() {
        let input = JointInput {
            preload_percent: 0.0,
            external_force_kn: 0.0,
            ..test_joint()
        };
        let result = calculate(&input);
        assert_eq!(result.clamp_force_kn, 0.0);
        assert!(result.loosening_danger);
        assert!(!result.breakage_danger);
    }

    #[test]
    fn test_both_dangers() {
        let mut input = test_joint();
        input.preload_percent = 100.0;
        input.external_force_kn = 1000.0;
        let result = calculate(&input);
        assert_eq!(result.governing_condition(), "Separation + Fracture");
    }

    #[test]
    fn test_negative_external_force_accepted() {
        let mut input = test_joint();
        input.external_force_kn = -10.0;
        let result = calculate(&input);
        assert!(close(result.bolt_force_kn, 92.24));
        assert!(close(result.clamp_force_kn, 102.24));
        assert!(result.non_finite_fields().is_empty());
    }

    #[test]
    fn test_zero_stiffness_sum() {
        let mut input = test_joint();
        input.bolt_stiffness_kn_per_mm = 0.0;
        input.clamp_stiffness_kn_per_mm = 0.0;
        let result = calculate(&input);

        assert!(result.load_factor.is_nan());
        assert!(result.added_deformation_mm.is_infinite());
        // preload-only fields stay intact
        assert!(close(result.breaking_load_kn, 126.32));
        assert!(close(result.preload_kn, 94.74));
        // NaN comparisons are false
        assert!(!result.loosening_danger);
        assert!(!result.breakage_danger);
    }

    #[test]
    fn test_zero_clamp_stiffness() {
        let mut input = test_joint();
        input.clamp_stiffness_kn_per_mm = 0.0;
        let result = calculate(&input);

        assert_eq!(result.load_factor, 1.0);
        assert!(result.clamp_compression_mm.is_infinite());
        assert!(result.loosening_force_kn.is_infinite());
        assert!(result.breakage_force_kn.is_finite());
        assert_eq!(
            result.non_finite_fields(),
            vec!["clamp_compression_mm", "loosening_force_kn"]
        );
    }

    #[test]
    fn test_zero_bolt_stiffness() {
        let mut input = test_joint();
        input.bolt_stiffness_kn_per_mm = 0.0;
        let result = calculate(&input);

        assert_eq!(result.load_factor, 0.0);
        assert!(result.bolt_elongation_mm.is_infinite());
        assert!(result.breakage_force_kn.is_infinite());
        assert!(result.loosening_force_kn.is_finite());
    }

    #[test]
    fn test_non_finite_serializes_as_null() {
        let mut input = test_joint();
        input.clamp_stiffness_kn_per_mm = 0.0;
        let json = serde_json::to_value(calculate(&input)).unwrap();
        assert!(json["loosening_force_kn"].is_null());
        assert_eq!(json["load_factor"], 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(test_joint().validate().is_ok());

        let mut input = test_joint();
        input.bolt_stiffness_kn_per_mm = 0.0;
        assert!(matches!(
            input.validate(),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "bolt_stiffness_kn_per_mm"
        ));

        let mut input = test_joint();
        input.preload_percent = 120.0;
        assert!(input.validate().is_err());

        let mut input = test_joint();
        input.stress_area_mm2 = f64::NAN;
        assert!(input.validate().is_err());

        let mut input = test_joint();
        input.external_force_kn = -5.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_from_selection() {
        let thread = ThreadSpec::Standard(ThreadGeometry::from_dimensions(ThreadDimensions {
            major_diameter_mm: 16.0,
            diameter_mm: 16.0,
            pitch_mm: 2.0,
        }));
        let material = MaterialSpec::new(800.0, "8.8", "#3b82f6");
        let params = JointParameters {
            bolt_stiffness_kn_per_mm: 500.0,
            clamp_stiffness_kn_per_mm: 1500.0,
            preload_percent: 75.0,
            external_force_kn: 10.0,
            ..Default::default()
        };

        let input = JointInput::from_selection(&thread, &material, params).unwrap();
        assert_eq!(input.stress_area_mm2, thread.stress_area_mm2().unwrap());
        assert_eq!(input.tensile_strength_mpa, 800.0);
    }

    #[test]
    fn test_from_selection_custom_requires_value() {
        let params = JointParameters {
            tensile_strength_mpa: Some(900.0),
            ..Default::default()
        };
        let err = JointInput::from_selection(&ThreadSpec::Custom, &MaterialSpec::custom(), params)
            .unwrap_err();
        assert_eq!(err, CalcError::missing_field("stress_area_mm2"));

        let params = JointParameters {
            stress_area_mm2: Some(157.9),
            ..Default::default()
        };
        let err = JointInput::from_selection(&ThreadSpec::Custom, &MaterialSpec::custom(), params)
            .unwrap_err();
        assert_eq!(err, CalcError::missing_field("tensile_strength_mpa"));
    }

    #[test]
    fn test_override_wins_over_catalog() {
        let material = MaterialSpec::new(800.0, "8.8", "#3b82f6");
        let params = JointParameters {
            stress_area_mm2: Some(100.0),
            tensile_strength_mpa: Some(1000.0),
            ..Default::default()
        };
        let input = JointInput::from_selection(&ThreadSpec::Custom, &material, params).unwrap();
        assert_eq!(input.stress_area_mm2, 100.0);
        assert_eq!(input.tensile_strength_mpa, 1000.0);
    }

    #[test]
    fn test_serialization() {
        let input = test_joint();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: JointInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    fn joint_strategy() -> impl Strategy<Value = JointInput> {
        (
            100.0f64..1500.0,
            1.0f64..1000.0,
            1.0f64..5000.0,
            1.0f64..5000.0,
            0.0f64..100.0,
            -500.0f64..500.0,
        )
            .prop_map(|(sb, a, kb, kc, pct, w)| JointInput {
                tensile_strength_mpa: sb,
                stress_area_mm2: a,
                bolt_stiffness_kn_per_mm: kb,
                clamp_stiffness_kn_per_mm: kc,
                preload_percent: pct,
                external_force_kn: w,
            })
    }

    proptest! {
        #[test]
        fn prop_force_balance(input in joint_strategy()) {
            let r = calculate(&input);
            let tol = 1e-9 * (1.0 + r.breaking_load_kn.abs() + input.external_force_kn.abs());
            prop_assert!((r.load_factor + (1.0 - r.load_factor) - 1.0).abs() < 1e-12);
            prop_assert!((r.bolt_force_kn - r.preload_kn - r.bolt_load_increment_kn).abs() < tol);
            prop_assert!((r.preload_kn - r.clamp_force_kn - r.clamp_load_relief_kn).abs() < tol);
            prop_assert!(r.non_finite_fields().is_empty());
        }

        #[test]
        fn prop_deterministic(input in joint_strategy()) {
            let a = calculate(&input);
            let b = calculate(&input);
            prop_assert_eq!(a.breaking_load_kn.to_bits(), b.breaking_load_kn.to_bits());
            prop_assert_eq!(a.bolt_force_kn.to_bits(), b.bolt_force_kn.to_bits());
            prop_assert_eq!(a.clamp_force_kn.to_bits(), b.clamp_force_kn.to_bits());
            prop_assert_eq!(a.loosening_force_kn.to_bits(), b.loosening_force_kn.to_bits());
            prop_assert_eq!(a.breakage_force_kn.to_bits(), b.breakage_force_kn.to_bits());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_flags_match_forces(input in joint_strategy()) {
            let r = calculate(&input);
            prop_assert_eq!(r.loosening_danger, r.clamp_force_kn <= 0.0);
            prop_assert_eq!(r.breakage_danger, r.bolt_force_kn >= r.breaking_load_kn);
        }
    }
}
