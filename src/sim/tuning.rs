//! Data-driven physics tuning
//!
//! The numbers are empirically tuned. The bucket distribution they produce
//! is validated by simulation, not derived.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected physics parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuningError {
    /// Parameter is NaN or infinite
    NonFinite { field: &'static str },
    /// Parameter is outside the range that keeps drops damped and terminating
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl TuningError {
    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            TuningError::NonFinite { field } | TuningError::OutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonFinite { field } => write!(f, "tuning.{field} must be finite"),
            TuningError::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "tuning.{field} = {value} is out of range (expected {expected})"),
        }
    }
}

impl std::error::Error for TuningError {}

pub type TuningResult<T> = Result<T, TuningError>;

fn check(field: &'static str, value: f32, ok: bool, expected: &'static str) -> TuningResult<()> {
    if ok {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

/// Physics parameters applied by the stepper and collision resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Velocity multiplier every frame (< 1)
    pub friction: f32,
    /// Velocity multiplier after a peg or wall bounce (< 1)
    pub bounce: f32,
    /// Extra multiplier on the vertical component after a peg bounce
    pub vertical_damping: f32,
    /// Half-range of the random horizontal kick after each peg hit
    pub collision_impulse: f32,
    /// Distance from center beyond which peg hits steer back toward it
    pub center_bias_threshold: f32,
    /// Horizontal velocity correction applied when steering
    pub center_bias_strength: f32,
    /// Half-range of the horizontal spawn jitter
    pub drop_jitter: f32,
    /// Half-range of the initial horizontal velocity
    pub drop_max_vx: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            bounce: BOUNCE,
            vertical_damping: VERTICAL_DAMPING,
            collision_impulse: COLLISION_IMPULSE,
            center_bias_threshold: CENTER_BIAS_THRESHOLD,
            center_bias_strength: CENTER_BIAS_STRENGTH,
            drop_jitter: DROP_JITTER,
            drop_max_vx: DROP_MAX_VX,
        }
    }
}

impl PhysicsTuning {
    /// Parse and validate; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let tuning: PhysicsTuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every parameter, reporting the first bad one
    ///
    /// Gravity must pull down and every multiplier must shed energy, so a
    /// drop always reaches the bucket strip.
    pub fn validate(&self) -> TuningResult<()> {
        let fields = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("bounce", self.bounce),
            ("vertical_damping", self.vertical_damping),
            ("collision_impulse", self.collision_impulse),
            ("center_bias_threshold", self.center_bias_threshold),
            ("center_bias_strength", self.center_bias_strength),
            ("drop_jitter", self.drop_jitter),
            ("drop_max_vx", self.drop_max_vx),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NonFinite { field });
        }

        check("gravity", self.gravity, self.gravity > 0.0, "> 0")?;
        check(
            "friction",
            self.friction,
            self.friction > 0.0 && self.friction < 1.0,
            "0 < friction < 1",
        )?;
        check(
            "bounce",
            self.bounce,
            (0.0..1.0).contains(&self.bounce),
            "0 <= bounce < 1",
        )?;
        check(
            "vertical_damping",
            self.vertical_damping,
            (0.0..1.0).contains(&self.vertical_damping),
            "0 <= vertical_damping < 1",
        )?;
        for &(field, value) in &fields[4..] {
            check(field, value, value >= 0.0, ">= 0")?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_damping() {
        let tuning = PhysicsTuning::default();
        assert!(tuning.friction < 1.0);
        assert!(tuning.bounce < 1.0);
        assert!(tuning.vertical_damping < 1.0);
        assert!(tuning.gravity > 0.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = PhysicsTuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.bounce, BOUNCE);
        assert_eq!(tuning.center_bias_strength, CENTER_BIAS_STRENGTH);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = PhysicsTuning {
            bounce: 0.4,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(PhysicsTuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(PhysicsTuning::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(PhysicsTuning::default().validate(), Ok(()));
    }

    fn rejected_field(tuning: PhysicsTuning) -> &'static str {
        tuning.validate().unwrap_err().field()
    }

    #[test]
    fn test_rejects_each_out_of_range_field() {
        let base = PhysicsTuning::default();
        let cases = [
            (PhysicsTuning { gravity: 0.0, ..base }, "gravity"),
            (PhysicsTuning { gravity: -0.25, ..base }, "gravity"),
            (PhysicsTuning { friction: 1.0, ..base }, "friction"),
            (PhysicsTuning { friction: 1.5, ..base }, "friction"),
            (PhysicsTuning { friction: 0.0, ..base }, "friction"),
            (PhysicsTuning { bounce: 1.0, ..base }, "bounce"),
            (PhysicsTuning { bounce: -0.1, ..base }, "bounce"),
            (PhysicsTuning { vertical_damping: 1.0, ..base }, "vertical_damping"),
            (PhysicsTuning { vertical_damping: -0.5, ..base }, "vertical_damping"),
            (PhysicsTuning { collision_impulse: -0.1, ..base }, "collision_impulse"),
            (PhysicsTuning { center_bias_threshold: -1.0, ..base }, "center_bias_threshold"),
            (PhysicsTuning { center_bias_strength: -0.1, ..base }, "center_bias_strength"),
            (PhysicsTuning { drop_jitter: -12.0, ..base }, "drop_jitter"),
            (PhysicsTuning { drop_max_vx: -0.8, ..base }, "drop_max_vx"),
        ];
        for (tuning, field) in cases {
            assert_eq!(rejected_field(tuning), field, "{tuning:?}");
            assert!(matches!(
                tuning.validate(),
                Err(TuningError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let base = PhysicsTuning::default();
        let bounce = PhysicsTuning { bounce: f32::NAN, ..base };
        assert_eq!(
            bounce.validate(),
            Err(TuningError::NonFinite { field: "bounce" })
        );
        let gravity = PhysicsTuning { gravity: f32::INFINITY, ..base };
        assert_eq!(rejected_field(gravity), "gravity");
        let jitter = PhysicsTuning { drop_jitter: f32::NEG_INFINITY, ..base };
        assert_eq!(rejected_field(jitter), "drop_jitter");
    }

    #[test]
    fn test_zero_kicks_are_allowed() {
        let tuning = PhysicsTuning {
            collision_impulse: 0.0,
            center_bias_strength: 0.0,
            drop_jitter: 0.0,
            drop_max_vx: 0.0,
            bounce: 0.0,
            vertical_damping: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn test_from_json_validates() {
        let err = PhysicsTuning::from_json(r#"{ "gravity": -0.25, "friction": 1.5 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("gravity"), "{err}");
        assert!(PhysicsTuning::from_json(r#"{ "bounce": 1.2 }"#).is_err());
    }
}
