//! Machine constants for one vehicle model.
use crate::error::{RolloverError, RolloverResult};
use serde::{Deserialize, Serialize};

pub const STANDARD_GRAVITY_MPS2: f64 = 9.81;

/// Absolute speed cap used when a vehicle model does not set its own.
pub const DEFAULT_MAX_SPEED_KPH: f64 = 50.0;

/// CG heights or track widths at or below this are treated as degenerate geometry.
pub const GEOMETRY_EPSILON_M: f64 = 1e-3;

/// Articulation magnitudes at or below this count as driving straight.
pub const ARTICULATION_EPSILON_RAD: f64 = 1e-3;

/// Vehicle model constants, fixed for the lifetime of a guard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineParameters {
    /// Lateral distance between left and right wheel contact points.
    pub track_width_m: f64,
    pub unloaded_cg_height_m: f64,
    /// CG height of the payload in the body.
    pub load_cg_height_m: f64,
    /// Effective wheelbase used to turn articulation into a turn radius.
    pub characteristic_length_m: f64,
    #[serde(default = "default_gravity")]
    pub gravity_mps2: f64,
    #[serde(default = "default_max_speed")]
    pub max_speed_kph: f64,
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY_MPS2
}

fn default_max_speed() -> f64 {
    DEFAULT_MAX_SPEED_KPH
}

impl MachineParameters {
    pub const fn new(
        track_width_m: f64,
        unloaded_cg_height_m: f64,
        load_cg_height_m: f64,
        characteristic_length_m: f64,
    ) -> Self {
        Self {
            track_width_m,
            unloaded_cg_height_m,
            load_cg_height_m,
            characteristic_length_m,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            max_speed_kph: DEFAULT_MAX_SPEED_KPH,
        }
    }

    pub const fn with_gravity(mut self, gravity_mps2: f64) -> Self {
        self.gravity_mps2 = gravity_mps2;
        self
    }

    pub const fn with_max_speed_kph(mut self, max_speed_kph: f64) -> Self {
        self.max_speed_kph = max_speed_kph;
        self
    }

    /// The higher of the two configured CG heights.
    pub fn worst_case_cg_height_m(&self) -> f64 {
        self.unloaded_cg_height_m.max(self.load_cg_height_m)
    }

    /// Checks every constant for a finite, physically meaningful value.
    pub fn validate(&self) -> RolloverResult<()> {
        positive("track_width_m", self.track_width_m)?;
        positive("unloaded_cg_height_m", self.unloaded_cg_height_m)?;
        positive("load_cg_height_m", self.load_cg_height_m)?;
        positive("characteristic_length_m", self.characteristic_length_m)?;
        positive("gravity_mps2", self.gravity_mps2)?;
        if !self.max_speed_kph.is_finite() || self.max_speed_kph < 0.0 {
            return Err(RolloverError::InvalidParameter {
                name: "max_speed_kph",
                value: self.max_speed_kph,
                reason: "must be finite and >= 0",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> RolloverResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RolloverError::InvalidParameter {
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let params = MachineParameters::new(2.4, 1.5, 2.5, 4.2);
        assert_eq!(params.gravity_mps2, 9.81);
        assert_eq!(params.max_speed_kph, DEFAULT_MAX_SPEED_KPH);
        assert!(params.validate().is_ok());
        assert_eq!(params.worst_case_cg_height_m(), 2.5);

        let params = params.with_max_speed_kph(40.0).with_gravity(9.80665);
        assert_eq!(params.max_speed_kph, 40.0);
        assert_eq!(params.gravity_mps2, 9.80665);
    }

    #[test]
    fn rejects_non_physical_constants() {
        let err = MachineParameters::new(0.0, 1.5, 2.5, 4.2)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            RolloverError::InvalidParameter {
                name: "track_width_m",
                ..
            }
        ));

        assert!(MachineParameters::new(2.4, f64::NAN, 2.5, 4.2)
            .validate()
            .is_err());
        assert!(MachineParameters::new(2.4, 1.5, 2.5, -1.0)
            .validate()
            .is_err());
        assert!(MachineParameters::new(2.4, 1.5, 2.5, 4.2)
            .with_max_speed_kph(f64::INFINITY)
            .validate()
            .is_err());
        // A zero cap is legal: the machine is simply never allowed to move.
        assert!(MachineParameters::new(2.4, 1.5, 2.5, 4.2)
            .with_max_speed_kph(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn error_message_names_the_parameter() {
        let err = MachineParameters::new(2.4, 1.5, 2.5, 4.2)
            .with_gravity(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Machine parameter 'gravity_mps2' = 0 is invalid: must be finite and > 0"
        );
    }
}
