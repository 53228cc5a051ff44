//! Payloads exchanged around the ADT rollover guard.
//!
//! [`MachineInputs`] is the per-cycle machine snapshot coming from the sensor side,
//! [`StabilityLimits`] is what the guard publishes for the control and display side.
//! Both keep plain SI-ish scalars on the wire (degrees, kilograms, meters, km/h) and expose
//! `uom` quantities for consumers that want typed units.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use uom::si::acceleration::meter_per_second_squared;
use uom::si::angle::degree;
use uom::si::f64::{Acceleration, Angle, Length, Mass, Velocity};
use uom::si::length::meter;
use uom::si::mass::kilogram;
use uom::si::velocity::kilometer_per_hour;

/// Snapshot of the machine state for one control cycle.
///
/// Angles are in degrees and masses in kilograms, never radians or tonnes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct MachineInputs {
    /// Ground roll (cross slope) angle, signed.
    pub ground_roll_deg: f64,
    pub unloaded_weight_kg: f64,
    pub load_weight_kg: f64,
    /// Angle between the front and rear frames, signed.
    pub articulation_deg: f64,
}

impl MachineInputs {
    pub const fn new(
        ground_roll_deg: f64,
        unloaded_weight_kg: f64,
        load_weight_kg: f64,
        articulation_deg: f64,
    ) -> Self {
        Self {
            ground_roll_deg,
            unloaded_weight_kg,
            load_weight_kg,
            articulation_deg,
        }
    }

    /// Build a snapshot from unit-carrying quantities.
    pub fn from_uom(ground_roll: Angle, unloaded: Mass, load: Mass, articulation: Angle) -> Self {
        Self {
            ground_roll_deg: ground_roll.get::<degree>(),
            unloaded_weight_kg: unloaded.get::<kilogram>(),
            load_weight_kg: load.get::<kilogram>(),
            articulation_deg: articulation.get::<degree>(),
        }
    }

    pub fn ground_roll(&self) -> Angle {
        Angle::new::<degree>(self.ground_roll_deg)
    }

    pub fn articulation(&self) -> Angle {
        Angle::new::<degree>(self.articulation_deg)
    }

    pub fn unloaded_mass(&self) -> Mass {
        Mass::new::<kilogram>(self.unloaded_weight_kg)
    }

    pub fn load_mass(&self) -> Mass {
        Mass::new::<kilogram>(self.load_weight_kg)
    }

    /// Name and value of the first field that is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("ground_roll_deg", self.ground_roll_deg),
            ("unloaded_weight_kg", self.unloaded_weight_kg),
            ("load_weight_kg", self.load_weight_kg),
            ("articulation_deg", self.articulation_deg),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

/// What ended up setting the published speed limit.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize,
)]
pub enum SpeedConstraint {
    /// The slope alone can tip the machine over: do not move.
    #[default]
    StaticInstability,
    /// CG height or track width too small to evaluate, treated as no lateral margin.
    DegenerateGeometry,
    /// Lateral acceleration in the current turn.
    Cornering,
    /// The configured absolute maximum speed.
    SpeedCap,
    /// The snapshot carried non-finite values.
    InvalidInput,
}

impl SpeedConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedConstraint::StaticInstability => "unstable",
            SpeedConstraint::DegenerateGeometry => "degenerate",
            SpeedConstraint::Cornering => "cornering",
            SpeedConstraint::SpeedCap => "cap",
            SpeedConstraint::InvalidInput => "invalid",
        }
    }
}

/// Result of one guard cycle.
///
/// The default value is the fail-safe one: unstable, zero speed.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct StabilityLimits {
    pub combined_cg_height_m: f64,
    /// Only meaningful when `statically_unstable` is false.
    pub lateral_accel_limit_mps2: f64,
    /// The ground slope alone can tip the machine. Other reasons to stop (invalid snapshot,
    /// degenerate geometry, zero cap) leave it false: use [`StabilityLimits::must_stop`].
    pub statically_unstable: bool,
    /// Always finite, >= 0 and clamped to the configured cap.
    pub speed_limit_kph: f64,
    pub constraint: SpeedConstraint,
}

impl Default for StabilityLimits {
    fn default() -> Self {
        Self {
            combined_cg_height_m: 0.0,
            lateral_accel_limit_mps2: 0.0,
            statically_unstable: true,
            speed_limit_kph: 0.0,
            constraint: SpeedConstraint::StaticInstability,
        }
    }
}

impl StabilityLimits {
    pub fn combined_cg_height(&self) -> Length {
        Length::new::<meter>(self.combined_cg_height_m)
    }

    /// Lateral acceleration the machine can take before rolling over, `None` when unstable.
    pub fn lateral_accel_limit(&self) -> Option<Acceleration> {
        if self.statically_unstable {
            None
        } else {
            Some(Acceleration::new::<meter_per_second_squared>(
                self.lateral_accel_limit_mps2,
            ))
        }
    }

    pub fn speed_limit(&self) -> Velocity {
        Velocity::new::<kilometer_per_hour>(self.speed_limit_kph)
    }

    /// True when the machine must stay stopped, whatever the reason.
    pub fn must_stop(&self) -> bool {
        self.statically_unstable || self.speed_limit_kph <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::angle::radian;
    use uom::si::velocity::meter_per_second;

    #[test]
    fn default_limits_are_fail_safe() {
        let limits = StabilityLimits::default();
        assert!(limits.statically_unstable);
        assert!(limits.must_stop());
        assert!(limits.lateral_accel_limit().is_none());
        assert_eq!(limits.speed_limit_kph, 0.0);
    }

    #[test]
    fn typed_accessors_convert_units() {
        let inputs = MachineInputs::new(90.0, 20_000.0, 15_000.0, -30.0);
        assert_relative_eq!(
            inputs.ground_roll().get::<radian>(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_relative_eq!(inputs.load_mass().get::<kilogram>(), 15_000.0);

        let limits = StabilityLimits {
            combined_cg_height_m: 1.8,
            lateral_accel_limit_mps2: 6.54,
            statically_unstable: false,
            speed_limit_kph: 36.0,
            constraint: SpeedConstraint::Cornering,
        };
        assert_relative_eq!(limits.speed_limit().get::<meter_per_second>(), 10.0, epsilon = 1e-9);
        assert!(limits.lateral_accel_limit().is_some());
        assert!(!limits.must_stop());
    }

    #[test]
    fn from_uom_lands_in_degrees_and_kilograms() {
        let inputs = MachineInputs::from_uom(
            Angle::new::<radian>(0.1),
            Mass::new::<kilogram>(22_000.0),
            Mass::new::<kilogram>(28_000.0),
            Angle::new::<degree>(12.5),
        );
        assert_relative_eq!(inputs.ground_roll_deg, 5.729_577_951, epsilon = 1e-6);
        assert_eq!(inputs.unloaded_weight_kg, 22_000.0);
        assert_eq!(inputs.load_weight_kg, 28_000.0);
        assert_relative_eq!(inputs.articulation_deg, 12.5, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_field_is_reported() {
        assert_eq!(MachineInputs::new(1.0, 2.0, 3.0, 4.0).first_non_finite(), None);
        let bad = MachineInputs::new(1.0, 2.0, f64::INFINITY, f64::NAN);
        let (field, value) = bad.first_non_finite().unwrap();
        assert_eq!(field, "load_weight_kg");
        assert!(value.is_infinite());
    }

    #[test]
    fn zero_speed_stops_a_stable_machine() {
        let limits = StabilityLimits {
            combined_cg_height_m: 2.5,
            lateral_accel_limit_mps2: 0.0,
            statically_unstable: false,
            speed_limit_kph: 0.0,
            constraint: SpeedConstraint::InvalidInput,
        };
        assert!(limits.must_stop());
    }

    #[test]
    fn payloads_survive_bincode() {
        let limits = StabilityLimits {
            combined_cg_height_m: 1.9,
            lateral_accel_limit_mps2: 5.5,
            statically_unstable: false,
            speed_limit_kph: 50.0,
            constraint: SpeedConstraint::SpeedCap,
        };
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(limits, config).unwrap();
        let (decoded, _): (StabilityLimits, usize) =
            bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(decoded, limits);
    }
}
