//! One control cycle: CG, lateral limit, turn, speed, then the safety overrides.
use crate::cg::combine_cg;
use crate::error::{RolloverError, RolloverResult};
use crate::lateral::{is_degenerate_geometry, lateral_accel_limit, LateralLimit};
use crate::params::MachineParameters;
use crate::presets;
use crate::speed::speed_limit;
use crate::units::{deg_to_rad, kph_to_mps, mps_to_kph};
use cu_adt_payloads::{MachineInputs, SpeedConstraint, StabilityLimits};

/// Reports the first NaN or infinite field of a snapshot.
pub fn validate_inputs(inputs: &MachineInputs) -> RolloverResult<()> {
    match inputs.first_non_finite() {
        Some((field, value)) => Err(RolloverError::NonFiniteInput { field, value }),
        None => Ok(()),
    }
}

/// The rollover speed guard for one vehicle model.
///
/// Holds only the validated machine constants: `cycle` is a pure function of its input, so a
/// single guard can be shared between threads and called as often as the scheduler wants.
#[derive(Debug, Clone, PartialEq)]
pub struct RolloverGuard {
    params: MachineParameters,
}

impl RolloverGuard {
    pub fn new(params: MachineParameters) -> RolloverResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_preset(name: &str) -> RolloverResult<Self> {
        Self::new(presets::by_name(name)?)
    }

    pub fn params(&self) -> &MachineParameters {
        &self.params
    }

    /// Runs the whole pipeline over one snapshot.
    ///
    /// Never fails: malformed snapshots and every degenerate case resolve to the lower speed.
    /// A malformed snapshot is not a slope reading, so it stops the machine without flagging
    /// static instability.
    pub fn cycle(&self, inputs: &MachineInputs) -> StabilityLimits {
        let params = &self.params;
        if inputs.first_non_finite().is_some() {
            return StabilityLimits {
                combined_cg_height_m: params.worst_case_cg_height_m(),
                lateral_accel_limit_mps2: 0.0,
                statically_unstable: false,
                speed_limit_kph: 0.0,
                constraint: SpeedConstraint::InvalidInput,
            };
        }

        let combined_cg_height_m = combine_cg(
            inputs.unloaded_weight_kg,
            inputs.load_weight_kg,
            params.unloaded_cg_height_m,
            params.load_cg_height_m,
        );

        let lateral = lateral_accel_limit(
            combined_cg_height_m,
            deg_to_rad(inputs.ground_roll_deg),
            params.track_width_m,
            params.gravity_mps2,
        );

        let lateral_accel_limit_mps2 = match lateral {
            LateralLimit::Limited(accel) => accel,
            LateralLimit::StaticallyUnstable => {
                return StabilityLimits {
                    combined_cg_height_m,
                    lateral_accel_limit_mps2: 0.0,
                    statically_unstable: true,
                    speed_limit_kph: 0.0,
                    constraint: SpeedConstraint::StaticInstability,
                };
            }
        };

        let speed = speed_limit(
            lateral,
            deg_to_rad(inputs.articulation_deg),
            params.characteristic_length_m,
        );

        let cap_mps = kph_to_mps(params.max_speed_kph);
        let mps = speed.clamp_mps(cap_mps);
        let (speed_limit_kph, constraint) = if mps >= cap_mps {
            // report the configured cap itself, not its round trip through m/s
            (params.max_speed_kph, SpeedConstraint::SpeedCap)
        } else if is_degenerate_geometry(combined_cg_height_m, params.track_width_m) {
            (0.0, SpeedConstraint::DegenerateGeometry)
        } else {
            (mps_to_kph(mps).min(params.max_speed_kph), SpeedConstraint::Cornering)
        };

        StabilityLimits {
            combined_cg_height_m,
            lateral_accel_limit_mps2,
            statically_unstable: false,
            speed_limit_kph,
            constraint,
        }
    }
}
