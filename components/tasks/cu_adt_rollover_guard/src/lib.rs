use bincode::de::Decoder;
use bincode::enc::Encoder;
use bincode::error::{DecodeError, EncodeError};
use bincode::{Decode, Encode};
use cu29::prelude::*;

use cu_adt_payloads::{MachineInputs, SpeedConstraint, StabilityLimits};
use cu_adt_rollover::{presets, MachineParameters, RolloverGuard};

/// Copper task running one rollover guard cycle per incoming machine snapshot.
///
/// Config keys:
/// - `preset`: optional size class (`adt_25t`, `adt_30t`, `adt_40t`).
/// - `track_width_m`, `unloaded_cg_height_m`, `load_cg_height_m`, `characteristic_length_m`:
///   mandatory without a preset, override the preset otherwise.
/// - `gravity_mps2`, `max_speed_kph`: optional.
pub struct RolloverGuardTask {
    guard: RolloverGuard,
    // Only used to log constraint changes instead of every cycle.
    last_constraint: Option<SpeedConstraint>,
}

impl RolloverGuardTask {
    pub fn with_parameters(params: MachineParameters) -> CuResult<Self> {
        let guard = RolloverGuard::new(params).map_err(|e| CuError::from(e.to_string()))?;
        Ok(Self {
            guard,
            last_constraint: None,
        })
    }

    pub fn guard(&self) -> &RolloverGuard {
        &self.guard
    }
}

fn parameters_from_config(config: &ComponentConfig) -> CuResult<MachineParameters> {
    let base = match config.get::<String>("preset") {
        Some(name) => Some(presets::by_name(&name).map_err(|e| CuError::from(e.to_string()))?),
        None => None,
    };

    // Geometry either comes from the preset or has to be spelled out.
    let geometry = |key: &str, preset_value: Option<f64>| -> CuResult<f64> {
        config
            .get::<f64>(key)
            .or(preset_value)
            .ok_or_else(|| format!("'{key}' not found in config and no 'preset' given").into())
    };

    let mut params = MachineParameters::new(
        geometry("track_width_m", base.map(|p| p.track_width_m))?,
        geometry("unloaded_cg_height_m", base.map(|p| p.unloaded_cg_height_m))?,
        geometry("load_cg_height_m", base.map(|p| p.load_cg_height_m))?,
        geometry(
            "characteristic_length_m",
            base.map(|p| p.characteristic_length_m),
        )?,
    );
    if let Some(base) = base {
        params = params
            .with_gravity(base.gravity_mps2)
            .with_max_speed_kph(base.max_speed_kph);
    }
    if let Some(gravity) = config.get::<f64>("gravity_mps2") {
        params = params.with_gravity(gravity);
    }
    if let Some(cap) = config.get::<f64>("max_speed_kph") {
        params = params.with_max_speed_kph(cap);
    }
    Ok(params)
}

impl Freezable for RolloverGuardTask {
    fn freeze<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.last_constraint, encoder)
    }

    fn thaw<D: Decoder>(&mut self, decoder: &mut D) -> Result<(), DecodeError> {
        self.last_constraint = Decode::decode(decoder)?;
        Ok(())
    }
}

impl CuTask for RolloverGuardTask {
    type Input<'m> = input_msg!(MachineInputs);
    type Output<'m> = output_msg!(StabilityLimits);

    fn new(config: Option<&ComponentConfig>) -> CuResult<Self>
    where
        Self: Sized,
    {
        let config = config.ok_or("RolloverGuardTask needs a config.")?;
        let params = parameters_from_config(config)?;
        debug!(
            "Rollover guard: track {} m, CG {} m empty / {} m load, length {} m, cap {} km/h",
            params.track_width_m,
            params.unloaded_cg_height_m,
            params.load_cg_height_m,
            params.characteristic_length_m,
            params.max_speed_kph
        );
        Self::with_parameters(params)
    }

    fn process(
        &mut self,
        _clock: &RobotClock,
        input: &Self::Input<'_>,
        output: &mut Self::Output<'_>,
    ) -> CuResult<()> {
        let Some(inputs) = input.payload() else {
            output.clear_payload();
            return Ok(());
        };

        let limits = self.guard.cycle(inputs);

        if self.last_constraint != Some(limits.constraint) {
            match limits.constraint {
                SpeedConstraint::StaticInstability => {
                    warning!(
                        "Statically unstable at {} deg roll, CG {} m: stop",
                        inputs.ground_roll_deg,
                        limits.combined_cg_height_m
                    );
                }
                SpeedConstraint::InvalidInput => {
                    if let Some((field, value)) = inputs.first_non_finite() {
                        warning!("Non finite machine input {} = {}: stop", field, value);
                    }
                }
                SpeedConstraint::DegenerateGeometry => {
                    warning!("Degenerate CG/track geometry: stop");
                }
                other => {
                    debug!(
                        "Speed limit now set by {}: {} km/h",
                        other.as_str(),
                        limits.speed_limit_kph
                    );
                }
            }
            self.last_constraint = Some(limits.constraint);
        }

        output.metadata.set_status(format!(
            "{:>5.1} km/h {}",
            limits.speed_limit_kph,
            limits.constraint.as_str()
        ));
        output.set_payload(limits);
        Ok(())
    }

    fn stop(&mut self, _clock: &RobotClock) -> CuResult<()> {
        self.last_constraint = None;
        Ok(())
    }
}
