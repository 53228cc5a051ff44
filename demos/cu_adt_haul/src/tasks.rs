use bincode::de::Decoder;
use bincode::enc::Encoder;
use bincode::error::{DecodeError, EncodeError};
use bincode::{Decode, Encode};
use cu29::prelude::*;
use cu_adt_payloads::{MachineInputs, StabilityLimits};

/// A scripted haul cycle: phase label and the machine snapshot for it.
pub const HAUL_CYCLE: [(&str, MachineInputs); 6] = [
    ("loading", MachineInputs::new(1.0, 22_000.0, 14_000.0, 0.0)),
    ("loaded haul", MachineInputs::new(2.0, 22_000.0, 28_000.0, 0.0)),
    ("loaded switchback", MachineInputs::new(3.0, 22_000.0, 28_000.0, 35.0)),
    ("cross slope", MachineInputs::new(15.0, 22_000.0, 28_000.0, 10.0)),
    ("dump ramp edge", MachineInputs::new(32.0, 22_000.0, 28_000.0, 0.0)),
    ("empty return", MachineInputs::new(-6.0, 22_000.0, 0.0, -20.0)),
];

/// Replays [`HAUL_CYCLE`] in a loop, one phase per copper list.
#[derive(Default)]
pub struct HaulReplay {
    step: u64,
}

impl Freezable for HaulReplay {
    fn freeze<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.step, encoder)
    }

    fn thaw<D: Decoder>(&mut self, decoder: &mut D) -> Result<(), DecodeError> {
        self.step = Decode::decode(decoder)?;
        Ok(())
    }
}

impl CuSrcTask for HaulReplay {
    type Output<'m> = output_msg!(MachineInputs);

    fn new(_config: Option<&ComponentConfig>) -> CuResult<Self>
    where
        Self: Sized,
    {
        Ok(Self::default())
    }

    fn process(&mut self, _clock: &RobotClock, output: &mut Self::Output<'_>) -> CuResult<()> {
        let (phase, inputs) = HAUL_CYCLE[(self.step % HAUL_CYCLE.len() as u64) as usize];
        output.metadata.set_status(phase);
        output.set_payload(inputs);
        self.step += 1;
        Ok(())
    }
}

/// Stands in for the cab display: logs every published limit.
#[derive(Default)]
pub struct LimitsLogger {}

impl Freezable for LimitsLogger {}

impl CuSinkTask for LimitsLogger {
    type Input<'m> = input_msg!(StabilityLimits);

    fn new(_config: Option<&ComponentConfig>) -> CuResult<Self>
    where
        Self: Sized,
    {
        Ok(Self {})
    }

    fn process(&mut self, _clock: &RobotClock, input: &Self::Input<'_>) -> CuResult<()> {
        let Some(limits) = input.payload() else {
            return Ok(());
        };
        if limits.must_stop() {
            info!(
                "STOP ({}), CG {} m",
                limits.constraint.as_str(),
                limits.combined_cg_height_m
            );
        } else {
            info!(
                "limit {} km/h ({}), CG {} m, lateral {} m/s2",
                limits.speed_limit_kph,
                limits.constraint.as_str(),
                limits.combined_cg_height_m,
                limits.lateral_accel_limit_mps2
            );
        }
        Ok(())
    }
}
