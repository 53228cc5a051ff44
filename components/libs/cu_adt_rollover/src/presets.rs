//! Machine constants for common ADT size classes.
//!
//! Values are representative of the class, not of a specific manufacturer's model.
//! Calibrate against the vehicle documentation before using them on a real machine.

use crate::error::{RolloverError, RolloverResult};
use crate::params::MachineParameters;

/// 25 t payload class.
pub const fn adt_25t() -> MachineParameters {
    MachineParameters::new(2.30, 1.40, 2.20, 3.90)
}

/// 30 t payload class.
pub const fn adt_30t() -> MachineParameters {
    MachineParameters::new(2.40, 1.50, 2.50, 4.20)
}

/// 40 t payload class.
pub const fn adt_40t() -> MachineParameters {
    MachineParameters::new(2.60, 1.60, 2.70, 4.60).with_max_speed_kph(55.0)
}

pub const PRESET_NAMES: [&str; 3] = ["adt_25t", "adt_30t", "adt_40t"];

/// Looks a preset up by the name used in task configurations.
pub fn by_name(name: &str) -> RolloverResult<MachineParameters> {
    match name {
        "adt_25t" => Ok(adt_25t()),
        "adt_30t" => Ok(adt_30t()),
        "adt_40t" => Ok(adt_40t()),
        other => Err(RolloverError::UnknownPreset(other.to_string())),
    }
}
