//! Lateral acceleration a machine can take before the high side wheels lift.
//!
//! Moment balance about the low side contact line of a rigid body of CG height `h` on a
//! track of width `t`, standing on a cross slope `roll`:
//!
//! ```text
//! a_lat = g * (cos(roll) * t / (2h) - sin(roll))
//! ```
//!
//! The first term is the restoring moment, the second the share of gravity pulling down the
//! slope. When `tan(roll) * h >= t / 2` the CG is already outside the low side contact line
//! and the slope alone tips the machine.

use crate::params::GEOMETRY_EPSILON_M;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LateralLimit {
    /// Maximum lateral acceleration in m/s², never negative.
    Limited(f64),
    /// The slope alone can roll the machine over, no lateral acceleration is safe.
    StaticallyUnstable,
}

impl LateralLimit {
    pub fn accel_mps2(&self) -> Option<f64> {
        match self {
            LateralLimit::Limited(accel) => Some(*accel),
            LateralLimit::StaticallyUnstable => None,
        }
    }

    pub fn is_statically_unstable(&self) -> bool {
        matches!(self, LateralLimit::StaticallyUnstable)
    }
}

/// CG height or track width too small to divide by.
pub fn is_degenerate_geometry(combined_cg_height_m: f64, track_width_m: f64) -> bool {
    combined_cg_height_m <= GEOMETRY_EPSILON_M || track_width_m <= GEOMETRY_EPSILON_M
}

/// Rollover limit for the given CG height, ground roll (radians) and track width.
///
/// The roll is taken by magnitude: the snapshot does not say whether the turn loads the
/// downhill or the uphill side, so the downhill side is assumed.
/// Degenerate geometry yields a zero limit.
pub fn lateral_accel_limit(
    combined_cg_height_m: f64,
    ground_roll_rad: f64,
    track_width_m: f64,
    gravity_mps2: f64,
) -> LateralLimit {
    if is_degenerate_geometry(combined_cg_height_m, track_width_m) {
        return LateralLimit::Limited(0.0);
    }
    let roll = ground_roll_rad.abs();
    let half_track = track_width_m / 2.0;

    if roll.tan() * combined_cg_height_m >= half_track {
        return LateralLimit::StaticallyUnstable;
    }

    let limit = gravity_mps2 * (roll.cos() * half_track / combined_cg_height_m - roll.sin());
    if limit < 0.0 {
        LateralLimit::StaticallyUnstable
    } else {
        LateralLimit::Limited(limit)
    }
}
