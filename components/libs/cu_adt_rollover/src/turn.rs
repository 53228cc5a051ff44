//! Turn radius from the articulation angle (bicycle model).
use crate::params::ARTICULATION_EPSILON_RAD;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnRadius {
    /// Radius in meters, strictly positive.
    Finite(f64),
    /// Straight driving: turning imposes no constraint.
    Unconstrained,
}

/// `R = L / tan(articulation)`, the articulation standing in for the steer angle.
///
/// The sign of the articulation only gives the turn direction, the radius is a magnitude.
pub fn turn_radius(articulation_rad: f64, characteristic_length_m: f64) -> TurnRadius {
    if articulation_rad.abs() <= ARTICULATION_EPSILON_RAD || characteristic_length_m <= 0.0 {
        return TurnRadius::Unconstrained;
    }
    let tan = articulation_rad.tan().abs();
    if tan == 0.0 {
        return TurnRadius::Unconstrained;
    }
    TurnRadius::Finite(characteristic_length_m / tan)
}
