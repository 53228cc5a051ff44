//! Speed envelope from the lateral limit and the current turn.
use crate::lateral::LateralLimit;
use crate::turn::{turn_radius, TurnRadius};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedLimit {
    /// Maximum speed in m/s, never negative.
    Limited(f64),
    /// Driving straight: only the absolute cap applies.
    Unconstrained,
}

impl SpeedLimit {
    /// Resolves to a finite speed in `[0, cap_mps]`.
    ///
    /// A non-finite limited speed resolves to 0, never to the cap.
    pub fn clamp_mps(&self, cap_mps: f64) -> f64 {
        let cap_mps = if cap_mps.is_finite() { cap_mps.max(0.0) } else { 0.0 };
        match self {
            SpeedLimit::Limited(v) if v.is_finite() => v.max(0.0).min(cap_mps),
            SpeedLimit::Limited(_) => 0.0,
            SpeedLimit::Unconstrained => cap_mps,
        }
    }
}

/// `v = sqrt(a_lat * R)` from the circular motion relation `a = v² / R`.
///
/// No usable lateral margin (unstable, or a zero limit) means the machine must not move.
pub fn speed_limit(
    lateral: LateralLimit,
    articulation_rad: f64,
    characteristic_length_m: f64,
) -> SpeedLimit {
    let accel = match lateral.accel_mps2() {
        Some(accel) if accel > 0.0 => accel,
        _ => return SpeedLimit::Limited(0.0),
    };
    match turn_radius(articulation_rad, characteristic_length_m) {
        TurnRadius::Finite(radius) => SpeedLimit::Limited((accel * radius).sqrt()),
        TurnRadius::Unconstrained => SpeedLimit::Unconstrained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::deg_to_rad;
    use approx::assert_relative_eq;

    fn limited_mps(limit: SpeedLimit) -> f64 {
        match limit {
            SpeedLimit::Limited(v) => v,
            SpeedLimit::Unconstrained => panic!("expected a limited speed"),
        }
    }

    #[test]
    fn unstable_means_stop() {
        assert_eq!(
            speed_limit(LateralLimit::StaticallyUnstable, 0.3, 4.2),
            SpeedLimit::Limited(0.0)
        );
        assert_eq!(
            speed_limit(LateralLimit::StaticallyUnstable, 0.0, 4.2),
            SpeedLimit::Limited(0.0)
        );
    }

    #[test]
    fn zero_margin_means_stop() {
        assert_eq!(
            speed_limit(LateralLimit::Limited(0.0), 0.0, 4.2),
            SpeedLimit::Limited(0.0)
        );
    }

    #[test]
    fn straight_is_unconstrained() {
        assert_eq!(
            speed_limit(LateralLimit::Limited(6.54), 0.0, 4.2),
            SpeedLimit::Unconstrained
        );
    }

    #[test]
    fn turning_follows_circular_motion() {
        // 45 degrees on a 4 m machine is a 4 m radius
        let v = limited_mps(speed_limit(LateralLimit::Limited(4.0), deg_to_rad(45.0), 4.0));
        assert_relative_eq!(v, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn tighter_turns_are_slower() {
        let wide = limited_mps(speed_limit(LateralLimit::Limited(5.0), deg_to_rad(10.0), 4.2));
        let tight = limited_mps(speed_limit(LateralLimit::Limited(5.0), deg_to_rad(40.0), 4.2));
        assert!(tight < wide);
    }

    #[test]
    fn clamp_is_always_finite() {
        assert_eq!(SpeedLimit::Unconstrained.clamp_mps(13.9), 13.9);
        assert_eq!(SpeedLimit::Limited(5.0).clamp_mps(13.9), 5.0);
        assert_eq!(SpeedLimit::Limited(20.0).clamp_mps(13.9), 13.9);
        assert_eq!(SpeedLimit::Limited(0.0).clamp_mps(13.9), 0.0);
        assert_eq!(SpeedLimit::Limited(-1.0).clamp_mps(13.9), 0.0);
    }

    #[test]
    fn non_finite_speed_clamps_to_stop() {
        assert_eq!(SpeedLimit::Limited(f64::NAN).clamp_mps(13.9), 0.0);
        assert_eq!(SpeedLimit::Limited(f64::INFINITY).clamp_mps(13.9), 0.0);
        assert_eq!(SpeedLimit::Unconstrained.clamp_mps(f64::NAN), 0.0);
    }
}
