//! Unit conversions at the boundaries of the pipeline.
use uom::si::angle::{degree, radian};
use uom::si::f64::{Angle, Velocity};
use uom::si::velocity::{kilometer_per_hour, meter_per_second};

pub fn deg_to_rad(deg: f64) -> f64 {
    Angle::new::<degree>(deg).get::<radian>()
}

pub fn mps_to_kph(mps: f64) -> f64 {
    Velocity::new::<meter_per_second>(mps).get::<kilometer_per_hour>()
}

pub fn kph_to_mps(kph: f64) -> f64 {
    Velocity::new::<kilometer_per_hour>(kph).get::<meter_per_second>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn angles() {
        assert_relative_eq!(deg_to_rad(180.0), PI, epsilon = 1e-12);
        assert_relative_eq!(deg_to_rad(-30.0), -PI / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn speeds() {
        assert_relative_eq!(mps_to_kph(10.0), 36.0, epsilon = 1e-9);
        assert_relative_eq!(kph_to_mps(50.0), 13.888_888_888, epsilon = 1e-6);
        assert_eq!(mps_to_kph(0.0), 0.0);
    }
}
