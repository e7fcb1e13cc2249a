/// Smallest angle the servo reports.
pub const MIN_ANGLE_DEGREE: i32 = 0;
/// Largest angle the servo reports.
pub const MAX_ANGLE_DEGREE: i32 = 180;

/// One angle/distance sample from the sensor.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Reading {
    /// Servo angle in whole degrees, within `[MIN_ANGLE_DEGREE, MAX_ANGLE_DEGREE]`.
    pub angle_degree: i32,
    /// Measured distance in centimeters, as received (not yet clamped).
    pub distance_cm: f64,
}

impl Reading {
    pub fn new(angle_degree: i32, distance_cm: f64) -> Reading {
        Reading {
            angle_degree,
            distance_cm,
        }
    }
}
