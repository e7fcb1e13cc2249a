use crate::config::DisplayConfig;

/// Screen position in window pixels, origin at the top left.
pub type Point = (i32, i32);

// Fractions of the window width used for the outer ring and the angle labels.
const RADIUS_DIVISOR: f64 = 2.2;
const LABEL_RADIUS_DIVISOR: f64 = 2.1;

/// Placement of the half-disc radar on the window.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Radar origin, bottom centre of the window.
    pub center: Point,
    /// Outer ring radius in pixels; maps to the maximum distance.
    pub radius: f64,
    /// Radius at which the spoke angle labels sit.
    pub label_radius: f64,
}

impl Geometry {
    pub fn new(display: &DisplayConfig) -> Geometry {
        let width = display.width as f64;
        Geometry {
            center: (
                (display.width / 2) as i32,
                display.height.saturating_sub(display.bottom_margin) as i32,
            ),
            radius: (width / RADIUS_DIVISOR).floor(),
            label_radius: (width / LABEL_RADIUS_DIVISOR).floor(),
        }
    }

    /// Point `length` pixels from the origin along `angle_degree`, where zero
    /// points right and angles grow counter-clockwise.
    pub fn polar_to_screen(&self, angle_degree: f64, length: f64) -> (f64, f64) {
        let rad = angle_degree.to_radians();
        (
            self.center.0 as f64 + length * rad.cos(),
            self.center.1 as f64 - length * rad.sin(),
        )
    }

    /// Pixel length of `distance` on a radar spanning `max_distance`.
    pub fn scale(&self, distance: f64, max_distance: f64) -> f64 {
        distance / max_distance * self.radius
    }
}

/// Truncates toward zero, the way sub-pixel positions are snapped.
pub fn to_pixel(point: (f64, f64)) -> Point {
    (point.0 as i32, point.1 as i32)
}
