use crate::reading::Reading;
use std::collections::BTreeMap;

/// Default display range in centimeters.
pub const DEFAULT_MAX_DISTANCE_CM: f64 = 100.;
/// Beam position before the first reading arrives.
pub const INITIAL_ANGLE_DEGREE: i32 = 90;

/// Latest distance seen at each angle plus the angle of the most recent reading.
///
/// A new reading overwrites whatever was stored at its angle. Nothing is
/// timestamped or evicted.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanState {
    max_distance_cm: f64,
    current_angle: i32,
    distances: BTreeMap<i32, f64>,
}

impl ScanState {
    pub fn new(max_distance_cm: f64) -> ScanState {
        ScanState {
            max_distance_cm,
            current_angle: INITIAL_ANGLE_DEGREE,
            distances: BTreeMap::new(),
        }
    }

    /// Stores the reading clamped to `[0, max_distance_cm]` and moves the
    /// current angle to it. Returns the stored distance.
    ///
    /// A negative `max_distance_cm` wins over the lower bound and a NaN one
    /// leaves the distance unbounded above; neither panics.
    pub fn update(&mut self, reading: Reading) -> f64 {
        let distance = reading.distance_cm.max(0.).min(self.max_distance_cm);
        self.current_angle = reading.angle_degree;
        self.distances.insert(reading.angle_degree, distance);
        distance
    }

    pub fn current_angle(&self) -> i32 {
        self.current_angle
    }

    pub fn max_distance_cm(&self) -> f64 {
        self.max_distance_cm
    }

    pub fn distance_at(&self, angle_degree: i32) -> Option<f64> {
        self.distances.get(&angle_degree).copied()
    }

    /// Distance stored at the current angle, or zero when there is none.
    pub fn current_distance(&self) -> f64 {
        self.distance_at(self.current_angle).unwrap_or(0.)
    }

    /// Stored readings in ascending angle order.
    pub fn readings(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.distances.iter().map(|(a, d)| (*a, *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn clear(&mut self) {
        self.distances.clear();
        self.current_angle = INITIAL_ANGLE_DEGREE;
    }
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState::new(DEFAULT_MAX_DISTANCE_CM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = ScanState::default();
        assert!(state.is_empty());
        assert_eq!(state.current_angle(), INITIAL_ANGLE_DEGREE);
        assert_eq!(state.current_distance(), 0.);
        assert_eq!(state.max_distance_cm(), DEFAULT_MAX_DISTANCE_CM);
    }

    #[test]
    fn test_update_clamps_distance() {
        let mut state = ScanState::new(100.);
        assert_eq!(state.update(Reading::new(10, 42.5)), 42.5);
        assert_eq!(state.update(Reading::new(20, 350.)), 100.);
        assert_eq!(state.update(Reading::new(30, -4.)), 0.);

        assert_eq!(state.distance_at(10), Some(42.5));
        assert_eq!(state.distance_at(20), Some(100.));
        assert_eq!(state.distance_at(30), Some(0.));
        assert_eq!(state.distance_at(40), None);
    }

    #[test]
    fn test_update_clamps_infinite_distance() {
        let mut state = ScanState::new(100.);
        assert_eq!(state.update(Reading::new(30, f64::INFINITY)), 100.);
        assert_eq!(state.update(Reading::new(31, f64::NEG_INFINITY)), 0.);
        assert_eq!(state.current_angle(), 31);
    }

    #[test]
    fn test_update_with_degenerate_range() {
        let mut state = ScanState::new(f64::NAN);
        assert_eq!(state.update(Reading::new(10, 5.)), 5.);
        assert_eq!(state.update(Reading::new(11, -5.)), 0.);

        let mut state = ScanState::new(-1.);
        assert_eq!(state.update(Reading::new(10, 5.)), -1.);
        assert_eq!(state.current_angle(), 10);
    }

    #[test]
    fn test_update_overwrites_same_angle() {
        let mut state = ScanState::default();
        state.update(Reading::new(45, 80.));
        state.update(Reading::new(45, 12.));
        assert_eq!(state.len(), 1);
        assert_eq!(state.distance_at(45), Some(12.));
    }

    #[test]
    fn test_current_angle_follows_latest_reading() {
        let mut state = ScanState::default();
        state.update(Reading::new(0, 50.));
        state.update(Reading::new(180, 60.));
        assert_eq!(state.current_angle(), 180);
        assert_eq!(state.current_distance(), 60.);

        // returning to an older angle picks up the new value there
        state.update(Reading::new(0, 25.));
        assert_eq!(state.current_angle(), 0);
        assert_eq!(state.current_distance(), 25.);
    }

    #[test]
    fn test_readings_are_sorted_by_angle() {
        let mut state = ScanState::default();
        state.update(Reading::new(120, 1.));
        state.update(Reading::new(15, 2.));
        state.update(Reading::new(60, 3.));
        let angles: Vec<i32> = state.readings().map(|(a, _)| a).collect();
        assert_eq!(angles, vec![15, 60, 120]);
    }

    #[test]
    fn test_clear() {
        let mut state = ScanState::default();
        state.update(Reading::new(30, 10.));
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.current_angle(), INITIAL_ANGLE_DEGREE);
    }
}
