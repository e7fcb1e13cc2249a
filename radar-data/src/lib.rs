pub mod reading;
pub mod scan_state;

pub use reading::{Reading, MAX_ANGLE_DEGREE, MIN_ANGLE_DEGREE};
pub use scan_state::{ScanState, DEFAULT_MAX_DISTANCE_CM, INITIAL_ANGLE_DEGREE};
