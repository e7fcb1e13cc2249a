use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum RadarError {
    MissingSeparator(String),
    InvalidFieldCount(usize),
    InvalidNumber(String),
    NonFiniteNumber(String),
    AngleOutOfRange(i64),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for RadarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RadarError::MissingSeparator(line) => write!(f, "Line \"{}\" has no ',' separator.", line),
            RadarError::InvalidFieldCount(n) => write!(f, "Expected 2 fields but found {}.", n),
            RadarError::InvalidNumber(field) => write!(f, "\"{}\" is not a number.", field),
            RadarError::NonFiniteNumber(field) => write!(f, "\"{}\" is not a finite number.", field),
            RadarError::AngleOutOfRange(angle) => write!(f, "Angle {} is outside 0..=180 degrees.", angle),
            RadarError::SerialError(err) => Display::fmt(&err, f),
            RadarError::IoError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for RadarError {}

impl From<io::Error> for RadarError {
    fn from(err: io::Error) -> Self {
        RadarError::IoError(err)
    }
}

impl From<serialport::Error> for RadarError {
    fn from(err: serialport::Error) -> Self {
        RadarError::SerialError(err)
    }
}

impl RadarError {
    /// True for errors caused by the content of a line rather than the port.
    pub fn is_malformed_line(&self) -> bool {
        !matches!(self, RadarError::SerialError(_) | RadarError::IoError(_))
    }
}
