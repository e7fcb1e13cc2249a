mod constants;
mod error;
mod line;
mod parse;
mod serial;

use crate::line::LineBuffer;
use crate::serial::{flush, open_port, read_available};
use radar_data::ScanState;
use serialport::SerialPort;

pub use crate::constants::DEFAULT_BAUD_RATE;
pub use crate::error::RadarError;
pub use crate::parse::parse_line;

/// Counts of lines handled by one call to [`RadarLink::poll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Parses `line` and applies it to `state`, returning the stored distance.
///
/// A malformed line returns an error and leaves `state` untouched.
pub fn apply_line(state: &mut ScanState, line: &str) -> Result<f64, RadarError> {
    let reading = parse_line(line)?;
    Ok(state.update(reading))
}

/// Serial connection to the radar sensor.
pub struct RadarLink {
    port: Box<dyn SerialPort>,
    buffer: LineBuffer,
}

impl RadarLink {
    /// Opens the sensor port.
    /// # Arguments
    ///
    /// * `port_name` - Serial port name such as `/dev/ttyUSB0` or `COM5`.
    /// * `baud_rate` - Line speed the sensor firmware was built with.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<RadarLink, RadarError> {
        let mut port = open_port(port_name, baud_rate)?;
        flush(&mut port)?;
        log::info!("Opened \"{}\" at {} baud", port_name, baud_rate);
        Ok(RadarLink::from_port(port))
    }

    pub fn from_port(port: Box<dyn SerialPort>) -> RadarLink {
        RadarLink {
            port,
            buffer: LineBuffer::new(),
        }
    }

    pub fn name(&self) -> Option<String> {
        self.port.name()
    }

    /// Drains every byte waiting on the port and applies the complete lines
    /// to `state`. Never blocks waiting for new data.
    pub fn poll(&mut self, state: &mut ScanState) -> Result<PollSummary, RadarError> {
        let mut summary = PollSummary::default();
        loop {
            let data = read_available(&mut self.port)?;
            if data.is_empty() {
                break;
            }
            self.buffer.extend(&data);

            while let Some(line) = self.buffer.next_line() {
                match apply_line(state, &line) {
                    Ok(distance) => {
                        log::debug!("{}° -> {:.1} cm", state.current_angle(), distance);
                        summary.accepted += 1;
                    }
                    Err(e) if e.is_malformed_line() => {
                        log::trace!("Discarding \"{}\": {}", line, e);
                        summary.rejected += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(summary)
    }
}
