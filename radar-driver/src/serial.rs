use crate::constants::READ_TIMEOUT_MS;
use crate::error::RadarError;
use serialport::{ClearBuffer, SerialPort};
use std::io::Read;
use std::time::Duration;

pub(crate) fn open_port(
    port_name: &str,
    baud_rate: u32,
) -> Result<Box<dyn SerialPort>, RadarError> {
    let port = serialport::new(port_name, baud_rate)
        .timeout(Duration::from_millis(READ_TIMEOUT_MS))
        .open()?;
    Ok(port)
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, RadarError> {
    Ok(port.bytes_to_read()? as usize)
}

/// Discards everything the OS has buffered on the input side of the port.
pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), RadarError> {
    port.clear(ClearBuffer::Input)?;
    Ok(())
}

/// Reads the bytes currently waiting without blocking for more.
pub(crate) fn read_available(port: &mut Box<dyn SerialPort>) -> Result<Vec<u8>, RadarError> {
    let n_read: usize = get_n_read(port)?;
    if n_read == 0 {
        return Ok(Vec::new());
    }
    let mut data: Vec<u8> = vec![0; n_read];
    let n = port.read(data.as_mut_slice())?;
    data.truncate(n);
    Ok(data)
}
