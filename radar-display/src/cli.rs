use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "radar",
    about = "Reads angle,distance lines from a serial port and draws a radar sweep.",
    disable_version_flag = true
)]
pub struct Args {
    /// The device path to a serial port
    pub port: Option<String>,

    /// Serial line speed
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Range of the outer ring in centimeters
    #[arg(short, long)]
    pub max_distance: Option<f64>,
}

impl Args {
    /// Defaults, then the config file, then command line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(port) = &self.port {
            config.serial.port = port.clone();
        }
        if let Some(baud) = self.baud {
            config.serial.baud_rate = baud;
        }
        if let Some(max_distance) = self.max_distance {
            config.radar.max_distance_cm = max_distance;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::try_parse_from(["radar"]).unwrap();
        assert_eq!(args.load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let args =
            Args::try_parse_from(["radar", "/dev/ttyACM1", "--baud", "9600", "-m", "250"])
                .unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(config.serial.port, "/dev/ttyACM1");
        assert_eq!(config.serial.baud_rate, 9600);
        assert_eq!(config.radar.max_distance_cm, 250.);
    }

    #[test]
    fn test_invalid_override() {
        let args = Args::try_parse_from(["radar", "--max-distance", "0"]).unwrap();
        assert!(matches!(
            args.load_config(),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
