//! Settings for the radar display, read from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) gives the stock
//! 900x550 window watching a 100 cm range.

use radar_data::DEFAULT_MAX_DISTANCE_CM;
use radar_driver::DEFAULT_BAUD_RATE;
use serde::Deserialize;
use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

/// RGB triple, written as `[r, g, b]` in the config file.
pub type Rgb = [u8; 3];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub serial: SerialConfig,
    pub display: DisplayConfig,
    pub radar: RadarConfig,
    pub palette: Palette,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerialConfig {
    pub port: String,
    pub baud_rate: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Gap between the radar origin and the bottom edge of the window.
    pub bottom_margin: u32,
    pub fps: u64,
    pub font_family: String,
    pub font_size: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RadarConfig {
    pub max_distance_cm: f64,
    /// Readings closer than this many degrees to the beam are highlighted.
    pub highlight_tolerance_deg: i32,
    pub ring_count: u32,
    pub spoke_step_deg: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub beam: Rgb,
    pub object: Rgb,
    pub highlight: Rgb,
}

fn default_port() -> String {
    if cfg!(windows) {
        "COM5".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig {
            port: default_port(),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Arduino ultrasonic radar".to_string(),
            width: 900,
            height: 550,
            bottom_margin: 80,
            fps: 60,
            font_family: "monospace".to_string(),
            font_size: 18.,
        }
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        RadarConfig {
            max_distance_cm: DEFAULT_MAX_DISTANCE_CM,
            highlight_tolerance_deg: 2,
            ring_count: 4,
            spoke_step_deg: 30,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: [5, 20, 5],
            grid: [0, 80, 0],
            beam: [0, 255, 0],
            object: [255, 0, 0],
            highlight: [255, 255, 0],
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, io::Error),
    ParseError(toml::de::Error),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ReadError(path, err) => write!(f, "Failed to read \"{}\": {}", path.display(), err),
            ConfigError::ParseError(err) => Display::fmt(&err, f),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        let config = Config::from_toml_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::InvalidValue(msg.to_string()));
        if self.display.width == 0 || self.display.height == 0 {
            return invalid("window width and height must be positive");
        }
        if self.display.bottom_margin >= self.display.height {
            return invalid("bottom_margin must be smaller than the window height");
        }
        if self.display.fps == 0 {
            return invalid("fps must be positive");
        }
        if !self.display.font_size.is_finite() || self.display.font_size <= 0. {
            return invalid("font_size must be positive");
        }
        if !self.radar.max_distance_cm.is_finite() || self.radar.max_distance_cm <= 0. {
            return invalid("max_distance_cm must be a positive number");
        }
        if self.radar.highlight_tolerance_deg < 0 {
            return invalid("highlight_tolerance_deg must not be negative");
        }
        if self.radar.ring_count == 0 {
            return invalid("ring_count must be positive");
        }
        if self.radar.spoke_step_deg == 0 || self.radar.spoke_step_deg > 180 {
            return invalid("spoke_step_deg must be within 1..=180");
        }
        Ok(())
    }
}
