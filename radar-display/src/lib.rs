pub mod cli;
pub mod config;
pub mod geometry;
pub mod render;
pub mod scene;

pub use cli::Args;
pub use config::{Config, ConfigError};
pub use geometry::Geometry;
pub use render::render;
pub use scene::Scene;
