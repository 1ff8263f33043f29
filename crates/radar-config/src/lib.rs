//! Radar scope configuration.
//!
//! TOML-based configuration with full validation. Every section uses
//! serde defaults, so an empty file (or no file at all) yields the stock
//! radar: 30°/s rotation, pulsing between 0.8 and 1.2, random blips.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use radar_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("rotating at {}°/s", config.radar.rotation_speed);
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::RadarConfig;

use radar_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file on first run.
pub fn load_config() -> Result<RadarConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<RadarConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
