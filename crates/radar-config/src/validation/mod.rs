//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod animation;
mod appearance;
mod helpers;
mod misc;


pub use animation::MAX_ROTATION_SPEED;

use crate::schema::RadarConfig;
use radar_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RadarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    animation::validate_animation(&mut errors, config);
    appearance::validate_appearance(&mut errors, config);
    misc::validate_blips(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
