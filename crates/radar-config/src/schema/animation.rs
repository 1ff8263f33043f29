//! Rotation and pulse animation settings.

use serde::{Deserialize, Serialize};

/// `[radar]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Degrees per second around the vertical axis (valid range: 0-720).
    pub rotation_speed: f64,
    pub pulse_enabled: bool,
    /// Scale units per second (valid range: 0-5).
    pub pulse_rate: f64,
    pub pulse_min: f64,
    pub pulse_max: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 30.0,
            pulse_enabled: true,
            pulse_rate: 0.5,
            pulse_min: 0.8,
            pulse_max: 1.2,
        }
    }
}
