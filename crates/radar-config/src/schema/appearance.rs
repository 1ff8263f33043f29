//! Colors for the disc, rings, blips and background.

use serde::{Deserialize, Serialize};

/// `[appearance]` section. Colors are `#RRGGBB`, `#RRGGBBAA` or `rgba()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub background: String,
    /// Disc color at the center.
    pub disc_inner: String,
    /// Disc color at the rim.
    pub disc_outer: String,
    pub ring: String,
    pub blip: String,
    pub disc_alpha: f64,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background: "#0d1424".into(),
            disc_inner: "#1a4d66".into(),
            disc_outer: "#4dcccc".into(),
            ring: "#4dcccc".into(),
            blip: "#ff4d4d".into(),
            disc_alpha: 0.8,
        }
    }
}
