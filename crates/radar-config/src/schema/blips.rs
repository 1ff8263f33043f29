//! Blip placement and picking.

use serde::{Deserialize, Serialize};

/// `[blips]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlipConfig {
    /// Fixed RNG seed for reproducible placement. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// How close (in surface pixels) a tap must land to hit a blip.
    pub pick_radius_px: f64,
}

impl Default for BlipConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pick_radius_px: 24.0,
        }
    }
}
