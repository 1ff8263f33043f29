//! Configuration schema types for the radar scope.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod animation;
mod appearance;
mod blips;
mod system;
mod window;

pub use animation::*;
pub use appearance::*;
pub use blips::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RadarConfig {
    /// Rotation and pulse animation (`[radar]`).
    pub radar: AnimationConfig,
    pub appearance: AppearanceConfig,
    pub blips: BlipConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
