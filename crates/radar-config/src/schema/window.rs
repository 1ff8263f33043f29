//! Host window settings for the standalone binary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 64-8192).
    pub width: u32,
    /// Logical height (valid range: 64-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Radar".into(),
            width: 800,
            height: 800,
        }
    }
}
