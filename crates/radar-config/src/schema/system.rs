//! Logging settings.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "radar=debug",
            LogLevel::Info => "radar=info",
            LogLevel::Warning => "radar=warn",
            LogLevel::Error => "radar=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_uppercase() {
        let cfg: LoggingConfig = toml::from_str("level = \"DEBUG\"").unwrap();
        assert_eq!(cfg.level, LogLevel::Debug);
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Warning.as_directive(), "radar=warn");
        assert_eq!(LogLevel::default().as_directive(), "radar=info");
    }
}
