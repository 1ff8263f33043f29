pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, RadarError};
pub use events::{EventBus, RadarEvent};
pub use types::Color;

pub type Result<T> = std::result::Result<T, RadarError>;
