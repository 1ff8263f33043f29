mod context;
mod surface;
mod types;

pub use context::*;
pub use surface::*;
pub use types::*;
