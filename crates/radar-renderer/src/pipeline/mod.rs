//! wgpu pipelines for the radar: disc, rings and instanced blips.
//!
//! All three passes share one uniform buffer and one depth target. The
//! disc writes depth; rings draw on top of the coplanar disc with an
//! `Always` compare; blips test against the disc without writing.

mod depth;
mod radar;
mod uniforms;

pub use depth::*;
pub use radar::*;
pub use uniforms::*;
