//! Static radar geometry: the filled disc and the concentric ring loops.
//!
//! Both sets are generated once from closed-form trigonometry and never
//! resized. wgpu has no fan/loop topologies, so each set ships with an index
//! buffer that expands it to a triangle list or line list.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
