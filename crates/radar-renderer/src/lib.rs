pub mod animation;
pub mod blips;
pub mod clock;
pub mod geometry;
pub mod gpu;
pub mod matrix;
pub mod pipeline;
pub mod renderer;
pub mod scene;
pub mod shaders;

pub use animation::{AnimationState, PulseSettings};
pub use blips::{place_blips, Blip, BLIP_COUNT};
pub use clock::FrameClock;
pub use gpu::{GpuContext, PhysicalSize, RenderSurface, RendererError};
pub use renderer::{RadarRenderer, RenderStatus, SurfaceCallbacks};
pub use scene::{Camera, RadarScene};
