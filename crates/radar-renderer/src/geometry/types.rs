//! Radar vertex type, buffer layout and geometry constants.

/// Samples per full circle (one per degree).
pub const CIRCLE_SEGMENTS: usize = 360;
/// Radius of the filled disc.
pub const DISC_RADIUS: f32 = 0.5;
/// Number of concentric ring outlines.
pub const RING_COUNT: usize = 4;
/// Radius step between rings; ring `k` sits at `RING_SPACING * (k + 1)`.
pub const RING_SPACING: f32 = 0.125;

/// Center + 361 perimeter points (sample 360 repeats sample 0).
pub const DISC_VERTEX_COUNT: usize = CIRCLE_SEGMENTS + 2;
pub const RING_VERTEX_COUNT: usize = RING_COUNT * CIRCLE_SEGMENTS;

/// A single vertex of the disc or ring geometry. 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RadarVertex {
    pub position: [f32; 3],
}

impl RadarVertex {
    /// wgpu vertex buffer layout for `RadarVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<RadarVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };

    /// Distance from the Y axis, i.e. radius in the XZ plane.
    pub fn radius_xz(&self) -> f32 {
        let [x, _, z] = self.position;
        (x * x + z * z).sqrt()
    }
}

/// Radius of ring `ring` (0-based).
pub fn ring_radius(ring: usize) -> f32 {
    RING_SPACING * (ring as f32 + 1.0)
}

// =============================================================================
// Tests
// =============================================================================
