//! Radar blips: eight fixed targets placed once per view.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Blips per radar, one per 45° sector.
pub const BLIP_COUNT: usize = 8;
/// Distance from the center, in disc units.
pub const BLIP_DISTANCE: Range<f32> = 0.3..0.7;
/// Offset above/below the disc plane.
pub const BLIP_HEIGHT: Range<f32> = -0.1..0.1;
/// Rendering size hint.
pub const BLIP_SIZE: Range<f32> = 0.01..0.03;

/// A radar target. Also the per-instance vertex data for the blip pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Blip {
    pub position: [f32; 3],
    pub size: f32,
}

impl Blip {
    /// Instance buffer layout: center at location 0, size at location 1.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Blip>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
        ],
    };

    /// Horizontal distance from the radar center.
    pub fn distance(&self) -> f32 {
        let [x, _, z] = self.position;
        (x * x + z * z).sqrt()
    }

    pub fn height(&self) -> f32 {
        self.position[1]
    }
}

/// Place one blip in each 45° sector using `rng`.
pub fn place_blips<R: Rng + ?Sized>(rng: &mut R) -> [Blip; BLIP_COUNT] {
    std::array::from_fn(|i| {
        let angle = (i as f32 * 45.0).to_radians();
        let distance = rng.gen_range(BLIP_DISTANCE);
        let height = rng.gen_range(BLIP_HEIGHT);
        let size = rng.gen_range(BLIP_SIZE);
        Blip {
            position: [angle.cos() * distance, height, angle.sin() * distance],
            size,
        }
    })
}

/// RNG for blip placement: seeded when `seed` is set, else from entropy.
pub fn blip_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// =============================================================================
// Tests
// =============================================================================
