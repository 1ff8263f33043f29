//! WGSL shader assets and checked compilation.
//!
//! Shaders live as `.wgsl` files next to this module and are described by
//! a [`ShaderAsset`] table. Compilation and pipeline creation run inside a
//! wgpu validation error scope so failures come back as
//! [`RendererError::ShaderError`] instead of a device-lost panic later.

use crate::gpu::RendererError;

/// One WGSL source file and the entry points the pipelines use from it.
#[derive(Debug, Clone, Copy)]
pub struct ShaderAsset {
    pub name: &'static str,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entries: &'static [&'static str],
}

/// Disc and ring shading.
pub const RADAR_SHADER: ShaderAsset = ShaderAsset {
    name: "radar",
    source: include_str!("radar.wgsl"),
    vertex_entry: "vs_main",
    fragment_entries: &["fs_disc", "fs_ring"],
};

/// Instanced blip dots.
pub const BLIP_SHADER: ShaderAsset = ShaderAsset {
    name: "blip",
    source: include_str!("blip.wgsl"),
    vertex_entry: "vs_main",
    fragment_entries: &["fs_main"],
};

pub const ALL_SHADERS: [ShaderAsset; 2] = [RADAR_SHADER, BLIP_SHADER];

impl ShaderAsset {
    /// Whether `entry` is declared in the source.
    pub fn declares(&self, entry: &str) -> bool {
        self.source.contains(&format!("fn {entry}("))
    }

    /// The fragment entry points as a fixed-size array, one per pipeline
    /// built from this asset.
    pub fn fragment_entry_points<const N: usize>(
        &self,
    ) -> Result<[&'static str; N], RendererError> {
        <[&'static str; N]>::try_from(self.fragment_entries).map_err(|_| {
            RendererError::ShaderError {
                asset: self.name.to_string(),
                message: format!(
                    "expected {N} fragment entry points, found {}",
                    self.fragment_entries.len()
                ),
            }
        })
    }

    /// Compile this asset on `device`.
    pub fn compile(&self, device: &wgpu::Device) -> Result<wgpu::ShaderModule, RendererError> {
        validated(device, self.name, || {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(self.name),
                source: wgpu::ShaderSource::Wgsl(self.source.into()),
            })
        })
    }
}

/// Run `create` inside a validation error scope and surface any error.
pub fn validated<T>(
    device: &wgpu::Device,
    label: &str,
    create: impl FnOnce() -> T,
) -> Result<T, RendererError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = create();
    match pollster::block_on(device.pop_error_scope()) {
        None => Ok(value),
        Some(err) => {
            tracing::error!(asset = label, "GPU validation failed: {err}");
            Err(RendererError::ShaderError {
                asset: label.to_string(),
                message: err.to_string(),
            })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
