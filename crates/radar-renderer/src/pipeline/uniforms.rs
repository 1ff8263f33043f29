use radar_config::colors::color_or;
use radar_config::schema::AppearanceConfig;

use crate::matrix::{Mat4, IDENTITY};

/// Per-frame uniforms shared by the radar and blip shaders.
///
/// Layout matches `struct RadarUniforms` in both WGSL files.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RadarUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: Mat4,
    pub disc_inner: [f32; 4],
    pub disc_outer: [f32; 4],
    pub ring_color: [f32; 4],
    pub blip_color: [f32; 4],
    /// Surface size in pixels, for blip sizing.
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

impl RadarUniforms {
    pub fn new(mvp: Mat4, palette: &Palette, viewport: [f32; 2]) -> Self {
        Self {
            mvp,
            disc_inner: palette.disc_inner,
            disc_outer: palette.disc_outer,
            ring_color: palette.ring,
            blip_color: palette.blip,
            viewport,
            _padding: [0.0; 2],
        }
    }
}

impl Default for RadarUniforms {
    fn default() -> Self {
        Self::new(IDENTITY, &Palette::default(), [1.0, 1.0])
    }
}

/// Resolved shader colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub disc_inner: [f32; 4],
    pub disc_outer: [f32; 4],
    pub ring: [f32; 4],
    pub blip: [f32; 4],
}

const FALLBACK_BACKGROUND: [f32; 4] = [0.05, 0.08, 0.14, 1.0];
const FALLBACK_DISC_INNER: [f32; 4] = [0.1, 0.3, 0.4, 1.0];
const FALLBACK_ACCENT: [f32; 4] = [0.3, 0.8, 0.8, 1.0];
const FALLBACK_BLIP: [f32; 4] = [1.0, 0.3, 0.3, 1.0];

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&AppearanceConfig::default(), false)
    }
}

impl Palette {
    /// Resolve `[appearance]` colors. `linear` converts from sRGB for
    /// surfaces whose format applies the sRGB curve on write.
    pub fn from_config(config: &AppearanceConfig, linear: bool) -> Self {
        let disc_alpha = config.disc_alpha.clamp(0.0, 1.0) as f32;
        let mut disc_inner = color_or(&config.disc_inner, FALLBACK_DISC_INNER);
        let mut disc_outer = color_or(&config.disc_outer, FALLBACK_ACCENT);
        disc_inner[3] *= disc_alpha;
        disc_outer[3] *= disc_alpha;

        let palette = Self {
            background: color_or(&config.background, FALLBACK_BACKGROUND),
            disc_inner,
            disc_outer,
            ring: color_or(&config.ring, FALLBACK_ACCENT),
            blip: color_or(&config.blip, FALLBACK_BLIP),
        };

        if linear {
            palette.to_linear()
        } else {
            palette
        }
    }

    fn to_linear(self) -> Self {
        Self {
            background: srgb_to_linear(self.background),
            disc_inner: srgb_to_linear(self.disc_inner),
            disc_outer: srgb_to_linear(self.disc_outer),
            ring: srgb_to_linear(self.ring),
            blip: srgb_to_linear(self.blip),
        }
    }

    /// Background as a render pass clear color.
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// sRGB transfer curve to linear, per channel. Alpha is untouched.
pub fn srgb_to_linear(color: [f32; 4]) -> [f32; 4] {
    fn channel(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    [channel(color[0]), channel(color[1]), channel(color[2]), color[3]]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_are_144_bytes() {
        assert_eq!(std::mem::size_of::<RadarUniforms>(), 144);
    }

    #[test]
    fn uniforms_are_16_byte_multiple() {
        assert_eq!(std::mem::size_of::<RadarUniforms>() % 16, 0);
    }

    #[test]
    fn default_palette_applies_disc_alpha() {
        let palette = Palette::default();
        assert!((palette.disc_inner[3] - 0.8).abs() < 1e-6);
        assert!((palette.disc_outer[3] - 0.8).abs() < 1e-6);
        assert!((palette.ring[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn default_blip_is_red() {
        let palette = Palette::default();
        assert!((palette.blip[0] - 1.0).abs() < 1e-6);
        assert!(palette.blip[1] < 0.5);
    }

    #[test]
    fn invalid_color_uses_fallback() {
        let config = AppearanceConfig {
            ring: "not a color".into(),
            ..Default::default()
        };
        let palette = Palette::from_config(&config, false);
        assert_eq!(palette.ring, FALLBACK_ACCENT);
    }

    #[test]
    fn disc_alpha_is_clamped() {
        let config = AppearanceConfig {
            disc_alpha: 4.0,
            ..Default::default()
        };
        let palette = Palette::from_config(&config, false);
        assert!((palette.disc_inner[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn linear_palette_darkens_midtones() {
        let srgb = Palette::from_config(&AppearanceConfig::default(), false);
        let linear = Palette::from_config(&AppearanceConfig::default(), true);
        assert!(linear.disc_outer[1] < srgb.disc_outer[1]);
        assert_eq!(linear.disc_outer[3], srgb.disc_outer[3]);
    }

    #[test]
    fn srgb_to_linear_endpoints() {
        let black = srgb_to_linear([0.0, 0.0, 0.0, 0.5]);
        let white = srgb_to_linear([1.0, 1.0, 1.0, 0.5]);
        assert_eq!(black, [0.0, 0.0, 0.0, 0.5]);
        assert!((white[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn clear_color_matches_background() {
        let palette = Palette::default();
        let clear = palette.clear_color();
        assert!((clear.a - 1.0).abs() < 1e-9);
        assert!((clear.r - palette.background[0] as f64).abs() < 1e-9);
    }

    #[test]
    fn uniforms_copy_palette() {
        let palette = Palette::default();
        let u = RadarUniforms::new(IDENTITY, &palette, [800.0, 600.0]);
        assert_eq!(u.ring_color, palette.ring);
        assert_eq!(u.viewport, [800.0, 600.0]);
    }
}
