//! CPU-side radar scene: camera, animation, blips and static geometry.
//!
//! Everything here is GPU-free so the per-frame math and tap picking can
//! be driven and tested without a device.

use rand::Rng;

use radar_config::RadarConfig;

use crate::animation::AnimationState;
use crate::blips::{place_blips, Blip, BLIP_COUNT};
use crate::geometry::StaticGeometry;
use crate::gpu::PhysicalSize;
use crate::matrix::{self, Mat4};
use crate::pipeline::{Palette, RadarUniforms};

/// Fixed camera looking down at the radar from above and in front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.5, 1.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y: 45.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.eye, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        matrix::perspective(self.fov_y.to_radians(), aspect, self.near, self.far)
    }
}

pub struct RadarScene {
    pub camera: Camera,
    animation: AnimationState,
    blips: [Blip; BLIP_COUNT],
    geometry: StaticGeometry,
    viewport: PhysicalSize,
}

impl RadarScene {
    /// Build the scene. Blips are drawn from `rng` once and never change.
    pub fn new<R: Rng + ?Sized>(config: &RadarConfig, rng: &mut R) -> Self {
        Self {
            camera: Camera::default(),
            animation: AnimationState::from_config(&config.radar),
            blips: place_blips(rng),
            geometry: StaticGeometry::generate(),
            viewport: PhysicalSize {
                width: config.window.width,
                height: config.window.height,
            },
        }
    }

    /// Advance the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.animation.tick(dt);
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationState {
        &mut self.animation
    }

    pub fn blips(&self) -> &[Blip; BLIP_COUNT] {
        &self.blips
    }

    pub fn geometry(&self) -> &StaticGeometry {
        &self.geometry
    }

    pub fn viewport(&self) -> PhysicalSize {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = PhysicalSize { width, height };
    }

    /// `scale(pulse, 1, pulse) · rotateY(angle)`.
    pub fn model_matrix(&self) -> Mat4 {
        let pulse = self.animation.pulse_scale();
        let scale = matrix::scale(pulse, 1.0, pulse);
        let rotation = matrix::rotate_y(self.animation.rotation_radians());
        matrix::mul(&scale, &rotation)
    }

    /// Projection · view · model for the current frame.
    pub fn mvp(&self) -> Mat4 {
        let projection = self.camera.projection(self.viewport.aspect());
        let view_model = matrix::mul(&self.camera.view(), &self.model_matrix());
        matrix::mul(&projection, &view_model)
    }

    pub fn uniforms(&self, palette: &Palette) -> RadarUniforms {
        let viewport = [
            self.viewport.width.max(1) as f32,
            self.viewport.height.max(1) as f32,
        ];
        RadarUniforms::new(self.mvp(), palette, viewport)
    }

    /// Project a model-space point to window pixels (origin top-left).
    /// `None` when the point is behind the camera.
    pub fn project(&self, point: [f32; 3]) -> Option<[f32; 2]> {
        let [x, y, _, w] = matrix::transform_point(&self.mvp(), point);
        if w <= f32::EPSILON {
            return None;
        }
        let ndc_x = x / w;
        let ndc_y = y / w;
        Some([
            (ndc_x + 1.0) * 0.5 * self.viewport.width as f32,
            (1.0 - ndc_y) * 0.5 * self.viewport.height as f32,
        ])
    }

    /// Index of the blip nearest to the pixel `(x, y)` within `radius_px`.
    pub fn pick_blip(&self, x: f32, y: f32, radius_px: f32) -> Option<usize> {
        if radius_px.is_nan() || radius_px <= 0.0 {
            return None;
        }
        self.blips
            .iter()
            .enumerate()
            .filter_map(|(i, blip)| {
                let [sx, sy] = self.project(blip.position)?;
                let dist = ((sx - x).powi(2) + (sy - y).powi(2)).sqrt();
                (dist <= radius_px).then_some((i, dist))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> RadarScene {
        let mut rng = StdRng::seed_from_u64(7);
        RadarScene::new(&RadarConfig::default(), &mut rng)
    }

    #[test]
    fn camera_defaults() {
        let camera = Camera::default();
        assert_eq!(camera.eye, [0.0, 1.5, 1.0]);
        assert!((camera.fov_y - 45.0).abs() < f32::EPSILON);
        assert!((camera.near - 0.1).abs() < f32::EPSILON);
        assert!((camera.far - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn viewport_comes_from_window_config() {
        let scene = scene();
        assert_eq!(
            scene.viewport(),
            PhysicalSize {
                width: 800,
                height: 800
            }
        );
    }

    #[test]
    fn model_is_identity_at_rest() {
        let scene = scene();
        for (a, b) in scene.model_matrix().iter().zip(matrix::IDENTITY.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn model_scales_xz_only() {
        let mut scene = scene();
        scene.advance(0.2);
        let pulse = scene.animation().pulse_scale();
        // Column 1 (the Y axis) is untouched by the pulse.
        let m = scene.model_matrix();
        assert!((m[5] - 1.0).abs() < 1e-6);
        let p = matrix::transform_point(&m, [0.0, 0.0, 0.0]);
        assert_eq!(p, [0.0, 0.0, 0.0, 1.0]);
        assert!(pulse > 1.0);
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let scene = scene();
        let [x, y] = scene.project([0.0, 0.0, 0.0]).unwrap();
        assert!((x - 400.0).abs() < 1e-2);
        assert!((y - 400.0).abs() < 1e-2);
    }

    #[test]
    fn near_side_projects_below_center() {
        let scene = scene();
        let [_, y] = scene.project([0.0, 0.0, 0.4]).unwrap();
        assert!(y > 400.0);
    }

    #[test]
    fn advance_rotates_at_configured_speed() {
        let mut scene = scene();
        scene.advance(1.0);
        assert!((scene.animation().rotation_degrees() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn pick_hits_blip_at_its_projection() {
        let scene = scene();
        for i in 0..BLIP_COUNT {
            let [x, y] = scene.project(scene.blips()[i].position).unwrap();
            assert_eq!(scene.pick_blip(x, y, 1.0), Some(i));
        }
    }

    #[test]
    fn pick_outside_viewport_misses() {
        let scene = scene();
        assert_eq!(scene.pick_blip(-1000.0, -1000.0, 24.0), None);
    }

    #[test]
    fn pick_with_zero_radius_misses() {
        let scene = scene();
        let [x, y] = scene.project(scene.blips()[0].position).unwrap();
        assert_eq!(scene.pick_blip(x, y, 0.0), None);
    }

    #[test]
    fn uniforms_carry_viewport() {
        let mut scene = scene();
        scene.set_viewport(1024, 0);
        let u = scene.uniforms(&Palette::default());
        assert_eq!(u.viewport, [1024.0, 1.0]);
    }

    #[test]
    fn same_seed_places_same_blips() {
        assert_eq!(scene().blips(), scene().blips());
    }
}
