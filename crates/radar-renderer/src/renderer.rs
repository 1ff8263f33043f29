//! The radar renderer and its surface callbacks.
//!
//! [`RadarRenderer`] is driven serially by three callbacks, mirroring a
//! platform GL surface: created, changed and draw-frame. GPU setup happens
//! on surface-created; any failure there (or an out-of-memory surface
//! later) parks the renderer in [`RenderStatus::Unavailable`], after which
//! draw-frame is a no-op.

use std::sync::Arc;
use std::time::Instant;

use radar_config::RadarConfig;
use rand::Rng;

use crate::clock::FrameClock;
use crate::gpu::{GpuContext, RenderSurface, RendererError};
use crate::pipeline::{Palette, RadarPipelines};
use crate::scene::RadarScene;

/// Callbacks a rendering surface invokes on its render thread.
pub trait SurfaceCallbacks {
    fn on_surface_created(&mut self);
    fn on_surface_changed(&mut self, width: u32, height: u32);
    fn on_draw_frame(&mut self);
}

/// Whether the renderer can draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// Waiting for the surface.
    Pending,
    Ready,
    /// GPU setup or presentation failed; drawing is disabled.
    Unavailable(String),
}

impl RenderStatus {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RenderStatus::Unavailable(_))
    }
}

struct GpuState {
    context: GpuContext,
    pipelines: RadarPipelines,
    palette: Palette,
}

pub struct RadarRenderer {
    surface: Arc<dyn RenderSurface>,
    config: RadarConfig,
    scene: RadarScene,
    clock: FrameClock,
    gpu: Option<GpuState>,
    status: RenderStatus,
    paused: bool,
    frames: u64,
    skipped_logged: bool,
}

impl RadarRenderer {
    /// Create a renderer for `surface`. Blips are placed from `rng` here.
    pub fn new<R: Rng + ?Sized>(
        surface: Arc<dyn RenderSurface>,
        config: &RadarConfig,
        rng: &mut R,
    ) -> Self {
        let mut scene = RadarScene::new(config, rng);
        let size = surface.inner_size();
        if size.width > 0 && size.height > 0 {
            scene.set_viewport(size.width, size.height);
        }
        Self {
            surface,
            config: config.clone(),
            scene,
            clock: FrameClock::new(),
            gpu: None,
            status: RenderStatus::Pending,
            paused: false,
            frames: 0,
            skipped_logged: false,
        }
    }

    pub fn status(&self) -> &RenderStatus {
        &self.status
    }

    pub fn scene(&self) -> &RadarScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut RadarScene {
        &mut self.scene
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Stop advancing and drawing.
    pub fn on_pause(&mut self) {
        if !self.paused {
            tracing::debug!("Radar paused");
        }
        self.paused = true;
    }

    /// Resume drawing. The next frame starts from a zero delta.
    pub fn on_resume(&mut self) {
        if self.paused {
            tracing::debug!("Radar resumed");
        }
        self.paused = false;
        self.clock.reset();
        self.surface.request_redraw();
    }

    /// Advance the scene to `now`. Returns false, leaving the scene and
    /// clock untouched, while paused.
    pub fn step(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        let dt = self.clock.tick_at(now);
        self.scene.advance(dt);
        true
    }

    fn init_gpu(&mut self) -> Result<GpuState, RendererError> {
        let context = pollster::block_on(GpuContext::new(self.surface.as_ref()))?;
        let format = context.format();
        let pipelines = RadarPipelines::new(
            &context.device,
            format,
            self.scene.geometry(),
            self.scene.blips(),
            context.size.width,
            context.size.height,
        )?;
        let palette = Palette::from_config(&self.config.appearance, format.is_srgb());
        self.scene
            .set_viewport(context.size.width, context.size.height);
        Ok(GpuState {
            context,
            pipelines,
            palette,
        })
    }

    fn mark_unavailable(&mut self, reason: String) {
        tracing::error!("Radar rendering unavailable: {reason}");
        self.gpu = None;
        self.status = RenderStatus::Unavailable(reason);
    }

    fn render(&mut self) -> Result<(), RendererError> {
        let Some(gpu) = self.gpu.as_mut() else {
            return Ok(());
        };

        let output = match gpu.context.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                gpu.context.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(wgpu::SurfaceError::OutOfMemory.into());
            }
            Err(e) => {
                tracing::warn!("Skipping frame: {e}");
                return Ok(());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.pipelines
            .update_uniforms(&gpu.context.queue, &self.scene.uniforms(&gpu.palette));

        let mut encoder =
            gpu.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("radar frame encoder"),
                });
        gpu.pipelines
            .render(&mut encoder, &view, gpu.palette.clear_color());
        gpu.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl SurfaceCallbacks for RadarRenderer {
    fn on_surface_created(&mut self) {
        if self.gpu.is_some() || self.status.is_unavailable() {
            return;
        }
        match self.init_gpu() {
            Ok(state) => {
                tracing::info!(
                    "Radar renderer ready ({}x{}, {:?})",
                    state.context.size.width,
                    state.context.size.height,
                    state.context.format(),
                );
                self.gpu = Some(state);
                self.status = RenderStatus::Ready;
                self.clock.reset();
                self.surface.request_redraw();
            }
            Err(e) => self.mark_unavailable(e.to_string()),
        }
    }

    fn on_surface_changed(&mut self, width: u32, height: u32) {
        self.scene.set_viewport(width, height);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.context.resize(width, height);
            gpu.pipelines
                .resize(&gpu.context.device, width.max(1), height.max(1));
        }
    }

    fn on_draw_frame(&mut self) {
        if self.paused {
            return;
        }
        if self.status != RenderStatus::Ready {
            if !self.skipped_logged {
                tracing::warn!("Skipping draw: renderer is {:?}", self.status);
                self.skipped_logged = true;
            }
            return;
        }

        if !self.step(Instant::now()) {
            return;
        }

        if let Err(e) = self.render() {
            self.mark_unavailable(e.to_string());
            return;
        }

        self.frames += 1;
        if self.frames == 1 {
            tracing::info!("First radar frame presented");
        }
        self.surface.request_redraw();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::PhysicalSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// A surface with no window behind it.
    struct HeadlessSurface {
        redraws: AtomicUsize,
    }

    impl RenderSurface for HeadlessSurface {
        fn inner_size(&self) -> PhysicalSize {
            PhysicalSize {
                width: 640,
                height: 480,
            }
        }

        fn request_redraw(&self) {
            self.redraws.fetch_add(1, Ordering::SeqCst);
        }

        fn create_surface(
            &self,
            _instance: &wgpu::Instance,
        ) -> Result<wgpu::Surface<'static>, RendererError> {
            Err(RendererError::SurfaceError("headless".into()))
        }
    }

    fn renderer() -> (RadarRenderer, Arc<HeadlessSurface>) {
        let surface = Arc::new(HeadlessSurface {
            redraws: AtomicUsize::new(0),
        });
        let mut rng = StdRng::seed_from_u64(1);
        let renderer = RadarRenderer::new(surface.clone(), &RadarConfig::default(), &mut rng);
        (renderer, surface)
    }

    #[test]
    fn starts_pending_with_surface_viewport() {
        let (renderer, _) = renderer();
        assert_eq!(*renderer.status(), RenderStatus::Pending);
        assert_eq!(
            renderer.scene().viewport(),
            PhysicalSize {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn failed_surface_marks_unavailable() {
        let (mut renderer, _) = renderer();
        renderer.on_surface_created();
        match renderer.status() {
            RenderStatus::Unavailable(reason) => assert!(reason.contains("headless")),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn draw_is_noop_when_unavailable() {
        let (mut renderer, surface) = renderer();
        renderer.on_surface_created();
        renderer.on_draw_frame();
        renderer.on_draw_frame();
        assert_eq!(renderer.frame_count(), 0);
        assert_eq!(renderer.scene().animation().rotation_degrees(), 0.0);
        assert_eq!(surface.redraws.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unavailable_is_sticky() {
        let (mut renderer, _) = renderer();
        renderer.on_surface_created();
        renderer.on_surface_created();
        assert!(renderer.status().is_unavailable());
    }

    #[test]
    fn draw_before_surface_does_not_advance() {
        let (mut renderer, _) = renderer();
        renderer.on_draw_frame();
        assert_eq!(renderer.scene().animation().rotation_degrees(), 0.0);
    }

    #[test]
    fn surface_changed_updates_viewport_without_gpu() {
        let (mut renderer, _) = renderer();
        renderer.on_surface_changed(1280, 720);
        assert_eq!(
            renderer.scene().viewport(),
            PhysicalSize {
                width: 1280,
                height: 720
            }
        );
    }

    #[test]
    fn pause_and_resume() {
        let (mut renderer, surface) = renderer();
        renderer.on_pause();
        assert!(renderer.is_paused());
        renderer.on_resume();
        assert!(!renderer.is_paused());
        assert_eq!(surface.redraws.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn step_advances_by_elapsed_time() {
        let (mut renderer, _) = renderer();
        let t0 = Instant::now();
        assert!(renderer.step(t0));
        assert!(renderer.step(t0 + Duration::from_secs(1)));
        let degrees = renderer.scene().animation().rotation_degrees();
        assert!((degrees - 30.0).abs() < 1e-3, "rotated {degrees}");
    }

    #[test]
    fn paused_view_does_not_advance() {
        let (mut renderer, _) = renderer();
        let t0 = Instant::now();
        renderer.step(t0);
        renderer.on_pause();
        assert!(!renderer.step(t0 + Duration::from_secs(5)));
        assert!(!renderer.step(t0 + Duration::from_secs(10)));
        assert_eq!(renderer.scene().animation().rotation_degrees(), 0.0);
    }

    #[test]
    fn first_step_after_resume_is_zero_delta() {
        let (mut renderer, _) = renderer();
        let t0 = Instant::now();
        renderer.step(t0);
        renderer.step(t0 + Duration::from_secs(1));
        let before = renderer.scene().animation().rotation_degrees();

        renderer.on_pause();
        renderer.on_resume();
        assert!(renderer.step(t0 + Duration::from_secs(31)));
        let after = renderer.scene().animation().rotation_degrees();
        assert_eq!(after - before, 0.0);

        assert!(renderer.step(t0 + Duration::from_secs(32)));
        let next = renderer.scene().animation().rotation_degrees();
        assert!((next - after - 30.0).abs() < 1e-3);
    }
}
