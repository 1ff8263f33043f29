//! Mounted native views.

use std::any::Any;
use std::sync::Arc;

use radar_common::{EventBus, RadarEvent};
use radar_config::RadarConfig;
use radar_renderer::blips::blip_rng;
use radar_renderer::{RadarRenderer, RenderStatus, RenderSurface, SurfaceCallbacks};

/// Everything a manager needs to construct a view instance.
pub struct ViewContext {
    pub view_tag: u32,
    pub surface: Arc<dyn RenderSurface>,
    pub config: RadarConfig,
    pub events: Arc<EventBus>,
}

/// A view instance mounted in the host.
///
/// Surface callbacks arrive on the render thread; lifecycle and taps come
/// from the host's UI thread. Both are serialized by the host.
pub trait NativeView: SurfaceCallbacks {
    fn view_tag(&self) -> u32;

    fn on_resume(&mut self);

    fn on_pause(&mut self);

    /// A tap at surface pixel `(x, y)`.
    fn handle_tap(&mut self, x: f32, y: f32);

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The radar component: a [`RadarRenderer`] plus its event wiring.
pub struct RadarView {
    view_tag: u32,
    renderer: RadarRenderer,
    events: Arc<EventBus>,
    pick_radius_px: f32,
    reported_unavailable: bool,
}

impl RadarView {
    pub fn new(ctx: ViewContext) -> Self {
        let mut rng = blip_rng(ctx.config.blips.seed);
        let renderer = RadarRenderer::new(ctx.surface, &ctx.config, &mut rng);
        tracing::debug!(view_tag = ctx.view_tag, "Radar view created");
        Self {
            view_tag: ctx.view_tag,
            renderer,
            events: ctx.events,
            pick_radius_px: ctx.config.blips.pick_radius_px as f32,
            reported_unavailable: false,
        }
    }

    pub fn renderer(&self) -> &RadarRenderer {
        &self.renderer
    }

    pub fn set_rotation_speed(&mut self, degrees_per_second: f64) {
        self.renderer
            .scene_mut()
            .animation_mut()
            .set_rotation_speed(degrees_per_second);
    }

    pub fn set_pulse_enabled(&mut self, enabled: bool) {
        self.renderer
            .scene_mut()
            .animation_mut()
            .set_pulse_enabled(enabled);
    }

    fn report_status(&mut self) {
        if self.reported_unavailable {
            return;
        }
        if let RenderStatus::Unavailable(reason) = self.renderer.status() {
            self.events.publish(RadarEvent::RenderUnavailable {
                view_tag: self.view_tag,
                reason: reason.clone(),
            });
            self.reported_unavailable = true;
        }
    }
}

impl SurfaceCallbacks for RadarView {
    fn on_surface_created(&mut self) {
        self.renderer.on_surface_created();
        self.report_status();
    }

    fn on_surface_changed(&mut self, width: u32, height: u32) {
        self.renderer.on_surface_changed(width, height);
    }

    fn on_draw_frame(&mut self) {
        self.renderer.on_draw_frame();
        self.report_status();
    }
}

impl NativeView for RadarView {
    fn view_tag(&self) -> u32 {
        self.view_tag
    }

    fn on_resume(&mut self) {
        self.renderer.on_resume();
        self.events.publish(RadarEvent::Resumed {
            view_tag: self.view_tag,
        });
    }

    fn on_pause(&mut self) {
        self.renderer.on_pause();
        self.events.publish(RadarEvent::Paused {
            view_tag: self.view_tag,
        });
    }

    fn handle_tap(&mut self, x: f32, y: f32) {
        let blip = self.renderer.scene().pick_blip(x, y, self.pick_radius_px);
        tracing::debug!(view_tag = self.view_tag, x, y, ?blip, "Radar tapped");
        self.events.publish(RadarEvent::RadarClick {
            view_tag: self.view_tag,
            x,
            y,
            blip,
        });
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
