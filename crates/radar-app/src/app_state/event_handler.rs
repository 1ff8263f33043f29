//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use radar_bridge::NativeView;

use super::core::RadarApp;

impl ApplicationHandler for RadarApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            self.set_paused(false);
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.set_paused(true);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                if let Some(tag) = self.view_tag.take() {
                    self.registry.drop_view(tag);
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(view) = self.view() {
                        view.on_surface_changed(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::Occluded(occluded) => self.set_paused(occluded),

            WindowEvent::Focused(true) => self.set_paused(false),

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.cursor {
                    if let Some(view) = self.view() {
                        view.handle_tap(x, y);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(view) = self.view() {
                    view.on_draw_frame();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.drain_events();
    }
}

impl RadarApp {
    fn view(&mut self) -> Option<&mut dyn NativeView> {
        let tag = self.view_tag?;
        self.registry.view_mut(tag)
    }

    fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Pause or resume the view; repeated calls with the same state are ignored.
    fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if let Some(view) = self.view() {
            if paused {
                view.on_pause();
            } else {
                view.on_resume();
            }
        }
        tracing::debug!(paused, "View lifecycle changed");
    }
}
