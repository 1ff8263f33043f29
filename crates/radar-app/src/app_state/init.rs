//! Window creation, package registration and view mounting.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use radar_bridge::{RadarPackage, REACT_CLASS};
use radar_renderer::RenderSurface;

use super::core::RadarApp;

impl RadarApp {
    /// Create the window, register the radar package and mount one view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if let Err(e) = self.registry.register_package(&RadarPackage) {
            tracing::error!("Failed to register radar package: {e}");
            return false;
        }
        tracing::debug!("Host constants: {}", self.registry.constants());

        let surface: Arc<dyn RenderSurface> = Arc::new(Arc::clone(&window));
        let view_tag = match self
            .registry
            .create_view(REACT_CLASS, surface, &self.config)
        {
            Ok(tag) => tag,
            Err(e) => {
                tracing::error!("Failed to mount radar view: {e}");
                return false;
            }
        };

        if let Some(view) = self.registry.view_mut(view_tag) {
            view.on_surface_created();
            let size = window.inner_size();
            view.on_surface_changed(size.width, size.height);
        }

        self.window = Some(window);
        self.view_tag = Some(view_tag);
        true
    }
}
