//! The platform surface a radar view draws into.

use std::sync::Arc;

use winit::window::Window;

use super::types::{PhysicalSize, RendererError};

/// A host-owned drawable the renderer can attach a wgpu surface to.
pub trait RenderSurface: Send + Sync {
    /// Current size in physical pixels.
    fn inner_size(&self) -> PhysicalSize;

    /// Ask the host to schedule another draw-frame callback.
    fn request_redraw(&self);

    /// Create the wgpu surface for this drawable.
    fn create_surface(
        &self,
        instance: &wgpu::Instance,
    ) -> Result<wgpu::Surface<'static>, RendererError>;
}

impl RenderSurface for Arc<Window> {
    fn inner_size(&self) -> PhysicalSize {
        let size = Window::inner_size(self);
        PhysicalSize {
            width: size.width,
            height: size.height,
        }
    }

    fn request_redraw(&self) {
        Window::request_redraw(self);
    }

    fn create_surface(
        &self,
        instance: &wgpu::Instance,
    ) -> Result<wgpu::Surface<'static>, RendererError> {
        Ok(instance.create_surface(Arc::clone(self))?)
    }
}
