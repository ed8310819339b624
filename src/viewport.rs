//! Keeps the surface and the camera projection in sync with the container size.

use log::{debug, warn};
use std::rc::Rc;

use crate::camera::PerspectiveCamera;
use crate::renderer::Renderer3d;

/// The page element (or window) the scene is drawn into.
pub trait Container {
    /// Current inner size, in pixels.
    fn client_size(&self) -> (u32, u32);
}

/// Reacts to container resizes.
#[derive(Clone)]
pub struct ViewportAdapter {
    container: Rc<dyn Container>,
}

impl ViewportAdapter {
    /// Creates an adapter tracking `container`.
    pub fn new(container: Rc<dyn Container>) -> ViewportAdapter {
        ViewportAdapter { container }
    }

    /// The tracked container.
    #[inline]
    pub fn container(&self) -> &Rc<dyn Container> {
        &self.container
    }

    /// The container aspect ratio, or `1.0` while it has no area.
    pub fn aspect(&self) -> f32 {
        match self.container.client_size() {
            (w, h) if w > 0 && h > 0 => w as f32 / h as f32,
            _ => 1.0,
        }
    }

    /// Resizes the surface to the container and updates the camera aspect ratio.
    ///
    /// Returns the applied size, or `None` if the container has no area (nothing is changed).
    pub fn handle_resize(
        &self,
        renderer: &mut dyn Renderer3d,
        camera: &mut PerspectiveCamera,
    ) -> Option<(u32, u32)> {
        let (width, height) = self.container.client_size();

        if width == 0 || height == 0 {
            warn!("Ignoring resize to an empty container ({}x{}).", width, height);
            return None;
        }

        debug!("Resizing viewport to {}x{}.", width, height);
        renderer.resize(width, height);
        camera.set_aspect(width as f32 / height as f32);
        camera.update_projection();

        Some((width, height))
    }
}
