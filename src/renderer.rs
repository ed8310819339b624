//! The seams to the rendering backend and to the interactive controls.

use crate::camera::PerspectiveCamera;
use crate::config::SurfaceSetup;
use crate::error::RenderError;
use crate::scene::SceneNode3d;
use crate::viewport::Container;

/// A rendering backend drawing the scene graph into a surface.
///
/// The backend owns its surface (a canvas on the web); embed3d only tells it where to attach,
/// how big it is and when to draw.
pub trait Renderer3d {
    /// Attaches the drawing surface to `container`.
    ///
    /// Called once, before the first `resize`.
    fn attach(&mut self, container: &dyn Container, setup: &SurfaceSetup);

    /// Resizes the drawing surface, in pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame of `scene` as seen by `camera`.
    ///
    /// An error here stops the animation loop for good.
    fn render(&mut self, scene: &SceneNode3d, camera: &PerspectiveCamera)
        -> Result<(), RenderError>;
}

/// User-driven camera motion (orbiting, zooming, panning).
pub trait Controls {
    /// Applies pending input and damping to the camera. Called once per frame, before rendering.
    fn update(&mut self, camera: &mut PerspectiveCamera);
}
