//! Wires the scene, the renderer, the animation loop and the asset pipeline together.

use log::{error, info};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::animation::{AnimationLoop, FrameScheduler, LoopHandle};
use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::loader::AssetLoader;
use crate::pipeline::AssetPipeline;
use crate::renderer::{Controls, Renderer3d};
use crate::scene::SceneComposer;
use crate::viewport::{Container, ViewportAdapter};

/// An embedded 3D scene bound to a container.
///
/// Typical use:
///
/// ```ignore
/// let embed = Embed::new(config, container, renderer);
/// let handle = embed.start(scheduler, Some(controls));
/// spawn(embed.load_assets(&embed.pipeline(loader)));
/// ```
///
/// The scene renders from the first frame on; the model shows up in the first frame after its
/// assets finished loading.
pub struct Embed {
    config: EmbedConfig,
    composer: Rc<RefCell<SceneComposer>>,
    renderer: Rc<RefCell<dyn Renderer3d>>,
    viewport: ViewportAdapter,
}

impl Embed {
    /// Attaches `renderer` to `container`, sizes it and builds the scene described by `config`.
    pub fn new(
        config: EmbedConfig,
        container: Rc<dyn Container>,
        renderer: Rc<RefCell<dyn Renderer3d>>,
    ) -> Embed {
        let viewport = ViewportAdapter::new(container);
        renderer
            .borrow_mut()
            .attach(&**viewport.container(), &config.surface);

        let composer = SceneComposer::from_config(&config, viewport.aspect());
        let embed = Embed {
            config,
            composer: Rc::new(RefCell::new(composer)),
            renderer,
            viewport,
        };

        let _ = embed.handle_resize();
        embed
    }

    /// The configuration this scene was built from.
    #[inline]
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// The live scene.
    #[inline]
    pub fn composer(&self) -> &Rc<RefCell<SceneComposer>> {
        &self.composer
    }

    /// The rendering backend.
    #[inline]
    pub fn renderer(&self) -> &Rc<RefCell<dyn Renderer3d>> {
        &self.renderer
    }

    /// Matches the surface and the camera to the current container size.
    ///
    /// Call this whenever the container is resized. Returns the applied size, `None` if the
    /// container currently has no area.
    pub fn handle_resize(&self) -> Option<(u32, u32)> {
        let mut composer = self.composer.borrow_mut();
        let mut renderer = self.renderer.borrow_mut();
        self.viewport
            .handle_resize(&mut *renderer, composer.camera_mut())
    }

    /// Starts the animation loop: the first frame is rendered before this returns.
    pub fn start(
        &self,
        scheduler: Rc<dyn FrameScheduler>,
        controls: Option<Box<dyn Controls>>,
    ) -> LoopHandle {
        let mut animation =
            AnimationLoop::new(self.composer.clone(), self.renderer.clone(), scheduler);

        if let Some(controls) = controls {
            animation = animation.with_controls(controls);
        }

        Rc::new(animation).start()
    }

    /// An asset pipeline using `loader` with the configured material and placement.
    pub fn pipeline(&self, loader: AssetLoader) -> AssetPipeline {
        AssetPipeline::new(loader)
            .with_material(self.config.material)
            .with_placement(self.config.placement)
    }

    /// Loads the configured assets through `pipeline` and installs the model.
    ///
    /// Requests are issued before this returns. Failures are logged and leave the scene
    /// without a model.
    pub fn load_assets(
        &self,
        pipeline: &AssetPipeline,
    ) -> impl Future<Output = Result<(), EmbedError>> + 'static {
        let assets = &self.config.assets;
        let loading = pipeline.load_assets(&assets.model, &assets.texture);
        let composer = self.composer.clone();

        async move {
            let loaded = match loading.await {
                Ok(loaded) => loaded,
                Err(e) => {
                    error!("Could not load the scene assets: {}", e);
                    return Err(e.into());
                }
            };

            info!("Assets for the scene are ready.");
            composer.borrow_mut().set_model(loaded.model)?;
            Ok(())
        }
    }

    /// Loads the configured assets, blocking the current thread until done.
    ///
    /// Only for loaders that make progress without an event loop, such as
    /// [`ImageTextureLoader`](crate::loader::ImageTextureLoader).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_assets_blocking(&self, pipeline: &AssetPipeline) -> Result<(), EmbedError> {
        pollster::block_on(self.load_assets(pipeline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualScheduler;
    use crate::camera::PerspectiveCamera;
    use crate::config::SurfaceSetup;
    use crate::error::{LoadError, RenderError};
    use crate::resource::{Geometry, Material, Texture};
    use crate::scene::SceneNode3d;
    use std::cell::Cell;
    use std::sync::Arc;

    struct Page(Cell<(u32, u32)>);

    impl Container for Page {
        fn client_size(&self) -> (u32, u32) {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Canvas {
        attached: Option<SurfaceSetup>,
        size: (u32, u32),
        renders: usize,
    }

    impl Renderer3d for Canvas {
        fn attach(&mut self, _: &dyn Container, setup: &SurfaceSetup) {
            self.attached = Some(*setup);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }

        fn render(&mut self, _: &SceneNode3d, _: &PerspectiveCamera) -> Result<(), RenderError> {
            self.renders += 1;
            Ok(())
        }
    }

    fn embed(size: (u32, u32)) -> (Embed, Rc<Page>, Rc<RefCell<Canvas>>) {
        let page = Rc::new(Page(Cell::new(size)));
        let canvas = Rc::new(RefCell::new(Canvas::default()));
        let config = EmbedConfig::default().with_assets("/model.glb", "/main.png");
        (Embed::new(config, page.clone(), canvas.clone()), page, canvas)
    }

    fn loader(fail_model: bool) -> AssetLoader {
        AssetLoader::new(
            Rc::new(move |url: &str| -> Result<SceneNode3d, LoadError> {
                if fail_model {
                    Err(LoadError::Fetch {
                        url: url.to_string(),
                        reason: "404".to_string(),
                    })
                } else {
                    Ok(SceneNode3d::mesh(
                        Arc::new(Geometry::quad()),
                        Material::default(),
                    ))
                }
            }),
            Rc::new(|url: &str| -> Result<Texture, LoadError> {
                Ok(Texture::solid(url, 4, 4, crate::color::WHITE))
            }),
        )
    }

    #[test]
    fn new_attaches_and_sizes_the_surface() {
        let (embed, _, canvas) = embed((800, 400));
        assert_eq!(canvas.borrow().attached, Some(SurfaceSetup::default()));
        assert_eq!(canvas.borrow().size, (800, 400));
        assert_eq!(embed.composer().borrow().camera().aspect(), 2.0);
    }

    #[test]
    fn resize_follows_the_container() {
        let (embed, page, canvas) = embed((800, 400));
        page.0.set((300, 600));
        assert_eq!(embed.handle_resize(), Some((300, 600)));
        assert_eq!(canvas.borrow().size, (300, 600));
        assert_eq!(embed.composer().borrow().camera().aspect(), 0.5);

        page.0.set((0, 600));
        assert_eq!(embed.handle_resize(), None);
        assert_eq!(embed.composer().borrow().camera().aspect(), 0.5);
    }

    #[test]
    fn start_renders_immediately() {
        let (embed, _, canvas) = embed((800, 400));
        let scheduler = Rc::new(ManualScheduler::new());
        let handle = embed.start(scheduler.clone(), None);

        assert_eq!(canvas.borrow().renders, 1);
        let _ = scheduler.run_frame();
        assert_eq!(handle.frames_rendered(), 2);
    }

    #[test]
    fn assets_are_installed_once() {
        let (embed, _, _) = embed((800, 400));
        let pipeline = embed.pipeline(loader(false));

        embed.load_assets_blocking(&pipeline).unwrap();
        let model = embed.composer().borrow().model().cloned().unwrap();
        assert_eq!(model.position().y, -11.5);

        assert!(matches!(
            embed.load_assets_blocking(&pipeline),
            Err(EmbedError::ModelAlreadySet)
        ));
        assert_eq!(embed.composer().borrow().scene().count_child(&model), 1);
    }

    #[test]
    fn failed_load_leaves_the_scene_alone() {
        let (embed, _, _) = embed((800, 400));
        let before = embed.composer().borrow().scene().num_children();

        let err = embed
            .load_assets_blocking(&embed.pipeline(loader(true)))
            .unwrap_err();
        assert!(matches!(err, EmbedError::Load(LoadError::Fetch { .. })));
        assert!(embed.composer().borrow().model().is_none());
        assert_eq!(embed.composer().borrow().scene().num_children(), before);
    }
}
