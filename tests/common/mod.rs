#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Once};

use embed3d::prelude::*;

static LOGGER: Once = Once::new();

pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A loader that holds on to every request until the test answers it.
pub struct Deferred<T> {
    pending: RefCell<VecDeque<LoadCompletion<T>>>,
    requested: Cell<usize>,
}

impl<T> Deferred<T> {
    pub fn new() -> Rc<Self> {
        Rc::new(Deferred {
            pending: RefCell::new(VecDeque::new()),
            requested: Cell::new(0),
        })
    }

    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    fn push(&self, completion: LoadCompletion<T>) {
        self.requested.set(self.requested.get() + 1);
        self.pending.borrow_mut().push_back(completion);
    }

    fn next(&self) -> LoadCompletion<T> {
        self.pending
            .borrow_mut()
            .pop_front()
            .expect("no pending request")
    }

    pub fn resolve_next(&self, value: T) {
        self.next().resolve(value);
    }

    pub fn reject_next(&self, reason: &str) {
        let completion = self.next();
        let error = LoadError::Fetch {
            url: completion.url().to_string(),
            reason: reason.to_string(),
        };
        completion.reject(error);
    }
}

impl ModelLoader for Deferred<SceneNode3d> {
    fn load(&self, _: &str, completion: LoadCompletion<SceneNode3d>) {
        self.push(completion);
    }
}

impl TextureLoader for Deferred<Texture> {
    fn load(&self, _: &str, completion: LoadCompletion<Texture>) {
        self.push(completion);
    }
}

/// What the renderer saw in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub meshes: usize,
    pub aspect: f32,
}

/// A renderer recording every frame instead of drawing it.
#[derive(Default)]
pub struct Recorder {
    pub size: (u32, u32),
    pub frames: Vec<Frame>,
    pub fail_at: Option<usize>,
}

impl Renderer3d for Recorder {
    fn attach(&mut self, _: &dyn Container, _: &SurfaceSetup) {}

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self, scene: &SceneNode3d, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        if self.fail_at == Some(self.frames.len()) {
            return Err(RenderError("device lost".to_string()));
        }

        let mut meshes = 0;
        scene.apply_to_scene_nodes(&mut |n| {
            if n.is_mesh() {
                meshes += 1;
            }
        });

        self.frames.push(Frame {
            meshes,
            aspect: camera.aspect(),
        });
        Ok(())
    }
}

pub struct Page(pub Cell<(u32, u32)>);

impl Container for Page {
    fn client_size(&self) -> (u32, u32) {
        self.0.get()
    }
}

pub struct Harness {
    pub embed: Embed,
    pub page: Rc<Page>,
    pub recorder: Rc<RefCell<Recorder>>,
    pub models: Rc<Deferred<SceneNode3d>>,
    pub textures: Rc<Deferred<Texture>>,
    pub scheduler: Rc<ManualScheduler>,
}

impl Harness {
    pub fn new() -> Harness {
        Harness::with_recorder(Recorder::default())
    }

    pub fn with_recorder(recorder: Recorder) -> Harness {
        init_logger();

        let page = Rc::new(Page(Cell::new((1280, 720))));
        let recorder = Rc::new(RefCell::new(recorder));
        let config = EmbedConfig::default().with_assets("/models/showcase.glb", "/textures/main.png");
        let embed = Embed::new(config, page.clone(), recorder.clone());

        Harness {
            embed,
            page,
            recorder,
            models: Deferred::new(),
            textures: Deferred::new(),
            scheduler: Rc::new(ManualScheduler::new()),
        }
    }

    pub fn pipeline(&self) -> AssetPipeline {
        self.embed
            .pipeline(AssetLoader::new(self.models.clone(), self.textures.clone()))
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.recorder.borrow().frames.clone()
    }
}

/// A model with three meshes and two empty nodes (the root and a group).
pub fn showcase_model() -> SceneNode3d {
    let geometry = Arc::new(Geometry::quad());
    let mut root = SceneNode3d::empty();
    root.set_name("showcase");
    root.set_position(Vec3::new(4.0, 0.0, 0.0));

    let mut body = root.add_group();
    body.add_child(SceneNode3d::mesh(geometry.clone(), Material::default()));
    body.add_child(SceneNode3d::mesh(geometry.clone(), Material::default()));
    root.add_child(SceneNode3d::mesh(geometry, Material::default()));
    root
}

pub fn texture_256() -> Texture {
    Texture::solid("/textures/main.png", 256, 256, Color::new(0.8, 0.6, 0.4, 1.0))
}
