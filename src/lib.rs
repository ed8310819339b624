/*!
# embed3d

An embeddable 3D showcase scene.

**embed3d** drives a small scene drawn into a page element (or any host providing a surface and
a per-frame scheduler):

* a camera placed once from an authored transform,
* three area lights orbiting the model on a smooth back-and-forth arc,
* a model and its texture loaded asynchronously, dressed with a shared metallic material and
  spliced into the scene once both are ready.

Rendering starts immediately; the model simply appears in the first frame after it finished
loading. Drawing and user input are delegated to a [`Renderer3d`](renderer::Renderer3d) and a
[`Controls`](renderer::Controls) implementation, and mesh parsing to a
[`ModelLoader`](loader::ModelLoader).

```no_run
use embed3d::prelude::*;
# fn backend() -> Rc<RefCell<dyn Renderer3d>> { unimplemented!() }
# fn page() -> Rc<dyn Container> { unimplemented!() }
# fn gltf() -> Rc<dyn ModelLoader> { unimplemented!() }

let config = EmbedConfig::default().with_assets("/models/scene.glb", "/textures/main.png");
let embed = Embed::new(config, page(), backend());

let scheduler = Rc::new(ManualScheduler::new());
let handle = embed.start(scheduler.clone(), None);

let loader = AssetLoader::new(gltf(), Rc::new(ImageTextureLoader::new("public")));
embed.load_assets_blocking(&embed.pipeline(loader)).ok();

scheduler.run(600, None);
handle.cancel();
```

On **WASM**, [`web::init_3d`] does all of this against a page element, with
`requestAnimationFrame` as the scheduler.
*/
#![allow(clippy::module_inception)]
#![allow(clippy::type_complexity)]

#[cfg(feature = "serde")]
extern crate serde;

pub use glamx;

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub use pollster;

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use wasm_bindgen_futures;

pub mod animation;
pub mod camera;
pub mod color;
pub mod config;
pub mod embed;
pub mod error;
pub mod light;
pub mod loader;
pub mod pipeline;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod prelude {
    pub use crate::animation::*;
    pub use crate::camera::*;
    pub use crate::color::*;
    pub use crate::config::*;
    pub use crate::embed::*;
    pub use crate::error::*;
    pub use crate::light::*;
    pub use crate::loader::*;
    pub use crate::pipeline::*;
    pub use crate::renderer::*;
    pub use crate::resource::*;
    pub use crate::scene::*;
    pub use crate::viewport::*;
    #[cfg(target_arch = "wasm32")]
    pub use crate::web::*;
    pub use glamx::{Pose3, Quat, Vec2, Vec3, Vec3Swizzles};
    pub use std::cell::RefCell;
    pub use std::rc::Rc;
}
