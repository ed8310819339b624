//! Browser glue: `requestAnimationFrame`, page elements, resize events and logging.

use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::animation::{FrameCallback, FrameScheduler, LoopHandle};
use crate::config::EmbedConfig;
use crate::embed::Embed;
use crate::error::HostError;
use crate::loader::AssetLoader;
use crate::renderer::{Controls, Renderer3d};
use crate::viewport::Container;

fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

/// Schedules frames with the browser's `requestAnimationFrame`.
pub struct AnimationFrameScheduler {
    window: web_sys::Window,
}

impl AnimationFrameScheduler {
    /// A scheduler bound to the current window.
    pub fn new() -> Result<AnimationFrameScheduler, HostError> {
        Ok(AnimationFrameScheduler { window: window()? })
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let closure = Closure::once_into_js(move || callback());

        if let Err(e) = self
            .window
            .request_animation_frame(closure.unchecked_ref())
        {
            error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// A page element hosting the scene.
pub struct ElementContainer {
    element: web_sys::Element,
}

impl ElementContainer {
    /// Wraps `element`.
    pub fn new(element: web_sys::Element) -> ElementContainer {
        ElementContainer { element }
    }

    /// Finds the first element matching the CSS `selector`.
    pub fn select(selector: &str) -> Result<ElementContainer, HostError> {
        let document = window()?.document().ok_or(HostError::NoWindow)?;

        match document.query_selector(selector).map_err(HostError::from)? {
            Some(element) => Ok(ElementContainer::new(element)),
            None => Err(HostError::MissingContainer {
                selector: selector.to_string(),
            }),
        }
    }

    /// The wrapped element.
    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }
}

impl Container for ElementContainer {
    fn client_size(&self) -> (u32, u32) {
        (
            self.element.client_width().max(0) as u32,
            self.element.client_height().max(0) as u32,
        )
    }
}

/// Calls [`Embed::handle_resize`] on every window resize, for the lifetime of the page.
pub fn listen_resize(embed: Rc<Embed>) -> Result<(), HostError> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        let _ = embed.handle_resize();
    });

    window()?
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(HostError::from)?;
    closure.forget();

    Ok(())
}

/// Sends `log` records to the browser console.
///
/// Does nothing if a logger is already installed.
pub fn init_logging(level: log::Level) {
    let _ = console_log::init_with_level(level);
}

/// Embeds the scene into the element matching `selector`.
///
/// Starts rendering right away and loads the configured assets in the background. The returned
/// handle stops the animation.
pub fn init_3d(
    selector: &str,
    config: EmbedConfig,
    renderer: Rc<RefCell<dyn Renderer3d>>,
    controls: Option<Box<dyn Controls>>,
    loader: AssetLoader,
) -> Result<(Rc<Embed>, LoopHandle), HostError> {
    let container = Rc::new(ElementContainer::select(selector)?);
    let embed = Rc::new(Embed::new(config, container, renderer));
    listen_resize(embed.clone())?;

    let scheduler = Rc::new(AnimationFrameScheduler::new()?);
    let handle = embed.start(scheduler, controls);

    let loading = embed.load_assets(&embed.pipeline(loader));
    wasm_bindgen_futures::spawn_local(async move {
        if loading.await.is_ok() {
            info!("Scene fully loaded.");
        }
    });

    Ok((embed, handle))
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}
