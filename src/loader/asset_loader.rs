use log::debug;
use std::future::Future;
use std::rc::Rc;

use crate::error::LoadError;
use crate::resource::Texture;
use crate::scene::SceneNode3d;

/// The one-shot result slot handed to a loader.
///
/// A loader reports exactly once, through [`resolve`](Self::resolve),
/// [`reject`](Self::reject) or [`finish`](Self::finish). Dropping the completion without
/// reporting makes the waiting side fail with [`LoadError::Abandoned`].
pub struct LoadCompletion<T> {
    url: String,
    sender: oneshot::Sender<Result<T, LoadError>>,
}

impl<T> LoadCompletion<T> {
    /// The URL this completion answers for.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reports success.
    pub fn resolve(self, value: T) {
        self.finish(Ok(value))
    }

    /// Reports failure.
    pub fn reject(self, error: LoadError) {
        self.finish(Err(error))
    }

    /// Reports a result.
    pub fn finish(self, result: Result<T, LoadError>) {
        // The receiver is gone when nobody waits for this asset anymore.
        let _ = self.sender.send(result);
    }
}

/// Fetches and parses a model, reporting through a completion.
pub trait ModelLoader {
    /// Starts loading `url`. The completion may be reported synchronously or later.
    fn load(&self, url: &str, completion: LoadCompletion<SceneNode3d>);
}

/// Fetches and decodes a texture, reporting through a completion.
pub trait TextureLoader {
    /// Starts loading `url`. The completion may be reported synchronously or later.
    fn load(&self, url: &str, completion: LoadCompletion<Texture>);
}

impl<F> ModelLoader for F
where
    F: Fn(&str) -> Result<SceneNode3d, LoadError>,
{
    fn load(&self, url: &str, completion: LoadCompletion<SceneNode3d>) {
        completion.finish(self(url))
    }
}

impl<F> TextureLoader for F
where
    F: Fn(&str) -> Result<Texture, LoadError>,
{
    fn load(&self, url: &str, completion: LoadCompletion<Texture>) {
        completion.finish(self(url))
    }
}

/// Creates a completion for `url` together with the future of its outcome.
///
/// This is the bridge from callback-style loaders to `async` code: hand the completion to the
/// loader, await the future.
pub fn completion_channel<T: 'static>(
    url: &str,
) -> (
    LoadCompletion<T>,
    impl Future<Output = Result<T, LoadError>> + 'static,
) {
    let (sender, receiver) = oneshot::channel();
    let completion = LoadCompletion {
        url: url.to_string(),
        sender,
    };

    let url = url.to_string();
    let outcome = async move {
        match receiver.await {
            Ok(result) => result,
            Err(_) => Err(LoadError::Abandoned { url }),
        }
    };

    (completion, outcome)
}

/// Uniform, future-returning access to a model loader and a texture loader.
///
/// The loaders are shared so one instance serves every request.
#[derive(Clone)]
pub struct AssetLoader {
    models: Rc<dyn ModelLoader>,
    textures: Rc<dyn TextureLoader>,
}

impl AssetLoader {
    /// Wraps the given loaders.
    pub fn new(models: Rc<dyn ModelLoader>, textures: Rc<dyn TextureLoader>) -> AssetLoader {
        AssetLoader { models, textures }
    }

    /// Starts loading a model.
    pub fn load_model(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<SceneNode3d, LoadError>> + 'static {
        debug!("Requesting model {}", url);
        let (completion, outcome) = completion_channel(url);
        self.models.load(url, completion);
        outcome
    }

    /// Starts loading a texture.
    ///
    /// Loaded textures are flagged for upload and are not flipped, matching glTF UVs.
    pub fn load_texture(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Texture, LoadError>> + 'static {
        debug!("Requesting texture {}", url);
        let (completion, outcome) = completion_channel(url);
        self.textures.load(url, completion);

        async move {
            let mut texture = outcome.await?;
            texture.needs_update = true;
            texture.flip_y = false;
            Ok(texture)
        }
    }
}
