use log::debug;
use std::path::PathBuf;

use crate::loader::{LoadCompletion, TextureLoader};
use crate::resource::Texture;

/// Loads textures from image files below a root directory.
///
/// URLs are interpreted as paths relative to the root. Decoding happens on the calling thread
/// and the completion is reported before `load` returns.
#[derive(Clone, Debug)]
pub struct ImageTextureLoader {
    root: PathBuf,
}

impl ImageTextureLoader {
    /// Creates a loader reading below `root`.
    pub fn new(root: impl Into<PathBuf>) -> ImageTextureLoader {
        ImageTextureLoader { root: root.into() }
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load(&self, url: &str, completion: LoadCompletion<Texture>) {
        let path = self.root.join(url.trim_start_matches('/'));
        debug!("Decoding texture {:?}", path);
        completion.finish(Texture::from_file(url, &path));
    }
}
