//! Asset loaders.
//!
//! Loaders follow the web's callback style: they are handed a [`LoadCompletion`] and report
//! through it whenever the resource is ready. [`AssetLoader`] turns those into futures.

pub use self::asset_loader::{
    completion_channel, AssetLoader, LoadCompletion, ModelLoader, TextureLoader,
};
pub use self::image_loader::ImageTextureLoader;

mod asset_loader;
mod image_loader;
