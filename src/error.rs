//! Error types.

use thiserror::Error;

/// An asset that could not be fetched or decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be fetched (network or filesystem failure).
    #[error("failed to fetch `{url}`: {reason}")]
    Fetch {
        /// The requested URL.
        url: String,
        /// What went wrong.
        reason: String,
    },
    /// The resource was fetched but could not be parsed.
    #[error("failed to decode `{url}`: {reason}")]
    Decode {
        /// The requested URL.
        url: String,
        /// What went wrong.
        reason: String,
    },
    /// The loader dropped the completion without resolving or rejecting it.
    #[error("loader for `{url}` finished without reporting a result")]
    Abandoned {
        /// The requested URL.
        url: String,
    },
}

impl LoadError {
    /// Converts an `image` decoding failure into a load error for `url`.
    pub fn from_image(url: &str, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => LoadError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            },
            e => LoadError::Decode {
                url: url.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// The URL of the asset that failed.
    pub fn url(&self) -> &str {
        match self {
            LoadError::Fetch { url, .. }
            | LoadError::Decode { url, .. }
            | LoadError::Abandoned { url } => url,
        }
    }
}

/// A fault raised by the rendering backend while drawing a frame.
///
/// A render error stops the animation loop for good.
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Errors raised while wiring the scene together.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// `SceneComposer::set_model` was called after a model was already installed.
    #[error("a model has already been added to the scene")]
    ModelAlreadySet,
    /// The assets could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failures of the browser host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Error)]
pub enum HostError {
    /// No element matches the container selector.
    #[error("no element matches `{selector}`")]
    MissingContainer {
        /// The CSS selector that was looked up.
        selector: String,
    },
    /// There is no window or document to attach to.
    #[error("no window or document available")]
    NoWindow,
    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

/// A configuration file that could not be parsed.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
#[error("invalid embed configuration: {0}")]
pub struct ConfigError(#[from] pub ron::error::SpannedError);
