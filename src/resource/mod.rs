//! CPU-side resources: textures, materials and mesh geometry.

pub use crate::resource::material::{Material, StandardMaterial};
pub use crate::resource::mesh3d::{Geometry, Mesh3d};
pub use crate::resource::texture::Texture;

pub mod material;
mod mesh3d;
mod texture;
