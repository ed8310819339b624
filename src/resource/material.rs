//! Surface materials attached to mesh nodes.

use std::sync::Arc;

use crate::color::{Color, WHITE};
use crate::resource::Texture;

/// A metal/roughness material.
#[derive(Clone, Debug)]
pub struct StandardMaterial {
    /// Base color, multiplied with the map.
    pub color: Color,
    /// Base color texture.
    pub map: Option<Arc<Texture>>,
    /// Metallic factor [0.0, 1.0] where 0.0 is dielectric and 1.0 is metal.
    pub metalness: f32,
    /// Roughness factor [0.0, 1.0] where 0.0 is smooth and 1.0 is rough.
    pub roughness: f32,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: WHITE,
            map: None,
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}

impl StandardMaterial {
    /// Creates a white, fully rough dielectric material.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base color texture.
    pub fn with_map(mut self, map: Arc<Texture>) -> Self {
        self.map = Some(map);
        self
    }

    /// Sets the metallic factor.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    /// Sets the roughness factor.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }
}

// Maps compare by identity: two materials sampling the same loaded texture are equal.
impl PartialEq for StandardMaterial {
    fn eq(&self, other: &Self) -> bool {
        let same_map = match (&self.map, &other.map) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_map
            && self.color == other.color
            && self.metalness == other.metalness
            && self.roughness == other.roughness
    }
}

/// The material of a mesh node.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Unlit flat color, typically what a model loader attaches by default.
    Basic {
        /// The flat color.
        color: Color,
    },
    /// Metal/roughness shading.
    Standard(StandardMaterial),
}

impl Default for Material {
    fn default() -> Self {
        Material::Basic { color: WHITE }
    }
}

impl Material {
    /// Returns the standard material, if this is one.
    pub fn as_standard(&self) -> Option<&StandardMaterial> {
        match self {
            Material::Standard(m) => Some(m),
            Material::Basic { .. } => None,
        }
    }
}
