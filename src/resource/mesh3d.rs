//! Mesh geometry attached to scene nodes.
use std::sync::Arc;

use crate::resource::Material;
use glamx::{Vec2, Vec3};

/// Triangle geometry as produced by a model loader.
///
/// Geometry is shared between nodes; only the material is per-node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Vertex positions.
    pub coords: Vec<Vec3>,
    /// Texture coordinates, one per vertex (may be empty).
    pub uvs: Vec<Vec2>,
    /// Triangle faces as indices into `coords`.
    pub faces: Vec<[u32; 3]>,
}

impl Geometry {
    /// Creates new geometry.
    pub fn new(coords: Vec<Vec3>, uvs: Vec<Vec2>, faces: Vec<[u32; 3]>) -> Geometry {
        Geometry { coords, uvs, faces }
    }

    /// A unit quad in the XY plane, mostly useful for tests and placeholders.
    pub fn quad() -> Geometry {
        Geometry {
            coords: vec![
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.5, -0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
                Vec3::new(-0.5, 0.5, 0.0),
            ],
            uvs: vec![
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0),
            ],
            faces: vec![[0, 1, 2], [0, 2, 3]],
        }
    }
}

/// A renderable mesh: shared geometry plus its own material.
#[derive(Clone, Debug)]
pub struct Mesh3d {
    geometry: Arc<Geometry>,
    material: Material,
}

impl Mesh3d {
    /// Creates a mesh with the given material.
    pub fn new(geometry: Arc<Geometry>, material: Material) -> Mesh3d {
        Mesh3d { geometry, material }
    }

    /// The mesh geometry.
    #[inline]
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }

    /// The mesh material.
    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Replaces the material.
    #[inline]
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }
}
