//! Loads the model and its texture, dresses the model, and hands it over to the scene.

use futures::future::try_join;
use log::{debug, info};
use std::future::Future;
use std::sync::Arc;

use crate::config::{MaterialParams, ModelPlacement};
use crate::error::LoadError;
use crate::loader::AssetLoader;
use crate::resource::{Material, StandardMaterial, Texture};
use crate::scene::SceneNode3d;
use glamx::Vec3;

/// A dressed model and the texture it samples, ready for the scene.
#[derive(Debug)]
pub struct LoadedAssets {
    /// The model root, materials rebound and placement applied.
    pub model: SceneNode3d,
    /// The texture every mesh of the model samples.
    pub texture: Arc<Texture>,
}

/// Replaces the material of every mesh in the tree rooted at `model`.
///
/// Each mesh node gets its own fresh [`StandardMaterial`] sampling `texture`. Nodes without a
/// mesh are left alone. Returns the number of rebound nodes.
pub fn rebind_materials(
    model: &mut SceneNode3d,
    texture: &Arc<Texture>,
    params: &MaterialParams,
) -> usize {
    let mut rebound = 0;

    model.apply_to_scene_nodes_mut(&mut |node| {
        let material = StandardMaterial::new()
            .with_map(texture.clone())
            .with_metalness(params.metalness)
            .with_roughness(params.roughness);

        if node.set_material(Material::Standard(material)) {
            rebound += 1;
        }
    });

    rebound
}

/// Moves the model to its showcase spot and scales it. The loaded `x` is kept.
pub fn apply_placement(model: &mut SceneNode3d, placement: &ModelPlacement) {
    let x = model.position().x;
    model.set_position(Vec3::new(x, placement.y, placement.z));
    model.set_local_scale(placement.scale, placement.scale, placement.scale);
}

/// Loads a model and a texture concurrently and prepares the model for display.
#[derive(Clone)]
pub struct AssetPipeline {
    loader: AssetLoader,
    material: MaterialParams,
    placement: ModelPlacement,
}

impl AssetPipeline {
    /// Creates a pipeline with the showcase material and placement.
    pub fn new(loader: AssetLoader) -> AssetPipeline {
        AssetPipeline {
            loader,
            material: MaterialParams::default(),
            placement: ModelPlacement::default(),
        }
    }

    /// Sets the material every mesh receives.
    pub fn with_material(mut self, material: MaterialParams) -> Self {
        self.material = material;
        self
    }

    /// Sets where the model is placed.
    pub fn with_placement(mut self, placement: ModelPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Loads `model_url` and `texture_url`.
    ///
    /// Both requests are issued before this returns. The future fails as soon as either load
    /// fails; nothing is partially applied in that case.
    pub fn load_assets(
        &self,
        model_url: &str,
        texture_url: &str,
    ) -> impl Future<Output = Result<LoadedAssets, LoadError>> + 'static {
        info!("Loading model {} with texture {}", model_url, texture_url);
        let model = self.loader.load_model(model_url);
        let texture = self.loader.load_texture(texture_url);
        let material = self.material;
        let placement = self.placement;

        async move {
            let (mut model, texture) = try_join(model, texture).await?;
            let texture = Arc::new(texture);

            let rebound = rebind_materials(&mut model, &texture, &material);
            apply_placement(&mut model, &placement);
            debug!(
                "Rebound {} meshes to {} ({}x{})",
                rebound,
                texture.name,
                texture.width(),
                texture.height()
            );

            Ok(LoadedAssets { model, texture })
        }
    }
}
