//! The live scene: camera, orbiting lights and, once loaded, the model.

use log::{debug, info, warn};

use crate::camera::PerspectiveCamera;
use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::light::{orbit_angle, AreaLight, OrbitLight};
use crate::scene::SceneNode3d;

/// Owns everything that is drawn.
///
/// The animation loop writes light transforms every frame; the asset pipeline writes the model
/// exactly once. The two never touch the same node.
pub struct SceneComposer {
    scene: SceneNode3d,
    camera: PerspectiveCamera,
    lights: Vec<OrbitLight>,
    angular_speed: f32,
    model: Option<SceneNode3d>,
}

impl SceneComposer {
    /// Creates an empty scene seen through `camera`.
    pub fn new(camera: PerspectiveCamera, angular_speed: f32) -> SceneComposer {
        SceneComposer {
            scene: SceneNode3d::empty(),
            camera,
            lights: Vec::new(),
            angular_speed,
            model: None,
        }
    }

    /// Builds the camera, lights and helpers described by `config`.
    pub fn from_config(config: &EmbedConfig, aspect: f32) -> SceneComposer {
        let cam = &config.camera;
        let mut camera = PerspectiveCamera::new(cam.fov, aspect, cam.znear, cam.zfar);
        camera.set_position(cam.position);
        let rot = cam.scene_rotation();
        camera.set_rotation_euler(rot.x, rot.y, rot.z);

        let mut composer = SceneComposer::new(camera, config.orbit.angular_speed);

        for lc in &config.orbit.lights {
            let mut node = SceneNode3d::new_light(AreaLight::new(
                lc.color,
                lc.intensity,
                lc.width,
                lc.height,
            ));
            node.set_position(lc.position);
            node.set_rotation_euler(
                lc.rotation.x.to_radians(),
                lc.rotation.y.to_radians(),
                lc.rotation.z.to_radians(),
            );
            if lc.helper {
                node.add_child(SceneNode3d::area_light_helper(lc.width, lc.height));
            }
            composer.add_light(OrbitLight::new(node, lc.target, config.orbit.radius));
        }

        if let Some(size) = config.axes_helper {
            composer.scene.add_child(SceneNode3d::axes_helper(size));
        }

        composer
    }

    /// Adds a light to the scene and to the orbit.
    pub fn add_light(&mut self, light: OrbitLight) {
        self.scene.add_child(light.node().clone());
        self.lights.push(light);
    }

    /// Installs the loaded model.
    ///
    /// Only the first call has an effect; later calls return [`EmbedError::ModelAlreadySet`]
    /// and leave the scene untouched. A model that still has a parent is detached from it first.
    pub fn set_model(&mut self, mut model: SceneNode3d) -> Result<(), EmbedError> {
        if self.model.is_some() {
            warn!("Ignoring a second model: one is already in the scene.");
            return Err(EmbedError::ModelAlreadySet);
        }

        if !model.data().is_root() {
            debug!("Detaching the model from its previous parent.");
            model.remove();
        }

        self.scene.add_child(model.clone());
        self.model = Some(model);
        info!("Model added to the scene.");
        Ok(())
    }

    /// The loaded model, if it arrived.
    #[inline]
    pub fn model(&self) -> Option<&SceneNode3d> {
        self.model.as_ref()
    }

    /// The root of the scene graph.
    #[inline]
    pub fn scene(&self) -> &SceneNode3d {
        &self.scene
    }

    /// The camera.
    #[inline]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// The camera, for the viewport adapter and the interactive controls.
    #[inline]
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    /// The orbiting lights.
    #[inline]
    pub fn lights(&self) -> &[OrbitLight] {
        &self.lights
    }

    /// The shared angular speed of the orbit.
    #[inline]
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Moves every orbiting light to where it is `elapsed` seconds after start.
    ///
    /// Returns the orbit angle.
    pub fn update_lights(&mut self, elapsed: f32) -> f32 {
        let angle = orbit_angle(elapsed, self.angular_speed);

        for light in self.lights.iter_mut() {
            light.move_to(angle);
        }

        angle
    }
}
