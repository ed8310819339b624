//! Scene configuration.
//!
//! The defaults reproduce the showcase scene this crate was built for: a camera exported from a
//! Z-up modelling tool, three softbox lights sweeping around a robot model, and the metal
//! material the model is displayed with.

use crate::color::{Color, WHITE};
use glamx::Vec3;
use std::f32::consts::PI;

/// Parameters of the perspective camera.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Vertical field of view, in degrees.
    pub fov: f32,
    /// Near clipping plane.
    pub znear: f32,
    /// Far clipping plane.
    pub zfar: f32,
    /// Position in scene coordinates.
    pub position: Vec3,
    /// Rotation as authored in the modelling tool: X, Y, Z Euler angles in degrees, Z up.
    ///
    /// The authored Y angle is a tiny non-zero value in the default export; it is kept as-is
    /// and carries no meaning.
    pub authored_rotation: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 33.4,
            znear: 0.1,
            zfar: 1000.0,
            position: Vec3::new(-52.6214, 14.1942, 4.01969),
            authored_rotation: Vec3::new(90.0, 0.000002, -90.0),
        }
    }
}

impl CameraConfig {
    /// Converts the authored Z-up rotation to Y-up scene Euler angles, in radians.
    ///
    /// Y and Z are swapped and the new Z is negated.
    pub fn scene_rotation(&self) -> Vec3 {
        let r = self.authored_rotation;
        Vec3::new(r.x.to_radians(), r.z.to_radians(), -r.y.to_radians())
    }
}

/// One area light on the orbit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightConfig {
    /// Light color.
    pub color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Width of the emitting rectangle.
    pub width: f32,
    /// Height of the emitting rectangle.
    pub height: f32,
    /// Initial position. Only `y` survives the first frame.
    pub position: Vec3,
    /// Initial orientation, X, Y, Z Euler angles in degrees. Overridden by aiming at `target`.
    pub rotation: Vec3,
    /// The point the light stays aimed at.
    pub target: Vec3,
    /// Whether to outline the emitting rectangle with a helper following the light.
    #[cfg_attr(feature = "serde", serde(default))]
    pub helper: bool,
}

impl LightConfig {
    fn softbox(size: f32, intensity: f32, position: Vec3, rotation: Vec3, target: Vec3) -> Self {
        Self {
            color: WHITE,
            intensity,
            width: size,
            height: size,
            position,
            rotation,
            target,
            helper: false,
        }
    }

    /// Sets whether the light gets an outline helper.
    pub fn with_helper(mut self, helper: bool) -> Self {
        self.helper = helper;
        self
    }
}

/// The horizontal orbit shared by all lights.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrbitConfig {
    /// Angular speed of the underlying sine, in radians per second.
    pub angular_speed: f32,
    /// Orbit radius, in world units.
    pub radius: f32,
    /// The lights on the orbit.
    pub lights: Vec<LightConfig>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let focus = Vec3::new(0.0, -10.0, -2.0);

        Self {
            angular_speed: PI / 4.0,
            radius: 30.8558,
            lights: vec![
                LightConfig::softbox(
                    30.0,
                    5.0,
                    Vec3::new(30.8558, -4.94707, -11.339),
                    Vec3::new(-80.1165, 12.6174, 269.904),
                    focus,
                ),
                LightConfig::softbox(
                    10.0,
                    15.0,
                    Vec3::new(24.3479, -4.94707, 7.97078),
                    Vec3::new(-85.1962, 46.9974, 269.862),
                    focus,
                ),
                LightConfig::softbox(
                    10.0,
                    15.0,
                    Vec3::new(24.5512, 20.6812, 33.0485),
                    Vec3::new(-85.1962, 46.9974, 269.862),
                    Vec3::new(-20.0, 120.0, 100.0),
                )
                .with_helper(true),
            ],
        }
    }
}

/// The material every mesh of the loaded model receives.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialParams {
    /// Metallic factor.
    pub metalness: f32,
    /// Roughness factor.
    pub roughness: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            metalness: 1.0,
            roughness: 0.4,
        }
    }
}

/// Where the loaded model is placed. Its `x` is left as loaded.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelPlacement {
    /// Vertical position.
    pub y: f32,
    /// Depth position.
    pub z: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for ModelPlacement {
    fn default() -> Self {
        Self {
            y: -11.5,
            z: -2.0,
            scale: 0.9,
        }
    }
}

/// How the rendering surface should be created.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSetup {
    /// Multisample anti-aliasing.
    pub antialias: bool,
    /// Transparent clear color, so the page shows through.
    pub transparent: bool,
}

impl Default for SurfaceSetup {
    fn default() -> Self {
        Self {
            antialias: true,
            transparent: true,
        }
    }
}

/// Where the assets are fetched from. URLs are opaque to this crate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetUrls {
    /// The model (glTF binary) URL.
    pub model: String,
    /// The base color texture URL.
    pub texture: String,
}

/// Everything needed to build the embedded scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmbedConfig {
    /// The camera.
    pub camera: CameraConfig,
    /// The orbiting lights.
    pub orbit: OrbitConfig,
    /// The model material.
    pub material: MaterialParams,
    /// The model placement.
    pub placement: ModelPlacement,
    /// The rendering surface.
    pub surface: SurfaceSetup,
    /// Size of the debug axes helper, `None` to leave it out.
    pub axes_helper: Option<f32>,
    /// The assets to load.
    pub assets: AssetUrls,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            material: MaterialParams::default(),
            placement: ModelPlacement::default(),
            surface: SurfaceSetup::default(),
            axes_helper: Some(5.0),
            assets: AssetUrls::default(),
        }
    }
}

impl EmbedConfig {
    /// Sets the asset URLs.
    pub fn with_assets(mut self, model: &str, texture: &str) -> Self {
        self.assets = AssetUrls {
            model: model.to_string(),
            texture: texture.to_string(),
        };
        self
    }

    /// Sets the debug axes helper size, or removes it.
    pub fn with_axes_helper(mut self, size: Option<f32>) -> Self {
        self.axes_helper = size;
        self
    }

    /// Parses a configuration written in RON. Missing fields take their default value.
    #[cfg(feature = "serde")]
    pub fn from_ron(source: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(ron::from_str(source)?)
    }
}
