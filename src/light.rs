//! Area lights and the orbit they sweep.
//!
//! Every orbiting light moves on a horizontal circle around the Y axis. The angle follows a
//! sine so that lights sweep back and forth over a half-circle instead of spinning around.

use crate::color::{Color, WHITE};
use crate::scene::SceneNode3d;
use glamx::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// A rectangular light emitting from one face, like a studio softbox.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaLight {
    /// The color of the light (RGBA, each component 0.0-1.0).
    pub color: Color,
    /// The intensity multiplier for the light.
    pub intensity: f32,
    /// Width of the emitting rectangle, in world units.
    pub width: f32,
    /// Height of the emitting rectangle, in world units.
    pub height: f32,
    /// Whether the light is enabled.
    pub enabled: bool,
}

impl Default for AreaLight {
    fn default() -> Self {
        Self {
            color: WHITE,
            intensity: 1.0,
            width: 10.0,
            height: 10.0,
            enabled: true,
        }
    }
}

impl AreaLight {
    /// Creates an enabled area light.
    pub fn new(color: Color, intensity: f32, width: f32, height: f32) -> Self {
        Self {
            color,
            intensity,
            width,
            height,
            enabled: true,
        }
    }
}

/// Angle of the orbiting lights, in radians, after `elapsed` seconds.
///
/// `angle(t) = π(1 + sin(ωt))/2 − π/2`, which stays in `[−π/2, π/2]` and repeats every
/// `2π/ω` seconds.
#[inline]
pub fn orbit_angle(elapsed: f32, angular_speed: f32) -> f32 {
    PI * (1.0 + (angular_speed * elapsed).sin()) / 2.0 - FRAC_PI_2
}

/// A light node that orbits the Y axis while staying aimed at a fixed point.
#[derive(Clone)]
pub struct OrbitLight {
    node: SceneNode3d,
    target: Vec3,
    radius: f32,
}

impl OrbitLight {
    /// Wraps a light node. Its current `y` is kept for the whole orbit.
    pub fn new(node: SceneNode3d, target: Vec3, radius: f32) -> Self {
        let mut light = Self {
            node,
            target,
            radius,
        };
        light.look_at();
        light
    }

    /// The scene node carrying the light.
    #[inline]
    pub fn node(&self) -> &SceneNode3d {
        &self.node
    }

    /// The point this light stays aimed at.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// The orbit radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current light position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.node.position()
    }

    /// Moves the light to `angle` on its orbit and re-aims it at its target.
    pub fn move_to(&mut self, angle: f32) {
        let y = self.node.position().y;
        self.node.set_position(Vec3::new(
            self.radius * angle.cos(),
            y,
            self.radius * angle.sin(),
        ));
        self.look_at();
    }

    /// Re-aims the light at its target from wherever it is.
    pub fn look_at(&mut self) {
        let _ = self.node.look_at(self.target);
    }
}
