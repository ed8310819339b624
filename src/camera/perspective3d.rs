use crate::camera::Camera3d;
use crate::scene::euler_xyz;
use glamx::{Mat4, Quat, Vec3};

/// A perspective camera placed explicitly in the world.
///
/// The camera looks along its local `-Z` axis. Changing the field of view, aspect ratio or
/// clipping planes only takes effect after [`update_projection`](Self::update_projection).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    fov: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    position: Vec3,
    rotation: Quat,
    proj: Mat4,
}

impl PerspectiveCamera {
    /// Creates a camera at the origin looking down `-Z`.
    ///
    /// # Arguments
    /// * `fov` - Vertical field of view, in degrees
    /// * `aspect` - Width over height of the viewport
    /// * `znear` - Distance to the near clipping plane
    /// * `zfar` - Distance to the far clipping plane
    pub fn new(fov: f32, aspect: f32, znear: f32, zfar: f32) -> PerspectiveCamera {
        let mut res = PerspectiveCamera {
            fov,
            aspect,
            znear,
            zfar,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            proj: Mat4::IDENTITY,
        };
        res.update_projection();
        res
    }

    /// Recomputes the projection matrix from the current frustum parameters.
    pub fn update_projection(&mut self) {
        self.proj = Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.znear, self.zfar);
    }

    /// Vertical field of view, in degrees.
    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Sets the vertical field of view, in degrees.
    #[inline]
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Width over height of the viewport.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Sets the aspect ratio.
    #[inline]
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// The camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the camera.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// The camera orientation.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Orients the camera from Euler angles in radians, applied in X, Y, Z order.
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = euler_xyz(x, y, z);
    }

    /// Orients the camera so that it looks at `target`, keeping `+Y` up.
    pub fn look_at(&mut self, target: Vec3) {
        let view = Mat4::look_at_rh(self.position, target, Vec3::Y);
        self.rotation = Quat::from_mat4(&view).inverse();
    }
}

impl Camera3d for PerspectiveCamera {
    fn eye(&self) -> Vec3 {
        self.position
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    fn projection_matrix(&self) -> Mat4 {
        self.proj
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }
}
