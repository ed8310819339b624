//! Camera trait with the perspective camera used by the embedded scene.

pub use self::camera3d::Camera3d;
pub use self::perspective3d::PerspectiveCamera;

mod camera3d;
mod perspective3d;
