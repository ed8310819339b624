//! Everything related to the scene graph.

pub use self::composer::SceneComposer;
pub use self::scene_node3d::{euler_xyz, Helper, SceneNode3d, SceneNodeData3d};

mod composer;
mod scene_node3d;
