use crate::light::AreaLight;
use crate::resource::{Geometry, Material, Mesh3d};
use glamx::{Pose3, Quat, Vec3};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::rc::Weak;
use std::sync::Arc;

/// Debug geometry that is drawn but is not part of the showcased model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Helper {
    /// RGB lines along the X, Y and Z axes.
    Axes {
        /// Length of each axis line.
        size: f32,
    },
    /// Outline of an area light's emitting rectangle, in the light's local frame.
    AreaLight {
        /// Width of the rectangle.
        width: f32,
        /// Height of the rectangle.
        height: f32,
    },
}

/// The data contained by a `SceneNode3d`.
pub struct SceneNodeData3d {
    name: Option<String>,
    local_scale: Vec3,
    local_transform: Pose3,
    children: Vec<SceneNode3d>,
    mesh: Option<Mesh3d>,
    light: Option<AreaLight>,
    helper: Option<Helper>,
    parent: Option<Weak<RefCell<SceneNodeData3d>>>,
}

/// A node of the scene graph.
///
/// This may represent a group of other nodes, and/or carry a mesh, a light or a debug helper.
/// Cloning a node clones the handle, not the subtree.
#[derive(Clone)]
pub struct SceneNode3d {
    data: Rc<RefCell<SceneNodeData3d>>,
}

impl fmt::Debug for SceneNode3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        f.debug_struct("SceneNode3d")
            .field("name", &data.name)
            .field("position", &data.local_transform.translation)
            .field("mesh", &data.mesh.is_some())
            .field("light", &data.light.is_some())
            .field("children", &data.children)
            .finish()
    }
}

impl SceneNodeData3d {
    fn remove(&mut self, o: &SceneNode3d) {
        if let Some(i) = self
            .children
            .iter()
            .rposition(|e| Rc::ptr_eq(&o.data, &e.data))
        {
            let _ = self.children.remove(i);
        }
    }

    /// Whether this node carries a renderable mesh.
    #[inline]
    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }

    /// Whether this node has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The node mesh, if any.
    #[inline]
    pub fn mesh(&self) -> Option<&Mesh3d> {
        self.mesh.as_ref()
    }

    /// The children of this node.
    #[inline]
    pub fn children(&self) -> &[SceneNode3d] {
        &self.children
    }
}

impl SceneNode3d {
    /// Creates a new unrooted scene node with the specified properties.
    ///
    /// # Arguments
    /// * `local_scale` - The initial scale factors along each axis
    /// * `local_transform` - The initial local transformation (rotation + translation)
    /// * `mesh` - Optional mesh to render (None for empty group nodes)
    pub fn new(local_scale: Vec3, local_transform: Pose3, mesh: Option<Mesh3d>) -> SceneNode3d {
        let data = SceneNodeData3d {
            name: None,
            local_scale,
            local_transform,
            children: Vec::new(),
            mesh,
            light: None,
            helper: None,
            parent: None,
        };

        SceneNode3d {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Creates a new empty scene node with identity transformations.
    pub fn empty() -> SceneNode3d {
        SceneNode3d::new(Vec3::ONE, Pose3::IDENTITY, None)
    }

    /// Creates a new node carrying a mesh.
    pub fn mesh(geometry: Arc<Geometry>, material: Material) -> SceneNode3d {
        SceneNode3d::new(
            Vec3::ONE,
            Pose3::IDENTITY,
            Some(Mesh3d::new(geometry, material)),
        )
    }

    /// Creates a new node carrying an area light.
    pub fn new_light(light: AreaLight) -> SceneNode3d {
        let node = SceneNode3d::empty();
        node.data.borrow_mut().light = Some(light);
        node
    }

    /// Creates a new axes helper node.
    pub fn axes_helper(size: f32) -> SceneNode3d {
        let node = SceneNode3d::empty();
        node.data.borrow_mut().helper = Some(Helper::Axes { size });
        node
    }

    /// Creates a node outlining an area light of the given size.
    ///
    /// Add it as a child of the light node so that it follows the light.
    pub fn area_light_helper(width: f32, height: f32) -> SceneNode3d {
        let node = SceneNode3d::empty();
        node.data.borrow_mut().helper = Some(Helper::AreaLight { width, height });
        node
    }

    /// Sets the node name, as found in the source asset.
    pub fn set_name(&mut self, name: &str) -> Self {
        self.data_mut().name = Some(name.to_string());
        self.clone()
    }

    /// The node name, if any.
    pub fn name(&self) -> Option<String> {
        self.data().name.clone()
    }

    /// Returns `true` if both handles point to the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &SceneNode3d) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Removes this node from its parent in the scene graph.
    pub fn remove(&mut self) {
        let parent = self.data_mut().parent.take();

        if let Some(parent) = parent.and_then(|p| p.upgrade()) {
            parent.borrow_mut().remove(self);
        }
    }

    /// Returns an immutable reference to this node's internal data.
    pub fn data(&self) -> Ref<'_, SceneNodeData3d> {
        self.data.borrow()
    }

    /// Returns a mutable reference to this node's internal data.
    pub fn data_mut(&mut self) -> RefMut<'_, SceneNodeData3d> {
        self.data.borrow_mut()
    }

    /*
     *
     * Hierarchy.
     *
     */
    /// Adds an empty group node as a child of this node.
    pub fn add_group(&mut self) -> SceneNode3d {
        let node = SceneNode3d::empty();

        self.add_child(node.clone());

        node
    }

    /// Adds an existing node as a child of this node.
    ///
    /// # Panics
    /// Panics if the node already has a parent
    pub fn add_child(&mut self, node: SceneNode3d) {
        assert!(
            node.data().is_root(),
            "The added node must not have a parent yet."
        );

        let mut node = node;
        let self_weak_ptr = Rc::downgrade(&self.data);
        node.data_mut().parent = Some(self_weak_ptr);
        self.data_mut().children.push(node)
    }

    /// Handles to the direct children of this node.
    pub fn children(&self) -> Vec<SceneNode3d> {
        self.data().children.clone()
    }

    /// Number of direct children.
    pub fn num_children(&self) -> usize {
        self.data().children.len()
    }

    /// How many times `node` appears among the direct children of this node.
    pub fn count_child(&self, node: &SceneNode3d) -> usize {
        self.data()
            .children
            .iter()
            .filter(|c| c.ptr_eq(node))
            .count()
    }

    /// Whether `node` is somewhere in the subtree rooted at this node (this node included).
    pub fn contains(&self, node: &SceneNode3d) -> bool {
        let mut found = false;
        self.apply_to_scene_nodes(&mut |n| found |= n.ptr_eq(node));
        found
    }

    /// Applies a closure to this node and all its descendants, depth-first, parents first.
    #[inline]
    pub fn apply_to_scene_nodes_mut<F: FnMut(&mut SceneNode3d)>(&mut self, f: &mut F) {
        f(self);

        for c in self.children().iter_mut() {
            c.apply_to_scene_nodes_mut(f)
        }
    }

    /// Applies a closure to this node and all its descendants, depth-first, parents first.
    #[inline]
    pub fn apply_to_scene_nodes<F: FnMut(&SceneNode3d)>(&self, f: &mut F) {
        f(self);

        for c in self.data().children.iter() {
            c.apply_to_scene_nodes(f)
        }
    }

    /*
     *
     * Payload.
     *
     */
    /// Whether this node carries a renderable mesh.
    #[inline]
    pub fn is_mesh(&self) -> bool {
        self.data().has_mesh()
    }

    /// The material of this node's mesh, if any.
    pub fn material(&self) -> Option<Material> {
        self.data().mesh.as_ref().map(|m| m.material().clone())
    }

    /// Replaces the material of this node's mesh.
    ///
    /// Returns `false` (and does nothing) if the node has no mesh.
    pub fn set_material(&mut self, material: Material) -> bool {
        match self.data_mut().mesh.as_mut() {
            Some(mesh) => {
                mesh.set_material(material);
                true
            }
            None => false,
        }
    }

    /// Returns a copy of the light on this node, if any.
    pub fn light(&self) -> Option<AreaLight> {
        self.data().light.clone()
    }

    /// The debug helper on this node, if any.
    pub fn helper(&self) -> Option<Helper> {
        self.data().helper
    }

    /*
     *
     * Transformation.
     *
     */
    /// Sets the local scaling factors of the object.
    #[inline]
    pub fn set_local_scale(&mut self, sx: f32, sy: f32, sz: f32) -> Self {
        self.data_mut().local_scale = Vec3::new(sx, sy, sz);
        self.clone()
    }

    /// Returns the scaling factors of the object.
    #[inline]
    pub fn local_scale(&self) -> Vec3 {
        self.data().local_scale
    }

    /// Returns this node's local translation component.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.data().local_transform.translation
    }

    /// Sets this node's local translation, keeping its rotation.
    #[inline]
    pub fn set_position(&mut self, t: Vec3) -> Self {
        self.data_mut().local_transform.translation = t;
        self.clone()
    }

    /// Returns this node's local rotation component.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.data().local_transform.rotation
    }

    /// Sets this node's local rotation, replacing the current one.
    #[inline]
    pub fn set_rotation(&mut self, r: Quat) -> Self {
        self.data_mut().local_transform.rotation = r;
        self.clone()
    }

    /// Sets the rotation from Euler angles in radians, applied in X, Y, Z order.
    #[inline]
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) -> Self {
        self.set_rotation(euler_xyz(x, y, z))
    }

    /// Rotates the node in place so that its local `-Z` axis points toward `target`.
    ///
    /// Lights and cameras shine/look along `-Z`. Nothing happens if the node sits on the target.
    pub fn look_at(&mut self, target: Vec3) -> Self {
        let eye = self.position();
        let away = eye - target;

        if away.length_squared() > f32::EPSILON {
            let up = if away.normalize().cross(Vec3::Y).length_squared() > 1.0e-6 {
                Vec3::Y
            } else {
                Vec3::Z
            };
            let rotation = Pose3::face_towards(eye, eye + away, up).rotation;
            self.set_rotation(rotation);
        }

        self.clone()
    }
}

/// Builds a rotation from Euler angles in radians, applied in X, Y, Z order.
pub fn euler_xyz(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_rotation_x(x) * Quat::from_rotation_y(y) * Quat::from_rotation_z(z)
}
