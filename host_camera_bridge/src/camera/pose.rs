/// CameraPose: engine-agnostic camera placement.

use glam::{Quat, Vec3};

/// Position + orientation, produced each tick by the camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space position
    pub position: Vec3,
    /// Unit quaternion, camera space to world space
    pub orientation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}
