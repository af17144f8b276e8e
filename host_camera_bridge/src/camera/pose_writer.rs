/// PoseWriter: packs an external pose into the host camera block.
///
/// Called every tick while the override is active. Keeps a mirror of the
/// last written position so collaborators can ask where the camera is
/// without reading host memory again. The mirror is not refreshed from the
/// host and goes stale if something else moves the camera.

use glam::{Quat, Vec3};
use crate::error::Result;
use crate::host::{HostAddress, HostLayout, HostMemory, HostRegion, Matrix34Packing};
use super::camera_block::HostCameraBlock;
use super::pose::CameraPose;

#[derive(Debug, Clone)]
pub struct PoseWriter {
    camera: HostRegion,
    packing: Matrix34Packing,
    current_position: Vec3,
}

impl PoseWriter {
    pub fn new(camera: HostAddress, layout: &HostLayout) -> Self {
        Self {
            camera: HostRegion::new(camera, layout.camera_block_field()),
            packing: layout.packing,
            current_position: Vec3::ZERO,
        }
    }

    pub fn camera_address(&self) -> HostAddress {
        self.camera.address()
    }

    pub fn is_camera_found(&self) -> bool {
        self.camera.is_present()
    }

    /// Pack `position` + `orientation` into the live camera block.
    ///
    /// No-op when the camera address is absent; the position mirror is
    /// left untouched in that case too.
    pub fn write_new_camera_values_to_game_data<M>(
        &mut self,
        memory: &mut M,
        position: Vec3,
        orientation: Quat,
    ) -> Result<()>
    where
        M: HostMemory + ?Sized,
    {
        if !self.camera.is_present() {
            return Ok(());
        }
        let block = HostCameraBlock::from_pose(position, orientation, self.packing);
        self.camera.write(memory, block.values())?;
        self.current_position = position;
        crate::hostcam_log!(Trace, "hostcam::PoseWriter", "Camera block written at {:?}", position);
        Ok(())
    }

    /// Last position written (or captured by the snapshot).
    pub fn current_camera_coords(&self) -> Vec3 {
        self.current_position
    }

    pub(crate) fn set_current_camera_coords(&mut self, position: Vec3) {
        self.current_position = position;
    }

    /// Decode the live block. `Ok(None)` when the camera address is absent.
    pub fn read_camera_pose<M>(&self, memory: &M) -> Result<Option<CameraPose>>
    where
        M: HostMemory + ?Sized,
    {
        let block = self.camera.read::<[f32; 12], M>(memory)?;
        Ok(block.map(|values| HostCameraBlock::from_values(values).to_pose(self.packing)))
    }
}

#[cfg(test)]
#[path = "pose_writer_tests.rs"]
mod tests;
