/// OverrideSession: one camera override, from enable to disable.
///
/// Owns the host memory handle and the three components (pose writer,
/// state cache, scalar controller) built from one set of discovered
/// addresses and one host layout. Create it when the override is enabled,
/// capture the original camera, drive it every tick, then `end()` it to
/// put the host camera back.
///
/// No internal locking. The caller runs it at a point where the host is not
/// touching the same fields.

use glam::{Quat, Vec3};
use crate::camera_system::CameraSystem;
use crate::error::Result;
use crate::host::{HostAddress, HostAddresses, HostLayout, HostMemory};
use super::pose::CameraPose;
use super::pose_writer::PoseWriter;
use super::scalar_override::ScalarOverrideController;
use super::state_cache::{CachedOriginalState, CameraStateCache};

pub struct OverrideSession<M: HostMemory> {
    memory: M,
    layout: HostLayout,
    addresses: HostAddresses,
    pose_writer: PoseWriter,
    state_cache: CameraStateCache,
    scalars: ScalarOverrideController,
}

impl<M: HostMemory> OverrideSession<M> {
    pub fn new(addresses: HostAddresses, layout: HostLayout, memory: M) -> Self {
        crate::hostcam_log!(Info, "hostcam::Session",
            "Override session created for host build '{}' (camera {}, timestop {}, fov {})",
            layout.version, addresses.camera, addresses.timestop, addresses.fov);
        Self {
            pose_writer: PoseWriter::new(addresses.camera, &layout),
            state_cache: CameraStateCache::new(&addresses, &layout),
            scalars: ScalarOverrideController::new(&addresses, &layout),
            memory,
            layout,
            addresses,
        }
    }

    /// Session over the addresses registered with `CameraSystem`.
    pub fn from_registry(layout: HostLayout, memory: M) -> Self {
        Self::new(CameraSystem::addresses(), layout, memory)
    }

    /// Restore the original camera and hand the memory handle back.
    pub fn end(mut self) -> Result<M> {
        self.restore_original_camera_values()?;
        crate::hostcam_log!(Info, "hostcam::Session", "Override session ended");
        Ok(self.memory)
    }

    // ===== ACCESSORS =====

    pub fn layout(&self) -> &HostLayout {
        &self.layout
    }

    pub fn addresses(&self) -> &HostAddresses {
        &self.addresses
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn snapshot(&self) -> Option<&CachedOriginalState> {
        self.state_cache.snapshot()
    }

    // ===== CAMERA =====

    pub fn is_camera_found(&self) -> bool {
        self.pose_writer.is_camera_found()
    }

    /// Emit the camera struct address at Debug severity.
    pub fn display_camera_struct_address(&self) {
        crate::hostcam_log!(Debug, "hostcam::Session",
            "Camera struct address: {}", self.pose_writer.camera_address());
    }

    /// Capture the live camera block and FOV. Also resets the position
    /// mirror to the captured translation when the block was captured.
    pub fn cache_original_camera_values(&mut self) -> Result<()> {
        let snapshot = self.state_cache.cache_original_camera_values(&self.memory)?;
        if let Some(position) = snapshot.position() {
            self.pose_writer.set_current_camera_coords(position);
        }
        Ok(())
    }

    pub fn restore_original_camera_values(&mut self) -> Result<()> {
        self.state_cache.restore_original_camera_values(&mut self.memory)
    }

    pub fn write_new_camera_values_to_game_data(&mut self, position: Vec3, orientation: Quat) -> Result<()> {
        self.pose_writer.write_new_camera_values_to_game_data(&mut self.memory, position, orientation)
    }

    pub fn write_pose(&mut self, pose: &CameraPose) -> Result<()> {
        self.write_new_camera_values_to_game_data(pose.position, pose.orientation)
    }

    pub fn current_camera_coords(&self) -> Vec3 {
        self.pose_writer.current_camera_coords()
    }

    /// Decode the live camera block. `Ok(None)` when the camera is absent.
    pub fn read_camera_pose(&self) -> Result<Option<CameraPose>> {
        self.pose_writer.read_camera_pose(&self.memory)
    }

    // ===== SCALARS =====

    pub fn set_time_stop_value(&mut self, frozen: bool) -> Result<()> {
        self.scalars.set_time_stop_value(&mut self.memory, frozen)
    }

    pub fn change_fov(&mut self, delta: f32) -> Result<()> {
        self.scalars.change_fov(&mut self.memory, delta)
    }

    /// Put back the FOV captured by the snapshot. Nothing happens without one.
    pub fn reset_fov(&mut self) -> Result<()> {
        self.scalars.reset_fov(&mut self.memory, self.state_cache.original_fov())
    }

    pub fn current_fov(&self) -> Result<Option<f32>> {
        self.scalars.current_fov(&self.memory)
    }

    pub fn set_supersampling_factor(&mut self, image: HostAddress, value: f32) -> Result<()> {
        self.scalars.set_supersampling_factor(&mut self.memory, image, value)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
