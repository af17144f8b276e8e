/// CameraStateCache: snapshot/restore of the host camera for one session.
///
/// The block and the FOV are captured independently: a part whose address
/// is absent is left out of the snapshot and skipped on restore. Cache and
/// restore report `AddressNotFound` only when both addresses are absent.
/// Restore without a prior capture reports `NoSnapshot`.

use glam::Vec3;
use crate::error::Result;
use crate::host::{HostAddresses, HostLayout, HostMemory, HostRegion};
use crate::hostcam_bail;
use super::camera_block::HostCameraBlock;

/// Host camera state captured when the override began
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedOriginalState {
    block: Option<HostCameraBlock>,
    fov: Option<f32>,
}

impl CachedOriginalState {
    /// Captured block, `None` when the camera address was absent.
    pub fn block(&self) -> Option<&HostCameraBlock> {
        self.block.as_ref()
    }

    /// Captured FOV, `None` when the FOV address was absent.
    pub fn fov(&self) -> Option<f32> {
        self.fov
    }

    /// Camera position at capture time (translation slots of the block)
    pub fn position(&self) -> Option<Vec3> {
        self.block.map(|block| block.translation())
    }
}

#[derive(Debug, Clone)]
pub struct CameraStateCache {
    camera: HostRegion,
    fov: HostRegion,
    snapshot: Option<CachedOriginalState>,
}

impl CameraStateCache {
    pub fn new(addresses: &HostAddresses, layout: &HostLayout) -> Self {
        Self {
            camera: HostRegion::new(addresses.camera, layout.camera_block_field()),
            fov: HostRegion::new(addresses.fov, layout.fov_field()),
            snapshot: None,
        }
    }

    /// Snapshot, if one was captured.
    pub fn snapshot(&self) -> Option<&CachedOriginalState> {
        self.snapshot.as_ref()
    }

    pub fn original_fov(&self) -> Option<f32> {
        self.snapshot.and_then(|s| s.fov)
    }

    fn require_any_address(&self, operation: &str) -> Result<()> {
        if !self.camera.is_present() && !self.fov.is_present() {
            hostcam_bail!("hostcam::CameraStateCache", AddressNotFound,
                "camera and fov structs ({})", operation);
        }
        Ok(())
    }

    /// Read the live block and FOV into the snapshot.
    ///
    /// A second call replaces the previous snapshot.
    pub fn cache_original_camera_values<M>(&mut self, memory: &M) -> Result<CachedOriginalState>
    where
        M: HostMemory + ?Sized,
    {
        self.require_any_address("cache")?;
        let snapshot = CachedOriginalState {
            block: self.camera.read::<[f32; 12], M>(memory)?.map(HostCameraBlock::from_values),
            fov: self.fov.read::<f32, M>(memory)?,
        };
        if snapshot.block.is_none() {
            crate::hostcam_log!(Warn, "hostcam::CameraStateCache",
                "Camera struct not found, only the FOV was cached");
        }
        if snapshot.fov.is_none() {
            crate::hostcam_log!(Warn, "hostcam::CameraStateCache",
                "FOV struct not found, only the camera block was cached");
        }

        self.snapshot = Some(snapshot);
        crate::hostcam_log!(Debug, "hostcam::CameraStateCache",
            "Cached camera at {:?}, fov {:?}", snapshot.position(), snapshot.fov);
        Ok(snapshot)
    }

    /// Write the snapshot back into the live block and FOV.
    ///
    /// Repeated calls always write the same snapshot.
    pub fn restore_original_camera_values<M>(&self, memory: &mut M) -> Result<()>
    where
        M: HostMemory + ?Sized,
    {
        self.require_any_address("restore")?;
        let Some(snapshot) = self.snapshot else {
            hostcam_bail!("hostcam::CameraStateCache", NoSnapshot);
        };

        if let Some(block) = snapshot.block {
            self.camera.write(memory, block.values())?;
        }
        if let Some(fov) = snapshot.fov {
            self.fov.write(memory, &fov)?;
        }
        crate::hostcam_log!(Debug, "hostcam::CameraStateCache",
            "Restored camera at {:?}, fov {:?}", snapshot.position(), snapshot.fov);
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_cache_tests.rs"]
mod tests;
