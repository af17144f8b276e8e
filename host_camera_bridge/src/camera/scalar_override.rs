/// ScalarOverrideController: FOV, time-freeze and supersampling fields.
///
/// Each scalar lives behind its own host address. A missing address turns
/// the operation into a silent no-op.

use crate::error::Result;
use crate::host::{FieldDesc, HostAddress, HostAddresses, HostLayout, HostMemory, HostRegion};

/// Value written to the timestop byte
const TIMESTOP_FROZEN: u8 = 1;
const TIMESTOP_RUNNING: u8 = 0;

#[derive(Debug, Clone)]
pub struct ScalarOverrideController {
    timestop: HostRegion,
    fov: HostRegion,
    supersampling: FieldDesc,
}

impl ScalarOverrideController {
    pub fn new(addresses: &HostAddresses, layout: &HostLayout) -> Self {
        Self {
            timestop: HostRegion::new(addresses.timestop, layout.timestop_field()),
            fov: HostRegion::new(addresses.fov, layout.fov_field()),
            supersampling: layout.supersampling_field(),
        }
    }

    /// Freeze (`true`) or resume (`false`) host time.
    pub fn set_time_stop_value<M>(&self, memory: &mut M, frozen: bool) -> Result<()>
    where
        M: HostMemory + ?Sized,
    {
        let value = if frozen { TIMESTOP_FROZEN } else { TIMESTOP_RUNNING };
        if self.timestop.write(memory, &value)? {
            crate::hostcam_log!(Trace, "hostcam::ScalarOverride", "Timestop set to {}", value);
        }
        Ok(())
    }

    /// Add `delta` to the live FOV. No clamping.
    pub fn change_fov<M>(&self, memory: &mut M, delta: f32) -> Result<()>
    where
        M: HostMemory + ?Sized,
    {
        if let Some(fov) = self.fov.update(memory, |fov: f32| fov + delta)? {
            crate::hostcam_log!(Trace, "hostcam::ScalarOverride", "FOV changed by {} to {}", delta, fov);
        }
        Ok(())
    }

    /// Overwrite the live FOV with `original`.
    ///
    /// With no snapshot (`None`) nothing is written.
    pub fn reset_fov<M>(&self, memory: &mut M, original: Option<f32>) -> Result<()>
    where
        M: HostMemory + ?Sized,
    {
        if !self.fov.is_present() {
            return Ok(());
        }
        let Some(original) = original else {
            crate::hostcam_log!(Warn, "hostcam::ScalarOverride", "FOV reset requested before any camera snapshot");
            return Ok(());
        };
        self.fov.write(memory, &original)?;
        Ok(())
    }

    /// Live FOV, `None` when the FOV address is absent.
    pub fn current_fov<M>(&self, memory: &M) -> Result<Option<f32>>
    where
        M: HostMemory + ?Sized,
    {
        self.fov.read::<f32, M>(memory)
    }

    /// Write the supersampling factor of the image structure at `image`.
    ///
    /// The image address is per call: it belongs to a host resource, not to
    /// the discovered process-wide set.
    pub fn set_supersampling_factor<M>(&self, memory: &mut M, image: HostAddress, value: f32) -> Result<()>
    where
        M: HostMemory + ?Sized,
    {
        HostRegion::new(image, self.supersampling).write(memory, &value)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "scalar_override_tests.rs"]
mod tests;
