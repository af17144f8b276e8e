/// Byte-level access to host memory.
///
/// Every typed read or write of a host field ends up here as a plain byte
/// copy at an absolute address. Field types never alias host memory through
/// pointer casts; they encode into and decode from byte slices instead.

use crate::error::Result;
use crate::hostcam_bail;

/// Byte-buffer view of the host's address space.
pub trait HostMemory {
    /// Copy `buf.len()` bytes starting at `address` into `buf`.
    fn read(&self, address: usize, buf: &mut [u8]) -> Result<()>;

    /// Copy `data` into host memory starting at `address`.
    fn write(&mut self, address: usize, data: &[u8]) -> Result<()>;
}

impl<M: HostMemory + ?Sized> HostMemory for &mut M {
    fn read(&self, address: usize, buf: &mut [u8]) -> Result<()> {
        (**self).read(address, buf)
    }

    fn write(&mut self, address: usize, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }
}

/// Direct access to the memory of the process we are loaded into.
///
/// Only the null address is rejected; anything else is copied as-is.
#[derive(Debug)]
pub struct ProcessMemory {
    _private: (),
}

impl ProcessMemory {
    /// # Safety
    ///
    /// Every address later passed to `read`/`write` must point into memory
    /// that is mapped, readable (and writable for writes) for the full length
    /// of the access, and not concurrently touched by the host's own threads.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl HostMemory for ProcessMemory {
    fn read(&self, address: usize, buf: &mut [u8]) -> Result<()> {
        if address == 0 {
            hostcam_bail!("hostcam::ProcessMemory", MemoryAccess,
                "read of {} bytes at null address", buf.len());
        }
        // SAFETY: validity of `address..address + len` is the constructor's contract.
        unsafe {
            std::ptr::copy_nonoverlapping(address as *const u8, buf.as_mut_ptr(), buf.len());
        }
        Ok(())
    }

    fn write(&mut self, address: usize, data: &[u8]) -> Result<()> {
        if address == 0 {
            hostcam_bail!("hostcam::ProcessMemory", MemoryAccess,
                "write of {} bytes at null address", data.len());
        }
        // SAFETY: see `read`.
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), address as *mut u8, data.len());
        }
        Ok(())
    }
}
