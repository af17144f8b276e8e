/// Simulated host memory: a bounds-checked byte buffer mapped at a
/// chosen base address.
///
/// Stands in for the host process in tests, and can replay a memory dump
/// captured from a running host.

use std::ops::Range;
use crate::error::Result;
use crate::hostcam_bail;
use super::address::HostAddress;
use super::memory::HostMemory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedMemory {
    base: usize,
    bytes: Vec<u8>,
}

impl SimulatedMemory {
    /// Zero-filled region of `size` bytes mapped at `base`.
    pub fn new(base: usize, size: usize) -> Self {
        Self { base, bytes: vec![0; size] }
    }

    /// Region initialized from a captured dump.
    pub fn from_bytes(base: usize, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw contents of the region.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Host address of the byte at `offset` inside the region. Absent when
    /// the sum does not fit in the address space.
    pub fn address_of(&self, offset: usize) -> HostAddress {
        self.base.checked_add(offset).map_or(HostAddress::ABSENT, HostAddress::new)
    }

    /// One past the last mapped address, saturating at the top of the
    /// address space.
    pub fn end(&self) -> usize {
        self.base.saturating_add(self.bytes.len())
    }

    fn local_range(&self, address: usize, len: usize) -> Option<Range<usize>> {
        let start = address.checked_sub(self.base)?;
        let end = start.checked_add(len)?;
        (end <= self.bytes.len()).then_some(start..end)
    }
}

impl HostMemory for SimulatedMemory {
    fn read(&self, address: usize, buf: &mut [u8]) -> Result<()> {
        let Some(range) = self.local_range(address, buf.len()) else {
            hostcam_bail!("hostcam::SimulatedMemory", MemoryAccess,
                "read of {} bytes at {:#x} outside {:#x}..{:#x}",
                buf.len(), address, self.base, self.end());
        };
        buf.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn write(&mut self, address: usize, data: &[u8]) -> Result<()> {
        let Some(range) = self.local_range(address, data.len()) else {
            hostcam_bail!("hostcam::SimulatedMemory", MemoryAccess,
                "write of {} bytes at {:#x} outside {:#x}..{:#x}",
                data.len(), address, self.base, self.end());
        };
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
#[path = "simulated_memory_tests.rs"]
mod tests;
