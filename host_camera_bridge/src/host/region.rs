/// HostRegion: a maybe-present base address plus one fixed-offset field.
///
/// Every access checks presence first. An absent base is a normal runtime
/// condition: reads yield `None`, writes do nothing and report `false`.
/// Neither touches memory.

use crate::error::Result;
use crate::hostcam_bail;
use super::address::HostAddress;
use super::field::{self, FieldDesc, FieldValue};
use super::memory::HostMemory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRegion {
    address: HostAddress,
    field: FieldDesc,
}

impl HostRegion {
    pub fn new(address: HostAddress, field: FieldDesc) -> Self {
        Self { address, field }
    }

    pub fn address(&self) -> HostAddress {
        self.address
    }

    pub fn field(&self) -> &FieldDesc {
        &self.field
    }

    /// Presence query. Never touches memory.
    pub fn is_present(&self) -> bool {
        self.address.is_present()
    }

    /// Absolute address of the field, `None` when the base is absent.
    fn location(&self) -> Result<Option<usize>> {
        let Some(base) = self.address.get() else {
            return Ok(None);
        };
        match base.checked_add(self.field.offset) {
            Some(location) => Ok(Some(location)),
            None => hostcam_bail!("hostcam::HostRegion", MemoryAccess,
                "field '{}' at {:#x} + {:#x} overflows", self.field.name, base, self.field.offset),
        }
    }

    /// The value type must match the descriptor's width and encoding.
    fn check_type<T: FieldValue>(&self) -> Result<()> {
        if T::FIELD_TYPE != self.field.field_type {
            hostcam_bail!("hostcam::HostRegion", MemoryAccess,
                "field '{}' is {:?} ({} bytes), accessed as {:?} ({} bytes)",
                self.field.name, self.field.field_type, self.field.field_type.size_bytes(),
                T::FIELD_TYPE, T::FIELD_TYPE.size_bytes());
        }
        Ok(())
    }

    /// Read the field. `Ok(None)` when the base address is absent.
    pub fn read<T, M>(&self, memory: &M) -> Result<Option<T>>
    where
        T: FieldValue,
        M: HostMemory + ?Sized,
    {
        self.check_type::<T>()?;
        let Some(location) = self.location()? else {
            return Ok(None);
        };
        let mut value = T::zeroed();
        memory.read(location, bytemuck::bytes_of_mut(&mut value))?;
        Ok(Some(value))
    }

    /// Write the field. Returns whether anything was written.
    pub fn write<T, M>(&self, memory: &mut M, value: &T) -> Result<bool>
    where
        T: FieldValue,
        M: HostMemory + ?Sized,
    {
        self.check_type::<T>()?;
        let Some(location) = self.location()? else {
            return Ok(false);
        };
        memory.write(location, field::encode(value))?;
        Ok(true)
    }

    /// Read-modify-write in place. Returns the new value, `None` when absent.
    pub fn update<T, M, F>(&self, memory: &mut M, f: F) -> Result<Option<T>>
    where
        T: FieldValue,
        M: HostMemory + ?Sized,
        F: FnOnce(T) -> T,
    {
        let Some(current) = self.read::<T, M>(memory)? else {
            return Ok(None);
        };
        let next = f(current);
        self.write(memory, &next)?;
        Ok(Some(next))
    }
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod tests;
