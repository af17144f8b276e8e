/// Possibly-absent handles to host memory.
///
/// Discovery hands us base addresses of host structures. A structure that
/// does not exist yet (menu screen, loading) or was never found for the
/// running host build is simply absent; consumers must check presence
/// before touching memory.

use std::fmt;
use std::num::NonZeroUsize;

/// Base address of one host structure, or nothing.
///
/// A null base is normalized to absent, so a present address is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HostAddress(Option<NonZeroUsize>);

impl HostAddress {
    /// Address that was not (or not yet) discovered.
    pub const ABSENT: HostAddress = HostAddress(None);

    /// Wrap a raw base address. `0` yields an absent address.
    pub fn new(raw: usize) -> Self {
        Self(NonZeroUsize::new(raw))
    }

    /// Take the address of a live object inside our own address space.
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self::new(ptr as usize)
    }

    /// Presence query. Never touches memory.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Raw base address, if present.
    pub fn get(&self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }

    /// Absolute address of a field at `offset` bytes from the base.
    ///
    /// `None` when the base is absent or the sum overflows.
    pub fn field(&self, offset: usize) -> Option<usize> {
        self.get().and_then(|base| base.checked_add(offset))
    }
}

impl From<usize> for HostAddress {
    fn from(raw: usize) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(raw) => write!(f, "{:#018x}", raw),
            None => write!(f, "(null)"),
        }
    }
}

/// The three process-wide addresses produced by discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostAddresses {
    /// Camera structure holding the packed rotation/translation block
    pub camera: HostAddress,
    /// Structure holding the time-freeze byte
    pub timestop: HostAddress,
    /// Structure holding the field of view scalar
    pub fov: HostAddress,
}

impl HostAddresses {
    /// All three addresses absent.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn new(camera: HostAddress, timestop: HostAddress, fov: HostAddress) -> Self {
        Self { camera, timestop, fov }
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
