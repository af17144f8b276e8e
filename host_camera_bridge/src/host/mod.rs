//! Host module: access to the host application's memory.
//!
//! Addresses come from discovery, offsets from a HostLayout. All typed
//! accesses go through HostRegion → HostMemory byte copies.

mod address;
mod field;
mod layout;
mod memory;
mod region;
mod simulated_memory;

pub use address::{HostAddress, HostAddresses};
pub use field::{FieldDesc, FieldType, FieldValue};
pub use layout::{HostLayout, Matrix34Packing};
pub use memory::{HostMemory, ProcessMemory};
pub use region::HostRegion;
pub use simulated_memory::SimulatedMemory;
