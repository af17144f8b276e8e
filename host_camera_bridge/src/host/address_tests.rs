use super::*;

// ============================================================================
// HostAddress
// ============================================================================

#[test]
fn test_zero_is_absent() {
    let address = HostAddress::new(0);
    assert!(!address.is_present());
    assert_eq!(address, HostAddress::ABSENT);
    assert_eq!(address.get(), None);
}

#[test]
fn test_present_address() {
    let address = HostAddress::new(0x1400_0000);
    assert!(address.is_present());
    assert_eq!(address.get(), Some(0x1400_0000));
}

#[test]
fn test_default_is_absent() {
    assert!(!HostAddress::default().is_present());
}

#[test]
fn test_field_adds_offset() {
    let address = HostAddress::new(0x1000);
    assert_eq!(address.field(0x40), Some(0x1040));
    assert_eq!(HostAddress::ABSENT.field(0x40), None);
}

#[test]
fn test_field_overflow_is_none() {
    let address = HostAddress::new(usize::MAX - 1);
    assert_eq!(address.field(8), None);
}

#[test]
fn test_from_ptr() {
    let value = 5u32;
    let address = HostAddress::from_ptr(&value as *const u32);
    assert!(address.is_present());
    assert_eq!(address.get(), Some(&value as *const u32 as usize));
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", HostAddress::new(0xABCD)), "0x000000000000abcd");
    assert_eq!(format!("{}", HostAddress::ABSENT), "(null)");
}

// ============================================================================
// HostAddresses
// ============================================================================

#[test]
fn test_addresses_absent() {
    let addresses = HostAddresses::absent();
    assert!(!addresses.camera.is_present());
    assert!(!addresses.timestop.is_present());
    assert!(!addresses.fov.is_present());
}

#[test]
fn test_addresses_new() {
    let addresses = HostAddresses::new(HostAddress::new(0x10), HostAddress::ABSENT, HostAddress::from(0x30usize));
    assert_eq!(addresses.camera.get(), Some(0x10));
    assert!(!addresses.timestop.is_present());
    assert_eq!(addresses.fov.get(), Some(0x30));
}
