//! Device registration records.
//!
//! Two fixed-layout records announce the emulated remote to the kernel:
//!
//! - the **uhid create record** (`struct uhid_event` carrying a
//!   `uhid_create2_req`), written once to `/dev/uhid`;
//! - the **bthid control record** (`BTHID_CONTROL`), handed to the legacy
//!   `/dev/bthid` driver through `ioctl`.
//!
//! Both layouts are packed; every multi-byte integer is little-endian.
//!
//! ```text
//! uhid create record (4376 bytes)
//! [type:4][name:128][phys:64][uniq:64][rd_size:2][bus:2]
//! [vendor:4][product:4][version:4][country:4][rd_data:4096]
//!
//! bthid control record (810 bytes)
//! [size:4][data:800][bd_addr:6]
//! ```

use super::address::{AddressError, DeviceAddress};

/// `UHID_CREATE2` event type.
pub const UHID_CREATE2: u32 = 11;
/// `BUS_BLUETOOTH` from `linux/input.h`.
pub const BUS_BLUETOOTH: u16 = 0x05;

/// Device name announced through uhid.
pub const DEVICE_NAME: &str = "GFRM-SOFTRC";
/// GFRM100 vendor id.
pub const VENDOR_ID: u32 = 0x0058;
/// GFRM100 product id.
pub const PRODUCT_ID: u32 = 0x2000;
/// GFRM100 firmware version.
pub const VERSION: u32 = 0x011B;
/// HID country code.
pub const COUNTRY: u32 = 0x21;

const NAME_LEN: usize = 128;
const PHYS_LEN: usize = 64;
const UNIQ_LEN: usize = 64;
const UHID_RD_DATA_LEN: usize = 4096;
const BTHID_DATA_LEN: usize = 800;

/// Total size of the uhid create record.
pub const CREATE_RECORD_LEN: usize =
    4 + NAME_LEN + PHYS_LEN + UNIQ_LEN + 2 + 2 + 4 + 4 + 4 + 4 + UHID_RD_DATA_LEN;
/// Total size of the bthid control record.
pub const CONTROL_RECORD_LEN: usize = 4 + BTHID_DATA_LEN + super::address::DEVICE_ADDRESS_LEN;

/// HID report descriptor of the GFRM100 remote.
///
/// Declares the keyboard report (id 0x41), the consumer-control report
/// (id 0x40), system control (id 0x12), battery strength (id 0x13) and the
/// vendor voice/feature reports.
pub const REPORT_DESCRIPTOR: [u8; 179] = [
    0x05, 0x01, 0x09, 0x06, 0xA1, 0x01, 0x85, 0x41, 0x75, 0x08, 0x95, 0x01, 0x26, 0xFF, 0x00, 0x05,
    0x07, 0x19, 0x00, 0x2A, 0xFF, 0x00, 0x81, 0x00, 0xC0, 0x05, 0x0C, 0x09, 0x01, 0xA1, 0x01, 0x85,
    0x40, 0x19, 0x00, 0x2A, 0xFF, 0x03, 0x75, 0x10, 0x95, 0x01, 0x15, 0x00, 0x26, 0xFF, 0x03, 0x81,
    0x00, 0xC0, 0x05, 0x01, 0x09, 0x80, 0xA1, 0x01, 0x85, 0x12, 0x19, 0x81, 0x29, 0x93, 0x15, 0x81,
    0x25, 0x93, 0x75, 0x08, 0x95, 0x01, 0x81, 0x40, 0xC0, 0x05, 0x0C, 0x09, 0x01, 0xA1, 0x01, 0x85,
    0x13, 0x09, 0x20, 0x15, 0x00, 0x25, 0x64, 0x75, 0x08, 0x95, 0x01, 0x81, 0x42, 0xC0, 0x85, 0x21,
    0x09, 0x21, 0x75, 0x08, 0x95, 0x01, 0x15, 0x00, 0x26, 0xFF, 0x00, 0x81, 0x02, 0x85, 0x22, 0x05,
    0x01, 0x09, 0x22, 0xA1, 0x02, 0x09, 0x3B, 0x95, 0x01, 0x75, 0x10, 0x15, 0x00, 0x26, 0x4F, 0x01,
    0x81, 0x02, 0x06, 0xF0, 0xFF, 0x09, 0x22, 0x75, 0x10, 0x96, 0x4F, 0x01, 0x15, 0x00, 0x26, 0xFF,
    0x00, 0x82, 0x01, 0x02, 0xC0, 0x85, 0xF2, 0x09, 0x02, 0x75, 0x08, 0x95, 0x01, 0x15, 0x00, 0x26,
    0xFF, 0x00, 0x91, 0x02, 0x85, 0xF3, 0x09, 0x03, 0x75, 0x08, 0x95, 0x10, 0x15, 0x00, 0x26, 0xFF,
    0x00, 0x81, 0x02,
];

/// Builds the uhid `UHID_CREATE2` record.
///
/// The output depends only on constants, so two calls always return identical
/// bytes.
pub fn create_record() -> Vec<u8> {
    let mut buf = Vec::with_capacity(CREATE_RECORD_LEN);

    buf.extend_from_slice(&UHID_CREATE2.to_le_bytes());
    push_padded(&mut buf, DEVICE_NAME.as_bytes(), NAME_LEN);
    push_padded(&mut buf, &[], PHYS_LEN);
    push_padded(&mut buf, &[], UNIQ_LEN);
    buf.extend_from_slice(&(REPORT_DESCRIPTOR.len() as u16).to_le_bytes());
    buf.extend_from_slice(&BUS_BLUETOOTH.to_le_bytes());
    buf.extend_from_slice(&VENDOR_ID.to_le_bytes());
    buf.extend_from_slice(&PRODUCT_ID.to_le_bytes());
    buf.extend_from_slice(&VERSION.to_le_bytes());
    buf.extend_from_slice(&COUNTRY.to_le_bytes());
    push_padded(&mut buf, &REPORT_DESCRIPTOR, UHID_RD_DATA_LEN);

    debug_assert_eq!(buf.len(), CREATE_RECORD_LEN);
    buf
}

/// Builds the `BTHID_CONTROL` record for the given device address.
///
/// # Errors
///
/// Returns [`AddressError::InvalidAddress`] unless `address` is exactly six
/// bytes long.
pub fn control_record(address: &[u8]) -> Result<Vec<u8>, AddressError> {
    let address = DeviceAddress::from_bytes(address)?;
    Ok(control_record_for(&address))
}

/// Builds the `BTHID_CONTROL` record for an already validated address.
pub fn control_record_for(address: &DeviceAddress) -> Vec<u8> {
    let mut buf = Vec::with_capacity(CONTROL_RECORD_LEN);

    buf.extend_from_slice(&(REPORT_DESCRIPTOR.len() as u32).to_le_bytes());
    push_padded(&mut buf, &REPORT_DESCRIPTOR, BTHID_DATA_LEN);
    buf.extend_from_slice(address.as_bytes());

    debug_assert_eq!(buf.len(), CONTROL_RECORD_LEN);
    buf
}

/// Appends `data` followed by NUL bytes up to `width`.
fn push_padded(buf: &mut Vec<u8>, data: &[u8], width: usize) {
    debug_assert!(data.len() <= width);
    buf.extend_from_slice(data);
    buf.resize(buf.len() + (width - data.len()), 0);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: [u8; 6] = [0xAB, 0xBA, 0xFA, 0xCE, 0x12, 0x34];

    #[test]
    fn test_report_descriptor_is_179_bytes() {
        assert_eq!(REPORT_DESCRIPTOR.len(), 179);
    }

    #[test]
    fn test_create_record_has_fixed_size() {
        assert_eq!(CREATE_RECORD_LEN, 4376);
        assert_eq!(create_record().len(), CREATE_RECORD_LEN);
    }

    #[test]
    fn test_create_record_header_and_name() {
        // Arrange / Act
        let rec = create_record();

        // Assert
        assert_eq!(&rec[0..4], &[0x0B, 0x00, 0x00, 0x00]);
        assert_eq!(&rec[4..15], b"GFRM-SOFTRC");
        assert!(rec[15..132].iter().all(|&b| b == 0), "name must be NUL padded");
        assert!(rec[132..260].iter().all(|&b| b == 0), "phys/uniq must be empty");
    }

    #[test]
    fn test_create_record_device_identity_fields() {
        let rec = create_record();
        assert_eq!(&rec[260..262], &[0xB3, 0x00], "rd_size");
        assert_eq!(&rec[262..264], &[0x05, 0x00], "bus");
        assert_eq!(&rec[264..268], &[0x58, 0x00, 0x00, 0x00], "vendor");
        assert_eq!(&rec[268..272], &[0x00, 0x20, 0x00, 0x00], "product");
        assert_eq!(&rec[272..276], &[0x1B, 0x01, 0x00, 0x00], "version");
        assert_eq!(&rec[276..280], &[0x21, 0x00, 0x00, 0x00], "country");
    }

    #[test]
    fn test_create_record_descriptor_is_padded_to_4096() {
        let rec = create_record();
        assert_eq!(&rec[280..280 + 179], &REPORT_DESCRIPTOR[..]);
        assert!(rec[280 + 179..].iter().all(|&b| b == 0));
        assert_eq!(rec.len() - 280, 4096);
    }

    #[test]
    fn test_control_record_layout() {
        // Arrange / Act
        let rec = control_record(&ADDR).unwrap();

        // Assert
        assert_eq!(rec.len(), 810);
        assert_eq!(&rec[0..4], &[0xB3, 0x00, 0x00, 0x00]);
        assert_eq!(&rec[4..4 + 179], &REPORT_DESCRIPTOR[..]);
        assert!(rec[4 + 179..804].iter().all(|&b| b == 0));
        assert_eq!(&rec[804..], &ADDR);
    }

    #[test]
    fn test_control_record_is_deterministic() {
        assert_eq!(control_record(&ADDR).unwrap(), control_record(&ADDR).unwrap());
        assert_eq!(create_record(), create_record());
    }

    #[test]
    fn test_control_record_rejects_bad_address_length() {
        for bad in [&ADDR[..5], &[0u8; 7][..], &[][..]] {
            assert!(matches!(
                control_record(bad),
                Err(AddressError::InvalidAddress { .. })
            ));
        }
    }
}
