//! Integration tests for the rc-core wire formats.
//!
//! These exercise the public API end to end: token → keycode → frame, and the
//! registration records built from a parsed device address.

use rc_core::{
    control_record, create_record, encode_key_event,
    protocol::records::{CONTROL_RECORD_LEN, CREATE_RECORD_LEN, REPORT_DESCRIPTOR},
    AddressError, Command, DeviceAddress, KeyTable, Keycode, TransportVariant,
};

fn frames_for(token: &str, variant: TransportVariant) -> Vec<Vec<u8>> {
    match Command::parse(token).expect("token must parse") {
        Command::Key { code, .. } => vec![encode_key_event(code, variant)],
        Command::Dial(codes) => codes.into_iter().map(|c| encode_key_event(c, variant)).collect(),
        Command::BatteryLevel(level) => vec![encode_key_event(
            KeyTable::battery_base().with_battery_level(level),
            variant,
        )],
        other => panic!("{token} parsed to non-sending command {other:?}"),
    }
}

#[test]
fn test_every_key_release_is_low_half_and_idempotent() {
    for name in KeyTable::list_names() {
        let code = KeyTable::lookup(&name).unwrap();
        let release = code.release();
        assert_eq!(release.raw(), code.raw() & 0x0000_FFFF, "{name}");
        assert_eq!(release.release(), release, "{name}");
        assert!(!release.is_press(), "{name}");
    }
}

#[test]
fn test_dialled_channel_frames_in_order() {
    // Arrange / Act
    let frames = frames_for("302", TransportVariant::Legacy);

    // Assert
    assert_eq!(
        frames,
        vec![vec![0x41, 0x20], vec![0x41, 0x27], vec![0x41, 0x1F], vec![0x40, 0x41, 0x00]]
    );
}

#[test]
fn test_battery_150_encodes_like_battery_100() {
    for variant in [TransportVariant::VirtualHid, TransportVariant::Legacy] {
        assert_eq!(
            frames_for("BATT_LEVEL150", variant),
            frames_for("BATT_LEVEL100", variant)
        );
    }
}

#[test]
fn test_uhid_frame_header_for_every_key() {
    for name in KeyTable::list_names() {
        let code = KeyTable::lookup(&name).unwrap();
        let frame = encode_key_event(code, TransportVariant::VirtualHid);
        assert_eq!(&frame[..4], &12u32.to_le_bytes(), "{name}");
        assert_eq!(
            u16::from_le_bytes([frame[4], frame[5]]) as usize,
            code.byte_count(),
            "{name}"
        );
        assert_eq!(frame.len(), 6 + code.byte_count(), "{name}");
    }
}

#[test]
fn test_control_record_from_parsed_address() {
    // Arrange
    let address = DeviceAddress::parse_hex("0x001a11223344").unwrap();

    // Act
    let record = control_record(address.as_bytes()).unwrap();

    // Assert
    assert_eq!(record.len(), CONTROL_RECORD_LEN);
    assert_eq!(&record[CONTROL_RECORD_LEN - 6..], &[0x00, 0x1A, 0x11, 0x22, 0x33, 0x44]);
}

#[test]
fn test_records_are_byte_identical_across_calls() {
    let addr = [1, 2, 3, 4, 5, 6];
    assert_eq!(control_record(&addr), control_record(&addr));
    assert_eq!(create_record(), create_record());
    assert_eq!(create_record().len(), CREATE_RECORD_LEN);
}

#[test]
fn test_records_embed_the_same_descriptor() {
    let create = create_record();
    let control = control_record(&[0; 6]).unwrap();
    assert_eq!(&create[280..280 + REPORT_DESCRIPTOR.len()], &control[4..4 + REPORT_DESCRIPTOR.len()]);
}

#[test]
fn test_control_record_invalid_address() {
    assert!(matches!(
        control_record(&[0xAB, 0xBA]),
        Err(AddressError::InvalidAddress { .. })
    ));
}

#[test]
fn test_keycode_from_raw_round_trips() {
    let code: Keycode = 0x00B0_4003.into();
    assert_eq!(code.raw(), 0x00B0_4003);
}
