//! Protocol module containing the registration records and the key-event codec.

pub mod address;
pub mod codec;
pub mod records;

pub use address::{AddressError, DeviceAddress, DEVICE_ADDRESS_LEN};
pub use codec::{encode_key_event, TransportVariant};
pub use records::{control_record, control_record_for, create_record};
