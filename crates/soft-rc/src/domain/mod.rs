//! Domain layer: configuration types shared by the application and the binary.

pub mod config;

pub use config::{
    DevicePaths, RemoteConfig, SessionOptions, DEFAULT_BTHID_PATH, DEFAULT_DEVICE_ADDRESS,
    DEFAULT_RELEASE_DELAY, DEFAULT_UHID_PATH,
};
