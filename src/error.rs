//! Monitor error types

use thiserror::Error;

/// Errors that can occur while talking to the monitor
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Monitor not found: {0}")]
    DeviceNotFound(String),

    #[error("{property} must be within range [{min}, {max}], got {value}")]
    ValueOutOfRange {
        property: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("HID error: {0}")]
    Hid(String),

    #[error("HID permission denied: {0}")]
    PermissionDenied(String),

    #[error("Write rejected by device: sent {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

impl From<hidapi::HidError> for MonitorError {
    fn from(e: hidapi::HidError) -> Self {
        let msg = e.to_string();
        if msg.contains("Permission denied") || msg.contains("EPERM") {
            MonitorError::PermissionDenied(msg)
        } else {
            MonitorError::Hid(msg)
        }
    }
}
