//! HID connection to the monitor's control endpoint.

use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use tracing::debug;

use crate::error::MonitorError;
use crate::property::Property;
use crate::protocol::{self, device, timing, HEADER_SIZE};

/// Handle to the monitor's HID control endpoint.
///
/// Write-only: properties are set by sending fixed-format request packets.
/// The monitor never reports state back, so there is no read path.
pub struct Monitor {
    device: HidDevice,
    /// Delay after each write (ms)
    command_delay_ms: u64,
}

impl Monitor {
    /// Open the monitor control endpoint by its well-known VID/PID.
    pub fn open() -> Result<Self, MonitorError> {
        let api = HidApi::new()?;
        Self::open_with(&api)
    }

    /// Open the monitor using an existing HID API handle.
    pub fn open_with(api: &HidApi) -> Result<Self, MonitorError> {
        let present = api.device_list().any(|d| {
            d.vendor_id() == device::VENDOR_ID && d.product_id() == device::PRODUCT_ID
        });
        if !present {
            return Err(MonitorError::DeviceNotFound(format!(
                "{:04X}:{:04X}",
                device::VENDOR_ID,
                device::PRODUCT_ID
            )));
        }

        let hid = api.open(device::VENDOR_ID, device::PRODUCT_ID)?;
        debug!(
            "Opened monitor control endpoint {:04X}:{:04X}",
            device::VENDOR_ID,
            device::PRODUCT_ID
        );

        Ok(Self {
            device: hid,
            command_delay_ms: timing::COMMAND_DELAY_MS,
        })
    }

    /// Set delay after writes (default 200ms)
    pub fn set_command_delay(&mut self, ms: u64) {
        self.command_delay_ms = ms;
    }

    /// Set a property to a value.
    ///
    /// Validates the value, sends one request packet, then waits for the
    /// panel to settle before the next write.
    pub fn set(&self, property: Property, value: u8) -> Result<(), MonitorError> {
        property.validate(value)?;
        let buf = protocol::build_request(property.feature_code(), value);
        debug!(
            "Sending {} = {}: {:02X?}",
            property,
            value,
            &buf[HEADER_SIZE..HEADER_SIZE + 7]
        );
        self.send_and_wait(&buf)
    }

    /// Write a request packet and wait for the settle delay.
    fn send_and_wait(&self, buf: &[u8]) -> Result<(), MonitorError> {
        let written = self.device.write(buf)?;
        if written != buf.len() {
            return Err(MonitorError::ShortWrite {
                written,
                expected: buf.len(),
            });
        }
        std::thread::sleep(Duration::from_millis(self.command_delay_ms));
        Ok(())
    }
}
