//! Protocol constants and request building for Gigabyte monitor control.
//!
//! The monitor's scaler accepts fixed-size vendor reports on its HID control
//! endpoint. Every write is a 193-byte buffer: a constant header region,
//! a short preamble, and a message selecting one feature code and the value
//! to set it to. The panel never reports state back.

/// Vendor feature codes (which monitor attribute a request sets)
pub mod feature {
    // Short (8-bit) codes
    pub const BRIGHTNESS: u16 = 0x10;
    pub const CONTRAST: u16 = 0x12;
    pub const SHARPNESS: u16 = 0x87;

    // Extended (16-bit) codes, sent high byte first
    pub const COLOR_MODE: u16 = 0xE003;
    pub const RGB_RED: u16 = 0xE004;
    pub const RGB_GREEN: u16 = 0xE005;
    pub const RGB_BLUE: u16 = 0xE006;
    pub const LOW_BLUE_LIGHT: u16 = 0xE00B;
    pub const KVM_SWITCH: u16 = 0xE069;

    /// Get human-readable name for a feature code
    pub fn name(code: u16) -> &'static str {
        match code {
            BRIGHTNESS => "BRIGHTNESS",
            CONTRAST => "CONTRAST",
            SHARPNESS => "SHARPNESS",
            COLOR_MODE => "COLOR_MODE",
            RGB_RED => "RGB_RED",
            RGB_GREEN => "RGB_GREEN",
            RGB_BLUE => "RGB_BLUE",
            LOW_BLUE_LIGHT => "LOW_BLUE_LIGHT",
            KVM_SWITCH => "KVM_SWITCH",
            _ => "UNKNOWN",
        }
    }
}

/// Total request size (192 payload bytes + leading report ID byte)
pub const REQUEST_SIZE: usize = 193;
/// Header region size (0x40 bytes + leading report ID byte)
pub const HEADER_SIZE: usize = 65;

/// Fixed header bytes following the report ID
const HEADER: [u8; 11] = [
    0x40, 0xC6, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x6E, 0x00, 0x80,
];

/// Preamble marker byte
const PREAMBLE_MARKER: u8 = 0x51;
/// Preamble length byte is this base plus the message length
const PREAMBLE_LEN_BASE: u8 = 0x81;
/// Preamble terminator byte
const PREAMBLE_END: u8 = 0x03;

/// HID communication timing constants
pub mod timing {
    /// Settle delay after each write (ms).
    /// The panel drops back-to-back packets without it.
    pub const COMMAND_DELAY_MS: u64 = 200;
}

/// Device identification constants
pub mod device {
    /// Vendor ID of the monitor's control endpoint (Realtek scaler)
    pub const VENDOR_ID: u16 = 0x0BDA;
    /// Product ID of the monitor's control endpoint
    pub const PRODUCT_ID: u16 = 0x1100;
}

/// Build a monitor control request
///
/// Format: `[report_id=0] [header] [pad to 65] [preamble] [msg] [pad to 193]`
/// where msg is `[code_hi] [code_lo] [0x00] [value]` for extended feature
/// codes and `[code_lo] [0x00] [value]` for short ones.
pub fn build_request(feature_code: u16, value: u8) -> Vec<u8> {
    let mut msg = Vec::with_capacity(4);
    if feature_code > 0xFF {
        msg.push((feature_code >> 8) as u8);
    }
    msg.push((feature_code & 0xFF) as u8);
    msg.push(0x00);
    msg.push(value);

    let mut buf = vec![0u8; REQUEST_SIZE];
    buf[1..1 + HEADER.len()].copy_from_slice(&HEADER);
    buf[HEADER_SIZE] = PREAMBLE_MARKER;
    buf[HEADER_SIZE + 1] = PREAMBLE_LEN_BASE + msg.len() as u8;
    buf[HEADER_SIZE + 2] = PREAMBLE_END;
    buf[HEADER_SIZE + 3..HEADER_SIZE + 3 + msg.len()].copy_from_slice(&msg);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_layout_short_code() {
        let buf = build_request(feature::BRIGHTNESS, 90);

        assert_eq!(buf.len(), REQUEST_SIZE);
        assert_eq!(buf[0], 0x00); // report ID
        assert_eq!(
            &buf[1..12],
            &[0x40, 0xC6, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x6E, 0x00, 0x80]
        );
        assert!(buf[12..HEADER_SIZE].iter().all(|&b| b == 0));
        // 3-byte message: len byte 0x81 + 3 = 0x84
        assert_eq!(&buf[65..71], &[0x51, 0x84, 0x03, 0x10, 0x00, 90]);
        assert!(buf[71..].iter().all(|&b| b == 0));
    }

    #[test]
    fn request_layout_extended_code() {
        let buf = build_request(feature::KVM_SWITCH, 1);

        assert_eq!(buf.len(), REQUEST_SIZE);
        // 4-byte message: high byte of the code first, len byte 0x81 + 4 = 0x85
        assert_eq!(&buf[65..72], &[0x51, 0x85, 0x03, 0xE0, 0x69, 0x00, 1]);
        assert!(buf[72..].iter().all(|&b| b == 0));
    }

    #[test]
    fn extended_code_boundary() {
        // 0xFF is still a short code; only codes above a full byte get the
        // two-byte encoding.
        let buf = build_request(0xFF, 5);
        assert_eq!(&buf[65..71], &[0x51, 0x84, 0x03, 0xFF, 0x00, 5]);

        let buf = build_request(0x100, 5);
        assert_eq!(&buf[65..72], &[0x51, 0x85, 0x03, 0x01, 0x00, 0x00, 5]);
    }

    #[test]
    fn value_embedded_verbatim() {
        for value in [0u8, 1, 50, 100] {
            let buf = build_request(feature::CONTRAST, value);
            assert_eq!(buf[70], value);
        }
        for value in [0u8, 1] {
            let buf = build_request(feature::KVM_SWITCH, value);
            assert_eq!(buf[71], value);
        }
    }

    #[test]
    fn feature_names() {
        assert_eq!(feature::name(feature::BRIGHTNESS), "BRIGHTNESS");
        assert_eq!(feature::name(feature::KVM_SWITCH), "KVM_SWITCH");
        assert_eq!(feature::name(0xBEEF), "UNKNOWN");
    }
}
