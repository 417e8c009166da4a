// CLI definitions using clap

use clap::Parser;

use crate::property::Property;

#[derive(Parser, Debug)]
#[command(name = "gbmonctl")]
#[command(author, version, about = "Set Gigabyte monitor properties over USB HID")]
pub struct Cli {
    /// Panel brightness
    #[arg(short, long, value_name = "0-100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub brightness: Option<u8>,

    /// Panel contrast
    #[arg(short, long, value_name = "0-100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub contrast: Option<u8>,

    /// Sharpness
    #[arg(short, long, value_name = "0-10", value_parser = clap::value_parser!(u8).range(0..=10))]
    pub sharpness: Option<u8>,

    /// Blue light reduction. 0 means no reduction
    #[arg(long, visible_alias = "lb", value_name = "0-10", value_parser = clap::value_parser!(u8).range(0..=10))]
    pub low_blue_light: Option<u8>,

    /// Switch KVM to device 0 or 1
    #[arg(long, visible_alias = "kvm", value_name = "0-1", value_parser = clap::value_parser!(u8).range(0..=1))]
    pub kvm_switch: Option<u8>,

    /// Color mode: 0 is cool, 1 is normal, 2 is warm, 3 is user-defined
    #[arg(long, visible_alias = "cm", value_name = "0-3", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub color_mode: Option<u8>,

    /// Red gain -- only works if color-mode is set to 3
    #[arg(long, value_name = "0-100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub rgb_red: Option<u8>,

    /// Green gain -- only works if color-mode is set to 3
    #[arg(long, value_name = "0-100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub rgb_green: Option<u8>,

    /// Blue gain -- only works if color-mode is set to 3
    #[arg(long, value_name = "0-100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub rgb_blue: Option<u8>,
}

impl Cli {
    /// Property writes requested on the command line, in flag declaration
    /// order. Omitted flags contribute nothing.
    pub fn requested(&self) -> Vec<(Property, u8)> {
        [
            (Property::Brightness, self.brightness),
            (Property::Contrast, self.contrast),
            (Property::Sharpness, self.sharpness),
            (Property::LowBlueLight, self.low_blue_light),
            (Property::KvmSwitch, self.kvm_switch),
            (Property::ColorMode, self.color_mode),
            (Property::RgbRed, self.rgb_red),
            (Property::RgbGreen, self.rgb_green),
            (Property::RgbBlue, self.rgb_blue),
        ]
        .into_iter()
        .filter_map(|(prop, value)| value.map(|v| (prop, v)))
        .collect()
    }
}
