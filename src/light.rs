use thiserror::Error;

use crate::device::{DeviceColorMode, DeviceError};
use crate::hass::ColorMode;

pub mod adapter;
mod hex;

pub use adapter::Light;

/// Resolve the presentation mode for a vendor-reported color capability.
///
/// Pure and total: `RgbOrW` collapses to RGBW (the white-hex-vs-RGB
/// distinction is dropped) and `CtX2` to a single color-temperature
/// instance.
pub fn resolve_color_mode(mode: DeviceColorMode) -> ColorMode {
    match mode {
        DeviceColorMode::Rgbw => ColorMode::Rgbw,
        DeviceColorMode::Rgb => ColorMode::Rgb,
        DeviceColorMode::Mono => ColorMode::Brightness,
        DeviceColorMode::RgbOrW => ColorMode::Rgbw,
        DeviceColorMode::Ct => ColorMode::ColorTemp,
        DeviceColorMode::CtX2 => ColorMode::ColorTemp,
        DeviceColorMode::Rgbww => ColorMode::Rgbww,
    }
}

/// Presentation capability of a bridged light, computed once at
/// construction. Color-temperature lights always expose the fixed 1-255
/// mired range, whatever range the device itself reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub color_mode: ColorMode,
    pub min_mireds: Option<u16>,
    pub max_mireds: Option<u16>,
}

impl Capability {
    /// Derive the capability from the raw vendor color-mode byte. Unknown
    /// values fall back to on/off control rather than failing.
    pub fn from_raw_mode(raw: u8) -> Self {
        let color_mode =
            DeviceColorMode::from_raw(raw).map_or(ColorMode::OnOff, resolve_color_mode);
        let (min_mireds, max_mireds) = if color_mode == ColorMode::ColorTemp {
            (Some(1), Some(255))
        } else {
            (None, None)
        };
        Capability {
            color_mode,
            min_mireds,
            max_mireds,
        }
    }
}

#[derive(Debug, Error)]
pub enum LightError {
    /// The requested effect is not in the device's effect list.
    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    #[error(transparent)]
    Device(#[from] DeviceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_device_mode_resolves() {
        let cases = [
            (DeviceColorMode::Rgbw, ColorMode::Rgbw),
            (DeviceColorMode::Rgb, ColorMode::Rgb),
            (DeviceColorMode::Mono, ColorMode::Brightness),
            (DeviceColorMode::RgbOrW, ColorMode::Rgbw),
            (DeviceColorMode::Ct, ColorMode::ColorTemp),
            (DeviceColorMode::CtX2, ColorMode::ColorTemp),
            (DeviceColorMode::Rgbww, ColorMode::Rgbww),
        ];
        for (device_mode, expected) in cases {
            assert_eq!(resolve_color_mode(device_mode), expected);
            // Same input, same output on repeat calls.
            assert_eq!(resolve_color_mode(device_mode), expected);
        }
    }

    #[test]
    fn unknown_raw_mode_falls_back_to_on_off() {
        let capability = Capability::from_raw_mode(99);
        assert_eq!(capability.color_mode, ColorMode::OnOff);
        assert_eq!(capability.min_mireds, None);
        assert_eq!(capability.max_mireds, None);
    }

    #[test]
    fn color_temp_capability_declares_fixed_mired_range() {
        for raw in [5, 6] {
            let capability = Capability::from_raw_mode(raw);
            assert_eq!(capability.color_mode, ColorMode::ColorTemp);
            assert_eq!(capability.min_mireds, Some(1));
            assert_eq!(capability.max_mireds, Some(255));
        }
    }

    #[test]
    fn non_color_temp_capability_has_no_mired_range() {
        let capability = Capability::from_raw_mode(1);
        assert_eq!(capability.color_mode, ColorMode::Rgbw);
        assert_eq!(capability.min_mireds, None);
    }
}
