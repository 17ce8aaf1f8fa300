use thiserror::Error;

/// Color capability reported by a vendor device during identification.
/// Wire values follow the vendor SDK's numbering. Fixed for the lifetime of
/// a device instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceColorMode {
    Rgbw,
    Rgb,
    Mono,
    /// White channel prioritised over the RGB channels.
    RgbOrW,
    Ct,
    /// Two color-temperature instances on one device.
    CtX2,
    Rgbww,
}

impl DeviceColorMode {
    /// Decode the raw mode byte. Unknown values yield `None` so that newer
    /// devices degrade to on/off control instead of failing.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Rgbw),
            2 => Some(Self::Rgb),
            3 => Some(Self::Mono),
            4 => Some(Self::RgbOrW),
            5 => Some(Self::Ct),
            6 => Some(Self::CtX2),
            7 => Some(Self::Rgbww),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device rejected a composed channel value.
    #[error("bad on-value {value:?}")]
    BadValue { value: Vec<u8> },
    /// Any other vendor-session fault. Passed through to the caller.
    #[error("device fault: {0}")]
    Fault(String),
}

/// Connection/session handle for a single vendor light device.
///
/// Accessors return the device's last *reported* state; command methods
/// block until the outbound call completes. One command is in flight at a
/// time, `&mut self` leaves serialization of concurrent requests to the
/// caller.
pub trait LightSession {
    fn name(&self) -> &str;

    /// Raw vendor color-mode byte, see [`DeviceColorMode::from_raw`].
    fn color_mode(&self) -> u8;

    fn is_on(&self) -> bool;
    fn brightness(&self) -> Option<u8>;
    /// Last reported color temperature in mireds.
    fn color_temp(&self) -> Option<u16>;
    fn effect(&self) -> Option<&str>;
    fn effect_list(&self) -> &[String];

    /// Raw channel values as a hex string, e.g. `"ff0000"`.
    fn rgb_hex(&self) -> Option<String>;
    fn rgbw_hex(&self) -> Option<String>;
    fn rgbww_hex(&self) -> Option<String>;

    /// Default full-on value for a bare turn-on request.
    fn sensible_on_value(&self) -> Vec<u8>;

    /// Channel-wise brightness scaling, rounding to nearest.
    fn apply_brightness(&self, value: &[u8], brightness: u8) -> Vec<u8> {
        value
            .iter()
            .map(|&c| ((u16::from(c) * u16::from(brightness) + 127) / 255) as u8)
            .collect()
    }

    /// Pack a color temperature and brightness into the device's
    /// warm/cold channel pair. Device families with a different packing
    /// override this.
    fn color_temp_with_brightness(&self, mireds: u16, brightness: Option<u8>) -> Vec<u8> {
        let mireds = u32::from(mireds.clamp(1, 255));
        let warm = (mireds * 2).min(255) as u8;
        let cold = ((255 - mireds) * 2).min(255) as u8;
        self.apply_brightness(&[warm, cold], brightness.unwrap_or(255))
    }

    fn turn_on(&mut self, value: &[u8]) -> Result<(), DeviceError>;
    fn turn_off(&mut self) -> Result<(), DeviceError>;
    /// Select a preset effect by its index in [`LightSession::effect_list`].
    fn apply_effect(&mut self, index: usize) -> Result<(), DeviceError>;
}
