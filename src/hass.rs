use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Canonical color capability exposed to the host platform, independent of
/// the vendor's own capability naming.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    #[serde(rename = "rgb")]
    Rgb,

    #[serde(rename = "rgbw")]
    Rgbw,

    #[serde(rename = "rgbww")]
    Rgbww,

    #[serde(rename = "brightness")]
    Brightness,

    #[serde(rename = "color_temp")]
    ColorTemp,

    #[serde(rename = "onoff")]
    OnOff,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

/// A light control request from the host platform. Any subset of fields may
/// be set; which ones are meaningful depends on the light's color mode, the
/// rest are ignored.
#[skip_serializing_none]
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LightCommand {
    pub brightness: Option<u8>,
    /// Color temperature in mireds.
    pub color_temp: Option<u16>,
    pub rgb: Option<[u8; 3]>,
    pub rgbw: Option<[u8; 4]>,
    pub rgbww: Option<[u8; 6]>,
    pub effect: Option<String>,
    pub state: Option<State>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_deserializes_from_host_payload() {
        let cmd: LightCommand =
            serde_json::from_str(r#"{"state":"ON","brightness":128,"rgb":[255,0,0]}"#).unwrap();
        assert_eq!(cmd.state, Some(State::On));
        assert_eq!(cmd.brightness, Some(128));
        assert_eq!(cmd.rgb, Some([255, 0, 0]));
        assert_eq!(cmd.rgbw, None);
        assert_eq!(cmd.effect, None);
    }

    #[test]
    fn unset_fields_are_skipped_when_serializing() {
        let cmd = LightCommand {
            brightness: Some(5),
            ..LightCommand::default()
        };
        assert_eq!(serde_json::to_string(&cmd).unwrap(), r#"{"brightness":5}"#);
    }

    #[test]
    fn color_mode_uses_host_names() {
        assert_eq!(
            serde_json::to_string(&ColorMode::ColorTemp).unwrap(),
            r#""color_temp""#
        );
        assert_eq!(serde_json::to_string(&ColorMode::OnOff).unwrap(), r#""onoff""#);
    }
}
