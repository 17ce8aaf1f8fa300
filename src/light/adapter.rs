use log::{debug, error};

use crate::device::{DeviceError, LightSession};
use crate::hass::{ColorMode, LightCommand, State};
use crate::light::{Capability, LightError, hex};

/// Presents a vendor light session as a host-platform light entity.
///
/// Stateless between calls apart from the session's own last-reported
/// state, which feeds the brightness and color-temperature defaulting in
/// [`Light::turn_on`].
pub struct Light<S> {
    session: S,
    capability: Capability,
}

impl<S: LightSession> Light<S> {
    pub fn new(session: S) -> Self {
        let capability = Capability::from_raw_mode(session.color_mode());
        Light {
            session,
            capability,
        }
    }

    pub fn name(&self) -> &str {
        self.session.name()
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn color_mode(&self) -> ColorMode {
        self.capability.color_mode
    }

    pub fn min_mireds(&self) -> Option<u16> {
        self.capability.min_mireds
    }

    pub fn max_mireds(&self) -> Option<u16> {
        self.capability.max_mireds
    }

    pub fn is_on(&self) -> bool {
        self.session.is_on()
    }

    pub fn state(&self) -> State {
        if self.session.is_on() { State::On } else { State::Off }
    }

    pub fn brightness(&self) -> Option<u8> {
        self.session.brightness()
    }

    pub fn color_temp(&self) -> Option<u16> {
        self.session.color_temp()
    }

    pub fn effect(&self) -> Option<&str> {
        self.session.effect()
    }

    pub fn effect_list(&self) -> &[String] {
        self.session.effect_list()
    }

    /// Reported RGB color, normalised so the brightest channel is
    /// full-scale. `None` when the device reported nothing or garbage.
    pub fn rgb_color(&self) -> Option<[u8; 3]> {
        let channels = hex::hex_to_channels(&self.session.rgb_hex()?)?;
        let rgb: [u8; 3] = channels.get(0..3)?.try_into().ok()?;
        Some(hex::normalise_rgb(rgb))
    }

    pub fn rgbw_color(&self) -> Option<[u8; 4]> {
        let channels = hex::hex_to_channels(&self.session.rgbw_hex()?)?;
        channels.get(0..4)?.try_into().ok()
    }

    pub fn rgbww_color(&self) -> Option<[u8; 6]> {
        let channels = hex::hex_to_channels(&self.session.rgbww_hex()?)?;
        channels.get(0..6)?.try_into().ok()
    }

    /// Compose and issue a single turn-on command.
    ///
    /// An effect request short-circuits the value composition and issues an
    /// effect command instead; an effect name missing from the device's
    /// list fails with [`LightError::UnknownEffect`] before anything is
    /// sent. Otherwise the branches below run in order, later ones
    /// overwriting or transforming the value of earlier ones; when
    /// conflicting color fields are supplied, the later branch wins.
    ///
    /// A device rejecting the composed value is logged and swallowed; the
    /// adapter stays usable. Every other device fault propagates.
    pub fn turn_on(&mut self, cmd: &LightCommand) -> Result<(), LightError> {
        if let Some(effect) = &cmd.effect {
            let index = self
                .session
                .effect_list()
                .iter()
                .position(|name| name == effect)
                .ok_or_else(|| LightError::UnknownEffect(effect.clone()))?;
            debug!("Selecting effect '{}' ({}) on '{}'", effect, index, self.name());
            return Ok(self.session.apply_effect(index)?);
        }

        let mut value = self.session.sensible_on_value();
        let mut brightness = cmd.brightness;

        if let Some(rgbw) = cmd.rgbw {
            value = rgbw.to_vec();
        }
        if let Some(mireds) = cmd.color_temp {
            value = self
                .session
                .color_temp_with_brightness(mireds, self.session.brightness());
        }
        if let Some(rgbww) = cmd.rgbww {
            value = rgbww.to_vec();
        }
        if let Some(rgb) = cmd.rgb {
            if self.color_mode() == ColorMode::Rgb && brightness.is_none() {
                brightness = self.session.brightness();
            }
            value = rgb.to_vec();
        }
        if let Some(brightness) = brightness {
            if self.color_mode() == ColorMode::ColorTemp {
                // Neutral white if the device never reported a temperature.
                let mireds = self.session.color_temp().unwrap_or(128);
                value = self
                    .session
                    .color_temp_with_brightness(mireds, Some(brightness));
            } else {
                value = self.session.apply_brightness(&value, brightness);
            }
        }

        debug!("Turning on '{}' with value {:?}", self.name(), value);
        match self.session.turn_on(&value) {
            Err(DeviceError::BadValue { value }) => {
                error!("Turning on '{}' failed: bad value {:?}", self.name(), value);
                Ok(())
            }
            result => Ok(result?),
        }
    }

    /// Issue a single off command. No validation.
    pub fn turn_off(&mut self) -> Result<(), LightError> {
        debug!("Turning off '{}'", self.name());
        Ok(self.session.turn_off()?)
    }
}
