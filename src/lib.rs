//! Adapter between vendor light devices and a host home-automation
//! platform's generic light entity model.
//!
//! A vendor device reports a color capability byte and raw per-channel
//! values; the host platform speaks presentation color modes and
//! [`hass::LightCommand`] requests. [`light::Light`] sits on that boundary:
//! it resolves a canonical presentation mode once at construction and
//! composes validated channel values for on/off, brightness,
//! color-temperature, multi-channel color, and effect commands. The vendor
//! connection itself is consumed through the [`device::LightSession`]
//! trait, nothing here discovers, transports, or persists.

pub mod config;
pub mod device;
pub mod hass;
pub mod light;

pub use device::{DeviceColorMode, DeviceError, LightSession};
pub use hass::{ColorMode, LightCommand, State};
pub use light::{Capability, Light, LightError, resolve_color_mode};
