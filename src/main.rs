use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead};

use anyhow::Context;
use log::{debug, error, info};

use halight::config::Config;
use halight::device::{DeviceError, LightSession};
use halight::hass::{LightCommand, State};
use halight::light::Light;

/// In-memory stand-in for a vendor device session. Remembers the last
/// accepted value and rejects values whose channel count does not match
/// the reported color mode.
struct SimulatedSession {
    name: String,
    mode: u8,
    effects: Vec<String>,
    on: bool,
    last_value: Vec<u8>,
}

impl SimulatedSession {
    fn new(name: String, mode: u8, effects: Vec<String>) -> Self {
        let channels = Self::channel_count(mode);
        SimulatedSession {
            name,
            mode,
            effects,
            on: false,
            last_value: vec![255; channels],
        }
    }

    fn channel_count(mode: u8) -> usize {
        match mode {
            1 | 4 => 4,
            2 => 3,
            3 => 1,
            5 | 6 => 2,
            7 => 6,
            _ => 1,
        }
    }

    fn hex_value(&self, channels: usize) -> Option<String> {
        if self.last_value.len() != channels {
            return None;
        }
        Some(self.last_value.iter().map(|c| format!("{c:02x}")).collect())
    }
}

impl LightSession for SimulatedSession {
    fn name(&self) -> &str {
        &self.name
    }

    fn color_mode(&self) -> u8 {
        self.mode
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn brightness(&self) -> Option<u8> {
        self.last_value.iter().copied().max()
    }

    fn color_temp(&self) -> Option<u16> {
        matches!(self.mode, 5 | 6).then_some(128)
    }

    fn effect(&self) -> Option<&str> {
        None
    }

    fn effect_list(&self) -> &[String] {
        &self.effects
    }

    fn rgb_hex(&self) -> Option<String> {
        self.hex_value(3)
    }

    fn rgbw_hex(&self) -> Option<String> {
        self.hex_value(4)
    }

    fn rgbww_hex(&self) -> Option<String> {
        self.hex_value(6)
    }

    fn sensible_on_value(&self) -> Vec<u8> {
        vec![255; Self::channel_count(self.mode)]
    }

    fn turn_on(&mut self, value: &[u8]) -> Result<(), DeviceError> {
        if value.len() != Self::channel_count(self.mode) {
            return Err(DeviceError::BadValue {
                value: value.to_vec(),
            });
        }
        self.last_value = value.to_vec();
        self.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DeviceError> {
        self.on = false;
        Ok(())
    }

    fn apply_effect(&mut self, _index: usize) -> Result<(), DeviceError> {
        self.on = true;
        Ok(())
    }
}

fn load_config() -> anyhow::Result<Config> {
    let contents = fs::read_to_string("config.toml").context("unable to open the config file")?;
    toml::from_str(&contents).context("unable to parse the config file")
}

fn main() -> anyhow::Result<()> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Debug);
    clog.init();

    let config = load_config()?;
    debug!("Loaded config: {:?}", config);

    let mut lights: HashMap<String, Light<SimulatedSession>> = HashMap::new();
    for entry in config.lights {
        let session = SimulatedSession::new(entry.name, entry.color_mode, entry.effects);
        let light = Light::new(session);
        info!(
            "Registered '{}' as {:?} (mode byte {})",
            light.name(),
            light.color_mode(),
            entry.color_mode
        );
        lights.insert(entry.id, light);
    }

    // One command per stdin line: `<id> <json>`, e.g.
    //   desk {"state":"ON","rgb":[255,0,0]}
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((id, payload)) = line.split_once(' ') else {
            error!("Expected '<id> <json>', got: {}", line);
            continue;
        };
        let cmd: LightCommand = match serde_json::from_str(payload) {
            Ok(cmd) => cmd,
            Err(e) => {
                error!("Failed to parse control message: {:?}", e);
                continue;
            }
        };
        debug!("Parsed control message for {}: {:?}", id, cmd);

        let Some(light) = lights.get_mut(id) else {
            error!("No light found for id {}", id);
            continue;
        };

        let result = if matches!(cmd.state, Some(State::Off)) {
            light.turn_off()
        } else {
            light.turn_on(&cmd)
        };
        match result {
            Ok(()) => info!(
                "'{}' is now {:?} (brightness {:?})",
                light.name(),
                light.state(),
                light.brightness()
            ),
            Err(e) => error!("Command for '{}' failed: {}", light.name(), e),
        }
    }

    info!("Input closed, exiting...");
    Ok(())
}
