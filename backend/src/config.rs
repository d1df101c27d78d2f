use crate::error::ConfigError;
use log::{debug, warn};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Window and key settings. Every field may be omitted from the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// x, y; `None` leaves the placement to the platform
    pub position: Option<(i32, i32)>,
    pub accelerated: bool,
    pub toggle_key: String,
    pub quit_key: String,
    /// r, g, b, a
    pub background: [u8; 4],
    /// r, g, b, a
    pub line: [u8; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Testing fullscreen".to_string(),
            width: 640,
            height: 480,
            position: None,
            accelerated: true,
            toggle_key: "F".to_string(),
            quit_key: "Q".to_string(),
            background: [230, 230, 230, 255],
            line: [255, 0, 0, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle: Keycode,
    pub quit: Keycode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            toggle: Keycode::F,
            quit: Keycode::Q,
        }
    }
}

impl WindowConfig {
    pub fn from_toml_str(text: &str) -> Result<WindowConfig, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<WindowConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Like [`WindowConfig::load`], but never fails: a missing file silently
    /// gives the defaults, a broken one is reported and then ignored.
    pub fn load_or_default(path: &Path) -> WindowConfig {
        if !path.exists() {
            debug!("No config file at {path:?}, using defaults");
            return WindowConfig::default();
        }
        match Self::load(path) {
            Ok(config) => {
                debug!("Loaded config from {path:?}");
                config
            }
            Err(e) => {
                warn!("Ignoring config file {path:?}: {e}");
                WindowConfig::default()
            }
        }
    }

    /// Resolves the key names via SDL's key name table.
    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        Ok(KeyBindings {
            toggle: parse_key(&self.toggle_key)?,
            quit: parse_key(&self.quit_key)?,
        })
    }

    pub fn background_color(&self) -> Color {
        rgba(self.background)
    }

    pub fn line_color(&self) -> Color {
        rgba(self.line)
    }
}

fn parse_key(name: &str) -> Result<Keycode, ConfigError> {
    Keycode::from_name(name).ok_or_else(|| ConfigError::UnknownKey(name.to_string()))
}

fn rgba(c: [u8; 4]) -> Color {
    Color::RGBA(c[0], c[1], c[2], c[3])
}
