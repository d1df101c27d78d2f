use crate::fullscreen::FullscreenMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("SDL initialization failure: {0}")]
    Init(String),

    #[error("Error while building window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),

    #[error("Error while creating renderer: {0}")]
    Renderer(#[from] sdl2::IntegerOrSdlError),

    #[error("Render call failed: {0}")]
    Render(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown key name: {0:?}")]
    UnknownKey(String),
}

/// The windowing layer refused a fullscreen mode change.
///
/// `reason` carries the error text reported by SDL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Full screen toggle error: {reason}")]
pub struct WindowModeError {
    pub requested: FullscreenMode,
    pub reason: String,
}
