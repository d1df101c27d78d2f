pub mod config;
pub mod error;
pub mod fullscreen;
pub mod system;

pub use sdl2;
