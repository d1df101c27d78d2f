use crate::config::WindowConfig;
use crate::error::BackendError;
use crate::fullscreen::{FullscreenMode, FullscreenWindow};
use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::WindowCanvas;
use sdl2::video::FullscreenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    KeyDown(Keycode),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
    MouseButtonUp(MouseButtonId),
}

impl IoEvents {
    /// `None` for event kinds the demo does not react to.
    pub fn from_sdl(event: Event) -> Option<IoEvents> {
        match event {
            Event::Quit { .. } => Some(IoEvents::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => Some(IoEvents::KeyDown(key)),
            Event::MouseMotion {
                x, y, xrel, yrel, ..
            } => Some(IoEvents::MouseMotion(x, y, xrel, yrel)),
            Event::MouseButtonUp { mouse_btn, x, y, .. } => {
                let id = match mouse_btn {
                    MouseButton::Left => MouseButtonId::Left(x, y),
                    MouseButton::Right => MouseButtonId::Right(x, y),
                    MouseButton::Middle => MouseButtonId::Middle(x, y),
                    _ => MouseButtonId::Other(x, y),
                };
                Some(IoEvents::MouseButtonUp(id))
            }
            _ => None,
        }
    }
}

/// One window with its renderer and event queue.
///
/// Everything is released when the value is dropped; fields drop in
/// declaration order, so the renderer goes before the SDL context.
pub struct System {
    canvas: WindowCanvas,
    event_pump: sdl2::EventPump,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(config: &WindowConfig) -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Init)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Init)?;

        let mut builder = video_subsystem.window(&config.title, config.width, config.height);
        if let Some((x, y)) = config.position {
            builder.position(x, y);
        }
        let window = builder.build()?;

        let mut canvas_builder = window.into_canvas();
        if config.accelerated {
            canvas_builder = canvas_builder.accelerated();
        }
        let canvas = canvas_builder.build()?;

        let event_pump = sdl_context.event_pump().map_err(BackendError::Init)?;

        info!(
            "Created window {:?} {}x{}",
            config.title, config.width, config.height
        );

        Ok(System {
            canvas,
            event_pump,
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        })
    }

    /// Blocks until SDL delivers the next event.
    pub fn wait_io_event(&mut self) -> Option<IoEvents> {
        IoEvents::from_sdl(self.event_pump.wait_event())
    }

    pub fn clear_screen(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    pub fn draw_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
    ) -> Result<(), BackendError> {
        self.canvas.set_draw_color(color);
        self.canvas
            .draw_line(Point::from(from), Point::from(to))
            .map_err(BackendError::Render)
    }

    pub fn draw_to_screen(&mut self) {
        self.canvas.present();
    }
}

impl FullscreenWindow for System {
    fn set_fullscreen_mode(&mut self, mode: FullscreenMode) -> Result<(), String> {
        let fullscreen_type = match mode {
            FullscreenMode::Windowed => FullscreenType::Off,
            FullscreenMode::Desktop => FullscreenType::Desktop,
        };
        self.canvas.window_mut().set_fullscreen(fullscreen_type)
    }
}

impl Drop for System {
    fn drop(&mut self) {
        debug!("Releasing renderer and window");
    }
}
