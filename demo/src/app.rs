use backend::config::KeyBindings;
use backend::fullscreen::{FullscreenToggle, FullscreenWindow};
use backend::system::{IoEvents, MouseButtonId};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Per-run state of the demo: the fullscreen flag and the last mouse position.
pub struct App {
    keys: KeyBindings,
    toggle: FullscreenToggle,
    mouse: (i32, i32),
}

impl App {
    pub fn new(keys: KeyBindings) -> Self {
        App {
            keys,
            toggle: FullscreenToggle::new(),
            mouse: (0, 0),
        }
    }

    pub fn is_full_screen(&self) -> bool {
        self.toggle.is_full_screen()
    }

    /// End point of the debug line.
    pub fn mouse(&self) -> (i32, i32) {
        self.mouse
    }

    pub fn handle_event<W: FullscreenWindow + ?Sized>(
        &mut self,
        event: &IoEvents,
        window: &mut W,
    ) -> LoopControl {
        match *event {
            IoEvents::Quit => return LoopControl::Quit,
            IoEvents::KeyDown(key) if key == self.keys.quit => return LoopControl::Quit,
            IoEvents::KeyDown(key) if key == self.keys.toggle => {
                info!("Toggle key pressed");
                self.toggle_fullscreen(window);
            }
            IoEvents::MouseMotion(x, y, _, _) => self.mouse = (x, y),
            IoEvents::MouseButtonUp(MouseButtonId::Left(..)) => {
                info!("Left Mouse Button Up");
                self.toggle_fullscreen(window);
            }
            _ => {}
        }
        LoopControl::Continue
    }

    fn toggle_fullscreen<W: FullscreenWindow + ?Sized>(&mut self, window: &mut W) {
        // outcome is logged by the toggle; the flag moves on either way
        let _ = self.toggle.toggle(window);
    }
}
