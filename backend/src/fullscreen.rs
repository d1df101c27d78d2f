use crate::error::WindowModeError;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMode {
    /// Plain window, no particular resolution requested.
    Windowed,
    /// Borderless window covering the desktop at its current resolution.
    Desktop,
}

/// Anything whose fullscreen mode can be switched.
///
/// On failure the error string is the windowing layer's last error text.
pub trait FullscreenWindow {
    fn set_fullscreen_mode(&mut self, mode: FullscreenMode) -> Result<(), String>;
}

/// Requests the mode opposite to `full_screen` and logs the outcome.
///
/// The result is informational only: nothing is retried or rolled back.
pub fn toggle_fullscreen<W: FullscreenWindow + ?Sized>(
    window: &mut W,
    full_screen: bool,
) -> Result<FullscreenMode, WindowModeError> {
    let requested = if full_screen {
        FullscreenMode::Windowed
    } else {
        FullscreenMode::Desktop
    };

    match window.set_fullscreen_mode(requested) {
        Ok(()) => {
            info!("Full screen toggle successful");
            Ok(requested)
        }
        Err(reason) => {
            let err = WindowModeError { requested, reason };
            warn!("{err}");
            Err(err)
        }
    }
}

/// Owns the "window is fullscreen" flag.
#[derive(Debug, Default)]
pub struct FullscreenToggle {
    full_screen: bool,
}

impl FullscreenToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Switches `window` to the other mode and flips the flag.
    ///
    /// The flag is flipped even when the window refused the change, so after
    /// a failure it may disagree with what is on screen until the next toggle.
    pub fn toggle<W: FullscreenWindow + ?Sized>(
        &mut self,
        window: &mut W,
    ) -> Result<FullscreenMode, WindowModeError> {
        let outcome = toggle_fullscreen(window, self.full_screen);
        self.full_screen = !self.full_screen;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every request; fails the ones whose index is in `fail_at`.
    #[derive(Default)]
    struct FakeWindow {
        requests: Vec<FullscreenMode>,
        fail_at: Vec<usize>,
    }

    impl FullscreenWindow for FakeWindow {
        fn set_fullscreen_mode(&mut self, mode: FullscreenMode) -> Result<(), String> {
            let idx = self.requests.len();
            self.requests.push(mode);
            if self.fail_at.contains(&idx) {
                Err("No display attached".to_string())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn starts_windowed() {
        assert!(!FullscreenToggle::new().is_full_screen());
    }

    #[test]
    fn windowed_requests_desktop_fullscreen() {
        let mut window = FakeWindow::default();
        assert_eq!(toggle_fullscreen(&mut window, false), Ok(FullscreenMode::Desktop));
        assert_eq!(window.requests, vec![FullscreenMode::Desktop]);
    }

    #[test]
    fn fullscreen_requests_windowed() {
        let mut window = FakeWindow::default();
        assert_eq!(toggle_fullscreen(&mut window, true), Ok(FullscreenMode::Windowed));
        assert_eq!(window.requests, vec![FullscreenMode::Windowed]);
    }

    #[test]
    fn failure_carries_window_error_text() {
        let mut window = FakeWindow {
            fail_at: vec![0],
            ..Default::default()
        };
        let err = toggle_fullscreen(&mut window, false).unwrap_err();
        assert_eq!(err.requested, FullscreenMode::Desktop);
        assert_eq!(err.reason, "No display attached");
        assert_eq!(
            err.to_string(),
            "Full screen toggle error: No display attached"
        );
    }

    #[test]
    fn failed_toggle_still_flips_flag() {
        // Known desync: the flag advances although the window stayed windowed.
        let mut window = FakeWindow {
            fail_at: vec![0],
            ..Default::default()
        };
        let mut toggle = FullscreenToggle::new();
        assert!(toggle.toggle(&mut window).is_err());
        assert!(toggle.is_full_screen());

        // The next request is based on the flag, not on the real window mode.
        assert!(toggle.toggle(&mut window).is_ok());
        assert!(!toggle.is_full_screen());
        assert_eq!(
            window.requests,
            vec![FullscreenMode::Desktop, FullscreenMode::Windowed]
        );
    }

    #[test]
    fn flag_parity_follows_trigger_count() {
        for n in 0..16usize {
            let mut window = FakeWindow {
                fail_at: (0..n).filter(|i| i % 3 == 1).collect(),
                ..Default::default()
            };
            let mut toggle = FullscreenToggle::new();
            for _ in 0..n {
                let _ = toggle.toggle(&mut window);
            }
            assert_eq!(toggle.is_full_screen(), n % 2 == 1, "after {n} toggles");
            assert_eq!(window.requests.len(), n);
        }
    }

    #[test]
    fn two_toggles_restore_flag() {
        for fail_at in [vec![], vec![0], vec![1], vec![0, 1]] {
            let mut window = FakeWindow {
                fail_at,
                ..Default::default()
            };
            let mut toggle = FullscreenToggle::new();
            let _ = toggle.toggle(&mut window);
            let _ = toggle.toggle(&mut window);
            assert!(!toggle.is_full_screen());
        }
    }
}
