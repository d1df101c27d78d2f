use backend::config::WindowConfig;
use backend::system::System;
use demo::app::{App, LoopControl};
use log::{error, info, warn};
use std::path::Path;
use std::process::ExitCode;

const CONFIG_FILE: &str = "fullscreen.toml";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WindowConfig::load_or_default(Path::new(CONFIG_FILE));
    let keys = match config.key_bindings() {
        Ok(k) => k,
        Err(e) => {
            error!("Invalid key binding: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut system = match System::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Initialization failure: {e}");
            return ExitCode::FAILURE;
        }
    };
    let background = config.background_color();
    let line = config.line_color();
    let mut app = App::new(keys);

    loop {
        if let Some(event) = system.wait_io_event() {
            if app.handle_event(&event, &mut system) == LoopControl::Quit {
                break;
            }
        }

        system.clear_screen(background);
        if let Err(e) = system.draw_line((0, 0), app.mouse(), line) {
            warn!("{e}");
        }
        system.draw_to_screen();
    }

    info!("Quitting");
    ExitCode::SUCCESS
}
