//! NomadPlan TUI: browse destinations and coworking spaces, review trips,
//! and edit your profile in the terminal.
//!
//! Built with `ratatui` + `crossterm`. Logs go to a file in the config
//! directory since the terminal is taken by the UI.

mod app;
mod screens;
mod widgets;

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::Result;
use nomadplan_shared::log_file_path;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    app::run()
}

/// Log to `~/.nomadplan/nomadplan-tui.log`. Logging is skipped, with a note on
/// stderr, when the file cannot be opened.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let path = match log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            return;
        }
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: cannot open {}: {e}", path.display());
            return;
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nomadplan=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

/// Create the log file, and its directory if missing.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}
