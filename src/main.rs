// panedit: side-by-side text panes in the terminal

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use panedit::config::{Args, Config};
use panedit::terminal::TerminalGuard;
use panedit::App;

fn main() {
    let config = match Config::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: cannot open log file {}: {}", path.display(), e);
            std::process::exit(2);
        }
    }

    // The terminal is already restored by the time `run` returns
    if let Err(err) = run(&config) {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(config)?;

    // Declared before the terminal so it is dropped after it
    let mut guard = TerminalGuard::new();
    let mut stdout = io::stdout();
    guard.setup(&mut stdout)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    app.run(&mut terminal)?;
    Ok(())
}

/// Send logs to `path`; stdout belongs to the UI
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "panedit starting");
    Ok(())
}
