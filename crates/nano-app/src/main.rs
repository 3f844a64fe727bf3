//! NanoBrowser text-mode entry point.
//!
//! Reads one command per line from stdin and redraws the toolbar, address
//! and status lines after each one. The config file comes from the first
//! CLI argument or `NANO_BROWSER_CONFIG`; without either, defaults are used.

mod app_state;
mod commands;
mod render;
mod shell;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use app_state::Session;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NANO_BROWSER_CONFIG").ok())
        .map(PathBuf::from);
    let config = app_state::load_config(config_path.as_deref()).with_context(|| {
        let shown = config_path.as_deref().unwrap_or(Path::new("<defaults>"));
        format!("loading config {}", shown.display())
    })?;
    log::info!("Starting {} ({})", config.title, config.language);

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if let Some(start) = config.start_page() {
        shell::open_start_page(&mut session, start, &mut stdout)?;
    }
    shell::run(&mut session, stdin.lock(), &mut stdout)?;

    log::info!(
        "Session ended after {} page(s)",
        session.controller.history().len()
    );
    Ok(())
}
