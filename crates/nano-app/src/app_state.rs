//! Per-session state shared by the shell loop and commands.

use std::path::Path;

use nano_browser::{BrowserConfig, BrowserController, Labels, Result};

/// Resolve the session config. A path given explicitly but absent on disk
/// is worth a warning: it is most likely a typo.
pub fn load_config(path: Option<&Path>) -> Result<BrowserConfig> {
    let Some(path) = path else {
        return Ok(BrowserConfig::default());
    };
    if !path.exists() {
        log::warn!(
            "Config file {} does not exist, using defaults",
            path.display()
        );
    }
    BrowserConfig::load(path)
}

/// One browsing session: the controller plus presentation-only state.
pub struct Session {
    pub controller: BrowserController,
    pub labels: Labels,
    /// Status line text (the hovered link, if any).
    pub status: String,
    pub title: String,
}

impl Session {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            controller: BrowserController::with_config(config),
            labels: config.labels(),
            status: String::new(),
            title: config.title.clone(),
        }
    }
}
