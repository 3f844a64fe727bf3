//! Browser controller: the single entry point for navigation intents.
//!
//! Raw address-bar text comes in through [`BrowserController::navigate_to`];
//! everything else (back/next, home, favorites) is expressed in terms of the
//! owned [`NavigationHistory`]. Every failing command leaves the controller
//! exactly as it was.

use nano_types::error::{BrowserError, Result};
use nano_types::Location;

use crate::config::{BrowserConfig, DEFAULT_KNOWN_SCHEMES, DEFAULT_SCHEME};
use crate::favorites::Favorites;
use crate::history::NavigationHistory;
use crate::view::ViewState;

/// Navigation state for one browsing session.
#[derive(Debug, Clone)]
pub struct BrowserController {
    history: NavigationHistory,
    home: Option<Location>,
    favorites: Favorites,
    default_scheme: String,
    known_schemes: Vec<String>,
}

impl Default for BrowserController {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserController {
    pub fn new() -> Self {
        Self {
            history: NavigationHistory::new(),
            home: None,
            favorites: Favorites::new(),
            default_scheme: DEFAULT_SCHEME.to_string(),
            known_schemes: DEFAULT_KNOWN_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create a controller that completes addresses per `config`.
    pub fn with_config(config: &BrowserConfig) -> Self {
        Self {
            default_scheme: config.default_scheme.clone(),
            known_schemes: config.known_schemes.clone(),
            ..Self::new()
        }
    }

    /// Prefix the default scheme unless `raw` already starts with a known one.
    pub fn complete_address(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let has_scheme = self.known_schemes.iter().any(|scheme| {
            trimmed
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });
        if has_scheme {
            trimmed.to_string()
        } else {
            format!("{}{}", self.default_scheme, trimmed)
        }
    }

    /// Navigate to user-supplied text and return the new current location.
    ///
    /// This is the only way entries enter the history. Forward history is
    /// discarded on success; on failure nothing changes.
    pub fn navigate_to(&mut self, raw: &str) -> Result<&Location> {
        if raw.trim().is_empty() {
            return Err(BrowserError::invalid_location(raw, "empty address"));
        }
        let completed = self.complete_address(raw);
        let location = Location::parse(&completed).inspect_err(|e| {
            log::warn!("Rejected address {raw:?}: {e}");
        })?;
        log::debug!("Navigating to {location}");
        self.history.append(location);
        self.history.current().ok_or(BrowserError::NoCurrentLocation)
    }

    pub fn go_back(&mut self) -> Result<&Location> {
        self.history.back()
    }

    pub fn go_next(&mut self) -> Result<&Location> {
        self.history.next()
    }

    /// Navigate to the home location. Behaves like typing it: a new entry
    /// is appended and forward history is dropped.
    pub fn go_home(&mut self) -> Result<&Location> {
        let home = self.home.as_ref().ok_or(BrowserError::NoHomeSet)?;
        let address = home.as_str().to_string();
        self.navigate_to(&address)
    }

    /// Snapshot the current location as home.
    pub fn set_home(&mut self) -> Result<()> {
        let current = self
            .history
            .current()
            .ok_or(BrowserError::NoCurrentLocation)?
            .clone();
        log::debug!("Home set to {current}");
        self.home = Some(current);
        Ok(())
    }

    /// Bind `name` to the current location, replacing any previous binding.
    pub fn add_favorite(&mut self, name: &str) -> Result<()> {
        let current = self
            .history
            .current()
            .ok_or(BrowserError::NoCurrentLocation)?
            .clone();
        log::debug!("Favorite {name:?} -> {current}");
        self.favorites.insert(name, current);
        Ok(())
    }

    pub fn remove_favorite(&mut self, name: &str) -> Result<Location> {
        self.favorites
            .remove(name)
            .ok_or_else(|| BrowserError::UnknownFavorite(name.to_string()))
    }

    /// Navigate to a favorite. Like [`Self::go_home`], this appends a new
    /// entry rather than revisiting the old one.
    pub fn go_to_favorite(&mut self, name: &str) -> Result<&Location> {
        let target = self
            .favorites
            .get(name)
            .ok_or_else(|| BrowserError::UnknownFavorite(name.to_string()))?;
        let address = target.as_str().to_string();
        self.navigate_to(&address)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_next(&self) -> bool {
        self.history.can_go_next()
    }

    pub fn has_home(&self) -> bool {
        self.home.is_some()
    }

    pub fn current(&self) -> Option<&Location> {
        self.history.current()
    }

    pub fn home(&self) -> Option<&Location> {
        self.home.as_ref()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Everything a UI needs to redraw after a command.
    pub fn view_state(&self) -> ViewState {
        ViewState::capture(self)
    }
}
