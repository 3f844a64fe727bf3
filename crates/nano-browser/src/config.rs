//! Browser configuration: start page, scheme handling and UI labels.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use nano_types::error::{BrowserError, Result};

pub const DEFAULT_TITLE: &str = "NanoBrowser";
pub const DEFAULT_START_PAGE: &str = "http://www.cs.duke.edu/rcd";
pub const DEFAULT_SCHEME: &str = "http://";
pub const DEFAULT_LANGUAGE: &str = "English";

/// Schemes accepted as-is when typed into the address bar.
pub const DEFAULT_KNOWN_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "file://"];

/// Built-in English labels, keyed the same way as the `[labels.<lang>]`
/// tables in the config file.
const ENGLISH_LABELS: &[(&str, &str)] = &[
    ("BackCommand", "Back"),
    ("NextCommand", "Next"),
    ("HomeCommand", "Home"),
    ("GoCommand", "Go"),
    ("AddFavoriteCommand", "Add Favorite"),
    ("SetHomeCommand", "Set Home"),
    ("FavoritePrompt", "Enter a name for this favorite"),
    ("FavoritePromptTitle", "Add Favorite"),
    ("FavoriteFirstItem", "All Favorites"),
    ("ErrorTitle", "Browser Error"),
];

/// Top-level browser configuration (`nanobrowser.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Window or shell title.
    pub title: String,
    /// Page loaded at startup. Empty disables it.
    pub start_page: String,
    /// Prefix added to addresses that carry no known scheme.
    pub default_scheme: String,
    /// Prefixes that mark an address as already complete.
    pub known_schemes: Vec<String>,
    /// Which `labels` table to use.
    pub language: String,
    /// Language -> (label key -> display text).
    pub labels: HashMap<String, HashMap<String, String>>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            start_page: DEFAULT_START_PAGE.to_string(),
            default_scheme: DEFAULT_SCHEME.to_string(),
            known_schemes: DEFAULT_KNOWN_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            language: DEFAULT_LANGUAGE.to_string(),
            labels: HashMap::new(),
        }
    }
}

impl BrowserConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.default_scheme.ends_with("://") || self.default_scheme.len() <= 3 {
            return Err(BrowserError::Config(format!(
                "default_scheme must look like \"http://\", got {:?}",
                self.default_scheme
            )));
        }
        if let Some(bad) = self.known_schemes.iter().find(|s| !s.ends_with("://")) {
            return Err(BrowserError::Config(format!(
                "known scheme {bad:?} must end with \"://\""
            )));
        }
        // Completed addresses must complete to themselves.
        let default_is_known = self
            .known_schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&self.default_scheme));
        if !default_is_known {
            return Err(BrowserError::Config(format!(
                "default_scheme {:?} must be listed in known_schemes",
                self.default_scheme
            )));
        }
        Ok(())
    }

    /// The start page, unless disabled.
    pub fn start_page(&self) -> Option<&str> {
        let page = self.start_page.trim();
        (!page.is_empty()).then_some(page)
    }

    /// Labels for the configured language over the English defaults.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::default();
        if let Some(table) = self.labels.get(&self.language) {
            labels.extend(table);
        } else if self.language != DEFAULT_LANGUAGE {
            log::warn!(
                "No labels for language {:?}, falling back to {DEFAULT_LANGUAGE}",
                self.language
            );
        }
        labels
    }
}

/// Resolved display strings, keyed like a resource bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    entries: HashMap<String, String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            entries: ENGLISH_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Labels {
    /// Display text for `key`; unknown keys render as themselves.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    fn extend(&mut self, table: &HashMap<String, String>) {
        for (key, value) in table {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}
