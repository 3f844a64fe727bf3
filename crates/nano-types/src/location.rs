//! Validated absolute locations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::error::{BrowserError, Result};

/// An absolute, hierarchical URL that the browser can navigate to.
///
/// Equality and hashing use the canonical string form only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    canonical: String,
}

impl Location {
    /// Parse and validate an absolute location.
    ///
    /// The input must carry its own scheme; prefixing a default scheme is
    /// the caller's job. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BrowserError::invalid_location(input, "empty address"));
        }

        let url = Url::parse(trimmed).map_err(|e| BrowserError::invalid_location(input, e))?;
        if url.cannot_be_a_base() {
            return Err(BrowserError::invalid_location(
                input,
                "not a hierarchical URL",
            ));
        }
        let has_host = url.host_str().is_some_and(|h| !h.is_empty());
        if !has_host && url.scheme() != "file" {
            return Err(BrowserError::invalid_location(input, "missing host"));
        }

        let mut canonical = url.as_str().to_string();
        // The parser inserts a root path for bare hosts; keep the address as typed.
        if has_host
            && url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none()
            && !has_explicit_path(trimmed)
        {
            canonical.pop();
        }

        Ok(Self { canonical })
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

fn has_explicit_path(input: &str) -> bool {
    input
        .split_once("://")
        .is_some_and(|(_, rest)| rest.contains('/'))
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Location {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
