//! Foundation types for NanoBrowser.
//!
//! This crate holds the value types shared by every NanoBrowser crate:
//! the validated [`Location`] and the [`BrowserError`] taxonomy.

pub mod error;
pub mod location;

pub use error::{BrowserError, Result};
pub use location::Location;
