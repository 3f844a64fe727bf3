//! Navigation core for NanoBrowser.
//!
//! The [`BrowserController`] owns the visited-location history, the home
//! location and the favorites, and is the only thing a presentation layer
//! talks to. After each command the UI redraws from a [`ViewState`]
//! snapshot; display strings come from [`Labels`] in the [`BrowserConfig`].

pub mod config;
pub mod controller;
pub mod favorites;
pub mod history;
pub mod view;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use config::{BrowserConfig, Labels};
pub use controller::BrowserController;
pub use favorites::{Favorite, Favorites};
pub use history::NavigationHistory;
pub use nano_types::{BrowserError, Location, Result};
pub use view::ViewState;
