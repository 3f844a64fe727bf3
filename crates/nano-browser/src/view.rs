//! Render-ready snapshot of controller state.

use serde::Serialize;

use crate::controller::BrowserController;

/// Derived state a presentation layer redraws after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Current address, empty before the first navigation.
    pub address: String,
    pub back_enabled: bool,
    pub next_enabled: bool,
    pub home_enabled: bool,
    /// Favorite names in display order.
    pub favorites: Vec<String>,
    pub history_len: usize,
    pub cursor: Option<usize>,
}

impl ViewState {
    pub fn capture(controller: &BrowserController) -> Self {
        Self {
            address: controller
                .current()
                .map(|l| l.to_string())
                .unwrap_or_default(),
            back_enabled: controller.can_go_back(),
            next_enabled: controller.can_go_next(),
            home_enabled: controller.has_home(),
            favorites: controller
                .favorites()
                .names()
                .map(str::to_string)
                .collect(),
            history_len: controller.history().len(),
            cursor: controller.history().cursor(),
        }
    }
}
