//! Stateless text rendering of a [`ViewState`].

use nano_browser::{Labels, ViewState};

/// Label for an affordance; disabled ones are bracketed.
fn affordance(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("[{label}]")
    }
}

/// Render the toolbar, favorites, address and status lines.
pub fn render(view: &ViewState, labels: &Labels, status: &str) -> String {
    let toolbar = [
        affordance(labels.get("BackCommand"), view.back_enabled),
        affordance(labels.get("NextCommand"), view.next_enabled),
        affordance(labels.get("HomeCommand"), view.home_enabled),
        labels.get("GoCommand").to_string(),
        labels.get("AddFavoriteCommand").to_string(),
        labels.get("SetHomeCommand").to_string(),
    ]
    .join(" | ");

    let favorites = if view.favorites.is_empty() {
        labels.get("FavoriteFirstItem").to_string()
    } else {
        format!(
            "{}: {}",
            labels.get("FavoriteFirstItem"),
            view.favorites.join(", ")
        )
    };

    format!(
        "{toolbar}\n{favorites}\n> {}\n{}",
        view.address,
        if status.is_empty() { " " } else { status }
    )
}
