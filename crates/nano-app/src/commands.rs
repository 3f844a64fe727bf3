//! Shell command parsing and dispatch onto the controller.

use nano_browser::Result;

use crate::app_state::Session;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Back,
    Next,
    Home,
    SetHome,
    AddFavorite(String),
    OpenFavorite(String),
    RemoveFavorite(String),
    ListFavorites,
    History,
    /// Mouse-over analogue: show a link in the status line, or clear it.
    Hover(Option<String>),
    Help,
    Quit,
}

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    None,
    Quit,
}

pub const USAGE: &str = "\
Commands:
  go <address>     open an address (a bare address works too)
  back | next      move through history
  home | sethome   open / set the home page
  fav [name]       add the current page as a favorite
  open <name>      open a favorite
  unfav <name>     remove a favorite
  favs             list favorites
  history          list visited pages
  hover [url]      show a link in the status line
  help             show this text
  quit             leave";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "go" => Self::Go(rest.to_string()),
            "back" => Self::Back,
            "next" | "forward" => Self::Next,
            "home" => Self::Home,
            "sethome" => Self::SetHome,
            "fav" => Self::AddFavorite(rest.to_string()),
            "open" => Self::OpenFavorite(rest.to_string()),
            "unfav" => Self::RemoveFavorite(rest.to_string()),
            "favs" => Self::ListFavorites,
            "history" => Self::History,
            "hover" => Self::Hover((!rest.is_empty()).then(|| rest.to_string())),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Go(trimmed.to_string()),
        };
        Some(cmd)
    }

    /// Run the command against the session.
    pub fn execute(&self, session: &mut Session) -> Result<CommandOutput> {
        let ctl = &mut session.controller;
        let output = match self {
            Self::Go(address) => {
                ctl.navigate_to(address)?;
                CommandOutput::None
            },
            Self::Back => {
                ctl.go_back()?;
                CommandOutput::None
            },
            Self::Next => {
                ctl.go_next()?;
                CommandOutput::None
            },
            Self::Home => {
                ctl.go_home()?;
                CommandOutput::None
            },
            Self::SetHome => {
                ctl.set_home()?;
                CommandOutput::None
            },
            Self::AddFavorite(name) => {
                ctl.add_favorite(name)?;
                CommandOutput::None
            },
            Self::OpenFavorite(name) => {
                ctl.go_to_favorite(name)?;
                CommandOutput::None
            },
            Self::RemoveFavorite(name) => {
                let location = ctl.remove_favorite(name)?;
                CommandOutput::Text(format!("Removed {name:?} ({location})"))
            },
            Self::ListFavorites => {
                let heading = session.labels.get("FavoriteFirstItem");
                let mut text = format!("{heading}:");
                for fav in ctl.favorites().iter() {
                    text.push_str(&format!("\n  {:?} -> {}", fav.name, fav.location));
                }
                CommandOutput::Text(text)
            },
            Self::History => {
                let history = ctl.history();
                let lines: Vec<String> = history
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(i, loc)| {
                        let marker = if Some(i) == history.cursor() { '>' } else { ' ' };
                        format!("{marker} {i:>3} {loc}")
                    })
                    .collect();
                CommandOutput::Text(lines.join("\n"))
            },
            Self::Hover(link) => {
                session.status = link.clone().unwrap_or_default();
                CommandOutput::None
            },
            Self::Help => CommandOutput::Text(USAGE.to_string()),
            Self::Quit => CommandOutput::Quit,
        };
        Ok(output)
    }

    /// Whether the view must be redrawn after the command succeeds.
    pub fn redraws(&self) -> bool {
        !matches!(
            self,
            Self::ListFavorites | Self::History | Self::Help | Self::Quit
        )
    }
}
