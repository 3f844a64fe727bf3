//! Navigation history: visited locations plus a cursor.

use nano_types::error::{BrowserError, Result};
use nano_types::Location;

/// Ordered list of visited locations with a cursor on the displayed one.
///
/// Revisiting a location adds a new entry; entries are never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: Vec<Location>,
    /// `None` exactly when `entries` is empty.
    cursor: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new navigation. Forward entries past the cursor are dropped
    /// before the location is pushed.
    pub fn append(&mut self, location: Location) {
        if let Some(cursor) = self.cursor {
            let discarded = self.entries.len() - (cursor + 1);
            if discarded > 0 {
                log::debug!("Discarding {discarded} forward history entries");
            }
            self.entries.truncate(cursor + 1);
        }
        log::debug!("History append: {location}");
        self.entries.push(location);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry and return the now-current location.
    pub fn back(&mut self) -> Result<&Location> {
        let cursor = match self.cursor {
            Some(c) if c > 0 => c - 1,
            _ => return Err(BrowserError::NoPreviousEntry),
        };
        self.cursor = Some(cursor);
        log::debug!("History back to index {cursor}");
        Ok(&self.entries[cursor])
    }

    /// Step forward one entry and return the now-current location.
    pub fn next(&mut self) -> Result<&Location> {
        let cursor = match self.cursor {
            Some(c) if c + 1 < self.entries.len() => c + 1,
            _ => return Err(BrowserError::NoNextEntry),
        };
        self.cursor = Some(cursor);
        log::debug!("History next to index {cursor}");
        Ok(&self.entries[cursor])
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// The displayed location, if any navigation has happened.
    pub fn current(&self) -> Option<&Location> {
        self.cursor.map(|c| &self.entries[c])
    }

    /// Index of the displayed entry.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn urls(history: &NavigationHistory) -> Vec<&str> {
        history.entries().iter().map(Location::as_str).collect()
    }

    #[test]
    fn empty_history_has_no_current() {
        let history = NavigationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
        assert_eq!(history.cursor(), None);
        assert!(!history.can_go_back());
        assert!(!history.can_go_next());
    }

    #[test]
    fn append_moves_cursor_to_tail() {
        let mut history = NavigationHistory::new();
        history.append(loc("http://a.com"));
        history.append(loc("http://b.com"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.current().unwrap().as_str(), "http://b.com");
    }

    #[test]
    fn back_on_empty_history_fails() {
        let mut history = NavigationHistory::new();
        assert!(matches!(history.back(), Err(BrowserError::NoPreviousEntry)));
        assert!(matches!(history.next(), Err(BrowserError::NoNextEntry)));
    }

    #[test]
    fn back_at_first_entry_fails_without_moving() {
        let mut history = NavigationHistory::new();
        history.append(loc("http://a.com"));

        assert!(matches!(history.back(), Err(BrowserError::NoPreviousEntry)));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn next_at_tail_fails_without_moving() {
        let mut history = NavigationHistory::new();
        history.append(loc("http://a.com"));
        history.append(loc("http://b.com"));

        assert!(matches!(history.next(), Err(BrowserError::NoNextEntry)));
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn back_and_next_move_cursor() {
        let mut history = NavigationHistory::new();
        history.append(loc("http://a.com"));
        history.append(loc("http://b.com"));

        assert_eq!(history.back().unwrap().as_str(), "http://a.com");
        assert!(!history.can_go_back());
        assert!(history.can_go_next());

        assert_eq!(history.next().unwrap().as_str(), "http://b.com");
        assert!(history.can_go_back());
        assert!(!history.can_go_next());
    }

    #[test]
    fn append_after_back_truncates_forward_entries() {
        let mut history = NavigationHistory::new();
        history.append(loc("http://a.com"));
        history.append(loc("http://b.com"));
        history.append(loc("http://c.com"));
        history.back().unwrap();
        history.back().unwrap();

        history.append(loc("http://d.com"));
        assert_eq!(urls(&history), vec!["http://a.com", "http://d.com"]);
        assert!(!history.can_go_next());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = NavigationHistory::new();
        history.append(loc("http://a.com"));
        history.append(loc("http://a.com"));
        assert_eq!(history.len(), 2);
        assert!(history.can_go_back());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_location() -> impl Strategy<Value = Location> {
            "[a-z]{3,10}".prop_map(|s| loc(&format!("http://{s}.com")))
        }

        #[derive(Debug, Clone)]
        enum Op {
            Append(Location),
            Back,
            Next,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                arb_location().prop_map(Op::Append),
                Just(Op::Back),
                Just(Op::Next),
            ]
        }

        proptest! {
            #[test]
            fn cursor_tracks_tail_after_appends(
                locations in proptest::collection::vec(arb_location(), 1..20),
            ) {
                let mut history = NavigationHistory::new();
                for (i, location) in locations.iter().enumerate() {
                    history.append(location.clone());
                    prop_assert_eq!(history.len(), i + 1);
                    prop_assert_eq!(history.cursor(), Some(i));
                }
            }

            #[test]
            fn cursor_always_in_bounds(ops in proptest::collection::vec(arb_op(), 0..40)) {
                let mut history = NavigationHistory::new();
                for op in ops {
                    match op {
                        Op::Append(location) => history.append(location),
                        Op::Back => { let _ = history.back(); },
                        Op::Next => { let _ = history.next(); },
                    }
                    match history.cursor() {
                        Some(c) => prop_assert!(c < history.len()),
                        None => prop_assert!(history.is_empty()),
                    }
                    prop_assert_eq!(
                        history.can_go_back(),
                        history.cursor().is_some_and(|c| c > 0)
                    );
                    prop_assert_eq!(
                        history.can_go_next(),
                        history.cursor().is_some_and(|c| c + 1 < history.len())
                    );
                }
            }

            #[test]
            fn back_then_next_is_identity(
                locations in proptest::collection::vec(arb_location(), 2..10),
            ) {
                let mut history = NavigationHistory::new();
                for location in &locations {
                    history.append(location.clone());
                }
                let before = history.current().cloned();
                history.back().unwrap();
                history.next().unwrap();
                prop_assert_eq!(history.current().cloned(), before);
            }

            #[test]
            fn failed_moves_leave_state_unchanged(ops in proptest::collection::vec(arb_op(), 0..30)) {
                let mut history = NavigationHistory::new();
                for op in ops {
                    let before = (history.cursor(), history.len());
                    let failed = match op {
                        Op::Append(location) => { history.append(location); false },
                        Op::Back => history.back().is_err(),
                        Op::Next => history.next().is_err(),
                    };
                    if failed {
                        prop_assert_eq!((history.cursor(), history.len()), before);
                    }
                }
            }
        }
    }
}
