//! Named favorite locations.

use nano_types::Location;

/// A favorite: a user-chosen name bound to a captured location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub name: String,
    pub location: Location,
}

/// Favorites keyed by name, listed in the order names were first added.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    items: Vec<Favorite>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `location`. An existing name keeps its position and
    /// gets the new target. Returns the previous target, if any.
    pub fn insert(&mut self, name: &str, location: Location) -> Option<Location> {
        match self.items.iter_mut().find(|f| f.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.location, location)),
            None => {
                self.items.push(Favorite {
                    name: name.to_string(),
                    location,
                });
                None
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.items
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.location)
    }

    /// Remove a favorite by name, returning its location.
    pub fn remove(&mut self, name: &str) -> Option<Location> {
        let idx = self.items.iter().position(|f| f.name == name)?;
        Some(self.items.remove(idx).location)
    }

    /// Names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|f| f.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
