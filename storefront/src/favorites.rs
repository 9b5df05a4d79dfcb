//! Wishlist of menu item ids
//!
//! Plain owned state like the cart, toggled from the menu cards.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct Favorites {
    ids: HashSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item in or out of the wishlist; returns true when the item
    /// is a favorite after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("si1"));
        assert!(favorites.contains("si1"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("si1"));
        assert!(favorites.is_empty());
    }
}
