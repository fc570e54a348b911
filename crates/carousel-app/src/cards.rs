// crates/carousel-app/src/cards.rs
// Product id -> rendered card handles, rebuilt by the slider on every render

use std::collections::HashMap;

use carousel_types::ProductId;
use leptos::prelude::*;

/// A rendered card's star display
pub trait StarDisplay {
    fn show_stars(&self, filled: u8);
}

impl StarDisplay for RwSignal<u8> {
    fn show_stars(&self, filled: u8) {
        self.set(filled);
    }
}

/// Every rendered card handle, keyed by the product it shows.
/// The same product may be rendered by more than one card.
#[derive(Debug)]
pub struct CardRegistry<H> {
    cards: HashMap<ProductId, Vec<H>>,
}

impl<H> Default for CardRegistry<H> {
    fn default() -> Self {
        Self { cards: HashMap::new() }
    }
}

impl<H: StarDisplay> CardRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all handles ahead of a re-render
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn register(&mut self, id: ProductId, handle: H) {
        self.cards.entry(id).or_default().push(handle);
    }

    /// Push a new star count to every card showing `id`. Returns how many were updated.
    pub fn show_rating(&self, id: ProductId, filled: u8) -> usize {
        let Some(handles) = self.cards.get(&id) else {
            return 0;
        };
        for handle in handles {
            handle.show_stars(filled);
        }
        handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingCard {
        shown: Rc<Cell<Option<u8>>>,
    }

    impl StarDisplay for RecordingCard {
        fn show_stars(&self, filled: u8) {
            self.shown.set(Some(filled));
        }
    }

    #[test]
    fn test_show_rating_reaches_every_card_with_id() {
        let mut registry = CardRegistry::new();
        let first = RecordingCard::default();
        let duplicate = RecordingCard::default();
        let other = RecordingCard::default();
        registry.register(7, first.clone());
        registry.register(7, duplicate.clone());
        registry.register(8, other.clone());

        assert_eq!(registry.show_rating(7, 2), 2);
        assert_eq!(first.shown.get(), Some(2));
        assert_eq!(duplicate.shown.get(), Some(2));
        assert_eq!(other.shown.get(), None);
    }

    #[test]
    fn test_show_rating_unknown_id() {
        let registry: CardRegistry<RecordingCard> = CardRegistry::new();
        assert_eq!(registry.show_rating(99, 5), 0);
    }

    #[test]
    fn test_clear_forgets_old_render() {
        let mut registry = CardRegistry::new();
        let stale = RecordingCard::default();
        registry.register(1, stale.clone());

        registry.clear();
        assert_eq!(registry.show_rating(1, 4), 0);
        assert_eq!(stale.shown.get(), None);
    }
}
