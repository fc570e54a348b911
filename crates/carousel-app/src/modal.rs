// crates/carousel-app/src/modal.rs
// Detail modal rating state. Exists only while the modal is open.

use carousel_types::{MAX_STARS, Product, ProductId, star_count};

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    product_id: ProductId,
    /// Rating shown in the caption: the catalog value until a star is clicked
    rating: f64,
    /// Stars currently highlighted (hover preview or current rating)
    pending: u8,
    committed: bool,
}

impl ModalState {
    pub fn open(product: &Product) -> Self {
        Self {
            product_id: product.id,
            rating: product.rating,
            pending: product.star_count(),
            committed: false,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn highlighted(&self) -> u8 {
        self.pending
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Preview `value` stars without committing
    pub fn hover(&mut self, value: u8) {
        self.pending = value.clamp(1, MAX_STARS);
    }

    /// Pointer left the star row: highlight falls back to the current rating
    pub fn leave(&mut self) {
        self.pending = star_count(self.rating);
    }

    /// Commit `value` stars; returns the clamped value that was committed
    pub fn commit(&mut self, value: u8) -> u8 {
        let value = value.clamp(1, MAX_STARS);
        self.rating = f64::from(value);
        self.pending = value;
        self.committed = true;
        value
    }

    pub fn caption(&self) -> String {
        if self.rating > 0.0 {
            format!("Your rating: {}/5", self.rating)
        } else {
            "Rate this product".to_string()
        }
    }
}

/// Write a committed rating into the shared product list.
/// Returns false when no product has `id`.
pub fn apply_rating(products: &mut [Product], id: ProductId, value: u8) -> bool {
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.rating = f64::from(value);
            true
        }
        None => false,
    }
}

/// Escape closes the modal, but only while it is open
pub fn closes_on_key(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, rating: f64) -> Product {
        Product {
            id,
            title: "Galaxy".to_string(),
            brand: "Samsung".to_string(),
            description: String::new(),
            thumbnail: String::new(),
            price: 499.0,
            discount_percentage: 10.0,
            rating,
        }
    }

    #[test]
    fn test_open_prefills_rounded_rating() {
        let state = ModalState::open(&product(1, 3.6));
        assert_eq!(state.highlighted(), 4);
        assert!(!state.is_committed());
        assert_eq!(state.caption(), "Your rating: 3.6/5");
    }

    #[test]
    fn test_unrated_caption() {
        let state = ModalState::open(&product(1, 0.0));
        assert_eq!(state.highlighted(), 0);
        assert_eq!(state.caption(), "Rate this product");
    }

    #[test]
    fn test_hover_previews_without_committing() {
        let mut state = ModalState::open(&product(1, 2.2));
        state.hover(5);
        assert_eq!(state.highlighted(), 5);
        assert!(!state.is_committed());

        state.leave();
        assert_eq!(state.highlighted(), 2);
        assert_eq!(state.caption(), "Your rating: 2.2/5");
    }

    #[test]
    fn test_commit_then_leave_keeps_committed_value() {
        let mut state = ModalState::open(&product(1, 4.9));
        assert_eq!(state.commit(2), 2);
        state.hover(4);
        state.leave();
        assert_eq!(state.highlighted(), 2);
        assert!(state.is_committed());
        assert_eq!(state.caption(), "Your rating: 2/5");
    }

    #[test]
    fn test_commit_clamps() {
        let mut state = ModalState::open(&product(1, 1.0));
        assert_eq!(state.commit(9), 5);
        assert_eq!(state.commit(0), 1);
    }

    #[test]
    fn test_apply_rating_last_commit_wins() {
        let mut products = vec![product(1, 4.5), product(2, 3.0)];
        assert!(apply_rating(&mut products, 2, 1));
        assert!(apply_rating(&mut products, 2, 4));
        assert_eq!(products[1].rating, 4.0);
        assert_eq!(products[0].rating, 4.5);
    }

    #[test]
    fn test_apply_rating_unknown_id() {
        let mut products = vec![product(1, 4.5)];
        assert!(!apply_rating(&mut products, 42, 3));
        assert_eq!(products[0].rating, 4.5);
    }

    #[test]
    fn test_escape_only_while_open() {
        assert!(closes_on_key("Escape", true));
        assert!(!closes_on_key("Escape", false));
        assert!(!closes_on_key("Enter", true));
    }
}
