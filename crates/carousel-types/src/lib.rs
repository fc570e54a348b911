// crates/carousel-types/src/lib.rs
// Shared catalog types for the product carousel (native + WASM compatible)
// No browser-only dependencies allowed here

use serde::{Deserialize, Serialize};

/// Number of stars in every rating display
pub const MAX_STARS: u8 = 5;

/// Catalog identifier of a product
pub type ProductId = u64;

// ═══════════════════════════════════════
// CATALOG TYPES
// ═══════════════════════════════════════

/// Product as returned by the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    // Some catalog entries carry no brand at all
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    /// Filled stars for this product's current rating
    pub fn star_count(&self) -> u8 {
        star_count(self.rating)
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Pre-discount price, if the product is discounted
    pub fn original_price(&self) -> Option<f64> {
        if !self.has_discount() || self.discount_percentage >= 100.0 {
            return None;
        }
        Some(self.price / (1.0 - self.discount_percentage / 100.0))
    }
}

/// Round a rating to the nearest whole star, clamped to 0..=MAX_STARS
pub fn star_count(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    rating.round().clamp(0.0, f64::from(MAX_STARS)) as u8
}

/// Envelope returned by `/products/category/{category}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
}
