// crates/carousel-app/src/config.rs
// Carousel configuration (built once at startup, shared through context)

use serde::Deserialize;

/// Top-level config structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    // ── Catalog
    pub api_base: String,
    pub category: String,

    // ── Slider timing
    pub rotation_interval_ms: u32,
    pub resize_debounce_ms: u32,

    // ── Layout
    pub breakpoints: Breakpoints,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            api_base: "https://dummyjson.com".to_string(),
            category: "smartphones".to_string(),
            rotation_interval_ms: 5000,
            resize_debounce_ms: 250,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl CarouselConfig {
    /// Full URL of the category listing endpoint
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/products/category/{}",
            self.api_base.trim_end_matches('/'),
            self.category
        )
    }
}

/// Viewport widths (in CSS pixels) at which more cards fit per slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub desktop_min: u32,
    pub tablet_min: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            desktop_min: 1024,
            tablet_min: 768,
        }
    }
}

impl Breakpoints {
    /// Cards per slide for a viewport width: 3 on desktop, 2 on tablet, else 1
    pub fn items_per_slide(&self, width: u32) -> usize {
        if width >= self.desktop_min {
            3
        } else if width >= self.tablet_min {
            2
        } else {
            1
        }
    }
}
