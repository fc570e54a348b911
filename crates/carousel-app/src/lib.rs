// crates/carousel-app/src/lib.rs
// Product carousel - Leptos WASM frontend (CSR)

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod cards;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod modal;
pub mod platform;
pub mod slider;

// Re-export shared types
pub use carousel_types::*;

use catalog::fetch_products;
use components::{LoadErrorMessage, LoadingScreen, ModalService, ProductModal, ProductSlider, SliderController};
use config::CarouselConfig;
use error::LoadError;
use modal::closes_on_key;

// ============================================================================
// Catalog State
// ============================================================================

/// Where the one catalog request stands
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// The in-memory product list (source of truth for ratings) and its load status
#[derive(Clone, Copy)]
pub struct CatalogState {
    pub products: RwSignal<Vec<Product>>,
    pub status: RwSignal<LoadStatus>,
}

impl CatalogState {
    fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            status: RwSignal::new(LoadStatus::Loading),
        }
    }
}

/// Run the single catalog request; failure is terminal for the page view
async fn load_catalog(config: CarouselConfig, catalog: CatalogState, slider: SliderController) {
    catalog.status.set(LoadStatus::Loading);
    let result = fetch_products(&config).await;
    apply_load(result, catalog, slider);
}

/// Publish the outcome of the catalog request. Either way the loading screen goes away.
fn apply_load(
    result: Result<Vec<Product>, LoadError>,
    catalog: CatalogState,
    slider: SliderController,
) {
    match result {
        Ok(products) => {
            log::info!("Loaded {} products", products.len());
            catalog.products.set(products);
            slider.rebuild();
            catalog.status.set(LoadStatus::Ready);
        }
        Err(e) => {
            log::error!("Error loading products: {}", e);
            catalog.status.set(LoadStatus::Failed(e.to_string()));
        }
    }
}

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Product carousel starting...");

    // Mount the app
    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = CarouselConfig::default();

    // UI services, built once and handed to the views that drive them
    let catalog = CatalogState::new();
    let slider = SliderController::new(catalog.products, &config);
    let modal = ModalService::new(catalog.products, slider);
    provide_context(modal);

    // Load the catalog on mount
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            load_catalog(config, catalog, slider).await;
        });
    });

    let resize_listener = window_event_listener(ev::resize, move |_| slider.viewport_resized());
    let key_listener = window_event_listener(ev::keydown, move |e| {
        if closes_on_key(&e.key(), modal.is_open()) {
            modal.close();
        }
    });
    on_cleanup(move || {
        resize_listener.remove();
        key_listener.remove();
    });

    let loading = Signal::derive(move || catalog.status.with(LoadStatus::is_loading));

    view! {
        <Title text="Smartphones"/>
        <LoadingScreen visible=loading/>
        <main class="products-grid">
            {move || match catalog.status.get() {
                LoadStatus::Loading => view! { <div></div> }.into_any(),
                LoadStatus::Ready => view! { <ProductSlider controller=slider/> }.into_any(),
                LoadStatus::Failed(message) => view! { <LoadErrorMessage message=message/> }.into_any(),
            }}
        </main>
        <ProductModal service=modal/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> (CatalogState, SliderController) {
        let catalog = CatalogState::new();
        let slider = SliderController::new(catalog.products, &CarouselConfig::default());
        (catalog, slider)
    }

    fn phones(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id,
                title: format!("Phone {}", id),
                brand: String::new(),
                description: String::new(),
                thumbnail: String::new(),
                price: 100.0,
                discount_percentage: 0.0,
                rating: 4.0,
            })
            .collect()
    }

    #[test]
    fn test_catalog_starts_loading() {
        let owner = Owner::new();
        owner.set();
        let (catalog, _) = services();
        assert!(catalog.status.get_untracked().is_loading());
    }

    #[test]
    fn test_failed_load_reports_error_and_hides_loading() {
        let owner = Owner::new();
        owner.set();
        let (catalog, slider) = services();

        apply_load(Err(LoadError::Status(404)), catalog, slider);

        let status = catalog.status.get_untracked();
        assert!(!status.is_loading());
        assert_eq!(status, LoadStatus::Failed("Cannot get products (HTTP 404)".to_string()));
        assert!(catalog.products.with_untracked(Vec::is_empty));
    }

    #[test]
    fn test_successful_load_is_ready() {
        let owner = Owner::new();
        owner.set();
        let (catalog, slider) = services();

        apply_load(Ok(phones(7)), catalog, slider);

        assert_eq!(catalog.status.get_untracked(), LoadStatus::Ready);
        let ids: Vec<_> = catalog.products.with_untracked(|ps| ps.iter().map(|p| p.id).collect());
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_successful_empty_load_is_ready() {
        let owner = Owner::new();
        owner.set();
        let (catalog, slider) = services();

        apply_load(Ok(Vec::new()), catalog, slider);

        assert_eq!(catalog.status.get_untracked(), LoadStatus::Ready);
        slider.next();
        slider.prev();
    }
}
