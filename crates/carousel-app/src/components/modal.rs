// crates/carousel-app/src/components/modal.rs
// Product detail modal with interactive star rating

use carousel_types::{MAX_STARS, Product, ProductId};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::SliderController;
use crate::components::stars::star_class;
use crate::modal::{ModalState, apply_rating};
use crate::platform::set_scroll_locked;

// ═══════════════════════════════════════
// SERVICE
// ═══════════════════════════════════════

/// Owns the open/closed modal state. Constructed once in the app root and
/// shared through context; the overlay it drives is rendered once and toggled.
#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<Option<ModalState>>,
    products: RwSignal<Vec<Product>>,
    slider: SliderController,
}

impl ModalService {
    pub fn new(products: RwSignal<Vec<Product>>, slider: SliderController) -> Self {
        Self {
            state: RwSignal::new(None),
            products,
            slider,
        }
    }

    pub fn open(self, id: ProductId) {
        let Some(modal) = self
            .products
            .with_untracked(|products| products.iter().find(|p| p.id == id).map(ModalState::open))
        else {
            log::warn!("Product {} not found, modal not opened", id);
            return;
        };

        log::debug!("Opening product {}", id);
        self.state.set(Some(modal));
        set_scroll_locked(true);
    }

    pub fn close(self) {
        if self.state.with_untracked(Option::is_none) {
            return;
        }
        log::debug!("Closing product modal");
        self.state.set(None);
        set_scroll_locked(false);
    }

    pub fn is_open(self) -> bool {
        self.state.with_untracked(Option::is_some)
    }

    fn hover(self, value: u8) {
        self.state.update(|s| {
            if let Some(modal) = s {
                modal.hover(value);
            }
        });
    }

    fn leave(self) {
        self.state.update(|s| {
            if let Some(modal) = s {
                modal.leave();
            }
        });
    }

    /// Write the rating into the shared product list and refresh matching cards
    fn commit(self, value: u8) {
        let committed = self
            .state
            .try_update(|s| s.as_mut().map(|modal| (modal.product_id(), modal.commit(value))));
        let Some((id, value)) = committed.flatten() else {
            return;
        };

        let found = self.products.try_update(|products| apply_rating(products, id, value));
        if found != Some(true) {
            log::warn!("Rated product {} is no longer in the catalog", id);
            return;
        }

        log::info!("Product {} rated {}/5", id, value);
        self.slider.notify_rating(id, value);
    }

    fn active_id(self) -> Option<ProductId> {
        self.state.with(|s| s.as_ref().map(ModalState::product_id))
    }

    fn highlighted(self) -> u8 {
        self.state.with(|s| s.as_ref().map_or(0, ModalState::highlighted))
    }

    fn committed(self) -> bool {
        self.state.with(|s| s.as_ref().is_some_and(ModalState::is_committed))
    }

    fn caption(self) -> String {
        self.state.with(|s| s.as_ref().map(ModalState::caption).unwrap_or_default())
    }

    fn product(self, id: ProductId) -> Option<Product> {
        self.products
            .with_untracked(|products| products.iter().find(|p| p.id == id).cloned())
    }
}

// ═══════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════

#[component]
pub fn ProductModal(service: ModalService) -> impl IntoView {
    // Only re-render the detail body when a different product is opened
    let active = Memo::new(move |_| service.active_id());

    // The backdrop closes the modal; clicks that land inside the dialog do not
    let on_backdrop_click = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            service.close();
        }
    };

    view! {
        <div
            id="product-modal-overlay"
            class=move || {
                if active.get().is_some() {
                    "fixed inset-0 bg-black/60 z-40 flex items-center justify-center p-4"
                } else {
                    "hidden"
                }
            }
            on:click=on_backdrop_click
        >
            {move || {
                active
                    .get()
                    .and_then(|id| service.product(id))
                    .map(|product| view! { <ProductDetail service=service product=product/> })
            }}
        </div>
    }
}

#[component]
fn ProductDetail(service: ModalService, product: Product) -> impl IntoView {
    let price_block = product.original_price().map(|original| {
        view! {
            <span class="ml-2 text-sm text-gray-500 line-through">
                {format!("${:.2}", original)}
            </span>
            <span class="ml-2 text-sm font-semibold text-green-600">
                {format!("SAVE {}%", product.discount_percentage)}
            </span>
        }
    });
    let brand = (!product.brand.is_empty()).then(|| {
        view! { <p class="text-sm font-medium my-2 text-gray-500">{product.brand.clone()}</p> }
    });

    view! {
        <div
            id="product-modal"
            class="w-full max-w-md md:max-w-xl lg:max-w-2xl bg-white rounded-xl overflow-hidden shadow-lg relative"
        >
            <div class="flex flex-col md:flex-row">
                <div class="md:w-1/2 bg-gray-50 flex items-center justify-center p-8">
                    <img
                        src=product.thumbnail.clone()
                        alt=product.title.clone()
                        class="w-full h-auto max-h-96 object-contain"
                    />
                </div>
                <div class="md:w-1/2 p-6">
                    <h2 class="mt-1 text-2xl font-bold text-gray-900">{product.title.clone()}</h2>
                    {brand}
                    <StarInput service=service/>
                    <p class="mt-2 text-gray-600">{product.description.clone()}</p>

                    <div class="mt-6 pt-4 border-t border-gray-200">
                        <div class="flex items-baseline">
                            <span class="text-3xl font-bold text-gray-900">
                                {format!("${}", product.price)}
                            </span>
                            {price_block}
                        </div>
                    </div>
                </div>
            </div>
            <button
                id="close-modal"
                class="absolute top-4 right-4 p-2 rounded-full bg-white shadow hover:bg-gray-100 transition-colors"
                on:click=move |_| service.close()
            >
                <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">
                    <path
                        fill-rule="evenodd"
                        d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z"
                        clip-rule="evenodd"
                    />
                </svg>
            </button>
        </div>
    }
}

#[component]
fn StarInput(service: ModalService) -> impl IntoView {
    view! {
        <div class="flex items-center mb-2" id="rating-stars" on:mouseleave=move |_| service.leave()>
            {(1..=MAX_STARS)
                .map(|value| {
                    view! {
                        <span
                            class=move || {
                                format!(
                                    "material-symbols-rounded text-lg cursor-pointer {}",
                                    star_class(value <= service.highlighted()),
                                )
                            }
                            data-rating-value=value.to_string()
                            on:mouseover=move |_| service.hover(value)
                            on:click=move |_| service.commit(value)
                        >
                            "star"
                        </span>
                    }
                })
                .collect_view()}
            <span
                class=move || {
                    if service.committed() {
                        "ml-2 text-sm font-medium text-yellow-600"
                    } else {
                        "ml-2 text-sm text-gray-500"
                    }
                }
                id="rating-text"
            >
                {move || service.caption()}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;

    fn product(id: ProductId, rating: f64) -> Product {
        Product {
            id,
            title: format!("Phone {}", id),
            brand: "Acme".to_string(),
            description: String::new(),
            thumbnail: String::new(),
            price: 299.0,
            discount_percentage: 0.0,
            rating,
        }
    }

    /// Services over products 7 and 8, with two rendered cards for product 7
    fn services() -> (ModalService, RwSignal<Vec<Product>>, RwSignal<u8>, RwSignal<u8>) {
        let products = RwSignal::new(vec![product(7, 4.2), product(8, 4.6)]);
        let slider = SliderController::new(products, &CarouselConfig::default());
        let first = RwSignal::new(4);
        let duplicate = RwSignal::new(4);
        slider.register_card(7, first);
        slider.register_card(7, duplicate);
        (ModalService::new(products, slider), products, first, duplicate)
    }

    fn ratings(products: RwSignal<Vec<Product>>) -> Vec<f64> {
        products.with_untracked(|ps| ps.iter().map(|p| p.rating).collect())
    }

    #[test]
    fn test_commit_reaches_every_card_and_product_list() {
        let owner = Owner::new();
        owner.set();
        let (modal, products, first, duplicate) = services();

        modal.open(7);
        modal.commit(2);
        modal.commit(3);

        assert_eq!(ratings(products), vec![3.0, 4.6]);
        assert_eq!(first.get_untracked(), 3);
        assert_eq!(duplicate.get_untracked(), 3);
        assert!(modal.committed());
        assert_eq!(modal.caption(), "Your rating: 3/5");
    }

    #[test]
    fn test_commit_clamps_before_writing() {
        let owner = Owner::new();
        owner.set();
        let (modal, products, first, _) = services();

        modal.open(7);
        modal.commit(9);

        assert_eq!(ratings(products), vec![5.0, 4.6]);
        assert_eq!(first.get_untracked(), 5);
    }

    #[test]
    fn test_commit_for_product_missing_from_list() {
        let owner = Owner::new();
        owner.set();
        let (modal, products, first, duplicate) = services();

        modal.open(7);
        products.update(|ps| ps.retain(|p| p.id != 7));
        modal.commit(1);

        assert_eq!(ratings(products), vec![4.6]);
        assert_eq!(first.get_untracked(), 4);
        assert_eq!(duplicate.get_untracked(), 4);
    }

    #[test]
    fn test_open_unknown_id_stays_closed() {
        let owner = Owner::new();
        owner.set();
        let (modal, products, first, _) = services();

        modal.open(42);
        assert!(!modal.is_open());

        // Stars are inert while closed
        modal.commit(1);
        assert_eq!(ratings(products), vec![4.2, 4.6]);
        assert_eq!(first.get_untracked(), 4);
    }

    #[test]
    fn test_open_and_close() {
        let owner = Owner::new();
        owner.set();
        let (modal, _, _, _) = services();

        modal.close();
        assert!(!modal.is_open());

        modal.open(8);
        assert!(modal.is_open());
        assert_eq!(modal.active_id(), Some(8));
        assert_eq!(modal.highlighted(), 5);

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.active_id(), None);

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_hover_and_leave_do_not_commit() {
        let owner = Owner::new();
        owner.set();
        let (modal, products, first, _) = services();

        modal.open(7);
        modal.hover(1);
        assert_eq!(modal.highlighted(), 1);
        modal.leave();
        assert_eq!(modal.highlighted(), 4);

        assert!(!modal.committed());
        assert_eq!(ratings(products), vec![4.2, 4.6]);
        assert_eq!(first.get_untracked(), 4);
    }
}
