// crates/carousel-app/src/components/slider.rs
// Auto-rotating product slider: controller service plus its view

use carousel_types::{Product, ProductId};
use leptos::prelude::*;

use crate::cards::CardRegistry;
use crate::components::{ModalService, StarRow};
use crate::config::{Breakpoints, CarouselConfig};
use crate::platform::{Interval, Timeout, viewport_width};
use crate::slider::{Debounce, SliderState};

// ═══════════════════════════════════════
// CONTROLLER
// ═══════════════════════════════════════

/// Owns the slider state, its timers and the rendered card handles.
/// Constructed once in the app root and handed to the views and the modal service.
#[derive(Clone, Copy)]
pub struct SliderController {
    state: RwSignal<SliderState<Interval>, LocalStorage>,
    resize: StoredValue<Debounce<Timeout>, LocalStorage>,
    cards: StoredValue<CardRegistry<RwSignal<u8>>>,
    products: RwSignal<Vec<Product>>,
    rotation_interval_ms: u32,
    resize_debounce_ms: u32,
    breakpoints: Breakpoints,
}

impl SliderController {
    pub fn new(products: RwSignal<Vec<Product>>, config: &CarouselConfig) -> Self {
        Self {
            state: RwSignal::new_local(SliderState::new()),
            resize: StoredValue::new_local(Debounce::new()),
            cards: StoredValue::new(CardRegistry::new()),
            products,
            rotation_interval_ms: config.rotation_interval_ms,
            resize_debounce_ms: config.resize_debounce_ms,
            breakpoints: config.breakpoints,
        }
    }

    fn rotation_timer(self) -> Interval {
        let state = self.state;
        Interval::new(self.rotation_interval_ms, move || {
            state.update(|s| s.next());
        })
    }

    /// Re-partition the current product list for the current viewport
    pub fn rebuild(self) {
        let per_slide = self.breakpoints.items_per_slide(viewport_width());
        self.products.with_untracked(|products| {
            self.state.update(|s| {
                s.rebuild(products, per_slide);
                s.resume_after_rebuild(|| self.rotation_timer());
                log::debug!(
                    "Slider rebuilt: {} per slide, {} slides",
                    s.items_per_slide(),
                    s.group_count()
                );
            });
        });
    }

    /// Collapse a burst of resize events into one rebuild
    pub fn viewport_resized(self) {
        let delay = self.resize_debounce_ms;
        self.resize.update_value(|debounce| {
            debounce.schedule(|| Timeout::new(delay, move || self.rebuild()));
        });
    }

    pub fn next(self) {
        self.state.update(|s| s.next());
    }

    pub fn prev(self) {
        self.state.update(|s| s.prev());
    }

    pub fn pointer_enter(self) {
        self.state.update(|s| s.pointer_enter());
    }

    pub fn pointer_leave(self) {
        self.state.update(|s| s.pointer_leave(|| self.rotation_timer()));
    }

    /// Track a rendered card's star display under its product id
    pub fn register_card(self, id: ProductId, stars: RwSignal<u8>) {
        self.cards.update_value(|cards| cards.register(id, stars));
    }

    /// Refresh the stars on every rendered card for `id`
    pub fn notify_rating(self, id: ProductId, filled: u8) {
        let updated = self.cards.with_value(|cards| cards.show_rating(id, filled));
        log::debug!("Rating for product {} pushed to {} card(s)", id, updated);
    }

    fn transform(self) -> String {
        self.state.with(|s| s.transform())
    }

    fn generation(self) -> u64 {
        self.state.with(|s| s.generation())
    }

    /// Build every slide and re-register the card handles
    fn render_slides(self) -> impl IntoView {
        let groups = self.state.with_untracked(|s| s.groups().to_vec());
        self.cards.update_value(|cards| cards.clear());

        groups
            .into_iter()
            .map(|group| {
                let cards = group
                    .into_iter()
                    .map(|product| {
                        let stars = RwSignal::new(product.star_count());
                        self.register_card(product.id, stars);
                        view! { <ProductCard product=product stars=stars/> }
                    })
                    .collect_view();
                view! {
                    <div class="slider-slide min-w-full p-4">
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {cards}
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}

// ═══════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════

#[component]
pub fn ProductSlider(controller: SliderController) -> impl IntoView {
    // Cards are rebuilt only when the slide groups change, not on every index move
    let generation = Memo::new(move |_| controller.generation());

    view! {
        <div
            class="slider-container relative max-w-6xl mx-auto my-8 overflow-hidden rounded-xl"
            on:pointerenter=move |_| controller.pointer_enter()
            on:pointerleave=move |_| controller.pointer_leave()
        >
            <div
                class="slider-track flex transition-transform duration-300 ease-in-out"
                style:transform=move || controller.transform()
            >
                {move || {
                    let _ = generation.get(); // Subscribe to rebuilds
                    controller.render_slides()
                }}
            </div>
            <button
                class="slider-prev absolute left-0 top-1/2 -translate-y-1/2 bg-white/80 text-gray-800 rounded-full p-2 shadow-md z-10 hover:bg-blue-600 hover:text-white"
                on:click=move |_| controller.prev()
            >
                <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"/>
                </svg>
            </button>
            <button
                class="slider-next absolute right-0 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-blue-600 hover:text-white text-gray-800 rounded-full p-2 shadow-md z-10"
                on:click=move |_| controller.next()
            >
                <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
                </svg>
            </button>
        </div>
    }
}

#[component]
fn ProductCard(product: Product, stars: RwSignal<u8>) -> impl IntoView {
    let modal = expect_context::<ModalService>();
    let id = product.id;
    let discount = product.has_discount().then(|| {
        view! {
            <span class="text-sm font-semibold text-green-600">
                {format!("SAVE {}%", product.discount_percentage)}
            </span>
        }
    });

    view! {
        <div
            data-id=id.to_string()
            class="product-card bg-white rounded-xl shadow-md overflow-hidden h-full flex flex-col cursor-pointer hover:shadow-lg transition-shadow"
            on:click=move |_| modal.open(id)
        >
            <img src=product.thumbnail.clone() alt=product.title.clone() class="w-full h-48 object-contain p-4"/>
            <div class="p-6 flex-grow">
                <h3 class="font-bold text-lg mb-2 truncate">{product.title.clone()}</h3>
                <StarRow filled=stars/>
                <div class="flex justify-between items-center mt-auto">
                    <span class="font-bold text-lg">{format!("${}", product.price)}</span>
                    {discount}
                </div>
            </div>
        </div>
    }
}
