// crates/carousel-app/src/components/stars.rs
// Read-only 5-star display used by product cards

use carousel_types::MAX_STARS;
use leptos::prelude::*;

/// Tailwind classes for a star that is (or is not) filled
pub fn star_class(filled: bool) -> &'static str {
    if filled { "text-yellow-400" } else { "text-gray-300" }
}

#[component]
pub fn StarRow(#[prop(into)] filled: Signal<u8>) -> impl IntoView {
    view! {
        <div class="rating-stars flex items-center mb-2">
            {(0..MAX_STARS)
                .map(|i| {
                    view! {
                        <span class=move || {
                            format!("material-symbols-rounded text-sm {}", star_class(i < filled.get()))
                        }>
                            "star"
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
