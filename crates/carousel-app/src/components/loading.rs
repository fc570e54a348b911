// crates/carousel-app/src/components/loading.rs
// Loading overlay and inline load error

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loading-screen"
            class=move || {
                if visible.get() {
                    "fixed inset-0 bg-white/90 flex items-center justify-center z-50"
                } else {
                    "hidden"
                }
            }
        >
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-500 mx-auto"></div>
                <p class="mt-4 text-lg font-medium text-gray-700">"Loading products..."</p>
            </div>
        </div>
    }
}

#[component]
pub fn LoadErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="text-red-500 text-center p-4">
            {format!("Error loading products: {}", message)}
        </div>
    }
}
