// crates/carousel-app/src/components/mod.rs
// View components for the product carousel

mod loading;
mod modal;
mod slider;
mod stars;

pub use loading::{LoadErrorMessage, LoadingScreen};
pub use modal::{ModalService, ProductModal};
pub use slider::{ProductSlider, SliderController};
pub use stars::StarRow;
