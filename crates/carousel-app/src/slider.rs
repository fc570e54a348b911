// crates/carousel-app/src/slider.rs
// Slider pagination and rotation state (no DOM access; driven by components::slider)

use carousel_types::Product;

/// Split `items` into consecutive groups of `per_slide`; the last group may be shorter.
/// A `per_slide` of 0 is treated as 1.
pub fn partition<T: Clone>(items: &[T], per_slide: usize) -> Vec<Vec<T>> {
    items
        .chunks(per_slide.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Slide groups, current position and the live rotation timer.
///
/// `H` is the rotation timer handle. Dropping a handle must cancel its timer,
/// which is how `gloo_timers::callback::Interval` behaves.
pub struct SliderState<H> {
    current_index: usize,
    groups: Vec<Vec<Product>>,
    items_per_slide: usize,
    rotation: Option<H>,
    hovered: bool,
    // Bumped on every rebuild so views can re-render cards only when groups change
    generation: u64,
}

impl<H> Default for SliderState<H> {
    fn default() -> Self {
        Self {
            current_index: 0,
            groups: Vec::new(),
            items_per_slide: 1,
            rotation: None,
            hovered: false,
            generation: 0,
        }
    }
}

impl<H> SliderState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-partition from scratch and return to the first slide
    pub fn rebuild(&mut self, products: &[Product], items_per_slide: usize) {
        self.items_per_slide = items_per_slide.clamp(1, 3);
        self.groups = partition(products, self.items_per_slide);
        self.current_index = 0;
        self.generation += 1;
    }

    /// Jump to `index`, wrapping in both directions. No-op without groups.
    pub fn go_to(&mut self, index: isize) {
        let len = self.groups.len();
        if len == 0 {
            return;
        }
        self.current_index = index.rem_euclid(len as isize) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_index as isize - 1);
    }

    /// Start or stop auto-rotation.
    ///
    /// Any existing timer is dropped before `start` is called, so at most one
    /// handle is ever alive. Rotation never starts when there is nothing to
    /// rotate through.
    pub fn set_rotating(&mut self, on: bool, start: impl FnOnce() -> H) {
        self.stop_rotation();
        if on && !self.groups.is_empty() {
            self.rotation = Some(start());
        }
    }

    /// Pointer entered the slider: pause rotation
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.stop_rotation();
    }

    // Dropping the handle cancels the timer
    fn stop_rotation(&mut self) {
        self.rotation = None;
    }

    /// Pointer left the slider: resume rotation
    pub fn pointer_leave(&mut self, start: impl FnOnce() -> H) {
        self.hovered = false;
        self.set_rotating(true, start);
    }

    /// Rotation restarts after a rebuild unless the pointer is over the slider
    pub fn resume_after_rebuild(&mut self, start: impl FnOnce() -> H) {
        let on = !self.hovered;
        self.set_rotating(on, start);
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn groups(&self) -> &[Vec<Product>] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn items_per_slide(&self) -> usize {
        self.items_per_slide
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// CSS transform for the slider track
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.current_index * 100)
    }
}

/// Trailing-edge debounce over a cancel-on-drop timer handle
pub struct Debounce<H> {
    pending: Option<H>,
}

impl<H> Default for Debounce<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Debounce<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending timer with a fresh one. A handle whose timer has
    /// already fired is simply dropped on the next call.
    pub fn schedule(&mut self, start: impl FnOnce() -> H) {
        self.pending = None;
        self.pending = Some(start());
    }
}
