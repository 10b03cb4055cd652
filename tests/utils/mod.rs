pub mod hand_builders;
pub mod reference;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use hand_builders::{hand, sample_hands};
#[allow(unused_imports)]
pub use reference::reference_category;
