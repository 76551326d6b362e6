//! Feature showcase page for Glide
//!
//! Wires the carousel to the feature catalog, the page's selection state and
//! a text detail viewer.

pub mod catalog;
pub mod layout;
pub mod showcase;
pub mod viewer;

pub use catalog::features;
pub use layout::StaticLayout;
pub use showcase::FeatureShowcase;
pub use viewer::{TextDetailViewer, ViewerInput, CLOSE_BUTTON_LABEL};

/// Rendered card width including its gap, in logical pixels.
pub const CARD_WIDTH: f32 = 320.0;
