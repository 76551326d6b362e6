//! Drag-constrained carousel with elastic snap-back.
//!
//! The pieces, bottom-up:
//! - [`bounds`]: how far the strip may travel, from measured layout
//! - [`policy`]: where a released drag comes to rest, and the live elastic
//!   constraint while dragging
//! - [`CarouselEngine`]: position state and the idle/dragging/settling phases
//! - [`CarouselSurface`]: binds the engine to pointer, resize and frame events
//!
//! Items, page selection and the detail viewer contract live here too since
//! the surface reports selections by item index.

pub mod bounds;
mod config;
mod detail;
mod engine;
mod item;
mod measurer;
pub mod policy;
mod selection;
mod surface;

pub use bounds::{compute_bound, measure_bounds, BoundsReport};
pub use config::{CarouselConfig, DEFAULT_DRAG_ELASTICITY, DEFAULT_ITEM_WIDTH, GAP_CORRECTION};
pub use detail::{CloseCallback, DetailRequest, DetailViewer};
pub use engine::{CarouselEngine, CarouselPhase, CarouselState};
pub use item::CarouselItem;
pub use measurer::LayoutMeasurer;
pub use policy::{apply_elasticity, resolve_drag_end};
pub use selection::SelectionState;
pub use surface::{CarouselSurface, CursorIcon, ResizeEvents};
