//! Service layer for the showcase core.
//!
//! Business logic that is independent of the terminal UI: the carousel
//! engine, the route history, and the deep-link selection router.

pub mod carousel;
pub mod history;
pub mod router;

// Re-export commonly used types
pub use carousel::{CarouselEngine, FixedStep, StepSizeProvider};
pub use history::History;
pub use router::{parse_selection, SelectionRouter, SERVICES_PATH};
