//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod average;
pub mod catalog;
pub mod generator;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use average::AverageRate;
pub use catalog::Catalog;
pub use generator::RecordGenerator;
pub use state::ForumState;
pub use view::render;
