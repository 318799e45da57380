//! Shared types for the freelancer forum
//!
//! Contains the record and view-model types that cross the browser boundary,
//! the browser message protocol, shared errors and tracing setup.

pub mod types;
pub mod errors;
pub mod messages;
pub mod logging;

pub use types::*;
pub use errors::*;

pub use messages::{ClientMessage, ForumView, RowView, SummaryView};
