//! Message types exchanged with the browser
//!
//! - `view`: the plain data description of the rendered page
//! - `client`: WebSocket messages pushed to connected browsers

pub mod view;
pub mod client;

pub use view::{ForumView, RowView, SummaryView};
pub use client::ClientMessage;
