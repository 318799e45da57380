//! Freelancer forum webserver library
//!
//! Generates random freelancers, keeps their average hourly rate, and serves a
//! browser page that is re-rendered every time the update loop appends a new
//! freelancer.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod webserver_impl;

// Re-export main types
pub use error::{ForumError, ForumResult};
pub use webserver_impl::ForumServer;

// Re-export trait definitions
pub use traits::{Presenter, WebSocketManager};

// Re-export service implementations
pub use services::{HtmlPresenter, RealWebSocketManager, TextPresenter, UpdateLoop};
