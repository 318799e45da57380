//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod html_presenter;
pub mod text_presenter;
pub mod update_loop;
pub mod websocket_manager;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use html_presenter::HtmlPresenter;
pub use text_presenter::TextPresenter;
pub use update_loop::UpdateLoop;
pub use websocket_manager::RealWebSocketManager;
