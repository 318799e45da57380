//! Service trait definitions for dependency injection
//!
//! Display output and browser connections are abstracted through these traits
//! so the server can be exercised with mocks.

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use shared::{ClientMessage, ForumView};
use crate::error::ForumResult;

/// Turns a view model into concrete display output
#[mockall::automock]
pub trait Presenter: Send + Sync {
    /// MIME type of the produced output
    fn content_type(&self) -> &'static str;

    /// Render the whole view
    fn present(&self, view: &ForumView) -> String;
}

/// WebSocket client management service trait
#[mockall::automock]
#[async_trait]
pub trait WebSocketManager: Send + Sync {
    /// Add new WebSocket client
    async fn add_client(&self, client_id: Uuid, sender: mpsc::Sender<ClientMessage>) -> ForumResult<()>;

    /// Remove WebSocket client
    async fn remove_client(&self, client_id: Uuid) -> ForumResult<()>;

    /// Broadcast message to all connected clients, returning how many received it
    async fn broadcast(&self, message: ClientMessage) -> ForumResult<usize>;

    /// Send message to specific client
    async fn send_to_client(&self, client_id: Uuid, message: ClientMessage) -> ForumResult<()>;

    /// Get count of active clients
    async fn client_count(&self) -> usize;

    /// Get list of active client IDs
    async fn active_clients(&self) -> Vec<Uuid>;
}
