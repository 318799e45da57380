//! Test helpers for webserver service tests

use shared::{ClientMessage, ForumView};
use tokio::sync::mpsc;

/// Receive the next message, skipping the connection acknowledgement
pub async fn next_render(rx: &mut mpsc::Receiver<ClientMessage>) -> Option<ForumView> {
    while let Some(message) = rx.recv().await {
        if let ClientMessage::Render { view } = message {
            return Some(view);
        }
    }
    None
}

/// Drain everything currently queued on a client channel
pub fn drain(rx: &mut mpsc::Receiver<ClientMessage>) -> Vec<ClientMessage> {
    let mut messages = Vec::new();
    while let Ok(message) = rx.try_recv() {
        messages.push(message);
    }
    messages
}
