//! WebSocket client management service
//!
//! Manages WebSocket connections and broadcasting to browser clients

use async_trait::async_trait;
use chrono::Utc;
use shared::{ClientMessage, Component, forum_debug, forum_info, forum_warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::error::{ForumError, ForumResult};
use crate::traits::WebSocketManager;

/// WebSocket client connection info
#[derive(Debug)]
struct ClientConnection {
    sender: mpsc::Sender<ClientMessage>,
}

/// Real WebSocket manager implementation
#[derive(Clone, Default)]
pub struct RealWebSocketManager {
    /// Active client connections
    clients: Arc<RwLock<HashMap<Uuid, ClientConnection>>>,
}

impl RealWebSocketManager {
    /// Create new WebSocket manager
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl WebSocketManager for RealWebSocketManager {
    async fn add_client(&self, client_id: Uuid, sender: mpsc::Sender<ClientMessage>) -> ForumResult<()> {
        let ack_message = ClientMessage::ConnectionAck {
            session_id: client_id,
            server_time: Utc::now().timestamp() as u64,
        };

        // Channel is fresh, so the ack is always the first message the client sees
        if let Err(e) = sender.try_send(ack_message) {
            forum_warn!(Component::WebSocket, "Failed to send connection ack to {}: {:?}", client_id, e);
        }

        {
            let mut clients = self.clients.write().await;
            clients.insert(client_id, ClientConnection { sender });
        }

        forum_info!(Component::WebSocket, "👋 Added WebSocket client {}", client_id);
        Ok(())
    }

    async fn remove_client(&self, client_id: Uuid) -> ForumResult<()> {
        let mut clients = self.clients.write().await;
        if clients.remove(&client_id).is_some() {
            forum_info!(Component::WebSocket, "👋 Removed WebSocket client {}", client_id);
        }
        Ok(())
    }

    async fn broadcast(&self, message: ClientMessage) -> ForumResult<usize> {
        // Clone senders out so the lock is not held while sending
        let client_senders = {
            let clients = self.clients.read().await;

            if clients.is_empty() {
                forum_debug!(Component::WebSocket, "📭 No WebSocket clients connected - message not broadcasted");
                return Ok(0);
            }

            clients
                .iter()
                .map(|(client_id, connection)| (*client_id, connection.sender.clone()))
                .collect::<Vec<_>>()
        };

        let mut failed_clients = Vec::new();
        let mut success_count = 0;
        let total_clients = client_senders.len();

        for (client_id, sender) in client_senders {
            match sender.try_send(message.clone()) {
                Ok(_) => {
                    success_count += 1;
                }
                Err(TrySendError::Full(_)) => {
                    forum_warn!(Component::WebSocket, "Client {} channel full, dropping message", client_id);
                }
                Err(TrySendError::Closed(_)) => {
                    failed_clients.push(client_id);
                }
            }
        }

        if !failed_clients.is_empty() {
            let mut clients = self.clients.write().await;
            for client_id in failed_clients {
                if clients.remove(&client_id).is_some() {
                    forum_info!(Component::WebSocket, "🗑️ Removed disconnected client {} during broadcast", client_id);
                }
            }
        }

        forum_debug!(Component::WebSocket, "📡 Broadcasted message to {}/{} clients", success_count, total_clients);

        Ok(success_count)
    }

    async fn send_to_client(&self, client_id: Uuid, message: ClientMessage) -> ForumResult<()> {
        let sender = {
            let clients = self.clients.read().await;
            clients.get(&client_id).map(|connection| connection.sender.clone())
        };

        let Some(sender) = sender else {
            return Err(ForumError::ClientNotFound(client_id.to_string()));
        };

        match sender.try_send(message) {
            Ok(_) => Ok(()),
            Err(TrySendError::Full(_)) => Err(ForumError::websocket("Client channel full")),
            Err(TrySendError::Closed(_)) => {
                let mut clients = self.clients.write().await;
                if clients.remove(&client_id).is_some() {
                    forum_info!(Component::WebSocket, "🗑️ Removed disconnected client {} during individual send", client_id);
                }
                Err(ForumError::websocket("Client disconnected"))
            }
        }
    }

    async fn client_count(&self) -> usize {
        let clients = self.clients.read().await;
        clients.len()
    }

    async fn active_clients(&self) -> Vec<Uuid> {
        let clients = self.clients.read().await;
        clients.keys().copied().collect()
    }
}
