//! WebSocket messages from the webserver to the browser

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::view::ForumView;
use crate::errors::SharedResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Sent once when a browser connects
    ConnectionAck { session_id: Uuid, server_time: u64 },

    /// Full page state to apply, replacing whatever is displayed
    Render { view: ForumView },
}

impl ClientMessage {
    pub fn render(view: ForumView) -> Self {
        ClientMessage::Render { view }
    }

    pub fn to_json(&self) -> SharedResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
