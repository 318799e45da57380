//! Webserver error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForumError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Client not found: {0}")]
    ClientNotFound(String),
}

impl ForumError {
    pub fn config(message: impl Into<String>) -> Self {
        ForumError::Config(message.into())
    }

    pub fn websocket(message: impl Into<String>) -> Self {
        ForumError::WebSocket(message.into())
    }
}

pub type ForumResult<T> = Result<T, ForumError>;
