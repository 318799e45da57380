//! Shared error types for the freelancer forum

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Catalog '{catalog}' must not be empty")]
    EmptyCatalog { catalog: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::SerializationError { message: err.to_string() }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
