//! Response definitions
//!
//! Represents responses to clients.

use serde::{Deserialize, Serialize};

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// A response to send to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Outcome of the request
    pub status: Status,

    /// Human-readable description of the outcome
    pub message: String,

    /// Meanings, populated only for a successful query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

impl Response {
    /// Create a success response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: None,
        }
    }

    /// Create a success response carrying query data
    pub fn success_with_data(message: impl Into<String>, data: Vec<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: None,
        }
    }

    /// Whether this is a success response
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
