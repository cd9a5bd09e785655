//! Error types for the expense client.
//!
//! # Design
//! Two distinct kinds, because they reach the user through different
//! channels: `ValidationError` blocks a draft before any request is built
//! and is shown as a one-off alert; `ApiError` describes a failed network
//! operation and lands in the persistent error banner.
//!
//! Server error bodies usually look like `{"message": "..."}`, but that
//! shape is not guaranteed. `ApiError::from_response` extracts the message
//! when present and degrades to the raw body, then to a generic string.

use std::fmt;

use crate::http::HttpResponse;

/// A draft failed its required-field checks. No request was issued and no
/// state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of title, amount, category, date was left empty.
    MissingField(&'static str),

    /// The amount field is not a non-negative decimal number.
    InvalidAmount,

    /// The date field is not a `YYYY-MM-DD` calendar date.
    InvalidDate,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "{field} is required"),
            ValidationError::InvalidAmount => {
                write!(f, "amount must be a non-negative number")
            }
            ValidationError::InvalidDate => write!(f, "date must be YYYY-MM-DD"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors surfaced by a network operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned a non-2xx status. `message` is the best
    /// human-readable text that could be extracted from the response.
    Http { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl ApiError {
    /// Build the error for a non-2xx response, pulling the `message` field
    /// out of the body when the server sent one.
    pub(crate) fn from_response(response: &HttpResponse) -> Self {
        ApiError::Http {
            status: response.status,
            message: extract_message(&response.body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}
