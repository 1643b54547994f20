//! Client side of the meetup REST backend.

pub mod http;

use async_trait::async_trait;
use std::fmt;

use crate::models::meetup::{MeetupId, RawMeetup};

pub use http::HttpMeetupClient;

pub const CONNECTION_ERROR: &str = "Connection error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response at all (DNS, refused, timeout).
    Transport,
    /// The backend answered with a non-2xx status.
    Status,
    /// The backend answered 2xx with a body we could not read.
    Decode,
}

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    /// Server-supplied `error` field from the response body, if any.
    pub message: Option<String>,
    pub detail: String,
}

impl ApiError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self { kind: ApiErrorKind::Transport, status: None, message: None, detail: detail.into() }
    }

    pub fn status(status: u16, message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            status: Some(status),
            message,
            detail: format!("backend answered {status}"),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self { kind: ApiErrorKind::Decode, status: None, message: None, detail: detail.into() }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// What the user gets told: the server's own message, or a generic
    /// connection error when there is none.
    pub fn user_message(&self) -> String {
        match self.message.as_deref() {
            Some(msg) if !msg.trim().is_empty() => msg.to_string(),
            _ => CONNECTION_ERROR.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {msg}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait MeetupClient: Send + Sync {
    async fn fetch_meetup(&self, id: &MeetupId) -> Result<RawMeetup, ApiError>;

    async fn delete_meetup(&self, id: &MeetupId) -> Result<(), ApiError>;
}
