use serde::{Deserialize, Serialize};

/// A job listing as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: String,
    pub category: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(rename = "applyLink", default)]
    pub apply_link: String,
}

/// Outgoing body for create and update; the identifier stays server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBody {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub category: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(rename = "applyLink")]
    pub apply_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
    /// Validation message embedded in the server's error body, when any.
    pub server_message: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    /// The text to show the user: the server's own message when it sent
    /// one, otherwise the supplied fallback.
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    #[error("invalid url")]
    InvalidUrl,
    #[error("network error")]
    Network,
    #[error("timeout")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("invalid response body")]
    InvalidBody,
}

/// Completion events reported by the background client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    JobsFetched {
        seq: u64,
        result: Result<Vec<JobRecord>, ApiError>,
    },
    JobCreated {
        result: Result<JobRecord, ApiError>,
    },
    JobUpdated {
        result: Result<JobRecord, ApiError>,
    },
    JobDeleted {
        job_id: String,
        result: Result<(), ApiError>,
    },
}
