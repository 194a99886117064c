use crate::Category;

/// Server-assigned job identifier; opaque to the client.
pub type JobId = String;

/// A job listing as held in the in-memory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub category: Category,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub apply_link: String,
}

/// Outgoing job body for create/update; the identifier stays server-side.
///
/// Requirements are already normalized here: trimmed, non-empty lines in
/// the order they were typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub category: Category,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub apply_link: String,
}
