use crate::{Category, Field, Tab, ToastSeverity};

/// How many rows the dashboard's recent-listings table shows.
pub const RECENT_JOBS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub tab: Tab,
    pub loading: bool,
    /// Inline error region for the listing view (fetch failures only).
    pub fetch_error: Option<String>,
    pub total_jobs: usize,
    pub it_jobs: usize,
    pub govt_jobs: usize,
    /// First few jobs, for the dashboard summary table.
    pub recent: Vec<JobRowView>,
    /// The full list, insertion order.
    pub jobs: Vec<JobRowView>,
    pub form: FormView,
    pub toasts: Vec<ToastView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: Category,
    pub job_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub category: Category,
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    pub apply_link: String,
    /// Options for the type dropdown, derived from the selected category.
    pub job_types: &'static [&'static str],
    pub errors: Vec<(Field, String)>,
    pub submitting: bool,
    pub edit_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub toast_id: u64,
    pub severity: ToastSeverity,
    pub message: String,
    pub clickable: bool,
}
