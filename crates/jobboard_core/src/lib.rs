//! Jobboard core: pure state machine and view-model helpers.
mod catalog;
mod effect;
mod form;
mod job;
mod msg;
mod state;
mod update;
mod view_model;

pub use catalog::{default_job_type, job_types, Category, CATEGORIES};
pub use effect::Effect;
pub use form::{Field, FormDraft};
pub use job::{Job, JobId, JobPayload};
pub use msg::{Msg, Notification};
pub use state::{AppState, Tab, Toast, ToastSeverity, TOAST_AUTO_CLOSE_MS};
pub use update::update;
pub use view_model::{
    AppViewModel, FormView, JobRowView, ToastView, RECENT_JOBS_LIMIT,
};
