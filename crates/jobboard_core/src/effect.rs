use crate::{JobId, JobPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full job list; the token identifies the request so a
    /// stale completion can be discarded.
    FetchJobs { seq: u64 },
    CreateJob { payload: JobPayload },
    UpdateJob { job_id: JobId, payload: JobPayload },
    /// Ask the platform for a blocking delete confirmation.
    ConfirmDelete { job_id: JobId },
    DeleteJob { job_id: JobId },
    /// Blocking informational dialog (success or failure message).
    ShowAlert { message: String },
    /// Navigate to the detail page of a job referenced by a toast.
    NavigateToJob { job_id: JobId },
}
