use crate::{Field, Job, JobId, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App booted; kicks off the initial job fetch.
    Started,
    /// Sidebar tab selected. Selecting the add-job tab abandons any
    /// in-progress edit and starts from a fresh draft.
    TabSelected(Tab),
    /// User asked for the job list to be re-fetched.
    RefreshRequested,
    /// A fetch round-trip finished, tagged with its sequence token.
    JobsFetched {
        seq: u64,
        result: Result<Vec<Job>, String>,
    },
    /// User edited a single form field.
    FieldChanged { field: Field, value: String },
    /// User submitted the form.
    SubmitClicked,
    /// Backend finished a create.
    CreateCompleted { result: Result<Job, String> },
    /// Backend finished an update.
    UpdateCompleted { result: Result<Job, String> },
    /// Backend finished a delete.
    DeleteCompleted {
        job_id: JobId,
        result: Result<(), String>,
    },
    /// Edit action on a listed job.
    EditClicked { job_id: JobId },
    /// Delete action on a listed job; asks the platform to confirm first.
    DeleteClicked { job_id: JobId },
    /// User accepted the delete confirmation dialog.
    DeleteConfirmed { job_id: JobId },
    /// Live event from the notification stream.
    NotificationReceived(Notification),
    /// User clicked a toast; created/updated toasts navigate to the job.
    ToastClicked { toast_id: u64 },
    /// User dismissed a toast without following its link.
    ToastDismissed { toast_id: u64 },
    /// UI/render tick; carries the platform clock for toast expiry.
    Tick { now_ms: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// One event received over the notification stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    JobCreated { message: String, job_id: JobId },
    JobUpdated { message: String, job_id: JobId },
    JobDeleted { message: String },
}
