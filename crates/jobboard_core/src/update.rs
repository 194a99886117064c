use crate::{AppState, Effect, Msg, Notification, Tab, ToastSeverity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::RefreshRequested => {
            let seq = state.begin_fetch();
            vec![Effect::FetchJobs { seq }]
        }
        Msg::TabSelected(tab) => {
            if tab == Tab::AddJob {
                // The add-job menu entry always starts a fresh draft.
                state.reset_form();
            }
            state.select_tab(tab);
            Vec::new()
        }
        Msg::JobsFetched { seq, result } => {
            // A response for a superseded request must not overwrite the
            // list a newer request is about to deliver.
            if !state.is_current_fetch(seq) {
                return (state, Vec::new());
            }
            match result {
                Ok(jobs) => state.apply_fetch_success(jobs),
                Err(message) => state.apply_fetch_failure(message),
            }
            Vec::new()
        }
        Msg::FieldChanged { field, value } => {
            state.set_form_field(field, value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.is_submitting() {
                return (state, Vec::new());
            }
            match state.submit_form() {
                Some(payload) => {
                    state.set_submitting(true);
                    match state.editing() {
                        Some(job_id) => vec![Effect::UpdateJob { job_id, payload }],
                        None => vec![Effect::CreateJob { payload }],
                    }
                }
                None => Vec::new(),
            }
        }
        Msg::CreateCompleted { result } => {
            state.set_submitting(false);
            match result {
                Ok(job) => {
                    state.prepend_job(job);
                    state.complete_create();
                    vec![Effect::ShowAlert {
                        message: "Job created successfully!".to_string(),
                    }]
                }
                Err(message) => vec![Effect::ShowAlert { message }],
            }
        }
        Msg::UpdateCompleted { result } => {
            state.set_submitting(false);
            match result {
                Ok(job) => {
                    state.replace_job(job);
                    state.complete_edit();
                    vec![Effect::ShowAlert {
                        message: "Job updated successfully!".to_string(),
                    }]
                }
                Err(message) => vec![Effect::ShowAlert { message }],
            }
        }
        Msg::EditClicked { job_id } => {
            if let Some(job) = state.job(&job_id).cloned() {
                state.start_edit(&job);
            }
            Vec::new()
        }
        Msg::DeleteClicked { job_id } => vec![Effect::ConfirmDelete { job_id }],
        Msg::DeleteConfirmed { job_id } => vec![Effect::DeleteJob { job_id }],
        Msg::DeleteCompleted { job_id, result } => match result {
            Ok(()) => {
                state.remove_job(&job_id);
                vec![Effect::ShowAlert {
                    message: "Job deleted successfully!".to_string(),
                }]
            }
            Err(message) => vec![Effect::ShowAlert { message }],
        },
        Msg::NotificationReceived(notification) => {
            match notification {
                Notification::JobCreated { message, job_id }
                | Notification::JobUpdated { message, job_id } => {
                    state.push_toast(ToastSeverity::Info, message, Some(job_id));
                }
                Notification::JobDeleted { message } => {
                    state.push_toast(ToastSeverity::Warning, message, None);
                }
            }
            Vec::new()
        }
        Msg::ToastClicked { toast_id } => match state.remove_toast(toast_id) {
            Some(toast) => match toast.job_id {
                Some(job_id) => vec![Effect::NavigateToJob { job_id }],
                None => Vec::new(),
            },
            None => Vec::new(),
        },
        Msg::ToastDismissed { toast_id } => {
            state.remove_toast(toast_id);
            Vec::new()
        }
        Msg::Tick { now_ms } => {
            state.tick(now_ms);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
