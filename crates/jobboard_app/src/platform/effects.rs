use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use board_logging::{board_info, board_warn};
use jobboard_client::{
    ApiError, ApiSettings, ClientEvent, ClientHandle, JobBody, JobRecord, NotificationEvent,
};
use jobboard_core::{Category, Effect, Job, JobPayload, Msg, Notification};

/// Executes client-bound effects and pumps completion events back into the
/// core as messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let client = ClientHandle::new(ApiSettings::default())?;
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    /// Runs one client-bound effect. Dialog and navigation effects are the
    /// front-end's business and must not reach this runner.
    pub fn apply(&self, effect: Effect) {
        match effect {
            Effect::FetchJobs { seq } => {
                board_info!("FetchJobs seq={}", seq);
                self.client.fetch_jobs(seq);
            }
            Effect::CreateJob { payload } => {
                board_info!("CreateJob title={}", payload.title);
                self.client.create_job(map_payload(payload));
            }
            Effect::UpdateJob { job_id, payload } => {
                board_info!("UpdateJob id={}", job_id);
                self.client.update_job(job_id, map_payload(payload));
            }
            Effect::DeleteJob { job_id } => {
                board_info!("DeleteJob id={}", job_id);
                self.client.delete_job(job_id);
            }
            Effect::ConfirmDelete { .. } | Effect::ShowAlert { .. } | Effect::NavigateToJob { .. } => {
                board_warn!("front-end effect reached the client runner");
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let _ = msg_tx.send(map_event(event));
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::JobsFetched { seq, result } => Msg::JobsFetched {
            seq,
            result: result
                .map(|records| records.into_iter().map(map_record).collect())
                .map_err(|err| display_error(err, "Failed to load jobs.")),
        },
        ClientEvent::JobCreated { result } => Msg::CreateCompleted {
            result: result
                .map(map_record)
                .map_err(|err| display_error(err, "Failed to save job.")),
        },
        ClientEvent::JobUpdated { result } => Msg::UpdateCompleted {
            result: result
                .map(map_record)
                .map_err(|err| display_error(err, "Failed to save job.")),
        },
        ClientEvent::JobDeleted { job_id, result } => Msg::DeleteCompleted {
            job_id,
            result: result.map_err(|err| display_error(err, "Failed to delete job.")),
        },
    }
}

fn display_error(err: ApiError, fallback: &str) -> String {
    board_warn!("api call failed: {}", err);
    err.display_message(fallback)
}

pub fn map_notification(event: NotificationEvent) -> Notification {
    match event {
        NotificationEvent::JobCreated { message, job_id } => {
            Notification::JobCreated { message, job_id }
        }
        NotificationEvent::JobUpdated { message, job_id } => {
            Notification::JobUpdated { message, job_id }
        }
        NotificationEvent::JobDeleted { message } => Notification::JobDeleted { message },
    }
}

fn map_record(record: JobRecord) -> Job {
    Job {
        id: record.id,
        title: record.title,
        company: record.company,
        location: record.location,
        salary: record.salary,
        category: Category::parse(&record.category).unwrap_or_default(),
        job_type: record.job_type,
        description: record.description,
        requirements: record.requirements,
        apply_link: record.apply_link,
    }
}

fn map_payload(payload: JobPayload) -> JobBody {
    JobBody {
        title: payload.title,
        company: payload.company,
        location: payload.location,
        salary: payload.salary,
        category: payload.category.as_str().to_string(),
        job_type: payload.job_type,
        description: payload.description,
        requirements: payload.requirements,
        apply_link: payload.apply_link,
    }
}
