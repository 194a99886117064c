use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use board_logging::board_warn;

use crate::api::{ApiSettings, JobApi, ReqwestJobApi};
use crate::types::{ApiError, ClientEvent, JobBody};

enum ClientCommand {
    FetchJobs { seq: u64 },
    CreateJob { body: JobBody },
    UpdateJob { job_id: String, body: JobBody },
    DeleteJob { job_id: String },
}

/// Handle to the background client: commands in, completion events out.
///
/// Commands run as independent tasks on a dedicated runtime thread; there
/// is no in-flight coordination, so two overlapping fetches may complete
/// in either order. The fetch sequence token exists so the caller can tell
/// a stale completion from the current one.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestJobApi::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch_jobs(&self, seq: u64) {
        self.send(ClientCommand::FetchJobs { seq });
    }

    pub fn create_job(&self, body: JobBody) {
        self.send(ClientCommand::CreateJob { body });
    }

    pub fn update_job(&self, job_id: impl Into<String>, body: JobBody) {
        self.send(ClientCommand::UpdateJob {
            job_id: job_id.into(),
            body,
        });
    }

    pub fn delete_job(&self, job_id: impl Into<String>) {
        self.send(ClientCommand::DeleteJob {
            job_id: job_id.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        let event_rx = self.event_rx.lock().ok()?;
        event_rx.try_recv().ok()
    }

    fn send(&self, command: ClientCommand) {
        if self.cmd_tx.send(command).is_err() {
            board_warn!("client command dropped: background thread gone");
        }
    }
}

async fn handle_command(
    api: &dyn JobApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::FetchJobs { seq } => {
            let result = api.fetch_jobs().await;
            ClientEvent::JobsFetched { seq, result }
        }
        ClientCommand::CreateJob { body } => {
            let result = api.create_job(&body).await;
            ClientEvent::JobCreated { result }
        }
        ClientCommand::UpdateJob { job_id, body } => {
            let result = api.update_job(&job_id, &body).await;
            ClientEvent::JobUpdated { result }
        }
        ClientCommand::DeleteJob { job_id } => {
            let result = api.delete_job(&job_id).await;
            ClientEvent::JobDeleted { job_id, result }
        }
    };
    let _ = event_tx.send(event);
}
