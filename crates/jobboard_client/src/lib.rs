//! Jobboard client: REST calls against the job backend and the live
//! notification stream.
mod api;
mod handle;
mod stream;
mod types;

pub use api::{ApiSettings, JobApi, ReqwestJobApi, DEFAULT_BASE_URL};
pub use handle::ClientHandle;
pub use stream::{NotificationEvent, NotificationStream, StreamError, StreamSettings};
pub use types::{ApiError, ApiFailure, ClientEvent, JobBody, JobRecord};
