use std::time::Duration;

use serde::Deserialize;

use crate::types::{ApiError, ApiFailure, JobBody, JobRecord};

/// The fixed production backend. Overridable for tests only; there is no
/// runtime configuration surface.
pub const DEFAULT_BASE_URL: &str = "https://todayjobsbackend.onrender.com";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait JobApi: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, ApiError>;
    async fn create_job(&self, body: &JobBody) -> Result<JobRecord, ApiError>;
    async fn update_job(&self, job_id: &str, body: &JobBody) -> Result<JobRecord, ApiError>;
    async fn delete_job(&self, job_id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestJobApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        // Validate the base early so a bad host is a constructor error,
        // not a per-request surprise.
        reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;

        Ok(Self { settings, client })
    }

    fn jobs_url(&self) -> String {
        format!("{}/api/jobs", self.settings.base_url.trim_end_matches('/'))
    }

    fn job_url(&self, job_id: &str) -> String {
        format!("{}/{}", self.jobs_url(), job_id)
    }
}

#[async_trait::async_trait]
impl JobApi for ReqwestJobApi {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        let response = self
            .client
            .get(self.jobs_url())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = check_status(response).await?;
        response
            .json::<Vec<JobRecord>>()
            .await
            .map_err(|err| ApiError::new(ApiFailure::InvalidBody, err.to_string()))
    }

    async fn create_job(&self, body: &JobBody) -> Result<JobRecord, ApiError> {
        let response = self
            .client
            .post(self.jobs_url())
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        parse_job(response).await
    }

    async fn update_job(&self, job_id: &str, body: &JobBody) -> Result<JobRecord, ApiError> {
        let response = self
            .client
            .put(self.job_url(job_id))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        parse_job(response).await
    }

    async fn delete_job(&self, job_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.job_url(job_id))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // No structured body is required of a delete response.
        check_status(response).await.map(|_| ())
    }
}

async fn parse_job(response: reqwest::Response) -> Result<JobRecord, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<JobRecord>()
        .await
        .map_err(|err| ApiError::new(ApiFailure::InvalidBody, err.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a non-success status to an error, lifting the `message` field out
/// of the server's JSON error body when it has one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let server_message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.message);
    Err(ApiError {
        kind: ApiFailure::HttpStatus(status.as_u16()),
        message: status.to_string(),
        server_message,
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
