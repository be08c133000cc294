//! Backend API client. The single point of entry for all job-board
//! backend calls; no other module talks to the network directly.
//!
//! Failure policy: a non-success status or transport failure is returned
//! to the caller as-is. There is no automatic retry and no fallback
//! data.

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::job::Job;
use crate::models::profile::ParsedResume;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Body of `POST /jobs/{id}/comment`. The date is stamped client-side;
/// the server does not verify it.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub text: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// The job-board backend client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// GET /alljobs
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let response = self.client.get(self.url("/alljobs")).send().await?;
        let response = check(response).await?;
        let jobs: Vec<Job> = response.json().await?;
        debug!(count = jobs.len(), "fetched job list");
        Ok(jobs)
    }

    /// PUT /jobs/{id}/like. Returns the updated job; the caller's
    /// optimistic counter does not consume it.
    pub async fn like_job(&self, job_id: i64) -> Result<Job, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/jobs/{job_id}/like")))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// POST /jobs/{id}/comment
    pub async fn add_comment(&self, job_id: i64, comment: &NewComment) -> Result<Job, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/jobs/{job_id}/comment")))
            .json(comment)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// POST /jobs/{id}/track. Success gates the local applied-jobs write.
    pub async fn track_application(&self, job_id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/jobs/{job_id}/track")))
            .send()
            .await?;
        check(response).await?;
        debug!(job_id, "application tracked");
        Ok(())
    }

    /// POST /resume/upload (multipart, field `file`). The caller is
    /// responsible for validating the file first.
    pub async fn upload_resume(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ParsedResume, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("/resume/upload"))
            .multipart(form)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}
