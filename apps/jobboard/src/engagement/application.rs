#![allow(dead_code)]

//! Apply/track state machine.
//!
//! Per job: not-applied, applying while the tracking call is
//! outstanding, applied once the backend confirms. Applied is recorded
//! in the local store (so it survives reloads and keeps the action
//! blocked) and is never left again. A failed tracking call reverts to
//! not-applied.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::errors::AppError;
use crate::store::KvStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    NotApplied,
    Applying,
    Applied,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::NotApplied => "not applied",
            ApplicationStatus::Applying => "applying",
            ApplicationStatus::Applied => "applied",
        };
        f.write_str(s)
    }
}

/// The tracking call seam, so the state machine is testable without a
/// backend. `ApiClient` is the production implementation.
#[async_trait]
pub trait TrackingApi: Send + Sync {
    async fn track_application(&self, job_id: i64) -> Result<(), ApiError>;
}

#[async_trait]
impl TrackingApi for ApiClient {
    async fn track_application(&self, job_id: i64) -> Result<(), ApiError> {
        ApiClient::track_application(self, job_id).await
    }
}

/// Drives the apply flow for all jobs, backed by the persisted
/// applied-jobs list.
pub struct ApplicationTracker {
    api: Arc<dyn TrackingApi>,
    store: Arc<dyn KvStore>,
}

impl ApplicationTracker {
    pub fn new(api: Arc<dyn TrackingApi>, store: Arc<dyn KvStore>) -> Self {
        Self { api, store }
    }

    /// Persisted status of a job. `Applying` is transient and never
    /// stored, so this reports either `NotApplied` or `Applied`.
    pub fn status(&self, job_id: i64) -> Result<ApplicationStatus, AppError> {
        Ok(if self.store.has_applied(job_id)? {
            ApplicationStatus::Applied
        } else {
            ApplicationStatus::NotApplied
        })
    }

    /// Tracks an application with the backend, then records it locally.
    ///
    /// Blocked entirely once applied; there is no un-apply. On success
    /// the store write also notifies subscribers so application counts
    /// refresh. On failure nothing is persisted and the job reverts to
    /// not-applied.
    pub async fn apply(&self, job_id: i64) -> Result<ApplicationStatus, AppError> {
        if self.store.has_applied(job_id)? {
            return Err(AppError::Validation(format!(
                "already applied to job {job_id}"
            )));
        }

        info!(job_id, status = %ApplicationStatus::Applying, "tracking application");
        match self.api.track_application(job_id).await {
            Ok(()) => {
                self.store.mark_applied(job_id)?;
                info!(job_id, "application recorded");
                Ok(ApplicationStatus::Applied)
            }
            Err(err) => {
                warn!(job_id, error = %err, "application tracking failed");
                Err(err.into())
            }
        }
    }
}
