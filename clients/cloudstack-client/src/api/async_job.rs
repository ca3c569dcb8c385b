// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Asynchronous jobs and polling

use std::time::Duration;

use cloudstack_api::commands::admin::{LIST_ASYNC_JOBS, QUERY_ASYNC_JOB_RESULT};
use cloudstack_api::options::ListAsyncJobsOptions;
use cloudstack_api::{AsyncJob, AsyncJobError, AsyncJobStatus, Options, QueryParams};
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tracing::{debug, info};

use super::api_accessor;
use crate::error::Error;

/// How to wait for a job to finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobWait {
    /// Pause between polls
    pub interval: Duration,
    /// Give up once this much time has passed
    pub timeout: Duration,
}

impl Default for JobWait {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            timeout: Duration::from_secs(600),
        }
    }
}

impl JobWait {
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

api_accessor! {
    /// Async job commands
    AsyncJobApi
}

impl AsyncJobApi<'_> {
    pub async fn list_async_jobs(&self, options: ListAsyncJobsOptions) -> Result<Vec<AsyncJob>, Error> {
        self.client.list(&LIST_ASYNC_JOBS, options.into_params()).await
    }

    /// Current state of a job; `None` when the server does not know it
    pub async fn get_async_job(&self, job_id: &str) -> Result<Option<AsyncJob>, Error> {
        let params = QueryParams::new().with("jobid", job_id);
        self.client.get(&QUERY_ASYNC_JOB_RESULT, params).await
    }

    /// Poll a job until it leaves `Pending`
    ///
    /// Returns the finished job, or [`Error::JobFailed`] when it failed.
    /// A job the server does not know is [`Error::JobNotFound`], and a
    /// status outside 0-2 is an [`Error::UnexpectedResponse`].
    pub async fn wait_for_job(&self, job_id: &str, wait: JobWait) -> Result<AsyncJob, Error> {
        let started = Instant::now();
        loop {
            let job = self
                .get_async_job(job_id)
                .await?
                .ok_or_else(|| Error::JobNotFound(job_id.to_string()))?;

            if let AsyncJobStatus::Unrecognized(status) = job.status() {
                return Err(Error::UnexpectedResponse {
                    command: QUERY_ASYNC_JOB_RESULT.name.to_string(),
                    message: format!("job {} has unknown status {}", job_id, status),
                });
            }

            if job.is_done() {
                if job.status() == AsyncJobStatus::Failed {
                    let error = job.error().unwrap_or(AsyncJobError {
                        error_code: job.result_code,
                        error_text: None,
                    });
                    info!(job_id, %error, "job failed");
                    return Err(Error::JobFailed {
                        job_id: job_id.to_string(),
                        error,
                    });
                }
                debug!(job_id, status = ?job.status(), "job finished");
                return Ok(job);
            }

            let waited = started.elapsed();
            if waited + wait.interval > wait.timeout {
                return Err(Error::JobTimeout {
                    job_id: job_id.to_string(),
                    waited,
                });
            }
            debug!(job_id, progress = ?job.proc_status, "job pending");
            tokio::time::sleep(wait.interval).await;
        }
    }

    /// Wait for a job and decode its result
    ///
    /// A result shaped `{"virtualmachine": {...}}` is unwrapped to the
    /// entity. A job that succeeded without a result is an
    /// [`Error::UnexpectedResponse`].
    pub async fn wait_for_result<T: DeserializeOwned>(
        &self,
        job_id: &str,
        wait: JobWait,
    ) -> Result<T, Error> {
        let job = self.wait_for_job(job_id, wait).await?;
        let command = QUERY_ASYNC_JOB_RESULT.name.to_string();
        match job.result::<T>() {
            Ok(Some(result)) => Ok(result),
            Ok(None) => Err(Error::UnexpectedResponse {
                command,
                message: format!("job {} finished without a result", job_id),
            }),
            Err(source) => Err(Error::Decode { command, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_wait_builder() {
        let wait = JobWait::default()
            .interval(Duration::from_millis(10))
            .timeout(Duration::from_secs(1));
        assert_eq!(wait.interval, Duration::from_millis(10));
        assert_eq!(wait.timeout, Duration::from_secs(1));
    }
}
