// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Asynchronous jobs
//!
//! Long-running commands answer immediately with a job ID:
//!
//! ```text
//! {"deployvirtualmachineresponse": {"id": "<vm id>", "jobid": "<job id>"}}
//! ```
//!
//! The job is then polled with `queryAsyncJobResult` until its status
//! leaves [`AsyncJobStatus::Pending`]. A finished job carries its result as
//! a single-key object such as `{"virtualmachine": {...}}`.

use super::common::{Timestamp, date, lenient, numeric_enum};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

numeric_enum! {
    /// Status of an asynchronous job
    pub enum AsyncJobStatus {
        Pending = 0,
        Succeeded = 1,
        Failed = 2,
    }
}

/// Reply to an asynchronous command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncCreateResponse {
    /// ID of the resource being created or acted on, when known up front
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "jobid")]
    pub job_id: String,
}

/// Error carried in the result of a failed job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncJobError {
    #[serde(default, rename = "errorcode", deserialize_with = "lenient")]
    pub error_code: Option<i32>,
    #[serde(default, rename = "errortext")]
    pub error_text: Option<String>,
}

impl fmt::Display for AsyncJobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.error_code, &self.error_text) {
            (Some(code), Some(text)) => write!(f, "{} (error {})", text, code),
            (None, Some(text)) => f.write_str(text),
            (Some(code), None) => write!(f, "error {}", code),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

/// An asynchronous job and, once finished, its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncJob {
    #[serde(rename = "jobid")]
    pub id: String,
    #[serde(default, rename = "accountid")]
    pub account_id: Option<String>,
    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,
    /// Command class that created the job
    #[serde(default)]
    pub cmd: Option<String>,
    #[serde(default, rename = "jobstatus")]
    pub status: Option<AsyncJobStatus>,
    #[serde(default, rename = "jobprocstatus", deserialize_with = "lenient")]
    pub proc_status: Option<i32>,
    #[serde(default, rename = "jobresultcode", deserialize_with = "lenient")]
    pub result_code: Option<i32>,
    #[serde(default, rename = "jobresulttype")]
    pub result_type: Option<String>,
    #[serde(default, rename = "jobresult")]
    pub result: Option<Value>,
    #[serde(default, rename = "jobinstancetype")]
    pub instance_type: Option<String>,
    #[serde(default, rename = "jobinstanceid")]
    pub instance_id: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
}

impl AsyncJob {
    /// Job status; a job without one is treated as still pending
    pub fn status(&self) -> AsyncJobStatus {
        self.status.unwrap_or(AsyncJobStatus::Pending)
    }

    /// Whether the job has finished, successfully or not
    ///
    /// A status this library does not know is not treated as finished.
    pub fn is_done(&self) -> bool {
        matches!(
            self.status(),
            AsyncJobStatus::Succeeded | AsyncJobStatus::Failed
        )
    }

    /// Decode the job result into `T`
    ///
    /// A result shaped `{"<entity>": {...}}` is unwrapped to the inner
    /// object. Returns `Ok(None)` when the job carries no result.
    pub fn result<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        let Some(raw) = &self.result else {
            return Ok(None);
        };
        let inner = match raw {
            Value::Object(map) if map.len() == 1 => match map.values().next() {
                Some(v @ (Value::Object(_) | Value::Array(_))) => v,
                _ => raw,
            },
            _ => raw,
        };
        serde_json::from_value(inner.clone()).map(Some)
    }

    /// The error of a failed job
    pub fn error(&self) -> Option<AsyncJobError> {
        if self.status() != AsyncJobStatus::Failed {
            return None;
        }
        let fallback = AsyncJobError {
            error_code: self.result_code,
            error_text: None,
        };
        let mut error = match &self.result {
            Some(raw) => serde_json::from_value(raw.clone()).unwrap_or(fallback),
            None => fallback,
        };
        if error.error_code.is_none() {
            error.error_code = self.result_code;
        }
        Some(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VirtualMachine;

    fn job(json: &str) -> AsyncJob {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pending_job() {
        let job = job(r#"{"jobid": "j-1", "jobstatus": 0, "jobprocstatus": 0}"#);
        assert_eq!(job.status(), AsyncJobStatus::Pending);
        assert!(!job.is_done());
        assert!(job.error().is_none());
        assert_eq!(job.result::<VirtualMachine>().unwrap(), None);
    }

    #[test]
    fn test_succeeded_job_unwraps_entity() {
        let job = job(
            r#"{
                "jobid": "j-1",
                "jobstatus": 1,
                "jobresulttype": "object",
                "jobresult": {"virtualmachine": {"id": "vm-1", "state": "Running"}}
            }"#,
        );
        assert!(job.is_done());
        let vm: VirtualMachine = job.result().unwrap().unwrap();
        assert_eq!(vm.id, "vm-1");
    }

    #[test]
    fn test_scalar_result_is_not_unwrapped() {
        let job = job(r#"{"jobid": "j-1", "jobstatus": 1, "jobresult": {"success": true}}"#);
        let result: crate::types::SuccessResponse = job.result().unwrap().unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_failed_job_error() {
        let job = job(
            r#"{
                "jobid": "j-1",
                "jobstatus": 2,
                "jobresultcode": 530,
                "jobresult": {"errorcode": 530, "errortext": "Unable to start VM"}
            }"#,
        );
        let err = job.error().unwrap();
        assert_eq!(err.error_code, Some(530));
        assert_eq!(err.to_string(), "Unable to start VM (error 530)");
    }

    #[test]
    fn test_failed_job_error_code_from_result_code() {
        let job = job(
            r#"{
                "jobid": "j-1",
                "jobstatus": 2,
                "jobresultcode": 530,
                "jobresult": {"errortext": "Unable to start VM"}
            }"#,
        );
        let err = job.error().unwrap();
        assert_eq!(err.error_code, Some(530));
        assert_eq!(err.error_text.as_deref(), Some("Unable to start VM"));
    }

    #[test]
    fn test_unknown_status_is_not_done() {
        let job = job(r#"{"jobid": "j-1", "jobstatus": 7}"#);
        assert_eq!(job.status(), AsyncJobStatus::Unrecognized(7));
        assert!(!job.is_done());
        assert!(job.error().is_none());
    }
}
