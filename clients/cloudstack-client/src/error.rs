// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client errors and CloudStack error classification

use cloudstack_api::AsyncJobError;
use cloudstack_auth::AuthError;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// What an API error means to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credentials missing, wrong, or not allowed to run the command
    Unauthorized,
    /// Authenticated but denied
    Forbidden,
    /// The addressed entity does not exist
    NotFound,
    /// A parameter is missing or malformed
    InvalidArgument,
    /// Too many requests
    RateLimited,
    /// A resource limit or capacity was reached
    InsufficientResources,
    /// The request conflicts with the state of the entity
    IllegalState,
    /// The management server failed
    Server,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::InsufficientResources => "insufficient resources",
            ErrorKind::IllegalState => "illegal state",
            ErrorKind::Server => "server error",
        };
        f.write_str(name)
    }
}

/// Classify an error response by HTTP status and error text
///
/// CloudStack reuses the HTTP status for its own error codes (431 for
/// parameter errors, 53x for server-side conditions), and reports a
/// missing entity as a parameter error whose text says so.
pub fn classify(status: u16, text: &str) -> ErrorKind {
    let lower = text.to_lowercase();
    let says_missing = lower.contains("does not exist") || lower.contains("not found");

    match status {
        401 | 432 | 531 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        409 | 431 if says_missing => ErrorKind::NotFound,
        400 | 405 | 430 | 431 => ErrorKind::InvalidArgument,
        429 | 436 => ErrorKind::RateLimited,
        534 if lower.contains("maximum number of resources") => {
            ErrorKind::InsufficientResources
        }
        532 | 533 => ErrorKind::InsufficientResources,
        409 | 530..=537 => ErrorKind::IllegalState,
        400..=499 => ErrorKind::IllegalState,
        _ => ErrorKind::Server,
    }
}

/// An error response from the management server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub command: String,
    /// HTTP status of the response
    pub status: u16,
    /// `errorcode` from the response body
    pub error_code: Option<i32>,
    /// `cserrorcode`, CloudStack's internal exception code
    pub cs_error_code: Option<i32>,
    pub text: String,
    pub kind: ErrorKind,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed ({}, HTTP {}): {}",
            self.command, self.kind, self.status, self.text
        )
    }
}

/// Client errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(ApiError),

    #[error("failed to decode {command} response: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected {command} response: {message}")]
    UnexpectedResponse { command: String, message: String },

    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("{0} requires credentials")]
    MissingCredentials(String),

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("async job {0} not found")]
    JobNotFound(String),

    #[error("async job {job_id} failed: {error}")]
    JobFailed { job_id: String, error: AsyncJobError },

    #[error("async job {job_id} still pending after {waited:?}")]
    JobTimeout { job_id: String, waited: Duration },
}

impl Error {
    /// Classification of an API error
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api(api) => Some(api.kind),
            Error::JobNotFound(_) => Some(ErrorKind::NotFound),
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(api) => Some(api.status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(401, "unable to verify user credentials" => ErrorKind::Unauthorized)]
    #[test_case(432, "The given command does not exist" => ErrorKind::Unauthorized; "unknown command")]
    #[test_case(403, "" => ErrorKind::Forbidden)]
    #[test_case(404, "" => ErrorKind::NotFound)]
    #[test_case(431, "Unable to find virtual machine: entity does not exist" => ErrorKind::NotFound)]
    #[test_case(431, "Please specify a valid zone" => ErrorKind::InvalidArgument)]
    #[test_case(409, "Volume not found" => ErrorKind::NotFound)]
    #[test_case(409, "Volume is attached" => ErrorKind::IllegalState)]
    #[test_case(436, "" => ErrorKind::RateLimited)]
    #[test_case(534, "Maximum number of resources of type 'user_vm' for account" => ErrorKind::InsufficientResources)]
    #[test_case(534, "Host is in maintenance" => ErrorKind::IllegalState)]
    #[test_case(530, "Internal error executing command" => ErrorKind::IllegalState)]
    #[test_case(500, "" => ErrorKind::Server)]
    #[test_case(503, "" => ErrorKind::Server)]
    fn test_classify(status: u16, text: &str) -> ErrorKind {
        classify(status, text)
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api(ApiError {
            command: "listZones".to_string(),
            status: 431,
            error_code: Some(431),
            cs_error_code: Some(4350),
            text: "bad zone".to_string(),
            kind: ErrorKind::InvalidArgument,
        });
        assert_eq!(
            err.to_string(),
            "listZones failed (invalid argument, HTTP 431): bad zone"
        );
        assert_eq!(err.status(), Some(431));
        assert!(!err.is_not_found());
    }
}
