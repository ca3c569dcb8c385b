// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack API Definition
//!
//! CloudStack exposes a single HTTP endpoint (`/client/api`) and selects the
//! operation with the `command` query parameter. Every response is a JSON
//! object wrapping the payload in a `<command>response` key:
//!
//! ```text
//! GET /client/api?command=listZones&response=json
//!
//! {"listzonesresponse": {"count": 1, "zone": [{"id": "...", ...}]}}
//! ```
//!
//! This crate describes that surface:
//! - [`types`]: the domain model returned by the management server
//! - [`options`]: builders for the optional parameters of each command
//! - [`commands`]: one declaration per command (verb, selected key, fallback)
//! - [`CloudStackApi`]: the HTTP surface as a Dropshot trait, used by the
//!   stub server to stand in for a management server in tests
//!
//! The management server itself is implemented by Apache CloudStack, not
//! by us.

use dropshot::{Body, HttpError, Query, RequestContext, UntypedBody};
use http::Response;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod commands;
pub mod options;
pub mod params;
pub mod types;

pub use commands::{Command, Fallback, Verb};
pub use options::{Options, PagedOptions};
pub use params::QueryParams;
pub use types::*;

/// Path of the API endpoint on a management server
pub const API_PATH: &str = "/client/api";

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters common to every API call
///
/// Command-specific parameters are free-form and read from the raw query
/// string (GET) or form body (POST).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommandQuery {
    /// Command name, e.g. `listVirtualMachines`
    ///
    /// POST requests may carry it in the form body instead.
    #[serde(default)]
    pub command: Option<String>,

    /// Response format; only `json` is served
    #[serde(default)]
    pub response: Option<String>,
}

// ============================================================================
// API Trait
// ============================================================================

/// CloudStack management server API
///
/// Both endpoints answer with the `<command>response` envelope. Errors use
/// the same envelope with `errorcode` and `errortext` and an HTTP status
/// equal to the error code:
///
/// ```text
/// HTTP/1.1 431
/// {"listvirtualmachinesresponse": {"errorcode": 431, "errortext": "..."}}
/// ```
#[dropshot::api_description]
pub trait CloudStackApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// Execute a command carried in the query string
    #[endpoint {
        method = GET,
        path = "/client/api",
        tags = ["api"],
    }]
    async fn api_get(
        rqctx: RequestContext<Self::Context>,
        query: Query<CommandQuery>,
    ) -> Result<Response<Body>, HttpError>;

    /// Execute a command carried in an `application/x-www-form-urlencoded`
    /// body
    #[endpoint {
        method = POST,
        path = "/client/api",
        tags = ["api"],
    }]
    async fn api_post(
        rqctx: RequestContext<Self::Context>,
        query: Query<CommandQuery>,
        body: UntypedBody,
    ) -> Result<Response<Body>, HttpError>;
}

/// Name of the envelope key wrapping a command's response
///
/// ```
/// assert_eq!(
///     cloudstack_api::response_key("listVirtualMachines"),
///     "listvirtualmachinesresponse"
/// );
/// ```
pub fn response_key(command: &str) -> String {
    format!("{}response", command.to_lowercase())
}
