// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Apache CloudStack Client Library
//!
//! Typed access to the CloudStack management server API. Commands are
//! grouped the way the API documentation groups them, each group behind an
//! accessor on [`Client`].
//!
//! ## Usage
//!
//! ### API key
//!
//! Requests are signed with the user's API key and secret:
//!
//! ```ignore
//! use cloudstack_client::{Client, Credentials};
//! use cloudstack_client::cloudstack_api::options::ListVirtualMachinesOptions;
//!
//! let client = Client::new(
//!     "https://cloud.example.com:8080/client/api",
//!     Credentials::api_key("apikey", "secretkey"),
//! )?;
//!
//! let vms = client
//!     .virtual_machine_api()
//!     .list_virtual_machines(ListVirtualMachinesOptions::new().zone_id("zone-1"))
//!     .await?;
//! ```
//!
//! ### Session
//!
//! A username and password log in once; later requests carry the session
//! key and cookie:
//!
//! ```ignore
//! use cloudstack_client::{Client, LoginCredentials};
//!
//! let anonymous = Client::unauthenticated("https://cloud.example.com:8080/client/api")?;
//! let session = anonymous
//!     .session_api()
//!     .login(&LoginCredentials::new("admin", "password"))
//!     .await?;
//! let client = anonymous.with_credentials(session.credentials());
//! ```
//!
//! ### Async jobs
//!
//! Long-running commands return a job ID. Wait for the job, and decode its
//! result, with [`api::AsyncJobApi`]:
//!
//! ```ignore
//! use cloudstack_client::JobWait;
//! use cloudstack_client::cloudstack_api::VirtualMachine;
//!
//! let job = client.virtual_machine_api().start_virtual_machine("vm-1").await?;
//! let vm: VirtualMachine = client
//!     .async_job_api()
//!     .wait_for_result(&job.job_id, JobWait::default())
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! Error responses become [`Error::Api`] with the HTTP status, CloudStack's
//! error codes and an [`ErrorKind`]. Where a command declares a fallback, a
//! missing entity is not an error: lists come back empty and single lookups
//! return `None`.

pub mod api;
mod client;
mod error;
mod fallback;

pub use api::{JobWait, Session};
pub use client::Client;
pub use error::{ApiError, Error, ErrorKind, classify};
pub use fallback::fallback_applies;

pub use cloudstack_auth::{Credentials, LoginCredentials, RequestSigner};

/// Re-export of the API definition crate: types, options and the catalog
pub use cloudstack_api;
