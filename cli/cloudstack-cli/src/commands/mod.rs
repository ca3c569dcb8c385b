// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod account;
pub mod api;
pub mod host;
pub mod job;
pub mod network;
pub mod offering;
pub mod profile;
pub mod snapshot;
pub mod template;
pub mod usage;
pub mod vm;
pub mod vmsnapshot;
pub mod volume;
pub mod zone;

pub use account::AccountCommand;
pub use api::ApiArgs;
pub use host::HostCommand;
pub use job::JobCommand;
pub use network::NetworkCommand;
pub use offering::OfferingCommand;
pub use profile::ProfileCommand;
pub use snapshot::SnapshotCommand;
pub use template::TemplateCommand;
pub use usage::UsageCommand;
pub use vm::VmCommand;
pub use vmsnapshot::VmSnapshotCommand;
pub use volume::VolumeCommand;
pub use zone::ZoneCommand;

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use cloudstack_client::cloudstack_api::AsyncCreateResponse;
use cloudstack_client::{Client, JobWait};
use serde::de::DeserializeOwned;

use crate::output::json;

/// Flags shared by every command that starts an async job
#[derive(Args, Clone, Debug)]
pub struct WaitArgs {
    /// Wait for the job to finish and show its result
    #[arg(short, long)]
    pub wait: bool,

    /// Seconds between job polls
    #[arg(
        long,
        default_value_t = 2,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Give up waiting after this many seconds
    #[arg(long, default_value_t = 600, value_name = "SECONDS")]
    pub wait_timeout: u64,
}

impl WaitArgs {
    pub fn job_wait(&self) -> JobWait {
        JobWait::default()
            .interval(Duration::from_secs(self.poll_interval))
            .timeout(Duration::from_secs(self.wait_timeout))
    }
}

/// Report a started job, or wait for it and return its result
///
/// Without `--wait` the job ID is printed and `None` returned.
pub async fn follow_job<T: DeserializeOwned>(
    client: &Client,
    job: &AsyncCreateResponse,
    wait: &WaitArgs,
    use_json: bool,
) -> Result<Option<T>> {
    if !wait.wait {
        print_started(job, use_json)?;
        return Ok(None);
    }
    let result = client
        .async_job_api()
        .wait_for_result(&job.job_id, wait.job_wait())
        .await?;
    Ok(Some(result))
}

/// Like [`follow_job`], for jobs whose result carries nothing to show
///
/// Returns whether the job was waited for.
pub async fn follow_job_done(
    client: &Client,
    job: &AsyncCreateResponse,
    wait: &WaitArgs,
    use_json: bool,
) -> Result<bool> {
    if !wait.wait {
        print_started(job, use_json)?;
        return Ok(false);
    }
    client
        .async_job_api()
        .wait_for_job(&job.job_id, wait.job_wait())
        .await?;
    Ok(true)
}

fn print_started(job: &AsyncCreateResponse, use_json: bool) -> Result<()> {
    if use_json {
        json::print_json(job)?;
    } else {
        println!("Started job {}", job.job_id);
    }
    Ok(())
}
