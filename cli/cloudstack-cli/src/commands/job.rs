// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Async job commands

use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::cloudstack_api::AsyncJob;
use cloudstack_client::{Client, JobWait};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum JobCommand {
    /// Show a job's current state
    Get {
        /// Job ID
        id: String,
    },

    /// Wait for a job to finish
    Wait {
        /// Job ID
        id: String,
        /// Seconds between polls
        #[arg(
            long,
            default_value_t = 2,
            value_name = "SECONDS",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        poll_interval: u64,
        /// Give up after this many seconds
        #[arg(long, default_value_t = 600, value_name = "SECONDS")]
        timeout: u64,
    },
}

impl JobCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let jobs = client.async_job_api();
        match self {
            Self::Get { id } => {
                let job = jobs
                    .get_async_job(&id)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("Job {} not found", id))?;
                show(&job, use_json)
            }
            Self::Wait {
                id,
                poll_interval,
                timeout,
            } => {
                let wait = JobWait::default()
                    .interval(Duration::from_secs(poll_interval))
                    .timeout(Duration::from_secs(timeout));
                let job = jobs.wait_for_job(&id, wait).await?;
                show(&job, use_json)
            }
        }
    }
}

fn show(job: &AsyncJob, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(job);
    }
    println!("Job:      {}", job.id);
    println!("Status:   {}", job.status());
    println!("Command:  {}", table::cell(job.cmd.as_deref()));
    println!("Instance: {}", table::cell(job.instance_id.as_deref()));
    if let Some(error) = job.error() {
        println!("Error:    {}", error);
    }
    Ok(())
}
