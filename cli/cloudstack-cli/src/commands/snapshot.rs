// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume snapshot commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::Snapshot;
use cloudstack_client::cloudstack_api::options::{CreateSnapshotOptions, ListSnapshotsOptions};

use super::{WaitArgs, follow_job};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum SnapshotCommand {
    /// List volume snapshots
    #[command(alias = "ls")]
    List {
        /// Only snapshots of this volume
        #[arg(long)]
        volume: Option<String>,
    },

    /// Snapshot a volume
    Create {
        /// Volume ID
        volume: String,
        /// Snapshot name
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

impl SnapshotCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List { volume } => {
                let mut options = ListSnapshotsOptions::new();
                if let Some(volume) = volume {
                    options = options.volume_id(volume);
                }
                let snapshots = client.snapshot_api().list_snapshots(options).await?;
                print_snapshots(&snapshots, use_json)
            }
            Self::Create { volume, name, wait } => {
                let mut options = CreateSnapshotOptions::new();
                if let Some(name) = name {
                    options = options.name(name);
                }
                let job = client
                    .snapshot_api()
                    .create_snapshot(&volume, options)
                    .await?;
                if let Some(snapshot) =
                    follow_job::<Snapshot>(client, &job, &wait, use_json).await?
                {
                    if use_json {
                        json::print_json(&snapshot)?;
                    } else {
                        println!(
                            "Snapshot {} ({}) is {}",
                            snapshot.name.as_deref().unwrap_or("-"),
                            snapshot.id,
                            table::cell(snapshot.state.as_ref())
                        );
                    }
                }
                Ok(())
            }
        }
    }
}

fn print_snapshots(snapshots: &[Snapshot], use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(&snapshots);
    }
    let mut tbl = table::create_table(&["ID", "NAME", "VOLUME", "STATE", "CREATED"]);
    for snapshot in snapshots {
        tbl.add_row(vec![
            snapshot.id.clone(),
            table::cell(snapshot.name.as_deref()),
            table::cell(snapshot.volume_name.as_deref()),
            table::cell(snapshot.state.as_ref()),
            table::cell(snapshot.created.as_ref().map(|t| t.to_rfc3339())),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}
