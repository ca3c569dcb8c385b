// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VM snapshot commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::options::{CreateVmSnapshotOptions, ListVmSnapshotOptions};
use cloudstack_client::cloudstack_api::{VirtualMachine, VmSnapshot};

use super::{WaitArgs, follow_job, follow_job_done};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum VmSnapshotCommand {
    /// List VM snapshots
    #[command(alias = "ls")]
    List {
        /// Only snapshots of this VM
        #[arg(long)]
        vm: Option<String>,
    },

    /// Snapshot a VM
    Create {
        /// VM ID
        vm: String,
        /// Snapshot name
        #[arg(long)]
        name: Option<String>,
        /// Include the VM's memory
        #[arg(long)]
        memory: bool,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Revert a VM to a snapshot
    Revert {
        /// VM snapshot ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Delete a VM snapshot
    #[command(alias = "rm")]
    Delete {
        /// VM snapshot ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

impl VmSnapshotCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let snapshots = client.vm_snapshot_api();
        match self {
            Self::List { vm } => {
                let mut options = ListVmSnapshotOptions::new();
                if let Some(vm) = vm {
                    options = options.virtual_machine_id(vm);
                }
                let list = snapshots.list_vm_snapshots(options).await?;
                if use_json {
                    return json::print_json(&list);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "STATE", "CURRENT"]);
                for snapshot in &list {
                    tbl.add_row(vec![
                        snapshot.id.clone(),
                        table::cell(snapshot.name.as_deref()),
                        table::cell(snapshot.snapshot_type.as_ref()),
                        table::cell(snapshot.state.as_ref()),
                        table::cell(snapshot.is_current),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
            Self::Create {
                vm,
                name,
                memory,
                wait,
            } => {
                let mut options = CreateVmSnapshotOptions::new();
                if let Some(name) = name {
                    options = options.name(name);
                }
                if memory {
                    options = options.snapshot_memory(true);
                }
                let job = snapshots.create_vm_snapshot(&vm, options).await?;
                if let Some(snapshot) =
                    follow_job::<VmSnapshot>(client, &job, &wait, use_json).await?
                {
                    if use_json {
                        json::print_json(&snapshot)?;
                    } else {
                        println!(
                            "VM snapshot {} ({}) is {}",
                            snapshot.name.as_deref().unwrap_or("-"),
                            snapshot.id,
                            table::cell(snapshot.state.as_ref())
                        );
                    }
                }
                Ok(())
            }
            Self::Revert { id, wait } => {
                let job = snapshots.revert_to_vm_snapshot(&id).await?;
                if let Some(vm) = follow_job::<VirtualMachine>(client, &job, &wait, use_json).await?
                {
                    if use_json {
                        json::print_json(&vm)?;
                    } else {
                        println!(
                            "Reverted virtual machine {} to snapshot {}",
                            vm.name.as_deref().unwrap_or(&vm.id),
                            id
                        );
                    }
                }
                Ok(())
            }
            Self::Delete { id, wait } => {
                let job = snapshots.delete_vm_snapshot(&id).await?;
                if follow_job_done(client, &job, &wait, use_json).await? && !use_json {
                    println!("Deleted VM snapshot {}", id);
                }
                Ok(())
            }
        }
    }
}
