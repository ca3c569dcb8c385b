// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::Volume;
use cloudstack_client::cloudstack_api::options::{CreateVolumeOptions, ListVolumesOptions};

use super::{WaitArgs, follow_job};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum VolumeCommand {
    /// List volumes
    #[command(alias = "ls")]
    List {
        /// Only volumes of this VM
        #[arg(long)]
        vm: Option<String>,
        /// Filter by zone ID
        #[arg(long)]
        zone: Option<String>,
    },

    /// Create a data volume
    Create(CreateArgs),

    /// Attach a volume to a VM
    Attach {
        /// Volume ID
        id: String,
        /// VM ID
        vm: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Detach a volume from its VM
    Detach {
        /// Volume ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Delete a detached volume
    #[command(alias = "rm")]
    Delete {
        /// Volume ID
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Volume name
    pub name: String,

    /// Zone ID
    #[arg(long)]
    pub zone: String,

    /// Disk offering ID
    #[arg(long)]
    pub disk_offering: String,

    /// Size in GB, for custom disk offerings
    #[arg(long)]
    pub size: Option<u64>,

    #[command(flatten)]
    pub wait: WaitArgs,
}

impl VolumeCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let volumes = client.volume_api();
        match self {
            Self::List { vm, zone } => {
                let mut options = ListVolumesOptions::new();
                if let Some(vm) = vm {
                    options = options.virtual_machine_id(vm);
                }
                if let Some(zone) = zone {
                    options = options.zone_id(zone);
                }
                let list = volumes.list_volumes(options).await?;
                print_volumes(&list, use_json)
            }
            Self::Create(args) => {
                let mut options = CreateVolumeOptions::new()
                    .zone_id(&args.zone)
                    .disk_offering_id(&args.disk_offering);
                if let Some(size) = args.size {
                    options = options.size(size);
                }
                let job = volumes.create_volume(&args.name, options).await?;
                let volume = follow_job(client, &job, &args.wait, use_json).await?;
                show_result(volume, use_json)
            }
            Self::Attach { id, vm, wait } => {
                let job = volumes.attach_volume(&id, &vm).await?;
                let volume = follow_job(client, &job, &wait, use_json).await?;
                show_result(volume, use_json)
            }
            Self::Detach { id, wait } => {
                let job = volumes.detach_volume(&id).await?;
                let volume = follow_job(client, &job, &wait, use_json).await?;
                show_result(volume, use_json)
            }
            Self::Delete { id } => {
                volumes.delete_volume(&id).await?;
                println!("Deleted volume {}", id);
                Ok(())
            }
        }
    }
}

fn print_volumes(volumes: &[Volume], use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(&volumes);
    }
    let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "SIZE", "STATE", "VM"]);
    for volume in volumes {
        tbl.add_row(vec![
            volume.id.clone(),
            table::cell(volume.name.as_deref()),
            table::cell(volume.volume_type.as_ref()),
            table::cell(volume.size.map(table::format_bytes)),
            table::cell(volume.state.as_ref()),
            table::cell(volume.vm_name.as_deref()),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}

fn show_result(volume: Option<Volume>, use_json: bool) -> Result<()> {
    let Some(volume) = volume else {
        return Ok(());
    };
    if use_json {
        return json::print_json(&volume);
    }
    println!(
        "Volume {} ({}) is {}, attached to {}",
        volume.name.as_deref().unwrap_or("-"),
        volume.id,
        table::cell(volume.state.as_ref()),
        volume.vm_name.as_deref().unwrap_or("nothing")
    );
    Ok(())
}
