// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Host commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::Host;
use cloudstack_client::cloudstack_api::options::ListHostsOptions;

use super::{WaitArgs, follow_job};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum HostCommand {
    /// List hosts
    #[command(alias = "ls")]
    List {
        /// Filter by zone ID
        #[arg(long)]
        zone: Option<String>,
        /// Filter by host type (Routing, SecondaryStorage, ...)
        #[arg(long = "type")]
        host_type: Option<String>,
    },

    /// Migrate VMs off a host and put it into maintenance
    Maintenance {
        /// Host ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Take a host out of maintenance
    CancelMaintenance {
        /// Host ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

impl HostCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let hosts = client.global_host_api();
        match self {
            Self::List { zone, host_type } => {
                let mut options = ListHostsOptions::new();
                if let Some(zone) = zone {
                    options = options.zone_id(zone);
                }
                if let Some(host_type) = host_type {
                    options = options.host_type(host_type);
                }
                let list = hosts.list_hosts(options).await?;
                print_hosts(&list, use_json)
            }
            Self::Maintenance { id, wait } => {
                let job = hosts.prepare_host_for_maintenance(&id).await?;
                let host = follow_job(client, &job, &wait, use_json).await?;
                show_result(host, use_json)
            }
            Self::CancelMaintenance { id, wait } => {
                let job = hosts.cancel_host_maintenance(&id).await?;
                let host = follow_job(client, &job, &wait, use_json).await?;
                show_result(host, use_json)
            }
        }
    }
}

fn print_hosts(hosts: &[Host], use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(&hosts);
    }
    let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "STATE", "RESOURCE", "ZONE"]);
    for host in hosts {
        tbl.add_row(vec![
            host.id.clone(),
            table::cell(host.name.as_deref()),
            table::cell(host.host_type.as_ref()),
            table::cell(host.state.as_ref()),
            table::cell(host.resource_state.as_deref()),
            table::cell(host.zone_name.as_deref()),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}

fn show_result(host: Option<Host>, use_json: bool) -> Result<()> {
    let Some(host) = host else {
        return Ok(());
    };
    if use_json {
        return json::print_json(&host);
    }
    println!(
        "Host {} ({}) is {}",
        host.name.as_deref().unwrap_or("-"),
        host.id,
        table::cell(host.resource_state.as_deref())
    );
    Ok(())
}
