// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::Network;
use cloudstack_client::cloudstack_api::options::ListNetworksOptions;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum NetworkCommand {
    /// List networks
    #[command(alias = "ls")]
    List {
        /// Filter by zone ID
        #[arg(long)]
        zone: Option<String>,
    },

    /// Show a network
    Get {
        /// Network ID
        id: String,
    },
}

impl NetworkCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List { zone } => {
                let mut options = ListNetworksOptions::new();
                if let Some(zone) = zone {
                    options = options.zone_id(zone);
                }
                let networks = client.network_api().list_networks(options).await?;
                print_networks(&networks, use_json)
            }
            Self::Get { id } => {
                let network = client
                    .network_api()
                    .get_network(&id)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("Network {} not found", id))?;
                show(&network, use_json)
            }
        }
    }
}

fn print_networks(networks: &[Network], use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(&networks);
    }
    let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "STATE", "CIDR", "ZONE"]);
    for network in networks {
        tbl.add_row(vec![
            network.id.clone(),
            table::cell(network.name.as_deref()),
            table::cell(network.guest_ip_type.as_ref()),
            table::cell(network.state.as_ref()),
            table::cell(network.cidr.as_deref()),
            table::cell(network.zone_name.as_deref()),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}

fn show(network: &Network, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(network);
    }
    println!("ID:       {}", network.id);
    println!("Name:     {}", table::cell(network.name.as_deref()));
    println!("State:    {}", table::cell(network.state.as_ref()));
    println!("Type:     {}", table::cell(network.guest_ip_type.as_ref()));
    println!("Traffic:  {}", table::cell(network.traffic_type.as_ref()));
    println!("Zone:     {}", table::cell(network.zone_name.as_deref()));
    println!("CIDR:     {}", table::cell(network.cidr.as_deref()));
    println!("Gateway:  {}", table::cell(network.gateway.as_deref()));
    println!(
        "Offering: {}",
        table::cell(network.network_offering_name.as_deref())
    );
    Ok(())
}
