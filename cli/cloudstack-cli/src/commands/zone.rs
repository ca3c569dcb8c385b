// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zone commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::Zone;
use cloudstack_client::cloudstack_api::options::ListZonesOptions;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum ZoneCommand {
    /// List zones
    #[command(alias = "ls")]
    List {
        /// Only zones the caller may deploy into
        #[arg(long)]
        available: bool,
    },
}

impl ZoneCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List { available } => {
                let mut options = ListZonesOptions::new();
                if available {
                    options = options.available(true);
                }
                let zones = client.zone_api().list_zones(options).await?;
                print_zones(&zones, use_json)
            }
        }
    }
}

fn print_zones(zones: &[Zone], use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(&zones);
    }
    let mut tbl = table::create_table(&["ID", "NAME", "NETWORK", "STATE"]);
    for zone in zones {
        tbl.add_row(vec![
            zone.id.clone(),
            table::cell(zone.name.as_deref()),
            table::cell(zone.network_type.as_ref()),
            table::cell(zone.allocation_state.as_ref()),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}
