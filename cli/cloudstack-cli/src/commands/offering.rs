// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Offering commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::options::{
    ListDiskOfferingsOptions, ListNetworkOfferingsOptions, ListServiceOfferingsOptions,
};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum OfferingCommand {
    /// List service (compute) offerings
    Service,

    /// List disk offerings
    Disk {
        /// Filter by zone ID
        #[arg(long)]
        zone: Option<String>,
    },

    /// List network offerings
    Network {
        /// Filter by zone ID
        #[arg(long)]
        zone: Option<String>,
    },
}

impl OfferingCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let offerings = client.offering_api();
        match self {
            Self::Service => {
                let list = offerings
                    .list_service_offerings(ListServiceOfferingsOptions::new())
                    .await?;
                if use_json {
                    return json::print_json(&list);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "CPUS", "MEMORY"]);
                for offering in &list {
                    tbl.add_row(vec![
                        offering.id.clone(),
                        table::cell(offering.name.as_deref()),
                        table::cell(offering.cpu_number),
                        table::cell(offering.memory.map(|mib| format!("{} MiB", mib))),
                    ]);
                }
                table::print_table(tbl);
            }
            Self::Disk { zone } => {
                let mut options = ListDiskOfferingsOptions::new();
                if let Some(zone) = zone {
                    options = options.zone_id(zone);
                }
                let list = offerings.list_disk_offerings(options).await?;
                if use_json {
                    return json::print_json(&list);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "SIZE", "CUSTOM"]);
                for offering in &list {
                    tbl.add_row(vec![
                        offering.id.clone(),
                        table::cell(offering.name.as_deref()),
                        table::cell(offering.disk_size.map(|gb| format!("{} GB", gb))),
                        table::cell(offering.is_customized),
                    ]);
                }
                table::print_table(tbl);
            }
            Self::Network { zone } => {
                let mut options = ListNetworkOfferingsOptions::new();
                if let Some(zone) = zone {
                    options = options.zone_id(zone);
                }
                let list = offerings.list_network_offerings(options).await?;
                if use_json {
                    return json::print_json(&list);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "STATE"]);
                for offering in &list {
                    tbl.add_row(vec![
                        offering.id.clone(),
                        table::cell(offering.name.as_deref()),
                        table::cell(offering.guest_ip_type.as_ref()),
                        table::cell(offering.state.as_ref()),
                    ]);
                }
                table::print_table(tbl);
            }
        }
        Ok(())
    }
}
