// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Usage record commands
//!
//! These talk to the usage server and need an admin API key.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::UsageType;
use cloudstack_client::cloudstack_api::options::ListUsageRecordsOptions;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum UsageCommand {
    /// List usage records for a period
    #[command(alias = "ls")]
    List {
        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the period (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Only records of this usage type code (see `usage types`)
        #[arg(long = "type")]
        usage_type: Option<i64>,
    },

    /// Aggregate usage records for a period now
    Generate {
        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the period (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// List usage types
    Types,
}

impl UsageCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let usage = client.usage_api();
        match self {
            Self::List {
                start,
                end,
                usage_type,
            } => {
                if end < start {
                    return Err(anyhow::anyhow!("--end must not be before --start"));
                }
                let mut options = ListUsageRecordsOptions::new();
                if let Some(code) = usage_type {
                    options = options.usage_type(UsageType::from(code));
                }
                let records = usage.list_usage_records(start, end, options).await?;
                if use_json {
                    return json::print_json(&records);
                }
                let mut tbl = table::create_table(&["ACCOUNT", "TYPE", "DESCRIPTION", "USAGE"]);
                for record in &records {
                    tbl.add_row(vec![
                        table::cell(record.account.as_deref()),
                        table::cell(record.usage_type.as_ref()),
                        table::cell(record.description.as_deref()),
                        table::cell(record.usage.as_deref()),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
            Self::Generate { start, end } => {
                let reply = usage.generate_usage_records(start, end).await?;
                if use_json {
                    return json::print_json(&reply);
                }
                if reply.success == Some(false) {
                    return Err(anyhow::anyhow!(
                        "Usage generation failed: {}",
                        reply.display_text.as_deref().unwrap_or("no reason given")
                    ));
                }
                println!("Generated usage records from {} to {}", start, end);
                Ok(())
            }
            Self::Types => {
                let types = usage.list_usage_types().await?;
                if use_json {
                    return json::print_json(&types);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "DESCRIPTION"]);
                for descriptor in &types {
                    tbl.add_row(vec![
                        descriptor.usage_type.code().to_string(),
                        descriptor.usage_type.to_string(),
                        table::cell(descriptor.description.as_deref()),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
        }
    }
}
