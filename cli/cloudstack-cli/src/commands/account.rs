// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::options::ListAccountsOptions;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum AccountCommand {
    /// List accounts
    #[command(alias = "ls")]
    List {
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
    },
}

impl AccountCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List { name } => {
                let mut options = ListAccountsOptions::new();
                if let Some(name) = name {
                    options = options.name(name);
                }
                let accounts = client.account_api().list_accounts(options).await?;
                if use_json {
                    return json::print_json(&accounts);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "STATE", "DOMAIN"]);
                for account in &accounts {
                    tbl.add_row(vec![
                        account.id.clone(),
                        table::cell(account.name.as_deref()),
                        table::cell(account.account_type.as_ref()),
                        table::cell(account.state.as_ref()),
                        table::cell(account.domain.as_deref()),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
        }
    }
}
