// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Template commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::options::ListTemplatesOptions;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum TemplateCommand {
    /// List templates
    #[command(alias = "ls")]
    List {
        /// Template filter: featured, self, selfexecutable,
        /// sharedexecutable, executable, community or all
        #[arg(long, default_value = "executable")]
        filter: String,
        /// Filter by zone ID
        #[arg(long)]
        zone: Option<String>,
    },
}

impl TemplateCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List { filter, zone } => {
                let mut options = ListTemplatesOptions::new().filter(&filter);
                if let Some(zone) = zone {
                    options = options.zone_id(zone);
                }
                let templates = client.template_api().list_templates(options).await?;
                if use_json {
                    return json::print_json(&templates);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "OS", "READY", "ZONE"]);
                for template in &templates {
                    tbl.add_row(vec![
                        template.id.clone(),
                        table::cell(template.name.as_deref()),
                        table::cell(template.os_type_name.as_deref()),
                        table::cell(template.is_ready),
                        table::cell(template.zone_name.as_deref()),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
        }
    }
}
