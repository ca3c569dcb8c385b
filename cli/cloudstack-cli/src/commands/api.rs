// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Raw API access
//!
//! `cloudstack api listZones name=zone1` sends any command, signed like
//! every other request, and prints the unwrapped response as JSON.

use anyhow::Result;
use clap::Args;
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::QueryParams;

use crate::output::json;

#[derive(Args, Clone)]
pub struct ApiArgs {
    /// API command name, e.g. listVirtualMachines
    pub command: String,

    /// Parameters as key=value
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

impl ApiArgs {
    pub async fn run(self, client: &Client) -> Result<()> {
        let params = parse_params(&self.params)?;
        let response = client.execute_raw(&self.command, params).await?;
        json::print_json(&response)
    }
}

fn parse_params(pairs: &[String]) -> Result<QueryParams> {
    let mut params = QueryParams::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected KEY=VALUE, got '{}'", pair))?;
        if key.is_empty() {
            return Err(anyhow::anyhow!("Empty parameter name in '{}'", pair));
        }
        params.set(key, value);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let params = parse_params(&["name=zone1".to_string(), "tags[0].key=a=b".to_string()])
            .unwrap();
        assert_eq!(params.get("name"), Some("zone1"));
        assert_eq!(params.get("tags[0].key"), Some("a=b"));
    }

    #[test]
    fn test_parse_params_rejects_bare_words() {
        assert!(parse_params(&["zone1".to_string()]).is_err());
        assert!(parse_params(&["=zone1".to_string()]).is_err());
    }
}
