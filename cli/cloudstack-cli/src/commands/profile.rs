// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use crate::config::{Config, ENV_PROFILE, Profile, env_profile, resolve_profile};
use crate::output::{json, table};
use anyhow::Result;
use clap::Subcommand;
use dialoguer::{Confirm, Input, Password};

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Show a profile (defaults to the current one)
    Get {
        /// Profile name
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: Option<String>,
        /// API endpoint, e.g. https://cloud.example.com/client/api
        #[arg(long)]
        url: Option<String>,
        /// API key
        #[arg(long)]
        api_key: Option<String>,
        /// Secret key
        #[arg(long)]
        secret_key: Option<String>,
        /// Make this the current profile
        #[arg(long)]
        current: bool,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        names: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(use_json),
            Self::Get { name } => get_profile(name.as_deref(), use_json),
            Self::Create {
                name,
                url,
                api_key,
                secret_key,
                current,
            } => create_profile(name, url, api_key, secret_key, current),
            Self::Delete { names, force } => delete_profiles(&names, force),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(use_json: bool) -> Result<()> {
    let current = resolve_profile(None).ok();
    let current_name = current.as_ref().map(|p| p.name.as_str());

    let mut profiles: Vec<Profile> = Vec::new();
    if let Ok(env) = env_profile() {
        profiles.push(env);
    }
    for name in Profile::list_all()? {
        match Profile::load(&name) {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!("skipping profile {}: {}", name, e),
        }
    }

    if use_json {
        json::print_json(&profiles)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "CURR", "API KEY", "URL"]);
        for profile in &profiles {
            let marker = if Some(profile.name.as_str()) == current_name {
                "*"
            } else {
                ""
            };
            tbl.add_row(vec![
                profile.name.as_str(),
                marker,
                profile.api_key.as_str(),
                profile.url.as_str(),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn get_profile(name: Option<&str>, use_json: bool) -> Result<()> {
    let profile = resolve_profile(name)?;

    if use_json {
        json::print_json(&profile)?;
    } else {
        println!("Name:       {}", profile.name);
        println!("URL:        {}", profile.url);
        println!("API key:    {}", profile.api_key);
        println!("Secret key: {}", mask(&profile.secret_key));
    }
    Ok(())
}

fn mask(secret: &str) -> String {
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("****{}", tail)
    }
}

fn create_profile(
    name: Option<String>,
    url: Option<String>,
    api_key: Option<String>,
    secret_key: Option<String>,
    current: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Profile name").interact_text()?,
    };

    if name == ENV_PROFILE {
        return Err(anyhow::anyhow!(
            "'{}' is reserved for the environment profile",
            ENV_PROFILE
        ));
    }
    if Profile::list_all()?.contains(&name) {
        return Err(anyhow::anyhow!("Profile '{}' already exists", name));
    }

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("API URL")
            .default("http://localhost:8080/client/api".to_string())
            .interact_text()?,
    };

    let api_key = match api_key {
        Some(k) => k,
        None => Input::new().with_prompt("API key").interact_text()?,
    };

    let secret_key = match secret_key {
        Some(s) => s,
        None => Password::new().with_prompt("Secret key").interact()?,
    };

    let profile = Profile::new(name.clone(), url, api_key, secret_key);
    profile.save()?;
    println!("Created profile '{}'", name);

    let mut config = Config::load()?;
    if current || config.current_profile().is_none() {
        config.set_current_profile(&name);
        config.save()?;
        println!("Set '{}' as current profile", name);
    }

    Ok(())
}

fn delete_profiles(names: &[String], force: bool) -> Result<()> {
    let mut config = Config::load()?;
    for name in names {
        if !force
            && !Confirm::new()
                .with_prompt(format!("Delete profile '{}'?", name))
                .default(false)
                .interact()?
        {
            continue;
        }
        Profile::delete(name)?;
        println!("Deleted profile '{}'", name);

        if config.current_profile() == Some(name.as_str()) {
            config.profile = None;
            config.save()?;
        }
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let target = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile to switch to"))?
    } else {
        name.to_string()
    };

    if target != ENV_PROFILE && !Profile::list_all()?.contains(&target) {
        return Err(anyhow::anyhow!("Profile '{}' does not exist", target));
    }

    config.set_current_profile(&target);
    config.save()?;
    println!("Set '{}' as current profile", target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask("stub-secret-key"), "****-key");
        assert_eq!(mask("abc"), "****");
    }
}
