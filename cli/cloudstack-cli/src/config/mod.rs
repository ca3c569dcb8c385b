// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;

pub const URL_ENV: &str = "CLOUDSTACK_URL";
pub const API_KEY_ENV: &str = "CLOUDSTACK_API_KEY";
pub const SECRET_KEY_ENV: &str = "CLOUDSTACK_SECRET_KEY";

/// Name of the profile built from environment variables
pub const ENV_PROFILE: &str = "env";

/// Build an "env" profile from environment variables
pub fn env_profile() -> Result<Profile> {
    let url = std::env::var(URL_ENV)
        .map_err(|_| anyhow::anyhow!("{} must be set", URL_ENV))?;
    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| anyhow::anyhow!("{} must be set", API_KEY_ENV))?;
    let secret_key = std::env::var(SECRET_KEY_ENV)
        .map_err(|_| anyhow::anyhow!("{} must be set", SECRET_KEY_ENV))?;

    Ok(Profile::new(ENV_PROFILE.to_string(), url, api_key, secret_key))
}

fn load_named(name: &str) -> Result<Profile> {
    if name == ENV_PROFILE {
        env_profile()
    } else {
        Profile::load(name)
    }
}

/// Resolve which profile to use
///
/// Priority:
/// 1. `--profile` argument (or `CLOUDSTACK_PROFILE`)
/// 2. "env" if `CLOUDSTACK_URL` is set
/// 3. Current profile from config.json
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    if let Some(name) = cli_profile {
        return load_named(name);
    }

    if std::env::var(URL_ENV).is_ok() {
        return env_profile();
    }

    let config = Config::load()?;
    if let Some(name) = config.current_profile() {
        return load_named(name);
    }

    Err(anyhow::anyhow!(
        "No profile configured. Use 'cloudstack profile create' or set {}, {} and {}",
        URL_ENV,
        API_KEY_ENV,
        SECRET_KEY_ENV
    ))
}
