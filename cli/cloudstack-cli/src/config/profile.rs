// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use serde::{Deserialize, Serialize};

/// A connection profile
///
/// Stored as `profiles.d/<name>.json`. The secret key is kept in the file
/// as-is, so the configuration directory should only be readable by its
/// owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// Management server API endpoint, e.g. `https://cloud.example.com/client/api`
    pub url: String,

    #[serde(rename = "apiKey")]
    pub api_key: String,

    #[serde(rename = "secretKey")]
    pub secret_key: String,
}

impl Profile {
    pub fn new(name: String, url: String, api_key: String, secret_key: String) -> Self {
        Self {
            name,
            url,
            api_key,
            secret_key,
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let path = super::paths::profile_path(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        Ok(profile)
    }

    /// Save the profile to a file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::profile_path(&self.name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        let path = super::paths::profile_path(name);
        std::fs::remove_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to delete profile '{}': {}", name, e))?;
        Ok(())
    }

    /// List all saved profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        let profiles_dir = super::paths::profiles_dir();
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    /// Signing credentials for this profile
    pub fn credentials(&self) -> cloudstack_client::Credentials {
        cloudstack_client::Credentials::api_key(self.api_key.clone(), self.secret_key.clone())
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Previous profile (for `cloudstack profile set-current -`)
    #[serde(rename = "oldProfile", skip_serializing_if = "Option::is_none")]
    pub old_profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = super::paths::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn set_current_profile(&mut self, name: &str) {
        self.old_profile = self.profile.take();
        self.profile = Some(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_field_names() {
        let profile = Profile::new(
            "lab".to_string(),
            "http://localhost:8080/client/api".to_string(),
            "key".to_string(),
            "secret".to_string(),
        );
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["secretKey"], "secret");
    }

    #[test]
    fn test_set_current_profile_remembers_previous() {
        let mut config = Config::default();
        config.set_current_profile("one");
        config.set_current_profile("two");
        assert_eq!(config.current_profile(), Some("two"));
        assert_eq!(config.old_profile.as_deref(), Some("one"));
    }
}
