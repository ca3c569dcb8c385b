// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile CLI tests
//!
//! These only touch the configuration directory.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

mod common;

use common::cloudstack_cmd;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn create(dir: &TempDir, name: &str) {
    cloudstack_cmd(dir)
        .args([
            "profile",
            "create",
            name,
            "--url",
            "http://localhost:8080/client/api",
            "--api-key",
            &format!("{}-key", name),
            "--secret-key",
            &format!("{}-secret", name),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created profile '{}'", name)));
}

#[test]
fn test_profile_get_env() {
    let dir = TempDir::new().unwrap();

    let output = cloudstack_cmd(&dir)
        .args(["profile", "get", "-j", "env"])
        .env("CLOUDSTACK_URL", "https://cloud.example.com/client/api")
        .env("CLOUDSTACK_API_KEY", "env-key")
        .env("CLOUDSTACK_SECRET_KEY", "env-secret")
        .output()
        .unwrap();
    let profile = common::json(&output);

    assert_eq!(profile["name"], "env");
    assert_eq!(profile["url"], "https://cloud.example.com/client/api");
    assert_eq!(profile["apiKey"], "env-key");
}

#[test]
fn test_profile_env_requires_all_variables() {
    let dir = TempDir::new().unwrap();

    cloudstack_cmd(&dir)
        .args(["profile", "get", "env"])
        .env("CLOUDSTACK_URL", "https://cloud.example.com/client/api")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CLOUDSTACK_API_KEY must be set"));
}

#[test]
fn test_first_profile_becomes_current() {
    let dir = TempDir::new().unwrap();
    create(&dir, "lab");

    let output = cloudstack_cmd(&dir)
        .args(["profile", "get", "--json"])
        .output()
        .unwrap();
    let profile = common::json(&output);
    assert_eq!(profile["name"], "lab");
    assert_eq!(profile["secretKey"], "lab-secret");

    let config: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("config.json")).unwrap())
            .unwrap();
    assert_eq!(config["profile"], "lab");
}

#[test]
fn test_profile_list_and_set_current() {
    let dir = TempDir::new().unwrap();
    create(&dir, "alpha");
    create(&dir, "beta");

    let output = cloudstack_cmd(&dir)
        .args(["profile", "list", "--json"])
        .output()
        .unwrap();
    let names: Vec<String> = common::json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);

    cloudstack_cmd(&dir)
        .args(["profile", "set-current", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set 'beta' as current profile"));

    cloudstack_cmd(&dir)
        .args(["profile", "set-current", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set 'alpha' as current profile"));
}

#[test]
fn test_profile_get_text_masks_secret() {
    let dir = TempDir::new().unwrap();
    create(&dir, "lab");

    cloudstack_cmd(&dir)
        .args(["profile", "get", "lab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API key:    lab-key"))
        .stdout(predicate::str::contains("lab-secret").not());
}

#[test]
fn test_duplicate_and_reserved_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    create(&dir, "lab");

    cloudstack_cmd(&dir)
        .args([
            "profile", "create", "lab", "--url", "u", "--api-key", "k", "--secret-key", "s",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cloudstack_cmd(&dir)
        .args([
            "profile", "create", "env", "--url", "u", "--api-key", "k", "--secret-key", "s",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn test_profile_delete_clears_current() {
    let dir = TempDir::new().unwrap();
    create(&dir, "lab");

    cloudstack_cmd(&dir)
        .args(["profile", "delete", "--force", "lab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted profile 'lab'"));

    assert!(!dir.path().join("profiles.d/lab.json").exists());

    cloudstack_cmd(&dir)
        .args(["zone", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile configured"));
}

#[test]
fn test_set_current_unknown_profile() {
    let dir = TempDir::new().unwrap();

    cloudstack_cmd(&dir)
        .args(["profile", "set-current", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
