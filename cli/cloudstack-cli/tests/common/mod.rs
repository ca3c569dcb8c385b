// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for CLI tests

#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use cloudstack_stub_server::{StubConfig, StubContext, fixtures_dir, start_server};
use dropshot::ConfigLoggingLevel;
use std::process::Output;
use std::sync::Arc;
use tempfile::TempDir;

pub const ENV_VARS: [&str; 5] = [
    "CLOUDSTACK_PROFILE",
    "CLOUDSTACK_URL",
    "CLOUDSTACK_API_KEY",
    "CLOUDSTACK_SECRET_KEY",
    "CLOUDSTACK_CONFIG_DIR",
];

/// The `cloudstack` binary with a private config dir and no inherited
/// CLOUDSTACK_* variables
pub fn cloudstack_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cloudstack").expect("Failed to find cloudstack binary");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("CLOUDSTACK_CONFIG_DIR", config_dir.path());
    cmd
}

/// A stub management server running in the test's runtime
pub struct Stub {
    server: dropshot::HttpServer<Arc<StubContext>>,
    pub url: String,
    pub config_dir: TempDir,
}

impl Stub {
    /// Jobs finish on their first poll so `--wait` returns at once
    pub fn start() -> Self {
        let config = StubConfig {
            pending_polls: 0,
            ..StubConfig::default()
        };
        let context =
            Arc::new(StubContext::with_config(&fixtures_dir(), config).expect("load fixtures"));
        let server = start_server(
            context,
            "127.0.0.1:0".parse().unwrap(),
            ConfigLoggingLevel::Warn,
        )
        .expect("start stub server");
        let url = format!(
            "http://{}{}",
            server.local_addr(),
            cloudstack_client::cloudstack_api::API_PATH
        );
        Self {
            server,
            url,
            config_dir: TempDir::new().unwrap(),
        }
    }

    /// Command pointed at the stub through environment variables
    pub fn cmd(&self) -> Command {
        let config = StubConfig::default();
        let mut cmd = cloudstack_cmd(&self.config_dir);
        cmd.env("CLOUDSTACK_URL", &self.url)
            .env("CLOUDSTACK_API_KEY", config.api_key)
            .env("CLOUDSTACK_SECRET_KEY", config.secret_key);
        cmd
    }

    /// Run the CLI off the async runtime so the stub keeps serving
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(args);
        tokio::task::spawn_blocking(move || cmd.output())
            .await
            .unwrap()
            .unwrap()
    }

    pub async fn stop(self) {
        self.server.close().await.unwrap();
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse stdout as JSON, failing with both streams on error
pub fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "Command should succeed.\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|_| panic!("Should parse JSON output: {}", stdout(output)))
}
