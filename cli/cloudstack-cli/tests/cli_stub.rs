// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI tests against the in-process stub server

#![allow(deprecated)]

mod common;

use common::{Stub, json, stderr, stdout};
use pretty_assertions::assert_eq;

const VM_3: &str = "0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a03";
const VM_5: &str = "0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a05";
const DATA_VOLUME: &str = "5c4b3a29-1807-4f6e-8d5c-4b3a29180702";
const START_JOB: &str = "11111111-2222-4333-8444-555555550011";

fn names(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zone_list_json() {
    let stub = Stub::start();

    let zones = json(&stub.run(&["zone", "list", "--json"]).await);
    assert_eq!(names(&zones), vec!["zone1", "zone2"]);

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_list_table() {
    let stub = Stub::start();

    let output = stub.run(&["vm", "list"]).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("NAME"));
    assert!(text.contains("web-01"));
    assert!(text.contains("web-05"));

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_list_filters_and_pages() {
    let stub = Stub::start();

    let running = json(&stub.run(&["vm", "list", "--state", "Running", "--json"]).await);
    assert_eq!(running.as_array().unwrap().len(), 3);

    let all = json(&stub.run(&["vm", "list", "--page-size", "2", "--json"]).await);
    assert_eq!(
        names(&all),
        vec!["web-01", "web-02", "web-03", "web-04", "web-05"]
    );

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_get_missing_fails() {
    let stub = Stub::start();

    let output = stub.run(&["vm", "get", "no-such-vm"]).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Virtual machine no-such-vm not found"));

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_start_without_wait_prints_job() {
    let stub = Stub::start();

    let output = stub.run(&["vm", "start", VM_3]).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(&format!("Started job {}", START_JOB)));

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_start_wait_shows_result() {
    let stub = Stub::start();

    let vm = json(
        &stub
            .run(&["vm", "start", VM_3, "--wait", "--poll-interval", "1", "--json"])
            .await,
    );
    assert_eq!(vm["id"], VM_3);
    assert_eq!(vm["state"], "Running");

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_deploy_wait_shows_vm() {
    let stub = Stub::start();

    let vm = json(
        &stub
            .run(&[
                "vm",
                "deploy",
                "--zone",
                "1128bd56-b4d9-4ac6-a7b9-c715b187ce11",
                "--offering",
                "c6f3a8d2-1b4e-4f7a-9c2d-3e5f6a7b8c01",
                "--template",
                "7e2c9a1b-5d3f-4c8e-9a6b-1f0e2d3c4b01",
                "--name",
                "web-01",
                "--wait",
                "--json",
            ])
            .await,
    );
    assert_eq!(vm["id"], "0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a01");
    assert_eq!(vm["name"], "web-01");

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_poll_interval_is_rejected() {
    let stub = Stub::start();

    let output = stub
        .run(&["vm", "start", VM_3, "--wait", "--poll-interval", "0"])
        .await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--poll-interval"));

    let output = stub
        .run(&["job", "wait", START_JOB, "--poll-interval", "0"])
        .await;
    assert!(!output.status.success());

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_destroy_failed_job_is_reported() {
    let stub = Stub::start();

    let output = stub
        .run(&["vm", "destroy", VM_5, "--wait", "--poll-interval", "1"])
        .await;
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed"), "stderr: {}", err);
    assert!(err.contains("error 530"), "stderr: {}", err);

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_volume_attach_wait() {
    let stub = Stub::start();

    let volume = json(
        &stub
            .run(&[
                "volume",
                "attach",
                DATA_VOLUME,
                "0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a01",
                "--wait",
                "--poll-interval",
                "1",
                "--json",
            ])
            .await,
    );
    assert_eq!(volume["id"], DATA_VOLUME);
    assert_eq!(
        volume["virtualmachineid"],
        "0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a01"
    );

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_job_get() {
    let stub = Stub::start();

    let job = json(&stub.run(&["job", "get", START_JOB, "--json"]).await);
    assert_eq!(job["jobid"], START_JOB);
    assert_eq!(job["jobstatus"], 1);

    let output = stub.run(&["job", "get", "no-such-job"]).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Job no-such-job not found"));

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_usage_types() {
    let stub = Stub::start();

    let types = json(&stub.run(&["usage", "types", "--json"]).await);
    assert!(!types.as_array().unwrap().is_empty());

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_passthrough() {
    let stub = Stub::start();

    let inner = json(&stub.run(&["api", "listZones", "name=zone2"]).await);
    assert_eq!(inner["count"], 1);
    assert_eq!(inner["zone"][0]["name"], "zone2");

    let output = stub.run(&["api", "listWidgets"]).await;
    assert!(!output.status.success());

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_secret_fails() {
    let stub = Stub::start();

    let output = stub
        .run(&["zone", "list", "--secret-key", "not-the-secret"])
        .await;
    assert!(!output.status.success());

    stub.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_saved_profile_is_used() {
    let stub = Stub::start();

    let create = stub
        .run(&[
            "profile",
            "create",
            "stub",
            "--url",
            &stub.url,
            "--api-key",
            "stub-api-key",
            "--secret-key",
            "stub-secret-key",
        ])
        .await;
    assert!(create.status.success(), "stderr: {}", stderr(&create));

    let mut cmd = common::cloudstack_cmd(&stub.config_dir);
    cmd.args(["zone", "list", "--json"]);
    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(json(&output).as_array().unwrap().len(), 2);

    stub.stop().await;
}
