// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Raw HTTP tests for the stub server
//!
//! These talk to the stub with plain reqwest so that the wire format is
//! checked independently of the client library.

use cloudstack_auth::{RequestSigner, SecretString, hash_password};
use cloudstack_stub_server::{StubConfig, StubContext, fixtures_dir, start_server};
use dropshot::ConfigLoggingLevel;
use serde_json::Value;
use std::sync::Arc;

struct Stub {
    server: dropshot::HttpServer<Arc<StubContext>>,
    url: String,
    http: reqwest::Client,
    config: StubConfig,
}

impl Stub {
    fn start(config: StubConfig) -> Self {
        let _ = rustls::crypto::ring::default_provider().install_default();
        let context = Arc::new(
            StubContext::with_config(&fixtures_dir(), config.clone()).expect("load fixtures"),
        );
        let server = start_server(
            context,
            "127.0.0.1:0".parse().unwrap(),
            ConfigLoggingLevel::Warn,
        )
        .expect("start stub server");
        let url = format!("http://{}{}", server.local_addr(), cloudstack_api::API_PATH);
        Self {
            server,
            url,
            http: reqwest::Client::new(),
            config,
        }
    }

    fn signed(&self, params: &[(&str, &str)]) -> Vec<(String, String)> {
        RequestSigner::new(
            &self.config.api_key,
            SecretString::from(self.config.secret_key.clone()),
        )
        .sign(params.iter().copied())
        .unwrap()
    }

    async fn get(&self, params: &[(String, String)]) -> (u16, Value) {
        let mut url = reqwest::Url::parse(&self.url).unwrap();
        url.query_pairs_mut().extend_pairs(params);
        let response = self.http.get(url).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    async fn post_form(&self, params: &[(&str, &str)]) -> reqwest::Response {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        self.http
            .post(&self.url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await
            .unwrap()
    }

    async fn stop(self) {
        self.server.close().await.unwrap();
    }
}

#[tokio::test]
async fn test_signed_list_returns_envelope_with_count() {
    let stub = Stub::start(StubConfig::default());

    let params = stub.signed(&[("command", "listZones"), ("response", "json")]);
    let (status, body) = stub.get(&params).await;

    assert_eq!(status, 200);
    let inner = &body["listzonesresponse"];
    assert_eq!(inner["count"], 2);
    assert_eq!(inner["zone"].as_array().unwrap().len(), 2);

    stub.stop().await;
}

#[tokio::test]
async fn test_unsigned_request_is_rejected() {
    let stub = Stub::start(StubConfig::default());

    let params = vec![
        ("command".to_string(), "listZones".to_string()),
        ("response".to_string(), "json".to_string()),
    ];
    let (status, body) = stub.get(&params).await;

    assert_eq!(status, 401);
    assert_eq!(body["listzonesresponse"]["errorcode"], 401);

    stub.stop().await;
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() {
    let stub = Stub::start(StubConfig::default());

    let params = RequestSigner::new("stub-api-key", SecretString::from("wrong".to_string()))
        .sign([("command", "listZones"), ("response", "json")])
        .unwrap();
    let (status, _) = stub.get(&params).await;
    assert_eq!(status, 401);

    stub.stop().await;
}

#[tokio::test]
async fn test_list_filters_and_pages() {
    let stub = Stub::start(StubConfig::default());

    let params = stub.signed(&[
        ("command", "listVirtualMachines"),
        ("response", "json"),
        ("state", "running"),
    ]);
    let (_, body) = stub.get(&params).await;
    assert_eq!(body["listvirtualmachinesresponse"]["count"], 3);

    let params = stub.signed(&[
        ("command", "listVirtualMachines"),
        ("response", "json"),
        ("page", "2"),
        ("pagesize", "2"),
    ]);
    let (_, body) = stub.get(&params).await;
    let inner = &body["listvirtualmachinesresponse"];
    assert_eq!(inner["count"], 5);
    let names: Vec<&str> = inner["virtualmachine"]
        .as_array()
        .unwrap()
        .iter()
        .map(|vm| vm["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["web-03", "web-04"]);

    stub.stop().await;
}

#[tokio::test]
async fn test_missing_id_answers_431() {
    let stub = Stub::start(StubConfig::default());

    let params = stub.signed(&[
        ("command", "listVolumes"),
        ("response", "json"),
        ("id", "no-such-volume"),
    ]);
    let (status, body) = stub.get(&params).await;

    assert_eq!(status, 431);
    let text = body["listvolumesresponse"]["errortext"].as_str().unwrap();
    assert!(text.contains("does not exist"));

    stub.stop().await;
}

#[tokio::test]
async fn test_unknown_command_answers_432() {
    let stub = Stub::start(StubConfig::default());

    let params = stub.signed(&[("command", "listWidgets"), ("response", "json")]);
    let (status, body) = stub.get(&params).await;

    assert_eq!(status, 432);
    assert_eq!(body["listwidgetsresponse"]["cserrorcode"], 9999);

    stub.stop().await;
}

#[tokio::test]
async fn test_job_pending_then_done() {
    let stub = Stub::start(StubConfig {
        pending_polls: 2,
        ..StubConfig::default()
    });
    let job_id = "11111111-2222-4333-8444-555555550011";

    let mut statuses = Vec::new();
    for _ in 0..3 {
        let params = stub.signed(&[
            ("command", "queryAsyncJobResult"),
            ("response", "json"),
            ("jobid", job_id),
        ]);
        let (_, body) = stub.get(&params).await;
        statuses.push(body["queryasyncjobresultresponse"]["jobstatus"].as_i64().unwrap());
    }

    assert_eq!(statuses, vec![0, 0, 1]);

    stub.stop().await;
}

#[tokio::test]
async fn test_login_post_issues_session_and_cookie() {
    let stub = Stub::start(StubConfig::default());

    let password = hash_password("password");
    let response = stub
        .post_form(&[
            ("command", "login"),
            ("response", "json"),
            ("username", "admin"),
            ("password", &password),
            ("domain", "/"),
        ])
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("JSESSIONID="));

    let body: Value = response.json().await.unwrap();
    let session_key = body["loginresponse"]["sessionkey"]
        .as_str()
        .unwrap()
        .to_string();

    let params = vec![
        ("command".to_string(), "listZones".to_string()),
        ("response".to_string(), "json".to_string()),
        ("sessionkey".to_string(), session_key),
    ];
    let (status, _) = stub.get(&params).await;
    assert_eq!(status, 200);

    stub.stop().await;
}

#[tokio::test]
async fn test_login_with_bad_password_answers_531() {
    let stub = Stub::start(StubConfig::default());

    let password = hash_password("nope");
    let response = stub
        .post_form(&[
            ("command", "login"),
            ("response", "json"),
            ("username", "admin"),
            ("password", &password),
        ])
        .await;
    assert_eq!(response.status().as_u16(), 531);

    stub.stop().await;
}
