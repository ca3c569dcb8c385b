// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Stub CloudStack management server for testing
//!
//! This crate provides a Dropshot-based HTTP server that implements the
//! [`CloudStackApi`] trait over static fixture data. It can be used for:
//!
//! - Integration testing of the client library without a real cloud
//! - End-to-end testing of the `cloudstack` CLI
//! - Local development and demos
//!
//! Fixtures are raw management server responses, one file per command
//! (`fixtures/listzones.json` answers `listZones`). Async job results live
//! in `fixtures/jobs.json`.
//!
//! Unlike a plain file server the stub checks credentials the way the
//! management server does: API-key requests must carry a valid signature,
//! and session requests a session key issued by `login`.

use anyhow::{Context, Result};
use chrono::Utc;
use cloudstack_api::{CloudStackApi, CommandQuery, commands, response_key};
use cloudstack_auth::{
    API_KEY_PARAM, EXPIRES_PARAM, SESSION_COOKIE, SIGNATURE_PARAM, SIGNATURE_VERSION_PARAM,
    SecretString, hash_password, verify_signature,
};
use dropshot::{
    Body, ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpError, HttpServer,
    HttpServerStarter, Query, RequestContext, UntypedBody,
};
use http::{HeaderMap, Response, StatusCode, header};
use serde_json::{Map, Value, json};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Credentials rejected
const UNAUTHORIZED: u16 = 401;
/// Bad or missing parameter, or entity not found
const PARAM_ERROR: u16 = 431;
/// Command unknown or not available to the caller
const UNSUPPORTED_ACTION: u16 = 432;
/// Login failed
const ACCOUNT_ERROR: u16 = 531;
/// `cserrorcode` reported with every stub error
const CS_ERROR_CODE: i64 = 9999;

const SESSION_KEY_PARAM: &str = "sessionkey";

/// Job fields reported while a job is still pending
const PENDING_JOB_FIELDS: &[&str] = &[
    "jobid",
    "accountid",
    "userid",
    "cmd",
    "jobinstancetype",
    "jobinstanceid",
    "created",
];

/// Parameters that never filter list results
const RESERVED_PARAMS: &[&str] = &[
    "command",
    "response",
    API_KEY_PARAM,
    SIGNATURE_PARAM,
    SIGNATURE_VERSION_PARAM,
    EXPIRES_PARAM,
    SESSION_KEY_PARAM,
    "page",
    "pagesize",
    "listall",
    "keyword",
    "isrecursive",
    "templatefilter",
    "details",
    "startdate",
    "enddate",
];

// ============================================================================
// Configuration
// ============================================================================

/// Accounts and behaviour of the stub server
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub api_key: String,
    pub secret_key: String,
    /// Username accepted by `login`
    pub username: String,
    /// Plain-text password accepted by `login` (clients send its MD5 hash)
    pub password: String,
    /// How many times a job reports pending before its fixture result
    pub pending_polls: u32,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            api_key: "stub-api-key".to_string(),
            secret_key: "stub-secret-key".to_string(),
            username: "admin".to_string(),
            password: "password".to_string(),
            pending_polls: 1,
        }
    }
}

// ============================================================================
// Server Context
// ============================================================================

#[derive(Debug, Default)]
struct StubState {
    /// Session key to `JSESSIONID`
    sessions: HashMap<String, String>,
    /// Polls seen per job ID
    polls: HashMap<String, u32>,
}

/// Context for the stub server containing all fixture data
#[derive(Debug)]
pub struct StubContext {
    config: StubConfig,
    /// Unwrapped responses indexed by lower-case command name
    fixtures: HashMap<String, Value>,
    /// Finished jobs indexed by job ID
    jobs: HashMap<String, Value>,
    /// IDs of every entity in the list fixtures
    entity_ids: HashSet<String>,
    state: Mutex<StubState>,
}

impl StubContext {
    /// Load fixtures with the default configuration
    pub fn from_fixtures(fixtures_dir: &Path) -> Result<Self> {
        Self::with_config(fixtures_dir, StubConfig::default())
    }

    /// Load every `*.json` fixture in `fixtures_dir`
    ///
    /// A fixture may hold the full `{"<command>response": {...}}` envelope
    /// or just its contents. Files that do not parse are skipped.
    pub fn with_config(fixtures_dir: &Path, config: StubConfig) -> Result<Self> {
        let mut fixtures = HashMap::new();
        let mut jobs = HashMap::new();

        for entry in std::fs::read_dir(fixtures_dir).with_context(|| {
            format!(
                "Failed to read fixtures directory: {}",
                fixtures_dir.display()
            )
        })? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let stem = stem.to_lowercase();

            let json_str = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let value: Value = match serde_json::from_str(&json_str) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Skipping {}: not valid JSON ({})", path.display(), e);
                    continue;
                }
            };

            if stem == "jobs" {
                jobs = load_jobs(value)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                continue;
            }

            tracing::debug!("Loaded fixture for {}", stem);
            fixtures.insert(stem.clone(), unwrap_fixture(&stem, value));
        }

        let mut entity_ids = HashSet::new();
        for (name, fixture) in fixtures.iter().filter(|(name, _)| name.starts_with("list")) {
            if let Some((_, items)) = list_items(name, fixture) {
                entity_ids.extend(
                    items
                        .iter()
                        .filter_map(|item| item.get("id").and_then(Value::as_str))
                        .map(str::to_string),
                );
            }
        }

        Ok(Self {
            config,
            fixtures,
            jobs,
            entity_ids,
            state: Mutex::new(StubState::default()),
        })
    }

    /// Commands with a fixture, lower-cased and sorted
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fixtures.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Execute one command
    async fn execute(
        &self,
        params: &[(String, String)],
        headers: &HeaderMap,
    ) -> Result<Response<Body>, HttpError> {
        let Some(command) = param(params, "command") else {
            return error_response("api", PARAM_ERROR, "missing parameter command");
        };
        let name = command.to_lowercase();
        tracing::info!(command = %command, "stub request");

        if name == "login" {
            return self.login(params).await;
        }
        if let Err(text) = self.authorize(params, headers).await {
            return error_response(&name, UNAUTHORIZED, &text);
        }

        match name.as_str() {
            "logout" => self.logout(params).await,
            "queryasyncjobresult" => self.query_async_job(params).await,
            _ => match self.fixtures.get(&name) {
                Some(fixture) if name.starts_with("list") => list_response(&name, fixture, params),
                Some(fixture) => match param(params, "id") {
                    Some(id) if !self.entity_ids.contains(id) => {
                        error_response(&name, PARAM_ERROR, &missing_entity(command, id))
                    }
                    _ => json_response(&name, StatusCode::OK, fixture.clone()),
                },
                None => error_response(
                    &name,
                    UNSUPPORTED_ACTION,
                    &format!(
                        "The given command:{} does not exist or it is not available for user",
                        command
                    ),
                ),
            },
        }
    }

    /// Check the request's signature or session key
    async fn authorize(
        &self,
        params: &[(String, String)],
        headers: &HeaderMap,
    ) -> std::result::Result<(), String> {
        if param(params, SIGNATURE_PARAM).is_some() {
            if param(params, API_KEY_PARAM) != Some(self.config.api_key.as_str()) {
                return Err("unable to verify user credentials: unknown api key".to_string());
            }
            let secret = SecretString::from(self.config.secret_key.clone());
            return verify_signature(params, &secret, Utc::now())
                .map_err(|e| format!("unable to verify user credentials: {}", e));
        }

        let Some(session_key) = param(params, SESSION_KEY_PARAM) else {
            return Err("unable to verify user credentials and/or request signature".to_string());
        };
        let state = self.state.lock().await;
        let Some(jsession_id) = state.sessions.get(session_key) else {
            return Err("session expired or invalid".to_string());
        };
        match cookie(headers, SESSION_COOKIE) {
            Some(sent) if sent != *jsession_id => Err("session cookie mismatch".to_string()),
            _ => Ok(()),
        }
    }

    async fn login(&self, params: &[(String, String)]) -> Result<Response<Body>, HttpError> {
        let username = param(params, "username").unwrap_or_default();
        let password = param(params, "password").unwrap_or_default();
        let expected = hash_password(&self.config.password);

        if username != self.config.username
            || (password != expected && password != self.config.password)
        {
            return error_response(
                "login",
                ACCOUNT_ERROR,
                "Failed to authenticate user admin; please provide valid credentials",
            );
        }

        let session_key = Uuid::new_v4().to_string();
        let jsession_id = Uuid::new_v4().simple().to_string().to_uppercase();
        self.state
            .lock()
            .await
            .sessions
            .insert(session_key.clone(), jsession_id.clone());

        let body = json!({
            "loginresponse": {
                "timeout": "1800",
                "sessionkey": session_key,
                "username": username,
                "userid": "b6d1f8ac-8c2b-4a7e-9b0f-7c3f0f1e0001",
                "account": "admin",
                "domainid": "4f0e8f2a-1c3d-4e5f-8a9b-0c1d2e3f0001",
                "type": "1",
                "firstname": "Admin",
                "lastname": "User",
                "registered": "false",
            }
        });
        let cookie = format!("{}={}; Path=/client; HttpOnly", SESSION_COOKIE, jsession_id);
        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::SET_COOKIE, cookie)
            .body(body.to_string().into())
            .map_err(|e| HttpError::for_internal_error(format!("Failed to build response: {}", e)))
    }

    async fn logout(&self, params: &[(String, String)]) -> Result<Response<Body>, HttpError> {
        if let Some(session_key) = param(params, SESSION_KEY_PARAM) {
            self.state.lock().await.sessions.remove(session_key);
        }
        json_response("logout", StatusCode::OK, json!({ "description": "success" }))
    }

    /// Report a job as pending for the configured number of polls, then
    /// answer with its fixture
    async fn query_async_job(
        &self,
        params: &[(String, String)],
    ) -> Result<Response<Body>, HttpError> {
        let name = "queryasyncjobresult";
        let Some(job_id) = param(params, "jobid") else {
            return error_response(name, PARAM_ERROR, "missing parameter jobid");
        };
        let Some(job) = self.jobs.get(job_id) else {
            return error_response(
                name,
                PARAM_ERROR,
                &format!("Job with specified id {} does not exist", job_id),
            );
        };

        let polls = {
            let mut state = self.state.lock().await;
            let count = state.polls.entry(job_id.to_string()).or_insert(0);
            *count += 1;
            *count
        };
        if polls <= self.config.pending_polls {
            let mut pending = Map::new();
            for key in PENDING_JOB_FIELDS {
                if let Some(value) = job.get(*key) {
                    pending.insert(key.to_string(), value.clone());
                }
            }
            pending.insert("jobstatus".to_string(), json!(0));
            pending.insert("jobprocstatus".to_string(), json!(0));
            pending.insert("jobresultcode".to_string(), json!(0));
            return json_response(name, StatusCode::OK, Value::Object(pending));
        }

        json_response(name, StatusCode::OK, job.clone())
    }
}

/// Strip the response envelope from a fixture, if present
fn unwrap_fixture(command: &str, value: Value) -> Value {
    let key = format!("{}response", command);
    match value {
        Value::Object(mut map) => {
            if let Some(inner) = map.remove(&key) {
                return inner;
            }
            let single = match map.keys().next() {
                Some(k) if map.len() == 1 && k.ends_with("response") => Some(k.clone()),
                _ => None,
            };
            match single.and_then(|k| map.remove(&k)) {
                Some(inner) => inner,
                None => Value::Object(map),
            }
        }
        other => other,
    }
}

/// Index `jobs.json` by job ID; it holds an array of jobs
fn load_jobs(value: Value) -> Result<HashMap<String, Value>> {
    let jobs = match value {
        Value::Array(jobs) => jobs,
        _ => anyhow::bail!("expected an array of jobs"),
    };
    let mut indexed = HashMap::new();
    for job in jobs {
        let id = job
            .get("jobid")
            .and_then(Value::as_str)
            .context("job without a jobid")?
            .to_string();
        indexed.insert(id, job);
    }
    Ok(indexed)
}

// ============================================================================
// List Handling
// ============================================================================

/// Filter and page a list fixture
///
/// A request parameter filters the items when any item carries a field of
/// the same name. `keyword` matches against names. An `id` that matches
/// nothing is an error, as on a real management server.
fn list_response(
    command: &str,
    fixture: &Value,
    params: &[(String, String)],
) -> Result<Response<Body>, HttpError> {
    let Some((key, items)) = list_items(command, fixture) else {
        return json_response(command, StatusCode::OK, fixture.clone());
    };

    let mut matched: Vec<&Value> = items.iter().collect();
    for (name, value) in params {
        let name = name.to_lowercase();
        if RESERVED_PARAMS
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(&name))
        {
            continue;
        }
        if !items.iter().any(|item| item.get(&name).is_some()) {
            continue;
        }
        matched.retain(|item| {
            item.get(&name)
                .is_some_and(|field| field_text(field).eq_ignore_ascii_case(value))
        });
    }

    if let Some(keyword) = param(params, "keyword") {
        let keyword = keyword.to_lowercase();
        matched.retain(|item| {
            item.get("name")
                .map(|name| field_text(name).to_lowercase().contains(&keyword))
                .unwrap_or(false)
        });
    }

    if matched.is_empty() {
        if let Some(id) = param(params, "id") {
            return error_response(command, PARAM_ERROR, &missing_entity(command, id));
        }
        return json_response(command, StatusCode::OK, json!({}));
    }

    let total = matched.len();
    let page_size = param(params, "pagesize").and_then(|s| s.parse::<usize>().ok());
    let page = param(params, "page")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);
    let paged: Vec<Value> = match page_size {
        Some(size) if size > 0 => matched
            .into_iter()
            .skip((page - 1).saturating_mul(size))
            .take(size)
            .cloned()
            .collect(),
        _ => matched.into_iter().cloned().collect(),
    };

    let mut body = Map::new();
    body.insert("count".to_string(), json!(total));
    if !paged.is_empty() {
        body.insert(key, Value::Array(paged));
    }
    json_response(command, StatusCode::OK, Value::Object(body))
}

/// The key and items of a list fixture
///
/// The catalog's selected key is preferred; otherwise the fixture's only
/// array is used.
fn list_items<'a>(command: &str, fixture: &'a Value) -> Option<(String, &'a Vec<Value>)> {
    let object = fixture.as_object()?;
    if let Some(key) = commands::lookup(command).and_then(|c| c.select) {
        if let Some(items) = object.get(key).and_then(Value::as_array) {
            return Some((key.to_string(), items));
        }
    }
    object
        .iter()
        .find_map(|(k, v)| v.as_array().map(|items| (k.clone(), items)))
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Request and Response Helpers
// ============================================================================

/// First value of a parameter, matching the name case-insensitively
fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Decode `application/x-www-form-urlencoded` pairs
pub fn parse_params(encoded: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(encoded)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

fn json_response(
    command: &str,
    status: StatusCode,
    inner: Value,
) -> Result<Response<Body>, HttpError> {
    let mut body = Map::new();
    body.insert(response_key(command), inner);
    let body = Value::Object(body);
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.to_string().into())
        .map_err(|e| HttpError::for_internal_error(format!("Failed to build response: {}", e)))
}

/// An error in the management server's envelope, with the error code as
/// the HTTP status
fn missing_entity(command: &str, id: &str) -> String {
    format!(
        "Unable to execute API command {} due to invalid value. \
         Object with specified id {} does not exist",
        command, id
    )
}

fn error_response(command: &str, code: u16, text: &str) -> Result<Response<Body>, HttpError> {
    let status = StatusCode::from_u16(code)
        .map_err(|e| HttpError::for_internal_error(format!("Invalid status {}: {}", code, e)))?;
    json_response(
        command,
        status,
        json!({
            "uuidList": [],
            "errorcode": code,
            "cserrorcode": CS_ERROR_CODE,
            "errortext": text,
        }),
    )
}

// ============================================================================
// API Implementation
// ============================================================================

/// Marker type for the stub CloudStack API implementation
pub enum StubCloudStackApi {}

impl CloudStackApi for StubCloudStackApi {
    type Context = Arc<StubContext>;

    async fn api_get(
        rqctx: RequestContext<Self::Context>,
        _query: Query<CommandQuery>,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let params = parse_params(rqctx.request.uri().query().unwrap_or("").as_bytes());
        ctx.execute(&params, rqctx.request.headers()).await
    }

    async fn api_post(
        rqctx: RequestContext<Self::Context>,
        _query: Query<CommandQuery>,
        body: UntypedBody,
    ) -> Result<Response<Body>, HttpError> {
        let ctx = rqctx.context();
        let mut params = parse_params(rqctx.request.uri().query().unwrap_or("").as_bytes());
        params.extend(parse_params(body.as_bytes()));
        ctx.execute(&params, rqctx.request.headers()).await
    }
}

/// Create the Dropshot API description for the stub server
pub fn api_description() -> Result<dropshot::ApiDescription<Arc<StubContext>>, String> {
    cloudstack_api::cloud_stack_api_mod::api_description::<StubCloudStackApi>()
        .map_err(|e| e.to_string())
}

/// Fixtures bundled with this crate
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Start a stub server on `bind_address`
///
/// Bind to port 0 in tests and read the chosen port from
/// [`HttpServer::local_addr`].
pub fn start_server(
    context: Arc<StubContext>,
    bind_address: SocketAddr,
    level: ConfigLoggingLevel,
) -> Result<HttpServer<Arc<StubContext>>> {
    let config = ConfigDropshot {
        bind_address,
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };
    let log = ConfigLogging::StderrTerminal { level }.to_logger("cloudstack-stub-server")?;
    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, context, &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();
    Ok(server)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_fixtures() {
        let ctx = StubContext::from_fixtures(&fixtures_dir()).expect("Failed to load fixtures");

        assert!(ctx.commands().contains(&"listzones"));
        assert!(ctx.commands().contains(&"listvirtualmachines"));
        // Envelope is stripped on load
        assert!(ctx.fixtures["listzones"].get("zone").is_some());
        assert!(!ctx.jobs.is_empty());
        assert!(
            ctx.entity_ids
                .contains("0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a01")
        );
    }

    #[tokio::test]
    async fn test_unknown_entity_id_answers_431() {
        let ctx = StubContext::from_fixtures(&fixtures_dir()).expect("Failed to load fixtures");
        let headers = HeaderMap::new();
        let secret = SecretString::from(ctx.config.secret_key.clone());
        let signer = cloudstack_auth::RequestSigner::new(&ctx.config.api_key, secret);

        let known = signer
            .sign([
                ("command", "getVMPassword"),
                ("response", "json"),
                ("id", "0b6c1e5a-8d7f-4a3b-9e2c-5f4d3c2b1a01"),
            ])
            .expect("sign");
        let response = ctx.execute(&known, &headers).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let unknown = signer
            .sign([
                ("command", "getVMPassword"),
                ("response", "json"),
                ("id", "no-such-vm"),
            ])
            .expect("sign");
        let response = ctx.execute(&unknown, &headers).await.expect("response");
        assert_eq!(response.status().as_u16(), PARAM_ERROR);
    }

    #[test]
    fn test_unwrap_fixture_with_and_without_envelope() {
        let wrapped = json!({"listzonesresponse": {"count": 1}});
        assert_eq!(unwrap_fixture("listzones", wrapped), json!({"count": 1}));

        let other_key = json!({"deployvirtualmachineresponse": {"jobid": "j"}});
        assert_eq!(
            unwrap_fixture("deployvm", other_key),
            json!({"jobid": "j"})
        );

        let bare = json!({"count": 2, "zone": []});
        assert_eq!(unwrap_fixture("listzones", bare.clone()), bare);
    }

    #[test]
    fn test_parse_params_decodes_form_encoding() {
        let params = parse_params(b"command=listZones&name=a%20b&x=c+d");
        assert_eq!(
            params,
            pairs(&[("command", "listZones"), ("name", "a b"), ("x", "c d")])
        );
    }

    #[test]
    fn test_param_ignores_case() {
        let params = pairs(&[("apiKey", "k")]);
        assert_eq!(param(&params, "apikey"), Some("k"));
        assert_eq!(param(&params, "missing"), None);
    }

    #[test]
    fn test_cookie_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "a=1; JSESSIONID=ABC".parse().expect("header"),
        );
        assert_eq!(cookie(&headers, SESSION_COOKIE), Some("ABC"));
        assert_eq!(cookie(&headers, "other"), None);
    }

    #[test]
    fn test_list_items_prefers_selected_key() {
        let fixture = json!({"count": 1, "zone": [{"id": "z"}], "other": []});
        let (key, items) = list_items("listzones", &fixture).expect("items");
        assert_eq!(key, "zone");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_field_text() {
        assert_eq!(field_text(&json!("x")), "x");
        assert_eq!(field_text(&json!(true)), "true");
        assert_eq!(field_text(&json!(3)), "3");
    }

    #[test]
    fn test_load_jobs_requires_array() {
        assert!(load_jobs(json!({"jobid": "x"})).is_err());
        let jobs = load_jobs(json!([{"jobid": "j-1"}])).expect("jobs");
        assert!(jobs.contains_key("j-1"));
    }
}
