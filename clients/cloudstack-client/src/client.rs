// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP transport, authentication and response unwrapping

use std::time::Duration;

use cloudstack_api::{Command, PagedOptions, QueryParams, Verb, commands, response_key};
use cloudstack_auth::{Credentials, encode_value};
use cloudstack_pagination::{Page, PaginationError, collect_all};
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::{ApiError, Error, classify};
use crate::fallback::recover;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const USER_AGENT: &str = concat!("cloudstack-client/", env!("CARGO_PKG_VERSION"));
const SESSION_KEY_PARAM: &str = "sessionkey";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Error text is cut to this many characters when the body is not JSON
const MAX_ERROR_BODY: usize = 512;

/// CloudStack API client
///
/// Holds the endpoint URL (e.g. `https://cloud.example.com:8080/client/api`),
/// the HTTP client and the credentials used for every request. Commands are
/// grouped behind accessors such as [`Client::virtual_machine_api`].
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Option<Credentials>,
}

impl Client {
    /// Create a client that authenticates with `credentials`
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self, Error> {
        Self::new_with_client(endpoint, build_http_client()?, Some(credentials))
    }

    /// Create a client without credentials, for `login`
    pub fn unauthenticated(endpoint: &str) -> Result<Self, Error> {
        Self::new_with_client(endpoint, build_http_client()?, None)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn new_with_client(
        endpoint: &str,
        http: reqwest::Client,
        credentials: Option<Credentials>,
    ) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint).map_err(|source| Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }

    /// A client for the same endpoint using other credentials
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            credentials: Some(credentials),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Run any command and return its unwrapped response object
    ///
    /// Commands in the catalog are sent with their declared verb; others
    /// are sent as GET. No fallback is applied.
    pub async fn execute_raw(&self, command: &str, params: QueryParams) -> Result<Value, Error> {
        let verb = commands::lookup(command).map_or(Verb::Get, |c| c.verb);
        let mut all = QueryParams::new();
        all.merge(params);
        all.set("command", command);
        all.set("response", "json");
        let (_, inner) = self.send_raw(command, verb, all, true).await?;
        Ok(inner)
    }

    /// Fetch every page of a list command
    ///
    /// `options` supplies the filters; `page` and `pagesize` are set for
    /// each request.
    pub async fn list_all<T, O>(
        &self,
        command: &Command,
        options: O,
        page_size: u32,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
        O: PagedOptions,
    {
        collect_all(page_size, |page, size| {
            let params = options.clone().with_page(page, size).into_params();
            async move { self.fetch_page(command, params).await }
        })
        .await
        .map_err(|e| match e {
            PaginationError::InvalidPageSize => Error::InvalidPageSize,
            PaginationError::Fetch { source, .. } => source,
        })
    }

    // ------------------------------------------------------------------
    // Typed calls used by the API accessors
    // ------------------------------------------------------------------

    /// One page of a list command, with its reported total
    pub(crate) async fn fetch_page<T: DeserializeOwned>(
        &self,
        command: &Command,
        params: QueryParams,
    ) -> Result<Page<T>, Error> {
        let result: Result<Page<T>, Error> = async {
            let inner = self.send(command, params).await?;
            let total = reported_count(&inner);
            let items = selected_items(command, inner)
                .into_iter()
                .map(|item| decode(command.name, item))
                .collect::<Result<Vec<T>, Error>>()?;
            Ok(Page::new(items, total))
        }
        .await;
        recover(command.fallback, result, || Page::new(Vec::new(), Some(0)))
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        command: &Command,
        params: QueryParams,
    ) -> Result<Vec<T>, Error> {
        Ok(self.fetch_page(command, params).await?.items)
    }

    /// The first selected item, if any
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        command: &Command,
        params: QueryParams,
    ) -> Result<Option<T>, Error> {
        let result: Result<Option<T>, Error> = async {
            let inner = self.send(command, params).await?;
            selected_items(command, inner)
                .into_iter()
                .next()
                .map(|item| decode(command.name, item))
                .transpose()
        }
        .await;
        recover(command.fallback, result, || None)
    }

    /// A single selected object that must be present
    pub(crate) async fn object<T: DeserializeOwned>(
        &self,
        command: &Command,
        params: QueryParams,
    ) -> Result<T, Error> {
        let inner = self.send(command, params).await?;
        match selected_items(command, inner).into_iter().next() {
            Some(item) => decode(command.name, item),
            None => Err(Error::UnexpectedResponse {
                command: command.name.to_string(),
                message: format!("missing `{}`", command.select.unwrap_or("response")),
            }),
        }
    }

    pub(crate) async fn unit(&self, command: &Command, params: QueryParams) -> Result<(), Error> {
        let result = self.send(command, params).await.map(|_| ());
        recover(command.fallback, result, || ())
    }

    /// Start an asynchronous command; the reply names the job to poll
    pub(crate) async fn job(
        &self,
        command: &Command,
        params: QueryParams,
    ) -> Result<cloudstack_api::AsyncCreateResponse, Error> {
        let inner = self.send(command, params).await?;
        decode(command.name, inner)
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    async fn send(&self, command: &Command, params: QueryParams) -> Result<Value, Error> {
        let mut all = command.base_params();
        all.merge(params);
        all.set("command", command.name);
        all.set("response", "json");
        let (_, inner) = self.send_raw(command.name, command.verb, all, true).await?;
        Ok(inner)
    }

    /// Send a request and unwrap the `<command>response` envelope
    ///
    /// Returns the response headers alongside the unwrapped object.
    pub(crate) async fn send_raw(
        &self,
        command: &str,
        verb: Verb,
        params: QueryParams,
        authenticate: bool,
    ) -> Result<(HeaderMap, Value), Error> {
        let (pairs, cookie) = if authenticate {
            self.authenticate(command, params)?
        } else {
            (params.into_iter().collect(), None)
        };
        let encoded = encode_pairs(&pairs);

        debug!(command, %verb, "sending CloudStack request");
        let mut request = match verb {
            Verb::Get => {
                let mut url = self.endpoint.clone();
                url.set_query(Some(&encoded));
                self.http.get(url)
            }
            Verb::Post => self
                .http
                .post(self.endpoint.clone())
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded),
        };
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        trace!(command, status, body = %body, "received CloudStack response");

        let inner = unwrap_envelope(command, status, &body)?;
        Ok((headers, inner))
    }

    /// Add credentials to a parameter list
    ///
    /// Returns the parameters to send and the `Cookie` header, if any.
    fn authenticate(
        &self,
        command: &str,
        mut params: QueryParams,
    ) -> Result<(Vec<(String, String)>, Option<String>), Error> {
        match &self.credentials {
            Some(Credentials::ApiKey(signer)) => Ok((signer.sign(params)?, None)),
            Some(Credentials::Session(session)) => {
                params.set(SESSION_KEY_PARAM, session.session_key.expose_secret());
                Ok((params.into_iter().collect(), session.cookie_header()))
            }
            None => Err(Error::MissingCredentials(command.to_string())),
        }
    }
}

/// Build the shared HTTP client
///
/// reqwest is built without a bundled crypto provider, so the `ring`
/// provider is installed first. Installing twice is harmless.
fn build_http_client() -> Result<reqwest::Client, Error> {
    let _ = rustls::crypto::ring::default_provider().install_default();
    Ok(reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Join pairs as `key=value&...` with the encoding used for signing
fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_value(k), encode_value(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Find the response object inside the envelope
///
/// Usually keyed `<command>response`; errors raised before the command is
/// dispatched come back as `errorresponse`, so a lone `*response` key is
/// accepted too.
fn find_envelope<'a>(command: &str, body: &'a Value) -> Option<&'a Value> {
    let map = body.as_object()?;
    if let Some(inner) = map.get(&response_key(command)) {
        return Some(inner);
    }
    match map.iter().next() {
        Some((key, inner)) if map.len() == 1 && key.ends_with("response") => Some(inner),
        _ => None,
    }
}

fn lenient_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}

/// Turn a response body into the unwrapped response object or an error
pub(crate) fn unwrap_envelope(command: &str, status: u16, body: &str) -> Result<Value, Error> {
    let success = (200..300).contains(&status);

    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(source) if success => {
            return Err(Error::Decode {
                command: command.to_string(),
                source,
            });
        }
        Err(_) => {
            let text = snippet(body);
            return Err(Error::Api(ApiError {
                command: command.to_string(),
                status,
                error_code: None,
                cs_error_code: None,
                kind: classify(status, &text),
                text,
            }));
        }
    };

    let inner = find_envelope(command, &parsed);
    let error_code = inner.and_then(|i| i.get("errorcode")).and_then(lenient_i32);

    if !success || error_code.is_some() {
        let status = match (success, error_code) {
            (true, Some(code)) => u16::try_from(code).unwrap_or(status),
            _ => status,
        };
        let text = inner
            .and_then(|i| i.get("errortext"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| snippet(body));
        let cs_error_code = inner.and_then(|i| i.get("cserrorcode")).and_then(lenient_i32);
        return Err(Error::Api(ApiError {
            command: command.to_string(),
            status,
            error_code,
            cs_error_code,
            kind: classify(status, &text),
            text,
        }));
    }

    inner.cloned().ok_or_else(|| Error::UnexpectedResponse {
        command: command.to_string(),
        message: format!("no `{}` object in response", response_key(command)),
    })
}

/// Items under the command's select key
///
/// An array yields its elements, a single object yields itself, and an
/// absent or null key yields nothing.
pub(crate) fn selected_items(command: &Command, mut inner: Value) -> Vec<Value> {
    let selected = match command.select {
        Some(key) => inner.get_mut(key).map(Value::take),
        None => Some(inner),
    };
    match selected {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other],
    }
}

/// The `count` a list response reports
fn reported_count(inner: &Value) -> Option<u64> {
    let count = inner.get("count")?;
    count
        .as_u64()
        .or_else(|| count.as_str().and_then(|s| s.trim().parse().ok()))
}

pub(crate) fn decode<T: DeserializeOwned>(command: &str, value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|source| Error::Decode {
        command: command.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use cloudstack_api::commands::{compute, infrastructure};
    use cloudstack_api::{VirtualMachine, Zone};
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_success() {
        let body = r#"{"listzonesresponse": {"count": 1, "zone": [{"id": "z1"}]}}"#;
        let inner = unwrap_envelope("listZones", 200, body).unwrap();
        assert_eq!(inner["count"], json!(1));
    }

    #[test]
    fn test_unwrap_envelope_error_status() {
        let body = r#"{"listvirtualmachinesresponse": {
            "uuidList": [], "errorcode": 431, "cserrorcode": 9999,
            "errortext": "Unable to execute API command due to invalid value. entity does not exist"
        }}"#;
        let err = unwrap_envelope("listVirtualMachines", 431, body).unwrap_err();
        let Error::Api(api) = err else {
            panic!("expected an API error");
        };
        assert_eq!(api.status, 431);
        assert_eq!(api.error_code, Some(431));
        assert_eq!(api.cs_error_code, Some(9999));
        assert_eq!(api.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_unwrap_envelope_errorresponse_key() {
        let body = r#"{"errorresponse": {"errorcode": 401, "errortext": "unable to verify user credentials"}}"#;
        let err = unwrap_envelope("listZones", 401, body).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Unauthorized));
    }

    #[test]
    fn test_unwrap_envelope_error_inside_200() {
        let body = r#"{"listzonesresponse": {"errorcode": "530", "errortext": "boom"}}"#;
        let err = unwrap_envelope("listZones", 200, body).unwrap_err();
        assert_eq!(err.status(), Some(530));
    }

    #[test]
    fn test_unwrap_envelope_non_json_error() {
        let err = unwrap_envelope("listZones", 503, "<html>Service Unavailable</html>").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Server));
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[test]
    fn test_unwrap_envelope_non_json_success_is_decode_error() {
        let err = unwrap_envelope("listZones", 200, "not json").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_selected_items_shapes() {
        let command = &compute::LIST_VIRTUAL_MACHINES;
        let many = json!({"count": 2, "virtualmachine": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(selected_items(command, many).len(), 2);

        let single = json!({"virtualmachine": {"id": "a"}});
        assert_eq!(selected_items(command, single).len(), 1);

        assert!(selected_items(command, json!({})).is_empty());
        assert!(selected_items(command, json!({"virtualmachine": null})).is_empty());
    }

    #[test]
    fn test_reported_count_accepts_strings() {
        assert_eq!(reported_count(&json!({"count": 3})), Some(3));
        assert_eq!(reported_count(&json!({"count": "4"})), Some(4));
        assert_eq!(reported_count(&json!({})), None);
    }

    #[test]
    fn test_decode_selected_items() {
        let inner = json!({"zone": [{"id": "z1", "name": "zone one"}]});
        let zones: Vec<Zone> = selected_items(&infrastructure::LIST_ZONES, inner)
            .into_iter()
            .map(|v| decode("listZones", v))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(zones[0].name.as_deref(), Some("zone one"));

        let err = decode::<VirtualMachine>("listVirtualMachines", json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_encode_pairs() {
        let pairs = vec![
            ("command".to_string(), "listZones".to_string()),
            ("name".to_string(), "a b+c".to_string()),
        ];
        assert_eq!(encode_pairs(&pairs), "command=listZones&name=a%20b%2Bc");
    }

    #[test]
    fn test_invalid_endpoint() {
        let _ = rustls::crypto::ring::default_provider().install_default();
        let err = Client::new_with_client("not a url", reqwest::Client::new(), None).unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }));
    }
}
