// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Username/password sessions

use cloudstack_api::commands::admin::{LOGIN, LOGOUT};
use cloudstack_api::{LoginResponse, QueryParams};
use cloudstack_auth::{Credentials, LoginCredentials, session_id_from_set_cookie};
use reqwest::header::SET_COOKIE;
use tracing::debug;

use super::api_accessor;
use crate::client::decode;
use crate::error::Error;

/// A logged-in session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub login: LoginResponse,
    /// `JSESSIONID` cookie set by the server, if any
    pub jsession_id: Option<String>,
}

impl Session {
    /// Credentials that authenticate later requests as this session
    pub fn credentials(&self) -> Credentials {
        Credentials::session(self.login.session_key.clone(), self.jsession_id.clone())
    }
}

api_accessor! {
    /// Login and logout
    SessionApi
}

impl SessionApi<'_> {
    /// Log in with a username and password
    ///
    /// The request is not signed; the password travels as its MD5 digest
    /// in a form body.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Session, Error> {
        let mut params = LOGIN.base_params();
        params.set("username", credentials.username.as_str());
        params.set("password", credentials.hashed_password());
        params.set("domain", credentials.domain.as_str());

        let (headers, inner) = self
            .client
            .send_raw(LOGIN.name, LOGIN.verb, params, false)
            .await?;
        let login: LoginResponse = decode(LOGIN.name, inner)?;
        let jsession_id = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(session_id_from_set_cookie);
        debug!(
            username = %credentials.username,
            has_cookie = jsession_id.is_some(),
            "logged in"
        );
        Ok(Session { login, jsession_id })
    }

    /// End the session the client authenticates with
    pub async fn logout(&self) -> Result<(), Error> {
        self.client.unit(&LOGOUT, QueryParams::new()).await
    }
}
