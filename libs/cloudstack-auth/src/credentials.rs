// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Credentials accepted by the CloudStack management server

use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};

use crate::signature::RequestSigner;

/// Name of the servlet session cookie issued by `login`
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// How requests are authenticated
#[derive(Clone, Debug)]
pub enum Credentials {
    /// Sign each request with an API key / secret key pair
    ApiKey(RequestSigner),
    /// Present a session key obtained from `login`
    Session(SessionCredentials),
}

impl Credentials {
    /// API-key credentials
    pub fn api_key(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::ApiKey(RequestSigner::new(
            api_key,
            SecretString::from(secret_key.into()),
        ))
    }

    /// Session credentials from a previous login
    pub fn session(session_key: impl Into<String>, jsession_id: Option<String>) -> Self {
        Self::Session(SessionCredentials {
            session_key: SecretString::from(session_key.into()),
            jsession_id,
        })
    }
}

/// A logged-in session
#[derive(Clone, Debug)]
pub struct SessionCredentials {
    /// Value of the `sessionkey` parameter
    pub session_key: SecretString,
    /// Value of the `JSESSIONID` cookie, when the server set one
    pub jsession_id: Option<String>,
}

impl SessionCredentials {
    /// The `Cookie` header value to send, if any
    pub fn cookie_header(&self) -> Option<String> {
        self.jsession_id
            .as_ref()
            .map(|id| format!("{}={}", SESSION_COOKIE, id))
    }
}

/// Username/password pair for the `login` command
#[derive(Clone, Debug)]
pub struct LoginCredentials {
    /// User login name
    pub username: String,
    /// Clear-text password; only its MD5 digest is sent
    pub password: SecretString,
    /// Domain path the user belongs to (`/` for ROOT)
    pub domain: String,
}

impl LoginCredentials {
    /// Create login credentials in the ROOT domain
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            domain: "/".to_string(),
        }
    }

    /// Set the domain path
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// The password digest sent as the `password` parameter
    pub fn hashed_password(&self) -> String {
        hash_password(self.password.expose_secret())
    }
}

/// Lowercase hex MD5 digest of a password
pub fn hash_password(password: &str) -> String {
    let digest = Md5::digest(password.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Extract the `JSESSIONID` value from a `Set-Cookie` header
pub fn session_id_from_set_cookie(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        assert_eq!(hash_password("password"), "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(hash_password(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_login_credentials_default_domain() {
        let login = LoginCredentials::new("admin", "password");
        assert_eq!(login.domain, "/");
        assert_eq!(login.hashed_password(), "5f4dcc3b5aa765d61d8327deb882cf99");

        let login = login.with_domain("/customers/acme");
        assert_eq!(login.domain, "/customers/acme");
    }

    #[test]
    fn test_session_id_from_set_cookie() {
        assert_eq!(
            session_id_from_set_cookie("JSESSIONID=ABC123; Path=/client; HttpOnly"),
            Some("ABC123".to_string())
        );
        assert_eq!(session_id_from_set_cookie("other=1; Path=/"), None);
    }

    #[test]
    fn test_cookie_header() {
        let Credentials::Session(session) = Credentials::session("key", Some("ABC".to_string()))
        else {
            panic!("expected session credentials");
        };
        assert_eq!(session.cookie_header(), Some("JSESSIONID=ABC".to_string()));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let creds = Credentials::api_key("key", "very-secret");
        assert!(!format!("{:?}", creds).contains("very-secret"));
    }
}
