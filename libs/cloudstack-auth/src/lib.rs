// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack Authentication Library
//!
//! This library implements the two ways a CloudStack management server
//! accepts API calls:
//!
//! - **API keys**: every request is signed with HMAC-SHA1 using the user's
//!   secret key (see [`signature`])
//! - **Sessions**: a `login` call exchanges a username and MD5-hashed
//!   password for a session key and `JSESSIONID` cookie (see [`credentials`])
//!
//! It also provides [`verify_signature`] so test servers can check the
//! requests a client produces.
//!
//! # Example
//!
//! ```ignore
//! use cloudstack_auth::RequestSigner;
//! use secrecy::SecretString;
//!
//! let signer = RequestSigner::new("api-key", SecretString::from("secret".to_string()));
//! let pairs = signer.sign([("command", "listZones"), ("response", "json")])?;
//! // pairs now ends with ("signature", "<base64>")
//! ```

pub mod credentials;
pub mod error;
pub mod signature;

pub use credentials::{
    Credentials, LoginCredentials, SESSION_COOKIE, SessionCredentials, hash_password,
    session_id_from_set_cookie,
};
pub use error::AuthError;
pub use signature::{
    API_KEY_PARAM, EXPIRES_PARAM, RequestSigner, SIGNATURE_PARAM, SIGNATURE_VERSION_PARAM,
    canonical_string, compute_signature, encode_value, verify_signature,
};

pub use secrecy::SecretString;
