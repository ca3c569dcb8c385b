// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for cloudstack-auth

use thiserror::Error;

/// Errors that can occur while signing or verifying requests
#[derive(Error, Debug)]
pub enum AuthError {
    /// The HMAC could not be keyed or computed
    #[error("Signing error: {0}")]
    SigningError(String),

    /// The request carried no `signature` parameter
    #[error("Request is not signed")]
    MissingSignature,

    /// The request named an API key the verifier does not know
    #[error("Unknown API key: {0}")]
    UnknownApiKey(String),

    /// The signature did not match the request parameters
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// The `expires` parameter is missing or malformed for a version 3 signature
    #[error("Invalid expiry: {0}")]
    InvalidExpiry(String),

    /// The signature expired before the request was verified
    #[error("Signature expired at {0}")]
    Expired(String),

    /// The base64 signature could not be decoded
    #[error("Malformed signature: {0}")]
    MalformedSignature(#[from] base64::DecodeError),
}
