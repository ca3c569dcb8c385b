// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Query signing for CloudStack API requests
//!
//! CloudStack authenticates API-key requests with an HMAC-SHA1 signature
//! carried in the `signature` query parameter:
//!
//! ```text
//! command=listZones&apiKey=<key>&response=json&signature=<base64 HMAC>
//! ```
//!
//! The signature is computed over the canonical form of every other
//! parameter:
//! - parameters sorted by name
//! - each value form-urlencoded, with spaces as `%20` rather than `+`
//! - `name=value` pairs joined with `&`
//! - the whole string lowercased

use crate::error::AuthError;
use base64::Engine;
use chrono::{DateTime, TimeDelta, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Query parameter carrying the signature
pub const SIGNATURE_PARAM: &str = "signature";
/// Query parameter carrying the API key
pub const API_KEY_PARAM: &str = "apiKey";
/// Query parameter selecting the signature version
pub const SIGNATURE_VERSION_PARAM: &str = "signatureVersion";
/// Query parameter carrying the signature expiry
pub const EXPIRES_PARAM: &str = "expires";

/// Timestamp format of the `expires` parameter (`2026-03-01T12:00:00+0000`)
pub const EXPIRES_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Signature version that enables expiry checking
const EXPIRING_SIGNATURE_VERSION: &str = "3";

/// Encode a query value the way the CloudStack management server does
///
/// This is `application/x-www-form-urlencoded` with spaces written as `%20`.
/// A literal `+` is already escaped as `%2B`, so only spaces are affected by
/// the substitution.
pub fn encode_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Build the canonical string that is signed
///
/// The `signature` parameter itself is skipped.
pub fn canonical_string<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut pairs: Vec<(&str, &str)> = params
        .into_iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case(SIGNATURE_PARAM))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
        .to_lowercase()
}

/// Compute the base64 HMAC-SHA1 of `canonical` keyed by `secret_key`
pub fn compute_signature(secret_key: &SecretString, canonical: &str) -> Result<String, AuthError> {
    let mut mac = HmacSha1::new_from_slice(secret_key.expose_secret().as_bytes())
        .map_err(|e| AuthError::SigningError(format!("Invalid secret key: {}", e)))?;
    mac.update(canonical.as_bytes());
    Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// API-key request signer
///
/// Adds `apiKey` (and, when configured, the version 3 expiry parameters)
/// to a request and appends the matching `signature`.
#[derive(Clone, Debug)]
pub struct RequestSigner {
    api_key: String,
    secret_key: SecretString,
    expiry: Option<TimeDelta>,
}

impl RequestSigner {
    /// Create a new RequestSigner
    ///
    /// # Arguments
    /// * `api_key` - The user's API key
    /// * `secret_key` - The user's secret key
    pub fn new(api_key: impl Into<String>, secret_key: SecretString) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key,
            expiry: None,
        }
    }

    /// Make signatures expire `ttl` after they are produced
    pub fn with_expiry(mut self, ttl: TimeDelta) -> Self {
        self.expiry = Some(ttl);
        self
    }

    /// The API key this signer presents
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request, returning the full parameter list to send
    ///
    /// The returned list contains the caller's parameters, `apiKey`, the
    /// expiry parameters when configured, and `signature` last.
    pub fn sign<I, K, V>(&self, params: I) -> Result<Vec<(String, String)>, AuthError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.sign_at(params, Utc::now())
    }

    /// Sign a request as if it were made at `now`
    pub fn sign_at<I, K, V>(
        &self,
        params: I,
        now: DateTime<Utc>,
    ) -> Result<Vec<(String, String)>, AuthError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| {
                !k.eq_ignore_ascii_case(SIGNATURE_PARAM) && !k.eq_ignore_ascii_case(API_KEY_PARAM)
            })
            .collect();

        pairs.push((API_KEY_PARAM.to_string(), self.api_key.clone()));

        if let Some(ttl) = self.expiry {
            let expires = (now + ttl).format(EXPIRES_FORMAT).to_string();
            pairs.retain(|(k, _)| {
                !k.eq_ignore_ascii_case(SIGNATURE_VERSION_PARAM)
                    && !k.eq_ignore_ascii_case(EXPIRES_PARAM)
            });
            pairs.push((
                SIGNATURE_VERSION_PARAM.to_string(),
                EXPIRING_SIGNATURE_VERSION.to_string(),
            ));
            pairs.push((EXPIRES_PARAM.to_string(), expires));
        }

        let canonical = canonical_string(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let signature = compute_signature(&self.secret_key, &canonical)?;
        tracing::trace!(canonical = %canonical, "signed request");

        pairs.push((SIGNATURE_PARAM.to_string(), signature));
        Ok(pairs)
    }
}

/// Verify a signed parameter list against `secret_key`
///
/// Version 3 signatures are additionally rejected once `now` passes their
/// `expires` timestamp.
pub fn verify_signature(
    params: &[(String, String)],
    secret_key: &SecretString,
    now: DateTime<Utc>,
) -> Result<(), AuthError> {
    let lookup = |name: &str| {
        params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    };

    let provided = lookup(SIGNATURE_PARAM).ok_or(AuthError::MissingSignature)?;

    if lookup(SIGNATURE_VERSION_PARAM) == Some(EXPIRING_SIGNATURE_VERSION) {
        let expires = lookup(EXPIRES_PARAM)
            .ok_or_else(|| AuthError::InvalidExpiry("missing expires parameter".to_string()))?;
        let deadline = DateTime::parse_from_str(expires, EXPIRES_FORMAT)
            .map_err(|e| AuthError::InvalidExpiry(format!("{}: {}", expires, e)))?;
        if now > deadline {
            return Err(AuthError::Expired(expires.to_string()));
        }
    }

    let canonical = canonical_string(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let provided = base64::engine::general_purpose::STANDARD.decode(provided)?;

    let mut mac = HmacSha1::new_from_slice(secret_key.expose_secret().as_bytes())
        .map_err(|e| AuthError::SigningError(format!("Invalid secret key: {}", e)))?;
    mac.update(canonical.as_bytes());
    mac.verify_slice(&provided)
        .map_err(|_| AuthError::SignatureMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_encode_value_spaces_and_reserved() {
        assert_eq!(encode_value("a b"), "a%20b");
        assert_eq!(encode_value("a+b"), "a%2Bb");
        assert_eq!(encode_value("x=y&z"), "x%3Dy%26z");
        assert_eq!(encode_value("safe-._*"), "safe-._*");
    }

    #[test]
    fn test_canonical_string_sorted_and_lowercased() {
        let canonical = canonical_string([
            ("response", "json"),
            ("command", "listZones"),
            ("apiKey", "AbC"),
        ]);
        assert_eq!(canonical, "apikey=abc&command=listzones&response=json");
    }

    #[test]
    fn test_canonical_string_skips_signature() {
        let canonical = canonical_string([("command", "listZones"), ("signature", "xyz")]);
        assert_eq!(canonical, "command=listzones");
    }

    #[test]
    fn test_canonical_string_sorts_by_name_before_lowercasing() {
        // Upper-case names sort ahead of lower-case ones, as on the server.
        let canonical = canonical_string([("b", "1"), ("Z", "2")]);
        assert_eq!(canonical, "z=2&b=1");
    }

    #[test]
    fn test_signature_is_base64_sha1() {
        let sig = compute_signature(&secret("secret"), "command=listzones").unwrap();
        // 20 bytes of HMAC-SHA1 encode to 28 base64 characters
        assert_eq!(sig.len(), 28);
        assert!(sig.ends_with('='));
    }

    #[test]
    fn test_sign_appends_api_key_and_signature() {
        let signer = RequestSigner::new("key", secret("secret"));
        let pairs = signer
            .sign([("command", "listZones"), ("response", "json")])
            .unwrap();

        assert_eq!(pairs.last().map(|(k, _)| k.as_str()), Some("signature"));
        assert!(pairs.iter().any(|(k, v)| k == "apiKey" && v == "key"));
        assert!(verify_signature(&pairs, &secret("secret"), Utc::now()).is_ok());
    }

    #[test]
    fn test_sign_replaces_caller_supplied_api_key() {
        let signer = RequestSigner::new("real", secret("secret"));
        let pairs = signer
            .sign([("command", "listZones"), ("apikey", "spoofed")])
            .unwrap();
        let keys: Vec<_> = pairs
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("apikey"))
            .collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].1, "real");
    }

    #[test]
    fn test_expiring_signature() {
        let signed_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let signer = RequestSigner::new("key", secret("secret")).with_expiry(TimeDelta::minutes(5));
        let pairs = signer.sign_at([("command", "listZones")], signed_at).unwrap();

        assert!(
            pairs
                .iter()
                .any(|(k, v)| k == "expires" && v == "2026-03-01T12:05:00+0000")
        );
        assert!(pairs.iter().any(|(k, v)| k == "signatureVersion" && v == "3"));

        let within = signed_at + TimeDelta::minutes(4);
        assert!(verify_signature(&pairs, &secret("secret"), within).is_ok());

        let after = signed_at + TimeDelta::minutes(6);
        assert!(matches!(
            verify_signature(&pairs, &secret("secret"), after),
            Err(AuthError::Expired(_))
        ));
    }
}
