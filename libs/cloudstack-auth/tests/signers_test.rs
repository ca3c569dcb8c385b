// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Signature tests for cloudstack-auth
//!
//! Signs requests the way the client does and checks them the way the
//! management server does.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::Utc;
use cloudstack_auth::{AuthError, RequestSigner, SecretString, canonical_string, verify_signature};
use pretty_assertions::assert_eq;
use test_case::test_case;

const API_KEY: &str = "miVr6X7u6bN_sdahOBpjNejPgEsT35eXq-jB8CG20YI3yaxXcgpyuaIRmFI_EJTVwZ0nUkkJbPmY3y2bciKwFQ";
const SECRET_KEY: &str = "Lxx1DM40AjcXU_mN8jEbDBQKq4aaBXgHLShuw4fDKvbPQGz6V5M3kTTb5I5EBDXDrjeqlbj0OkCGLlkxQzNuBQ";

fn secret() -> SecretString {
    SecretString::from(SECRET_KEY.to_string())
}

fn signer() -> RequestSigner {
    RequestSigner::new(API_KEY, secret())
}

fn deploy_params() -> Vec<(&'static str, &'static str)> {
    vec![
        ("command", "deployVirtualMachine"),
        ("serviceOfferingId", "1"),
        ("diskOfferingId", "1"),
        ("templateId", "2"),
        ("zoneId", "4"),
        ("response", "json"),
    ]
}

#[test]
fn test_canonical_string_for_deploy() {
    let mut params = deploy_params();
    params.push(("apiKey", API_KEY));
    let canonical = canonical_string(params);

    assert_eq!(
        canonical,
        format!(
            "apikey={}&command=deployvirtualmachine&diskofferingid=1&response=json&serviceofferingid=1&templateid=2&zoneid=4",
            API_KEY.to_lowercase()
        )
    );
}

#[test]
fn test_signed_request_verifies() {
    let pairs = signer().sign(deploy_params()).expect("sign");
    verify_signature(&pairs, &secret(), Utc::now()).expect("signature should verify");
}

#[test]
fn test_signature_is_deterministic() {
    let a = signer().sign(deploy_params()).expect("sign");
    let b = signer().sign(deploy_params()).expect("sign");
    assert_eq!(a, b);
}

#[test]
fn test_parameter_order_does_not_matter() {
    let mut reversed = deploy_params();
    reversed.reverse();

    let a = signer().sign(deploy_params()).expect("sign");
    let b = signer().sign(reversed).expect("sign");

    let sig = |pairs: &[(String, String)]| {
        pairs
            .iter()
            .find(|(k, _)| k == "signature")
            .map(|(_, v)| v.clone())
    };
    assert_eq!(sig(&a), sig(&b));
}

#[test_case("zoneId", "5" ; "changed value")]
#[test_case("name", "extra" ; "added parameter")]
fn test_tampered_request_is_rejected(name: &str, value: &str) {
    let mut pairs = signer().sign(deploy_params()).expect("sign");
    if let Some(entry) = pairs.iter_mut().find(|(k, _)| k == name) {
        entry.1 = value.to_string();
    } else {
        pairs.push((name.to_string(), value.to_string()));
    }

    assert!(matches!(
        verify_signature(&pairs, &secret(), Utc::now()),
        Err(AuthError::SignatureMismatch)
    ));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let pairs = signer().sign(deploy_params()).expect("sign");
    let other = SecretString::from("not-the-secret".to_string());
    assert!(matches!(
        verify_signature(&pairs, &other, Utc::now()),
        Err(AuthError::SignatureMismatch)
    ));
}

#[test]
fn test_unsigned_request_is_rejected() {
    let pairs: Vec<(String, String)> = deploy_params()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert!(matches!(
        verify_signature(&pairs, &secret(), Utc::now()),
        Err(AuthError::MissingSignature)
    ));
}

#[test]
fn test_malformed_signature_is_rejected() {
    let mut pairs = signer().sign(deploy_params()).expect("sign");
    if let Some(entry) = pairs.iter_mut().find(|(k, _)| k == "signature") {
        entry.1 = "%%%not-base64".to_string();
    }
    assert!(matches!(
        verify_signature(&pairs, &secret(), Utc::now()),
        Err(AuthError::MalformedSignature(_))
    ));
}

#[test]
fn test_values_with_spaces_and_symbols() {
    let pairs = signer()
        .sign([
            ("command", "createTags"),
            ("tags[0].key", "owner"),
            ("tags[0].value", "Jane Doe + team"),
        ])
        .expect("sign");
    verify_signature(&pairs, &secret(), Utc::now()).expect("signature should verify");
}
