// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Login session

use super::account::AccountType;
use super::common::lenient;
use serde::{Deserialize, Serialize};

/// Reply to the `login` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionkey")]
    pub session_key: String,
    pub username: Option<String>,
    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,
    #[serde(default, rename = "account")]
    pub account: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, rename = "type")]
    pub account_type: Option<AccountType>,
    #[serde(default, rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastname")]
    pub last_name: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, rename = "timezoneoffset")]
    pub timezone_offset: Option<String>,
    /// Session lifetime in seconds
    #[serde(default, deserialize_with = "lenient")]
    pub timeout: Option<u64>,
    #[serde(default, rename = "registered", deserialize_with = "lenient")]
    pub registered: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses() {
        let json = r#"{
            "timeout": "1800",
            "sessionkey": "Vbp7yN-b6TdN7A4dNpvwqzT-Fq8",
            "username": "admin",
            "userid": "u-1",
            "domainid": "dom-1",
            "type": "1",
            "registered": "false"
        }"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.session_key, "Vbp7yN-b6TdN7A4dNpvwqzT-Fq8");
        assert_eq!(login.timeout, Some(1800));
        assert_eq!(login.account_type, Some(AccountType::Admin));
        assert_eq!(login.registered, Some(false));
    }
}
