// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Accounts, users and domains

use super::common::{Timestamp, date, lenient, lenient_from_str, null_as_empty, numeric_enum};
use serde::{Deserialize, Serialize};
use strum::Display;

numeric_enum! {
    /// Role of an account
    pub enum AccountType {
        User = 0,
        Admin = 1,
        DomainAdmin = 2,
        ResourceDomainAdmin = 3,
        ReadOnlyAdmin = 4,
        Project = 5,
    }
}

/// Account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountState {
    Enabled,
    Disabled,
    Locked,
    #[serde(other)]
    Unrecognized,
}

/// User state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserState {
    Enabled,
    Disabled,
    Locked,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(AccountState, UserState);

/// A CloudStack account and its resource usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "accounttype")]
    pub account_type: Option<AccountType>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "networkdomain")]
    pub network_domain: Option<String>,
    pub state: Option<AccountState>,
    #[serde(default, rename = "roleid")]
    pub role_id: Option<String>,
    #[serde(default, rename = "rolename")]
    pub role_name: Option<String>,
    #[serde(default, rename = "receivedbytes", deserialize_with = "lenient")]
    pub received_bytes: Option<u64>,
    #[serde(default, rename = "sentbytes", deserialize_with = "lenient")]
    pub sent_bytes: Option<u64>,
    #[serde(default, rename = "vmlimit")]
    pub vm_limit: Option<String>,
    #[serde(default, rename = "vmtotal", deserialize_with = "lenient")]
    pub vm_total: Option<i64>,
    #[serde(default, rename = "vmavailable")]
    pub vm_available: Option<String>,
    #[serde(default, rename = "vmrunning", deserialize_with = "lenient")]
    pub vm_running: Option<i64>,
    #[serde(default, rename = "vmstopped", deserialize_with = "lenient")]
    pub vm_stopped: Option<i64>,
    #[serde(default, rename = "iplimit")]
    pub ip_limit: Option<String>,
    #[serde(default, rename = "iptotal", deserialize_with = "lenient")]
    pub ip_total: Option<i64>,
    #[serde(default, rename = "ipavailable")]
    pub ip_available: Option<String>,
    #[serde(default, rename = "volumelimit")]
    pub volume_limit: Option<String>,
    #[serde(default, rename = "volumetotal", deserialize_with = "lenient")]
    pub volume_total: Option<i64>,
    #[serde(default, rename = "volumeavailable")]
    pub volume_available: Option<String>,
    #[serde(default, rename = "snapshotlimit")]
    pub snapshot_limit: Option<String>,
    #[serde(default, rename = "snapshottotal", deserialize_with = "lenient")]
    pub snapshot_total: Option<i64>,
    #[serde(default, rename = "snapshotavailable")]
    pub snapshot_available: Option<String>,
    #[serde(default, rename = "templatelimit")]
    pub template_limit: Option<String>,
    #[serde(default, rename = "templatetotal", deserialize_with = "lenient")]
    pub template_total: Option<i64>,
    #[serde(default, rename = "templateavailable")]
    pub template_available: Option<String>,
    #[serde(default, rename = "isdefault", deserialize_with = "lenient")]
    pub is_default: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user: Vec<User>,
}

/// A user within an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    #[serde(default, rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastname")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    pub state: Option<UserState>,
    pub account: Option<String>,
    #[serde(default, rename = "accountid")]
    pub account_id: Option<String>,
    #[serde(default, rename = "accounttype")]
    pub account_type: Option<AccountType>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, rename = "apikey")]
    pub api_key: Option<String>,
    #[serde(default, rename = "secretkey")]
    pub secret_key: Option<String>,
    #[serde(default, rename = "iscallerchilddomain", deserialize_with = "lenient")]
    pub is_caller_child_domain: Option<bool>,
    #[serde(default, rename = "isdefault", deserialize_with = "lenient")]
    pub is_default: Option<bool>,
}

/// Keys returned by `registerUserKeys`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyPair {
    #[serde(rename = "apikey")]
    pub api_key: String,
    #[serde(rename = "secretkey")]
    pub secret_key: String,
}

/// A domain in the account hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: Option<String>,
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<u32>,
    #[serde(default, rename = "parentdomainid")]
    pub parent_domain_id: Option<String>,
    #[serde(default, rename = "parentdomainname")]
    pub parent_domain_name: Option<String>,
    #[serde(default, rename = "haschild", deserialize_with = "lenient")]
    pub has_child: Option<bool>,
    #[serde(default, rename = "networkdomain")]
    pub network_domain: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_parses_with_users() {
        let json = r#"{
            "id": "acc-1",
            "name": "admin",
            "accounttype": 1,
            "domainid": "dom-1",
            "domain": "ROOT",
            "state": "enabled",
            "vmtotal": "3",
            "receivedbytes": 1024,
            "user": [{"id": "u-1", "username": "admin", "state": "enabled",
                      "created": "2011-12-13T16:32:22-0800"}]
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, Some(AccountType::Admin));
        assert_eq!(account.state, Some(AccountState::Enabled));
        assert_eq!(account.vm_total, Some(3));
        assert_eq!(account.received_bytes, Some(1024));
        assert_eq!(account.user.len(), 1);
        assert!(account.user[0].created.is_some());
    }

    #[test]
    fn test_unknown_values_are_unrecognized() {
        let json = r#"{"id": "acc-1", "accounttype": 42, "state": "archived"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, Some(AccountType::Unrecognized(42)));
        assert_eq!(account.state, Some(AccountState::Unrecognized));
    }

    #[test]
    fn test_account_type_codes_and_names() {
        assert_eq!(AccountType::from(2), AccountType::DomainAdmin);
        assert_eq!(AccountType::DomainAdmin.code(), 2);
        assert_eq!(AccountType::from_name("DOMAIN_ADMIN"), Some(AccountType::DomainAdmin));
        assert_eq!(AccountType::Admin.to_string(), "Admin");
        assert_eq!("locked".parse::<UserState>().unwrap(), UserState::Locked);
        assert_eq!("gone".parse::<UserState>().unwrap(), UserState::Unrecognized);
    }
}
