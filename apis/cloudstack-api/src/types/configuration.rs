// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Global configuration, capabilities and resource limits

use super::common::{lenient, numeric_enum};
use serde::{Deserialize, Serialize};

numeric_enum! {
    /// Resource counted by a limit
    pub enum ResourceLimitType {
        Instance = 0,
        Ip = 1,
        Volume = 2,
        Snapshot = 3,
        Template = 4,
        Project = 5,
        Network = 6,
        Vpc = 7,
        Cpu = 8,
        Memory = 9,
        PrimaryStorage = 10,
        SecondaryStorage = 11,
    }
}

/// A global configuration setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationEntry {
    pub name: String,
    pub category: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
    pub scope: Option<String>,
    #[serde(default, rename = "isdynamic", deserialize_with = "lenient")]
    pub is_dynamic: Option<bool>,
}

/// Capabilities the management server advertises to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default, rename = "cloudstackversion")]
    pub cloudstack_version: Option<String>,
    #[serde(default, rename = "securitygroupsenabled", deserialize_with = "lenient")]
    pub security_groups_enabled: Option<bool>,
    #[serde(default, rename = "userpublictemplateenabled", deserialize_with = "lenient")]
    pub user_public_template_enabled: Option<bool>,
    #[serde(default, rename = "supportELB")]
    pub support_elb: Option<String>,
    #[serde(default, rename = "firewallRuleUiEnabled", deserialize_with = "lenient")]
    pub firewall_rule_ui_enabled: Option<bool>,
    #[serde(default, rename = "projectinviterequired", deserialize_with = "lenient")]
    pub project_invite_required: Option<bool>,
    #[serde(default, rename = "allowusercreateprojects", deserialize_with = "lenient")]
    pub allow_user_create_projects: Option<bool>,
    #[serde(default, rename = "customdiskofferingmaxsize", deserialize_with = "lenient")]
    pub custom_disk_offering_max_size: Option<u64>,
    #[serde(default, rename = "kvmsnapshotenabled", deserialize_with = "lenient")]
    pub kvm_snapshot_enabled: Option<bool>,
    #[serde(default, rename = "apilimitinterval", deserialize_with = "lenient")]
    pub api_limit_interval: Option<u32>,
    #[serde(default, rename = "apilimitmax", deserialize_with = "lenient")]
    pub api_limit_max: Option<u32>,
}

/// Limit on a resource for an account, domain or project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimit {
    #[serde(rename = "resourcetype")]
    pub resource_type: ResourceLimitType,
    /// Maximum allowed; `-1` means unlimited
    #[serde(default, deserialize_with = "lenient")]
    pub max: Option<i64>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub project: Option<String>,
    #[serde(default, rename = "projectid")]
    pub project_id: Option<String>,
}

impl ResourceLimit {
    /// Whether the limit is unbounded
    pub fn is_unlimited(&self) -> bool {
        matches!(self.max, Some(-1) | None)
    }
}
