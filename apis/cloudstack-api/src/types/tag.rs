// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resource tags

use super::common::lenient_from_str;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Kind of resource a tag is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ResourceTagType {
    UserVm,
    Template,
    #[serde(rename = "ISO")]
    #[strum(serialize = "ISO")]
    Iso,
    Volume,
    Snapshot,
    Network,
    LoadBalancer,
    PortForwardingRule,
    FirewallRule,
    SecurityGroup,
    PublicIpAddress,
    Project,
    Vpc,
    NetworkACL,
    StaticRoute,
    #[serde(rename = "VMSnapshot")]
    #[strum(serialize = "VMSnapshot")]
    VmSnapshot,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(ResourceTagType);

/// A key/value tag on a resource, as returned by `listTags`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: Option<String>,
    #[serde(default, rename = "resourcetype")]
    pub resource_type: Option<ResourceTagType>,
    #[serde(default, rename = "resourceid")]
    pub resource_id: Option<String>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub project: Option<String>,
    #[serde(default, rename = "projectid")]
    pub project_id: Option<String>,
    pub customer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parses() {
        let json = r#"{"key": "env", "value": "prod", "resourcetype": "UserVm", "resourceid": "vm-1"}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.resource_type, Some(ResourceTagType::UserVm));

        let tag: Tag =
            serde_json::from_str(r#"{"key": "env", "resourcetype": "AutoScaleVmGroup"}"#).unwrap();
        assert_eq!(tag.resource_type, Some(ResourceTagType::Unrecognized));
    }

    #[test]
    fn test_resource_type_wire_names() {
        assert_eq!(ResourceTagType::VmSnapshot.to_string(), "VMSnapshot");
        assert_eq!("ISO".parse::<ResourceTagType>().unwrap(), ResourceTagType::Iso);
    }
}
