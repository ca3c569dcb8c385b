// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Security groups

use super::common::{ResourceTag, lenient, null_as_empty};
use serde::{Deserialize, Serialize};

/// A security group and its rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, rename = "ingressrule", deserialize_with = "null_as_empty")]
    pub ingress_rules: Vec<IngressRule>,
    #[serde(default, rename = "egressrule", deserialize_with = "null_as_empty")]
    pub egress_rules: Vec<IngressRule>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

/// A rule admitting traffic into (or out of) a security group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngressRule {
    #[serde(rename = "ruleid")]
    pub id: String,
    pub protocol: Option<String>,
    #[serde(default, rename = "startport", deserialize_with = "lenient")]
    pub start_port: Option<u16>,
    #[serde(default, rename = "endport", deserialize_with = "lenient")]
    pub end_port: Option<u16>,
    #[serde(default, rename = "icmptype", deserialize_with = "lenient")]
    pub icmp_type: Option<i32>,
    #[serde(default, rename = "icmpcode", deserialize_with = "lenient")]
    pub icmp_code: Option<i32>,
    pub cidr: Option<String>,
    pub account: Option<String>,
    #[serde(default, rename = "securitygroupname")]
    pub security_group_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_group_with_rules() {
        let json = r#"{
            "id": "sg-1",
            "name": "web",
            "ingressrule": [
                {"ruleid": "r-1", "protocol": "tcp", "startport": 80, "endport": "80", "cidr": "0.0.0.0/0"},
                {"ruleid": "r-2", "protocol": "icmp", "icmptype": -1, "icmpcode": -1,
                 "account": "admin", "securitygroupname": "default"}
            ]
        }"#;
        let group: SecurityGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.ingress_rules.len(), 2);
        assert_eq!(group.ingress_rules[0].end_port, Some(80));
        assert_eq!(group.ingress_rules[1].icmp_type, Some(-1));
        assert!(group.egress_rules.is_empty());
    }
}
