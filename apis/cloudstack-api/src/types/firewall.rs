// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall, port forwarding and load balancer rules

use super::common::{ResourceTag, lenient, lenient_from_str, null_as_empty};
use serde::{Deserialize, Serialize};
use strum::Display;

/// IP protocol matched by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirewallProtocol {
    #[serde(alias = "TCP")]
    Tcp,
    #[serde(alias = "UDP")]
    Udp,
    #[serde(alias = "ICMP")]
    Icmp,
    #[serde(alias = "ALL")]
    All,
    #[serde(other)]
    Unrecognized,
}

/// Rule programming state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum FirewallRuleState {
    Staged,
    Add,
    Active,
    Revoke,
    Deploying,
    #[serde(other)]
    Unrecognized,
}

/// Load balancing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoadBalancerAlgorithm {
    Source,
    RoundRobin,
    LeastConn,
    #[serde(other)]
    Unrecognized,
}

/// Load balancer rule state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LoadBalancerState {
    Add,
    Active,
    Revoke,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(
    FirewallProtocol,
    FirewallRuleState,
    LoadBalancerAlgorithm,
    LoadBalancerState,
);

/// An ingress firewall rule on a public IP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub id: String,
    pub protocol: Option<FirewallProtocol>,
    #[serde(default, rename = "startport", deserialize_with = "lenient")]
    pub start_port: Option<u16>,
    #[serde(default, rename = "endport", deserialize_with = "lenient")]
    pub end_port: Option<u16>,
    #[serde(default, rename = "ipaddressid")]
    pub ip_address_id: Option<String>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    #[serde(default, rename = "networkid")]
    pub network_id: Option<String>,
    pub state: Option<FirewallRuleState>,
    /// Comma-separated source CIDRs
    #[serde(default, rename = "cidrlist")]
    pub cidr_list: Option<String>,
    #[serde(default, rename = "icmptype", deserialize_with = "lenient")]
    pub icmp_type: Option<i32>,
    #[serde(default, rename = "icmpcode", deserialize_with = "lenient")]
    pub icmp_code: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

impl FirewallRule {
    /// Source CIDRs as a list
    pub fn cidrs(&self) -> Vec<&str> {
        split_cidrs(self.cidr_list.as_deref())
    }
}

/// A port forwarding rule from a public IP to a VM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortForwardingRule {
    pub id: String,
    pub protocol: Option<FirewallProtocol>,
    #[serde(default, rename = "privateport", deserialize_with = "lenient")]
    pub private_port: Option<u16>,
    #[serde(default, rename = "privateendport", deserialize_with = "lenient")]
    pub private_end_port: Option<u16>,
    #[serde(default, rename = "publicport", deserialize_with = "lenient")]
    pub public_port: Option<u16>,
    #[serde(default, rename = "publicendport", deserialize_with = "lenient")]
    pub public_end_port: Option<u16>,
    #[serde(default, rename = "ipaddressid")]
    pub ip_address_id: Option<String>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, rename = "virtualmachinename")]
    pub virtual_machine_name: Option<String>,
    #[serde(default, rename = "virtualmachinedisplayname")]
    pub virtual_machine_display_name: Option<String>,
    #[serde(default, rename = "vmguestip")]
    pub vm_guest_ip: Option<String>,
    pub state: Option<FirewallRuleState>,
    #[serde(default, rename = "cidrlist")]
    pub cidr_list: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

/// A load balancer rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerRule {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub algorithm: Option<LoadBalancerAlgorithm>,
    #[serde(default, rename = "publicipid")]
    pub public_ip_id: Option<String>,
    #[serde(default, rename = "publicip")]
    pub public_ip: Option<String>,
    #[serde(default, rename = "publicport", deserialize_with = "lenient")]
    pub public_port: Option<u16>,
    #[serde(default, rename = "privateport", deserialize_with = "lenient")]
    pub private_port: Option<u16>,
    #[serde(default, rename = "networkid")]
    pub network_id: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub state: Option<LoadBalancerState>,
    #[serde(default, rename = "cidrlist")]
    pub cidr_list: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

impl LoadBalancerRule {
    /// Source CIDRs as a list
    pub fn cidrs(&self) -> Vec<&str> {
        split_cidrs(self.cidr_list.as_deref())
    }
}

fn split_cidrs(list: Option<&str>) -> Vec<&str> {
    list.map(|l| {
        l.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firewall_rule_parses() {
        let json = r#"{
            "id": "fw-1",
            "protocol": "tcp",
            "startport": "22",
            "endport": 22,
            "state": "Active",
            "cidrlist": "10.0.0.0/8, 192.168.0.0/16"
        }"#;
        let rule: FirewallRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.protocol, Some(FirewallProtocol::Tcp));
        assert_eq!(rule.start_port, Some(22));
        assert_eq!(rule.state, Some(FirewallRuleState::Active));
        assert_eq!(rule.cidrs(), vec!["10.0.0.0/8", "192.168.0.0/16"]);
    }

    #[test]
    fn test_protocol_accepts_upper_case() {
        let rule: PortForwardingRule =
            serde_json::from_str(r#"{"id": "pf-1", "protocol": "UDP", "publicport": 53}"#).unwrap();
        assert_eq!(rule.protocol, Some(FirewallProtocol::Udp));
        assert_eq!(rule.public_port, Some(53));
    }

    #[test]
    fn test_load_balancer_rule_parses() {
        let json = r#"{"id": "lb-1", "algorithm": "roundrobin", "state": "Add", "publicport": "80"}"#;
        let rule: LoadBalancerRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.algorithm, Some(LoadBalancerAlgorithm::RoundRobin));
        assert_eq!(rule.state, Some(LoadBalancerState::Add));
        assert!(rule.cidrs().is_empty());
        assert_eq!(LoadBalancerAlgorithm::LeastConn.to_string(), "leastconn");
    }
}
