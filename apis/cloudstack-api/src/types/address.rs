// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public IP addresses and VLAN IP ranges

use super::common::{ResourceTag, Timestamp, date, lenient, lenient_from_str, null_as_empty};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Allocation state of a public IP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PublicIpAddressState {
    Allocating,
    Allocated,
    Releasing,
    Reserved,
    Free,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(PublicIpAddressState);

/// A public IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicIpAddress {
    pub id: String,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    pub state: Option<PublicIpAddressState>,
    #[serde(default, with = "date")]
    pub allocated: Option<Timestamp>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "issourcenat", deserialize_with = "lenient")]
    pub is_source_nat: Option<bool>,
    #[serde(default, rename = "isstaticnat", deserialize_with = "lenient")]
    pub is_static_nat: Option<bool>,
    #[serde(default, rename = "issystem", deserialize_with = "lenient")]
    pub is_system: Option<bool>,
    #[serde(default, rename = "forvirtualnetwork", deserialize_with = "lenient")]
    pub for_virtual_network: Option<bool>,
    #[serde(default, rename = "associatednetworkid")]
    pub associated_network_id: Option<String>,
    #[serde(default, rename = "networkid")]
    pub network_id: Option<String>,
    #[serde(default, rename = "vlanid")]
    pub vlan_id: Option<String>,
    #[serde(default, rename = "vlanname")]
    pub vlan_name: Option<String>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, rename = "virtualmachinename")]
    pub virtual_machine_name: Option<String>,
    #[serde(default, rename = "virtualmachinedisplayname")]
    pub virtual_machine_display_name: Option<String>,
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

/// A range of public addresses on a VLAN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VlanIpRange {
    pub id: String,
    #[serde(default, rename = "forvirtualnetwork", deserialize_with = "lenient")]
    pub for_virtual_network: Option<bool>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "podid")]
    pub pod_id: Option<String>,
    #[serde(default, rename = "podname")]
    pub pod_name: Option<String>,
    #[serde(default, rename = "networkid")]
    pub network_id: Option<String>,
    #[serde(default, rename = "physicalnetworkid")]
    pub physical_network_id: Option<String>,
    pub vlan: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub description: Option<String>,
    #[serde(default, rename = "startip")]
    pub start_ip: Option<String>,
    #[serde(default, rename = "endip")]
    pub end_ip: Option<String>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_ip_parses() {
        let json = r#"{
            "id": "ip-1",
            "ipaddress": "72.52.126.110",
            "state": "Allocated",
            "allocated": "2011-12-13T16:32:22-0800",
            "issourcenat": true,
            "isstaticnat": "false"
        }"#;
        let ip: PublicIpAddress = serde_json::from_str(json).unwrap();
        assert_eq!(ip.state, Some(PublicIpAddressState::Allocated));
        assert_eq!(ip.is_source_nat, Some(true));
        assert_eq!(ip.is_static_nat, Some(false));
        assert!(ip.allocated.is_some());
    }

    #[test]
    fn test_vlan_ip_range_parses() {
        let json = r#"{"id": "v-1", "vlan": "untagged", "startip": "10.0.0.10",
                       "endip": "10.0.0.20", "forvirtualnetwork": "true"}"#;
        let range: VlanIpRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.vlan.as_deref(), Some("untagged"));
        assert_eq!(range.for_virtual_network, Some(true));
    }
}
