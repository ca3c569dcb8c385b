// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network types

use super::common::{ResourceTag, lenient, lenient_from_str, null_as_empty};
use super::infrastructure::AllocationState;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Kind of traffic carried by a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TrafficType {
    Guest,
    Public,
    Management,
    Control,
    Storage,
    Vlan,
    #[serde(other)]
    Unrecognized,
}

/// Guest IP addressing model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GuestIpType {
    Isolated,
    Shared,
    Direct,
    Virtual,
    L2,
    #[serde(other)]
    Unrecognized,
}

/// Network implementation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum NetworkState {
    Allocated,
    Configured,
    Implementing,
    Implemented,
    Setup,
    Shutdown,
    Destroy,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(TrafficType, GuestIpType, NetworkState);

/// A guest, public or management network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    pub account: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    pub state: Option<NetworkState>,
    #[serde(default, rename = "traffictype")]
    pub traffic_type: Option<TrafficType>,
    #[serde(default, rename = "type")]
    pub guest_ip_type: Option<GuestIpType>,
    #[serde(default, rename = "networkofferingid")]
    pub network_offering_id: Option<String>,
    #[serde(default, rename = "networkofferingname")]
    pub network_offering_name: Option<String>,
    #[serde(default, rename = "networkofferingdisplaytext")]
    pub network_offering_display_text: Option<String>,
    #[serde(default, rename = "networkofferingavailability")]
    pub network_offering_availability: Option<String>,
    #[serde(default, rename = "networkdomain")]
    pub network_domain: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub cidr: Option<String>,
    #[serde(default, rename = "startip")]
    pub start_ip: Option<String>,
    #[serde(default, rename = "endip")]
    pub end_ip: Option<String>,
    pub vlan: Option<String>,
    #[serde(default, rename = "broadcastdomaintype")]
    pub broadcast_domain_type: Option<String>,
    #[serde(default, rename = "broadcasturi")]
    pub broadcast_uri: Option<String>,
    pub dns1: Option<String>,
    pub dns2: Option<String>,
    #[serde(default, rename = "isdefault", deserialize_with = "lenient")]
    pub is_default: Option<bool>,
    #[serde(default, rename = "issystem", deserialize_with = "lenient")]
    pub is_system: Option<bool>,
    #[serde(default, rename = "isshared", deserialize_with = "lenient")]
    pub is_shared: Option<bool>,
    #[serde(default, rename = "restartrequired", deserialize_with = "lenient")]
    pub restart_required: Option<bool>,
    #[serde(default, rename = "specifyipranges", deserialize_with = "lenient")]
    pub specify_ip_ranges: Option<bool>,
    #[serde(default, rename = "acltype")]
    pub acl_type: Option<String>,
    #[serde(default, rename = "vpcid")]
    pub vpc_id: Option<String>,
    #[serde(default, rename = "physicalnetworkid")]
    pub physical_network_id: Option<String>,
    #[serde(default, rename = "service", deserialize_with = "null_as_empty")]
    pub services: Vec<NetworkService>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

/// A service (DHCP, firewall, load balancer, ...) offered on a network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkService {
    pub name: String,
    #[serde(default, rename = "provider", deserialize_with = "null_as_empty")]
    pub providers: Vec<NetworkServiceProvider>,
    #[serde(default, rename = "capability", deserialize_with = "null_as_empty")]
    pub capabilities: Vec<NetworkServiceCapability>,
}

/// Element providing a network service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkServiceProvider {
    pub name: String,
    pub id: Option<String>,
    pub state: Option<String>,
    #[serde(default, rename = "physicalnetworkid")]
    pub physical_network_id: Option<String>,
    #[serde(default, rename = "canenableindividualservice", deserialize_with = "lenient")]
    pub can_enable_individual_service: Option<bool>,
}

/// A named capability of a network service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkServiceCapability {
    pub name: String,
    pub value: Option<String>,
    #[serde(default, rename = "canchooseservicecapability", deserialize_with = "lenient")]
    pub can_choose_service_capability: Option<bool>,
}

impl Network {
    /// Look up a service by name
    pub fn service(&self, name: &str) -> Option<&NetworkService> {
        self.services
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

/// A network offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkOffering {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    #[serde(default, rename = "traffictype")]
    pub traffic_type: Option<TrafficType>,
    #[serde(default, rename = "guestiptype")]
    pub guest_ip_type: Option<GuestIpType>,
    pub availability: Option<String>,
    pub state: Option<AllocationState>,
    #[serde(default, rename = "isdefault", deserialize_with = "lenient")]
    pub is_default: Option<bool>,
    #[serde(default, rename = "specifyvlan", deserialize_with = "lenient")]
    pub specify_vlan: Option<bool>,
    #[serde(default, rename = "specifyipranges", deserialize_with = "lenient")]
    pub specify_ip_ranges: Option<bool>,
    #[serde(default, rename = "conservemode", deserialize_with = "lenient")]
    pub conserve_mode: Option<bool>,
    #[serde(default, rename = "networkrate", deserialize_with = "lenient")]
    pub network_rate: Option<i32>,
    #[serde(default, rename = "serviceofferingid")]
    pub service_offering_id: Option<String>,
    pub tags: Option<String>,
    #[serde(default, rename = "service", deserialize_with = "null_as_empty")]
    pub services: Vec<NetworkService>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_with_services() {
        let json = r#"{
            "id": "net-1",
            "name": "guest",
            "state": "Implemented",
            "traffictype": "Guest",
            "type": "Isolated",
            "isdefault": "true",
            "service": [
                {"name": "Dhcp", "provider": [{"name": "VirtualRouter"}]},
                {"name": "Firewall", "capability": [
                    {"name": "SupportedProtocols", "value": "tcp,udp,icmp"}
                ]}
            ]
        }"#;
        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.state, Some(NetworkState::Implemented));
        assert_eq!(network.is_default, Some(true));
        assert_eq!(network.services.len(), 2);

        let dhcp = network.service("dhcp").unwrap();
        assert_eq!(dhcp.providers[0].name, "VirtualRouter");
        let fw = network.service("Firewall").unwrap();
        assert_eq!(fw.capabilities[0].value.as_deref(), Some("tcp,udp,icmp"));
        assert!(network.tags.is_empty());
    }

    #[test]
    fn test_network_offering_parses() {
        let json = r#"{"id": "no-1", "guestiptype": "Shared", "state": "Enabled", "networkrate": "200"}"#;
        let offering: NetworkOffering = serde_json::from_str(json).unwrap();
        assert_eq!(offering.guest_ip_type, Some(GuestIpType::Shared));
        assert_eq!(offering.state, Some(AllocationState::Enabled));
        assert_eq!(offering.network_rate, Some(200));
    }
}
