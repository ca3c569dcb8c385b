// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine types

use super::common::{ResourceTag, Timestamp, date, lenient, lenient_from_str, null_as_empty};
use super::infrastructure::HypervisorType;
use super::network::{GuestIpType, TrafficType};
use super::security_group::SecurityGroup;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Virtual machine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum VirtualMachineState {
    Starting,
    Running,
    Stopping,
    Stopped,
    Destroyed,
    Expunging,
    Migrating,
    Error,
    Unknown,
    Shutdowned,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(VirtualMachineState);

impl VirtualMachineState {
    /// Whether the VM is in a state it will not leave on its own
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            Self::Running | Self::Stopped | Self::Destroyed | Self::Error
        )
    }
}

/// A network interface attached to a virtual machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nic {
    pub id: String,
    #[serde(default, rename = "networkid")]
    pub network_id: Option<String>,
    #[serde(default, rename = "networkname")]
    pub network_name: Option<String>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    #[serde(default, rename = "macaddress")]
    pub mac_address: Option<String>,
    #[serde(default, rename = "broadcasturi")]
    pub broadcast_uri: Option<String>,
    #[serde(default, rename = "isolationuri")]
    pub isolation_uri: Option<String>,
    #[serde(default, rename = "traffictype")]
    pub traffic_type: Option<TrafficType>,
    #[serde(default, rename = "type")]
    pub guest_ip_type: Option<GuestIpType>,
    #[serde(default, rename = "isdefault", deserialize_with = "lenient")]
    pub is_default: Option<bool>,
    #[serde(default, rename = "ip6address")]
    pub ip6_address: Option<String>,
    #[serde(default, rename = "ip6gateway")]
    pub ip6_gateway: Option<String>,
    #[serde(default, rename = "ip6cidr")]
    pub ip6_cidr: Option<String>,
}

/// A virtual machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displayname")]
    pub display_name: Option<String>,
    pub state: Option<VirtualMachineState>,
    pub account: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    #[serde(default, rename = "haenable", deserialize_with = "lenient")]
    pub ha_enabled: Option<bool>,
    pub group: Option<String>,
    #[serde(default, rename = "groupid")]
    pub group_id: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "hostid")]
    pub host_id: Option<String>,
    #[serde(default, rename = "hostname")]
    pub host_name: Option<String>,
    #[serde(default, rename = "templateid")]
    pub template_id: Option<String>,
    #[serde(default, rename = "templatename")]
    pub template_name: Option<String>,
    #[serde(default, rename = "templatedisplaytext")]
    pub template_display_text: Option<String>,
    #[serde(default, rename = "passwordenabled", deserialize_with = "lenient")]
    pub password_enabled: Option<bool>,
    /// Only returned by deploy and password reset
    pub password: Option<String>,
    #[serde(default, rename = "isoid")]
    pub iso_id: Option<String>,
    #[serde(default, rename = "isoname")]
    pub iso_name: Option<String>,
    #[serde(default, rename = "serviceofferingid")]
    pub service_offering_id: Option<String>,
    #[serde(default, rename = "serviceofferingname")]
    pub service_offering_name: Option<String>,
    #[serde(default, rename = "diskofferingid")]
    pub disk_offering_id: Option<String>,
    #[serde(default, rename = "diskofferingname")]
    pub disk_offering_name: Option<String>,
    #[serde(default, rename = "forvirtualnetwork", deserialize_with = "lenient")]
    pub for_virtual_network: Option<bool>,
    #[serde(default, rename = "cpunumber", deserialize_with = "lenient")]
    pub cpu_count: Option<u32>,
    #[serde(default, rename = "cpuspeed", deserialize_with = "lenient")]
    pub cpu_speed: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub memory: Option<u64>,
    #[serde(default, rename = "cpuused")]
    pub cpu_used: Option<String>,
    #[serde(default, rename = "networkkbsread", deserialize_with = "lenient")]
    pub network_kbs_read: Option<u64>,
    #[serde(default, rename = "networkkbswrite", deserialize_with = "lenient")]
    pub network_kbs_write: Option<u64>,
    #[serde(default, rename = "guestosid")]
    pub guest_os_id: Option<String>,
    #[serde(default, rename = "rootdeviceid", deserialize_with = "lenient")]
    pub root_device_id: Option<u32>,
    #[serde(default, rename = "rootdevicetype")]
    pub root_device_type: Option<String>,
    pub hypervisor: Option<HypervisorType>,
    #[serde(default, rename = "publicipid")]
    pub public_ip_id: Option<String>,
    #[serde(default, rename = "publicip")]
    pub public_ip: Option<String>,
    #[serde(default, rename = "keypair")]
    pub key_pair: Option<String>,
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, rename = "jobstatus", deserialize_with = "lenient")]
    pub job_status: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nic: Vec<Nic>,
    #[serde(default, rename = "securitygroup", deserialize_with = "null_as_empty")]
    pub security_groups: Vec<SecurityGroup>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

impl VirtualMachine {
    /// IP address of the default NIC
    pub fn primary_ip(&self) -> Option<&str> {
        self.nic
            .iter()
            .find(|n| n.is_default == Some(true))
            .or_else(|| self.nic.first())
            .and_then(|n| n.ip_address.as_deref())
    }
}

/// Encrypted password returned by `getVMPassword`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachinePassword {
    #[serde(rename = "encryptedpassword")]
    pub encrypted_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_machine_parses() {
        let json = r#"{
            "id": "vm-1",
            "name": "i-2-1-VM",
            "displayname": "web",
            "state": "Running",
            "created": "2011-12-13T16:32:22-0800",
            "haenable": false,
            "cpunumber": 1,
            "memory": "512",
            "hypervisor": "KVM",
            "nic": [
                {"id": "n-1", "ipaddress": "10.1.1.10", "isdefault": false, "traffictype": "Guest"},
                {"id": "n-2", "ipaddress": "10.1.1.11", "isdefault": true, "type": "Isolated"}
            ],
            "securitygroup": [{"id": "sg-1", "name": "default"}],
            "tags": []
        }"#;
        let vm: VirtualMachine = serde_json::from_str(json).unwrap();
        assert_eq!(vm.state, Some(VirtualMachineState::Running));
        assert_eq!(vm.memory, Some(512));
        assert_eq!(vm.hypervisor, Some(HypervisorType::Kvm));
        assert_eq!(vm.nic[0].traffic_type, Some(TrafficType::Guest));
        assert_eq!(vm.nic[1].guest_ip_type, Some(GuestIpType::Isolated));
        assert_eq!(vm.primary_ip(), Some("10.1.1.11"));
        assert_eq!(vm.security_groups[0].name.as_deref(), Some("default"));
    }

    #[test]
    fn test_structural_equality() {
        let json = r#"{"id": "vm-1", "state": "Stopped"}"#;
        let a: VirtualMachine = serde_json::from_str(json).unwrap();
        let b: VirtualMachine = serde_json::from_str(json).unwrap();
        assert_eq!(a, b);

        let c: VirtualMachine = serde_json::from_str(r#"{"id": "vm-1", "state": "Running"}"#).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_state_leniency_and_settling() {
        let vm: VirtualMachine =
            serde_json::from_str(r#"{"id": "vm-1", "state": "Hibernating"}"#).unwrap();
        assert_eq!(vm.state, Some(VirtualMachineState::Unrecognized));
        assert!(VirtualMachineState::Running.is_settled());
        assert!(!VirtualMachineState::Starting.is_settled());
    }
}
