// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Physical infrastructure: zones, pods, clusters, hosts and storage pools

use super::common::{Timestamp, date, lenient, lenient_from_str, null_as_empty};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Whether new resources may be allocated in a zone, pod, cluster or host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AllocationState {
    Enabled,
    Disabled,
    #[serde(other)]
    Unrecognized,
}

/// Zone network model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum NetworkType {
    Basic,
    Advanced,
    #[serde(other)]
    Unrecognized,
}

/// Hypervisor technology of a host, cluster or template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum HypervisorType {
    XenServer,
    #[serde(rename = "KVM")]
    #[strum(serialize = "KVM")]
    Kvm,
    VMware,
    Hyperv,
    BareMetal,
    Simulator,
    Ovm,
    Ovm3,
    #[serde(rename = "LXC")]
    #[strum(serialize = "LXC")]
    Lxc,
    None,
    #[serde(other)]
    Unrecognized,
}

/// Role of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum HostType {
    Storage,
    Routing,
    SecondaryStorage,
    SecondaryStorageCmdExecutor,
    ConsoleProxy,
    ExternalFirewall,
    ExternalLoadBalancer,
    ExternalVirtualSwitchSupervisor,
    PxeServer,
    TrafficMonitor,
    ExternalDhcp,
    SecondaryStorageVM,
    LocalSecondaryStorage,
    L2Networking,
    #[serde(other)]
    Unrecognized,
}

/// Connection state of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum HostState {
    Creating,
    Connecting,
    Up,
    Down,
    Disconnected,
    Alert,
    Removed,
    Error,
    Rebalancing,
    #[serde(other)]
    Unrecognized,
}

/// Who manages a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ClusterType {
    CloudManaged,
    ExternalManaged,
    #[serde(other)]
    Unrecognized,
}

/// Storage pool state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum StoragePoolState {
    Initial,
    Initialized,
    Creating,
    Attaching,
    Up,
    PrepareForMaintenance,
    ErrorInMaintenance,
    CancelMaintenance,
    Maintenance,
    Disabled,
    Removed,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(
    AllocationState,
    NetworkType,
    HypervisorType,
    HostType,
    HostState,
    ClusterType,
    StoragePoolState,
);

/// An availability zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    #[serde(default, rename = "networktype")]
    pub network_type: Option<NetworkType>,
    #[serde(default, rename = "allocationstate")]
    pub allocation_state: Option<AllocationState>,
    pub dns1: Option<String>,
    pub dns2: Option<String>,
    pub internaldns1: Option<String>,
    pub internaldns2: Option<String>,
    #[serde(default, rename = "guestcidraddress")]
    pub guest_cidr_address: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "securitygroupsenabled", deserialize_with = "lenient")]
    pub security_groups_enabled: Option<bool>,
    #[serde(default, rename = "localstorageenabled", deserialize_with = "lenient")]
    pub local_storage_enabled: Option<bool>,
    #[serde(default, rename = "zonetoken")]
    pub zone_token: Option<String>,
    #[serde(default, rename = "dhcpprovider")]
    pub dhcp_provider: Option<String>,
}

/// A pod (rack) within a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    #[serde(default, rename = "startip")]
    pub start_ip: Option<String>,
    #[serde(default, rename = "endip")]
    pub end_ip: Option<String>,
    #[serde(default, rename = "allocationstate")]
    pub allocation_state: Option<AllocationState>,
}

/// A cluster of hosts sharing a hypervisor and primary storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "podid")]
    pub pod_id: Option<String>,
    #[serde(default, rename = "podname")]
    pub pod_name: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "hypervisortype")]
    pub hypervisor: Option<HypervisorType>,
    #[serde(default, rename = "clustertype")]
    pub cluster_type: Option<ClusterType>,
    #[serde(default, rename = "allocationstate")]
    pub allocation_state: Option<AllocationState>,
    #[serde(default, rename = "managedstate")]
    pub managed_state: Option<String>,
    #[serde(default, rename = "cpuovercommitratio")]
    pub cpu_overcommit_ratio: Option<String>,
    #[serde(default, rename = "memoryovercommitratio")]
    pub memory_overcommit_ratio: Option<String>,
}

/// A physical or logical host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub host_type: Option<HostType>,
    pub state: Option<HostState>,
    #[serde(default, rename = "resourcestate")]
    pub resource_state: Option<String>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "podid")]
    pub pod_id: Option<String>,
    #[serde(default, rename = "podname")]
    pub pod_name: Option<String>,
    #[serde(default, rename = "clusterid")]
    pub cluster_id: Option<String>,
    #[serde(default, rename = "clustername")]
    pub cluster_name: Option<String>,
    #[serde(default, rename = "clustertype")]
    pub cluster_type: Option<ClusterType>,
    pub hypervisor: Option<HypervisorType>,
    #[serde(default, rename = "hypervisorversion")]
    pub hypervisor_version: Option<String>,
    pub version: Option<String>,
    #[serde(default, rename = "hosttags")]
    pub host_tags: Option<String>,
    #[serde(default, rename = "oscategoryid")]
    pub os_category_id: Option<String>,
    #[serde(default, rename = "oscategoryname")]
    pub os_category_name: Option<String>,
    #[serde(default, rename = "cpunumber", deserialize_with = "lenient")]
    pub cpu_number: Option<u32>,
    #[serde(default, rename = "cpuspeed", deserialize_with = "lenient")]
    pub cpu_speed: Option<u64>,
    #[serde(default, rename = "cpuallocated")]
    pub cpu_allocated: Option<String>,
    #[serde(default, rename = "cpuused")]
    pub cpu_used: Option<String>,
    #[serde(default, rename = "memorytotal", deserialize_with = "lenient")]
    pub memory_total: Option<u64>,
    #[serde(default, rename = "memoryallocated", deserialize_with = "lenient")]
    pub memory_allocated: Option<u64>,
    #[serde(default, rename = "memoryused", deserialize_with = "lenient")]
    pub memory_used: Option<u64>,
    #[serde(default, rename = "disksizetotal", deserialize_with = "lenient")]
    pub disk_size_total: Option<u64>,
    #[serde(default, rename = "disksizeallocated", deserialize_with = "lenient")]
    pub disk_size_allocated: Option<u64>,
    #[serde(default, rename = "networkkbsread", deserialize_with = "lenient")]
    pub network_kbs_read: Option<u64>,
    #[serde(default, rename = "networkkbswrite", deserialize_with = "lenient")]
    pub network_kbs_write: Option<u64>,
    #[serde(default, rename = "islocalstorageactive", deserialize_with = "lenient")]
    pub local_storage_active: Option<bool>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    #[serde(default, with = "date")]
    pub disconnected: Option<Timestamp>,
    #[serde(default, rename = "lastpinged", with = "date")]
    pub last_pinged: Option<Timestamp>,
    #[serde(default, with = "date")]
    pub removed: Option<Timestamp>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub events: Vec<String>,
}

/// A primary storage pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePool {
    pub id: String,
    pub name: Option<String>,
    pub path: Option<String>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    #[serde(default, rename = "type")]
    pub pool_type: Option<String>,
    pub scope: Option<String>,
    pub state: Option<StoragePoolState>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "podid")]
    pub pod_id: Option<String>,
    #[serde(default, rename = "podname")]
    pub pod_name: Option<String>,
    #[serde(default, rename = "clusterid")]
    pub cluster_id: Option<String>,
    #[serde(default, rename = "clustername")]
    pub cluster_name: Option<String>,
    pub tags: Option<String>,
    #[serde(default, rename = "disksizetotal", deserialize_with = "lenient")]
    pub disk_size_total: Option<u64>,
    #[serde(default, rename = "disksizeallocated", deserialize_with = "lenient")]
    pub disk_size_allocated: Option<u64>,
    #[serde(default, rename = "disksizeused", deserialize_with = "lenient")]
    pub disk_size_used: Option<u64>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_parses() {
        let json = r#"{
            "id": "h-1",
            "name": "xen-01",
            "type": "Routing",
            "state": "Up",
            "hypervisor": "XenServer",
            "cpunumber": 8,
            "memorytotal": "17179869184",
            "islocalstorageactive": "false",
            "lastpinged": "1970-01-16T00:54:43+0100",
            "events": null
        }"#;
        let host: Host = serde_json::from_str(json).unwrap();
        assert_eq!(host.host_type, Some(HostType::Routing));
        assert_eq!(host.state, Some(HostState::Up));
        assert_eq!(host.hypervisor, Some(HypervisorType::XenServer));
        assert_eq!(host.memory_total, Some(17_179_869_184));
        assert_eq!(host.local_storage_active, Some(false));
        assert!(host.last_pinged.is_some());
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_zone_unknown_network_type() {
        let zone: Zone =
            serde_json::from_str(r#"{"id": "z-1", "networktype": "Hybrid"}"#).unwrap();
        assert_eq!(zone.network_type, Some(NetworkType::Unrecognized));
    }

    #[test]
    fn test_hypervisor_from_str() {
        assert_eq!("KVM".parse::<HypervisorType>().unwrap(), HypervisorType::Kvm);
        assert_eq!(
            "Firecracker".parse::<HypervisorType>().unwrap(),
            HypervisorType::Unrecognized
        );
    }
}
