// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zone, pod, cluster, host and storage pool options

use super::{paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listZones`
    pub struct ListZonesOptions {
        id => "id",
        name => "name",
        /// Only zones the caller may deploy into
        available => "available",
        domain_id => "domainid",
        network_type => "networktype",
        show_capacities => "showcapacities",
    }
}

query_options! {
    /// Options for `createZone`
    pub struct CreateZoneOptions {
        allocation_state => "allocationstate",
        dns2 => "dns2",
        internal_dns2 => "internaldns2",
        ip6_dns1 => "ip6dns1",
        ip6_dns2 => "ip6dns2",
        domain_id => "domainid",
        guest_cidr_address => "guestcidraddress",
        network_domain => "domain",
        local_storage_enabled => "localstorageenabled",
        security_group_enabled => "securitygroupenabled",
    }
}

query_options! {
    /// Options for `updateZone`
    pub struct UpdateZoneOptions {
        name => "name",
        allocation_state => "allocationstate",
        dhcp_provider => "dhcpprovider",
        dns1 => "dns1",
        dns2 => "dns2",
        internal_dns1 => "internaldns1",
        internal_dns2 => "internaldns2",
        guest_cidr_address => "guestcidraddress",
        network_domain => "domain",
        is_public => "ispublic",
        local_storage_enabled => "localstorageenabled",
    }
}

paged_options! {
    /// Options for `listPods`
    pub struct ListPodsOptions {
        id => "id",
        name => "name",
        zone_id => "zoneid",
        allocation_state => "allocationstate",
        show_capacities => "showcapacities",
    }
}

query_options! {
    /// Options for `createPod`
    pub struct CreatePodOptions {
        end_ip => "endip",
        allocation_state => "allocationstate",
    }
}

query_options! {
    /// Options for `updatePod`
    pub struct UpdatePodOptions {
        name => "name",
        start_ip => "startip",
        end_ip => "endip",
        netmask => "netmask",
        gateway => "gateway",
        allocation_state => "allocationstate",
    }
}

paged_options! {
    /// Options for `listClusters`
    pub struct ListClustersOptions {
        id => "id",
        name => "name",
        zone_id => "zoneid",
        pod_id => "podid",
        hypervisor => "hypervisor",
        cluster_type => "clustertype",
        allocation_state => "allocationstate",
        managed_state => "managedstate",
        show_capacities => "showcapacities",
    }
}

query_options! {
    /// Options for `addCluster`
    pub struct AddClusterOptions {
        allocation_state => "allocationstate",
        /// Hypervisor manager URL (VMware vCenter)
        url => "url",
        username => "username",
        password => "password",
    }
}

query_options! {
    /// Options for `updateCluster`
    pub struct UpdateClusterOptions {
        name => "clustername",
        cluster_type => "clustertype",
        hypervisor => "hypervisor",
        allocation_state => "allocationstate",
        managed_state => "managedstate",
    }
}

paged_options! {
    /// Options for `listHosts`
    pub struct ListHostsOptions {
        id => "id",
        name => "name",
        host_type => "type",
        state => "state",
        resource_state => "resourcestate",
        zone_id => "zoneid",
        pod_id => "podid",
        cluster_id => "clusterid",
        hypervisor => "hypervisor",
        virtual_machine_id => "virtualmachineid",
        /// Only hosts dedicated to HA
        ha_host => "hahost",
        details => "details",
    }
}

query_options! {
    /// Options for `addHost`
    pub struct AddHostOptions {
        pod_id => "podid",
        cluster_id => "clusterid",
        cluster_name => "clustername",
        allocation_state => "allocationstate",
        host_tags => "hosttags",
    }
}

query_options! {
    /// Options for `updateHost`
    pub struct UpdateHostOptions {
        allocation_state => "allocationstate",
        host_tags => "hosttags",
        os_category_id => "oscategoryid",
        url => "url",
    }
}

paged_options! {
    /// Options for `listStoragePools`
    pub struct ListStoragePoolsOptions {
        id => "id",
        name => "name",
        zone_id => "zoneid",
        pod_id => "podid",
        cluster_id => "clusterid",
        ip_address => "ipaddress",
        path => "path",
        scope => "scope",
    }
}

tag_filter!(ListZonesOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::{AllocationState, HostType, HypervisorType};

    #[test]
    fn test_list_hosts_enum_values() {
        let opts = ListHostsOptions::new()
            .host_type(HostType::Routing)
            .hypervisor(HypervisorType::Kvm)
            .zone_id("z-1");
        let params = opts.params();
        assert_eq!(params.get("type"), Some("Routing"));
        assert_eq!(params.get("hypervisor"), Some("KVM"));
        assert_eq!(params.get("zoneid"), Some("z-1"));
    }

    #[test]
    fn test_update_zone_options() {
        let opts = UpdateZoneOptions::new()
            .allocation_state(AllocationState::Disabled)
            .is_public(false);
        assert_eq!(opts.params().get("allocationstate"), Some("Disabled"));
        assert_eq!(opts.params().get("ispublic"), Some("false"));
    }
}
