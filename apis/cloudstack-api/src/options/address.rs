// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public IP address and VLAN IP range options

use super::{account_in_domain, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listPublicIpAddresses`
    pub struct ListPublicIpAddressesOptions {
        id => "id",
        ip_address => "ipaddress",
        allocated_only => "allocatedonly",
        associated_network_id => "associatednetworkid",
        physical_network_id => "physicalnetworkid",
        is_source_nat => "issourcenat",
        is_static_nat => "isstaticnat",
        for_virtual_network => "forvirtualnetwork",
        for_load_balancing => "forloadbalancing",
        vlan_id => "vlanid",
        vpc_id => "vpcid",
        zone_id => "zoneid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `associateIpAddress`
    pub struct AssociateIpAddressOptions {
        network_id => "networkid",
        zone_id => "zoneid",
        vpc_id => "vpcid",
        is_portable => "isportable",
        project_id => "projectid",
    }
}

paged_options! {
    /// Options for `listVlanIpRanges`
    pub struct ListVlanIpRangesOptions {
        id => "id",
        zone_id => "zoneid",
        pod_id => "podid",
        network_id => "networkid",
        physical_network_id => "physicalnetworkid",
        vlan => "vlan",
        for_virtual_network => "forvirtualnetwork",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createVlanIpRange`
    pub struct CreateVlanIpRangeOptions {
        end_ip => "endip",
        for_virtual_network => "forvirtualnetwork",
        zone_id => "zoneid",
        pod_id => "podid",
        network_id => "networkid",
        physical_network_id => "physicalnetworkid",
        /// VLAN tag, or `untagged`
        vlan => "vlan",
        gateway => "gateway",
        netmask => "netmask",
        project_id => "projectid",
    }
}

account_in_domain!(
    ListPublicIpAddressesOptions,
    AssociateIpAddressOptions,
    ListVlanIpRangesOptions,
    CreateVlanIpRangeOptions,
);
tag_filter!(ListPublicIpAddressesOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    #[test]
    fn test_list_public_ips_options() {
        let opts = ListPublicIpAddressesOptions::new()
            .allocated_only(true)
            .is_source_nat(false)
            .zone_id("z-1");
        assert_eq!(opts.params().get("allocatedonly"), Some("true"));
        assert_eq!(opts.params().get("issourcenat"), Some("false"));
    }

    #[test]
    fn test_create_vlan_ip_range_options() {
        let opts = CreateVlanIpRangeOptions::new()
            .vlan("untagged")
            .for_virtual_network(true)
            .account_in_domain("admin", "dom-1");
        assert_eq!(opts.params().get("vlan"), Some("untagged"));
        assert_eq!(opts.params().get("domainid"), Some("dom-1"));
    }
}
