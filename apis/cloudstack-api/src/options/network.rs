// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network and network offering options

use super::{account_in_domain, join_ids, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listNetworks`
    pub struct ListNetworksOptions {
        id => "id",
        zone_id => "zoneid",
        traffic_type => "traffictype",
        guest_ip_type => "type",
        is_default => "isdefault",
        is_system => "issystem",
        physical_network_id => "physicalnetworkid",
        vpc_id => "vpcid",
        acl_type => "acltype",
        can_use_for_deploy => "canusefordeploy",
        restart_required => "restartrequired",
        specify_ip_ranges => "specifyipranges",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

impl ListNetworksOptions {
    /// Only networks offering all of these services
    pub fn supported_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("supportedservices", join_ids(services));
        self
    }
}

query_options! {
    /// Options for `createNetwork`
    pub struct CreateNetworkOptions {
        gateway => "gateway",
        netmask => "netmask",
        start_ip => "startip",
        end_ip => "endip",
        vlan => "vlan",
        network_domain => "networkdomain",
        acl_type => "acltype",
        physical_network_id => "physicalnetworkid",
        subdomain_access => "subdomainaccess",
        display_network => "displaynetwork",
        vpc_id => "vpcid",
        project_id => "projectid",
    }
}

paged_options! {
    /// Options for `listNetworkOfferings`
    pub struct ListNetworkOfferingsOptions {
        id => "id",
        name => "name",
        display_text => "displaytext",
        availability => "availability",
        guest_ip_type => "guestiptype",
        traffic_type => "traffictype",
        state => "state",
        zone_id => "zoneid",
        network_id => "networkid",
        is_default => "isdefault",
        is_tagged => "istagged",
        specify_vlan => "specifyvlan",
        specify_ip_ranges => "specifyipranges",
        for_vpc => "forvpc",
        /// Network tag the offering must carry
        network_tag => "tags",
    }
}

impl ListNetworkOfferingsOptions {
    /// Only offerings providing all of these services
    pub fn supported_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("supportedservices", join_ids(services));
        self
    }
}

account_in_domain!(ListNetworksOptions, CreateNetworkOptions);
tag_filter!(ListNetworksOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::{GuestIpType, TrafficType};

    #[test]
    fn test_list_networks_options() {
        let opts = ListNetworksOptions::new()
            .traffic_type(TrafficType::Guest)
            .guest_ip_type(GuestIpType::Isolated)
            .supported_services(["SourceNat", "Firewall"])
            .is_default(true);
        let params = opts.params();
        assert_eq!(params.get("traffictype"), Some("Guest"));
        assert_eq!(params.get("type"), Some("Isolated"));
        assert_eq!(params.get("supportedservices"), Some("SourceNat,Firewall"));
        assert_eq!(params.get("isdefault"), Some("true"));
    }

    #[test]
    fn test_create_network_options() {
        let opts = CreateNetworkOptions::new()
            .gateway("10.1.1.1")
            .netmask("255.255.255.0")
            .account_in_domain("ops", "dom-2");
        assert_eq!(opts.params().len(), 4);
    }
}
