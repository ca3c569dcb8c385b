// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall, port forwarding and load balancer rule options

use super::{account_in_domain, join_ids, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listFirewallRules`
    pub struct ListFirewallRulesOptions {
        id => "id",
        ip_address_id => "ipaddressid",
        network_id => "networkid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createFirewallRule`
    pub struct CreateFirewallRuleOptions {
        start_port => "startport",
        end_port => "endport",
        icmp_type => "icmptype",
        icmp_code => "icmpcode",
    }
}

paged_options! {
    /// Options for `listPortForwardingRules`
    pub struct ListPortForwardingRulesOptions {
        id => "id",
        ip_address_id => "ipaddressid",
        network_id => "networkid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createPortForwardingRule`
    pub struct CreatePortForwardingRuleOptions {
        private_end_port => "privateendport",
        public_end_port => "publicendport",
        /// Also open the matching firewall port (defaults to true on the server)
        open_firewall => "openfirewall",
        network_id => "networkid",
        vm_guest_ip => "vmguestip",
    }
}

paged_options! {
    /// Options for `listLoadBalancerRules`
    pub struct ListLoadBalancerRulesOptions {
        id => "id",
        name => "name",
        public_ip_id => "publicipid",
        virtual_machine_id => "virtualmachineid",
        network_id => "networkid",
        zone_id => "zoneid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createLoadBalancerRule`
    pub struct CreateLoadBalancerRuleOptions {
        description => "description",
        public_ip_id => "publicipid",
        network_id => "networkid",
        zone_id => "zoneid",
        open_firewall => "openfirewall",
        protocol => "protocol",
    }
}

macro_rules! cidr_list {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Source CIDRs the rule admits
                pub fn cidr_list<I, S>(mut self, cidrs: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: AsRef<str>,
                {
                    self.params.set("cidrlist", join_ids(cidrs));
                    self
                }
            }
        )+
    };
}

cidr_list!(
    CreateFirewallRuleOptions,
    CreatePortForwardingRuleOptions,
    CreateLoadBalancerRuleOptions,
);

account_in_domain!(
    ListFirewallRulesOptions,
    ListPortForwardingRulesOptions,
    ListLoadBalancerRulesOptions,
    CreateLoadBalancerRuleOptions,
);
tag_filter!(
    ListFirewallRulesOptions,
    ListPortForwardingRulesOptions,
    ListLoadBalancerRulesOptions,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    #[test]
    fn test_create_firewall_rule_options() {
        let opts = CreateFirewallRuleOptions::new()
            .start_port(80)
            .end_port(90)
            .cidr_list(["0.0.0.0/0"]);
        assert_eq!(opts.params().get("startport"), Some("80"));
        assert_eq!(opts.params().get("cidrlist"), Some("0.0.0.0/0"));
    }

    #[test]
    fn test_create_port_forwarding_rule_options() {
        let opts = CreatePortForwardingRuleOptions::new()
            .open_firewall(false)
            .cidr_list(["10.0.0.0/8", "192.168.0.0/16"]);
        assert_eq!(opts.params().get("openfirewall"), Some("false"));
        assert_eq!(
            opts.params().get("cidrlist"),
            Some("10.0.0.0/8,192.168.0.0/16")
        );
    }
}
