// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Networks, offerings, security groups, firewall and load balancer rules

use cloudstack_api::commands::network::*;
use cloudstack_api::options::{
    AuthorizeIngressOptions, CreateFirewallRuleOptions, CreateLoadBalancerRuleOptions,
    CreateNetworkOptions, CreatePortForwardingRuleOptions, ListDiskOfferingsOptions,
    ListFirewallRulesOptions, ListLoadBalancerRulesOptions, ListNetworkOfferingsOptions,
    ListNetworksOptions, ListPortForwardingRulesOptions, ListSecurityGroupsOptions,
    ListServiceOfferingsOptions,
};
use cloudstack_api::{
    AsyncCreateResponse, DiskOffering, FirewallProtocol, FirewallRule, LoadBalancerAlgorithm,
    LoadBalancerRule, Network, NetworkOffering, Options, PortForwardingRule, QueryParams,
    SecurityGroup, ServiceOffering, VirtualMachine,
};

use super::{api_accessor, by_id};
use crate::error::Error;

fn join<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

api_accessor! {
    /// Guest network commands
    NetworkApi
}

impl NetworkApi<'_> {
    pub async fn list_networks(&self, options: ListNetworksOptions) -> Result<Vec<Network>, Error> {
        self.client.list(&LIST_NETWORKS, options.into_params()).await
    }

    pub async fn get_network(&self, id: &str) -> Result<Option<Network>, Error> {
        self.client.get(&GET_NETWORK, by_id(id)).await
    }

    pub async fn create_network(
        &self,
        zone_id: &str,
        network_offering_id: &str,
        name: &str,
        display_text: &str,
        options: CreateNetworkOptions,
    ) -> Result<Network, Error> {
        let params = options
            .into_params()
            .with("zoneid", zone_id)
            .with("networkofferingid", network_offering_id)
            .with("name", name)
            .with("displaytext", display_text);
        self.client.object(&CREATE_NETWORK, params).await
    }

    pub async fn delete_network(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DELETE_NETWORK, by_id(id)).await
    }

    /// Restart a network's services; `cleanup` recreates its routers
    pub async fn restart_network(
        &self,
        id: &str,
        cleanup: bool,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = by_id(id).with("cleanup", cleanup.to_string());
        self.client.job(&RESTART_NETWORK, params).await
    }
}

api_accessor! {
    /// Service, disk and network offerings
    OfferingApi
}

impl OfferingApi<'_> {
    pub async fn list_service_offerings(
        &self,
        options: ListServiceOfferingsOptions,
    ) -> Result<Vec<ServiceOffering>, Error> {
        self.client
            .list(&LIST_SERVICE_OFFERINGS, options.into_params())
            .await
    }

    pub async fn get_service_offering(&self, id: &str) -> Result<Option<ServiceOffering>, Error> {
        self.client.get(&GET_SERVICE_OFFERING, by_id(id)).await
    }

    pub async fn delete_service_offering(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_SERVICE_OFFERING, by_id(id)).await
    }

    pub async fn list_disk_offerings(
        &self,
        options: ListDiskOfferingsOptions,
    ) -> Result<Vec<DiskOffering>, Error> {
        self.client
            .list(&LIST_DISK_OFFERINGS, options.into_params())
            .await
    }

    pub async fn get_disk_offering(&self, id: &str) -> Result<Option<DiskOffering>, Error> {
        self.client.get(&GET_DISK_OFFERING, by_id(id)).await
    }

    pub async fn delete_disk_offering(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_DISK_OFFERING, by_id(id)).await
    }

    pub async fn list_network_offerings(
        &self,
        options: ListNetworkOfferingsOptions,
    ) -> Result<Vec<NetworkOffering>, Error> {
        self.client
            .list(&LIST_NETWORK_OFFERINGS, options.into_params())
            .await
    }

    pub async fn get_network_offering(&self, id: &str) -> Result<Option<NetworkOffering>, Error> {
        self.client.get(&GET_NETWORK_OFFERING, by_id(id)).await
    }
}

api_accessor! {
    /// Security group commands (basic zones)
    SecurityGroupApi
}

impl SecurityGroupApi<'_> {
    pub async fn list_security_groups(
        &self,
        options: ListSecurityGroupsOptions,
    ) -> Result<Vec<SecurityGroup>, Error> {
        self.client
            .list(&LIST_SECURITY_GROUPS, options.into_params())
            .await
    }

    pub async fn get_security_group(&self, id: &str) -> Result<Option<SecurityGroup>, Error> {
        self.client.get(&GET_SECURITY_GROUP, by_id(id)).await
    }

    pub async fn create_security_group(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<SecurityGroup, Error> {
        let mut params = QueryParams::new().with("name", name);
        if let Some(description) = description {
            params.set("description", description);
        }
        self.client.object(&CREATE_SECURITY_GROUP, params).await
    }

    pub async fn delete_security_group(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_SECURITY_GROUP, by_id(id)).await
    }

    /// Add an ingress rule to a group
    pub async fn authorize_security_group_ingress(
        &self,
        security_group_id: &str,
        options: AuthorizeIngressOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("securitygroupid", security_group_id);
        self.client
            .job(&AUTHORIZE_SECURITY_GROUP_INGRESS, params)
            .await
    }

    pub async fn revoke_security_group_ingress(
        &self,
        rule_id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        self.client
            .job(&REVOKE_SECURITY_GROUP_INGRESS, by_id(rule_id))
            .await
    }
}

api_accessor! {
    /// Firewall and port-forwarding rules
    FirewallApi
}

impl FirewallApi<'_> {
    pub async fn list_firewall_rules(
        &self,
        options: ListFirewallRulesOptions,
    ) -> Result<Vec<FirewallRule>, Error> {
        self.client
            .list(&LIST_FIREWALL_RULES, options.into_params())
            .await
    }

    pub async fn get_firewall_rule(&self, id: &str) -> Result<Option<FirewallRule>, Error> {
        self.client.get(&GET_FIREWALL_RULE, by_id(id)).await
    }

    pub async fn create_firewall_rule(
        &self,
        ip_address_id: &str,
        protocol: FirewallProtocol,
        options: CreateFirewallRuleOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("ipaddressid", ip_address_id)
            .with("protocol", protocol.to_string());
        self.client.job(&CREATE_FIREWALL_RULE, params).await
    }

    pub async fn delete_firewall_rule(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DELETE_FIREWALL_RULE, by_id(id)).await
    }

    pub async fn list_port_forwarding_rules(
        &self,
        options: ListPortForwardingRulesOptions,
    ) -> Result<Vec<PortForwardingRule>, Error> {
        self.client
            .list(&LIST_PORT_FORWARDING_RULES, options.into_params())
            .await
    }

    pub async fn get_port_forwarding_rule(
        &self,
        id: &str,
    ) -> Result<Option<PortForwardingRule>, Error> {
        self.client.get(&GET_PORT_FORWARDING_RULE, by_id(id)).await
    }

    /// Forward `public_port` on an IP to `private_port` on a VM
    pub async fn create_port_forwarding_rule(
        &self,
        ip_address_id: &str,
        protocol: FirewallProtocol,
        public_port: u16,
        virtual_machine_id: &str,
        private_port: u16,
        options: CreatePortForwardingRuleOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("ipaddressid", ip_address_id)
            .with("protocol", protocol.to_string())
            .with("publicport", public_port.to_string())
            .with("virtualmachineid", virtual_machine_id)
            .with("privateport", private_port.to_string());
        self.client.job(&CREATE_PORT_FORWARDING_RULE, params).await
    }

    pub async fn delete_port_forwarding_rule(
        &self,
        id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        self.client
            .job(&DELETE_PORT_FORWARDING_RULE, by_id(id))
            .await
    }
}

api_accessor! {
    /// Load balancer rules
    LoadBalancerApi
}

impl LoadBalancerApi<'_> {
    pub async fn list_load_balancer_rules(
        &self,
        options: ListLoadBalancerRulesOptions,
    ) -> Result<Vec<LoadBalancerRule>, Error> {
        self.client
            .list(&LIST_LOAD_BALANCER_RULES, options.into_params())
            .await
    }

    pub async fn get_load_balancer_rule(
        &self,
        id: &str,
    ) -> Result<Option<LoadBalancerRule>, Error> {
        self.client.get(&GET_LOAD_BALANCER_RULE, by_id(id)).await
    }

    pub async fn create_load_balancer_rule(
        &self,
        name: &str,
        algorithm: LoadBalancerAlgorithm,
        public_port: u16,
        private_port: u16,
        options: CreateLoadBalancerRuleOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("name", name)
            .with("algorithm", algorithm.to_string())
            .with("publicport", public_port.to_string())
            .with("privateport", private_port.to_string());
        self.client.job(&CREATE_LOAD_BALANCER_RULE, params).await
    }

    pub async fn delete_load_balancer_rule(
        &self,
        id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DELETE_LOAD_BALANCER_RULE, by_id(id)).await
    }

    pub async fn assign_virtual_machines_to_load_balancer_rule<I, S>(
        &self,
        id: &str,
        virtual_machine_ids: I,
    ) -> Result<AsyncCreateResponse, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let params = by_id(id).with("virtualmachineids", join(virtual_machine_ids));
        self.client.job(&ASSIGN_TO_LOAD_BALANCER_RULE, params).await
    }

    pub async fn remove_virtual_machines_from_load_balancer_rule<I, S>(
        &self,
        id: &str,
        virtual_machine_ids: I,
    ) -> Result<AsyncCreateResponse, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let params = by_id(id).with("virtualmachineids", join(virtual_machine_ids));
        self.client
            .job(&REMOVE_FROM_LOAD_BALANCER_RULE, params)
            .await
    }

    /// VMs assigned to a rule
    pub async fn list_virtual_machines_assigned_to_load_balancer_rule(
        &self,
        id: &str,
    ) -> Result<Vec<VirtualMachine>, Error> {
        self.client
            .list(&LIST_LOAD_BALANCER_RULE_INSTANCES, by_id(id))
            .await
    }
}
