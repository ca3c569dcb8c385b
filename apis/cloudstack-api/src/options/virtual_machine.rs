// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine options

use super::{account_in_domain, id_list, join_ids, paged_options, query_options, tag_filter};
use base64::Engine;

paged_options! {
    /// Options for `listVirtualMachines`
    pub struct ListVirtualMachinesOptions {
        id => "id",
        name => "name",
        state => "state",
        zone_id => "zoneid",
        pod_id => "podid",
        host_id => "hostid",
        storage_id => "storageid",
        group_id => "groupid",
        hypervisor => "hypervisor",
        network_id => "networkid",
        template_id => "templateid",
        iso_id => "isoid",
        vpc_id => "vpcid",
        service_offering_id => "serviceofferingid",
        key_pair => "keypair",
        for_virtual_network => "forvirtualnetwork",
        /// Comma-separated detail groups (`nics`, `stats`, ...)
        details => "details",
        display_vm => "displayvm",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `deployVirtualMachine`
    pub struct DeployVirtualMachineOptions {
        name => "name",
        display_name => "displayname",
        group => "group",
        disk_offering_id => "diskofferingid",
        /// Data disk size in GB for custom disk offerings
        size => "size",
        /// Root disk size in GB
        root_disk_size => "rootdisksize",
        hypervisor => "hypervisor",
        host_id => "hostid",
        key_pair => "keypair",
        ip_address => "ipaddress",
        ip6_address => "ip6address",
        keyboard => "keyboard",
        start_vm => "startvm",
        project_id => "projectid",
        display_vm => "displayvm",
    }
}

impl DeployVirtualMachineOptions {
    /// Networks to attach, the first being the default
    pub fn network_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("networkids", join_ids(ids));
        self
    }

    /// Security groups by ID (basic zones)
    pub fn security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("securitygroupids", join_ids(ids));
        self
    }

    /// Security groups by name (basic zones)
    pub fn security_group_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("securitygroupnames", join_ids(names));
        self
    }

    /// Affinity groups by ID
    pub fn affinity_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.set("affinitygroupids", join_ids(ids));
        self
    }

    /// Request specific IPs on specific networks
    pub fn ip_to_network<I, N, A>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        for (i, (network_id, ip)) in pairs.into_iter().enumerate() {
            self.params
                .set(format!("iptonetworklist[{}].networkid", i), network_id.as_ref());
            self.params
                .set(format!("iptonetworklist[{}].ip", i), ip.as_ref());
        }
        self
    }

    /// User data handed to the VM; sent base64-encoded
    pub fn user_data(mut self, data: impl AsRef<[u8]>) -> Self {
        self.params.set("userdata", encode_user_data(data.as_ref()));
        self
    }
}

query_options! {
    /// Options for `stopVirtualMachine`
    pub struct StopVirtualMachineOptions {
        /// Stop without waiting for the guest to shut down
        forced => "forced",
    }
}

query_options! {
    /// Options for `updateVirtualMachine`
    pub struct UpdateVirtualMachineOptions {
        name => "name",
        display_name => "displayname",
        group => "group",
        ha_enable => "haenable",
        os_type_id => "ostypeid",
        display_vm => "displayvm",
        is_dynamically_scalable => "isdynamicallyscalable",
    }
}

impl UpdateVirtualMachineOptions {
    /// Replace the VM's user data; sent base64-encoded
    pub fn user_data(mut self, data: impl AsRef<[u8]>) -> Self {
        self.params.set("userdata", encode_user_data(data.as_ref()));
        self
    }
}

fn encode_user_data(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

account_in_domain!(ListVirtualMachinesOptions, DeployVirtualMachineOptions);
id_list!(ListVirtualMachinesOptions);
tag_filter!(ListVirtualMachinesOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::VirtualMachineState;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deploy_options() {
        let opts = DeployVirtualMachineOptions::new()
            .name("web-1")
            .network_ids(["net-1", "net-2"])
            .security_group_names(["default", "web"])
            .ip_to_network([("net-1", "10.0.0.5")])
            .user_data("#!/bin/sh\necho hello\n")
            .account_in_domain("admin", "dom-1");

        let params = opts.into_params();
        assert_eq!(params.get("name"), Some("web-1"));
        assert_eq!(params.get("networkids"), Some("net-1,net-2"));
        assert_eq!(params.get("securitygroupnames"), Some("default,web"));
        assert_eq!(params.get("iptonetworklist[0].networkid"), Some("net-1"));
        assert_eq!(params.get("iptonetworklist[0].ip"), Some("10.0.0.5"));
        assert_eq!(
            params.get("userdata"),
            Some("IyEvYmluL3NoCmVjaG8gaGVsbG8K")
        );
        assert_eq!(params.get("account"), Some("admin"));
        assert_eq!(params.get("domainid"), Some("dom-1"));
    }

    #[test]
    fn test_list_options() {
        let opts = ListVirtualMachinesOptions::new()
            .state(VirtualMachineState::Running)
            .ids(["vm-1", "vm-2"])
            .tags([("env", "prod")])
            .page(2)
            .page_size(20);
        let params = opts.params();
        assert_eq!(params.get("state"), Some("Running"));
        assert_eq!(params.get("ids"), Some("vm-1,vm-2"));
        assert_eq!(params.get("tags[0].key"), Some("env"));
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("pagesize"), Some("20"));
    }

    #[test]
    fn test_stop_forced() {
        let opts = StopVirtualMachineOptions::new().forced(true);
        assert_eq!(opts.params().get("forced"), Some("true"));
    }
}
