// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Networks, offerings, security groups and IP rules

use super::{Command, Fallback};

pub const LIST_NETWORKS: Command = Command::get("listNetworks").list_all("network");
pub const GET_NETWORK: Command = Command::get("listNetworks")
    .select("network")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_NETWORK: Command = Command::get("createNetwork").select("network");
pub const DELETE_NETWORK: Command = Command::get("deleteNetwork").async_job();
pub const RESTART_NETWORK: Command = Command::get("restartNetwork").async_job();

pub const NETWORK: &[Command] = &[
    LIST_NETWORKS,
    GET_NETWORK,
    CREATE_NETWORK,
    DELETE_NETWORK,
    RESTART_NETWORK,
];

pub const LIST_SERVICE_OFFERINGS: Command = Command::get("listServiceOfferings")
    .select("serviceoffering")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_SERVICE_OFFERING: Command = Command::get("listServiceOfferings")
    .select("serviceoffering")
    .on_error(Fallback::NoneOnNotFound);
pub const DELETE_SERVICE_OFFERING: Command =
    Command::get("deleteServiceOffering").on_error(Fallback::UnitOnNotFound);
pub const LIST_DISK_OFFERINGS: Command = Command::get("listDiskOfferings")
    .select("diskoffering")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_DISK_OFFERING: Command = Command::get("listDiskOfferings")
    .select("diskoffering")
    .on_error(Fallback::NoneOnNotFound);
pub const DELETE_DISK_OFFERING: Command =
    Command::get("deleteDiskOffering").on_error(Fallback::UnitOnNotFound);
pub const LIST_NETWORK_OFFERINGS: Command = Command::get("listNetworkOfferings")
    .select("networkoffering")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_NETWORK_OFFERING: Command = Command::get("listNetworkOfferings")
    .select("networkoffering")
    .on_error(Fallback::NoneOnNotFound);

pub const OFFERING: &[Command] = &[
    LIST_SERVICE_OFFERINGS,
    GET_SERVICE_OFFERING,
    DELETE_SERVICE_OFFERING,
    LIST_DISK_OFFERINGS,
    GET_DISK_OFFERING,
    DELETE_DISK_OFFERING,
    LIST_NETWORK_OFFERINGS,
    GET_NETWORK_OFFERING,
];

pub const LIST_SECURITY_GROUPS: Command =
    Command::get("listSecurityGroups").list_all("securitygroup");
pub const GET_SECURITY_GROUP: Command = Command::get("listSecurityGroups")
    .select("securitygroup")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_SECURITY_GROUP: Command =
    Command::get("createSecurityGroup").select("securitygroup");
pub const DELETE_SECURITY_GROUP: Command =
    Command::get("deleteSecurityGroup").on_error(Fallback::UnitOnNotFound);
pub const AUTHORIZE_SECURITY_GROUP_INGRESS: Command =
    Command::get("authorizeSecurityGroupIngress").async_job();
pub const REVOKE_SECURITY_GROUP_INGRESS: Command =
    Command::get("revokeSecurityGroupIngress").async_job();

pub const SECURITY_GROUP: &[Command] = &[
    LIST_SECURITY_GROUPS,
    GET_SECURITY_GROUP,
    CREATE_SECURITY_GROUP,
    DELETE_SECURITY_GROUP,
    AUTHORIZE_SECURITY_GROUP_INGRESS,
    REVOKE_SECURITY_GROUP_INGRESS,
];

pub const LIST_FIREWALL_RULES: Command =
    Command::get("listFirewallRules").list_all("firewallrule");
pub const GET_FIREWALL_RULE: Command = Command::get("listFirewallRules")
    .select("firewallrule")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_FIREWALL_RULE: Command = Command::get("createFirewallRule").async_job();
pub const DELETE_FIREWALL_RULE: Command = Command::get("deleteFirewallRule").async_job();
pub const LIST_PORT_FORWARDING_RULES: Command =
    Command::get("listPortForwardingRules").list_all("portforwardingrule");
pub const GET_PORT_FORWARDING_RULE: Command = Command::get("listPortForwardingRules")
    .select("portforwardingrule")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_PORT_FORWARDING_RULE: Command =
    Command::get("createPortForwardingRule").async_job();
pub const DELETE_PORT_FORWARDING_RULE: Command =
    Command::get("deletePortForwardingRule").async_job();

pub const FIREWALL: &[Command] = &[
    LIST_FIREWALL_RULES,
    GET_FIREWALL_RULE,
    CREATE_FIREWALL_RULE,
    DELETE_FIREWALL_RULE,
    LIST_PORT_FORWARDING_RULES,
    GET_PORT_FORWARDING_RULE,
    CREATE_PORT_FORWARDING_RULE,
    DELETE_PORT_FORWARDING_RULE,
];

pub const LIST_LOAD_BALANCER_RULES: Command =
    Command::get("listLoadBalancerRules").list_all("loadbalancerrule");
pub const GET_LOAD_BALANCER_RULE: Command = Command::get("listLoadBalancerRules")
    .select("loadbalancerrule")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_LOAD_BALANCER_RULE: Command =
    Command::get("createLoadBalancerRule").async_job();
pub const DELETE_LOAD_BALANCER_RULE: Command =
    Command::get("deleteLoadBalancerRule").async_job();
pub const ASSIGN_TO_LOAD_BALANCER_RULE: Command =
    Command::get("assignToLoadBalancerRule").async_job();
pub const REMOVE_FROM_LOAD_BALANCER_RULE: Command =
    Command::get("removeFromLoadBalancerRule").async_job();
pub const LIST_LOAD_BALANCER_RULE_INSTANCES: Command =
    Command::get("listLoadBalancerRuleInstances").list_all("loadbalancerruleinstance");

pub const LOAD_BALANCER: &[Command] = &[
    LIST_LOAD_BALANCER_RULES,
    GET_LOAD_BALANCER_RULE,
    CREATE_LOAD_BALANCER_RULE,
    DELETE_LOAD_BALANCER_RULE,
    ASSIGN_TO_LOAD_BALANCER_RULE,
    REMOVE_FROM_LOAD_BALANCER_RULE,
    LIST_LOAD_BALANCER_RULE_INSTANCES,
];
