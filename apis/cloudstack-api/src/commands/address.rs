// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public IP addresses and VLAN IP ranges

use super::{Command, Fallback};

pub const LIST_PUBLIC_IP_ADDRESSES: Command =
    Command::get("listPublicIpAddresses").list_all("publicipaddress");
pub const GET_PUBLIC_IP_ADDRESS: Command = Command::get("listPublicIpAddresses")
    .select("publicipaddress")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const ASSOCIATE_IP_ADDRESS: Command = Command::get("associateIpAddress").async_job();
pub const DISASSOCIATE_IP_ADDRESS: Command = Command::get("disassociateIpAddress").async_job();
pub const ENABLE_STATIC_NAT: Command = Command::get("enableStaticNat");
pub const DISABLE_STATIC_NAT: Command = Command::get("disableStaticNat").async_job();

pub const ADDRESS: &[Command] = &[
    LIST_PUBLIC_IP_ADDRESSES,
    GET_PUBLIC_IP_ADDRESS,
    ASSOCIATE_IP_ADDRESS,
    DISASSOCIATE_IP_ADDRESS,
    ENABLE_STATIC_NAT,
    DISABLE_STATIC_NAT,
];

pub const LIST_VLAN_IP_RANGES: Command = Command::get("listVlanIpRanges")
    .select("vlaniprange")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_VLAN_IP_RANGE: Command = Command::get("listVlanIpRanges")
    .select("vlaniprange")
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_VLAN_IP_RANGE: Command = Command::get("createVlanIpRange").select("vlan");
pub const DELETE_VLAN_IP_RANGE: Command =
    Command::get("deleteVlanIpRange").on_error(Fallback::UnitOnNotFound);

pub const VLAN: &[Command] = &[
    LIST_VLAN_IP_RANGES,
    GET_VLAN_IP_RANGE,
    CREATE_VLAN_IP_RANGE,
    DELETE_VLAN_IP_RANGE,
];
