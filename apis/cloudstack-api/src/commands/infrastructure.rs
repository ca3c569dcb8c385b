// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zones, pods, clusters, hosts and storage pools

use super::{Command, Fallback};

pub const LIST_ZONES: Command = Command::get("listZones")
    .select("zone")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_ZONE: Command = Command::get("listZones")
    .select("zone")
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_ZONE: Command = Command::get("createZone").select("zone");
pub const UPDATE_ZONE: Command = Command::get("updateZone").select("zone");
pub const DELETE_ZONE: Command = Command::get("deleteZone").on_error(Fallback::UnitOnNotFound);

pub const ZONE: &[Command] = &[LIST_ZONES, GET_ZONE, CREATE_ZONE, UPDATE_ZONE, DELETE_ZONE];

pub const LIST_PODS: Command = Command::get("listPods")
    .select("pod")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_POD: Command = Command::get("listPods")
    .select("pod")
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_POD: Command = Command::get("createPod").select("pod");
pub const UPDATE_POD: Command = Command::get("updatePod").select("pod");
pub const DELETE_POD: Command = Command::get("deletePod").on_error(Fallback::UnitOnNotFound);

pub const POD: &[Command] = &[LIST_PODS, GET_POD, CREATE_POD, UPDATE_POD, DELETE_POD];

pub const LIST_CLUSTERS: Command = Command::get("listClusters")
    .select("cluster")
    .on_error(Fallback::EmptyListOnNotFound);
/// Hypervisor manager passwords travel in the body
pub const ADD_CLUSTER: Command = Command::post("addCluster").select("cluster");
pub const UPDATE_CLUSTER: Command = Command::get("updateCluster").select("cluster");
pub const DELETE_CLUSTER: Command =
    Command::get("deleteCluster").on_error(Fallback::UnitOnNotFound);

pub const CLUSTER: &[Command] = &[LIST_CLUSTERS, ADD_CLUSTER, UPDATE_CLUSTER, DELETE_CLUSTER];

pub const LIST_HOSTS: Command = Command::get("listHosts")
    .select("host")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_HOST: Command = Command::get("listHosts")
    .select("host")
    .on_error(Fallback::NoneOnNotFound);
pub const ADD_HOST: Command = Command::post("addHost").select("host");
pub const UPDATE_HOST: Command = Command::get("updateHost").select("host");
pub const PREPARE_HOST_FOR_MAINTENANCE: Command =
    Command::get("prepareHostForMaintenance").async_job();
pub const CANCEL_HOST_MAINTENANCE: Command = Command::get("cancelHostMaintenance").async_job();
pub const RECONNECT_HOST: Command = Command::get("reconnectHost").async_job();
pub const DELETE_HOST: Command = Command::get("deleteHost").on_error(Fallback::UnitOnNotFound);

pub const HOST: &[Command] = &[
    LIST_HOSTS,
    GET_HOST,
    ADD_HOST,
    UPDATE_HOST,
    PREPARE_HOST_FOR_MAINTENANCE,
    CANCEL_HOST_MAINTENANCE,
    RECONNECT_HOST,
    DELETE_HOST,
];

pub const LIST_STORAGE_POOLS: Command = Command::get("listStoragePools")
    .select("storagepool")
    .on_error(Fallback::EmptyListOnNotFound);

pub const STORAGE_POOL: &[Command] = &[LIST_STORAGE_POOLS];
