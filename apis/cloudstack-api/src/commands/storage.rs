// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volumes, snapshots, templates and guest OS types

use super::{Command, Fallback};

pub const LIST_VOLUMES: Command = Command::get("listVolumes").list_all("volume");
pub const GET_VOLUME: Command = Command::get("listVolumes")
    .select("volume")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_VOLUME: Command = Command::get("createVolume").async_job();
pub const ATTACH_VOLUME: Command = Command::get("attachVolume").async_job();
pub const DETACH_VOLUME: Command = Command::get("detachVolume").async_job();
pub const RESIZE_VOLUME: Command = Command::get("resizeVolume").async_job();
pub const DELETE_VOLUME: Command = Command::get("deleteVolume").on_error(Fallback::UnitOnNotFound);

pub const VOLUME: &[Command] = &[
    LIST_VOLUMES,
    GET_VOLUME,
    CREATE_VOLUME,
    ATTACH_VOLUME,
    DETACH_VOLUME,
    RESIZE_VOLUME,
    DELETE_VOLUME,
];

pub const LIST_SNAPSHOTS: Command = Command::get("listSnapshots").list_all("snapshot");
pub const GET_SNAPSHOT: Command = Command::get("listSnapshots")
    .select("snapshot")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_SNAPSHOT: Command = Command::get("createSnapshot").async_job();
pub const DELETE_SNAPSHOT: Command = Command::get("deleteSnapshot").async_job();
pub const CREATE_SNAPSHOT_POLICY: Command =
    Command::get("createSnapshotPolicy").select("snapshotpolicy");
pub const LIST_SNAPSHOT_POLICIES: Command = Command::get("listSnapshotPolicies")
    .select("snapshotpolicy")
    .on_error(Fallback::EmptyListOnNotFound);
pub const DELETE_SNAPSHOT_POLICIES: Command =
    Command::get("deleteSnapshotPolicies").on_error(Fallback::UnitOnNotFound);

pub const SNAPSHOT: &[Command] = &[
    LIST_SNAPSHOTS,
    GET_SNAPSHOT,
    CREATE_SNAPSHOT,
    DELETE_SNAPSHOT,
    CREATE_SNAPSHOT_POLICY,
    LIST_SNAPSHOT_POLICIES,
    DELETE_SNAPSHOT_POLICIES,
];

/// Lists executable templates unless the caller picks another filter
pub const LIST_TEMPLATES: Command = Command::get("listTemplates")
    .select("template")
    .fixed(&[("templatefilter", "executable")])
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_TEMPLATE: Command = Command::get("listTemplates")
    .select("template")
    .fixed(&[("templatefilter", "executable")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_TEMPLATE: Command = Command::get("createTemplate").async_job();
pub const REGISTER_TEMPLATE: Command = Command::get("registerTemplate").select("template");
pub const UPDATE_TEMPLATE: Command = Command::get("updateTemplate").select("template");
pub const COPY_TEMPLATE: Command = Command::get("copyTemplate").async_job();
pub const DELETE_TEMPLATE: Command = Command::get("deleteTemplate").async_job();

pub const TEMPLATE: &[Command] = &[
    LIST_TEMPLATES,
    GET_TEMPLATE,
    CREATE_TEMPLATE,
    REGISTER_TEMPLATE,
    UPDATE_TEMPLATE,
    COPY_TEMPLATE,
    DELETE_TEMPLATE,
];

pub const LIST_OS_TYPES: Command = Command::get("listOsTypes")
    .select("ostype")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GET_OS_TYPE: Command = Command::get("listOsTypes")
    .select("ostype")
    .on_error(Fallback::NoneOnNotFound);
pub const LIST_OS_CATEGORIES: Command = Command::get("listOsCategories")
    .select("oscategory")
    .on_error(Fallback::EmptyListOnNotFound);

pub const GUEST_OS: &[Command] = &[LIST_OS_TYPES, GET_OS_TYPE, LIST_OS_CATEGORIES];
