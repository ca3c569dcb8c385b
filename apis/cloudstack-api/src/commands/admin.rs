// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Jobs, events, tags, limits, configuration, sessions and usage

use super::{Command, Fallback};

pub const LIST_ASYNC_JOBS: Command = Command::get("listAsyncJobs").list_all("asyncjobs");
/// The response object is the job itself
pub const QUERY_ASYNC_JOB_RESULT: Command =
    Command::get("queryAsyncJobResult").on_error(Fallback::NoneOnNotFound);

pub const ASYNC_JOB: &[Command] = &[LIST_ASYNC_JOBS, QUERY_ASYNC_JOB_RESULT];

pub const LIST_CAPABILITIES: Command = Command::get("listCapabilities").select("capability");
pub const LIST_CONFIGURATION_ENTRIES: Command = Command::get("listConfigurations")
    .select("configuration")
    .on_error(Fallback::EmptyListOnNotFound);
pub const UPDATE_CONFIGURATION_ENTRY: Command =
    Command::get("updateConfiguration").select("configuration");

pub const CONFIGURATION: &[Command] = &[
    LIST_CAPABILITIES,
    LIST_CONFIGURATION_ENTRIES,
    UPDATE_CONFIGURATION_ENTRY,
];

pub const LIST_EVENT_TYPES: Command = Command::get("listEventTypes")
    .select("eventtype")
    .on_error(Fallback::EmptyListOnNotFound);
pub const LIST_EVENTS: Command = Command::get("listEvents").list_all("event");

pub const EVENT: &[Command] = &[LIST_EVENT_TYPES, LIST_EVENTS];

pub const LIST_RESOURCE_LIMITS: Command =
    Command::get("listResourceLimits").list_all("resourcelimit");
pub const UPDATE_RESOURCE_LIMIT: Command =
    Command::get("updateResourceLimit").select("resourcelimit");

pub const LIMIT: &[Command] = &[LIST_RESOURCE_LIMITS, UPDATE_RESOURCE_LIMIT];

/// Credentials travel in the body
pub const LOGIN: Command = Command::post("login");
pub const LOGOUT: Command = Command::get("logout");

pub const SESSION: &[Command] = &[LOGIN, LOGOUT];

pub const LIST_TAGS: Command = Command::get("listTags").list_all("tag");
pub const CREATE_TAGS: Command = Command::get("createTags").async_job();
pub const DELETE_TAGS: Command = Command::get("deleteTags").async_job();

pub const TAG: &[Command] = &[LIST_TAGS, CREATE_TAGS, DELETE_TAGS];

pub const LIST_USAGE_RECORDS: Command = Command::get("listUsageRecords")
    .select("usagerecord")
    .on_error(Fallback::EmptyListOnNotFound);
pub const GENERATE_USAGE_RECORDS: Command = Command::get("generateUsageRecords");
pub const LIST_USAGE_TYPES: Command = Command::get("listUsageTypes")
    .select("usagetype")
    .on_error(Fallback::EmptyListOnNotFound);

pub const USAGE: &[Command] = &[LIST_USAGE_RECORDS, GENERATE_USAGE_RECORDS, LIST_USAGE_TYPES];
