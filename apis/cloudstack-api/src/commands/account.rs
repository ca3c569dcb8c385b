// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Accounts, users and domains

use super::{Command, Fallback};

pub const LIST_ACCOUNTS: Command = Command::get("listAccounts").list_all("account");
pub const GET_ACCOUNT: Command = Command::get("listAccounts")
    .select("account")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_ACCOUNT: Command = Command::post("createAccount").select("account");
pub const UPDATE_ACCOUNT: Command = Command::get("updateAccount").select("account");
pub const DELETE_ACCOUNT: Command = Command::get("deleteAccount").async_job();
pub const ENABLE_ACCOUNT: Command = Command::get("enableAccount").select("account");
pub const DISABLE_ACCOUNT: Command = Command::get("disableAccount").async_job();
pub const LOCK_ACCOUNT: Command = Command::get("lockAccount").select("account");

pub const ACCOUNT: &[Command] = &[
    LIST_ACCOUNTS,
    GET_ACCOUNT,
    CREATE_ACCOUNT,
    UPDATE_ACCOUNT,
    DELETE_ACCOUNT,
    ENABLE_ACCOUNT,
    DISABLE_ACCOUNT,
    LOCK_ACCOUNT,
];

pub const LIST_USERS: Command = Command::get("listUsers").list_all("user");
pub const GET_USER: Command = Command::get("listUsers")
    .select("user")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
/// Passwords travel in the body
pub const CREATE_USER: Command = Command::post("createUser").select("user");
pub const UPDATE_USER: Command = Command::post("updateUser").select("user");
pub const DELETE_USER: Command = Command::get("deleteUser").on_error(Fallback::UnitOnNotFound);
pub const ENABLE_USER: Command = Command::get("enableUser").select("user");
pub const DISABLE_USER: Command = Command::get("disableUser").async_job();
pub const REGISTER_USER_KEYS: Command = Command::get("registerUserKeys").select("userkeys");

pub const USER: &[Command] = &[
    LIST_USERS,
    GET_USER,
    CREATE_USER,
    UPDATE_USER,
    DELETE_USER,
    ENABLE_USER,
    DISABLE_USER,
    REGISTER_USER_KEYS,
];

pub const LIST_DOMAINS: Command = Command::get("listDomains").list_all("domain");
pub const GET_DOMAIN: Command = Command::get("listDomains")
    .select("domain")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const LIST_DOMAIN_CHILDREN: Command = Command::get("listDomainChildren")
    .select("domain")
    .on_error(Fallback::EmptyListOnNotFound);

pub const DOMAIN: &[Command] = &[LIST_DOMAINS, GET_DOMAIN, LIST_DOMAIN_CHILDREN];
