// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machines, VM snapshots and SSH key pairs

use super::{Command, Fallback};

pub const LIST_VIRTUAL_MACHINES: Command =
    Command::get("listVirtualMachines").list_all("virtualmachine");
pub const GET_VIRTUAL_MACHINE: Command = Command::get("listVirtualMachines")
    .select("virtualmachine")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
/// Sent as a form body; user data may be up to 32 KB encoded
pub const DEPLOY_VIRTUAL_MACHINE: Command = Command::post("deployVirtualMachine").async_job();
pub const START_VIRTUAL_MACHINE: Command = Command::get("startVirtualMachine").async_job();
pub const STOP_VIRTUAL_MACHINE: Command = Command::get("stopVirtualMachine").async_job();
pub const REBOOT_VIRTUAL_MACHINE: Command = Command::get("rebootVirtualMachine").async_job();
pub const RESET_PASSWORD_FOR_VIRTUAL_MACHINE: Command =
    Command::get("resetPasswordForVirtualMachine").async_job();
pub const CHANGE_SERVICE_FOR_VIRTUAL_MACHINE: Command =
    Command::get("changeServiceForVirtualMachine").select("virtualmachine");
pub const UPDATE_VIRTUAL_MACHINE: Command =
    Command::post("updateVirtualMachine").select("virtualmachine");
pub const DESTROY_VIRTUAL_MACHINE: Command = Command::get("destroyVirtualMachine").async_job();
pub const RESTORE_VIRTUAL_MACHINE: Command = Command::get("restoreVirtualMachine").async_job();
pub const GET_VIRTUAL_MACHINE_PASSWORD: Command = Command::get("getVMPassword")
    .select("password")
    .on_error(Fallback::NoneOn403Or404Or500);
pub const LIST_NICS: Command = Command::get("listNics")
    .select("nic")
    .on_error(Fallback::EmptyListOnNotFound);

pub const VIRTUAL_MACHINE: &[Command] = &[
    LIST_VIRTUAL_MACHINES,
    GET_VIRTUAL_MACHINE,
    DEPLOY_VIRTUAL_MACHINE,
    START_VIRTUAL_MACHINE,
    STOP_VIRTUAL_MACHINE,
    REBOOT_VIRTUAL_MACHINE,
    RESET_PASSWORD_FOR_VIRTUAL_MACHINE,
    CHANGE_SERVICE_FOR_VIRTUAL_MACHINE,
    UPDATE_VIRTUAL_MACHINE,
    DESTROY_VIRTUAL_MACHINE,
    RESTORE_VIRTUAL_MACHINE,
    GET_VIRTUAL_MACHINE_PASSWORD,
    LIST_NICS,
];

pub const LIST_VM_SNAPSHOTS: Command = Command::get("listVMSnapshot").list_all("vmSnapshot");
pub const CREATE_VM_SNAPSHOT: Command = Command::get("createVMSnapshot").async_job();
pub const REVERT_TO_VM_SNAPSHOT: Command = Command::get("revertToVMSnapshot").async_job();
pub const DELETE_VM_SNAPSHOT: Command = Command::get("deleteVMSnapshot").async_job();

pub const VM_SNAPSHOT: &[Command] = &[
    LIST_VM_SNAPSHOTS,
    CREATE_VM_SNAPSHOT,
    REVERT_TO_VM_SNAPSHOT,
    DELETE_VM_SNAPSHOT,
];

pub const LIST_SSH_KEY_PAIRS: Command = Command::get("listSSHKeyPairs").list_all("sshkeypair");
pub const GET_SSH_KEY_PAIR: Command = Command::get("listSSHKeyPairs")
    .select("sshkeypair")
    .fixed(&[("listall", "true")])
    .on_error(Fallback::NoneOnNotFound);
pub const CREATE_SSH_KEY_PAIR: Command = Command::get("createSSHKeyPair").select("keypair");
/// Sent as a form body
pub const REGISTER_SSH_KEY_PAIR: Command = Command::post("registerSSHKeyPair").select("keypair");
pub const DELETE_SSH_KEY_PAIR: Command =
    Command::get("deleteSSHKeyPair").on_error(Fallback::UnitOnNotFound);

pub const SSH_KEY_PAIR: &[Command] = &[
    LIST_SSH_KEY_PAIRS,
    GET_SSH_KEY_PAIR,
    CREATE_SSH_KEY_PAIR,
    REGISTER_SSH_KEY_PAIR,
    DELETE_SSH_KEY_PAIR,
];
