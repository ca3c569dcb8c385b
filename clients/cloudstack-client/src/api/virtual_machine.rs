// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machines, VM snapshots and SSH key pairs

use cloudstack_api::commands::compute::*;
use cloudstack_api::options::{
    CreateVmSnapshotOptions, DeployVirtualMachineOptions, ListSshKeyPairsOptions,
    ListVirtualMachinesOptions, ListVmSnapshotOptions, StopVirtualMachineOptions,
    UpdateVirtualMachineOptions,
};
use cloudstack_api::{
    AsyncCreateResponse, Nic, Options, QueryParams, SshKeyPair, VirtualMachine,
    VirtualMachinePassword, VmSnapshot,
};

use super::{api_accessor, by_id};
use crate::error::Error;

api_accessor! {
    /// Virtual machine commands
    VirtualMachineApi
}

impl VirtualMachineApi<'_> {
    pub async fn list_virtual_machines(
        &self,
        options: ListVirtualMachinesOptions,
    ) -> Result<Vec<VirtualMachine>, Error> {
        self.client
            .list(&LIST_VIRTUAL_MACHINES, options.into_params())
            .await
    }

    pub async fn get_virtual_machine(&self, id: &str) -> Result<Option<VirtualMachine>, Error> {
        self.client.get(&GET_VIRTUAL_MACHINE, by_id(id)).await
    }

    /// Create and (by default) start a VM
    ///
    /// The reply carries the new VM's ID and the job to wait for.
    pub async fn deploy_virtual_machine(
        &self,
        zone_id: &str,
        service_offering_id: &str,
        template_id: &str,
        options: DeployVirtualMachineOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("zoneid", zone_id)
            .with("serviceofferingid", service_offering_id)
            .with("templateid", template_id);
        self.client.job(&DEPLOY_VIRTUAL_MACHINE, params).await
    }

    pub async fn start_virtual_machine(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&START_VIRTUAL_MACHINE, by_id(id)).await
    }

    pub async fn stop_virtual_machine(
        &self,
        id: &str,
        options: StopVirtualMachineOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options.into_params().with("id", id);
        self.client.job(&STOP_VIRTUAL_MACHINE, params).await
    }

    pub async fn reboot_virtual_machine(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&REBOOT_VIRTUAL_MACHINE, by_id(id)).await
    }

    /// Reset the password of a stopped, password-enabled VM
    pub async fn reset_password_for_virtual_machine(
        &self,
        id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        self.client
            .job(&RESET_PASSWORD_FOR_VIRTUAL_MACHINE, by_id(id))
            .await
    }

    /// Move a stopped VM to another service offering
    pub async fn change_service_for_virtual_machine(
        &self,
        id: &str,
        service_offering_id: &str,
    ) -> Result<VirtualMachine, Error> {
        let params = by_id(id).with("serviceofferingid", service_offering_id);
        self.client
            .object(&CHANGE_SERVICE_FOR_VIRTUAL_MACHINE, params)
            .await
    }

    pub async fn update_virtual_machine(
        &self,
        id: &str,
        options: UpdateVirtualMachineOptions,
    ) -> Result<VirtualMachine, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_VIRTUAL_MACHINE, params).await
    }

    /// Destroy a VM; with `expunge` it is removed immediately
    pub async fn destroy_virtual_machine(
        &self,
        id: &str,
        expunge: bool,
    ) -> Result<AsyncCreateResponse, Error> {
        let mut params = by_id(id);
        if expunge {
            params.set("expunge", "true");
        }
        self.client.job(&DESTROY_VIRTUAL_MACHINE, params).await
    }

    /// Reinstall a VM from its template, or from `template_id`
    pub async fn restore_virtual_machine(
        &self,
        id: &str,
        template_id: Option<&str>,
    ) -> Result<AsyncCreateResponse, Error> {
        let mut params = QueryParams::new().with("virtualmachineid", id);
        if let Some(template_id) = template_id {
            params.set("templateid", template_id);
        }
        self.client.job(&RESTORE_VIRTUAL_MACHINE, params).await
    }

    /// The encrypted password of a VM
    ///
    /// `None` when the VM has none, or the server refuses or fails to
    /// return it.
    pub async fn get_encrypted_password_for_virtual_machine(
        &self,
        id: &str,
    ) -> Result<Option<String>, Error> {
        let password: Option<VirtualMachinePassword> = self
            .client
            .get(&GET_VIRTUAL_MACHINE_PASSWORD, by_id(id))
            .await?;
        Ok(password.map(|p| p.encrypted_password))
    }

    pub async fn list_nics(&self, virtual_machine_id: &str) -> Result<Vec<Nic>, Error> {
        let params = QueryParams::new().with("virtualmachineid", virtual_machine_id);
        self.client.list(&LIST_NICS, params).await
    }
}

api_accessor! {
    /// VM snapshot commands
    VmSnapshotApi
}

impl VmSnapshotApi<'_> {
    pub async fn list_vm_snapshots(
        &self,
        options: ListVmSnapshotOptions,
    ) -> Result<Vec<VmSnapshot>, Error> {
        self.client
            .list(&LIST_VM_SNAPSHOTS, options.into_params())
            .await
    }

    pub async fn create_vm_snapshot(
        &self,
        virtual_machine_id: &str,
        options: CreateVmSnapshotOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("virtualmachineid", virtual_machine_id);
        self.client.job(&CREATE_VM_SNAPSHOT, params).await
    }

    pub async fn revert_to_vm_snapshot(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        let params = QueryParams::new().with("vmsnapshotid", id);
        self.client.job(&REVERT_TO_VM_SNAPSHOT, params).await
    }

    pub async fn delete_vm_snapshot(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        let params = QueryParams::new().with("vmsnapshotid", id);
        self.client.job(&DELETE_VM_SNAPSHOT, params).await
    }
}

api_accessor! {
    /// SSH key pair commands
    SshKeyPairApi
}

fn by_name(name: &str) -> QueryParams {
    QueryParams::new().with("name", name)
}

impl SshKeyPairApi<'_> {
    pub async fn list_ssh_key_pairs(
        &self,
        options: ListSshKeyPairsOptions,
    ) -> Result<Vec<SshKeyPair>, Error> {
        self.client
            .list(&LIST_SSH_KEY_PAIRS, options.into_params())
            .await
    }

    pub async fn get_ssh_key_pair(&self, name: &str) -> Result<Option<SshKeyPair>, Error> {
        self.client.get(&GET_SSH_KEY_PAIR, by_name(name)).await
    }

    /// Generate a key pair; the reply is the only copy of the private key
    pub async fn create_ssh_key_pair(&self, name: &str) -> Result<SshKeyPair, Error> {
        self.client.object(&CREATE_SSH_KEY_PAIR, by_name(name)).await
    }

    /// Register an existing public key
    pub async fn register_ssh_key_pair(
        &self,
        name: &str,
        public_key: &str,
    ) -> Result<SshKeyPair, Error> {
        let params = by_name(name).with("publickey", public_key);
        self.client.object(&REGISTER_SSH_KEY_PAIR, params).await
    }

    pub async fn delete_ssh_key_pair(&self, name: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_SSH_KEY_PAIR, by_name(name)).await
    }
}
