// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed accessors, one per command group
//!
//! Each accessor borrows the [`Client`] and exposes one method per catalog
//! entry. Methods return the shape the entry's fallback implies: list
//! operations return an empty `Vec` and single lookups `None` when the
//! server reports the entity missing.

use cloudstack_api::QueryParams;

use crate::Client;

pub mod account;
pub mod address;
pub mod admin;
pub mod async_job;
pub mod infrastructure;
pub mod network;
pub mod session;
pub mod storage;
pub mod virtual_machine;

pub use account::{AccountApi, DomainApi, NewUser, UserApi};
pub use address::{AddressApi, VlanApi};
pub use admin::{ConfigurationApi, EventApi, LimitApi, TagApi, UsageApi};
pub use async_job::{AsyncJobApi, JobWait};
pub use infrastructure::{GlobalHostApi, PodApi, StoragePoolApi, ZoneApi};
pub use network::{FirewallApi, LoadBalancerApi, NetworkApi, OfferingApi, SecurityGroupApi};
pub use session::{Session, SessionApi};
pub use storage::{GuestOsApi, SnapshotApi, TemplateApi, TemplateSource, VolumeApi};
pub use virtual_machine::{SshKeyPairApi, VirtualMachineApi, VmSnapshotApi};

/// Declare an accessor struct borrowing the client
macro_rules! api_accessor {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::Client,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::Client) -> Self {
                Self { client }
            }
        }
    };
}
pub(crate) use api_accessor;

/// Parameters holding just `id`
pub(crate) fn by_id(id: &str) -> QueryParams {
    QueryParams::new().with("id", id)
}

impl Client {
    pub fn account_api(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    pub fn user_api(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    pub fn domain_api(&self) -> DomainApi<'_> {
        DomainApi::new(self)
    }

    pub fn address_api(&self) -> AddressApi<'_> {
        AddressApi::new(self)
    }

    pub fn vlan_api(&self) -> VlanApi<'_> {
        VlanApi::new(self)
    }

    pub fn async_job_api(&self) -> AsyncJobApi<'_> {
        AsyncJobApi::new(self)
    }

    pub fn configuration_api(&self) -> ConfigurationApi<'_> {
        ConfigurationApi::new(self)
    }

    pub fn event_api(&self) -> EventApi<'_> {
        EventApi::new(self)
    }

    pub fn limit_api(&self) -> LimitApi<'_> {
        LimitApi::new(self)
    }

    pub fn session_api(&self) -> SessionApi<'_> {
        SessionApi::new(self)
    }

    pub fn tag_api(&self) -> TagApi<'_> {
        TagApi::new(self)
    }

    pub fn usage_api(&self) -> UsageApi<'_> {
        UsageApi::new(self)
    }

    pub fn ssh_key_pair_api(&self) -> SshKeyPairApi<'_> {
        SshKeyPairApi::new(self)
    }

    pub fn virtual_machine_api(&self) -> VirtualMachineApi<'_> {
        VirtualMachineApi::new(self)
    }

    pub fn vm_snapshot_api(&self) -> VmSnapshotApi<'_> {
        VmSnapshotApi::new(self)
    }

    /// Hosts and clusters
    pub fn global_host_api(&self) -> GlobalHostApi<'_> {
        GlobalHostApi::new(self)
    }

    pub fn pod_api(&self) -> PodApi<'_> {
        PodApi::new(self)
    }

    pub fn storage_pool_api(&self) -> StoragePoolApi<'_> {
        StoragePoolApi::new(self)
    }

    pub fn zone_api(&self) -> ZoneApi<'_> {
        ZoneApi::new(self)
    }

    /// Firewall and port-forwarding rules
    pub fn firewall_api(&self) -> FirewallApi<'_> {
        FirewallApi::new(self)
    }

    pub fn load_balancer_api(&self) -> LoadBalancerApi<'_> {
        LoadBalancerApi::new(self)
    }

    pub fn network_api(&self) -> NetworkApi<'_> {
        NetworkApi::new(self)
    }

    /// Service, disk and network offerings
    pub fn offering_api(&self) -> OfferingApi<'_> {
        OfferingApi::new(self)
    }

    pub fn security_group_api(&self) -> SecurityGroupApi<'_> {
        SecurityGroupApi::new(self)
    }

    pub fn guest_os_api(&self) -> GuestOsApi<'_> {
        GuestOsApi::new(self)
    }

    pub fn snapshot_api(&self) -> SnapshotApi<'_> {
        SnapshotApi::new(self)
    }

    pub fn template_api(&self) -> TemplateApi<'_> {
        TemplateApi::new(self)
    }

    pub fn volume_api(&self) -> VolumeApi<'_> {
        VolumeApi::new(self)
    }
}
