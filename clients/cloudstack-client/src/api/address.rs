// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public IP addresses, static NAT and VLAN IP ranges

use cloudstack_api::commands::address::*;
use cloudstack_api::options::{
    AssociateIpAddressOptions, CreateVlanIpRangeOptions, ListPublicIpAddressesOptions,
    ListVlanIpRangesOptions,
};
use cloudstack_api::{
    AsyncCreateResponse, Options, PublicIpAddress, QueryParams, SuccessResponse, VlanIpRange,
};

use super::{api_accessor, by_id};
use crate::error::Error;

api_accessor! {
    /// Public IP address commands
    AddressApi
}

impl AddressApi<'_> {
    pub async fn list_public_ip_addresses(
        &self,
        options: ListPublicIpAddressesOptions,
    ) -> Result<Vec<PublicIpAddress>, Error> {
        self.client
            .list(&LIST_PUBLIC_IP_ADDRESSES, options.into_params())
            .await
    }

    pub async fn get_public_ip_address(&self, id: &str) -> Result<Option<PublicIpAddress>, Error> {
        self.client.get(&GET_PUBLIC_IP_ADDRESS, by_id(id)).await
    }

    /// Acquire a public IP for a network or zone
    pub async fn associate_ip_address(
        &self,
        options: AssociateIpAddressOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        self.client
            .job(&ASSOCIATE_IP_ADDRESS, options.into_params())
            .await
    }

    pub async fn disassociate_ip_address(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DISASSOCIATE_IP_ADDRESS, by_id(id)).await
    }

    /// Map a public IP one-to-one onto a VM
    pub async fn enable_static_nat(
        &self,
        ip_address_id: &str,
        virtual_machine_id: &str,
    ) -> Result<SuccessResponse, Error> {
        let params = QueryParams::new()
            .with("ipaddressid", ip_address_id)
            .with("virtualmachineid", virtual_machine_id);
        self.client.object(&ENABLE_STATIC_NAT, params).await
    }

    pub async fn disable_static_nat(
        &self,
        ip_address_id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = QueryParams::new().with("ipaddressid", ip_address_id);
        self.client.job(&DISABLE_STATIC_NAT, params).await
    }
}

api_accessor! {
    /// VLAN IP range commands (admin)
    VlanApi
}

impl VlanApi<'_> {
    pub async fn list_vlan_ip_ranges(
        &self,
        options: ListVlanIpRangesOptions,
    ) -> Result<Vec<VlanIpRange>, Error> {
        self.client
            .list(&LIST_VLAN_IP_RANGES, options.into_params())
            .await
    }

    pub async fn get_vlan_ip_range(&self, id: &str) -> Result<Option<VlanIpRange>, Error> {
        self.client.get(&GET_VLAN_IP_RANGE, by_id(id)).await
    }

    pub async fn create_vlan_ip_range(
        &self,
        start_ip: &str,
        options: CreateVlanIpRangeOptions,
    ) -> Result<VlanIpRange, Error> {
        let params = options.into_params().with("startip", start_ip);
        self.client.object(&CREATE_VLAN_IP_RANGE, params).await
    }

    pub async fn delete_vlan_ip_range(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_VLAN_IP_RANGE, by_id(id)).await
    }
}
