// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zones, pods, clusters, hosts and storage pools (admin)

use cloudstack_api::commands::infrastructure::*;
use cloudstack_api::options::{
    AddClusterOptions, AddHostOptions, CreatePodOptions, CreateZoneOptions, ListClustersOptions,
    ListHostsOptions, ListPodsOptions, ListStoragePoolsOptions, ListZonesOptions,
    UpdateClusterOptions, UpdateHostOptions, UpdatePodOptions, UpdateZoneOptions,
};
use cloudstack_api::{
    AsyncCreateResponse, Cluster, ClusterType, Host, HypervisorType, NetworkType, Options, Pod,
    StoragePool, Zone,
};

use super::{api_accessor, by_id};
use crate::error::Error;

api_accessor! {
    /// Zone commands
    ZoneApi
}

impl ZoneApi<'_> {
    pub async fn list_zones(&self, options: ListZonesOptions) -> Result<Vec<Zone>, Error> {
        self.client.list(&LIST_ZONES, options.into_params()).await
    }

    pub async fn get_zone(&self, id: &str) -> Result<Option<Zone>, Error> {
        self.client.get(&GET_ZONE, by_id(id)).await
    }

    pub async fn create_zone(
        &self,
        name: &str,
        network_type: NetworkType,
        external_dns1: &str,
        internal_dns1: &str,
        options: CreateZoneOptions,
    ) -> Result<Zone, Error> {
        let params = options
            .into_params()
            .with("name", name)
            .with("networktype", network_type.to_string())
            .with("dns1", external_dns1)
            .with("internaldns1", internal_dns1);
        self.client.object(&CREATE_ZONE, params).await
    }

    pub async fn update_zone(&self, id: &str, options: UpdateZoneOptions) -> Result<Zone, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_ZONE, params).await
    }

    pub async fn delete_zone(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_ZONE, by_id(id)).await
    }
}

api_accessor! {
    /// Pod commands
    PodApi
}

impl PodApi<'_> {
    pub async fn list_pods(&self, options: ListPodsOptions) -> Result<Vec<Pod>, Error> {
        self.client.list(&LIST_PODS, options.into_params()).await
    }

    pub async fn get_pod(&self, id: &str) -> Result<Option<Pod>, Error> {
        self.client.get(&GET_POD, by_id(id)).await
    }

    /// Create a pod with its management IP range
    pub async fn create_pod(
        &self,
        zone_id: &str,
        name: &str,
        start_ip: &str,
        netmask: &str,
        gateway: &str,
        options: CreatePodOptions,
    ) -> Result<Pod, Error> {
        let params = options
            .into_params()
            .with("zoneid", zone_id)
            .with("name", name)
            .with("startip", start_ip)
            .with("netmask", netmask)
            .with("gateway", gateway);
        self.client.object(&CREATE_POD, params).await
    }

    pub async fn update_pod(&self, id: &str, options: UpdatePodOptions) -> Result<Pod, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_POD, params).await
    }

    pub async fn delete_pod(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_POD, by_id(id)).await
    }
}

api_accessor! {
    /// Host and cluster commands
    GlobalHostApi
}

impl GlobalHostApi<'_> {
    pub async fn list_hosts(&self, options: ListHostsOptions) -> Result<Vec<Host>, Error> {
        self.client.list(&LIST_HOSTS, options.into_params()).await
    }

    pub async fn get_host(&self, id: &str) -> Result<Option<Host>, Error> {
        self.client.get(&GET_HOST, by_id(id)).await
    }

    /// Add a hypervisor host; the reply lists the hosts added
    pub async fn add_host(
        &self,
        zone_id: &str,
        url: &str,
        hypervisor: HypervisorType,
        username: &str,
        password: &str,
        options: AddHostOptions,
    ) -> Result<Vec<Host>, Error> {
        let params = options
            .into_params()
            .with("zoneid", zone_id)
            .with("url", url)
            .with("hypervisor", hypervisor.to_string())
            .with("username", username)
            .with("password", password);
        self.client.list(&ADD_HOST, params).await
    }

    pub async fn update_host(&self, id: &str, options: UpdateHostOptions) -> Result<Host, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_HOST, params).await
    }

    /// Migrate VMs off a host and put it into maintenance
    pub async fn prepare_host_for_maintenance(
        &self,
        id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        self.client
            .job(&PREPARE_HOST_FOR_MAINTENANCE, by_id(id))
            .await
    }

    pub async fn cancel_host_maintenance(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&CANCEL_HOST_MAINTENANCE, by_id(id)).await
    }

    pub async fn reconnect_host(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&RECONNECT_HOST, by_id(id)).await
    }

    /// Remove a host; `forced` also destroys its VMs
    pub async fn delete_host(&self, id: &str, forced: bool) -> Result<(), Error> {
        let mut params = by_id(id);
        if forced {
            params.set("forced", "true");
        }
        self.client.unit(&DELETE_HOST, params).await
    }

    pub async fn list_clusters(&self, options: ListClustersOptions) -> Result<Vec<Cluster>, Error> {
        self.client.list(&LIST_CLUSTERS, options.into_params()).await
    }

    /// Add a cluster; the reply lists the clusters added
    pub async fn add_cluster(
        &self,
        zone_id: &str,
        pod_id: &str,
        name: &str,
        cluster_type: ClusterType,
        hypervisor: HypervisorType,
        options: AddClusterOptions,
    ) -> Result<Vec<Cluster>, Error> {
        let params = options
            .into_params()
            .with("zoneid", zone_id)
            .with("podid", pod_id)
            .with("clustername", name)
            .with("clustertype", cluster_type.to_string())
            .with("hypervisor", hypervisor.to_string());
        self.client.list(&ADD_CLUSTER, params).await
    }

    pub async fn update_cluster(
        &self,
        id: &str,
        options: UpdateClusterOptions,
    ) -> Result<Cluster, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_CLUSTER, params).await
    }

    pub async fn delete_cluster(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_CLUSTER, by_id(id)).await
    }
}

api_accessor! {
    /// Primary storage pools
    StoragePoolApi
}

impl StoragePoolApi<'_> {
    pub async fn list_storage_pools(
        &self,
        options: ListStoragePoolsOptions,
    ) -> Result<Vec<StoragePool>, Error> {
        self.client
            .list(&LIST_STORAGE_POOLS, options.into_params())
            .await
    }
}

