// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volumes, snapshots, templates and guest OS types

use cloudstack_api::commands::storage::*;
use cloudstack_api::options::{
    CreateSnapshotOptions, CreateTemplateOptions, CreateVolumeOptions, ListOsTypesOptions,
    ListSnapshotsOptions, ListTemplatesOptions, ListVolumesOptions, RegisterTemplateOptions,
    UpdateTemplateOptions,
};
use cloudstack_api::{
    AsyncCreateResponse, HypervisorType, Options, OsCategory, OsType, QueryParams, Snapshot,
    SnapshotIntervalType, SnapshotPolicy, Template, TemplateFormat, Volume,
};

use super::{api_accessor, by_id};
use crate::error::Error;

api_accessor! {
    /// Volume commands
    VolumeApi
}

impl VolumeApi<'_> {
    pub async fn list_volumes(&self, options: ListVolumesOptions) -> Result<Vec<Volume>, Error> {
        self.client.list(&LIST_VOLUMES, options.into_params()).await
    }

    pub async fn get_volume(&self, id: &str) -> Result<Option<Volume>, Error> {
        self.client.get(&GET_VOLUME, by_id(id)).await
    }

    /// Create a data volume from a disk offering or a snapshot
    pub async fn create_volume(
        &self,
        name: &str,
        options: CreateVolumeOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options.into_params().with("name", name);
        self.client.job(&CREATE_VOLUME, params).await
    }

    pub async fn attach_volume(
        &self,
        id: &str,
        virtual_machine_id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = by_id(id).with("virtualmachineid", virtual_machine_id);
        self.client.job(&ATTACH_VOLUME, params).await
    }

    pub async fn detach_volume(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DETACH_VOLUME, by_id(id)).await
    }

    /// Grow a volume to `size_gb`
    pub async fn resize_volume(
        &self,
        id: &str,
        size_gb: u64,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = by_id(id).with("size", size_gb.to_string());
        self.client.job(&RESIZE_VOLUME, params).await
    }

    pub async fn delete_volume(&self, id: &str) -> Result<(), Error> {
        self.client.unit(&DELETE_VOLUME, by_id(id)).await
    }
}

api_accessor! {
    /// Volume snapshots and snapshot policies
    SnapshotApi
}

impl SnapshotApi<'_> {
    pub async fn list_snapshots(
        &self,
        options: ListSnapshotsOptions,
    ) -> Result<Vec<Snapshot>, Error> {
        self.client.list(&LIST_SNAPSHOTS, options.into_params()).await
    }

    pub async fn get_snapshot(&self, id: &str) -> Result<Option<Snapshot>, Error> {
        self.client.get(&GET_SNAPSHOT, by_id(id)).await
    }

    pub async fn create_snapshot(
        &self,
        volume_id: &str,
        options: CreateSnapshotOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options.into_params().with("volumeid", volume_id);
        self.client.job(&CREATE_SNAPSHOT, params).await
    }

    pub async fn delete_snapshot(&self, id: &str) -> Result<AsyncCreateResponse, Error> {
        self.client.job(&DELETE_SNAPSHOT, by_id(id)).await
    }

    /// Snapshot a volume on a schedule
    ///
    /// `schedule` is `MM` for hourly policies, `MM:HH` for daily,
    /// `MM:HH:DD` (day of week) for weekly and `MM:HH:DD` (day of month)
    /// for monthly ones.
    pub async fn create_snapshot_policy(
        &self,
        volume_id: &str,
        interval_type: SnapshotIntervalType,
        max_snaps: u32,
        schedule: &str,
        timezone: &str,
    ) -> Result<SnapshotPolicy, Error> {
        let params = QueryParams::new()
            .with("volumeid", volume_id)
            .with("intervaltype", interval_type.to_string().to_uppercase())
            .with("maxsnaps", max_snaps.to_string())
            .with("schedule", schedule)
            .with("timezone", timezone);
        self.client.object(&CREATE_SNAPSHOT_POLICY, params).await
    }

    pub async fn list_snapshot_policies(
        &self,
        volume_id: &str,
    ) -> Result<Vec<SnapshotPolicy>, Error> {
        let params = QueryParams::new().with("volumeid", volume_id);
        self.client.list(&LIST_SNAPSHOT_POLICIES, params).await
    }

    pub async fn delete_snapshot_policies<I, S>(&self, ids: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        let params = QueryParams::new().with("ids", ids);
        self.client.unit(&DELETE_SNAPSHOT_POLICIES, params).await
    }
}

api_accessor! {
    /// Template commands
    TemplateApi
}

/// Fields every registered template needs
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSource<'p> {
    pub name: &'p str,
    pub display_text: &'p str,
    pub format: TemplateFormat,
    pub hypervisor: HypervisorType,
    pub os_type_id: &'p str,
    /// Where the management server downloads the image from
    pub url: &'p str,
    /// Zone to register in; `-1` registers in every zone
    pub zone_id: &'p str,
}

impl TemplateApi<'_> {
    /// Templates visible to the caller
    ///
    /// Without a filter option only `executable` templates are listed.
    pub async fn list_templates(
        &self,
        options: ListTemplatesOptions,
    ) -> Result<Vec<Template>, Error> {
        self.client.list(&LIST_TEMPLATES, options.into_params()).await
    }

    /// Look up a template, in one zone when `zone_id` is given
    pub async fn get_template(
        &self,
        id: &str,
        zone_id: Option<&str>,
    ) -> Result<Option<Template>, Error> {
        let mut params = by_id(id);
        if let Some(zone_id) = zone_id {
            params.set("zoneid", zone_id);
        }
        self.client.get(&GET_TEMPLATE, params).await
    }

    /// Create a template from a volume or snapshot
    pub async fn create_template(
        &self,
        name: &str,
        display_text: &str,
        os_type_id: &str,
        options: CreateTemplateOptions,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = options
            .into_params()
            .with("name", name)
            .with("displaytext", display_text)
            .with("ostypeid", os_type_id);
        self.client.job(&CREATE_TEMPLATE, params).await
    }

    /// Register an image reachable by URL; it downloads in the background
    pub async fn register_template(
        &self,
        source: &TemplateSource<'_>,
        options: RegisterTemplateOptions,
    ) -> Result<Template, Error> {
        let params = options
            .into_params()
            .with("name", source.name)
            .with("displaytext", source.display_text)
            .with("format", source.format.to_string())
            .with("hypervisor", source.hypervisor.to_string())
            .with("ostypeid", source.os_type_id)
            .with("url", source.url)
            .with("zoneid", source.zone_id);
        self.client.object(&REGISTER_TEMPLATE, params).await
    }

    pub async fn update_template(
        &self,
        id: &str,
        options: UpdateTemplateOptions,
    ) -> Result<Template, Error> {
        let params = options.into_params().with("id", id);
        self.client.object(&UPDATE_TEMPLATE, params).await
    }

    pub async fn copy_template_to_zone(
        &self,
        id: &str,
        source_zone_id: &str,
        dest_zone_id: &str,
    ) -> Result<AsyncCreateResponse, Error> {
        let params = by_id(id)
            .with("sourcezoneid", source_zone_id)
            .with("destzoneid", dest_zone_id);
        self.client.job(&COPY_TEMPLATE, params).await
    }

    /// Delete a template, from one zone when `zone_id` is given
    pub async fn delete_template(
        &self,
        id: &str,
        zone_id: Option<&str>,
    ) -> Result<AsyncCreateResponse, Error> {
        let mut params = by_id(id);
        if let Some(zone_id) = zone_id {
            params.set("zoneid", zone_id);
        }
        self.client.job(&DELETE_TEMPLATE, params).await
    }
}

api_accessor! {
    /// Guest OS types and categories
    GuestOsApi
}

impl GuestOsApi<'_> {
    pub async fn list_os_types(&self, options: ListOsTypesOptions) -> Result<Vec<OsType>, Error> {
        self.client.list(&LIST_OS_TYPES, options.into_params()).await
    }

    pub async fn get_os_type(&self, id: &str) -> Result<Option<OsType>, Error> {
        self.client.get(&GET_OS_TYPE, by_id(id)).await
    }

    pub async fn list_os_categories(&self) -> Result<Vec<OsCategory>, Error> {
        self.client
            .list(&LIST_OS_CATEGORIES, QueryParams::new())
            .await
    }
}
