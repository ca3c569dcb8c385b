// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration, events, resource limits, tags and usage

use chrono::NaiveDate;
use cloudstack_api::commands::admin::*;
use cloudstack_api::options::{
    CreateTagsOptions, DeleteTagsOptions, ListConfigurationEntriesOptions, ListEventsOptions,
    ListResourceLimitsOptions, ListTagsOptions, ListUsageRecordsOptions, format_usage_date,
};
use cloudstack_api::{
    AsyncCreateResponse, Capabilities, ConfigurationEntry, Event, EventType, Options,
    QueryParams, ResourceLimit, ResourceLimitType, ResourceTagType, SuccessResponse, Tag,
    UsageRecord, UsageTypeDescriptor,
};

use super::api_accessor;
use crate::error::Error;

api_accessor! {
    /// Global configuration and capabilities
    ConfigurationApi
}

impl ConfigurationApi<'_> {
    /// What the management server supports and its version
    pub async fn list_capabilities(&self) -> Result<Capabilities, Error> {
        self.client
            .object(&LIST_CAPABILITIES, QueryParams::new())
            .await
    }

    pub async fn list_configuration_entries(
        &self,
        options: ListConfigurationEntriesOptions,
    ) -> Result<Vec<ConfigurationEntry>, Error> {
        self.client
            .list(&LIST_CONFIGURATION_ENTRIES, options.into_params())
            .await
    }

    pub async fn update_configuration_entry(
        &self,
        name: &str,
        value: &str,
    ) -> Result<ConfigurationEntry, Error> {
        let params = QueryParams::new().with("name", name).with("value", value);
        self.client.object(&UPDATE_CONFIGURATION_ENTRY, params).await
    }
}

api_accessor! {
    EventApi
}

impl EventApi<'_> {
    pub async fn list_event_types(&self) -> Result<Vec<EventType>, Error> {
        self.client
            .list(&LIST_EVENT_TYPES, QueryParams::new())
            .await
    }

    pub async fn list_events(&self, options: ListEventsOptions) -> Result<Vec<Event>, Error> {
        self.client.list(&LIST_EVENTS, options.into_params()).await
    }
}

api_accessor! {
    /// Resource limits of accounts, domains and projects
    LimitApi
}

impl LimitApi<'_> {
    pub async fn list_resource_limits(
        &self,
        options: ListResourceLimitsOptions,
    ) -> Result<Vec<ResourceLimit>, Error> {
        self.client
            .list(&LIST_RESOURCE_LIMITS, options.into_params())
            .await
    }

    /// Set the limit of one resource type for a domain, or an account in it
    ///
    /// A `max` of `-1` removes the limit.
    pub async fn update_resource_limit(
        &self,
        resource_type: ResourceLimitType,
        max: i64,
        domain_id: &str,
        account: Option<&str>,
    ) -> Result<ResourceLimit, Error> {
        let mut params = QueryParams::new()
            .with("resourcetype", resource_type.code().to_string())
            .with("max", max.to_string())
            .with("domainid", domain_id);
        if let Some(account) = account {
            params.set("account", account);
        }
        self.client.object(&UPDATE_RESOURCE_LIMIT, params).await
    }
}

api_accessor! {
    /// Resource tags
    TagApi
}

fn tagged_resources<I, S>(resource_type: ResourceTagType, resource_ids: I) -> QueryParams
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids = resource_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    QueryParams::new()
        .with("resourcetype", resource_type.to_string())
        .with("resourceids", ids)
}

impl TagApi<'_> {
    pub async fn list_tags(&self, options: ListTagsOptions) -> Result<Vec<Tag>, Error> {
        self.client.list(&LIST_TAGS, options.into_params()).await
    }

    /// Apply `tags` to every listed resource
    pub async fn create_tags<I, S, T, K, V>(
        &self,
        resource_type: ResourceTagType,
        resource_ids: I,
        tags: T,
        options: CreateTagsOptions,
    ) -> Result<AsyncCreateResponse, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = tagged_resources(resource_type, resource_ids);
        for (i, (key, value)) in tags.into_iter().enumerate() {
            params.set(format!("tags[{}].key", i), key.as_ref());
            params.set(format!("tags[{}].value", i), value.as_ref());
        }
        params.merge(options.into_params());
        self.client.job(&CREATE_TAGS, params).await
    }

    /// Remove tags from every listed resource
    pub async fn delete_tags<I, S>(
        &self,
        resource_type: ResourceTagType,
        resource_ids: I,
        options: DeleteTagsOptions,
    ) -> Result<AsyncCreateResponse, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = tagged_resources(resource_type, resource_ids);
        params.merge(options.into_params());
        self.client.job(&DELETE_TAGS, params).await
    }
}

api_accessor! {
    /// Usage records (requires the usage server)
    UsageApi
}

fn usage_window(start: NaiveDate, end: NaiveDate) -> QueryParams {
    QueryParams::new()
        .with("startdate", format_usage_date(start))
        .with("enddate", format_usage_date(end))
}

impl UsageApi<'_> {
    /// Records between two dates, both inclusive
    pub async fn list_usage_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        options: ListUsageRecordsOptions,
    ) -> Result<Vec<UsageRecord>, Error> {
        let mut params = usage_window(start, end);
        params.merge(options.into_params());
        self.client.list(&LIST_USAGE_RECORDS, params).await
    }

    /// Ask the usage server to aggregate records for a period now
    pub async fn generate_usage_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<SuccessResponse, Error> {
        self.client
            .object(&GENERATE_USAGE_RECORDS, usage_window(start, end))
            .await
    }

    pub async fn list_usage_types(&self) -> Result<Vec<UsageTypeDescriptor>, Error> {
        self.client
            .list(&LIST_USAGE_TYPES, QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_window_format() {
        let start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2012, 1, 31).unwrap();
        let params = usage_window(start, end);
        assert_eq!(params.get("startdate"), Some("2012-01-01"));
        assert_eq!(params.get("enddate"), Some("2012-01-31"));
    }

    #[test]
    fn test_tagged_resources() {
        let params = tagged_resources(ResourceTagType::UserVm, ["vm-1", "vm-2"]);
        assert_eq!(params.get("resourceids"), Some("vm-1,vm-2"));
        assert_eq!(params.get("resourcetype"), Some("UserVm"));
    }
}
