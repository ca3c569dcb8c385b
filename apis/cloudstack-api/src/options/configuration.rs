// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration and resource limit options

use super::{account_in_domain, paged_options};
use crate::types::ResourceLimitType;

paged_options! {
    /// Options for `listConfigurations`
    pub struct ListConfigurationEntriesOptions {
        name => "name",
        category => "category",
        /// Scope to one account's overrides
        account_id => "accountid",
        cluster_id => "clusterid",
        storage_id => "storageid",
        zone_id => "zoneid",
    }
}

paged_options! {
    /// Options for `listResourceLimits`
    pub struct ListResourceLimitsOptions {
        id => "id",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

impl ListResourceLimitsOptions {
    /// Only limits on this resource
    pub fn resource_type(mut self, resource_type: ResourceLimitType) -> Self {
        self.params
            .set("resourcetype", resource_type.code().to_string());
        self
    }
}

account_in_domain!(ListResourceLimitsOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    #[test]
    fn test_resource_type_is_sent_as_code() {
        let opts = ListResourceLimitsOptions::new()
            .resource_type(ResourceLimitType::Volume)
            .account_in_domain("admin", "dom-1");
        assert_eq!(opts.params().get("resourcetype"), Some("2"));
        assert_eq!(opts.params().get("account"), Some("admin"));
    }

    #[test]
    fn test_configuration_filter() {
        let opts = ListConfigurationEntriesOptions::new().category("Advanced");
        assert_eq!(opts.params().get("category"), Some("Advanced"));
    }
}
