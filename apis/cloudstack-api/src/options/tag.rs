// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resource tag options

use super::{account_in_domain, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listTags`
    pub struct ListTagsOptions {
        key => "key",
        value => "value",
        resource_id => "resourceid",
        resource_type => "resourcetype",
        customer => "customer",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createTags`
    pub struct CreateTagsOptions {
        customer => "customer",
    }
}

query_options! {
    /// Options for `deleteTags`
    ///
    /// Without tags, every tag on the resources is removed.
    pub struct DeleteTagsOptions {}
}

account_in_domain!(ListTagsOptions);
tag_filter!(DeleteTagsOptions);
