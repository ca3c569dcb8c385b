// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use super::{account_in_domain, paged_options};
use crate::types::{Timestamp, format_timestamp};

paged_options! {
    /// Options for `listAsyncJobs`
    pub struct ListAsyncJobsOptions {
        is_recursive => "isrecursive",
        list_all => "listall",
    }
}

impl ListAsyncJobsOptions {
    /// Only jobs created at or after this time
    pub fn start_date(mut self, start: &Timestamp) -> Self {
        self.params.set("startdate", format_timestamp(start));
        self
    }
}

account_in_domain!(ListAsyncJobsOptions);
