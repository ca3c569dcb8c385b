// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Usage record options
//!
//! The reporting window of `listUsageRecords` and `generateUsageRecords`
//! is a required argument and is passed as `NaiveDate`s, formatted with
//! [`USAGE_DATE_FORMAT`](super::USAGE_DATE_FORMAT).

use super::{account_in_domain, paged_options};
use crate::types::UsageType;

paged_options! {
    /// Options for `listUsageRecords`
    pub struct ListUsageRecordsOptions {
        account_id => "accountid",
        project_id => "projectid",
    }
}

impl ListUsageRecordsOptions {
    /// Only records of this kind
    pub fn usage_type(mut self, usage_type: UsageType) -> Self {
        self.params.set("type", usage_type.code().to_string());
        self
    }
}

account_in_domain!(ListUsageRecordsOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::options::format_usage_date;
    use chrono::NaiveDate;

    #[test]
    fn test_usage_type_is_sent_as_code() {
        let opts = ListUsageRecordsOptions::new().usage_type(UsageType::NetworkBytesSent);
        assert_eq!(opts.params().get("type"), Some("4"));
    }

    #[test]
    fn test_usage_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(format_usage_date(date), "2024-01-09");
    }
}
