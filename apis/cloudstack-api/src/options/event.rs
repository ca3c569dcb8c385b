// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use super::{account_in_domain, paged_options};
use crate::types::{Timestamp, format_timestamp};

paged_options! {
    /// Options for `listEvents`
    pub struct ListEventsOptions {
        id => "id",
        event_type => "type",
        level => "level",
        /// Events older than this many seconds
        duration => "duration",
        /// Only events whose entry time exceeds this many seconds
        entry_time => "entrytime",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

impl ListEventsOptions {
    /// Events on or after this time
    pub fn start_date(mut self, start: &Timestamp) -> Self {
        self.params.set("startdate", format_timestamp(start));
        self
    }

    /// Events on or before this time
    pub fn end_date(mut self, end: &Timestamp) -> Self {
        self.params.set("enddate", format_timestamp(end));
        self
    }
}

account_in_domain!(ListEventsOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::{EventLevel, parse_timestamp};

    #[test]
    fn test_list_events_options() {
        let start = parse_timestamp("2012-03-01T08:00:00+0000").unwrap();
        let opts = ListEventsOptions::new()
            .level(EventLevel::Error)
            .event_type("VM.CREATE")
            .start_date(&start);
        assert_eq!(opts.params().get("level"), Some("ERROR"));
        assert_eq!(opts.params().get("type"), Some("VM.CREATE"));
        assert_eq!(
            opts.params().get("startdate"),
            Some("2012-03-01T08:00:00+0000")
        );
    }
}
