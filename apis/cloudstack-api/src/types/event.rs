// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Audit events

use super::common::{Timestamp, date, lenient_from_str};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Severity of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EventLevel {
    Info,
    Warn,
    Error,
    #[serde(other)]
    Unrecognized,
}

/// Progress of the action an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EventState {
    Created,
    Scheduled,
    Started,
    Completed,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(EventLevel, EventState);

/// An audit event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Event type, e.g. `VM.CREATE`
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    pub level: Option<EventLevel>,
    pub state: Option<EventState>,
    pub description: Option<String>,
    pub account: Option<String>,
    #[serde(default, rename = "accountid")]
    pub account_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub username: Option<String>,
    #[serde(default, rename = "parentid")]
    pub parent_id: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
}

/// An event type name, as returned by `listEventTypes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_parses() {
        let json = r#"{
            "id": "ev-1",
            "type": "VM.CREATE",
            "level": "INFO",
            "state": "Completed",
            "description": "Successfully completed starting Vm",
            "created": "2011-12-13T16:32:22-0800"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type.as_deref(), Some("VM.CREATE"));
        assert_eq!(event.level, Some(EventLevel::Info));
        assert_eq!(event.state, Some(EventState::Completed));
    }
}
