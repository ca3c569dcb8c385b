// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Usage records

use super::common::{Timestamp, date, lenient, numeric_enum};
use serde::{Deserialize, Serialize};

numeric_enum! {
    /// Kind of resource consumption a usage record measures
    pub enum UsageType {
        RunningVm = 1,
        AllocatedVm = 2,
        IpAddress = 3,
        NetworkBytesSent = 4,
        NetworkBytesReceived = 5,
        Volume = 6,
        Template = 7,
        Iso = 8,
        Snapshot = 9,
        SecurityGroup = 10,
        LoadBalancerPolicy = 11,
        PortForwardingRule = 12,
        NetworkOffering = 13,
        VpnUsers = 14,
        VmDiskIoRead = 21,
        VmDiskIoWrite = 22,
        VmDiskBytesRead = 23,
        VmDiskBytesWrite = 24,
        VmSnapshot = 25,
    }
}

/// A usage record for one resource over one aggregation interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(default, rename = "usageid")]
    pub usage_id: Option<String>,
    pub description: Option<String>,
    pub account: Option<String>,
    #[serde(default, rename = "accountid")]
    pub account_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "usagetype")]
    pub usage_type: Option<UsageType>,
    /// Usage amount as a display string, e.g. `"24 Hrs"`
    pub usage: Option<String>,
    #[serde(default, rename = "rawusage", deserialize_with = "lenient")]
    pub raw_usage: Option<f64>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    pub name: Option<String>,
    #[serde(default, rename = "offeringid")]
    pub offering_id: Option<String>,
    #[serde(default, rename = "templateid")]
    pub template_id: Option<String>,
    /// Hypervisor or resource subtype
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(default, rename = "startdate", with = "date")]
    pub start_date: Option<Timestamp>,
    #[serde(default, rename = "enddate", with = "date")]
    pub end_date: Option<Timestamp>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    #[serde(default, rename = "issourcenat", deserialize_with = "lenient")]
    pub is_source_nat: Option<bool>,
    #[serde(default, rename = "issystem", deserialize_with = "lenient")]
    pub is_system: Option<bool>,
}

/// A usage type and its description, as returned by `listUsageTypes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageTypeDescriptor {
    #[serde(rename = "usagetypeid")]
    pub usage_type: UsageType,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_record_parses() {
        let json = r#"{
            "account": "admin",
            "usagetype": 1,
            "usage": "24 Hrs",
            "rawusage": "24",
            "virtualmachineid": "vm-1",
            "startdate": "2012-03-01'T'00:00:00+0000",
            "enddate": "2012-03-01T23:59:59+0000"
        }"#;
        let record: UsageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.usage_type, Some(UsageType::RunningVm));
        assert_eq!(record.raw_usage, Some(24.0));
        assert!(record.start_date.is_some());
        assert!(record.end_date.is_some());
    }

    #[test]
    fn test_usage_type_descriptor_unknown_code() {
        let descriptor: UsageTypeDescriptor =
            serde_json::from_str(r#"{"usagetypeid": 99, "description": "Backup"}"#).unwrap();
        assert_eq!(descriptor.usage_type, UsageType::Unrecognized(99));
    }
}
