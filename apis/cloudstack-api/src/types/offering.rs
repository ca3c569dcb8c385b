// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Service and disk offerings

use super::common::{Timestamp, date, lenient, lenient_from_str};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Where an offering places its disks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorageType {
    Local,
    Shared,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(StorageType);

/// Compute offering: CPU, memory and HA settings for a VM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, rename = "cpunumber", deserialize_with = "lenient")]
    pub cpu_number: Option<u32>,
    #[serde(default, rename = "cpuspeed", deserialize_with = "lenient")]
    pub cpu_speed: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub memory: Option<u64>,
    #[serde(default, rename = "offerha", deserialize_with = "lenient")]
    pub offer_ha: Option<bool>,
    #[serde(default, rename = "limitcpuuse", deserialize_with = "lenient")]
    pub limit_cpu_use: Option<bool>,
    #[serde(default, rename = "issystem", deserialize_with = "lenient")]
    pub is_system: Option<bool>,
    #[serde(default, rename = "defaultuse", deserialize_with = "lenient")]
    pub default_use: Option<bool>,
    #[serde(default, rename = "storagetype")]
    pub storage_type: Option<StorageType>,
    #[serde(default, rename = "networkrate", deserialize_with = "lenient")]
    pub network_rate: Option<i32>,
    #[serde(default, rename = "hosttags")]
    pub host_tags: Option<String>,
    pub tags: Option<String>,
    #[serde(default, rename = "systemvmtype")]
    pub system_vm_type: Option<String>,
}

/// Data disk offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskOffering {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    /// Size in GB; zero for custom-sized offerings
    #[serde(default, rename = "disksize", deserialize_with = "lenient")]
    pub disk_size: Option<u64>,
    #[serde(default, rename = "iscustomized", deserialize_with = "lenient")]
    pub is_customized: Option<bool>,
    #[serde(default, rename = "storagetype")]
    pub storage_type: Option<StorageType>,
    pub tags: Option<String>,
    #[serde(default, rename = "miniops", deserialize_with = "lenient")]
    pub min_iops: Option<u64>,
    #[serde(default, rename = "maxiops", deserialize_with = "lenient")]
    pub max_iops: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_offering_parses() {
        let json = r#"{
            "id": "so-1",
            "name": "Small Instance",
            "cpunumber": 1,
            "cpuspeed": 500,
            "memory": 512,
            "offerha": false,
            "storagetype": "shared",
            "created": "2012-01-02T03:04:05+0000"
        }"#;
        let offering: ServiceOffering = serde_json::from_str(json).unwrap();
        assert_eq!(offering.cpu_number, Some(1));
        assert_eq!(offering.storage_type, Some(StorageType::Shared));
        assert!(offering.created.is_some());
    }

    #[test]
    fn test_disk_offering_customized() {
        let json = r#"{"id": "do-1", "disksize": 0, "iscustomized": "true", "storagetype": "tiered"}"#;
        let offering: DiskOffering = serde_json::from_str(json).unwrap();
        assert_eq!(offering.disk_size, Some(0));
        assert_eq!(offering.is_customized, Some(true));
        assert_eq!(offering.storage_type, Some(StorageType::Unrecognized));
    }
}
