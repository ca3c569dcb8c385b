// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume snapshots, snapshot policies and VM snapshots

use super::common::{
    ResourceTag, Timestamp, date, lenient, lenient_from_str, null_as_empty, numeric_enum,
};
use super::volume::VolumeType;
use serde::{Deserialize, Serialize};
use strum::Display;

/// How a volume snapshot was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SnapshotType {
    Manual,
    Recurring,
    Template,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    #[serde(other)]
    Unrecognized,
}

/// Volume snapshot state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SnapshotState {
    Allocated,
    Creating,
    CreatedOnPrimary,
    BackingUp,
    BackedUp,
    Destroying,
    Destroyed,
    Error,
    #[serde(other)]
    Unrecognized,
}

numeric_enum! {
    /// Schedule interval of a snapshot policy
    pub enum SnapshotIntervalType {
        Hourly = 0,
        Daily = 1,
        Weekly = 2,
        Monthly = 3,
    }
}

/// VM snapshot state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum VmSnapshotState {
    Allocated,
    Creating,
    Ready,
    Reverting,
    Expunging,
    Removed,
    Error,
    #[serde(other)]
    Unrecognized,
}

/// What a VM snapshot captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum VmSnapshotType {
    Disk,
    DiskAndMemory,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(SnapshotType, SnapshotState, VmSnapshotState, VmSnapshotType);

/// A snapshot of a single volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub name: Option<String>,
    pub account: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "snapshottype")]
    pub snapshot_type: Option<SnapshotType>,
    #[serde(default, rename = "intervaltype")]
    pub interval_type: Option<String>,
    pub state: Option<SnapshotState>,
    #[serde(default, rename = "volumeid")]
    pub volume_id: Option<String>,
    #[serde(default, rename = "volumename")]
    pub volume_name: Option<String>,
    #[serde(default, rename = "volumetype")]
    pub volume_type: Option<VolumeType>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "physicalsize", deserialize_with = "lenient")]
    pub physical_size: Option<u64>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

/// Recurring snapshot schedule of a volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPolicy {
    pub id: String,
    #[serde(default, rename = "volumeid")]
    pub volume_id: Option<String>,
    #[serde(default, rename = "intervaltype")]
    pub interval_type: Option<SnapshotIntervalType>,
    /// Time of day (and day of week/month) the schedule fires
    pub schedule: Option<String>,
    pub timezone: Option<String>,
    /// Snapshots retained
    #[serde(default, rename = "maxsnaps", deserialize_with = "lenient")]
    pub max_snaps: Option<u32>,
}

/// A point-in-time snapshot of a whole virtual machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmSnapshot {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displayname")]
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub state: Option<VmSnapshotState>,
    #[serde(default, rename = "type")]
    pub snapshot_type: Option<VmSnapshotType>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "parent")]
    pub parent_id: Option<String>,
    #[serde(default, rename = "parentName")]
    pub parent_name: Option<String>,
    #[serde(default, rename = "current", deserialize_with = "lenient")]
    pub is_current: Option<bool>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_parses() {
        let json = r#"{
            "id": "snap-1",
            "snapshottype": "MANUAL",
            "state": "BackedUp",
            "volumetype": "DATADISK",
            "created": "2012-06-15T14:56:22-0700"
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.snapshot_type, Some(SnapshotType::Manual));
        assert_eq!(snapshot.state, Some(SnapshotState::BackedUp));
        assert_eq!(snapshot.volume_type, Some(VolumeType::Datadisk));
    }

    #[test]
    fn test_snapshot_policy_interval_forms() {
        let policy: SnapshotPolicy =
            serde_json::from_str(r#"{"id": "p-1", "intervaltype": 1, "maxsnaps": "8"}"#).unwrap();
        assert_eq!(policy.interval_type, Some(SnapshotIntervalType::Daily));
        assert_eq!(policy.max_snaps, Some(8));

        let policy: SnapshotPolicy =
            serde_json::from_str(r#"{"id": "p-1", "intervaltype": "WEEKLY"}"#).unwrap();
        assert_eq!(policy.interval_type, Some(SnapshotIntervalType::Weekly));
    }

    #[test]
    fn test_vm_snapshot_parses() {
        let json = r#"{
            "id": "vms-1",
            "name": "i-2-1-VM_VS_20130925",
            "displayname": "before-upgrade",
            "state": "Ready",
            "type": "DiskAndMemory",
            "current": true,
            "parentName": "earlier",
            "virtualmachineid": "vm-1"
        }"#;
        let snapshot: VmSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.state, Some(VmSnapshotState::Ready));
        assert_eq!(snapshot.snapshot_type, Some(VmSnapshotType::DiskAndMemory));
        assert_eq!(snapshot.is_current, Some(true));
        assert_eq!(snapshot.parent_name.as_deref(), Some("earlier"));
    }
}
