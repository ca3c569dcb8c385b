// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume types

use super::common::{ResourceTag, Timestamp, date, lenient, lenient_from_str, null_as_empty};
use super::infrastructure::HypervisorType;
use super::offering::StorageType;
use super::virtual_machine::VirtualMachineState;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Root or data disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum VolumeType {
    Root,
    Swap,
    Datadisk,
    Iso,
    #[serde(other)]
    Unrecognized,
}

/// Volume lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum VolumeState {
    Allocated,
    Creating,
    Ready,
    Resizing,
    Migrating,
    Snapshotting,
    UploadOp,
    Uploaded,
    Expunging,
    Expunged,
    Destroy,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(VolumeType, VolumeState);

/// A disk volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub volume_type: Option<VolumeType>,
    pub state: Option<VolumeState>,
    pub account: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    /// Size in bytes
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(default, rename = "deviceid", deserialize_with = "lenient")]
    pub device_id: Option<u32>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, rename = "vmname")]
    pub vm_name: Option<String>,
    #[serde(default, rename = "vmdisplayname")]
    pub vm_display_name: Option<String>,
    #[serde(default, rename = "vmstate")]
    pub vm_state: Option<VirtualMachineState>,
    #[serde(default, rename = "diskofferingid")]
    pub disk_offering_id: Option<String>,
    #[serde(default, rename = "diskofferingname")]
    pub disk_offering_name: Option<String>,
    #[serde(default, rename = "serviceofferingid")]
    pub service_offering_id: Option<String>,
    #[serde(default, rename = "serviceofferingname")]
    pub service_offering_name: Option<String>,
    #[serde(default, rename = "snapshotid")]
    pub snapshot_id: Option<String>,
    #[serde(default, rename = "storagetype")]
    pub storage_type: Option<StorageType>,
    pub storage: Option<String>,
    pub hypervisor: Option<HypervisorType>,
    #[serde(default, rename = "isextractable", deserialize_with = "lenient")]
    pub is_extractable: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub destroyed: Option<bool>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    #[serde(default, with = "date")]
    pub attached: Option<Timestamp>,
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

impl Volume {
    /// Whether the volume is attached to a virtual machine
    pub fn is_attached(&self) -> bool {
        self.virtual_machine_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_parses() {
        let json = r#"{
            "id": "vol-1",
            "name": "ROOT-1",
            "type": "ROOT",
            "state": "Ready",
            "size": 21474836480,
            "deviceid": 0,
            "virtualmachineid": "vm-1",
            "vmstate": "Running",
            "created": "2011-12-13T16:32:22-0800",
            "attached": "not a date"
        }"#;
        let volume: Volume = serde_json::from_str(json).unwrap();
        assert_eq!(volume.volume_type, Some(VolumeType::Root));
        assert_eq!(volume.state, Some(VolumeState::Ready));
        assert_eq!(volume.vm_state, Some(VirtualMachineState::Running));
        assert!(volume.is_attached());
        assert!(volume.created.is_some());
        assert!(volume.attached.is_none());
    }

    #[test]
    fn test_volume_type_display() {
        assert_eq!(VolumeType::Datadisk.to_string(), "DATADISK");
        assert_eq!("DATADISK".parse::<VolumeType>().unwrap(), VolumeType::Datadisk);
    }
}
