// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume options

use super::{account_in_domain, id_list, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listVolumes`
    pub struct ListVolumesOptions {
        id => "id",
        name => "name",
        volume_type => "type",
        zone_id => "zoneid",
        pod_id => "podid",
        host_id => "hostid",
        storage_id => "storageid",
        virtual_machine_id => "virtualmachineid",
        disk_offering_id => "diskofferingid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createVolume`
    ///
    /// Either a disk offering or a snapshot must be given.
    pub struct CreateVolumeOptions {
        disk_offering_id => "diskofferingid",
        snapshot_id => "snapshotid",
        /// Size in GB for custom disk offerings
        size => "size",
        /// Attach to this VM once created
        virtual_machine_id => "virtualmachineid",
        zone_id => "zoneid",
        min_iops => "miniops",
        max_iops => "maxiops",
        display_volume => "displayvolume",
        project_id => "projectid",
    }
}

account_in_domain!(ListVolumesOptions, CreateVolumeOptions);
id_list!(ListVolumesOptions);
tag_filter!(ListVolumesOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::VolumeType;

    #[test]
    fn test_list_volumes_type_filter() {
        let opts = ListVolumesOptions::new()
            .volume_type(VolumeType::Datadisk)
            .virtual_machine_id("vm-1");
        assert_eq!(opts.params().get("type"), Some("DATADISK"));
        assert_eq!(opts.params().get("virtualmachineid"), Some("vm-1"));
    }

    #[test]
    fn test_create_volume_from_offering() {
        let opts = CreateVolumeOptions::new()
            .disk_offering_id("do-1")
            .size(20)
            .zone_id("z-1");
        assert_eq!(opts.params().get("size"), Some("20"));
    }
}
