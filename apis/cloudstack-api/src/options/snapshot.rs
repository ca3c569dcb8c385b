// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume snapshot and VM snapshot options

use super::{account_in_domain, id_list, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listSnapshots`
    pub struct ListSnapshotsOptions {
        id => "id",
        name => "name",
        snapshot_type => "snapshottype",
        interval_type => "intervaltype",
        volume_id => "volumeid",
        zone_id => "zoneid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createSnapshot`
    pub struct CreateSnapshotOptions {
        name => "name",
        /// Snapshot policy that triggered this snapshot
        policy_id => "policyid",
        quiesce_vm => "quiescevm",
        async_backup => "asyncbackup",
    }
}

paged_options! {
    /// Options for `listVMSnapshot`
    pub struct ListVmSnapshotOptions {
        id => "vmsnapshotid",
        name => "name",
        state => "state",
        virtual_machine_id => "virtualmachineid",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createVMSnapshot`
    pub struct CreateVmSnapshotOptions {
        name => "name",
        description => "description",
        /// Include memory in the snapshot
        snapshot_memory => "snapshotmemory",
        quiesce_vm => "quiescevm",
    }
}

account_in_domain!(ListSnapshotsOptions, CreateSnapshotOptions, ListVmSnapshotOptions);
id_list!(ListSnapshotsOptions);
tag_filter!(ListSnapshotsOptions, ListVmSnapshotOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::{SnapshotType, VmSnapshotState};

    #[test]
    fn test_list_snapshots_options() {
        let opts = ListSnapshotsOptions::new()
            .snapshot_type(SnapshotType::Recurring)
            .volume_id("vol-1");
        assert_eq!(opts.params().get("snapshottype"), Some("RECURRING"));
    }

    #[test]
    fn test_vm_snapshot_id_parameter_name() {
        let opts = ListVmSnapshotOptions::new()
            .id("vms-1")
            .state(VmSnapshotState::Ready);
        assert_eq!(opts.params().get("vmsnapshotid"), Some("vms-1"));
        assert_eq!(opts.params().get("state"), Some("Ready"));
    }

    #[test]
    fn test_create_vm_snapshot_options() {
        let opts = CreateVmSnapshotOptions::new()
            .name("pre-upgrade")
            .snapshot_memory(true);
        assert_eq!(opts.params().get("snapshotmemory"), Some("true"));
    }
}
