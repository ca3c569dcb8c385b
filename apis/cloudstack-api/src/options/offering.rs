// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Service and disk offering options

use super::paged_options;

paged_options! {
    /// Options for `listServiceOfferings`
    pub struct ListServiceOfferingsOptions {
        id => "id",
        name => "name",
        domain_id => "domainid",
        is_system => "issystem",
        system_vm_type => "systemvmtype",
        /// Offerings the VM may be changed to
        virtual_machine_id => "virtualmachineid",
        is_recursive => "isrecursive",
    }
}

paged_options! {
    /// Options for `listDiskOfferings`
    pub struct ListDiskOfferingsOptions {
        id => "id",
        name => "name",
        domain_id => "domainid",
        zone_id => "zoneid",
        is_recursive => "isrecursive",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    #[test]
    fn test_offering_options() {
        let opts = ListServiceOfferingsOptions::new().is_system(false).name("Small");
        assert_eq!(opts.params().get("issystem"), Some("false"));

        let opts = ListDiskOfferingsOptions::new().zone_id("z-1").keyword("ssd");
        assert_eq!(opts.params().get("keyword"), Some("ssd"));
    }
}
