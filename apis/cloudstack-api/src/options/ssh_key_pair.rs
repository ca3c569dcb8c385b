// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use super::{account_in_domain, paged_options};

paged_options! {
    /// Options for `listSSHKeyPairs`
    pub struct ListSshKeyPairsOptions {
        name => "name",
        fingerprint => "fingerprint",
        is_recursive => "isrecursive",
        list_all => "listall",
        project_id => "projectid",
    }
}

account_in_domain!(ListSshKeyPairsOptions);
