// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Template and guest OS options

use super::{account_in_domain, paged_options, query_options, tag_filter};

paged_options! {
    /// Options for `listTemplates`
    ///
    /// The template filter defaults to `executable`.
    pub struct ListTemplatesOptions {
        id => "id",
        name => "name",
        filter => "templatefilter",
        hypervisor => "hypervisor",
        zone_id => "zoneid",
        show_removed => "showremoved",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `createTemplate`
    ///
    /// The source is either a volume or a snapshot.
    pub struct CreateTemplateOptions {
        volume_id => "volumeid",
        snapshot_id => "snapshotid",
        virtual_machine_id => "virtualmachineid",
        bits => "bits",
        is_featured => "isfeatured",
        is_public => "ispublic",
        is_dynamically_scalable => "isdynamicallyscalable",
        password_enabled => "passwordenabled",
        requires_hvm => "requireshvm",
        template_tag => "templatetag",
        url => "url",
    }
}

query_options! {
    /// Options for `registerTemplate`
    pub struct RegisterTemplateOptions {
        bits => "bits",
        checksum => "checksum",
        is_extractable => "isextractable",
        is_featured => "isfeatured",
        is_public => "ispublic",
        is_dynamically_scalable => "isdynamicallyscalable",
        password_enabled => "passwordenabled",
        requires_hvm => "requireshvm",
        ssh_key_enabled => "sshkeyenabled",
        template_tag => "templatetag",
        project_id => "projectid",
    }
}

query_options! {
    /// Options for `updateTemplate`
    pub struct UpdateTemplateOptions {
        name => "name",
        display_text => "displaytext",
        format => "format",
        os_type_id => "ostypeid",
        bootable => "bootable",
        password_enabled => "passwordenabled",
        is_dynamically_scalable => "isdynamicallyscalable",
        sort_key => "sortkey",
    }
}

paged_options! {
    /// Options for `listOsTypes`
    pub struct ListOsTypesOptions {
        id => "id",
        os_category_id => "oscategoryid",
        description => "description",
    }
}

account_in_domain!(ListTemplatesOptions, RegisterTemplateOptions);
tag_filter!(ListTemplatesOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::types::{TemplateFilter, TemplateFormat};

    #[test]
    fn test_template_filter_value() {
        let opts = ListTemplatesOptions::new().filter(TemplateFilter::SelfExecutable);
        assert_eq!(opts.params().get("templatefilter"), Some("selfexecutable"));
    }

    #[test]
    fn test_update_template_format() {
        let opts = UpdateTemplateOptions::new().format(TemplateFormat::Qcow2);
        assert_eq!(opts.params().get("format"), Some("QCOW2"));
    }
}
