// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Templates and guest operating systems

use super::common::{ResourceTag, Timestamp, date, lenient, lenient_from_str, null_as_empty};
use super::infrastructure::HypervisorType;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Which templates `listTemplates` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TemplateFilter {
    /// Templates marked featured by an admin
    Featured,
    /// Templates owned by the caller
    #[serde(rename = "self")]
    #[strum(serialize = "self")]
    SelfOwned,
    /// Caller-owned templates that are ready to use
    SelfExecutable,
    /// Ready templates shared with the caller
    SharedExecutable,
    /// Every ready template the caller may use
    Executable,
    /// Public templates
    Community,
    All,
    #[serde(other)]
    Unrecognized,
}

/// Disk image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TemplateFormat {
    Qcow2,
    Raw,
    Vhd,
    Vhdx,
    Ova,
    Iso,
    Vmdk,
    Tar,
    Baremetal,
    #[serde(other)]
    Unrecognized,
}

/// Origin of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TemplateType {
    User,
    Builtin,
    System,
    Perhost,
    Routing,
    #[serde(other)]
    Unrecognized,
}

lenient_from_str!(TemplateFilter, TemplateFormat, TemplateType);

/// A VM template or ISO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    pub account: Option<String>,
    #[serde(default, rename = "accountid")]
    pub account_id: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "ostypeid")]
    pub os_type_id: Option<String>,
    #[serde(default, rename = "ostypename")]
    pub os_type_name: Option<String>,
    pub format: Option<TemplateFormat>,
    #[serde(default, rename = "templatetype")]
    pub template_type: Option<TemplateType>,
    pub hypervisor: Option<HypervisorType>,
    pub status: Option<String>,
    #[serde(default, rename = "isready", deserialize_with = "lenient")]
    pub is_ready: Option<bool>,
    #[serde(default, rename = "ispublic", deserialize_with = "lenient")]
    pub is_public: Option<bool>,
    #[serde(default, rename = "isfeatured", deserialize_with = "lenient")]
    pub is_featured: Option<bool>,
    #[serde(default, rename = "isextractable", deserialize_with = "lenient")]
    pub is_extractable: Option<bool>,
    #[serde(default, rename = "crossZones", deserialize_with = "lenient")]
    pub cross_zones: Option<bool>,
    #[serde(default, rename = "passwordenabled", deserialize_with = "lenient")]
    pub password_enabled: Option<bool>,
    #[serde(default, rename = "bootable", deserialize_with = "lenient")]
    pub bootable: Option<bool>,
    /// Size in bytes
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    pub checksum: Option<String>,
    #[serde(default, rename = "sourcetemplateid")]
    pub source_template_id: Option<String>,
    #[serde(default, with = "date")]
    pub created: Option<Timestamp>,
    #[serde(default, with = "date")]
    pub removed: Option<Timestamp>,
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<ResourceTag>,
}

/// A guest OS type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsType {
    pub id: String,
    pub description: Option<String>,
    #[serde(default, rename = "oscategoryid")]
    pub os_category_id: Option<String>,
    #[serde(default, rename = "isuserdefined", deserialize_with = "lenient")]
    pub is_user_defined: Option<bool>,
}

/// A family of guest OS types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsCategory {
    pub id: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses() {
        let json = r#"{
            "id": "tmpl-1",
            "name": "CentOS 5.6",
            "format": "VHD",
            "templatetype": "BUILTIN",
            "hypervisor": "XenServer",
            "isready": true,
            "crossZones": "true",
            "size": 21474836480
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.format, Some(TemplateFormat::Vhd));
        assert_eq!(template.template_type, Some(TemplateType::Builtin));
        assert_eq!(template.cross_zones, Some(true));
    }

    #[test]
    fn test_template_filter_wire_names() {
        assert_eq!(TemplateFilter::SelfOwned.to_string(), "self");
        assert_eq!(TemplateFilter::SelfExecutable.to_string(), "selfexecutable");
        assert_eq!(
            "sharedexecutable".parse::<TemplateFilter>().unwrap(),
            TemplateFilter::SharedExecutable
        );
        assert_eq!(
            serde_json::to_string(&TemplateFilter::SelfOwned).unwrap(),
            "\"self\""
        );
    }
}
