// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Options builders
//!
//! Each command's optional parameters are set through a by-value builder
//! wrapping a [`QueryParams`] map:
//!
//! ```
//! use cloudstack_api::options::ListVirtualMachinesOptions;
//! use cloudstack_api::Options;
//!
//! let opts = ListVirtualMachinesOptions::new()
//!     .zone_id("zone-1")
//!     .state("Running")
//!     .page_size(50);
//! assert_eq!(opts.params().get("zoneid"), Some("zone-1"));
//! assert_eq!(opts.params().get("pagesize"), Some("50"));
//! ```

use crate::params::QueryParams;
use chrono::NaiveDate;

pub mod account;
pub mod address;
pub mod async_job;
pub mod configuration;
pub mod event;
pub mod firewall;
pub mod infrastructure;
pub mod network;
pub mod offering;
pub mod security_group;
pub mod snapshot;
pub mod ssh_key_pair;
pub mod tag;
pub mod template;
pub mod usage;
pub mod virtual_machine;
pub mod volume;

pub use account::*;
pub use address::*;
pub use async_job::*;
pub use configuration::*;
pub use event::*;
pub use firewall::*;
pub use infrastructure::*;
pub use network::*;
pub use offering::*;
pub use security_group::*;
pub use snapshot::*;
pub use ssh_key_pair::*;
pub use tag::*;
pub use template::*;
pub use usage::*;
pub use virtual_machine::*;
pub use volume::*;

/// Wire format of usage dates
pub const USAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A set of command parameters
pub trait Options {
    fn params(&self) -> &QueryParams;
    fn into_params(self) -> QueryParams;
}

/// Options of a list command that accepts `page` and `pagesize`
pub trait PagedOptions: Options + Clone {
    /// Select one page of results (pages start at 1)
    fn with_page(self, page: u32, page_size: u32) -> Self;
}

impl Options for QueryParams {
    fn params(&self) -> &QueryParams {
        self
    }

    fn into_params(self) -> QueryParams {
        self
    }
}

impl PagedOptions for QueryParams {
    fn with_page(self, page: u32, page_size: u32) -> Self {
        self.with("page", page.to_string())
            .with("pagesize", page_size.to_string())
    }
}

/// Comma-join a list of IDs
pub(crate) fn join_ids<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode a tag map as `tags[n].key` / `tags[n].value`
pub(crate) fn set_tags<I, K, V>(params: &mut QueryParams, tags: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (i, (key, value)) in tags.into_iter().enumerate() {
        params.set(format!("tags[{}].key", i), key.as_ref());
        params.set(format!("tags[{}].value", i), value.as_ref());
    }
}

/// Format a date the way the usage commands expect it
pub fn format_usage_date(date: NaiveDate) -> String {
    date.format(USAGE_DATE_FORMAT).to_string()
}

/// Declare an options builder with one string-valued setter per parameter
macro_rules! query_options {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $setter:ident => $param:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            params: $crate::params::QueryParams,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $setter(mut self, value: impl std::fmt::Display) -> Self {
                    self.params.set($param, value.to_string());
                    self
                }
            )*
        }

        impl $crate::options::Options for $name {
            fn params(&self) -> &$crate::params::QueryParams {
                &self.params
            }

            fn into_params(self) -> $crate::params::QueryParams {
                self.params
            }
        }

        impl From<$name> for $crate::params::QueryParams {
            fn from(options: $name) -> Self {
                options.params
            }
        }
    };
}
pub(crate) use query_options;

/// [`query_options!`] plus `page`, `page_size` and `keyword`
macro_rules! paged_options {
    (
        $(#[$meta:meta])*
        pub struct $name:ident { $($body:tt)* }
    ) => {
        $crate::options::query_options! {
            $(#[$meta])*
            pub struct $name { $($body)* }
        }

        impl $name {
            /// Page number, starting at 1
            pub fn page(mut self, page: u32) -> Self {
                self.params.set("page", page.to_string());
                self
            }

            /// Results per page
            pub fn page_size(mut self, page_size: u32) -> Self {
                self.params.set("pagesize", page_size.to_string());
                self
            }

            /// Free-text filter
            pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
                self.params.set("keyword", keyword);
                self
            }
        }

        impl $crate::options::PagedOptions for $name {
            fn with_page(self, page: u32, page_size: u32) -> Self {
                self.page(page).page_size(page_size)
            }
        }
    };
}
pub(crate) use paged_options;

/// Add `account_in_domain` to builders of commands scoped by account
macro_rules! account_in_domain {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Scope to `account` in domain `domain_id`
                ///
                /// CloudStack only honours `account` together with `domainid`.
                pub fn account_in_domain(
                    mut self,
                    account: impl Into<String>,
                    domain_id: impl Into<String>,
                ) -> Self {
                    self.params.set("account", account);
                    self.params.set("domainid", domain_id);
                    self
                }
            }
        )+
    };
}
pub(crate) use account_in_domain;

/// Add an `ids` setter taking a list of IDs
macro_rules! id_list {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Restrict to these IDs
                pub fn ids<I, S>(mut self, ids: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: AsRef<str>,
                {
                    self.params.set("ids", $crate::options::join_ids(ids));
                    self
                }
            }
        )+
    };
}
pub(crate) use id_list;

/// Add a `tags` setter encoding a key/value map
macro_rules! tag_filter {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Match (or apply) these tags
                pub fn tags<I, K, V>(mut self, tags: I) -> Self
                where
                    I: IntoIterator<Item = (K, V)>,
                    K: AsRef<str>,
                    V: AsRef<str>,
                {
                    $crate::options::set_tags(&mut self.params, tags);
                    self
                }
            }
        )+
    };
}
pub(crate) use tag_filter;

#[cfg(test)]
mod tests {
    use super::*;

    query_options! {
        /// Options used only in tests
        pub struct ProbeOptions {
            name => "name",
            zone_id => "zoneid",
        }
    }

    paged_options! {
        pub struct ProbeListOptions {
            state => "state",
        }
    }

    account_in_domain!(ProbeOptions);
    tag_filter!(ProbeOptions);
    id_list!(ProbeListOptions);

    #[test]
    fn test_setters_write_params() {
        let opts = ProbeOptions::new().name("web").zone_id(7);
        assert_eq!(opts.params().get("name"), Some("web"));
        assert_eq!(opts.params().get("zoneid"), Some("7"));
    }

    #[test]
    fn test_paged_setters() {
        let opts = ProbeListOptions::new()
            .state("Running")
            .keyword("db")
            .with_page(3, 25);
        let params = opts.into_params();
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("pagesize"), Some("25"));
        assert_eq!(params.get("keyword"), Some("db"));
    }

    #[test]
    fn test_account_in_domain_sets_both() {
        let params: QueryParams = ProbeOptions::new()
            .account_in_domain("ops", "dom-1")
            .into();
        assert_eq!(params.get("account"), Some("ops"));
        assert_eq!(params.get("domainid"), Some("dom-1"));
    }

    #[test]
    fn test_tags_are_indexed() {
        let opts = ProbeOptions::new().tags([("env", "prod"), ("owner", "ops")]);
        let params = opts.params();
        assert_eq!(params.get("tags[0].key"), Some("env"));
        assert_eq!(params.get("tags[0].value"), Some("prod"));
        assert_eq!(params.get("tags[1].key"), Some("owner"));
        assert_eq!(params.get("tags[1].value"), Some("ops"));
    }

    #[test]
    fn test_ids_are_comma_joined() {
        let opts = ProbeListOptions::new().ids(["a", "b", "c"]);
        assert_eq!(opts.params().get("ids"), Some("a,b,c"));
    }

    #[test]
    fn test_raw_params_are_paged() {
        let params = QueryParams::new().with("zoneid", "z").with_page(1, 10);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("zoneid"), Some("z"));
    }
}
