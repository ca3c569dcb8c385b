// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types and lenient decoding helpers
//!
//! The management server is not strict about JSON types: booleans and
//! numbers arrive quoted on some versions, and dates come in a handful of
//! formats. Decoding a field never fails the whole response; a value that
//! cannot be read becomes `None`.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Timestamp as reported by the management server
pub type Timestamp = DateTime<FixedOffset>;

/// Wire format of CloudStack timestamps (`2011-12-13T16:32:22-0800`)
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Same as [`DATE_FORMAT`] with the `T` quoted, as some releases emit it
const QUOTED_DATE_FORMAT: &str = "%Y-%m-%d'T'%H:%M:%S%z";

/// Parse a CloudStack timestamp, accepting RFC 3339 as well
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    DateTime::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_str(raw, QUOTED_DATE_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// Format a timestamp the way the management server does
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(DATE_FORMAT).to_string()
}

/// `#[serde(with = "date")]` for `Option<Timestamp>` fields
pub mod date {
    use super::{Timestamp, format_timestamp, parse_timestamp};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => s.serialize_str(&format_timestamp(ts)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Timestamp>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(raw)) => parse_timestamp(&raw),
            _ => None,
        })
    }
}

/// Accept a scalar either as its JSON type or as a string
///
/// Used with `#[serde(default, deserialize_with = "lenient")]`.
pub fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr,
{
    Ok(match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => raw.trim().parse().ok(),
        Some(other) => serde_json::from_value(other).ok(),
    })
}

/// Lenient `FromStr` for string enums that carry an `Unrecognized` variant
macro_rules! lenient_from_str {
    ($($name:ty),+ $(,)?) => {
        $(
            impl std::str::FromStr for $name {
                type Err = std::convert::Infallible;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    use serde::de::IntoDeserializer;
                    let de: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
                        s.into_deserializer();
                    Ok(<Self as serde::Deserialize>::deserialize(de).unwrap_or(Self::Unrecognized))
                }
            }
        )+
    };
}
pub(crate) use lenient_from_str;

/// Enum carried on the wire as an integer code
///
/// Unknown codes are kept in `Unrecognized(code)`. Codes sent as strings
/// are accepted, as are variant names (`"RUNNING_VM"` reads as
/// `RunningVm`).
macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code this client does not know
            Unrecognized(i64),
        }

        impl $name {
            /// Look a variant up by name, ignoring case and underscores
            pub fn from_name(name: &str) -> Option<Self> {
                let wanted = name.trim().replace('_', "");
                $(
                    if stringify!($variant).eq_ignore_ascii_case(&wanted) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Integer code sent on the wire
            pub fn code(self) -> i64 {
                i64::from(self)
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                match code {
                    $( $value => Self::$variant, )+
                    other => Self::Unrecognized(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                match value {
                    $( $name::$variant => $value, )+
                    $name::Unrecognized(code) => code,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                    Self::Unrecognized(code) => write!(f, "Unrecognized({})", code),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_i64(i64::from(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(d)?;
                let parsed = match &raw {
                    serde_json::Value::Number(n) => n.as_i64().map(Self::from),
                    serde_json::Value::String(s) => s
                        .trim()
                        .parse::<i64>()
                        .ok()
                        .map(Self::from)
                        .or_else(|| Self::from_name(s)),
                    _ => None,
                };
                Ok(parsed.unwrap_or(Self::Unrecognized(-1)))
            }
        }
    };
}
pub(crate) use numeric_enum;

/// Generic `{"success": true, "displaytext": ...}` result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Whether the operation succeeded
    #[serde(default, deserialize_with = "lenient")]
    pub success: Option<bool>,
    /// Optional message from the server
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
}

impl SuccessResponse {
    /// `true` unless the server explicitly reported failure
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }
}

/// A resource tag as embedded in other resources
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceTag {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(default, rename = "resourcetype")]
    pub resource_type: Option<String>,
    #[serde(default, rename = "resourceid")]
    pub resource_id: Option<String>,
    pub account: Option<String>,
    pub domain: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    pub project: Option<String>,
    #[serde(default, rename = "projectid")]
    pub project_id: Option<String>,
    pub customer: Option<String>,
}

/// Deserialize an `Option<Vec<T>>`-shaped field into an empty vec when absent or null
pub fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "lenient")]
        count: Option<u64>,
        #[serde(default, with = "date")]
        when: Option<Timestamp>,
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let ts = parse_timestamp("2011-12-13T16:32:22-0800").unwrap();
        assert_eq!(ts.year(), 2011);
        assert_eq!(ts.hour(), 16);
        assert_eq!(ts.offset().local_minus_utc(), -8 * 3600);

        assert!(parse_timestamp("2011-12-13'T'16:32:22-0800").is_some());
        assert!(parse_timestamp("2011-12-13T16:32:22+00:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_format_timestamp_round_trip() {
        let ts = parse_timestamp("2011-12-13T16:32:22-0800").unwrap();
        assert_eq!(format_timestamp(&ts), "2011-12-13T16:32:22-0800");
    }

    #[test]
    fn test_lenient_scalars() {
        let p: Probe =
            serde_json::from_str(r#"{"flag": "true", "count": "10", "when": "garbage"}"#).unwrap();
        assert_eq!(p.flag, Some(true));
        assert_eq!(p.count, Some(10));
        assert_eq!(p.when, None);

        let p: Probe = serde_json::from_str(r#"{"flag": false, "count": 3}"#).unwrap();
        assert_eq!(p.flag, Some(false));
        assert_eq!(p.count, Some(3));

        let p: Probe = serde_json::from_str(r#"{"flag": "maybe", "count": -1}"#).unwrap();
        assert_eq!(p.flag, None);
        assert_eq!(p.count, None);
    }

    #[test]
    fn test_success_response_defaults_to_success() {
        let r: SuccessResponse = serde_json::from_str("{}").unwrap();
        assert!(r.is_success());
        let r: SuccessResponse = serde_json::from_str(r#"{"success": "false"}"#).unwrap();
        assert!(!r.is_success());
    }
}
