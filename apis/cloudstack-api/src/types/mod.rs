// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Domain model returned by the management server
//!
//! Every type mirrors the JSON CloudStack sends: fields carry the lowercase
//! wire names, most are optional because the server omits what does not
//! apply, and enums keep an `Unrecognized` variant for values introduced by
//! newer releases.

pub mod account;
pub mod address;
pub mod async_job;
pub mod common;
pub mod configuration;
pub mod event;
pub mod firewall;
pub mod infrastructure;
pub mod network;
pub mod offering;
pub mod security_group;
pub mod session;
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
pub use common::{
    DATE_FORMAT, ResourceTag, SuccessResponse, Timestamp, format_timestamp, parse_timestamp,
};
pub use configuration::*;
pub use event::*;
pub use firewall::*;
pub use infrastructure::*;
pub use network::*;
pub use offering::*;
pub use security_group::*;
pub use session::*;
pub use snapshot::*;
pub use ssh_key_pair::*;
pub use tag::*;
pub use template::*;
pub use usage::*;
pub use virtual_machine::*;
pub use volume::*;
