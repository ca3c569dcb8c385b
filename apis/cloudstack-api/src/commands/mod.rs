// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Command catalog
//!
//! One `const` [`Command`] per client operation. A declaration names the
//! CloudStack command, the HTTP verb, the key selected out of the
//! `<command>response` object, the parameters always sent, and the
//! [`Fallback`] applied when the server reports an error.
//!
//! Several operations can share a command: `GET_VIRTUAL_MACHINE` and
//! `LIST_VIRTUAL_MACHINES` both send `listVirtualMachines` but differ in
//! fallback and in how many results the caller expects.

use crate::params::QueryParams;
use std::fmt;

pub mod account;
pub mod address;
pub mod admin;
pub mod compute;
pub mod infrastructure;
pub mod network;
pub mod storage;

/// HTTP method a command is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Parameters in the query string
    Get,
    /// Parameters in an `application/x-www-form-urlencoded` body
    Post,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Get => f.write_str("GET"),
            Verb::Post => f.write_str("POST"),
        }
    }
}

/// Value substituted for an error response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Always return the error
    Propagate,
    /// Not found becomes an empty list
    EmptyListOnNotFound,
    /// Not found becomes `None`
    NoneOnNotFound,
    /// Not found becomes `()`
    UnitOnNotFound,
    /// 403, 404, 500 and not found become `None`
    NoneOn403Or404Or500,
}

/// Declaration of one client operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// CloudStack command name, e.g. `listVirtualMachines`
    pub name: &'static str,
    pub verb: Verb,
    /// Key holding the payload inside the response object; `None` selects
    /// the response object itself
    pub select: Option<&'static str>,
    pub fallback: Fallback,
    /// Whether the command answers with a job ID to poll
    pub is_async: bool,
    /// Parameters sent on every call; caller options override them
    pub fixed: &'static [(&'static str, &'static str)],
}

impl Command {
    pub const fn get(name: &'static str) -> Self {
        Self {
            name,
            verb: Verb::Get,
            select: None,
            fallback: Fallback::Propagate,
            is_async: false,
            fixed: &[],
        }
    }

    pub const fn post(name: &'static str) -> Self {
        Self {
            verb: Verb::Post,
            ..Self::get(name)
        }
    }

    pub const fn select(self, key: &'static str) -> Self {
        Self {
            select: Some(key),
            ..self
        }
    }

    pub const fn on_error(self, fallback: Fallback) -> Self {
        Self { fallback, ..self }
    }

    pub const fn fixed(self, fixed: &'static [(&'static str, &'static str)]) -> Self {
        Self { fixed, ..self }
    }

    /// Mark as asynchronous; the reply is an `AsyncCreateResponse`
    pub const fn async_job(self) -> Self {
        Self {
            is_async: true,
            ..self
        }
    }

    /// Shorthand for a list operation: `listall=true`, empty on not found
    pub const fn list_all(self, key: &'static str) -> Self {
        self.select(key)
            .fixed(&[("listall", "true")])
            .on_error(Fallback::EmptyListOnNotFound)
    }

    /// Name of the envelope key wrapping this command's response
    pub fn response_key(&self) -> String {
        crate::response_key(self.name)
    }

    /// `command`, `response=json` and the fixed parameters
    pub fn base_params(&self) -> QueryParams {
        let mut params = QueryParams::new()
            .with("command", self.name)
            .with("response", "json");
        for (key, value) in self.fixed {
            params.set(*key, *value);
        }
        params
    }
}

/// A named group of related operations
#[derive(Debug, Clone, Copy)]
pub struct CommandGroup {
    pub name: &'static str,
    pub commands: &'static [Command],
}

/// Every group in the catalog
pub const GROUPS: &[CommandGroup] = &[
    CommandGroup { name: "account", commands: account::ACCOUNT },
    CommandGroup { name: "user", commands: account::USER },
    CommandGroup { name: "domain", commands: account::DOMAIN },
    CommandGroup { name: "address", commands: address::ADDRESS },
    CommandGroup { name: "vlan", commands: address::VLAN },
    CommandGroup { name: "async job", commands: admin::ASYNC_JOB },
    CommandGroup { name: "configuration", commands: admin::CONFIGURATION },
    CommandGroup { name: "event", commands: admin::EVENT },
    CommandGroup { name: "limit", commands: admin::LIMIT },
    CommandGroup { name: "session", commands: admin::SESSION },
    CommandGroup { name: "tag", commands: admin::TAG },
    CommandGroup { name: "usage", commands: admin::USAGE },
    CommandGroup { name: "ssh key pair", commands: compute::SSH_KEY_PAIR },
    CommandGroup { name: "virtual machine", commands: compute::VIRTUAL_MACHINE },
    CommandGroup { name: "vm snapshot", commands: compute::VM_SNAPSHOT },
    CommandGroup { name: "cluster", commands: infrastructure::CLUSTER },
    CommandGroup { name: "host", commands: infrastructure::HOST },
    CommandGroup { name: "pod", commands: infrastructure::POD },
    CommandGroup { name: "storage pool", commands: infrastructure::STORAGE_POOL },
    CommandGroup { name: "zone", commands: infrastructure::ZONE },
    CommandGroup { name: "firewall", commands: network::FIREWALL },
    CommandGroup { name: "load balancer", commands: network::LOAD_BALANCER },
    CommandGroup { name: "network", commands: network::NETWORK },
    CommandGroup { name: "offering", commands: network::OFFERING },
    CommandGroup { name: "security group", commands: network::SECURITY_GROUP },
    CommandGroup { name: "guest os", commands: storage::GUEST_OS },
    CommandGroup { name: "snapshot", commands: storage::SNAPSHOT },
    CommandGroup { name: "template", commands: storage::TEMPLATE },
    CommandGroup { name: "volume", commands: storage::VOLUME },
];

/// Iterate over every declaration in the catalog
pub fn all() -> impl Iterator<Item = &'static Command> {
    GROUPS.iter().flat_map(|group| group.commands.iter())
}

/// Find a declaration by CloudStack command name, ignoring case
///
/// When several operations share a command, the first one declared wins;
/// groups list their `list*` operation before the matching `get`.
pub fn lookup(name: &str) -> Option<&'static Command> {
    all().find(|command| command.name.eq_ignore_ascii_case(name))
}
