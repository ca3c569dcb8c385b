// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack CLI - command-line interface for the CloudStack API

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudstack_client::{Client, Credentials};

mod commands;
mod config;
mod output;

use commands::{
    AccountCommand, ApiArgs, HostCommand, JobCommand, NetworkCommand, OfferingCommand,
    ProfileCommand, SnapshotCommand, TemplateCommand, UsageCommand, VmCommand,
    VmSnapshotCommand, VolumeCommand, ZoneCommand,
};

#[derive(Parser)]
#[command(
    name = "cloudstack",
    version,
    about = "Apache CloudStack management CLI"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "CLOUDSTACK_PROFILE")]
    profile: Option<String>,

    /// API endpoint override
    #[arg(short = 'U', long, global = true, env = "CLOUDSTACK_URL")]
    url: Option<String>,

    /// API key override
    #[arg(long, global = true, env = "CLOUDSTACK_API_KEY")]
    api_key: Option<String>,

    /// Secret key override
    #[arg(long, global = true, env = "CLOUDSTACK_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Zones
    Zone {
        #[command(subcommand)]
        command: ZoneCommand,
    },

    /// Manage virtual machines
    Vm {
        #[command(subcommand)]
        command: VmCommand,
    },

    /// Manage volumes
    Volume {
        #[command(subcommand)]
        command: VolumeCommand,
    },

    /// Networks
    Network {
        #[command(subcommand)]
        command: NetworkCommand,
    },

    /// Service, disk and network offerings
    Offering {
        #[command(subcommand)]
        command: OfferingCommand,
    },

    /// Templates
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },

    /// Manage volume snapshots
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommand,
    },

    /// Manage VM snapshots
    Vmsnapshot {
        #[command(subcommand)]
        command: VmSnapshotCommand,
    },

    /// Manage hosts
    Host {
        #[command(subcommand)]
        command: HostCommand,
    },

    /// Accounts
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },

    /// Usage records
    Usage {
        #[command(subcommand)]
        command: UsageCommand,
    },

    /// Async jobs
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },

    /// Call any API command
    Api(ApiArgs),
}

impl Cli {
    /// Build a signing client from CLI options or profile
    fn build_client(&self) -> Result<Client> {
        // Explicit keys win unless a profile was asked for by name
        if self.profile.is_none()
            && let (Some(url), Some(api_key), Some(secret_key)) =
                (&self.url, &self.api_key, &self.secret_key)
        {
            return Ok(Client::new(
                url,
                Credentials::api_key(api_key.clone(), secret_key.clone()),
            )?);
        }

        let mut profile = config::resolve_profile(self.profile.as_deref())?;
        if let Some(url) = &self.url {
            profile.url = url.clone();
        }
        if let Some(api_key) = &self.api_key {
            profile.api_key = api_key.clone();
        }
        if let Some(secret_key) = &self.secret_key {
            profile.secret_key = secret_key.clone();
        }
        tracing::debug!(profile = %profile.name, url = %profile.url, "using profile");

        Ok(Client::new(&profile.url, profile.credentials())?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cloudstack=debug,cloudstack_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let use_json = cli.json;
    match &cli.command {
        Commands::Profile { command } => command.clone().run(use_json),
        Commands::Zone { command } => command.clone().run(&cli.build_client()?, use_json).await,
        Commands::Vm { command } => command.clone().run(&cli.build_client()?, use_json).await,
        Commands::Volume { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Network { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Offering { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Template { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Snapshot { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Vmsnapshot { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Host { command } => command.clone().run(&cli.build_client()?, use_json).await,
        Commands::Account { command } => {
            command.clone().run(&cli.build_client()?, use_json).await
        }
        Commands::Usage { command } => command.clone().run(&cli.build_client()?, use_json).await,
        Commands::Job { command } => command.clone().run(&cli.build_client()?, use_json).await,
        Commands::Api(args) => args.clone().run(&cli.build_client()?).await,
    }
}
