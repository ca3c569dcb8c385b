// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_client::Client;
use cloudstack_client::cloudstack_api::commands::compute::LIST_VIRTUAL_MACHINES;
use cloudstack_client::cloudstack_api::options::{
    DeployVirtualMachineOptions, ListVirtualMachinesOptions, StopVirtualMachineOptions,
};
use cloudstack_client::cloudstack_api::VirtualMachine;

use super::{WaitArgs, follow_job};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum VmCommand {
    /// List virtual machines
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a virtual machine
    Get {
        /// VM ID
        id: String,
    },

    /// Deploy a new virtual machine
    Deploy(DeployArgs),

    /// Start a stopped virtual machine
    Start {
        /// VM ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Stop a running virtual machine
    Stop {
        /// VM ID
        id: String,
        /// Force the stop, even if the guest does not respond
        #[arg(short, long)]
        force: bool,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Reboot a virtual machine
    Reboot {
        /// VM ID
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Destroy a virtual machine
    #[command(alias = "rm")]
    Destroy {
        /// VM ID
        id: String,
        /// Expunge immediately instead of waiting for the cleanup interval
        #[arg(long)]
        expunge: bool,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter by zone ID
    #[arg(long)]
    pub zone: Option<String>,

    /// Filter by state (Running, Stopped, ...)
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by name
    #[arg(long)]
    pub name: Option<String>,

    /// Fetch every page, this many VMs per request
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,
}

#[derive(Args, Clone)]
pub struct DeployArgs {
    /// Zone ID
    #[arg(long)]
    pub zone: String,

    /// Service offering ID
    #[arg(long)]
    pub offering: String,

    /// Template ID
    #[arg(long)]
    pub template: String,

    /// VM name
    #[arg(long)]
    pub name: Option<String>,

    /// Network IDs to attach (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub network: Vec<String>,

    /// Create the VM without starting it
    #[arg(long)]
    pub no_start: bool,

    #[command(flatten)]
    pub wait: WaitArgs,
}

impl VmCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        let vms = client.virtual_machine_api();
        match self {
            Self::List(args) => list(args, client, use_json).await,
            Self::Get { id } => {
                let vm = vms
                    .get_virtual_machine(&id)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("Virtual machine {} not found", id))?;
                show(&vm, use_json)
            }
            Self::Deploy(args) => deploy(args, client, use_json).await,
            Self::Start { id, wait } => {
                let job = vms.start_virtual_machine(&id).await?;
                finish(client, &job, &wait, use_json).await
            }
            Self::Stop { id, force, wait } => {
                let mut options = StopVirtualMachineOptions::new();
                if force {
                    options = options.forced(true);
                }
                let job = vms.stop_virtual_machine(&id, options).await?;
                finish(client, &job, &wait, use_json).await
            }
            Self::Reboot { id, wait } => {
                let job = vms.reboot_virtual_machine(&id).await?;
                finish(client, &job, &wait, use_json).await
            }
            Self::Destroy { id, expunge, wait } => {
                let job = vms.destroy_virtual_machine(&id, expunge).await?;
                finish(client, &job, &wait, use_json).await
            }
        }
    }
}

async fn list(args: ListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut options = ListVirtualMachinesOptions::new();
    if let Some(zone) = &args.zone {
        options = options.zone_id(zone);
    }
    if let Some(state) = &args.state {
        options = options.state(state);
    }
    if let Some(name) = &args.name {
        options = options.name(name);
    }

    let vms: Vec<VirtualMachine> = match args.page_size {
        Some(page_size) => {
            client
                .list_all(&LIST_VIRTUAL_MACHINES, options, page_size)
                .await?
        }
        None => {
            client
                .virtual_machine_api()
                .list_virtual_machines(options)
                .await?
        }
    };

    if use_json {
        return json::print_json(&vms);
    }
    let mut tbl = table::create_table(&["ID", "NAME", "STATE", "ZONE", "IP"]);
    for vm in &vms {
        tbl.add_row(vec![
            vm.id.clone(),
            table::cell(vm.name.as_deref()),
            table::cell(vm.state.as_ref()),
            table::cell(vm.zone_name.as_deref()),
            table::cell(primary_ip(vm)),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}

async fn deploy(args: DeployArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut options = DeployVirtualMachineOptions::new();
    if let Some(name) = &args.name {
        options = options.name(name);
    }
    if !args.network.is_empty() {
        options = options.network_ids(&args.network);
    }
    if args.no_start {
        options = options.start_vm(false);
    }

    let job = client
        .virtual_machine_api()
        .deploy_virtual_machine(&args.zone, &args.offering, &args.template, options)
        .await?;
    if !use_json && let Some(id) = &job.id {
        println!("Deploying virtual machine {}", id);
    }
    finish(client, &job, &args.wait, use_json).await
}

async fn finish(
    client: &Client,
    job: &cloudstack_client::cloudstack_api::AsyncCreateResponse,
    wait: &WaitArgs,
    use_json: bool,
) -> Result<()> {
    if let Some(vm) = follow_job::<VirtualMachine>(client, job, wait, use_json).await? {
        if use_json {
            json::print_json(&vm)?;
        } else {
            println!(
                "Virtual machine {} ({}) is {}",
                vm.name.as_deref().unwrap_or("-"),
                vm.id,
                table::cell(vm.state.as_ref())
            );
        }
    }
    Ok(())
}

/// IP of the default NIC, or the first NIC with an address
fn primary_ip(vm: &VirtualMachine) -> Option<&str> {
    vm.nic
        .iter()
        .find(|nic| nic.is_default == Some(true))
        .or_else(|| vm.nic.first())
        .and_then(|nic| nic.ip_address.as_deref())
}

fn show(vm: &VirtualMachine, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(vm);
    }
    println!("ID:       {}", vm.id);
    println!("Name:     {}", table::cell(vm.name.as_deref()));
    println!("State:    {}", table::cell(vm.state.as_ref()));
    println!("Zone:     {}", table::cell(vm.zone_name.as_deref()));
    println!("Template: {}", table::cell(vm.template_name.as_deref()));
    println!(
        "Offering: {}",
        table::cell(vm.service_offering_name.as_deref())
    );
    println!("CPUs:     {}", table::cell(vm.cpu_count));
    println!("Memory:   {} MiB", table::cell(vm.memory));
    for nic in &vm.nic {
        println!(
            "NIC:      {} {}",
            table::cell(nic.network_name.as_deref()),
            table::cell(nic.ip_address.as_deref())
        );
    }
    Ok(())
}
