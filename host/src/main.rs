//! Main entry point for the host binary
//!
//! Mounts the customer module on file-backed storage and routes one command
//! into it per invocation.

mod config;
mod routes;

use anyhow::Context;
use clap::Parser;

use config::HostConfig;
use customer::services::{JsonSnapshotRepository, RealFileStorage};
use customer::{CustomerError, CustomerService};
use routes::Command;
use shared::{logging, module_debug, ModuleId};

/// Host for the customer management module
#[derive(Parser)]
#[command(name = "host")]
#[command(about = "Manage customers with validation and persisted storage")]
pub struct Args {
    #[command(flatten)]
    pub config: HostConfig,

    #[command(subcommand)]
    pub command: Command,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let module_id = ModuleId::init_host();
    logging::init_tracing_with_level(Some(&args.config.log_level));
    args.config.validate()?;

    logging::log_startup(module_id, "customer host");
    module_debug!(module_id, "⚙️ Config: {:?}", args.config);

    let mut service = open_service(&args.config, module_id)?;

    let output = routes::dispatch(&mut service, args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    logging::log_success(module_id, "Command completed");
    logging::log_shutdown(module_id, "done");
    Ok(())
}

type FileService = CustomerService<JsonSnapshotRepository<RealFileStorage>>;

/// Open the file-backed service named by `config`, logging any failure
fn open_service(config: &HostConfig, module_id: &ModuleId) -> anyhow::Result<FileService> {
    let storage = RealFileStorage::with_base_dir(&config.storage_dir);
    let repository = JsonSnapshotRepository::with_store_name(storage, &config.store_name);

    CustomerService::open(repository)
        .inspect_err(|e| logging::log_error(module_id, open_failure_context(e), e))
        .with_context(|| format!("opening store '{}'", config.store_name))
}

fn open_failure_context(error: &CustomerError) -> &'static str {
    if error.is_persistence() {
        "open customer storage"
    } else {
        "load customer snapshot"
    }
}
