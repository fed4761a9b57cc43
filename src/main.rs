//! Log level admin service.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                 LOG ADMIN                    │
//!   POST /logging       │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ────────────────────┼─▶│  admin  │──▶│ control  │──▶│ registry  │  │
//!                       │  │handlers │   │parse/    │   │static or  │  │
//!   text response       │  │         │◀──│apply     │   │dynamic    │  │
//!   ◀───────────────────┼──│         │   └──────────┘   └─────┬─────┘  │
//!                       │  └─────────┘                        │        │
//!                       │                                     ▼        │
//!                       │  ┌───────────────────────────────────────┐   │
//!                       │  │ observability: RegistryFilter gates   │   │
//!                       │  │ every tracing event by logger level   │   │
//!                       │  └───────────────────────────────────────┘   │
//!                       └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use log_admin::config::loader::load_config;
use log_admin::lifecycle::startup;
use log_admin::AppConfig;

#[derive(Parser)]
#[command(name = "log-admin")]
#[command(about = "Runtime log level admin service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    startup::run(config).await
}
