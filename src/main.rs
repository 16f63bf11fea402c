use anyhow::{Context, Result};
use clap::Parser;
use migration_assess::cli::{Cli, Commands};
use migration_assess::commands;
use migration_assess::config::load_config;
use migration_assess::observability::init_tracing;
use migration_assess::MigrationConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config_path = cli.config.as_deref();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Assess {
            migrations,
            assessments,
            format,
            output,
            spreadsheet_path,
        } => commands::run_assess(
            commands::AssessConfig {
                migrations,
                assessments,
                format,
                output,
                spreadsheet_path,
            },
            &settings(config_path)?,
        ),
        Commands::CompareNetworks {
            source,
            destination,
            inventories,
        } => commands::compare_networks(
            &source,
            &destination,
            &inventories,
            &settings(config_path)?,
            &mut out,
        )
        .map(|_| ()),
        Commands::CompareSubnets {
            source,
            destination,
            inventories,
        } => commands::compare_subnets(&source, &destination, &inventories, &mut out).map(|_| ()),
        Commands::NetworkBody {
            network,
            source_inventory,
        } => commands::print_network_body(
            &network,
            &source_inventory,
            &settings(config_path)?,
            &mut out,
        )
        .map(|_| ()),
        Commands::SubnetBody {
            name,
            tenant_id,
            source_inventory,
        } => commands::print_subnet_body(&name, &tenant_id, &source_inventory, &mut out)
            .map(|_| ()),
        Commands::Init { force } => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            commands::init_config(&cwd, force)
        }
    }
}

fn settings(config_path: Option<&Path>) -> Result<MigrationConfig> {
    load_config(config_path).context("Failed to load configuration")
}
