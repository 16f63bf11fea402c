use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::{parse_output_format, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "migration-assess")]
#[command(about = "Cloud workload migration assessment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the nearest .migration-assess.toml)
    #[arg(long = "config-file", visible_alias = "config", global = true, env = "MIGRATION_ASSESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Snapshots of the two deployments being compared
#[derive(clap::Args, Debug, Clone)]
pub struct InventoryArgs {
    /// JSON or YAML snapshot of the source deployment
    #[arg(id = "source_inventory", long = "source-inventory")]
    pub source: PathBuf,

    /// JSON or YAML snapshot of the destination deployment
    #[arg(id = "destination_inventory", long = "destination-inventory")]
    pub destination: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the migration cost report for one or more migrations
    Assess {
        /// Migration ids to report on
        #[arg(value_name = "MIGRATION_ID", required = true)]
        migrations: Vec<String>,

        /// JSON or YAML file of assessments keyed by migration id
        #[arg(long)]
        assessments: PathBuf,

        /// Output format (json, yaml, excel, csv); defaults to the config value
        #[arg(short, long, value_parser = parse_output_format)]
        format: Option<OutputFormat>,

        /// Output file; json, yaml and csv default to stdout, excel to --spreadsheet-path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Workbook written by the excel format when --output is not given
        #[arg(long = "spreadsheet-path", visible_alias = "excel-filepath")]
        spreadsheet_path: Option<PathBuf>,
    },

    /// Decide whether a destination network is equivalent to a source network
    CompareNetworks {
        /// Source network name or id
        source: String,

        /// Destination network name or id
        destination: String,

        #[command(flatten)]
        inventories: InventoryArgs,
    },

    /// Decide whether a destination subnet is equivalent to a source subnet
    CompareSubnets {
        /// Source subnet name or id
        source: String,

        /// Destination subnet name or id
        destination: String,

        #[command(flatten)]
        inventories: InventoryArgs,
    },

    /// Print the body a destination network would be created with
    NetworkBody {
        /// Source network name or id
        network: String,

        /// JSON or YAML snapshot of the source deployment
        #[arg(long = "source-inventory")]
        source_inventory: PathBuf,
    },

    /// Print the body a destination subnet would be created with
    SubnetBody {
        /// Source subnet name
        name: String,

        /// Tenant owning the source subnet
        #[arg(long = "tenant-id")]
        tenant_id: String,

        /// JSON or YAML snapshot of the source deployment
        #[arg(long = "source-inventory")]
        source_inventory: PathBuf,
    },

    /// Write a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
