//! CLI command implementations.
//!
//! Available commands:
//! - **assess**: Build the migration cost report
//! - **compare-networks** / **compare-subnets**: Resource equivalence checks
//! - **network-body** / **subnet-body**: Destination creation bodies
//! - **init**: Initialize a new configuration file

pub mod assess;
pub mod body;
pub mod compare;
pub mod init;

pub use assess::{run_assess, AssessConfig};
pub use body::{print_network_body, print_subnet_body};
pub use compare::{compare_networks, compare_subnets};
pub use init::init_config;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::resources::InventoryClient;

pub(crate) fn load_inventory(path: &Path) -> Result<InventoryClient> {
    InventoryClient::from_path(path)
        .with_context(|| format!("Failed to load inventory from {}", path.display()))
}

/// Pretty JSON followed by a newline
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
