use anyhow::Result;
use std::io::Write;

use super::{load_inventory, write_json};
use crate::cli::InventoryArgs;
use crate::comparison::{check_network_similarity, NetworkSimilarity, Similarity, SubnetComparator};
use crate::config::MigrationConfig;
use crate::resources::networks::get_network;
use crate::resources::subnets::get_subnet;

/// Compare a source network with a destination network and print the result
pub fn compare_networks<W: Write>(
    source: &str,
    destination: &str,
    inventories: &InventoryArgs,
    settings: &MigrationConfig,
    out: &mut W,
) -> Result<NetworkSimilarity> {
    let source_client = load_inventory(&inventories.source)?;
    let destination_client = load_inventory(&inventories.destination)?;

    let source_network = get_network(&source_client, source)?;
    let destination_network = get_network(&destination_client, destination)?;

    let result = check_network_similarity(
        &source_network,
        &destination_network,
        &source_client,
        &destination_client,
        &settings.destination,
    )?;
    write_json(out, &result)?;
    Ok(result)
}

/// Compare a source subnet with a destination subnet and print the result
pub fn compare_subnets<W: Write>(
    source: &str,
    destination: &str,
    inventories: &InventoryArgs,
    out: &mut W,
) -> Result<Similarity> {
    let source_client = load_inventory(&inventories.source)?;
    let destination_client = load_inventory(&inventories.destination)?;

    let result = SubnetComparator.compare(
        &get_subnet(&source_client, source)?,
        &get_subnet(&destination_client, destination)?,
    );
    write_json(out, &result)?;
    Ok(result)
}
