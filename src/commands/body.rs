use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::{load_inventory, write_json};
use crate::config::MigrationConfig;
use crate::resources::networks::get_network_body;
use crate::resources::subnets::get_subnet_body;
use crate::resources::AttributeMap;

pub fn print_network_body<W: Write>(
    network: &str,
    source_inventory: &Path,
    settings: &MigrationConfig,
    out: &mut W,
) -> Result<AttributeMap> {
    let client = load_inventory(source_inventory)?;
    let body = get_network_body(&client, network, &settings.destination)?;
    write_json(out, &body)?;
    Ok(body)
}

pub fn print_subnet_body<W: Write>(
    name: &str,
    tenant_id: &str,
    source_inventory: &Path,
    out: &mut W,
) -> Result<AttributeMap> {
    let client = load_inventory(source_inventory)?;
    let body = get_subnet_body(&client, tenant_id, name)?;
    write_json(out, &body)?;
    Ok(body)
}
