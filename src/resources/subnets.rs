use serde_json::Value;

use super::{AttributeMap, CloudClient, Filters, ResourceKind};
use crate::core::{MigrationError, Result};

pub const SERVICE_TYPES: &str = "service_types";

/// Attributes that decide whether two subnets are equivalent
pub const SUBNET_RELEVANT_KEYS: [&str; 11] = [
    "enable_dhcp",
    "dns_nameservers",
    "allocation_pools",
    "host_routes",
    "ip_version",
    "gateway_ip",
    "cidr",
    "prefixlen",
    "ipv6_address_mode",
    "ipv6_ra_mode",
    SERVICE_TYPES,
];

/// Attributes carried into a destination subnet body
pub const SUBNET_BODY_KEYS: [&str; 10] = [
    "ipv6_ra_mode",
    "dns_nameservers",
    "ipv6_address_mode",
    "ip_version",
    "host_routes",
    "gateway_ip",
    "allocation_pools",
    SERVICE_TYPES,
    "enable_dhcp",
    "cidr",
];

pub fn get_subnet<C: CloudClient + ?Sized>(client: &C, subnet_id: &str) -> Result<AttributeMap> {
    client.find_resource(ResourceKind::Subnet, subnet_id)
}

pub fn list_subnets<C: CloudClient + ?Sized>(
    client: &C,
    filters: Option<&Filters>,
) -> Result<Vec<AttributeMap>> {
    let query = filters.cloned().unwrap_or_default();
    client.list_resources(ResourceKind::Subnet, &query)
}

pub fn create_subnet<C: CloudClient + ?Sized>(client: &mut C, body: AttributeMap) -> Result<String> {
    client.create_resource(ResourceKind::Subnet, body)
}

/// Resolve a list of subnet ids through one client, in order
pub fn get_subnets<C: CloudClient + ?Sized>(client: &C, ids: &[String]) -> Result<Vec<AttributeMap>> {
    ids.iter().map(|id| get_subnet(client, id)).collect()
}

/// Destination body for a subnet; null or missing attributes are left out
pub fn subnet_body(source: &AttributeMap) -> AttributeMap {
    SUBNET_BODY_KEYS
        .iter()
        .filter_map(|key| {
            source
                .get(*key)
                .filter(|v| !v.is_null())
                .map(|v| (key.to_string(), v.clone()))
        })
        .collect()
}

/// Body for the first subnet named `name` in tenant `tenant_id`
pub fn get_subnet_body<C: CloudClient + ?Sized>(
    client: &C,
    tenant_id: &str,
    name: &str,
) -> Result<AttributeMap> {
    let filters = Filters::from([
        ("tenant_id".to_string(), Value::from(tenant_id)),
        ("name".to_string(), Value::from(name)),
    ]);
    let source = list_subnets(client, Some(&filters))?
        .into_iter()
        .next()
        .ok_or_else(|| MigrationError::not_found(ResourceKind::Subnet, name))?;
    Ok(subnet_body(&source))
}
