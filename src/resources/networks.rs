//! Network lookups and the destination body projector.

use serde_json::Value;

use super::{str_attr, AttributeMap, CloudClient, Filters, ResourceKind};
use crate::config::RemapTables;
use crate::core::Result;

pub const PROVIDER_NETWORK_TYPE: &str = "provider:network_type";
pub const PROVIDER_PHYSICAL_NETWORK: &str = "provider:physical_network";
pub const AVAILABILITY_ZONES: &str = "availability_zones";
pub const AVAILABILITY_ZONE_HINTS: &str = "availability_zone_hints";
pub const SUBNETS: &str = "subnets";

/// Attributes copied verbatim into a destination network body
pub const NETWORK_BODY_KEYS: [&str; 8] = [
    "admin_state_up",
    "dns_domain",
    "port_security_enabled",
    "router:external",
    "shared",
    "vlan_transparent",
    "is_default",
    SUBNETS,
];

/// Attributes that decide whether two networks are equivalent
pub const NETWORK_RELEVANT_KEYS: [&str; 12] = [
    "admin_state_up",
    "dns_domain",
    "mtu",
    "port_security_enabled",
    PROVIDER_PHYSICAL_NETWORK,
    PROVIDER_NETWORK_TYPE,
    "router:external",
    "shared",
    "vlan_transparent",
    "is_default",
    AVAILABILITY_ZONES,
    SUBNETS,
];

pub fn get_network<C: CloudClient + ?Sized>(client: &C, name_or_id: &str) -> Result<AttributeMap> {
    client.find_resource(ResourceKind::Network, name_or_id)
}

/// Networks owned by `tenant_id`, narrowed by optional extra filters
pub fn list_networks<C: CloudClient + ?Sized>(
    client: &C,
    tenant_id: &str,
    filters: Option<&Filters>,
) -> Result<Vec<AttributeMap>> {
    let mut query = filters.cloned().unwrap_or_default();
    query.insert("tenant_id".to_string(), Value::from(tenant_id));
    query.insert("project_id".to_string(), Value::from(tenant_id));
    client.list_resources(ResourceKind::Network, &query)
}

pub fn create_network<C: CloudClient + ?Sized>(client: &mut C, body: AttributeMap) -> Result<String> {
    client.create_resource(ResourceKind::Network, body)
}

/// Subnet ids listed on a network; absent or malformed lists yield none
pub fn subnet_ids(network: &AttributeMap) -> Vec<String> {
    network
        .get(SUBNETS)
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Builds the body for creating a source network's destination equivalent
#[derive(Debug, Clone, Copy)]
pub struct NetworkProjector<'a> {
    remap: &'a RemapTables,
}

impl<'a> NetworkProjector<'a> {
    pub fn new(remap: &'a RemapTables) -> Self {
        Self { remap }
    }

    /// Project `source` onto the attributes a destination network should be
    /// created with.
    ///
    /// The physical network value is looked up in the network-type table and
    /// the network type in the physical-network table. Callers and
    /// configuration already depend on this pairing.
    pub fn project(&self, source: &AttributeMap) -> AttributeMap {
        let mut body: AttributeMap = source
            .iter()
            .filter(|(k, _)| NETWORK_BODY_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if let Some(mapped) = str_attr(source, PROVIDER_PHYSICAL_NETWORK)
            .and_then(|physnet| self.remap.network_type(physnet))
        {
            body.insert(PROVIDER_PHYSICAL_NETWORK.to_string(), Value::from(mapped));
        }

        if let Some(mapped) = str_attr(source, PROVIDER_NETWORK_TYPE)
            .and_then(|net_type| self.remap.physical_network(net_type))
        {
            body.insert(PROVIDER_NETWORK_TYPE.to_string(), Value::from(mapped));
        }

        if let Some(zones) = source.get(AVAILABILITY_ZONES) {
            body.insert(AVAILABILITY_ZONE_HINTS.to_string(), zones.clone());
        }

        body
    }
}

/// Look up a source network and project its destination body
pub fn get_network_body<C: CloudClient + ?Sized>(
    client: &C,
    name_or_id: &str,
    remap: &RemapTables,
) -> Result<AttributeMap> {
    let source = get_network(client, name_or_id)?;
    Ok(NetworkProjector::new(remap).project(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Inventory, InventoryClient};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn obj(value: Value) -> AttributeMap {
        value.as_object().cloned().unwrap()
    }

    fn remap() -> RemapTables {
        RemapTables::new(
            BTreeMap::from([("physnet1".to_string(), "physnet-dst".to_string())]),
            BTreeMap::from([("vlan".to_string(), "vxlan".to_string())]),
        )
    }

    fn source_network() -> AttributeMap {
        obj(json!({
            "id": "net-1",
            "name": "private",
            "admin_state_up": true,
            "shared": false,
            "mtu": 1500,
            "status": "ACTIVE",
            "provider:physical_network": "physnet1",
            "provider:network_type": "vlan",
            "availability_zones": ["nova"],
            "subnets": ["sub-1"],
        }))
    }

    #[test]
    fn test_project_copies_whitelist_and_remaps_crosswise() {
        let remap = remap();
        let body = NetworkProjector::new(&remap).project(&source_network());

        assert_eq!(
            Value::Object(body),
            json!({
                "admin_state_up": true,
                "shared": false,
                "subnets": ["sub-1"],
                "provider:physical_network": "physnet-dst",
                "provider:network_type": "vxlan",
                "availability_zone_hints": ["nova"],
            })
        );
    }

    #[test]
    fn test_project_without_remap_drops_provider_keys() {
        let remap = RemapTables::default();
        let body = NetworkProjector::new(&remap).project(&source_network());
        assert!(!body.contains_key(PROVIDER_PHYSICAL_NETWORK));
        assert!(!body.contains_key(PROVIDER_NETWORK_TYPE));
        assert!(!body.contains_key("mtu"));
    }

    #[test]
    fn test_project_tolerates_missing_keys() {
        let remap = remap();
        let body = NetworkProjector::new(&remap).project(&obj(json!({"shared": true})));
        assert_eq!(Value::Object(body), json!({"shared": true}));
    }

    #[test]
    fn test_project_does_not_mutate_source() {
        let remap = remap();
        let source = source_network();
        let before = source.clone();
        let _ = NetworkProjector::new(&remap).project(&source);
        assert_eq!(source, before);
    }

    #[test]
    fn test_subnet_ids() {
        assert_eq!(subnet_ids(&source_network()), vec!["sub-1".to_string()]);
        assert!(subnet_ids(&AttributeMap::new()).is_empty());
    }

    #[test]
    fn test_list_networks_scopes_to_tenant() {
        let client = InventoryClient::new(Inventory {
            networks: vec![
                obj(json!({"id": "a", "tenant_id": "t1", "project_id": "t1", "shared": true})),
                obj(json!({"id": "b", "tenant_id": "t1", "project_id": "t1", "shared": false})),
                obj(json!({"id": "c", "tenant_id": "t2", "project_id": "t2", "shared": true})),
            ],
            ..Inventory::default()
        });

        assert_eq!(list_networks(&client, "t1", None).unwrap().len(), 2);

        let shared = Filters::from([("shared".to_string(), json!(true))]);
        let found = list_networks(&client, "t1", Some(&shared)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["id"], json!("a"));
    }

    #[test]
    fn test_get_network_body_and_create() {
        let mut client = InventoryClient::new(Inventory {
            networks: vec![source_network()],
            ..Inventory::default()
        });
        let body = get_network_body(&client, "private", &remap()).unwrap();
        let id = create_network(&mut client, body).unwrap();
        let created = get_network(&client, &id).unwrap();
        assert_eq!(created["provider:network_type"], json!("vxlan"));
    }
}
