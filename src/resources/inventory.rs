//! A [`CloudClient`] over a captured snapshot of one deployment.
//!
//! Snapshots are JSON or YAML documents with one list per resource
//! collection:
//!
//! ```yaml
//! networks:
//!   - id: net-1
//!     name: private
//!     subnets: [sub-1]
//! subnets:
//!   - id: sub-1
//!     cidr: 10.0.0.0/24
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::{AttributeMap, CloudClient, Filters, ResourceKind};
use crate::core::{MigrationError, Result};

/// Resource collections of one deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub networks: Vec<AttributeMap>,
    #[serde(default)]
    pub subnets: Vec<AttributeMap>,
    #[serde(default)]
    pub images: Vec<AttributeMap>,
    #[serde(default)]
    pub flavors: Vec<AttributeMap>,
    #[serde(default)]
    pub volumes: Vec<AttributeMap>,
}

impl Inventory {
    /// Parse a snapshot, choosing YAML for `.yaml`/`.yml` paths and JSON
    /// otherwise
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        if is_yaml_path(path) {
            Ok(serde_yaml::from_str(&contents)?)
        } else {
            Ok(serde_json::from_str(&contents)?)
        }
    }

    pub fn collection(&self, kind: ResourceKind) -> &[AttributeMap] {
        match kind {
            ResourceKind::Network => &self.networks,
            ResourceKind::Subnet => &self.subnets,
            ResourceKind::Image => &self.images,
            ResourceKind::Flavor => &self.flavors,
            ResourceKind::Volume => &self.volumes,
        }
    }

    fn collection_mut(&mut self, kind: ResourceKind) -> &mut Vec<AttributeMap> {
        match kind {
            ResourceKind::Network => &mut self.networks,
            ResourceKind::Subnet => &mut self.subnets,
            ResourceKind::Image => &mut self.images,
            ResourceKind::Flavor => &mut self.flavors,
            ResourceKind::Volume => &mut self.volumes,
        }
    }
}

pub(crate) fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Snapshot-backed client; created resources live only in memory
#[derive(Debug, Clone, Default)]
pub struct InventoryClient {
    inventory: Inventory,
    created: usize,
}

impl InventoryClient {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            created: 0,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let inventory = Inventory::from_path(path)?;
        tracing::debug!(
            networks = inventory.networks.len(),
            subnets = inventory.subnets.len(),
            "Loaded inventory from {}",
            path.display()
        );
        Ok(Self::new(inventory))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

fn matches_filters(resource: &AttributeMap, filters: &Filters) -> bool {
    filters
        .iter()
        .all(|(key, expected)| resource.get(key) == Some(expected))
}

fn has_str(resource: &AttributeMap, key: &str, wanted: &str) -> bool {
    resource.get(key).and_then(Value::as_str) == Some(wanted)
}

impl CloudClient for InventoryClient {
    fn find_resource(&self, kind: ResourceKind, name_or_id: &str) -> Result<AttributeMap> {
        let collection = self.inventory.collection(kind);

        if let Some(found) = collection.iter().find(|r| has_str(r, "id", name_or_id)) {
            return Ok(found.clone());
        }

        let named: Vec<&AttributeMap> = collection
            .iter()
            .filter(|r| has_str(r, "name", name_or_id))
            .collect();
        match named.as_slice() {
            [] => Err(MigrationError::not_found(kind, name_or_id)),
            [single] => Ok((*single).clone()),
            many => Err(MigrationError::AmbiguousName {
                kind,
                name: name_or_id.to_string(),
                count: many.len(),
            }),
        }
    }

    fn list_resources(&self, kind: ResourceKind, filters: &Filters) -> Result<Vec<AttributeMap>> {
        Ok(self
            .inventory
            .collection(kind)
            .iter()
            .filter(|r| matches_filters(r, filters))
            .cloned()
            .collect())
    }

    fn create_resource(&mut self, kind: ResourceKind, mut body: AttributeMap) -> Result<String> {
        self.created += 1;
        let id = format!("{}-{}", kind, self.created);
        body.insert("id".to_string(), Value::String(id.clone()));
        self.inventory.collection_mut(kind).push(body);
        tracing::info!(%kind, id = id.as_str(), "Created resource");
        Ok(id)
    }
}
