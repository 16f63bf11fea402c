//! Cloud resources as seen through a deployment's query API.
//!
//! Resources are plain attribute maps. Only the comparators and the body
//! projectors give meaning to particular keys.

pub mod client;
pub mod inventory;
pub mod networks;
pub mod subnets;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

pub use client::CloudClient;
pub use inventory::{Inventory, InventoryClient};

/// Attribute name to value, as returned by a cloud platform's query API
pub type AttributeMap = Map<String, Value>;

/// Attribute filters for list queries
pub type Filters = BTreeMap<String, Value>;

/// Kinds of resource the collaborator client can look up or create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Network,
    Subnet,
    Image,
    Flavor,
    Volume,
}

impl ResourceKind {
    /// Name of the collection holding this kind in list responses
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Network => "networks",
            Self::Subnet => "subnets",
            Self::Image => "images",
            Self::Flavor => "flavors",
            Self::Volume => "volumes",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Subnet => "subnet",
            Self::Image => "image",
            Self::Flavor => "flavor",
            Self::Volume => "volume",
        };
        f.write_str(name)
    }
}

/// String attribute, if present and a string
pub fn str_attr<'a>(resource: &'a AttributeMap, key: &str) -> Option<&'a str> {
    resource.get(key).and_then(Value::as_str)
}

/// Identifier or name used in log lines
pub fn display_name(resource: &AttributeMap) -> &str {
    str_attr(resource, "name")
        .filter(|n| !n.is_empty())
        .or_else(|| str_attr(resource, "id"))
        .unwrap_or("<unnamed>")
}
