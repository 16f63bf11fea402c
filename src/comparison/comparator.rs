use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use super::subnet_matcher::{match_subnets, SubnetMatch};
use crate::config::RemapTables;
use crate::core::Result;
use crate::resources::networks::{
    subnet_ids, AVAILABILITY_ZONES, NETWORK_RELEVANT_KEYS, PROVIDER_NETWORK_TYPE,
    PROVIDER_PHYSICAL_NETWORK, SUBNETS,
};
use crate::resources::subnets::{get_subnets, SERVICE_TYPES, SUBNET_RELEVANT_KEYS};
use crate::resources::{display_name, AttributeMap, CloudClient};

/// Outcome of comparing one source resource with one destination candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Similarity {
    pub similar: bool,
    /// Relevant keys present on the source resource
    pub relevant_keys: BTreeSet<&'static str>,
    /// Relevant keys whose expected destination value was found
    pub agreeing_keys: BTreeSet<&'static str>,
}

impl Similarity {
    /// Relevant source keys the destination disagrees on
    pub fn differing_keys(&self) -> Vec<&'static str> {
        self.relevant_keys
            .difference(&self.agreeing_keys)
            .copied()
            .collect()
    }
}

/// Relevant keys carried by the source; the destination's keys never count
fn source_relevant_keys(
    source: &AttributeMap,
    relevant: &[&'static str],
) -> BTreeSet<&'static str> {
    relevant
        .iter()
        .copied()
        .filter(|k| source.contains_key(*k))
        .collect()
}

static NULL: Value = Value::Null;

/// Attribute value where absent reads as null
fn attr<'a>(resource: &'a AttributeMap, key: &str) -> &'a Value {
    resource.get(key).unwrap_or(&NULL)
}

/// Values of a list attribute as an unordered set.
///
/// Absent and null read as the empty set and a scalar as a one-element set.
pub fn unordered_values(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        None | Some(Value::Null) => BTreeSet::new(),
        Some(Value::Array(items)) => items.iter().map(Value::to_string).collect(),
        Some(other) => BTreeSet::from([other.to_string()]),
    }
}

/// Equality rules for subnets
#[derive(Debug, Clone, Copy, Default)]
pub struct SubnetComparator;

impl SubnetComparator {
    pub fn compare(&self, source: &AttributeMap, destination: &AttributeMap) -> Similarity {
        let relevant_keys = source_relevant_keys(source, &SUBNET_RELEVANT_KEYS);

        let agreeing_keys: BTreeSet<&'static str> = relevant_keys
            .iter()
            .copied()
            .filter(|&key| {
                if key == SERVICE_TYPES {
                    unordered_values(source.get(key)) == unordered_values(destination.get(key))
                } else {
                    attr(source, key) == attr(destination, key)
                }
            })
            .collect();

        Similarity {
            similar: relevant_keys.len() == agreeing_keys.len(),
            relevant_keys,
            agreeing_keys,
        }
    }

    pub fn is_similar(&self, source: &AttributeMap, destination: &AttributeMap) -> bool {
        self.compare(source, destination).similar
    }
}

/// Whether `destination` can stand in for `source` as an existing subnet
pub fn check_subnet_similarity(source: &AttributeMap, destination: &AttributeMap) -> bool {
    SubnetComparator.is_similar(source, destination)
}

/// Network comparison together with the subnet pairing behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSimilarity {
    #[serde(flatten)]
    pub similarity: Similarity,
    pub subnets: SubnetMatch,
}

impl NetworkSimilarity {
    pub fn is_similar(&self) -> bool {
        self.similarity.similar
    }
}

/// Equality rules for networks under a remap policy
#[derive(Debug, Clone, Copy)]
pub struct NetworkComparator<'a> {
    remap: &'a RemapTables,
}

impl<'a> NetworkComparator<'a> {
    pub fn new(remap: &'a RemapTables) -> Self {
        Self { remap }
    }

    /// Source value after remapping; unmapped values pass through
    fn expected_provider_value(&self, key: &str, value: &Value) -> Value {
        let mapped = value.as_str().and_then(|v| match key {
            PROVIDER_NETWORK_TYPE => self.remap.network_type(v),
            _ => self.remap.physical_network(v),
        });
        mapped.map(Value::from).unwrap_or_else(|| value.clone())
    }

    fn key_agrees(
        &self,
        key: &str,
        source: &AttributeMap,
        destination: &AttributeMap,
        subnets: &SubnetMatch,
    ) -> bool {
        match key {
            PROVIDER_NETWORK_TYPE | PROVIDER_PHYSICAL_NETWORK => {
                self.expected_provider_value(key, attr(source, key)) == *attr(destination, key)
            }
            AVAILABILITY_ZONES => {
                unordered_values(source.get(key)) == unordered_values(destination.get(key))
            }
            SUBNETS => subnets.all_matched(),
            _ => attr(source, key) == attr(destination, key),
        }
    }

    /// Compare two networks whose subnets are already resolved
    pub fn compare(
        &self,
        source: &AttributeMap,
        destination: &AttributeMap,
        source_subnets: &[AttributeMap],
        destination_subnets: &[AttributeMap],
    ) -> NetworkSimilarity {
        let subnets = match_subnets(source_subnets, destination_subnets);
        let relevant_keys = source_relevant_keys(source, &NETWORK_RELEVANT_KEYS);

        let agreeing_keys: BTreeSet<&'static str> = relevant_keys
            .iter()
            .copied()
            .filter(|key| self.key_agrees(key, source, destination, &subnets))
            .collect();

        let similarity = Similarity {
            similar: relevant_keys == agreeing_keys,
            relevant_keys,
            agreeing_keys,
        };
        tracing::debug!(
            source = display_name(source),
            destination = display_name(destination),
            similar = similarity.similar,
            differing = ?similarity.differing_keys(),
            "Compared networks"
        );

        NetworkSimilarity {
            similarity,
            subnets,
        }
    }

    pub fn is_similar(
        &self,
        source: &AttributeMap,
        destination: &AttributeMap,
        source_subnets: &[AttributeMap],
        destination_subnets: &[AttributeMap],
    ) -> bool {
        self.compare(source, destination, source_subnets, destination_subnets)
            .is_similar()
    }
}

/// Compare two networks, resolving each side's subnets through its own client
pub fn check_network_similarity<S, D>(
    source: &AttributeMap,
    destination: &AttributeMap,
    source_client: &S,
    destination_client: &D,
    remap: &RemapTables,
) -> Result<NetworkSimilarity>
where
    S: CloudClient + ?Sized,
    D: CloudClient + ?Sized,
{
    let source_subnets = get_subnets(source_client, &subnet_ids(source))?;
    let destination_subnets = get_subnets(destination_client, &subnet_ids(destination))?;
    Ok(NetworkComparator::new(remap).compare(
        source,
        destination,
        &source_subnets,
        &destination_subnets,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn obj(value: Value) -> AttributeMap {
        value.as_object().cloned().unwrap()
    }

    fn remap() -> RemapTables {
        RemapTables::new(
            BTreeMap::from([("vlan".to_string(), "vxlan".to_string())]),
            BTreeMap::from([("physnet1".to_string(), "physnet2".to_string())]),
        )
    }

    #[test]
    fn test_unordered_values() {
        assert_eq!(
            unordered_values(Some(&json!(["a", "b"]))),
            unordered_values(Some(&json!(["b", "a"])))
        );
        assert!(unordered_values(None).is_empty());
        assert!(unordered_values(Some(&Value::Null)).is_empty());
        assert_eq!(unordered_values(Some(&json!("x"))).len(), 1);
    }

    #[test]
    fn test_subnet_differing_keys_reported() {
        let src = obj(json!({"cidr": "10.0.0.0/24", "ip_version": 4, "name": "a"}));
        let dest = obj(json!({"cidr": "10.0.1.0/24", "ip_version": 4, "name": "b"}));
        let result = SubnetComparator.compare(&src, &dest);
        assert!(!result.similar);
        assert_eq!(result.differing_keys(), vec!["cidr"]);
    }

    #[test]
    fn test_subnet_ignores_irrelevant_keys() {
        let src = obj(json!({"cidr": "10.0.0.0/24", "id": "1", "name": "a"}));
        let dest = obj(json!({"cidr": "10.0.0.0/24", "id": "2", "name": "b"}));
        assert!(check_subnet_similarity(&src, &dest));
    }

    #[test]
    fn test_null_on_source_matches_absent_on_destination() {
        let src = obj(json!({"cidr": "10.0.0.0/24", "ipv6_ra_mode": null}));
        let dest = obj(json!({"cidr": "10.0.0.0/24"}));
        assert!(check_subnet_similarity(&src, &dest));
    }

    #[test]
    fn test_subnet_keys_only_on_destination_do_not_count() {
        let src = obj(json!({"cidr": "10.0.0.0/24"}));
        let dest = obj(json!({"cidr": "10.0.0.0/24", "enable_dhcp": false}));
        assert!(check_subnet_similarity(&src, &dest));
        assert!(!check_subnet_similarity(&dest, &src));
    }

    #[test]
    fn test_network_type_matches_through_remap() {
        let remap = remap();
        let comparator = NetworkComparator::new(&remap);
        let src = obj(json!({"provider:network_type": "vlan", "mtu": 1500}));
        let remapped = obj(json!({"provider:network_type": "vxlan", "mtu": 1500}));
        let raw = obj(json!({"provider:network_type": "vlan", "mtu": 1500}));

        assert!(comparator.is_similar(&src, &remapped, &[], &[]));
        assert!(!comparator.is_similar(&src, &raw, &[], &[]));
    }

    #[test]
    fn test_unmapped_provider_value_passes_through() {
        let remap = remap();
        let comparator = NetworkComparator::new(&remap);
        let src = obj(json!({"provider:physical_network": "physnet9"}));
        let same = obj(json!({"provider:physical_network": "physnet9"}));
        assert!(comparator.is_similar(&src, &same, &[], &[]));

        let src = obj(json!({"provider:physical_network": "physnet1"}));
        let mapped = obj(json!({"provider:physical_network": "physnet2"}));
        assert!(comparator.is_similar(&src, &mapped, &[], &[]));
    }

    #[test]
    fn test_availability_zones_order_independent() {
        let remap = RemapTables::default();
        let comparator = NetworkComparator::new(&remap);
        let src = obj(json!({"availability_zones": ["az1", "az2"]}));
        let dest = obj(json!({"availability_zones": ["az2", "az1"]}));
        assert!(comparator.is_similar(&src, &dest, &[], &[]));
    }

    #[test]
    fn test_subnets_key_decided_by_matching() {
        let remap = RemapTables::default();
        let comparator = NetworkComparator::new(&remap);
        let src = obj(json!({"subnets": ["s1"], "shared": false}));
        let dest = obj(json!({"subnets": ["d1"], "shared": false}));
        let src_subnet = obj(json!({"id": "s1", "cidr": "10.0.0.0/24"}));
        let good = obj(json!({"id": "d1", "cidr": "10.0.0.0/24"}));
        let bad = obj(json!({"id": "d1", "cidr": "10.0.5.0/24"}));

        let similar = comparator.compare(&src, &dest, &[src_subnet.clone()], &[good]);
        assert!(similar.is_similar());
        assert_eq!(similar.subnets.matched_count(), 1);

        let different = comparator.compare(&src, &dest, &[src_subnet], &[bad]);
        assert!(!different.is_similar());
        assert_eq!(different.similarity.differing_keys(), vec!["subnets"]);
    }

    #[test]
    fn test_network_with_no_source_subnets_and_empty_destination() {
        let remap = RemapTables::default();
        let comparator = NetworkComparator::new(&remap);
        let src = obj(json!({"subnets": [], "mtu": 1450}));
        let dest = obj(json!({"subnets": [], "mtu": 1450}));
        assert!(comparator.is_similar(&src, &dest, &[], &[]));
    }

    #[test]
    fn test_network_similarity_serializes_flat() {
        let remap = RemapTables::default();
        let result = NetworkComparator::new(&remap).compare(
            &obj(json!({"mtu": 1500})),
            &obj(json!({"mtu": 9000})),
            &[],
            &[],
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["similar"], json!(false));
        assert_eq!(value["relevant_keys"], json!(["mtu"]));
        assert!(value.get("subnets").is_some());
    }
}
