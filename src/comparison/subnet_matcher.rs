use rayon::prelude::*;
use serde::Serialize;

use super::comparator::SubnetComparator;
use crate::resources::{str_attr, AttributeMap};

/// A source subnet and the destination subnet accepted for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetPair {
    pub source_index: usize,
    pub destination_index: usize,
    pub source_id: Option<String>,
    pub destination_id: Option<String>,
}

/// Result of pairing source subnets with destination candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubnetMatch {
    pub pairs: Vec<SubnetPair>,
    /// Indexes of source subnets no candidate was accepted for
    pub unmatched: Vec<usize>,
    pub source_count: usize,
}

impl SubnetMatch {
    pub fn matched_count(&self) -> usize {
        self.pairs.len()
    }

    /// Every source subnet found some destination subnet
    pub fn all_matched(&self) -> bool {
        self.matched_count() == self.source_count
    }
}

/// Pair every source subnet with the first similar destination subnet.
///
/// Candidates are scanned in listed order and may be reused by several
/// source subnets. The candidate scan runs in parallel but `position_first`
/// keeps the first-in-order result.
pub fn match_subnets(sources: &[AttributeMap], destinations: &[AttributeMap]) -> SubnetMatch {
    let comparator = SubnetComparator;
    let mut result = SubnetMatch {
        source_count: sources.len(),
        ..SubnetMatch::default()
    };

    for (source_index, source) in sources.iter().enumerate() {
        let found = destinations
            .par_iter()
            .position_first(|candidate| comparator.is_similar(source, candidate));

        match found {
            Some(destination_index) => result.pairs.push(SubnetPair {
                source_index,
                destination_index,
                source_id: str_attr(source, "id").map(str::to_string),
                destination_id: str_attr(&destinations[destination_index], "id")
                    .map(str::to_string),
            }),
            None => {
                tracing::debug!(
                    subnet = crate::resources::display_name(source),
                    "No similar destination subnet"
                );
                result.unmatched.push(source_index);
            }
        }
    }

    result
}
