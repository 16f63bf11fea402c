//! Resource equivalence between a source and a destination deployment.
//!
//! A destination resource is similar to a source resource when every
//! relevant attribute present on the source has its expected value on the
//! destination. Attributes present only on the destination are ignored.

pub mod comparator;
pub mod subnet_matcher;

pub use comparator::{
    check_network_similarity, check_subnet_similarity, unordered_values, NetworkComparator,
    NetworkSimilarity, Similarity, SubnetComparator,
};
pub use subnet_matcher::{match_subnets, SubnetMatch, SubnetPair};
