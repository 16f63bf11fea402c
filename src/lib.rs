// Export modules for library usage
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod resources;

// Re-export commonly used types
pub use crate::core::{MigrationError, Result};

pub use crate::assessment::{
    aggregate, assess_migrations, AssessmentFile, AssessmentPayload, AssessmentSource, ImageSize,
    MigrationReport, ReportRow,
};

pub use crate::comparison::{
    check_network_similarity, check_subnet_similarity, match_subnets, NetworkComparator,
    NetworkSimilarity, Similarity, SubnetComparator, SubnetMatch,
};

pub use crate::config::{MigrationConfig, RemapTables};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

pub use crate::resources::{
    networks::NetworkProjector, AttributeMap, CloudClient, Filters, Inventory, InventoryClient,
    ResourceKind,
};
