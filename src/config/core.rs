use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::io::output::OutputFormat;

/// Root configuration structure for the assessor
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MigrationConfig {
    /// Remap tables applied to provider attributes on the destination side
    #[serde(default)]
    pub destination: RemapTables,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Operator-supplied translation of provider identifiers from the source
/// deployment to the destination deployment.
///
/// Both tables are read-only once loaded. A source identifier without an
/// entry is not remapped.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RemapTables {
    /// Source network type to destination network type
    #[serde(default)]
    pub new_network_type: BTreeMap<String, String>,

    /// Source physical network to destination physical network
    #[serde(default)]
    pub new_physical_network: BTreeMap<String, String>,
}

impl RemapTables {
    pub fn new(
        new_network_type: BTreeMap<String, String>,
        new_physical_network: BTreeMap<String, String>,
    ) -> Self {
        Self {
            new_network_type,
            new_physical_network,
        }
    }

    /// Non-empty entry of the network-type table for `key`
    pub fn network_type(&self, key: &str) -> Option<&str> {
        non_empty(self.new_network_type.get(key))
    }

    /// Non-empty entry of the physical-network table for `key`
    pub fn physical_network(&self, key: &str) -> Option<&str> {
        non_empty(self.new_physical_network.get(key))
    }

    /// Whether both tables are empty
    pub fn is_empty(&self) -> bool {
        self.new_network_type.is_empty() && self.new_physical_network.is_empty()
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Destination file for the spreadsheet report
    #[serde(default)]
    pub spreadsheet_path: Option<PathBuf>,
}

pub const DEFAULT_SPREADSHEET_PATH: &str = "migration_assessment.xlsx";

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        self.default_format.unwrap_or_default()
    }

    pub fn spreadsheet_path(&self) -> PathBuf {
        self.spreadsheet_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SPREADSHEET_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> RemapTables {
        RemapTables::new(
            BTreeMap::from([
                ("vlan".to_string(), "vxlan".to_string()),
                ("flat".to_string(), String::new()),
            ]),
            BTreeMap::from([("physnet1".to_string(), "physnet2".to_string())]),
        )
    }

    #[test]
    fn test_lookup_ignores_empty_values() {
        let tables = tables();
        assert_eq!(tables.network_type("vlan"), Some("vxlan"));
        assert_eq!(tables.network_type("flat"), None);
        assert_eq!(tables.network_type("gre"), None);
        assert_eq!(tables.physical_network("physnet1"), Some("physnet2"));
    }

    #[test]
    fn test_output_defaults() {
        let output = OutputConfig::default();
        assert_eq!(output.format(), OutputFormat::Json);
        assert_eq!(
            output.spreadsheet_path(),
            PathBuf::from("migration_assessment.xlsx")
        );
    }
}
