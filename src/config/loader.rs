use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::MigrationConfig;
use crate::core::{MigrationError, Result};

pub const CONFIG_FILE_NAME: &str = ".migration-assess.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<MigrationConfig> {
    let config = toml::from_str::<MigrationConfig>(contents)?;
    validate_remap_keys(&config)?;
    Ok(config)
}

fn validate_remap_keys(config: &MigrationConfig) -> Result<()> {
    let tables = [
        ("new_network_type", &config.destination.new_network_type),
        ("new_physical_network", &config.destination.new_physical_network),
    ];
    for (name, table) in tables {
        if table.keys().any(|k| k.trim().is_empty()) {
            return Err(MigrationError::configuration(
                format!("[destination].{name} contains an empty source identifier"),
                None,
            ));
        }
        for (from, to) in table {
            if to.is_empty() {
                tracing::warn!(table = name, from = %from, "empty remap target, entry is ignored");
            }
        }
    }
    Ok(())
}

/// Load configuration from an explicit path; any failure is an error
pub fn load_config_from(path: &Path) -> Result<MigrationConfig> {
    let contents = read_config_file(path).map_err(|e| {
        MigrationError::configuration(
            format!("failed to read {}: {}", path.display(), e),
            Some(path.to_path_buf()),
        )
    })?;
    let config = parse_and_validate_config(&contents).map_err(|e| match e {
        MigrationError::Configuration { message, .. } => {
            MigrationError::configuration(message, Some(path.to_path_buf()))
        }
        other => MigrationError::configuration(other.to_string(), Some(path.to_path_buf())),
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<Result<MigrationConfig>> {
    match fs::metadata(config_path) {
        Ok(meta) if meta.is_file() => Some(load_config_from(config_path)),
        Ok(_) => None,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
///
/// A file that exists but does not parse is an error; finding nothing yields
/// the default configuration.
pub fn discover_config(start: PathBuf) -> Result<MigrationConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(MigrationConfig::default())
        })
}

/// Load the process configuration: the explicit file when given, otherwise
/// the nearest `.migration-assess.toml` above the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<MigrationConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => {
            let current = std::env::current_dir()?;
            discover_config(current)
        }
    }
}
