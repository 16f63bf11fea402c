use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Migration assessment configuration

# Provider identifiers translated from the source deployment to the
# destination. Unlisted identifiers are kept as they are.
[destination]
new_network_type = {}
new_physical_network = {}

[output]
default_format = "json"
spreadsheet_path = "migration_assessment.xlsx"
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    eprintln!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
