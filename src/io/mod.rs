pub mod output;
pub mod writers;

pub use output::{create_writer, parse_output_format, OutputFormat, ReportWriter};

use crate::core::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
