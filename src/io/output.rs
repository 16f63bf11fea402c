use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::writers::{CsvWriter, JsonWriter, XlsxWriter, YamlWriter};
use crate::assessment::MigrationReport;
use crate::core::{MigrationError, Result};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    /// Excel workbook with one header row
    Excel,
    /// Comma-separated rows with one header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
            Self::Excel => f.write_str("excel"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "excel" | "xlsx" | "spreadsheet" => Ok(Self::Excel),
            "csv" => Ok(Self::Csv),
            other => Err(MigrationError::InvalidArgument(format!(
                "undefined output format '{other}', expected one of json, yaml, excel, csv"
            ))),
        }
    }
}

/// Parser hook for command-line flags
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    s.parse()
}

/// Target file for the Excel workbook
pub fn workbook_path(output: Option<&Path>, spreadsheet_path: &Path) -> PathBuf {
    output.unwrap_or(spreadsheet_path).to_path_buf()
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &MigrationReport) -> Result<()>;
}

fn stream(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    })
}

/// Writer for `format`.
///
/// JSON, YAML and CSV go to `output` or stdout. The workbook goes to
/// `output` when given and to `spreadsheet_path` otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    spreadsheet_path: &Path,
) -> Result<Box<dyn ReportWriter>> {
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(stream(output)?)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(stream(output)?)),
        OutputFormat::Csv => Box::new(CsvWriter::new(stream(output)?)),
        OutputFormat::Excel => Box::new(XlsxWriter::new(workbook_path(output, spreadsheet_path))),
    })
}
