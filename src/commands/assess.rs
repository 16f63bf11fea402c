use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::assessment::{assess_migrations, AssessmentFile};
use crate::config::MigrationConfig;
use crate::io::output::{create_writer, workbook_path, OutputFormat};

#[derive(Debug, Clone)]
pub struct AssessConfig {
    pub migrations: Vec<String>,
    pub assessments: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub spreadsheet_path: Option<PathBuf>,
}

impl AssessConfig {
    /// Command-line values win over configured defaults
    fn resolve(&self, settings: &MigrationConfig) -> (OutputFormat, PathBuf) {
        let format = self.format.unwrap_or_else(|| settings.output.format());
        let spreadsheet = self
            .spreadsheet_path
            .clone()
            .unwrap_or_else(|| settings.output.spreadsheet_path());
        (format, spreadsheet)
    }
}

pub fn run_assess(config: AssessConfig, settings: &MigrationConfig) -> Result<()> {
    let (format, spreadsheet_path) = config.resolve(settings);

    let source = AssessmentFile::from_path(&config.assessments).with_context(|| {
        format!(
            "Failed to load assessments from {}",
            config.assessments.display()
        )
    })?;

    let report = assess_migrations(&source, &config.migrations)?;
    tracing::info!(
        migrations = report.migrations.len(),
        rows = report.row_count(),
        %format,
        "Writing migration report"
    );

    let mut writer = create_writer(format, config.output.as_deref(), &spreadsheet_path)
        .context("Failed to open report output")?;
    writer.write_report(&report)?;

    if format == OutputFormat::Excel {
        let path = workbook_path(config.output.as_deref(), &spreadsheet_path);
        eprintln!("Wrote spreadsheet to {}", path.display());
    }
    Ok(())
}
