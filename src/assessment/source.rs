use rayon::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::payload::AssessmentPayload;
use super::report::{MigrationReport, MigrationRows, ReportRow};
use crate::core::{MigrationError, Result};
use crate::resources::inventory::is_yaml_path;

/// Producer of per-instance assessments for a migration.
///
/// The real producer queries the source cloud and the migration service;
/// this crate only consumes the payload shape.
pub trait AssessmentSource: Sync {
    fn get_migration_assessment(&self, migration_id: &str) -> Result<Vec<AssessmentPayload>>;
}

/// Assessments exported to a JSON or YAML file, keyed by migration id
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AssessmentFile {
    assessments: BTreeMap<String, Vec<AssessmentPayload>>,
}

impl AssessmentFile {
    pub fn new(assessments: BTreeMap<String, Vec<AssessmentPayload>>) -> Self {
        Self { assessments }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: Self = if is_yaml_path(path) {
            serde_yaml::from_str(&contents)?
        } else {
            serde_json::from_str(&contents)?
        };
        tracing::debug!(
            migrations = file.assessments.len(),
            "Loaded assessments from {}",
            path.display()
        );
        Ok(file)
    }
}

impl AssessmentSource for AssessmentFile {
    fn get_migration_assessment(&self, migration_id: &str) -> Result<Vec<AssessmentPayload>> {
        self.assessments
            .get(migration_id)
            .cloned()
            .ok_or_else(|| MigrationError::MigrationNotFound(migration_id.to_string()))
    }
}

/// Assess every migration and shape the results into report rows.
///
/// Migrations are independent and assessed in parallel; the report keeps the
/// order of `migration_ids`.
pub fn assess_migrations<A: AssessmentSource + ?Sized>(
    source: &A,
    migration_ids: &[String],
) -> Result<MigrationReport> {
    let migrations = migration_ids
        .par_iter()
        .map(|migration_id| {
            let _span = tracing::info_span!("assess", migration = migration_id.as_str()).entered();
            let payloads = source.get_migration_assessment(migration_id)?;
            let rows = payloads
                .iter()
                .map(ReportRow::from_payload)
                .collect::<Result<Vec<_>>>()?;
            tracing::info!(instances = rows.len(), "Assessed migration");
            Ok(MigrationRows {
                migration_id: migration_id.clone(),
                rows,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MigrationReport { migrations })
}
