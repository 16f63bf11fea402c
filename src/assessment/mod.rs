//! Migration cost assessment: per-instance payloads to report rows.

pub mod payload;
pub mod report;
pub mod source;

pub use payload::{
    AssessmentPayload, FlavorAssessment, ImageAssessment, MigrationTiming, StorageAssessment,
    VolumeAssessment,
};
pub use report::{
    aggregate, bytes_to_gb_ceil, destination_tenant_name, ImageSize, MigrationReport,
    MigrationRows, ReportRow, GI, REPORT_COLUMNS, TENANT_SUFFIX,
};
pub use source::{assess_migrations, AssessmentFile, AssessmentSource};
