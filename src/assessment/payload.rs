use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Migration metrics collected for one migrated instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentPayload {
    pub instance_name: String,
    pub source_tenant_name: String,
    #[serde(default)]
    pub storage: StorageAssessment,
    pub migration: MigrationTiming,
}

/// Storage footprint of an instance.
///
/// `image` is absent when the source image was removed after migration.
/// `flavor` and `volumes` are optional only so that their absence can be
/// reported with the instance name instead of as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<FlavorAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<VolumeAssessment>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAssessment {
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorAssessment {
    pub flavor_disk_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeAssessment {
    pub size_bytes: u64,
}

/// Timing of the migration; units are whatever the producer reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationTiming {
    #[serde(default)]
    pub migration_time: Value,
}
