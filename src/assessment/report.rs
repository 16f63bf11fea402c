use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;
use std::fmt;

use super::payload::AssessmentPayload;
use crate::core::{MigrationError, Result};

/// Bytes per reported gigabyte (GiB)
pub const GI: u64 = 1 << 30;

/// Appended to a source tenant name to name its destination tenant
pub const TENANT_SUFFIX: &str = "-Migrated";

/// Report column headers, in column order
pub const REPORT_COLUMNS: [&str; 7] = [
    "VM Name",
    "Source Tenant Name",
    "Destination Tenant Name",
    "Glance Image Size(GB)",
    "VM Flavor Size(GB)",
    "VM Volumes(GB)",
    "VM Migration Time",
];

/// Whole gigabytes needed to hold `bytes`, rounded up
pub fn bytes_to_gb_ceil(bytes: u64) -> u64 {
    bytes.div_ceil(GI)
}

pub fn destination_tenant_name(source_tenant: &str) -> String {
    format!("{source_tenant}{TENANT_SUFFIX}")
}

/// Size of the source image, or a marker that it no longer exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Gigabytes(u64),
    Deleted,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gigabytes(gb) => write!(f, "{gb}"),
            Self::Deleted => f.write_str("deleted"),
        }
    }
}

impl Serialize for ImageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Gigabytes(gb) => serializer.serialize_u64(*gb),
            Self::Deleted => serializer.serialize_str("deleted"),
        }
    }
}

/// One line of the migration report
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReportRow {
    #[serde(rename = "VM Name")]
    pub vm_name: String,
    #[serde(rename = "Source Tenant Name")]
    pub source_tenant: String,
    #[serde(rename = "Destination Tenant Name")]
    pub destination_tenant: String,
    #[serde(rename = "Glance Image Size(GB)")]
    pub image_size: ImageSize,
    #[serde(rename = "VM Flavor Size(GB)")]
    pub flavor_size_gb: u64,
    #[serde(rename = "VM Volumes(GB)")]
    pub volumes_size_gb: u64,
    #[serde(rename = "VM Migration Time")]
    pub migration_time: Value,
}

impl ReportRow {
    /// Build a row; a payload without flavor or volumes fails the instance
    pub fn from_payload(payload: &AssessmentPayload) -> Result<Self> {
        let storage = &payload.storage;

        let image_size = storage
            .image
            .as_ref()
            .map(|image| ImageSize::Gigabytes(bytes_to_gb_ceil(image.size_bytes)))
            .unwrap_or(ImageSize::Deleted);

        let flavor = storage.flavor.as_ref().ok_or_else(|| {
            MigrationError::missing_field(&payload.instance_name, "storage.flavor")
        })?;

        let volumes = storage.volumes.as_ref().ok_or_else(|| {
            MigrationError::missing_field(&payload.instance_name, "storage.volumes")
        })?;
        let volume_bytes: u128 = volumes.iter().map(|v| u128::from(v.size_bytes)).sum();
        let volumes_size_gb = u64::try_from(volume_bytes.div_ceil(u128::from(GI))).map_err(|_| {
            MigrationError::InvalidArgument(format!(
                "volume sizes of instance '{}' exceed the reportable range",
                payload.instance_name
            ))
        })?;

        Ok(Self {
            vm_name: payload.instance_name.clone(),
            source_tenant: payload.source_tenant_name.clone(),
            destination_tenant: destination_tenant_name(&payload.source_tenant_name),
            image_size,
            flavor_size_gb: bytes_to_gb_ceil(flavor.flavor_disk_size),
            volumes_size_gb,
            migration_time: payload.migration.migration_time.clone(),
        })
    }

    /// Cell text for tabular writers, in column order
    pub fn cells(&self) -> [String; 7] {
        [
            self.vm_name.clone(),
            self.source_tenant.clone(),
            self.destination_tenant.clone(),
            self.image_size.to_string(),
            self.flavor_size_gb.to_string(),
            self.volumes_size_gb.to_string(),
            self.migration_time_text(),
        ]
    }

    /// Migration time as cell text; strings are unquoted and null is empty
    pub fn migration_time_text(&self) -> String {
        match &self.migration_time {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Rows for every payload in input order; the first bad payload fails the call
pub fn aggregate(assessments: &[Vec<AssessmentPayload>]) -> Result<Vec<ReportRow>> {
    assessments
        .iter()
        .flatten()
        .map(ReportRow::from_payload)
        .collect()
}

/// Report rows grouped by the migration they came from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
    pub migrations: Vec<MigrationRows>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MigrationRows {
    pub migration_id: String,
    pub rows: Vec<ReportRow>,
}

impl MigrationReport {
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.migrations.iter().flat_map(|m| m.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.migrations.iter().map(|m| m.rows.len()).sum()
    }
}

/// Serializes as a list of lists: one inner list of rows per migration
impl Serialize for MigrationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.migrations.len()))?;
        for migration in &self.migrations {
            seq.serialize_element(&migration.rows)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::payload::{
        FlavorAssessment, ImageAssessment, MigrationTiming, StorageAssessment, VolumeAssessment,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload(image: Option<u64>) -> AssessmentPayload {
        AssessmentPayload {
            instance_name: "web-1".to_string(),
            source_tenant_name: "prod".to_string(),
            storage: StorageAssessment {
                image: image.map(|size_bytes| ImageAssessment { size_bytes }),
                flavor: Some(FlavorAssessment {
                    flavor_disk_size: 20 * GI,
                }),
                volumes: Some(vec![
                    VolumeAssessment { size_bytes: GI },
                    VolumeAssessment { size_bytes: GI / 2 },
                ]),
            },
            migration: MigrationTiming {
                migration_time: json!(125),
            },
        }
    }

    #[test]
    fn test_ceiling_rounding() {
        assert_eq!(bytes_to_gb_ceil(0), 0);
        assert_eq!(bytes_to_gb_ceil(1), 1);
        assert_eq!(bytes_to_gb_ceil(3_221_225_472), 3);
        assert_eq!(bytes_to_gb_ceil(3_221_225_473), 4);
    }

    #[test]
    fn test_destination_tenant_name() {
        assert_eq!(destination_tenant_name("prod"), "prod-Migrated");
    }

    #[test]
    fn test_row_from_payload() {
        let row = ReportRow::from_payload(&payload(Some(3_221_225_473))).unwrap();
        assert_eq!(row.image_size, ImageSize::Gigabytes(4));
        assert_eq!(row.flavor_size_gb, 20);
        assert_eq!(row.volumes_size_gb, 2);
        assert_eq!(
            row.cells(),
            [
                "web-1".to_string(),
                "prod".to_string(),
                "prod-Migrated".to_string(),
                "4".to_string(),
                "20".to_string(),
                "2".to_string(),
                "125".to_string(),
            ]
        );
    }

    #[test]
    fn test_deleted_image() {
        let row = ReportRow::from_payload(&payload(None)).unwrap();
        assert_eq!(row.image_size, ImageSize::Deleted);
        assert_eq!(row.cells()[3], "deleted");
        assert_eq!(
            serde_json::to_value(&row).unwrap()["Glance Image Size(GB)"],
            json!("deleted")
        );
    }

    #[test]
    fn test_missing_flavor_fails() {
        let mut bad = payload(None);
        bad.storage.flavor = None;
        let err = ReportRow::from_payload(&bad).unwrap_err();
        assert!(err.to_string().contains("storage.flavor"));
    }

    #[test]
    fn test_missing_volumes_fails_but_empty_list_is_zero() {
        let mut bad = payload(None);
        bad.storage.volumes = None;
        assert!(ReportRow::from_payload(&bad).is_err());

        let mut empty = payload(None);
        empty.storage.volumes = Some(vec![]);
        assert_eq!(ReportRow::from_payload(&empty).unwrap().volumes_size_gb, 0);
    }

    #[test]
    fn test_volume_sum_beyond_u64_is_exact() {
        let mut large = payload(None);
        large.storage.volumes = Some(vec![
            VolumeAssessment {
                size_bytes: u64::MAX,
            },
            VolumeAssessment { size_bytes: 1 },
        ]);
        let row = ReportRow::from_payload(&large).unwrap();
        // (2^64 - 1 + 1) / 2^30
        assert_eq!(row.volumes_size_gb, 1 << 34);
    }

    #[test]
    fn test_aggregate_keeps_order_and_fails_fast() {
        let mut second = payload(None);
        second.instance_name = "db-1".to_string();
        let rows = aggregate(&[vec![payload(Some(GI))], vec![second.clone()]]).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.vm_name.as_str()).collect();
        assert_eq!(names, vec!["web-1", "db-1"]);

        second.storage.volumes = None;
        assert!(aggregate(&[vec![payload(Some(GI)), second]]).is_err());
    }

    #[test]
    fn test_report_serializes_as_list_of_lists() {
        let report = MigrationReport {
            migrations: vec![
                MigrationRows {
                    migration_id: "m1".to_string(),
                    rows: vec![ReportRow::from_payload(&payload(Some(GI))).unwrap()],
                },
                MigrationRows {
                    migration_id: "m2".to_string(),
                    rows: vec![],
                },
            ],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value[0][0]["VM Name"], json!("web-1"));
        assert_eq!(value[0][0]["Glance Image Size(GB)"], json!(1));
        assert_eq!(value[1], json!([]));
        assert_eq!(report.row_count(), 1);
    }
}
