//! Shared error types for the assessor

use std::path::PathBuf;
use thiserror::Error;

use crate::resources::ResourceKind;

/// Main error type for migration assessment operations
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A resource lookup by name or id found nothing
    #[error("{kind} '{name_or_id}' not found")]
    NotFound {
        kind: ResourceKind,
        name_or_id: String,
    },

    /// No assessment exists for a migration id
    #[error("no assessment found for migration '{0}'")]
    MigrationNotFound(String),

    /// A lookup by name matched more than one resource
    #[error("{count} {kind} resources are named '{name}', use an id instead")]
    AmbiguousName {
        kind: ResourceKind,
        name: String,
        count: usize,
    },

    /// A mandatory field of an assessment payload is absent
    #[error("assessment for instance '{instance}' is missing '{field}'")]
    MissingField { instance: String, field: String },

    /// A caller-supplied value is not acceptable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Spreadsheet (CSV) errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Excel workbook errors
    #[error("Workbook error: {0}")]
    Workbook(String),
}

impl From<rust_xlsxwriter::XlsxError> for MigrationError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(err.to_string())
    }
}

impl MigrationError {
    /// Create a not-found error for a resource lookup
    pub fn not_found(kind: ResourceKind, name_or_id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name_or_id: name_or_id.into(),
        }
    }

    /// Create a missing-field error for an assessment payload
    pub fn missing_field(instance: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            instance: instance.into(),
            field: field.into(),
        }
    }

    /// Create a configuration error with optional file context
    pub fn configuration(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path,
        }
    }

    /// True for errors the operator can fix by changing input or config
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::Configuration { .. }
                | Self::AmbiguousName { .. }
                | Self::MissingField { .. }
                | Self::Toml(_)
        )
    }
}

/// Result type alias for assessor operations
pub type Result<T> = std::result::Result<T, MigrationError>;
