//! Excel workbook report.
//!
//! Size columns are written as numeric cells so the sheet can be summed
//! and sorted; a deleted image keeps the literal `deleted` text.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::PathBuf;

use crate::assessment::{ImageSize, MigrationReport, ReportRow, REPORT_COLUMNS};
use crate::core::Result;
use crate::io::output::ReportWriter;

pub struct XlsxWriter {
    path: PathBuf,
}

impl XlsxWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportWriter for XlsxWriter {
    fn write_report(&mut self, report: &MigrationReport) -> Result<()> {
        tracing::debug!("Writing workbook to {}", self.path.display());
        let mut workbook = build_workbook(report)?;
        workbook.save(&self.path)?;
        Ok(())
    }
}

/// Single-sheet workbook: a bold header row, then one row per instance
pub fn build_workbook(report: &MigrationReport) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header = Format::new().set_bold();
    for (col, title) in (0u16..).zip(REPORT_COLUMNS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }
    for (row_num, row) in (1u32..).zip(report.rows()) {
        write_row(sheet, row_num, row)?;
    }

    Ok(workbook)
}

fn write_row(sheet: &mut Worksheet, row_num: u32, row: &ReportRow) -> Result<()> {
    sheet.write_string(row_num, 0, row.vm_name.as_str())?;
    sheet.write_string(row_num, 1, row.source_tenant.as_str())?;
    sheet.write_string(row_num, 2, row.destination_tenant.as_str())?;

    match row.image_size {
        ImageSize::Gigabytes(gb) => sheet.write_number(row_num, 3, gb as f64)?,
        ImageSize::Deleted => sheet.write_string(row_num, 3, "deleted")?,
    };
    sheet.write_number(row_num, 4, row.flavor_size_gb as f64)?;
    sheet.write_number(row_num, 5, row.volumes_size_gb as f64)?;

    if let Some(seconds) = row.migration_time.as_f64() {
        sheet.write_number(row_num, 6, seconds)?;
    } else if !row.migration_time.is_null() {
        sheet.write_string(row_num, 6, row.migration_time_text().as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::MigrationRows;
    use tempfile::TempDir;

    fn row(name: &str, image_size: ImageSize) -> ReportRow {
        ReportRow {
            vm_name: name.to_string(),
            source_tenant: "prod".to_string(),
            destination_tenant: "prod-Migrated".to_string(),
            image_size,
            flavor_size_gb: 20,
            volumes_size_gb: 5,
            migration_time: serde_json::json!("0:01:01"),
        }
    }

    fn report() -> MigrationReport {
        MigrationReport {
            migrations: vec![MigrationRows {
                migration_id: "m1".to_string(),
                rows: vec![
                    row("web-1", ImageSize::Gigabytes(4)),
                    row("db-1", ImageSize::Deleted),
                ],
            }],
        }
    }

    #[test]
    fn test_workbook_is_zip_container() {
        let bytes = build_workbook(&report()).unwrap().save_to_buffer().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_report_creates_xlsx_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("migration_assessment.xlsx");

        XlsxWriter::new(&path).write_report(&report()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_report_still_writes_header_sheet() {
        let bytes = build_workbook(&MigrationReport::default())
            .unwrap()
            .save_to_buffer()
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
