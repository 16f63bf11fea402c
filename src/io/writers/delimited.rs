use csv::Writer;
use std::io::Write;

use crate::assessment::{MigrationReport, REPORT_COLUMNS};
use crate::core::Result;
use crate::io::output::ReportWriter;

/// Comma-separated report: one header row followed by one row per instance
pub struct CsvWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::from_writer(writer),
        }
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> Result<()> {
        self.writer.write_record(REPORT_COLUMNS)?;
        for row in report.rows() {
            self.writer.write_record(row.cells())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
