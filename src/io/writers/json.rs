use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

use crate::assessment::MigrationReport;
use crate::core::Result;
use crate::io::output::ReportWriter;

/// Pretty-printed JSON with four-space indentation
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.writer, formatter);
        report.serialize(&mut serializer)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
