use std::io::Write;

use crate::assessment::MigrationReport;
use crate::core::Result;
use crate::io::output::ReportWriter;

/// Block-style YAML
pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for YamlWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> Result<()> {
        let yaml = serde_yaml::to_string(report)?;
        self.writer.write_all(yaml.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
