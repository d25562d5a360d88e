use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{BatchReport, LocationRow, RowUpdate};
use crate::utils::constants::{COL_LATITUDE, COL_LOCATION, COL_LONGITUDE};

/// Writes location rows back to CSV, applying computed updates by row index
/// and passing skipped or failed rows through with their original cells.
pub struct RowWriter;

impl RowWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_rows(
        &self,
        path: &Path,
        rows: &[LocationRow],
        report: &BatchReport,
    ) -> Result<()> {
        let updates: HashMap<usize, &RowUpdate> =
            report.updates.iter().map(|update| (update.row, update)).collect();

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record([COL_LOCATION, COL_LATITUDE, COL_LONGITUDE])?;

        for (index, row) in rows.iter().enumerate() {
            match updates.get(&index) {
                Some(update) => {
                    let latitude = update.latitude.to_string();
                    let longitude = update.longitude.to_string();
                    writer.write_record([
                        update.location_text.as_str(),
                        latitude.as_str(),
                        longitude.as_str(),
                    ])?
                }
                None => writer.write_record([
                    row.location_text.as_deref().unwrap_or(""),
                    row.latitude_text.as_deref().unwrap_or(""),
                    row.longitude_text.as_deref().unwrap_or(""),
                ])?,
            }
        }

        writer.flush()?;
        info!(
            rows = rows.len(),
            updates = report.updates.len(),
            path = %path.display(),
            "wrote converted rows"
        );
        Ok(())
    }

    /// Write the full batch report, including per-row failures, as JSON for
    /// downstream tooling.
    pub fn write_report_json(&self, path: &Path, report: &BatchReport) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, report)?;
        Ok(())
    }
}

impl Default for RowWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::{BatchMapper, Direction};
    use crate::readers::RowReader;
    use tempfile::TempDir;

    #[test]
    fn test_write_rows_applies_updates() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let output_path = temp_dir.path().join("out.csv");

        let rows = vec![
            LocationRow::new(None, Some("34,5".to_string()), Some("-70,2".to_string())),
            LocationRow::new(Some("bad text".to_string()), None, None),
        ];

        let mapper = BatchMapper::new();
        let report = mapper.map_rows(&rows, Direction::DecimalToText);

        let writer = RowWriter::new();
        writer.write_rows(&output_path, &rows, &report)?;

        let reader = RowReader::new();
        let written = reader.read_rows(&output_path)?;

        assert_eq!(written.len(), 2);
        assert_eq!(
            written[0].location_text.as_deref(),
            Some("34°30'00.0\"N 70°12'00.0\"W")
        );
        assert_eq!(written[0].latitude_text.as_deref(), Some("34.5"));
        // Row without decimal source passes through untouched
        assert_eq!(written[1].location_text.as_deref(), Some("bad text"));

        Ok(())
    }

    #[test]
    fn test_write_report_json() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let report_path = temp_dir.path().join("report.json");

        let rows = vec![LocationRow::new(Some("garbage".to_string()), None, None)];
        let report = BatchMapper::new().map_rows(&rows, Direction::TextToDecimal);

        let writer = RowWriter::new();
        writer.write_report_json(&report_path, &report)?;

        let contents = std::fs::read_to_string(&report_path)?;
        assert!(contents.contains("\"failed_rows\": 1"));
        assert!(contents.contains("garbage"));

        Ok(())
    }
}
