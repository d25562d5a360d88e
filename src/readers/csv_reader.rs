use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::models::LocationRow;
use crate::utils::constants::{COL_LATITUDE, COL_LOCATION, COL_LONGITUDE};

/// Reads location rows from a CSV file. Columns are resolved by header name
/// (`location`, `latitude`, `longitude`, case-insensitive); a missing column
/// simply yields empty cells for that field, so sheets carrying only one
/// representation are accepted. Without headers the columns are positional.
pub struct RowReader {
    has_headers: bool,
}

impl RowReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    pub fn read_rows(&self, path: &Path) -> Result<Vec<LocationRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_path(path)?;

        let columns = if self.has_headers {
            let headers = reader.headers()?.clone();
            ColumnIndexes::from_headers(&headers)?
        } else {
            ColumnIndexes::positional()
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(LocationRow::new(
                columns.location.and_then(|i| cell(&record, i)),
                columns.latitude.and_then(|i| cell(&record, i)),
                columns.longitude.and_then(|i| cell(&record, i)),
            ));
        }

        info!(rows = rows.len(), path = %path.display(), "read location rows");
        Ok(rows)
    }
}

impl Default for RowReader {
    fn default() -> Self {
        Self::new()
    }
}

struct ColumnIndexes {
    location: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnIndexes {
    fn positional() -> Self {
        Self {
            location: Some(0),
            latitude: Some(1),
            longitude: Some(2),
        }
    }

    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };

        let indexes = Self {
            location: position(COL_LOCATION),
            latitude: position(COL_LATITUDE),
            longitude: position(COL_LONGITUDE),
        };

        if indexes.location.is_none() && indexes.latitude.is_none() && indexes.longitude.is_none() {
            return Err(ProcessingError::Config(format!(
                "no '{}', '{}' or '{}' column found in header",
                COL_LOCATION, COL_LATITUDE, COL_LONGITUDE
            )));
        }

        Ok(indexes)
    }
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
