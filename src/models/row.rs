use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ProcessingError;

/// One external data row as read from the row store. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRow {
    pub location_text: Option<String>,
    pub latitude_text: Option<String>,
    pub longitude_text: Option<String>,
}

impl LocationRow {
    pub fn new(
        location_text: Option<String>,
        latitude_text: Option<String>,
        longitude_text: Option<String>,
    ) -> Self {
        Self {
            location_text,
            latitude_text,
            longitude_text,
        }
    }

    pub fn has_location_text(&self) -> bool {
        self.location_text
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    pub fn has_decimal_pair(&self) -> bool {
        self.has_latitude_text() && self.has_longitude_text()
    }

    pub fn has_latitude_text(&self) -> bool {
        self.latitude_text
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    pub fn has_longitude_text(&self) -> bool {
        self.longitude_text
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

/// A computed update for one row: the canonical DMS text plus the decimal
/// pair rounded to 8 digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RowUpdate {
    pub row: usize,
    pub location_text: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl RowUpdate {
    pub fn new(row: usize, location_text: String, latitude: f64, longitude: f64) -> Self {
        Self {
            row,
            location_text,
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    InvalidFormat,
    OutOfRange,
    AmbiguousSource,
}

/// A per-row conversion failure, preserving the offending source text so a
/// human can correct it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowFailure {
    pub row: usize,
    pub kind: FailureKind,
    pub source_text: String,
    pub details: String,
}

impl RowFailure {
    pub fn from_error(row: usize, source_text: &str, error: &ProcessingError) -> Self {
        let kind = match error {
            ProcessingError::OutOfRange(_) => FailureKind::OutOfRange,
            ProcessingError::AmbiguousSource(_) => FailureKind::AmbiguousSource,
            _ => FailureKind::InvalidFormat,
        };

        Self {
            row,
            kind,
            source_text: source_text.to_string(),
            details: error.to_string(),
        }
    }
}

/// Outcome of mapping a batch of rows: all computed updates plus all per-row
/// failures, with summary counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub total_rows: usize,
    pub converted_rows: usize,
    pub skipped_rows: usize,
    pub failed_rows: usize,
    pub updates: Vec<RowUpdate>,
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Default::default()
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push("Batch Conversion Report".to_string());
        lines.push("=======================".to_string());
        lines.push(format!("Total rows:     {}", self.total_rows));
        lines.push(format!("Converted:      {}", self.converted_rows));
        lines.push(format!("Skipped (empty): {}", self.skipped_rows));
        lines.push(format!("Failed:         {}", self.failed_rows));

        if !self.failures.is_empty() {
            lines.push(String::new());
            lines.push("Failing rows:".to_string());
            for failure in &self.failures {
                lines.push(format!(
                    "  row {}: '{}' - {}",
                    failure.row, failure.source_text, failure.details
                ));
            }
        }

        lines.join("\n")
    }
}
