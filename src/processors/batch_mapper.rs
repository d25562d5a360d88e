use tracing::{debug, info, warn};
use validator::Validate;

use crate::converters::{
    round_decimal_degrees, AmbiguityPolicy, ConversionPolicy, CoordinateConverter,
};
use crate::error::{ProcessingError, Result};
use crate::models::{BatchReport, GeoCoordinate, LocationRow, RowFailure, RowUpdate};
use crate::parsers::parse_decimal_degrees;
use crate::utils::constants::ROUND_TRIP_TOLERANCE;

/// Which way a batch converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TextToDecimal,
    DecimalToText,
}

/// Applies coordinate conversion to a sequence of rows, in input order,
/// recovering every failure at the row level. Performs no I/O; persisting
/// the returned updates is the caller's responsibility.
pub struct BatchMapper {
    converter: CoordinateConverter,
}

impl BatchMapper {
    pub fn new() -> Self {
        Self::with_policy(ConversionPolicy::default())
    }

    pub fn with_policy(policy: ConversionPolicy) -> Self {
        Self {
            converter: CoordinateConverter::with_policy(policy),
        }
    }

    /// Map every row, producing the full set of computed updates and
    /// per-row failures. One row's failure never aborts the batch.
    pub fn map_rows(&self, rows: &[LocationRow], direction: Direction) -> BatchReport {
        let mut report = BatchReport::new(rows.len());

        for (index, row) in rows.iter().enumerate() {
            match self.map_row(index, row, direction) {
                Ok(Some(update)) => {
                    debug!(row = index, location = %update.location_text, "row converted");
                    report.converted_rows += 1;
                    report.updates.push(update);
                }
                Ok(None) => {
                    report.skipped_rows += 1;
                }
                Err(error) => {
                    warn!(row = index, %error, "row conversion failed");
                    report.failed_rows += 1;
                    report.failures.push(RowFailure::from_error(
                        index,
                        &source_text(row, direction),
                        &error,
                    ));
                }
            }
        }

        info!(
            total = report.total_rows,
            converted = report.converted_rows,
            skipped = report.skipped_rows,
            failed = report.failed_rows,
            "batch mapping complete"
        );

        report
    }

    fn map_row(
        &self,
        index: usize,
        row: &LocationRow,
        direction: Direction,
    ) -> Result<Option<RowUpdate>> {
        match direction {
            Direction::TextToDecimal => self.map_text_to_decimal(index, row),
            Direction::DecimalToText => self.map_decimal_to_text(index, row),
        }
    }

    /// DMS text is the authoritative source in this direction; decimal
    /// fields only matter under the `Reject` ambiguity policy.
    fn map_text_to_decimal(&self, index: usize, row: &LocationRow) -> Result<Option<RowUpdate>> {
        if !row.has_location_text() {
            return Ok(None);
        }

        let text = row.location_text.as_deref().unwrap_or_default();
        let (coordinate, canonical) = self.converter.text_to_coordinate(text)?;

        if self.converter.policy().ambiguity == AmbiguityPolicy::Reject {
            self.check_agreement(&coordinate, self.decimal_reading(row))?;
        }

        let update = RowUpdate::new(index, canonical, coordinate.latitude, coordinate.longitude);
        update.validate()?;
        Ok(Some(update))
    }

    /// Decimal fields are the authoritative source in this direction.
    fn map_decimal_to_text(&self, index: usize, row: &LocationRow) -> Result<Option<RowUpdate>> {
        if !row.has_latitude_text() && !row.has_longitude_text() {
            return Ok(None);
        }

        if !row.has_decimal_pair() {
            let missing = if row.has_latitude_text() {
                "latitude value present without a longitude value"
            } else {
                "longitude value present without a latitude value"
            };
            return Err(ProcessingError::InvalidFormat(missing.to_string()));
        }

        let latitude_text = row.latitude_text.as_deref().unwrap_or_default();
        let longitude_text = row.longitude_text.as_deref().unwrap_or_default();

        let coordinate = GeoCoordinate::new(
            round_decimal_degrees(parse_decimal_degrees(latitude_text)?),
            round_decimal_degrees(parse_decimal_degrees(longitude_text)?),
        );

        let location_text = self.converter.coordinate_to_text(&coordinate)?;

        if self.converter.policy().ambiguity == AmbiguityPolicy::Reject {
            self.check_agreement(&coordinate, self.text_reading(row))?;
        }

        let update = RowUpdate::new(
            index,
            location_text,
            coordinate.latitude,
            coordinate.longitude,
        );
        update.validate()?;
        Ok(Some(update))
    }

    /// Under `Reject`, a row whose secondary source is well-formed and
    /// disagrees with the authoritative value beyond the one-decimal-seconds
    /// granularity is ambiguous. A malformed or absent secondary source is
    /// ignored, since it never feeds the output.
    fn check_agreement(
        &self,
        authoritative: &GeoCoordinate,
        secondary: Option<GeoCoordinate>,
    ) -> Result<()> {
        let Some(secondary) = secondary else {
            return Ok(());
        };

        let latitude_delta = (secondary.latitude - authoritative.latitude).abs();
        let longitude_delta = (secondary.longitude - authoritative.longitude).abs();

        if latitude_delta > ROUND_TRIP_TOLERANCE || longitude_delta > ROUND_TRIP_TOLERANCE {
            return Err(ProcessingError::AmbiguousSource(format!(
                "authoritative source gives ({}, {}) but the row also carries ({}, {})",
                authoritative.latitude,
                authoritative.longitude,
                secondary.latitude,
                secondary.longitude
            )));
        }

        Ok(())
    }

    /// The row's decimal fields as a coordinate, if both are present and
    /// well-formed.
    fn decimal_reading(&self, row: &LocationRow) -> Option<GeoCoordinate> {
        if !row.has_decimal_pair() {
            return None;
        }

        let latitude = parse_decimal_degrees(row.latitude_text.as_deref()?).ok()?;
        let longitude = parse_decimal_degrees(row.longitude_text.as_deref()?).ok()?;

        Some(GeoCoordinate::new(
            round_decimal_degrees(latitude),
            round_decimal_degrees(longitude),
        ))
    }

    /// The row's DMS text as a coordinate, if present and well-formed.
    fn text_reading(&self, row: &LocationRow) -> Option<GeoCoordinate> {
        if !row.has_location_text() {
            return None;
        }

        self.converter
            .text_to_coordinate(row.location_text.as_deref()?)
            .ok()
            .map(|(coordinate, _)| coordinate)
    }
}

impl Default for BatchMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn source_text(row: &LocationRow, direction: Direction) -> String {
    match direction {
        Direction::TextToDecimal => row.location_text.clone().unwrap_or_default(),
        Direction::DecimalToText => format!(
            "lat='{}' lon='{}'",
            row.latitude_text.as_deref().unwrap_or_default(),
            row.longitude_text.as_deref().unwrap_or_default()
        ),
    }
}
