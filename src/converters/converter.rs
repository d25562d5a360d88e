use tracing::debug;

use crate::converters::decimal::{decimal_to_dms, dms_to_decimal};
use crate::converters::formatter::{format_dms, format_pair};
use crate::converters::normalizer::normalize;
use crate::converters::policy::ConversionPolicy;
use crate::error::Result;
use crate::models::{Axis, GeoCoordinate};
use crate::parsers::DmsParser;

/// Facade over the parse, normalize, convert and format steps, configured
/// by one `ConversionPolicy`. Holds no state between conversions.
pub struct CoordinateConverter {
    parser: DmsParser,
    policy: ConversionPolicy,
}

impl CoordinateConverter {
    pub fn new() -> Self {
        Self::with_policy(ConversionPolicy::default())
    }

    pub fn with_policy(policy: ConversionPolicy) -> Self {
        Self {
            parser: DmsParser::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &ConversionPolicy {
        &self.policy
    }

    /// Convert combined DMS text to a decimal pair, also returning the
    /// canonicalized form of the input text.
    pub fn text_to_coordinate(&self, text: &str) -> Result<(GeoCoordinate, String)> {
        let (raw_latitude, raw_longitude) = self.parser.parse_pair(text)?;

        let latitude = normalize(raw_latitude)?;
        let longitude = normalize(raw_longitude)?;

        let coordinate =
            GeoCoordinate::new(dms_to_decimal(&latitude), dms_to_decimal(&longitude));
        let canonical = format_pair(&latitude, &longitude, &self.policy);

        debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "converted DMS text to decimal pair"
        );

        Ok((coordinate, canonical))
    }

    /// Convert a single DMS group for the given axis, returning the decimal
    /// value and the canonicalized group text.
    pub fn text_to_axis(&self, text: &str, axis: Axis) -> Result<(f64, String)> {
        let raw = self.parser.parse_single(text, axis)?;
        let dms = normalize(raw)?;
        Ok((dms_to_decimal(&dms), format_dms(&dms, &self.policy)))
    }

    /// Render a decimal pair as canonical DMS text.
    pub fn coordinate_to_text(&self, coordinate: &GeoCoordinate) -> Result<String> {
        let latitude = decimal_to_dms(coordinate.latitude, Axis::Latitude)?;
        let longitude = decimal_to_dms(coordinate.longitude, Axis::Longitude)?;
        Ok(format_pair(&latitude, &longitude, &self.policy))
    }

    /// Render a single signed decimal value as a canonical DMS group.
    pub fn axis_to_text(&self, decimal: f64, axis: Axis) -> Result<String> {
        let dms = decimal_to_dms(decimal, axis)?;
        Ok(format_dms(&dms, &self.policy))
    }
}

impl Default for CoordinateConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_to_coordinate() {
        let converter = CoordinateConverter::new();
        let (coordinate, canonical) = converter
            .text_to_coordinate("34°22'05.6\"S 71°01'53.0\"W")
            .unwrap();

        assert_eq!(coordinate.latitude, -34.36822222);
        assert_eq!(coordinate.longitude, -71.03138889);
        assert_eq!(canonical, "34°22'05.6\"S 71°01'53.0\"W");
    }

    #[test]
    fn test_text_to_coordinate_canonicalizes_messy_input() {
        let converter = CoordinateConverter::new();
        let (coordinate, canonical) = converter
            .text_to_coordinate("12°34'56.7\" N, 67°10'30\" W")
            .unwrap();

        assert_eq!(coordinate.latitude, 12.58241667);
        assert_eq!(coordinate.longitude, -67.175);
        assert_eq!(canonical, "12°34'56.7\"N 67°10'30.0\"W");
    }

    #[test]
    fn test_coordinate_to_text() {
        let converter = CoordinateConverter::new();
        let text = converter
            .coordinate_to_text(&GeoCoordinate::new(34.5, -70.2))
            .unwrap();
        assert_eq!(text, "34°30'00.0\"N 70°12'00.0\"W");
    }

    #[test]
    fn test_text_to_axis() {
        let converter = CoordinateConverter::new();
        let (decimal, canonical) = converter
            .text_to_axis("71°01'53,0\"W", Axis::Longitude)
            .unwrap();
        assert_eq!(decimal, -71.03138889);
        assert_eq!(canonical, "71°01'53.0\"W");
    }

    #[test]
    fn test_axis_to_text() {
        let converter = CoordinateConverter::new();
        let text = converter.axis_to_text(-34.36822222, Axis::Latitude).unwrap();
        assert_eq!(text, "34°22'05.6\"S");
    }

    #[test]
    fn test_formatting_is_fixed_point() {
        let converter = CoordinateConverter::new();

        // decimal -> text -> decimal -> text reproduces the first text
        let first = converter
            .coordinate_to_text(&GeoCoordinate::new(12.58241667, -67.175))
            .unwrap();
        let (coordinate, canonical) = converter.text_to_coordinate(&first).unwrap();
        assert_eq!(canonical, first);

        let second = converter.coordinate_to_text(&coordinate).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_excess_seconds_precision_rounds() {
        let converter = CoordinateConverter::new();
        let (_, canonical) = converter
            .text_to_coordinate("12°10'59.96\"N 67°10'30.04\"W")
            .unwrap();
        assert_eq!(canonical, "12°11'00.0\"N 67°10'30.0\"W");
    }
}
