use crate::converters::normalizer::normalize;
use crate::error::{ProcessingError, Result};
use crate::models::{Axis, DmsValue};
use crate::parsers::RawDms;
use crate::utils::constants::DECIMAL_DEGREES_SCALE;

/// Round a decimal-degree value to the canonical external precision of
/// eight decimal digits. Negative zero collapses to 0.0.
pub fn round_decimal_degrees(value: f64) -> f64 {
    let rounded = (value * DECIMAL_DEGREES_SCALE).round() / DECIMAL_DEGREES_SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a normalized DMS value to signed decimal degrees. South and West
/// hemispheres yield negative values.
pub fn dms_to_decimal(dms: &DmsValue) -> f64 {
    let magnitude = dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0;
    round_decimal_degrees(dms.hemisphere.sign() * magnitude)
}

/// Decompose a signed decimal-degree value into a normalized DMS value for
/// the given axis. The hemisphere is derived from the sign; non-negative
/// values map to North/East.
pub fn decimal_to_dms(decimal: f64, axis: Axis) -> Result<DmsValue> {
    let max = axis.max_degrees() as f64;
    if !decimal.is_finite() || decimal.abs() > max {
        return Err(ProcessingError::OutOfRange(format!(
            "{} value {} is outside [-{}, {}]",
            axis.name(),
            decimal,
            max,
            max
        )));
    }

    let hemisphere = axis.hemisphere_for(decimal);
    let magnitude = decimal.abs();

    let degrees = magnitude.floor() as u32;
    let minutes_total = (magnitude - degrees as f64) * 60.0;
    let minutes = minutes_total.floor() as u32;
    let seconds = (minutes_total - minutes as f64) * 60.0;

    // Rounding to one-decimal seconds may overflow the minute; the
    // normalizer resolves the carry
    normalize(RawDms {
        degrees,
        minutes,
        seconds,
        hemisphere,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hemisphere;
    use crate::utils::constants::ROUND_TRIP_TOLERANCE;

    #[test]
    fn test_dms_to_decimal() {
        let dms = DmsValue::new(34, 22, 5.6, Hemisphere::South);
        assert_eq!(dms_to_decimal(&dms), -34.36822222);

        let dms = DmsValue::new(71, 1, 53.0, Hemisphere::West);
        assert_eq!(dms_to_decimal(&dms), -71.03138889);

        let dms = DmsValue::new(12, 34, 56.7, Hemisphere::North);
        assert_eq!(dms_to_decimal(&dms), 12.58241667);

        let dms = DmsValue::new(67, 10, 30.0, Hemisphere::West);
        assert_eq!(dms_to_decimal(&dms), -67.175);
    }

    #[test]
    fn test_zero_magnitude_has_no_sign() {
        let dms = DmsValue::new(0, 0, 0.0, Hemisphere::South);
        let decimal = dms_to_decimal(&dms);
        assert_eq!(decimal, 0.0);
        assert!(!decimal.is_sign_negative());
    }

    #[test]
    fn test_decimal_to_dms() {
        let dms = decimal_to_dms(34.5, Axis::Latitude).unwrap();
        assert_eq!(dms, DmsValue::new(34, 30, 0.0, Hemisphere::North));

        let dms = decimal_to_dms(-70.2, Axis::Longitude).unwrap();
        assert_eq!(dms, DmsValue::new(70, 12, 0.0, Hemisphere::West));

        let dms = decimal_to_dms(-34.36822222, Axis::Latitude).unwrap();
        assert_eq!(dms, DmsValue::new(34, 22, 5.6, Hemisphere::South));
    }

    #[test]
    fn test_decimal_to_dms_bounds() {
        assert!(decimal_to_dms(90.0, Axis::Latitude).is_ok());
        assert!(decimal_to_dms(-90.0, Axis::Latitude).is_ok());
        assert!(decimal_to_dms(90.00000001, Axis::Latitude).is_err());
        assert!(decimal_to_dms(-180.00000001, Axis::Longitude).is_err());
        assert!(decimal_to_dms(120.0, Axis::Longitude).is_ok());
        assert!(decimal_to_dms(f64::NAN, Axis::Latitude).is_err());
    }

    #[test]
    fn test_round_trip_precision() {
        // decimal -> DMS -> decimal stays within the one-decimal-seconds
        // granularity across the axis range
        for i in -1800..=1800 {
            let decimal = i as f64 / 10.0 + 0.0123456;
            if decimal.abs() > 180.0 {
                continue;
            }
            let dms = decimal_to_dms(decimal, Axis::Longitude).unwrap();
            let round_tripped = dms_to_decimal(&dms);
            assert!(
                (round_tripped - decimal).abs() < ROUND_TRIP_TOLERANCE,
                "round trip drifted for {}: got {}",
                decimal,
                round_tripped
            );
        }
    }

    #[test]
    fn test_hemisphere_sign_properties() {
        let north = decimal_to_dms(12.5, Axis::Latitude).unwrap();
        assert!(dms_to_decimal(&north) >= 0.0);

        let west = decimal_to_dms(-67.175, Axis::Longitude).unwrap();
        assert!(dms_to_decimal(&west) < 0.0);
    }
}
