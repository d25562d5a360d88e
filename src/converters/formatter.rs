use crate::converters::policy::{ConversionPolicy, DecimalSeparator, DegreePadding};
use crate::models::{Axis, DmsValue};

/// Render a normalized DMS value in the canonical fixed-width form:
/// two-digit zero-padded latitude degrees, longitude degrees per policy,
/// two-digit minutes, one-decimal seconds zero-padded to width 4, and the
/// uppercase hemisphere letter appended with no separator.
pub fn format_dms(dms: &DmsValue, policy: &ConversionPolicy) -> String {
    let degrees = match dms.axis() {
        Axis::Latitude => format!("{:02}", dms.degrees),
        Axis::Longitude => match policy.longitude_padding {
            DegreePadding::Unpadded => dms.degrees.to_string(),
            DegreePadding::ZeroPadded => format!("{:03}", dms.degrees),
        },
    };

    let mut seconds = format!("{:04.1}", dms.seconds);
    if policy.decimal_separator == DecimalSeparator::Comma {
        seconds = seconds.replace('.', ",");
    }

    format!(
        "{}°{:02}'{}\"{}",
        degrees,
        dms.minutes,
        seconds,
        dms.hemisphere.letter()
    )
}

/// Render a latitude/longitude pair joined by one space.
pub fn format_pair(latitude: &DmsValue, longitude: &DmsValue, policy: &ConversionPolicy) -> String {
    format!(
        "{} {}",
        format_dms(latitude, policy),
        format_dms(longitude, policy)
    )
}
