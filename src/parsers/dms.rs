use regex::{Captures, Regex};

use crate::error::{ProcessingError, Result};
use crate::models::{Axis, Hemisphere};

/// One DMS group as written in the source: `34°22'05.6"S`. Degree glyphs
/// `°`/`º`, minute glyphs `'`/`’`, an optional second glyph `"`/`”`, an
/// optional `.`- or `,`-separated seconds fraction, and a case-insensitive
/// hemisphere letter that may sit adjacent to the seconds or be separated
/// by whitespace.
const DMS_GROUP: &str =
    r#"(\d{1,3})\s*[°º]\s*(\d{1,2})\s*['’]\s*(\d+(?:[.,]\d+)?)\s*["”]?\s*([NSEWnsew])"#;

/// Raw field extraction from one DMS group, before carry normalization.
/// Minutes and seconds may still violate their modulus range here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

/// Tokenizing parser for free-form DMS coordinate strings.
pub struct DmsParser {
    pair_pattern: Regex,
    single_pattern: Regex,
}

impl DmsParser {
    pub fn new() -> Self {
        let pair = format!(r"^\s*{DMS_GROUP}(?:\s*,\s*|\s+){DMS_GROUP}\s*$");
        let single = format!(r"^\s*{DMS_GROUP}\s*$");

        Self {
            pair_pattern: Regex::new(&pair).expect("valid DMS pair pattern"),
            single_pattern: Regex::new(&single).expect("valid DMS group pattern"),
        }
    }

    /// Extract a latitude/longitude group pair from a combined coordinate
    /// string. The first group must carry an N/S hemisphere and the second
    /// an E/W hemisphere.
    pub fn parse_pair(&self, input: &str) -> Result<(RawDms, RawDms)> {
        let captures = self.pair_pattern.captures(input).ok_or_else(|| {
            ProcessingError::InvalidFormat(format!(
                "expected two DMS groups 'DD°MM'SS.S\"H DDD°MM'SS.S\"H', got: '{}'",
                input.trim()
            ))
        })?;

        let latitude = extract_group(&captures, 1, input)?;
        let longitude = extract_group(&captures, 5, input)?;

        if latitude.hemisphere.axis() != Axis::Latitude {
            return Err(ProcessingError::InvalidFormat(format!(
                "first group must carry an N/S hemisphere, got '{}' in: '{}'",
                latitude.hemisphere.letter(),
                input.trim()
            )));
        }

        if longitude.hemisphere.axis() != Axis::Longitude {
            return Err(ProcessingError::InvalidFormat(format!(
                "second group must carry an E/W hemisphere, got '{}' in: '{}'",
                longitude.hemisphere.letter(),
                input.trim()
            )));
        }

        Ok((latitude, longitude))
    }

    /// Extract a single DMS group for the given axis.
    pub fn parse_single(&self, input: &str, axis: Axis) -> Result<RawDms> {
        let captures = self.single_pattern.captures(input).ok_or_else(|| {
            ProcessingError::InvalidFormat(format!(
                "expected a DMS group 'DD°MM'SS.S\"H', got: '{}'",
                input.trim()
            ))
        })?;

        let raw = extract_group(&captures, 1, input)?;

        if raw.hemisphere.axis() != axis {
            return Err(ProcessingError::InvalidFormat(format!(
                "hemisphere '{}' is not valid for {}: '{}'",
                raw.hemisphere.letter(),
                axis.name(),
                input.trim()
            )));
        }

        Ok(raw)
    }
}

impl Default for DmsParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert four consecutive capture groups into raw DMS fields. Malformed
/// numeric sub-tokens fold into the same `InvalidFormat` failure as a
/// non-matching token sequence.
fn extract_group(captures: &Captures, start: usize, input: &str) -> Result<RawDms> {
    let invalid = |token: &str| {
        ProcessingError::InvalidFormat(format!("invalid {} token in: '{}'", token, input.trim()))
    };

    let degrees = captures[start].parse::<u32>().map_err(|_| invalid("degree"))?;
    let minutes = captures[start + 1]
        .parse::<u32>()
        .map_err(|_| invalid("minute"))?;

    // Seconds may use either decimal separator
    let seconds = captures[start + 2]
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| invalid("second"))?;

    let hemisphere = captures[start + 3]
        .chars()
        .next()
        .and_then(Hemisphere::from_letter)
        .ok_or_else(|| invalid("hemisphere"))?;

    Ok(RawDms {
        degrees,
        minutes,
        seconds,
        hemisphere,
    })
}
