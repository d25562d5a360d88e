use crate::error::{ProcessingError, Result};
use crate::models::DmsValue;
use crate::parsers::RawDms;
use crate::utils::constants::SECONDS_SCALE;

/// Round a seconds value to the canonical external precision of one
/// decimal digit.
pub fn round_seconds(seconds: f64) -> f64 {
    (seconds * SECONDS_SCALE).round() / SECONDS_SCALE
}

/// Validate raw DMS fields and resolve rounding overflow by carry
/// propagation: seconds reaching 60 carry into minutes, minutes reaching 60
/// carry into degrees. A post-carry degree value outside the axis bound is
/// an error. Re-applying to already-normalized input is a no-op.
pub fn normalize(raw: RawDms) -> Result<DmsValue> {
    let mut seconds = round_seconds(raw.seconds);
    let mut minutes = raw.minutes;
    let mut degrees = raw.degrees;

    // Tolerantly parsed input may carry more than one full minute or hour
    // in the lower fields
    while seconds >= 60.0 {
        seconds = round_seconds(seconds - 60.0);
        minutes += 1;
    }

    while minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }

    let axis = raw.hemisphere.axis();
    let max = axis.max_degrees();
    if degrees > max || (degrees == max && (minutes > 0 || seconds > 0.0)) {
        return Err(ProcessingError::OutOfRange(format!(
            "{}°{:02}'{:04.1}\"{} exceeds the {} bound of {}°",
            degrees,
            minutes,
            seconds,
            raw.hemisphere.letter(),
            axis.name(),
            max
        )));
    }

    Ok(DmsValue::new(degrees, minutes, seconds, raw.hemisphere))
}
