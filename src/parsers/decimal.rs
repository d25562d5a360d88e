use crate::error::{ProcessingError, Result};

/// Parse a decimal-degree value from cell text. External consumers write
/// numeric text with either `.` or `,` as the decimal separator.
pub fn parse_decimal_degrees(text: &str) -> Result<f64> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ProcessingError::InvalidFormat(
            "empty decimal coordinate value".to_string(),
        ));
    }

    trimmed.replace(',', ".").parse::<f64>().map_err(|_| {
        ProcessingError::InvalidFormat(format!("invalid decimal coordinate value: '{}'", trimmed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_degrees() {
        assert!((parse_decimal_degrees("34.5").unwrap() - 34.5).abs() < 1e-12);
        assert!((parse_decimal_degrees("34,5").unwrap() - 34.5).abs() < 1e-12);
        assert!((parse_decimal_degrees("-70,2").unwrap() - -70.2).abs() < 1e-12);
        assert!((parse_decimal_degrees(" -0.1278 ").unwrap() - -0.1278).abs() < 1e-12);
    }

    #[test]
    fn test_parse_decimal_degrees_invalid() {
        assert!(parse_decimal_degrees("").is_err());
        assert!(parse_decimal_degrees("   ").is_err());
        assert!(parse_decimal_degrees("12.3.4").is_err());
        assert!(parse_decimal_degrees("north").is_err());
    }
}
