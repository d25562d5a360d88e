use crate::error::{ProcessingError, Result};
use crate::utils::constants::{AMBIGUITY_PREFER_SOURCE, AMBIGUITY_REJECT};

/// Decimal separator written in the seconds field of canonical DMS output.
/// External consumers require both conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    #[default]
    Point,
    Comma,
}

/// Zero-padding of the longitude degree field. Latitude degrees are always
/// two-digit zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreePadding {
    #[default]
    Unpadded,
    ZeroPadded,
}

/// How a row carrying both a DMS text field and decimal fields is handled
/// when the two disagree.
///
/// `PreferSource` (the default) lets the conversion direction pick the
/// authoritative field: DMS text when converting text to decimal, decimal
/// fields when converting decimal to text. The other side is ignored.
/// `Reject` fails the row with `AmbiguousSource` when both sides are
/// well-formed and disagree beyond the one-decimal-seconds granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityPolicy {
    #[default]
    PreferSource,
    Reject,
}

impl AmbiguityPolicy {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            AMBIGUITY_PREFER_SOURCE => Ok(AmbiguityPolicy::PreferSource),
            AMBIGUITY_REJECT => Ok(AmbiguityPolicy::Reject),
            other => Err(ProcessingError::Config(format!(
                "unknown ambiguity policy: '{}' (expected '{}' or '{}')",
                other, AMBIGUITY_PREFER_SOURCE, AMBIGUITY_REJECT
            ))),
        }
    }
}

/// One configuration object unifying the formatting and precedence variants
/// observed across external consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionPolicy {
    pub decimal_separator: DecimalSeparator,
    pub longitude_padding: DegreePadding,
    pub ambiguity: AmbiguityPolicy,
}

impl ConversionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimal_comma(mut self, comma: bool) -> Self {
        self.decimal_separator = if comma {
            DecimalSeparator::Comma
        } else {
            DecimalSeparator::Point
        };
        self
    }

    pub fn with_padded_longitude(mut self, padded: bool) -> Self {
        self.longitude_padding = if padded {
            DegreePadding::ZeroPadded
        } else {
            DegreePadding::Unpadded
        };
        self
    }

    pub fn with_ambiguity(mut self, name: &str) -> Result<Self> {
        self.ambiguity = AmbiguityPolicy::from_name(name)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ConversionPolicy::new();
        assert_eq!(policy.decimal_separator, DecimalSeparator::Point);
        assert_eq!(policy.longitude_padding, DegreePadding::Unpadded);
        assert_eq!(policy.ambiguity, AmbiguityPolicy::PreferSource);
    }

    #[test]
    fn test_ambiguity_policy_names() {
        assert_eq!(
            AmbiguityPolicy::from_name("prefer-source").unwrap(),
            AmbiguityPolicy::PreferSource
        );
        assert_eq!(
            AmbiguityPolicy::from_name("reject").unwrap(),
            AmbiguityPolicy::Reject
        );
        assert!(AmbiguityPolicy::from_name("strict").is_err());
    }

    #[test]
    fn test_policy_builders() {
        let policy = ConversionPolicy::new()
            .with_decimal_comma(true)
            .with_padded_longitude(true)
            .with_ambiguity("reject")
            .unwrap();

        assert_eq!(policy.decimal_separator, DecimalSeparator::Comma);
        assert_eq!(policy.longitude_padding, DegreePadding::ZeroPadded);
        assert_eq!(policy.ambiguity, AmbiguityPolicy::Reject);
    }
}
