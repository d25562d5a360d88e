pub mod converter;
pub mod decimal;
pub mod formatter;
pub mod normalizer;
pub mod policy;

pub use converter::CoordinateConverter;
pub use decimal::{decimal_to_dms, dms_to_decimal, round_decimal_degrees};
pub use formatter::{format_dms, format_pair};
pub use normalizer::normalize;
pub use policy::{AmbiguityPolicy, ConversionPolicy, DecimalSeparator, DegreePadding};
