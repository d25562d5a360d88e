pub mod decimal;
pub mod dms;

pub use decimal::parse_decimal_degrees;
pub use dms::{DmsParser, RawDms};
