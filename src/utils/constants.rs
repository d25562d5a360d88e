/// Axis degree bounds
pub const LAT_MAX_DEGREES: u32 = 90;
pub const LON_MAX_DEGREES: u32 = 180;

/// Canonical external precision: one decimal digit for DMS seconds
pub const SECONDS_SCALE: f64 = 10.0;

/// Canonical external precision: eight decimal digits for decimal degrees
pub const DECIMAL_DEGREES_SCALE: f64 = 1e8;

/// Rounding granularity of one-decimal seconds, in degrees. Two decimal
/// values closer than this are considered equal for round-trip purposes.
pub const ROUND_TRIP_TOLERANCE: f64 = 1.0 / 36000.0;

/// CSV column names
pub const COL_LOCATION: &str = "location";
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";

/// Policy option names accepted on the command line
pub const AMBIGUITY_PREFER_SOURCE: &str = "prefer-source";
pub const AMBIGUITY_REJECT: &str = "reject";
