pub mod coordinate;
pub mod row;

pub use coordinate::{Axis, DmsValue, GeoCoordinate, Hemisphere};
pub use row::{BatchReport, FailureKind, LocationRow, RowFailure, RowUpdate};
