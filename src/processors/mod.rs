pub mod batch_mapper;

pub use batch_mapper::{BatchMapper, Direction};
