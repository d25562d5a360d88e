pub mod constants;
pub mod filename;

pub use constants::*;
pub use filename::generate_default_output_filename;
