//! Platform-specific infrastructure utilities.

pub mod paths;

pub use paths::get_data_dir;
