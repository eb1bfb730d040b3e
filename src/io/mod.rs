//! Input/output helpers.
//!
//! - point text ingest + validation (`points`)
//! - fitted-line JSON read/write (`line_file`)

pub mod line_file;
pub mod points;

pub use line_file::*;
pub use points::*;
