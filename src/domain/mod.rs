//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated inputs (`Point`, `PointSet`)
//! - computed values (`Line`, `Bounds`, `RSquared`)
//! - fit settings and outputs (`Precision`, `FitMethod`, `LineFit`, `FitConfig`, `LineFile`)

pub mod types;

pub use types::*;
