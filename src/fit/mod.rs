//! Line fitting.
//!
//! Responsibilities:
//!
//! - derive slope/intercept bounds from pairwise point lines (`bounds`)
//! - exact two-point and collinear fits (`exact`)
//! - build the angle/intercept search axes (`grid`)
//! - run the exhaustive grid search, optionally in parallel (`search`)
//! - score a line with r² (`goodness`)
//! - pick the right path for a point set (`fitter`)

pub mod bounds;
pub mod control;
pub mod exact;
pub mod fitter;
pub mod goodness;
pub mod grid;
pub mod search;

pub use bounds::*;
pub use control::*;
pub use exact::*;
pub use fitter::*;
pub use goodness::*;
pub use grid::*;
pub use search::*;
