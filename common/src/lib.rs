//! # Granulation Common
//!
//! Shared vocabulary for the workspace:
//!
//! * **[`constants`]**: solar reference values and formula coefficients.
//! * **[`star`]**: the immutable star parameter record.
//! * **[`catalog`]**: the static star table and selection parsing.
//! * **[`config`]**: run options and the fixed uncertainty assumptions.
//! * **[`error`]**: error types shared by the formula and catalogue layers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod star;

pub use error::{FormulaError, FormulaResult, Quantity};
pub use star::Star;
