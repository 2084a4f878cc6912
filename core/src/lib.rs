//! # Granulation Core
//!
//! Closed-form scaling laws for the convective blueshift and the
//! granulation-driven radial-velocity dispersion of a star, both relative to
//! the Sun, with first-order error propagation.
//!
//! * **[`blueshift`]**: convective blueshift and its uncertainty.
//! * **[`dispersion`]**: granulation RV dispersion and its uncertainty.
//! * **[`report`]**: evaluates a list of stars and renders the results.
//!
//! Every formula has a scalar form and a `_many` form over equal-length
//! slices that is element-wise identical to the scalar one.

pub mod blueshift;
pub mod dispersion;
pub mod report;

mod guard;
mod vectorized;


pub use blueshift::{
    convective_blueshift, convective_blueshift_error, convective_blueshift_error_many,
    convective_blueshift_many,
};
pub use dispersion::{
    DispersionSeries, radial_velocity_dispersion, radial_velocity_dispersion_error,
    radial_velocity_dispersion_error_many, radial_velocity_dispersion_many,
};
pub use report::{StarOutcome, StarReport};
