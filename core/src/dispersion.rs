//! # Granulation RV Dispersion
//!
//! Radial-velocity jitter from granulation relative to the Sun. The number of
//! granules on the visible disc is proxied by `(M / (T·R))²`; the jitter
//! scales as the convective blueshift over the square root of that count.

use granulation_common::constants::SUN_GRANULE_TEFF;
use granulation_common::{FormulaError, FormulaResult, Quantity};
use tracing::debug;

use crate::guard;
use crate::vectorized::{self, check_len};

/// Solar characteristic dispersion, `1 / sqrt(1 / 5772²)`.
fn solar_dispersion() -> f64 {
    let ngsun = 1.0 / SUN_GRANULE_TEFF.powi(2);
    1.0 / ngsun.sqrt()
}

/// Unnormalised stellar dispersion, `CB / sqrt(ng)`.
fn stellar_dispersion(blueshift: f64, teff: f64, mass: f64, radius: f64) -> FormulaResult<f64> {
    guard::finite(Quantity::Blueshift, blueshift)?;
    guard::non_zero(Quantity::Temperature, teff)?;
    guard::non_zero(Quantity::Mass, mass)?;
    guard::non_zero(Quantity::Radius, radius)?;

    let ng = (mass / (teff * radius)).powi(2);
    if ng == 0.0 {
        return Err(FormulaError::Zero {
            quantity: Quantity::GranuleCount,
        });
    }
    Ok(blueshift / ng.sqrt())
}

/// Granulation RV dispersion of a star relative to the Sun.
///
/// `blueshift` is used as given; it is not checked against
/// [`convective_blueshift`](crate::convective_blueshift). Fails when the
/// granule-count proxy underflows to zero or the result is not finite.
///
/// # Arguments
///
/// * `blueshift` - Convective blueshift
/// * `teff` - Effective temperature in Kelvin
/// * `mass` - Mass in solar masses
/// * `radius` - Radius in solar radii
pub fn radial_velocity_dispersion(blueshift: f64, teff: f64, mass: f64, radius: f64) -> FormulaResult<f64> {
    let sigmarv = stellar_dispersion(blueshift, teff, mass, radius)?;
    let sigma_rv = sigmarv / solar_dispersion();

    debug!(blueshift, teff, mass, radius, sigma_rv, "rv dispersion");
    guard::finite(Quantity::Dispersion, sigma_rv)
}

/// Absolute uncertainty of [`radial_velocity_dispersion`], combining the
/// relative uncertainties of all four inputs in quadrature.
#[allow(clippy::too_many_arguments)]
pub fn radial_velocity_dispersion_error(
    blueshift: f64,
    teff: f64,
    mass: f64,
    radius: f64,
    err_blueshift: f64,
    err_teff: f64,
    err_mass: f64,
    err_radius: f64,
) -> FormulaResult<f64> {
    guard::non_zero(Quantity::Blueshift, blueshift)?;
    let sigmarv = stellar_dispersion(blueshift, teff, mass, radius)?;

    let relative = ((err_blueshift / blueshift).powi(2)
        + (err_teff / teff).powi(2)
        + (err_mass / mass).powi(2)
        + (err_radius / radius).powi(2))
    .sqrt();
    let err_sigma_rv = (sigmarv * relative) / solar_dispersion();

    debug!(relative, err_sigma_rv, "rv dispersion error");
    guard::finite(Quantity::DispersionUncertainty, err_sigma_rv)
}

/// Equal-length columns of dispersion inputs, or of their uncertainties.
#[derive(Debug, Clone, Copy)]
pub struct DispersionSeries<'a> {
    pub blueshift: &'a [f64],
    pub teff: &'a [f64],
    pub mass: &'a [f64],
    pub radius: &'a [f64],
}

impl DispersionSeries<'_> {
    pub fn len(&self) -> usize {
        self.blueshift.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueshift.is_empty()
    }

    fn check_columns(&self, names: [&'static str; 4], expected: usize) -> FormulaResult<()> {
        check_len(names[0], expected, self.blueshift)?;
        check_len(names[1], expected, self.teff)?;
        check_len(names[2], expected, self.mass)?;
        check_len(names[3], expected, self.radius)
    }
}

/// Element-wise [`radial_velocity_dispersion`].
pub fn radial_velocity_dispersion_many(values: &DispersionSeries) -> FormulaResult<Vec<f64>> {
    let len = values.len();
    values.check_columns(["blueshift", "teff", "mass", "radius"], len)?;

    vectorized::evaluate(len, |i| {
        radial_velocity_dispersion(values.blueshift[i], values.teff[i], values.mass[i], values.radius[i])
    })
}

/// Element-wise [`radial_velocity_dispersion_error`]. `errors` holds the
/// absolute uncertainty of each column of `values`.
pub fn radial_velocity_dispersion_error_many(
    values: &DispersionSeries,
    errors: &DispersionSeries,
) -> FormulaResult<Vec<f64>> {
    let len = values.len();
    values.check_columns(["blueshift", "teff", "mass", "radius"], len)?;
    errors.check_columns(["err_blueshift", "err_teff", "err_mass", "err_radius"], len)?;

    vectorized::evaluate(len, |i| {
        radial_velocity_dispersion_error(
            values.blueshift[i],
            values.teff[i],
            values.mass[i],
            values.radius[i],
            errors.blueshift[i],
            errors.teff[i],
            errors.mass[i],
            errors.radius[i],
        )
    })
}
