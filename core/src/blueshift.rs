//! # Convective Blueshift
//!
//! Ratio of a star's convective blueshift to the solar one, built from two
//! scaling laws normalised to the Sun:
//!
//! * granulation velocity: `T^(32/9) · g^(-2/9)`
//! * intensity contrast: `54.98·log10(T) − 4.80·log10(g) − 169.0`
//!
//! The blueshift ratio is `(I / I☉)² · (v / v☉)`.

use std::f64::consts::LN_10;

use granulation_common::constants::{
    INTENSITY_GRAVITY_COEFF, INTENSITY_OFFSET, INTENSITY_TEFF_COEFF, SUN_GRAVITY, SUN_TEFF,
    VELOCITY_EXPONENT_DENOM, VELOCITY_GRAVITY_EXPONENT, VELOCITY_GRAVITY_NUMER, VELOCITY_TEFF_EXPONENT,
    VELOCITY_TEFF_NUMER,
};
use granulation_common::{FormulaError, FormulaResult, Quantity};
use tracing::debug;

use crate::guard;
use crate::vectorized::{self, check_len};

fn velocity_scale(teff: f64, gravity: f64) -> f64 {
    teff.powf(VELOCITY_TEFF_EXPONENT) * gravity.powf(VELOCITY_GRAVITY_EXPONENT)
}

fn intensity_contrast(teff: f64, gravity: f64) -> f64 {
    (INTENSITY_TEFF_COEFF * teff.log10()) - (INTENSITY_GRAVITY_COEFF * gravity.log10()) - INTENSITY_OFFSET
}

/// Intermediate values shared by the blueshift and its error.
struct Terms {
    star_velo: f64,
    star_i: f64,
    conv_blue: f64,
}

fn terms(teff: f64, gravity: f64) -> FormulaResult<Terms> {
    guard::positive(Quantity::Temperature, teff)?;
    guard::positive(Quantity::Gravity, gravity)?;

    // The solar terms go through the same functions so the Sun maps to exactly 1.
    let star_velo = velocity_scale(teff, gravity);
    let sun_velo = velocity_scale(SUN_TEFF, SUN_GRAVITY);
    let v = star_velo / sun_velo;

    let star_i = intensity_contrast(teff, gravity);
    let sun_i = intensity_contrast(SUN_TEFF, SUN_GRAVITY);
    let irms = star_i / sun_i;

    let conv_blue = irms.powi(2) * v;
    debug!(teff, gravity, v, irms, conv_blue, "convective blueshift");
    guard::finite(Quantity::Blueshift, conv_blue)?;

    Ok(Terms {
        star_velo,
        star_i,
        conv_blue,
    })
}

/// Convective blueshift of a star relative to the Sun.
///
/// # Arguments
///
/// * `teff` - Effective temperature in Kelvin
/// * `gravity` - Surface gravity on the `10^log_g / 100` scale
///
/// # Errors
///
/// [`FormulaError::NonPositive`] or [`FormulaError::NonFinite`] when either
/// input is outside the domain of `log10`, and [`FormulaError::NonFinite`]
/// when the power laws overflow.
pub fn convective_blueshift(teff: f64, gravity: f64) -> FormulaResult<f64> {
    Ok(terms(teff, gravity)?.conv_blue)
}

/// Absolute uncertainty of [`convective_blueshift`], propagated to first
/// order from independent uncertainties on temperature and gravity.
///
/// The uncertainties themselves are not validated. A star whose intensity
/// contrast is exactly zero is rejected, since the contrast divides its own
/// uncertainty.
pub fn convective_blueshift_error(teff: f64, gravity: f64, err_teff: f64, err_gravity: f64) -> FormulaResult<f64> {
    let Terms {
        star_velo,
        star_i,
        conv_blue,
    } = terms(teff, gravity)?;

    if star_i == 0.0 {
        return Err(FormulaError::Zero {
            quantity: Quantity::IntensityContrast,
        });
    }

    // d ln(T^a g^b) = a·dT/T + b·dg/g, with a and b sharing a denominator.
    let sigma_v = star_velo
        * (((VELOCITY_TEFF_NUMER * err_teff) / (VELOCITY_EXPONENT_DENOM * teff)).powi(2)
            + ((VELOCITY_GRAVITY_NUMER * err_gravity) / (VELOCITY_EXPONENT_DENOM * gravity)).powi(2))
        .sqrt();
    let sigma_i = (((INTENSITY_TEFF_COEFF * err_teff) / (LN_10 * teff)).powi(2)
        + ((INTENSITY_GRAVITY_COEFF * err_gravity) / (LN_10 * gravity)).powi(2))
    .sqrt();
    let sigma_cb = conv_blue * ((sigma_v / star_velo).powi(2) + ((2.0 * sigma_i) / star_i).powi(2)).sqrt();

    debug!(sigma_v, sigma_i, sigma_cb, "convective blueshift error");
    guard::finite(Quantity::BlueshiftUncertainty, sigma_cb)
}

/// Element-wise [`convective_blueshift`] over equal-length slices.
pub fn convective_blueshift_many(teff: &[f64], gravity: &[f64]) -> FormulaResult<Vec<f64>> {
    let len = teff.len();
    check_len("gravity", len, gravity)?;

    vectorized::evaluate(len, |i| convective_blueshift(teff[i], gravity[i]))
}

/// Element-wise [`convective_blueshift_error`] over equal-length slices.
pub fn convective_blueshift_error_many(
    teff: &[f64],
    gravity: &[f64],
    err_teff: &[f64],
    err_gravity: &[f64],
) -> FormulaResult<Vec<f64>> {
    let len = teff.len();
    check_len("gravity", len, gravity)?;
    check_len("err_teff", len, err_teff)?;
    check_len("err_gravity", len, err_gravity)?;

    vectorized::evaluate(len, |i| {
        convective_blueshift_error(teff[i], gravity[i], err_teff[i], err_gravity[i])
    })
}
