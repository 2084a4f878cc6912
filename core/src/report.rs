//! # Star Report
//!
//! Runs the four formulas for each star of a table and renders the results
//! scaled to m/s.
//!
//! A star whose parameters fall outside a formula's domain fails on its own;
//! the remaining stars are still evaluated.

use granulation_common::Star;
use granulation_common::config::Uncertainties;
use granulation_common::constants::{BLUESHIFT_SCALE, DISPERSION_SCALE};
use granulation_common::FormulaResult;
use tracing::{debug, info};

use crate::{blueshift, dispersion};

/// Formula results for one star, as ratios to the solar values.
#[derive(Debug, Clone, PartialEq)]
pub struct StarReport {
    pub star: Star,
    pub blueshift: f64,
    pub blueshift_error: f64,
    pub dispersion: f64,
    pub dispersion_error: f64,
}

/// A [`StarReport`] scaled to m/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledReport {
    pub blueshift: f64,
    pub blueshift_error: f64,
    pub dispersion: f64,
    pub dispersion_error: f64,
}

/// Result of evaluating one catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StarOutcome {
    pub star: Star,
    pub result: FormulaResult<StarReport>,
}

impl StarReport {
    pub fn scaled(&self) -> ScaledReport {
        ScaledReport {
            blueshift: self.blueshift * BLUESHIFT_SCALE,
            blueshift_error: self.blueshift_error * BLUESHIFT_SCALE,
            dispersion: self.dispersion * DISPERSION_SCALE,
            dispersion_error: self.dispersion_error * DISPERSION_SCALE,
        }
    }

    /// The four report lines for this star.
    pub fn lines(&self, precision: Option<usize>) -> [String; 4] {
        let scaled = self.scaled();
        let name = &self.star.name;
        [
            format!(
                "The value of the convective blueshift for {name} is: {} m/s",
                format_value(scaled.blueshift, precision)
            ),
            format!(
                "The error on the convective blueshift for {name} is: {} m/s",
                format_value(scaled.blueshift_error, precision)
            ),
            format!(
                "The value of the sigma RV for {name} is: {} m/s",
                format_value(scaled.dispersion, precision)
            ),
            format!(
                "The error on the sigma RV for {name} is: {} m/s",
                format_value(scaled.dispersion_error, precision)
            ),
        ]
    }

    /// The report block for this star: four lines followed by a blank line.
    pub fn render(&self, precision: Option<usize>) -> String {
        let mut block = self.lines(precision).join("\n");
        block.push_str("\n\n");
        block
    }
}

/// Formats a reported value.
///
/// Without a precision the shortest representation that parses back to the
/// same `f64` is used.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => format!("{value}"),
    }
}

/// Evaluates blueshift, dispersion and both uncertainties for `star`.
pub fn evaluate(star: &Star, uncertainties: &Uncertainties) -> FormulaResult<StarReport> {
    let gravity = star.surface_gravity();
    debug!(star = %star.name, gravity, "evaluating");

    let bs = uncertainties.blueshift;
    let blueshift = blueshift::convective_blueshift(star.teff, gravity)?;
    let blueshift_error = blueshift::convective_blueshift_error(star.teff, gravity, bs.teff, bs.gravity)?;

    let ds = uncertainties.dispersion;
    let dispersion = dispersion::radial_velocity_dispersion(blueshift, star.teff, star.mass, star.radius)?;
    let dispersion_error = dispersion::radial_velocity_dispersion_error(
        blueshift,
        star.teff,
        star.mass,
        star.radius,
        blueshift_error,
        ds.teff,
        ds.mass,
        ds.radius,
    )?;

    Ok(StarReport {
        star: star.clone(),
        blueshift,
        blueshift_error,
        dispersion,
        dispersion_error,
    })
}

/// Evaluates every star in table order. Failures stay attached to their star.
pub fn evaluate_all(stars: &[Star], uncertainties: &Uncertainties) -> Vec<StarOutcome> {
    info!("evaluating {} stars", stars.len());

    stars
        .iter()
        .map(|star| StarOutcome {
            star: star.clone(),
            result: evaluate(star, uncertainties),
        })
        .collect()
}
