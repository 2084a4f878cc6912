//! # Star Parameter Record
//!
//! The physical parameters the formulas consume for one star.

use std::borrow::Cow;
use std::fmt;

use crate::constants::GRAVITY_DIVISOR;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: Cow<'static, str>,
    /// Mass in solar masses.
    pub mass: f64,
    /// Radius in solar radii.
    pub radius: f64,
    /// Effective temperature in Kelvin.
    pub teff: f64,
    /// log₁₀ of the surface gravity in cm/s².
    pub log_g: f64,
}

impl Star {
    /// Builds a catalogue entry. Usable in `const` context.
    pub const fn new_static(name: &'static str, mass: f64, radius: f64, teff: f64, log_g: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            mass,
            radius,
            teff,
            log_g,
        }
    }

    pub fn new(name: impl Into<String>, mass: f64, radius: f64, teff: f64, log_g: f64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            mass,
            radius,
            teff,
            log_g,
        }
    }

    /// Linear surface gravity on the formulas' calibration scale, `10^log_g / 100`.
    pub fn surface_gravity(&self) -> f64 {
        10f64.powf(self.log_g) / GRAVITY_DIVISOR
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
