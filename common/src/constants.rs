/// Effective temperature of the Sun in Kelvin.
pub const SUN_TEFF: f64 = 5772.0;

/// Surface gravity of the Sun in the units the formulas are calibrated on.
pub const SUN_GRAVITY: f64 = 275.4;

/// Common denominator of the granulation velocity exponents.
pub const VELOCITY_EXPONENT_DENOM: f64 = 9.0;

pub const VELOCITY_TEFF_NUMER: f64 = 32.0;

pub const VELOCITY_GRAVITY_NUMER: f64 = -2.0;

/// Temperature exponent of the granulation velocity scaling, 32/9.
pub const VELOCITY_TEFF_EXPONENT: f64 = VELOCITY_TEFF_NUMER / VELOCITY_EXPONENT_DENOM;

/// Gravity exponent of the granulation velocity scaling, -2/9.
pub const VELOCITY_GRAVITY_EXPONENT: f64 = VELOCITY_GRAVITY_NUMER / VELOCITY_EXPONENT_DENOM;

pub const INTENSITY_TEFF_COEFF: f64 = 54.98;

pub const INTENSITY_GRAVITY_COEFF: f64 = 4.80;

pub const INTENSITY_OFFSET: f64 = 169.0;

/// Temperature used for the solar granule-count proxy, `1 / 5772²`.
pub const SUN_GRANULE_TEFF: f64 = 5772.0;

/// Divisor turning `10^log_g` into the gravity scale used by the formulas.
pub const GRAVITY_DIVISOR: f64 = 100.0;

/// Solar convective blueshift in m/s. Multiplies the blueshift ratio on output.
pub const BLUESHIFT_SCALE: f64 = 350.0;

/// Solar granulation RV dispersion in m/s. Multiplies the dispersion ratio on output.
pub const DISPERSION_SCALE: f64 = 0.40;
