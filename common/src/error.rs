//! Error types for formula evaluation.
//!
//! Every formula guards its domain explicitly instead of letting NaN or
//! infinity leak into a report. Inputs are checked before evaluation and
//! results after it; a violation is returned as a [`FormulaError`] naming
//! the offending [`Quantity`].

use std::fmt;

use thiserror::Error;

pub type FormulaResult<T> = Result<T, FormulaError>;

/// Physical input of a formula, used to label guard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Gravity,
    Mass,
    Radius,
    Blueshift,
    BlueshiftUncertainty,
    Dispersion,
    DispersionUncertainty,
    IntensityContrast,
    GranuleCount,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            Quantity::Temperature => "temperature",
            Quantity::Gravity => "surface gravity",
            Quantity::Mass => "mass",
            Quantity::Radius => "radius",
            Quantity::Blueshift => "convective blueshift",
            Quantity::BlueshiftUncertainty => "convective blueshift uncertainty",
            Quantity::Dispersion => "RV dispersion",
            Quantity::DispersionUncertainty => "RV dispersion uncertainty",
            Quantity::IntensityContrast => "intensity contrast",
            Quantity::GranuleCount => "granule count",
        };
        write!(f, "{}", str)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// Logarithm or fractional power of a non-positive value.
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: Quantity, value: f64 },

    /// Division by a zero-valued input.
    #[error("{quantity} must be non-zero")]
    Zero { quantity: Quantity },

    #[error("{quantity} must be finite, got {value}")]
    NonFinite { quantity: Quantity, value: f64 },

    /// Sequence inputs of unequal length.
    #[error("argument `{argument}` has {found} elements, expected {expected}")]
    LengthMismatch {
        argument: &'static str,
        expected: usize,
        found: usize,
    },

    /// First failing element of a sequence evaluation.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<FormulaError>,
    },
}

impl FormulaError {
    pub fn at(index: usize, source: FormulaError) -> Self {
        FormulaError::Element {
            index,
            source: Box::new(source),
        }
    }

    /// The quantity behind this error, looking through [`FormulaError::Element`].
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            FormulaError::NonPositive { quantity, .. }
            | FormulaError::Zero { quantity }
            | FormulaError::NonFinite { quantity, .. } => Some(*quantity),
            FormulaError::LengthMismatch { .. } => None,
            FormulaError::Element { source, .. } => source.quantity(),
        }
    }
}
