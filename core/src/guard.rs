use granulation_common::{FormulaError, FormulaResult, Quantity};

pub(crate) fn finite(quantity: Quantity, value: f64) -> FormulaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NonFinite { quantity, value })
    }
}

/// Domain of `log10` and of fractional powers.
pub(crate) fn positive(quantity: Quantity, value: f64) -> FormulaResult<f64> {
    finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::NonPositive { quantity, value })
    }
}

pub(crate) fn non_zero(quantity: Quantity, value: f64) -> FormulaResult<f64> {
    finite(quantity, value)?;
    if value != 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::Zero { quantity })
    }
}
