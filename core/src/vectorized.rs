use granulation_common::{FormulaError, FormulaResult};
use rayon::prelude::*;

pub(crate) fn check_len(argument: &'static str, expected: usize, values: &[f64]) -> FormulaResult<()> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(FormulaError::LengthMismatch {
            argument,
            expected,
            found: values.len(),
        })
    }
}

/// Evaluates `f` for every index in `0..len`, in parallel, keeping input order.
///
/// On failure the error of the lowest failing index is returned, wrapped in
/// [`FormulaError::Element`].
pub(crate) fn evaluate<F>(len: usize, f: F) -> FormulaResult<Vec<f64>>
where
    F: Fn(usize) -> FormulaResult<f64> + Sync + Send,
{
    let results: Vec<FormulaResult<f64>> = (0..len).into_par_iter().map(f).collect();

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| result.map_err(|err| FormulaError::at(index, err)))
        .collect()
}
