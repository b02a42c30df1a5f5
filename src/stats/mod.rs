// Summary statistics over a sorted run

use crate::algorithms::Number;
use crate::runner::errors::SortError;

/// Summary statistics for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Smallest value
    pub min: Number,
    /// Largest value
    pub max: Number,
    /// Arithmetic mean
    pub mean: f64,
    /// Number of values
    pub count: usize,
}

impl Statistics {
    /// Compute min/max/mean/count over `values`.
    ///
    /// The mean is undefined for zero elements, so an empty slice is rejected
    /// with [`SortError::EmptyResultStats`] instead of dividing by zero.  The
    /// sum is accumulated in `i128` so that no sequence of `i64` values can
    /// overflow it.
    pub fn compute(values: &[Number]) -> Result<Statistics, SortError> {
        let (first, rest) = values.split_first().ok_or(SortError::EmptyResultStats)?;

        let mut min = *first;
        let mut max = *first;
        let mut sum = *first as i128;
        for &value in rest {
            min = min.min(value);
            max = max.max(value);
            sum += value as i128;
        }

        Ok(Statistics {
            min,
            max,
            mean: sum as f64 / values.len() as f64,
            count: values.len(),
        })
    }
}
