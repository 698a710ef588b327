// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent values, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = (value_t - EMA_{t-1}) * k + EMA_{t-1}
//
// The very first EMA value equals the first input value verbatim.  This is NOT
// an SMA seed; downstream thresholds were tuned against the first-value seed
// and it must be preserved.
// =============================================================================

use crate::error::{IndicatorError, Result};

/// Compute the EMA series for `values` with look-back `period`.
///
/// The output is index-aligned 1:1 with the input (same length).  A `period`
/// larger than the series length is permitted and simply yields an EMA that
/// has not settled.
///
/// # Errors
/// - `InvalidPeriod` when `period == 0`.
/// - `InsufficientData` when `values` is empty.
/// - `NonFiniteInput` when any input value is NaN/Infinity; a single bad value
///   would otherwise corrupt every subsequent output (EMA has infinite
///   memory).
pub fn ema(values: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    if values.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            got: 0,
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(IndicatorError::NonFiniteInput { index });
    }

    let k = 2.0 / (period as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    result.push(values[0]);

    let mut prev = values[0];
    for &value in &values[1..] {
        let next = (value - prev) * k + prev;
        result.push(next);
        prev = next;
    }

    Ok(result)
}

/// Return the most recent EMA value.
pub fn latest_ema(values: &[f64], period: usize) -> Result<f64> {
    let series = ema(values, period)?;
    // Non-empty by construction: ema() rejects empty input.
    Ok(series[series.len() - 1])
}
