// =============================================================================
// Indicator errors
// =============================================================================
//
// Closed error set for the indicator engines.  Data-validity problems are hard
// failures surfaced before any computation runs; legitimate market conditions
// (zero-range bars, zero negative money flow) are NOT errors and resolve to
// documented fallback values inside each engine instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors produced by the indicator engines.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IndicatorError {
    /// The candle window is shorter than the minimum the requested period
    /// needs.  Never silently padded; the caller must supply more history.
    #[error("insufficient data: need at least {required} candles, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// Zero look-back period, rejected before computation begins.
    #[error("invalid period: {period} (must be >= 1)")]
    InvalidPeriod { period: usize },

    /// A candle failed boundary validation (non-finite field, OHLC ordering,
    /// timestamp ordering).  A single bad value would otherwise corrupt every
    /// subsequent EMA output, so these never reach the recurrences.
    #[error("malformed candle at index {index}: {reason}")]
    MalformedCandle { index: usize, reason: String },

    /// A raw value series fed directly into an engine contained NaN/Infinity.
    #[error("non-finite value at index {index}")]
    NonFiniteInput { index: usize },
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
