// =============================================================================
// EMA Crossover — fast/slow trend engine
// =============================================================================
//
// Computes a fast and a slow EMA over the closes (8/21 by default) and
// classifies the latest bar from the last two points only:
//
//   fast crosses above slow  => Bullish       (golden cross)
//   fast crosses below slow  => Bearish       (death cross)
//   fast above slow, no cross => BullishTrend (continuation)
//   otherwise                 => BearishTrend

use serde::{Deserialize, Serialize};

use crate::candle::{closes, validate_candles, Candle};
use crate::error::{IndicatorError, Result};
use crate::indicators::ema::ema;
use crate::signal::TrendSignal;

/// Result of one EMA-crossover evaluation.  Both full series are exposed for
/// charting consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaCross {
    /// Latest fast-EMA value.
    pub fast: f64,
    /// Latest slow-EMA value.
    pub slow: f64,
    pub signal: TrendSignal,
    pub fast_series: Vec<f64>,
    pub slow_series: Vec<f64>,
}

/// Evaluate the EMA crossover for the given candle window.
///
/// Requires at least 2 candles (the classification reads the last two
/// points); fails with `InsufficientData` otherwise.
pub fn ema_cross(candles: &[Candle], fast_period: usize, slow_period: usize) -> Result<EmaCross> {
    validate_candles(candles)?;
    if candles.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            got: candles.len(),
        });
    }

    let close_prices = closes(candles);
    let fast_series = ema(&close_prices, fast_period)?;
    let slow_series = ema(&close_prices, slow_period)?;

    let n = fast_series.len();
    let (fast_prev, fast_last) = (fast_series[n - 2], fast_series[n - 1]);
    let (slow_prev, slow_last) = (slow_series[n - 2], slow_series[n - 1]);

    let signal = if fast_last > slow_last && fast_prev <= slow_prev {
        TrendSignal::Bullish
    } else if fast_last <= slow_last && fast_prev > slow_prev {
        TrendSignal::Bearish
    } else if fast_last > slow_last {
        TrendSignal::BullishTrend
    } else {
        TrendSignal::BearishTrend
    };

    Ok(EmaCross {
        fast: fast_last,
        slow: slow_last,
        signal,
        fast_series,
        slow_series,
    })
}
