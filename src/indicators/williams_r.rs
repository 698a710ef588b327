// =============================================================================
// Williams %R — momentum oscillator
// =============================================================================
//
// For each bar with a full trailing window:
//
//   %R = (highestHigh - close) / (highestHigh - lowestLow) * -100
//
// Values live in [-100, 0].  Readings below -80 are oversold (bullish),
// above -20 overbought (bearish).  A window where highestHigh == lowestLow
// (flat candles) is a legitimate market condition and resolves to -50, the
// midpoint of the scale, never NaN.

use serde::{Deserialize, Serialize};

use crate::candle::{validate_candles, Candle};
use crate::error::{IndicatorError, Result};
use crate::signal::Signal;

pub const DEFAULT_PERIOD: usize = 14;

const OVERSOLD: f64 = -80.0;
const OVERBOUGHT: f64 = -20.0;

/// Fallback for a zero-range window (highestHigh == lowestLow).
const FLAT_WINDOW_VALUE: f64 = -50.0;

/// Result of one Williams %R evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WilliamsR {
    /// Latest %R value, in [-100, 0].
    pub value: f64,
    pub signal: Signal,
    /// Index-aligned 1:1 with the input window; `None` during warm-up
    /// (the first `period - 1` bars).
    pub series: Vec<Option<f64>>,
}

/// Evaluate Williams %R for the given candle window.
pub fn williams_r(candles: &[Candle], period: usize) -> Result<WilliamsR> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    validate_candles(candles)?;
    if candles.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period,
            got: candles.len(),
        });
    }

    let mut series = Vec::with_capacity(candles.len());
    let mut latest = FLAT_WINDOW_VALUE;

    for i in 0..candles.len() {
        if i + 1 < period {
            series.push(None);
            continue;
        }
        let window = &candles[i + 1 - period..=i];
        let highest_high = window.iter().fold(f64::MIN, |acc, c| acc.max(c.high));
        let lowest_low = window.iter().fold(f64::MAX, |acc, c| acc.min(c.low));

        let range = highest_high - lowest_low;
        latest = if range > 0.0 {
            (highest_high - candles[i].close) / range * -100.0
        } else {
            FLAT_WINDOW_VALUE
        };
        series.push(Some(latest));
    }

    let signal = if latest < OVERSOLD {
        Signal::Bullish
    } else if latest > OVERBOUGHT {
        Signal::Bearish
    } else {
        Signal::Neutral
    };

    Ok(WilliamsR {
        value: latest,
        signal,
        series,
    })
}
