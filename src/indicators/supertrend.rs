// =============================================================================
// Supertrend — ATR-banded trend overlay
// =============================================================================
//
// Basic bands at each bar:
//   mid   = (high + low) / 2
//   upper = mid + multiplier * ATR
//   lower = mid - multiplier * ATR
//
// Final bands carry prior-bar hysteresis: a band only tightens when momentum
// confirms (the basic band moved inside the previous final band, or the
// previous close already broke the previous final band); it never loosens
// spuriously.  Trend direction flips to up when the close breaks above the
// final upper band, to down when it breaks below the final lower band, and
// otherwise persists.  Bar 0 is seeded by comparing close[0] to the basic
// upper band.

use serde::{Deserialize, Serialize};

use crate::candle::{validate_candles, Candle};
use crate::error::{IndicatorError, Result};
use crate::indicators::atr::true_range;
use crate::indicators::ema::ema;
use crate::signal::TrendSignal;

pub const DEFAULT_PERIOD: usize = 10;
pub const DEFAULT_MULTIPLIER: f64 = 3.0;

/// Result of one Supertrend evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supertrend {
    /// Latest Supertrend line value: the final lower band while the trend is
    /// up, the final upper band while it is down.
    pub value: f64,
    /// Latest direction: +1 up, -1 down.
    pub direction: i8,
    pub signal: TrendSignal,
    /// Supertrend line per bar.
    pub series: Vec<f64>,
    /// Direction per bar, aligned with `series`.
    pub directions: Vec<i8>,
}

/// Evaluate Supertrend for the given candle window.
///
/// Requires at least `max(period, 2)` candles: `period` bars of lookback for
/// a meaningful ATR, and two bars for the flip classification.
pub fn supertrend(candles: &[Candle], period: usize, multiplier: f64) -> Result<Supertrend> {
    validate_candles(candles)?;
    let required = period.max(2);
    if candles.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            got: candles.len(),
        });
    }

    // Window already validated; feed the TR series straight into the EMA.
    let atr_series = ema(&true_range(candles), period)?;

    let n = candles.len();
    let mut series = Vec::with_capacity(n);
    let mut directions: Vec<i8> = Vec::with_capacity(n);

    let mut final_upper = 0.0_f64;
    let mut final_lower = 0.0_f64;
    let mut direction: i8 = 1;

    for (i, c) in candles.iter().enumerate() {
        let mid = (c.high + c.low) / 2.0;
        let basic_upper = mid + multiplier * atr_series[i];
        let basic_lower = mid - multiplier * atr_series[i];

        if i == 0 {
            final_upper = basic_upper;
            final_lower = basic_lower;
            direction = if c.close > basic_upper { 1 } else { -1 };
        } else {
            let prev_close = candles[i - 1].close;
            final_upper = if basic_upper < final_upper || prev_close > final_upper {
                basic_upper
            } else {
                final_upper
            };
            final_lower = if basic_lower > final_lower || prev_close < final_lower {
                basic_lower
            } else {
                final_lower
            };

            direction = if c.close > final_upper {
                1
            } else if c.close < final_lower {
                -1
            } else {
                direction
            };
        }

        series.push(if direction == 1 { final_lower } else { final_upper });
        directions.push(direction);
    }

    let last = directions[n - 1];
    let prev = directions[n - 2];
    let signal = match (prev, last) {
        (-1, 1) => TrendSignal::Bullish,
        (1, -1) => TrendSignal::Bearish,
        (_, 1) => TrendSignal::BullishTrend,
        _ => TrendSignal::BearishTrend,
    };

    Ok(Supertrend {
        value: series[n - 1],
        direction: last,
        signal,
        series,
        directions,
    })
}
