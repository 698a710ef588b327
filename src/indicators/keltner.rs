// =============================================================================
// Keltner Channels — EMA midline with ATR-scaled envelope
// =============================================================================
//
// middle = EMA(closes, emaPeriod)
// upper  = middle + multiplier * ATR(candles, atrPeriod)
// lower  = middle - multiplier * ATR(candles, atrPeriod)
//
// A close outside the channel is a breakout: above the upper band reads
// overbought (bearish), below the lower band oversold (bullish).

use serde::{Deserialize, Serialize};

use crate::candle::{closes, validate_candles, Candle};
use crate::error::{IndicatorError, Result};
use crate::indicators::atr::true_range;
use crate::indicators::ema::ema;
use crate::signal::Signal;

pub const DEFAULT_EMA_PERIOD: usize = 20;
pub const DEFAULT_ATR_PERIOD: usize = 10;
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Result of one Keltner Channel evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keltner {
    /// Latest band values.
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub signal: Signal,
    /// Index-aligned band series; `None` before the warm-up index
    /// `max(emaPeriod, atrPeriod) - 1`.
    pub upper_series: Vec<Option<f64>>,
    pub middle_series: Vec<Option<f64>>,
    pub lower_series: Vec<Option<f64>>,
}

/// Evaluate Keltner Channels for the given candle window.
pub fn keltner(
    candles: &[Candle],
    ema_period: usize,
    atr_period: usize,
    multiplier: f64,
) -> Result<Keltner> {
    validate_candles(candles)?;
    let required = ema_period.max(atr_period);
    if candles.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            got: candles.len(),
        });
    }

    let middle_raw = ema(&closes(candles), ema_period)?;
    let atr_raw = ema(&true_range(candles), atr_period)?;

    let warm_up = required - 1;
    let n = candles.len();
    let mut upper_series = Vec::with_capacity(n);
    let mut middle_series = Vec::with_capacity(n);
    let mut lower_series = Vec::with_capacity(n);

    for i in 0..n {
        if i < warm_up {
            upper_series.push(None);
            middle_series.push(None);
            lower_series.push(None);
        } else {
            let spread = multiplier * atr_raw[i];
            upper_series.push(Some(middle_raw[i] + spread));
            middle_series.push(Some(middle_raw[i]));
            lower_series.push(Some(middle_raw[i] - spread));
        }
    }

    let spread = multiplier * atr_raw[n - 1];
    let middle = middle_raw[n - 1];
    let upper = middle + spread;
    let lower = middle - spread;

    let last_close = candles[n - 1].close;
    let signal = if last_close > upper {
        Signal::Bearish
    } else if last_close < lower {
        Signal::Bullish
    } else {
        Signal::Neutral
    };

    Ok(Keltner {
        upper,
        middle,
        lower,
        signal,
        upper_series,
        middle_series,
        lower_series,
    })
}
