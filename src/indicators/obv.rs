// =============================================================================
// On-Balance Volume (OBV) — cumulative volume flow
// =============================================================================
//
// obv[0] = 0 (baseline, no adjustment), then per bar:
//   close up   => obv[i] = obv[i-1] + volume[i]
//   close down => obv[i] = obv[i-1] - volume[i]
//   unchanged  => obv[i] = obv[i-1]
//
// A 20-period EMA of the OBV series acts as a signal line.  Two independent
// classifications are exposed together: the OBV trend (latest vs. previous
// OBV) and the signal-line cross (latest OBV vs. latest signal-line value).

use serde::{Deserialize, Serialize};

use crate::candle::{validate_candles, Candle};
use crate::error::{IndicatorError, Result};
use crate::indicators::ema::ema;
use crate::signal::{ObvCross, Signal};

pub const DEFAULT_SIGNAL_PERIOD: usize = 20;

/// Result of one OBV evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obv {
    /// Latest OBV value.
    pub value: f64,
    /// Latest signal-line value (EMA of the OBV series).
    pub signal_line: f64,
    /// OBV rising vs. falling over the last two bars.
    pub trend: Signal,
    /// OBV above or below its signal line.  Independent of `trend`.
    pub cross: ObvCross,
    pub series: Vec<f64>,
    pub signal_series: Vec<f64>,
}

/// Compute the raw OBV series, index-aligned 1:1 with the candle window.
pub fn obv_series(candles: &[Candle]) -> Vec<f64> {
    let mut series = Vec::with_capacity(candles.len());
    let mut running = 0.0_f64;
    for (i, c) in candles.iter().enumerate() {
        if i > 0 {
            let prev_close = candles[i - 1].close;
            if c.close > prev_close {
                running += c.volume;
            } else if c.close < prev_close {
                running -= c.volume;
            }
        }
        series.push(running);
    }
    series
}

/// Evaluate OBV and its signal line for the given candle window.
///
/// Requires at least 2 candles (the trend classification reads the last two
/// OBV points).
pub fn obv(candles: &[Candle], signal_period: usize) -> Result<Obv> {
    validate_candles(candles)?;
    if candles.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            got: candles.len(),
        });
    }

    let series = obv_series(candles);
    let signal_series = ema(&series, signal_period)?;

    let n = series.len();
    let value = series[n - 1];
    let signal_line = signal_series[n - 1];

    let trend = if value > series[n - 2] {
        Signal::Bullish
    } else {
        Signal::Bearish
    };
    let cross = if value > signal_line {
        ObvCross::Buy
    } else {
        ObvCross::Sell
    };

    Ok(Obv {
        value,
        signal_line,
        trend,
        cross,
        series,
        signal_series,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn candle(i: usize, close: f64, volume: f64) -> Candle {
        Candle {
            open_time: i as i64 * 60_000,
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume,
        }
    }

    #[test]
    fn insufficient_data() {
        let candles = vec![candle(0, 100.0, 50.0)];
        assert_eq!(
            obv(&candles, 20).unwrap_err(),
            IndicatorError::InsufficientData {
                required: 2,
                got: 1
            }
        );
    }

    #[test]
    fn baseline_is_zero() {
        let candles = vec![candle(0, 100.0, 50.0), candle(1, 100.0, 50.0)];
        let series = obv_series(&candles);
        assert_eq!(series, vec![0.0, 0.0]);
    }

    #[test]
    fn monotonic_rise_accumulates_volume() {
        // Strictly increasing closes with constant volume v over n bars:
        // obv[n-1] = (n - 1) * v.
        let v = 250.0;
        let n = 12;
        let candles: Vec<Candle> = (0..n).map(|i| candle(i, 100.0 + i as f64, v)).collect();
        let series = obv_series(&candles);
        assert_eq!(series[n - 1], (n - 1) as f64 * v);
    }

    #[test]
    fn falling_closes_subtract_volume() {
        let candles: Vec<Candle> = (0..5).map(|i| candle(i, 100.0 - i as f64, 10.0)).collect();
        let series = obv_series(&candles);
        assert_eq!(series, vec![0.0, -10.0, -20.0, -30.0, -40.0]);
    }

    #[test]
    fn unchanged_close_carries_forward() {
        let candles = vec![
            candle(0, 100.0, 10.0),
            candle(1, 101.0, 10.0),
            candle(2, 101.0, 99.0),
            candle(3, 100.0, 10.0),
        ];
        let series = obv_series(&candles);
        assert_eq!(series, vec![0.0, 10.0, 10.0, 0.0]);
    }

    #[test]
    fn rising_obv_reads_bullish_buy() {
        let candles: Vec<Candle> = (0..30).map(|i| candle(i, 100.0 + i as f64, 100.0)).collect();
        let result = obv(&candles, 20).unwrap();
        assert_eq!(result.trend, Signal::Bullish);
        // OBV keeps rising away from its lagging EMA.
        assert_eq!(result.cross, ObvCross::Buy);
        assert!(result.value > result.signal_line);
    }

    #[test]
    fn falling_obv_reads_bearish_sell() {
        let candles: Vec<Candle> = (0..30).map(|i| candle(i, 200.0 - i as f64, 100.0)).collect();
        let result = obv(&candles, 20).unwrap();
        assert_eq!(result.trend, Signal::Bearish);
        assert_eq!(result.cross, ObvCross::Sell);
    }

    #[test]
    fn trend_and_cross_are_independent() {
        // A long accumulation then one distribution bar: OBV dips on the last
        // bar (Bearish trend) while still sitting above its lagging signal
        // line (Buy cross).
        let mut candles: Vec<Candle> = (0..30).map(|i| candle(i, 100.0 + i as f64, 100.0)).collect();
        candles.push(candle(30, 128.0, 10.0));
        let result = obv(&candles, 20).unwrap();
        assert_eq!(result.trend, Signal::Bearish);
        assert_eq!(result.cross, ObvCross::Buy);
    }

    #[test]
    fn signal_series_aligned() {
        let candles: Vec<Candle> = (0..25).map(|i| candle(i, 100.0 + i as f64, 100.0)).collect();
        let result = obv(&candles, 20).unwrap();
        assert_eq!(result.series.len(), 25);
        assert_eq!(result.signal_series.len(), 25);
    }
}
