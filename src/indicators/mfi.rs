// =============================================================================
// Money Flow Index (MFI) — volume-weighted momentum oscillator
// =============================================================================
//
// Typical price per bar: (high + low + close) / 3.  Raw money flow is
// typicalPrice * volume, bucketed as positive or negative by comparing the
// typical price against the previous bar's.
//
// Warm-up is a plain cumulative sum over the first `period` comparisons, then
// the update switches to a Wilder-style decay:
//
//   flow = flow - flow / period + newFlow
//
// This hybrid differs from the textbook rolling-window MFI on purpose;
// downstream thresholds were tuned against it and it must not be "fixed".
//
//   MFI = 100 - 100 / (1 + positiveFlow / negativeFlow)
//
// A zero negative flow follows the classic convention of MFI = 100 instead of
// raising an arithmetic error.

use serde::{Deserialize, Serialize};

use crate::candle::{validate_candles, Candle};
use crate::error::{IndicatorError, Result};
use crate::signal::Signal;

pub const DEFAULT_PERIOD: usize = 14;

const OVERBOUGHT: f64 = 80.0;
const OVERSOLD: f64 = 20.0;

/// Result of one MFI evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mfi {
    /// Latest MFI value, in [0, 100].
    pub value: f64,
    pub signal: Signal,
    /// Index-aligned 1:1 with the input window; `None` during warm-up
    /// (the first `period` bars).
    pub series: Vec<Option<f64>>,
}

fn typical_price(c: &Candle) -> f64 {
    (c.high + c.low + c.close) / 3.0
}

/// Evaluate the Money Flow Index for the given candle window.
///
/// Requires `period + 1` candles: `period` typical-price comparisons, each
/// needing a previous bar.
pub fn mfi(candles: &[Candle], period: usize) -> Result<Mfi> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    validate_candles(candles)?;
    if candles.len() < period + 1 {
        return Err(IndicatorError::InsufficientData {
            required: period + 1,
            got: candles.len(),
        });
    }

    let period_f = period as f64;
    let mut positive_flow = 0.0_f64;
    let mut negative_flow = 0.0_f64;

    let mut series: Vec<Option<f64>> = Vec::with_capacity(candles.len());
    series.push(None);
    let mut latest = 0.0_f64;

    let mut prev_tp = typical_price(&candles[0]);
    for (i, c) in candles.iter().enumerate().skip(1) {
        let tp = typical_price(c);
        let raw_flow = tp * c.volume;
        let (new_positive, new_negative) = if tp > prev_tp {
            (raw_flow, 0.0)
        } else if tp < prev_tp {
            (0.0, raw_flow)
        } else {
            (0.0, 0.0)
        };
        prev_tp = tp;

        if i <= period {
            // Cumulative-sum warm-up phase.
            positive_flow += new_positive;
            negative_flow += new_negative;
        } else {
            // Wilder-style decay after warm-up.
            positive_flow = positive_flow - positive_flow / period_f + new_positive;
            negative_flow = negative_flow - negative_flow / period_f + new_negative;
        }

        if i >= period {
            latest = if negative_flow == 0.0 {
                100.0
            } else {
                100.0 - 100.0 / (1.0 + positive_flow / negative_flow)
            };
            series.push(Some(latest));
        } else {
            series.push(None);
        }
    }

    let signal = if latest > OVERBOUGHT {
        Signal::Bearish
    } else if latest < OVERSOLD {
        Signal::Bullish
    } else {
        Signal::Neutral
    };

    Ok(Mfi {
        value: latest,
        signal,
        series,
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

    fn wavy(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| candle(i, 100.0 + (i as f64 * 0.5).sin() * 5.0, 1000.0))
            .collect()
    }

    #[test]
    fn period_zero_is_error() {
        assert_eq!(
            mfi(&wavy(30), 0).unwrap_err(),
            IndicatorError::InvalidPeriod { period: 0 }
        );
    }

    #[test]
    fn insufficient_data() {
        // Needs period + 1 candles.
        assert_eq!(
            mfi(&wavy(14), 14).unwrap_err(),
            IndicatorError::InsufficientData {
                required: 15,
                got: 14
            }
        );
    }

    #[test]
    fn values_stay_in_range() {
        let result = mfi(&wavy(120), 14).unwrap();
        for value in result.series.iter().flatten() {
            assert!((0.0..=100.0).contains(value), "MFI {value} out of [0, 100]");
        }
    }

    #[test]
    fn warm_up_is_none_then_defined() {
        let result = mfi(&wavy(30), 14).unwrap();
        assert_eq!(result.series.len(), 30);
        assert!(result.series[..14].iter().all(|v| v.is_none()));
        assert!(result.series[14..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn all_up_bars_read_hundred() {
        // Strictly rising typical prices: zero negative flow, and the
        // documented convention is MFI = 100, never a division error.
        let candles: Vec<Candle> = (0..20)
            .map(|i| candle(i, 100.0 + i as f64, 1000.0))
            .collect();
        let result = mfi(&candles, 14).unwrap();
        assert_eq!(result.value, 100.0);
        assert_eq!(result.signal, Signal::Bearish);
    }

    #[test]
    fn all_down_bars_read_zero() {
        let candles: Vec<Candle> = (0..20)
            .map(|i| candle(i, 200.0 - i as f64, 1000.0))
            .collect();
        let result = mfi(&candles, 14).unwrap();
        assert!(result.value.abs() < 1e-9);
        assert_eq!(result.signal, Signal::Bullish);
    }

    #[test]
    fn flat_bars_have_no_flow() {
        // Equal typical prices contribute to neither bucket; both flows stay
        // zero, and the zero-negative-flow convention reads 100.
        let candles: Vec<Candle> = (0..20).map(|i| candle(i, 100.0, 1000.0)).collect();
        let result = mfi(&candles, 14).unwrap();
        assert_eq!(result.value, 100.0);
    }

    #[test]
    fn hybrid_update_matches_hand_computation() {
        // period 3 over 7 bars: warm-up sums the first 3 comparisons, then the
        // Wilder-style update takes over.
        let closes = [10.0, 11.0, 10.5, 11.5, 12.0, 11.0, 12.5];
        let candles: Vec<Candle> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| candle(i, c, 100.0))
            .collect();
        let result = mfi(&candles, 3).unwrap();

        let tp: Vec<f64> = candles.iter().map(typical_price).collect();
        let mut pos = 0.0;
        let mut neg = 0.0;
        let mut expected = Vec::new();
        for i in 1..tp.len() {
            let flow = tp[i] * 100.0;
            let (p, n) = if tp[i] > tp[i - 1] {
                (flow, 0.0)
            } else if tp[i] < tp[i - 1] {
                (0.0, flow)
            } else {
                (0.0, 0.0)
            };
            if i <= 3 {
                pos += p;
                neg += n;
            } else {
                pos = pos - pos / 3.0 + p;
                neg = neg - neg / 3.0 + n;
            }
            if i >= 3 {
                expected.push(if neg == 0.0 {
                    100.0
                } else {
                    100.0 - 100.0 / (1.0 + pos / neg)
                });
            }
        }

        let got: Vec<f64> = result.series.iter().copied().flatten().collect();
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected.iter()) {
            assert!((g - e).abs() < 1e-9, "got {g}, expected {e}");
        }
    }
}
