// =============================================================================
// Indicator Snapshot — one pass over a candle window, every engine
// =============================================================================
//
// Flat, serialisable summary of the latest value and signal from each engine,
// consumed by UI layers as JSON.  The snapshot is produced fresh on every
// call and holds no cache; recomputation is an idempotent, independently
// retryable unit of work.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candle::Candle;
use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::indicators::{ema_cross, keltner, mfi, obv, supertrend, williams_r};
use crate::signal::{ObvCross, Signal, TrendSignal};

/// Latest value + signal from every engine over one candle window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Open time of the last candle evaluated (ms epoch).
    pub open_time: i64,
    /// Close of the last candle evaluated.
    pub close: f64,
    /// Number of candles in the evaluated window.
    pub candles: usize,

    // --- EMA crossover ------------------------------------------------------
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub ema_cross_signal: TrendSignal,

    // --- Supertrend ---------------------------------------------------------
    pub supertrend: f64,
    pub supertrend_direction: i8,
    pub supertrend_signal: TrendSignal,

    // --- Oscillators --------------------------------------------------------
    pub williams_r: f64,
    pub williams_r_signal: Signal,
    pub mfi: f64,
    pub mfi_signal: Signal,

    // --- Keltner Channels ---------------------------------------------------
    pub keltner_upper: f64,
    pub keltner_middle: f64,
    pub keltner_lower: f64,
    pub keltner_signal: Signal,

    // --- OBV ----------------------------------------------------------------
    pub obv: f64,
    pub obv_signal_line: f64,
    pub obv_trend: Signal,
    pub obv_cross: ObvCross,
}

impl IndicatorSnapshot {
    /// Run every engine over the candle window and collect the latest values.
    ///
    /// The window is bounded by `config.lookback` when non-zero.  Any engine
    /// failure (insufficient data, malformed candle) aborts the whole
    /// snapshot; there is no partial output.
    pub fn compute(candles: &[Candle], config: &IndicatorConfig) -> Result<Self> {
        let window = if config.lookback > 0 && candles.len() > config.lookback {
            &candles[candles.len() - config.lookback..]
        } else {
            candles
        };

        let cross = ema_cross::ema_cross(window, config.ema_fast_period, config.ema_slow_period)?;
        let st = supertrend::supertrend(
            window,
            config.supertrend_period,
            config.supertrend_multiplier,
        )?;
        let wr = williams_r::williams_r(window, config.williams_r_period)?;
        let flow = mfi::mfi(window, config.mfi_period)?;
        let channel = keltner::keltner(
            window,
            config.keltner_ema_period,
            config.keltner_atr_period,
            config.keltner_multiplier,
        )?;
        let volume = obv::obv(window, config.obv_signal_period)?;

        let last = &window[window.len() - 1];
        let snapshot = Self {
            open_time: last.open_time,
            close: last.close,
            candles: window.len(),
            ema_fast: cross.fast,
            ema_slow: cross.slow,
            ema_cross_signal: cross.signal,
            supertrend: st.value,
            supertrend_direction: st.direction,
            supertrend_signal: st.signal,
            williams_r: wr.value,
            williams_r_signal: wr.signal,
            mfi: flow.value,
            mfi_signal: flow.signal,
            keltner_upper: channel.upper,
            keltner_middle: channel.middle,
            keltner_lower: channel.lower,
            keltner_signal: channel.signal,
            obv: volume.value,
            obv_signal_line: volume.signal_line,
            obv_trend: volume.trend,
            obv_cross: volume.cross,
        };

        debug!(
            candles = snapshot.candles,
            close = snapshot.close,
            ema_cross = %snapshot.ema_cross_signal,
            supertrend = %snapshot.supertrend_signal,
            williams_r = %snapshot.williams_r_signal,
            mfi = %snapshot.mfi_signal,
            keltner = %snapshot.keltner_signal,
            obv_trend = %snapshot.obv_trend,
            "indicator snapshot computed"
        );

        Ok(snapshot)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    fn window(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 100.0 + i as f64 * 0.8 + (i as f64 * 0.5).sin() * 2.0;
                Candle {
                    open_time: i as i64 * 60_000,
                    open: base,
                    high: base + 3.0,
                    low: base - 3.0,
                    close: base + 1.0,
                    volume: 500.0 + i as f64,
                }
            })
            .collect()
    }

    #[test]
    fn snapshot_over_trending_window() {
        let candles = window(60);
        let snap = IndicatorSnapshot::compute(&candles, &IndicatorConfig::default()).unwrap();
        assert_eq!(snap.candles, 60);
        assert_eq!(snap.open_time, 59 * 60_000);
        // A steady rise keeps the fast EMA on top.
        assert!(snap.ema_fast > snap.ema_slow);
        assert!(snap.ema_cross_signal.is_bullish());
        assert_eq!(snap.supertrend_direction, 1);
        assert!(snap.keltner_upper > snap.keltner_lower);
        assert_eq!(snap.obv_trend, Signal::Bullish);
    }

    #[test]
    fn snapshot_fails_whole_on_short_window() {
        // The tightest engine (Keltner, 20 bars by default) dominates.
        let candles = window(10);
        let err = IndicatorSnapshot::compute(&candles, &IndicatorConfig::default()).unwrap_err();
        assert!(matches!(err, IndicatorError::InsufficientData { .. }));
    }

    #[test]
    fn lookback_caps_the_window() {
        let candles = window(200);
        let config = IndicatorConfig {
            lookback: 30,
            ..IndicatorConfig::default()
        };
        let snap = IndicatorSnapshot::compute(&candles, &config).unwrap();
        assert_eq!(snap.candles, 30);
        // Still anchored to the most recent candle.
        assert_eq!(snap.open_time, 199 * 60_000);
    }

    #[test]
    fn snapshot_serialises_to_flat_json() {
        let candles = window(60);
        let snap = IndicatorSnapshot::compute(&candles, &IndicatorConfig::default()).unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json.get("ema_cross_signal").is_some());
        assert!(json.get("supertrend_direction").is_some());
        assert!(json.get("keltner_middle").is_some());
        assert!(json.get("obv_cross").is_some());
    }

    #[test]
    fn snapshot_is_deterministic() {
        let candles = window(80);
        let config = IndicatorConfig::default();
        let a = IndicatorSnapshot::compute(&candles, &config).unwrap();
        let b = IndicatorSnapshot::compute(&candles, &config).unwrap();
        assert_eq!(a.ema_fast, b.ema_fast);
        assert_eq!(a.supertrend, b.supertrend);
        assert_eq!(a.mfi, b.mfi);
        assert_eq!(a.obv, b.obv);
    }
}
