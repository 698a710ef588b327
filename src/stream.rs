// =============================================================================
// Streaming accumulators — O(1) per-candle indicator updates
// =============================================================================
//
// Incremental counterparts to the batch engines for callers that receive live
// candles one at a time.  Each accumulator owns its own state and agrees with
// its batch counterpart on identical input; the batch engines stay pure and
// are never mutated by this module.

use crate::candle::Candle;
use crate::error::{IndicatorError, Result};

// =============================================================================
// EmaAccumulator
// =============================================================================

/// Incremental EMA.  Seeds with the first value verbatim, then applies the
/// `(value - prev) * k + prev` recurrence per update.
#[derive(Debug, Clone)]
pub struct EmaAccumulator {
    k: f64,
    state: Option<f64>,
}

impl EmaAccumulator {
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(IndicatorError::InvalidPeriod { period });
        }
        Ok(Self {
            k: 2.0 / (period as f64 + 1.0),
            state: None,
        })
    }

    /// Feed one value and return the updated EMA.
    pub fn update(&mut self, value: f64) -> f64 {
        let next = match self.state {
            None => value,
            Some(prev) => (value - prev) * self.k + prev,
        };
        self.state = Some(next);
        next
    }

    /// Current EMA value, `None` before the first update.
    pub fn value(&self) -> Option<f64> {
        self.state
    }
}

// =============================================================================
// AtrAccumulator
// =============================================================================

/// Incremental ATR: true range per candle (0 for the first, matching the
/// batch convention) smoothed through an `EmaAccumulator`.
#[derive(Debug, Clone)]
pub struct AtrAccumulator {
    ema: EmaAccumulator,
    prev_close: Option<f64>,
}

impl AtrAccumulator {
    pub fn new(period: usize) -> Result<Self> {
        Ok(Self {
            ema: EmaAccumulator::new(period)?,
            prev_close: None,
        })
    }

    /// Feed one candle and return the updated ATR.
    pub fn update(&mut self, candle: &Candle) -> f64 {
        let tr = match self.prev_close {
            None => 0.0,
            Some(prev_close) => {
                let hl = candle.high - candle.low;
                let hc = (candle.high - prev_close).abs();
                let lc = (candle.low - prev_close).abs();
                hl.max(hc).max(lc)
            }
        };
        self.prev_close = Some(candle.close);
        self.ema.update(tr)
    }

    /// Current ATR value, `None` before the first update.
    pub fn value(&self) -> Option<f64> {
        self.ema.value()
    }
}

// =============================================================================
// ObvAccumulator
// =============================================================================

/// Incremental OBV with its EMA signal line.
#[derive(Debug, Clone)]
pub struct ObvAccumulator {
    obv: f64,
    prev_close: Option<f64>,
    signal: EmaAccumulator,
    started: bool,
}

impl ObvAccumulator {
    pub fn new(signal_period: usize) -> Result<Self> {
        Ok(Self {
            obv: 0.0,
            prev_close: None,
            signal: EmaAccumulator::new(signal_period)?,
            started: false,
        })
    }

    /// Feed one candle and return the updated OBV.
    pub fn update(&mut self, candle: &Candle) -> f64 {
        if let Some(prev_close) = self.prev_close {
            if candle.close > prev_close {
                self.obv += candle.volume;
            } else if candle.close < prev_close {
                self.obv -= candle.volume;
            }
        }
        self.prev_close = Some(candle.close);
        self.signal.update(self.obv);
        self.started = true;
        self.obv
    }

    /// Current OBV value, `None` before the first update.
    pub fn value(&self) -> Option<f64> {
        self.started.then_some(self.obv)
    }

    /// Current signal-line value, `None` before the first update.
    pub fn signal_line(&self) -> Option<f64> {
        self.signal.value()
    }
}
