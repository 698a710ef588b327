// =============================================================================
// Candle model and boundary validation
// =============================================================================
//
// An OHLCV candle summarises trading activity for one fixed-interval bucket.
// The engines consume an ordered, immutable slice of candles and never mutate
// it; every data-quality check happens here, once, at the boundary.  EMA has
// infinite memory, so a single NaN that slipped through would permanently
// corrupt every subsequent output.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// A single OHLCV candle.  `open_time` is a millisecond epoch timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// True when every price/volume field is a finite float.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// Validate a candle window before any engine touches it.
///
/// Returns `MalformedCandle` when:
/// - any price or volume field is NaN/Infinity,
/// - `low > min(open, close)` or `max(open, close) > high`,
/// - volume is negative,
/// - timestamps are not strictly increasing.
pub fn validate_candles(candles: &[Candle]) -> Result<()> {
    for (i, c) in candles.iter().enumerate() {
        if !c.is_finite() {
            return Err(IndicatorError::MalformedCandle {
                index: i,
                reason: "non-finite price or volume field".to_string(),
            });
        }
        if c.low > c.open.min(c.close) || c.high < c.open.max(c.close) {
            return Err(IndicatorError::MalformedCandle {
                index: i,
                reason: format!(
                    "OHLC ordering violated (o={} h={} l={} c={})",
                    c.open, c.high, c.low, c.close
                ),
            });
        }
        if c.volume < 0.0 {
            return Err(IndicatorError::MalformedCandle {
                index: i,
                reason: format!("negative volume {}", c.volume),
            });
        }
        if i > 0 && c.open_time <= candles[i - 1].open_time {
            return Err(IndicatorError::MalformedCandle {
                index: i,
                reason: format!(
                    "timestamp {} not after previous {}",
                    c.open_time,
                    candles[i - 1].open_time
                ),
            });
        }
    }
    Ok(())
}

/// Extract the close column.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// Extract the high column.
pub fn highs(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.high).collect()
}

/// Extract the low column.
pub fn lows(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.low).collect()
}

/// Extract the volume column.
pub fn volumes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.volume).collect()
}
