// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR_0 = 0                                  (no previous close available)
//   TR_t = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is the EMA of the TR series (first-value seed, see ema.rs).  The zero
// TR at bar 0 is a fixed convention shared with every downstream consumer,
// not `high - low`.
// =============================================================================

use crate::candle::{validate_candles, Candle};
use crate::error::Result;
use crate::indicators::ema::ema;

/// Compute the True Range series, index-aligned 1:1 with the candle window.
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    let mut result = Vec::with_capacity(candles.len());
    for (i, c) in candles.iter().enumerate() {
        if i == 0 {
            result.push(0.0);
            continue;
        }
        let prev_close = candles[i - 1].close;
        let hl = c.high - c.low;
        let hc = (c.high - prev_close).abs();
        let lc = (c.low - prev_close).abs();
        result.push(hl.max(hc).max(lc));
    }
    result
}

/// Compute the ATR series for the given candle window and look-back `period`.
///
/// # Errors
/// - `MalformedCandle` when the window fails boundary validation.
/// - `InvalidPeriod` / `InsufficientData` per the EMA contract.
pub fn atr(candles: &[Candle], period: usize) -> Result<Vec<f64>> {
    validate_candles(candles)?;
    ema(&true_range(candles), period)
}

/// Return the most recent ATR value.
pub fn latest_atr(candles: &[Candle], period: usize) -> Result<f64> {
    let series = atr(candles, period)?;
    Ok(series[series.len() - 1])
}
