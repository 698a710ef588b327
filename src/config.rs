// =============================================================================
// Indicator Configuration — periods and multipliers with serde defaults
// =============================================================================
//
// Every tunable look-back and band multiplier lives here.  All fields carry
// `#[serde(default = "...")]` so that loading an older or partial JSON config
// never breaks; missing fields fall back to the documented defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::indicators::{keltner, mfi, obv, supertrend, williams_r};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ema_fast_period() -> usize {
    8
}

fn default_ema_slow_period() -> usize {
    21
}

fn default_supertrend_period() -> usize {
    supertrend::DEFAULT_PERIOD
}

fn default_supertrend_multiplier() -> f64 {
    supertrend::DEFAULT_MULTIPLIER
}

fn default_williams_r_period() -> usize {
    williams_r::DEFAULT_PERIOD
}

fn default_mfi_period() -> usize {
    mfi::DEFAULT_PERIOD
}

fn default_keltner_ema_period() -> usize {
    keltner::DEFAULT_EMA_PERIOD
}

fn default_keltner_atr_period() -> usize {
    keltner::DEFAULT_ATR_PERIOD
}

fn default_keltner_multiplier() -> f64 {
    keltner::DEFAULT_MULTIPLIER
}

fn default_obv_signal_period() -> usize {
    obv::DEFAULT_SIGNAL_PERIOD
}

// =============================================================================
// IndicatorConfig
// =============================================================================

/// Periods and multipliers for every engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Fast EMA period for the crossover engine.
    #[serde(default = "default_ema_fast_period")]
    pub ema_fast_period: usize,

    /// Slow EMA period for the crossover engine.
    #[serde(default = "default_ema_slow_period")]
    pub ema_slow_period: usize,

    /// Supertrend ATR look-back.
    #[serde(default = "default_supertrend_period")]
    pub supertrend_period: usize,

    /// Supertrend band multiplier.
    #[serde(default = "default_supertrend_multiplier")]
    pub supertrend_multiplier: f64,

    /// Williams %R look-back window.
    #[serde(default = "default_williams_r_period")]
    pub williams_r_period: usize,

    /// Money Flow Index look-back window.
    #[serde(default = "default_mfi_period")]
    pub mfi_period: usize,

    /// Keltner midline EMA period.
    #[serde(default = "default_keltner_ema_period")]
    pub keltner_ema_period: usize,

    /// Keltner envelope ATR period.
    #[serde(default = "default_keltner_atr_period")]
    pub keltner_atr_period: usize,

    /// Keltner envelope multiplier.
    #[serde(default = "default_keltner_multiplier")]
    pub keltner_multiplier: f64,

    /// EMA period of the OBV signal line.
    #[serde(default = "default_obv_signal_period")]
    pub obv_signal_period: usize,

    /// Cap on the candle window: only the most recent `lookback` candles are
    /// evaluated.  0 means no cap.  Cost per call is O(window length), so
    /// callers bound it here.
    #[serde(default)]
    pub lookback: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ema_fast_period: default_ema_fast_period(),
            ema_slow_period: default_ema_slow_period(),
            supertrend_period: default_supertrend_period(),
            supertrend_multiplier: default_supertrend_multiplier(),
            williams_r_period: default_williams_r_period(),
            mfi_period: default_mfi_period(),
            keltner_ema_period: default_keltner_ema_period(),
            keltner_atr_period: default_keltner_atr_period(),
            keltner_multiplier: default_keltner_multiplier(),
            obv_signal_period: default_obv_signal_period(),
            lookback: 0,
        }
    }
}

impl IndicatorConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read indicator config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse indicator config from {}", path.display()))?;

        info!(path = %path.display(), "indicator config loaded");
        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_documented_periods() {
        let cfg = IndicatorConfig::default();
        assert_eq!(cfg.ema_fast_period, 8);
        assert_eq!(cfg.ema_slow_period, 21);
        assert_eq!(cfg.supertrend_period, 10);
        assert!((cfg.supertrend_multiplier - 3.0).abs() < f64::EPSILON);
        assert_eq!(cfg.williams_r_period, 14);
        assert_eq!(cfg.mfi_period, 14);
        assert_eq!(cfg.keltner_ema_period, 20);
        assert_eq!(cfg.keltner_atr_period, 10);
        assert!((cfg.keltner_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(cfg.obv_signal_period, 20);
        assert_eq!(cfg.lookback, 0);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: IndicatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.ema_fast_period, 8);
        assert_eq!(cfg.mfi_period, 14);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "supertrend_period": 7, "lookback": 30 }"#;
        let cfg: IndicatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.supertrend_period, 7);
        assert_eq!(cfg.lookback, 30);
        assert_eq!(cfg.ema_slow_period, 21);
    }

    #[test]
    fn roundtrip_serialisation() {
        let cfg = IndicatorConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: IndicatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.ema_fast_period, cfg2.ema_fast_period);
        assert_eq!(cfg.obv_signal_period, cfg2.obv_signal_period);
        assert!((cfg.keltner_multiplier - cfg2.keltner_multiplier).abs() < f64::EPSILON);
    }
}
