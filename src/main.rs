// =============================================================================
// aurora-ta — offline snapshot tool
// =============================================================================
//
// Reads a candle window from a JSON file (an array of OHLCV objects), runs
// every indicator engine over it and prints the resulting snapshot as pretty
// JSON on stdout.  Diagnostics go to stderr via tracing so stdout stays a
// clean machine-readable contract.
// =============================================================================

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aurora_ta::{Candle, IndicatorConfig, IndicatorSnapshot};

fn main() -> Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── 2. Config ────────────────────────────────────────────────────────
    let config_path =
        std::env::var("AURORA_TA_CONFIG").unwrap_or_else(|_| "ta_config.json".into());
    let config = IndicatorConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        IndicatorConfig::default()
    });

    // ── 3. Candle window ─────────────────────────────────────────────────
    let candle_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("AURORA_TA_CANDLES").ok())
        .context("usage: aurora-ta <candles.json> (or set AURORA_TA_CANDLES)")?;

    let content = std::fs::read_to_string(&candle_path)
        .with_context(|| format!("failed to read candle file {candle_path}"))?;
    let candles: Vec<Candle> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse candle file {candle_path}"))?;

    info!(path = %candle_path, candles = candles.len(), "candle window loaded");

    // ── 4. Compute & print ───────────────────────────────────────────────
    let snapshot = IndicatorSnapshot::compute(&candles, &config)
        .context("indicator snapshot failed")?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!(
        close = snapshot.close,
        ema_cross = %snapshot.ema_cross_signal,
        supertrend = %snapshot.supertrend_signal,
        "snapshot complete"
    );
    Ok(())
}
