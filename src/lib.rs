// =============================================================================
// aurora-ta — technical indicator engine
// =============================================================================
//
// Turns ordered OHLCV candle windows into derived indicator series and
// classified trading signals: EMA crossovers, Supertrend, Williams %R,
// Keltner Channels, Money Flow Index and On-Balance Volume.
//
// Every batch engine is a pure, synchronous function over an immutable candle
// slice: it validates the window at the boundary, recomputes its full series
// from scratch and returns the latest value(s) plus a classified signal.  No
// engine holds state across calls; the incremental variants live in `stream`.

pub mod candle;
pub mod config;
pub mod error;
pub mod indicators;
pub mod signal;
pub mod snapshot;
pub mod stream;

pub use candle::{validate_candles, Candle};
pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use signal::{ObvCross, Signal, TrendSignal};
pub use snapshot::IndicatorSnapshot;
