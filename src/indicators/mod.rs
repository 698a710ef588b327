// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free batch implementations of the indicator engines.
// Every engine recomputes its full series from the supplied candle window on
// each call and returns a typed `Result`; callers are forced to handle
// insufficient-data and malformed-input scenarios.  See `crate::stream` for
// the incremental accumulator variants.

pub mod atr;
pub mod ema;
pub mod ema_cross;
pub mod keltner;
pub mod mfi;
pub mod obv;
pub mod supertrend;
pub mod williams_r;

pub use atr::{atr, latest_atr, true_range};
pub use ema::{ema, latest_ema};
pub use ema_cross::{ema_cross, EmaCross};
pub use keltner::{keltner, Keltner};
pub use mfi::{mfi, Mfi};
pub use obv::{obv, obv_series, Obv};
pub use supertrend::{supertrend, Supertrend};
pub use williams_r::{williams_r, WilliamsR};
