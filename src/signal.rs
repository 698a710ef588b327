// =============================================================================
// Signal vocabulary
// =============================================================================
//
// One tagged enum per indicator family, replacing ad-hoc strings.  The
// thresholds that map numeric state onto these variants are fixed per engine;
// this module only defines the vocabulary.

use serde::{Deserialize, Serialize};

/// Threshold-based classification used by the oscillators and the channel
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Bearish => write!(f, "Bearish"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Crossover classification used by the trend engines.  `Bullish`/`Bearish`
/// mark a fresh cross on the latest bar; the trend variants mark continuation
/// with no fresh cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendSignal {
    Bullish,
    Bearish,
    BullishTrend,
    BearishTrend,
}

impl TrendSignal {
    /// True for both the fresh golden cross and sustained up-trend.
    pub fn is_bullish(&self) -> bool {
        matches!(self, Self::Bullish | Self::BullishTrend)
    }
}

impl std::fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Bearish => write!(f, "Bearish"),
            Self::BullishTrend => write!(f, "BullishTrend"),
            Self::BearishTrend => write!(f, "BearishTrend"),
        }
    }
}

/// OBV vs. its signal line.  Exposed separately from the OBV trend
/// classification; the two are independent outputs, not a merged enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObvCross {
    Buy,
    Sell,
}

impl std::fmt::Display for ObvCross {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}
