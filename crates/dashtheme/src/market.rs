//! Market semantics: mapping dashboard data onto roles.
//!
//! Hosts rarely pick `profit` or `loss` by hand. A price bar, a news
//! headline's sentiment or an indicator reading decides it, and the rules
//! for that live here so every view colors the same data the same way.
//!
//! ```rust
//! use dashtheme::market::{candle_role, TradeSignal};
//! use dashtheme::SemanticRole;
//!
//! assert_eq!(candle_role(101.0, 99.5), SemanticRole::Loss);
//! assert_eq!("BUY".parse::<TradeSignal>().unwrap().role(), SemanticRole::Profit);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::role::SemanticRole;

/// RSI above this reading is overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI below this reading is oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Error returned when a trade signal name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown trade signal '{0}' (expected BUY, SELL or HOLD)")]
pub struct UnknownSignalError(pub String);

/// A trading recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSignal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl TradeSignal {
    /// Derives a signal from the latest two MACD readings and the RSI.
    ///
    /// A MACD crossover above its signal line is a buy and a crossover
    /// below is a sell. An extreme RSI overrides the crossover: oversold
    /// buys, overbought sells. Anything else holds.
    pub fn from_indicators(previous: MacdReading, current: MacdReading, rsi: f64) -> Self {
        if rsi < RSI_OVERSOLD {
            return TradeSignal::Buy;
        }
        if rsi > RSI_OVERBOUGHT {
            return TradeSignal::Sell;
        }
        if current.macd > current.signal && previous.macd <= previous.signal {
            TradeSignal::Buy
        } else if current.macd < current.signal && previous.macd >= previous.signal {
            TradeSignal::Sell
        } else {
            TradeSignal::Hold
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TradeSignal::Buy => "BUY",
            TradeSignal::Sell => "SELL",
            TradeSignal::Hold => "HOLD",
        }
    }

    /// Buy reads as profit, sell as loss, hold as neutral.
    pub fn role(self) -> SemanticRole {
        match self {
            TradeSignal::Buy => SemanticRole::Profit,
            TradeSignal::Sell => SemanticRole::Loss,
            TradeSignal::Hold => SemanticRole::Neutral,
        }
    }
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TradeSignal {
    type Err = UnknownSignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(TradeSignal::Buy),
            "SELL" => Ok(TradeSignal::Sell),
            "HOLD" => Ok(TradeSignal::Hold),
            _ => Err(UnknownSignalError(s.to_string())),
        }
    }
}

/// Role for a news sentiment polarity in `[-1, 1]`.
///
/// NaN reads as neutral.
pub fn sentiment_role(polarity: f64) -> SemanticRole {
    change_role(polarity)
}

/// Role for a signed change (price delta, P&L, percent move).
pub fn change_role(delta: f64) -> SemanticRole {
    if delta > 0.0 {
        SemanticRole::Profit
    } else if delta < 0.0 {
        SemanticRole::Loss
    } else {
        SemanticRole::Neutral
    }
}

/// Role for a price bar: red when it closed below its open, green otherwise.
///
/// Unlike [`change_role`], a flat bar is green.
pub fn candle_role(open: f64, close: f64) -> SemanticRole {
    if open > close {
        SemanticRole::Loss
    } else {
        SemanticRole::Profit
    }
}

/// RSI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RsiStatus {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiStatus {
    /// Classifies a reading. The thresholds themselves are neutral.
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > RSI_OVERBOUGHT {
            RsiStatus::Overbought
        } else if rsi < RSI_OVERSOLD {
            RsiStatus::Oversold
        } else {
            RsiStatus::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RsiStatus::Overbought => "Overbought",
            RsiStatus::Oversold => "Oversold",
            RsiStatus::Neutral => "Neutral",
        }
    }

    /// Overbought reads as a sell (loss), oversold as a buy (profit).
    pub fn role(self) -> SemanticRole {
        match self {
            RsiStatus::Overbought => SemanticRole::Loss,
            RsiStatus::Oversold => SemanticRole::Profit,
            RsiStatus::Neutral => SemanticRole::Neutral,
        }
    }
}

impl fmt::Display for RsiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One MACD sample: the MACD line and its signal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
}

impl MacdReading {
    pub fn new(macd: f64, signal: f64) -> Self {
        Self { macd, signal }
    }
}

/// Direction of the MACD relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MacdTrend {
    Bullish,
    Bearish,
}

impl MacdTrend {
    /// Bullish when the MACD line is strictly above its signal line.
    pub fn from_values(macd: f64, signal: f64) -> Self {
        if macd > signal {
            MacdTrend::Bullish
        } else {
            MacdTrend::Bearish
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MacdTrend::Bullish => "Bullish",
            MacdTrend::Bearish => "Bearish",
        }
    }

    pub fn role(self) -> SemanticRole {
        match self {
            MacdTrend::Bullish => SemanticRole::Profit,
            MacdTrend::Bearish => SemanticRole::Loss,
        }
    }
}

impl From<MacdReading> for MacdTrend {
    fn from(reading: MacdReading) -> Self {
        MacdTrend::from_values(reading.macd, reading.signal)
    }
}

impl fmt::Display for MacdTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
