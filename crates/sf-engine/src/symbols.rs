//! Symbol definitions for scratch-ticket grids

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock ticker identifier (e.g. "AAPL")
pub type Ticker = String;

/// Flat payout value of the legacy generic symbols
pub const LEGACY_VALUE: u32 = 15;

/// A single grid symbol.
///
/// Base symbols (token, cash, stock and their legacy forms) are what runs are
/// made of; multiplier symbols scale a run without extending it; `Empty`
/// breaks every run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Symbol {
    /// Fixed token denomination (10, 50, 100, 500, 1000)
    Token { amount: u32 },
    /// Fixed cash denomination (50, 500, 1000, 5000, 10000)
    Cash { amount: u32 },
    /// One listed stock ticker
    Stock { ticker: Ticker },
    /// Legacy generic token symbol, flat value
    LegacyToken,
    /// Legacy generic cash symbol, flat value
    LegacyCash,
    /// Legacy generic stock symbol, flat value
    LegacyStock,
    /// Doubles a run's payout
    Multiplier2x,
    /// Tenfolds a run's payout
    Multiplier10x,
    /// No symbol
    Empty,
}

impl Symbol {
    /// Token denomination symbol
    pub fn token(amount: u32) -> Self {
        Self::Token { amount }
    }

    /// Cash denomination symbol
    pub fn cash(amount: u32) -> Self {
        Self::Cash { amount }
    }

    /// Stock symbol for a ticker
    pub fn stock(ticker: impl Into<Ticker>) -> Self {
        Self::Stock { ticker: ticker.into() }
    }

    /// Payout unit carried by this symbol.
    ///
    /// Token and cash symbols carry their denomination, legacy symbols the
    /// flat legacy value, multipliers their factor. Stock symbols pay by
    /// share count, not value, and carry 0 here.
    pub fn value(&self) -> u32 {
        match self {
            Symbol::Token { amount } | Symbol::Cash { amount } => *amount,
            Symbol::Stock { .. } => 0,
            Symbol::LegacyToken | Symbol::LegacyCash | Symbol::LegacyStock => LEGACY_VALUE,
            Symbol::Multiplier2x => 2,
            Symbol::Multiplier10x => 10,
            Symbol::Empty => 0,
        }
    }

    /// Check if this symbol scales a run instead of extending it
    pub fn is_multiplier(&self) -> bool {
        matches!(self, Symbol::Multiplier2x | Symbol::Multiplier10x)
    }

    /// Check if this cell holds no symbol
    pub fn is_empty(&self) -> bool {
        matches!(self, Symbol::Empty)
    }

    /// Check if this symbol can form a run
    pub fn is_base(&self) -> bool {
        !self.is_multiplier() && !self.is_empty()
    }

    /// Table key as used in listings and logs (e.g. "token_10", "stock_AAPL")
    pub fn key(&self) -> String {
        match self {
            Symbol::Token { amount } => format!("token_{}", amount),
            Symbol::Cash { amount } => format!("cash_{}", amount),
            Symbol::Stock { ticker } => format!("stock_{}", ticker),
            Symbol::LegacyToken => "token".to_string(),
            Symbol::LegacyCash => "cash".to_string(),
            Symbol::LegacyStock => "stock".to_string(),
            Symbol::Multiplier2x => "multiplier2x".to_string(),
            Symbol::Multiplier10x => "multiplier10x".to_string(),
            Symbol::Empty => "empty".to_string(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
