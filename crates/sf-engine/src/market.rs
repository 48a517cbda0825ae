//! Ticker master list and reference prices

use serde::{Deserialize, Serialize};

use crate::symbols::Ticker;

/// The 4 high-profile tickers used by Mystic and Diamond tables
pub const MAJOR_TICKERS: [&str; 4] = ["AAPL", "MSFT", "GOOGL", "AMZN"];

/// Ticker credited for legacy generic stock symbols
pub const LEGACY_STOCK_TICKER: &str = MAJOR_TICKERS[0];

/// One listed ticker with its fixed reference price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub ticker: Ticker,
    pub price: f64,
}

impl Listing {
    pub fn new(ticker: impl Into<Ticker>, price: f64) -> Self {
        Self { ticker: ticker.into(), price }
    }
}

/// Immutable ticker → reference-price snapshot, sorted by price ascending.
///
/// Live quotes belong to the market-data subsystem; the engine only ever sees
/// a fixed snapshot so prize values stay re-derivable. [`MarketTable::reference`]
/// is the snapshot the shipped weight tables and the simulator use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTable {
    listings: Vec<Listing>,
}

impl MarketTable {
    /// Build a table from listings; sorts by price ascending
    pub fn new(mut listings: Vec<Listing>) -> Self {
        listings.sort_by(|a, b| a.price.total_cmp(&b.price));
        Self { listings }
    }

    /// The built-in 15-ticker reference snapshot
    pub fn reference() -> Self {
        Self::new(vec![
            Listing::new("AAPL", 178.50),
            Listing::new("MSFT", 402.75),
            Listing::new("GOOGL", 141.20),
            Listing::new("AMZN", 171.80),
            Listing::new("TSLA", 248.30),
            Listing::new("NVDA", 487.60),
            Listing::new("META", 352.40),
            Listing::new("NFLX", 445.90),
            Listing::new("AMD", 139.75),
            Listing::new("INTC", 43.20),
            Listing::new("PLTR", 16.85),
            Listing::new("SOFI", 7.95),
            Listing::new("F", 12.40),
            Listing::new("SNAP", 10.95),
            Listing::new("NIO", 8.70),
        ])
    }

    /// Reference price for a ticker
    pub fn price(&self, ticker: &str) -> Option<f64> {
        self.listings
            .iter()
            .find(|l| l.ticker == ticker)
            .map(|l| l.price)
    }

    /// Check if a ticker is listed
    pub fn contains(&self, ticker: &str) -> bool {
        self.price(ticker).is_some()
    }

    /// The `n` cheapest listings
    pub fn cheapest(&self, n: usize) -> &[Listing] {
        &self.listings[..n.min(self.listings.len())]
    }

    /// All listings, price ascending
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
