//! Prize math: win entries to token, cash, and share payouts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sf_core::round2;

use crate::market::{LEGACY_STOCK_TICKER, MarketTable};
use crate::scan::WinEntry;
use crate::symbols::{Symbol, Ticker};
use crate::ticket::TicketType;

/// Shares of one ticker won on a ticket, priced at the reference snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPosition {
    pub shares: f64,
    pub price_per_share: f64,
}

impl StockPosition {
    /// Value of the position at the reference price.
    pub fn value(&self) -> f64 {
        round2(self.shares * self.price_per_share)
    }
}

/// Total payout of one ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub tokens: u64,
    pub cash: f64,
    pub stock_shares: BTreeMap<Ticker, StockPosition>,
}

impl Prize {
    /// True when the ticket paid nothing at all.
    pub fn is_blank(&self) -> bool {
        self.tokens == 0 && self.cash == 0.0 && self.stock_shares.is_empty()
    }

    /// Combined value of every stock position.
    pub fn stock_value(&self) -> f64 {
        round2(self.stock_shares.values().map(StockPosition::value).sum())
    }
}

/// Converts scan entries into the final payout.
///
/// Each entry pays its cell values times the run multiplier times the ticket
/// type's payout multiplier. Stock runs pay shares instead of value: the
/// per-match share rate times the run count, scaled by the same multipliers.
/// Bonus tickets get a 25% uplift at the end, with token amounts floored.
pub fn calculate_prize(
    entries: &[WinEntry],
    ticket_type: TicketType,
    is_bonus: bool,
    market: &MarketTable,
) -> Prize {
    let type_multiplier = ticket_type.payout_multiplier();
    let mut tokens: u64 = 0;
    let mut cash: f64 = 0.0;
    let mut shares: BTreeMap<Ticker, f64> = BTreeMap::new();

    for entry in entries {
        let multiplier = entry.multiplier * type_multiplier;
        match &entry.symbol {
            Symbol::Token { .. } | Symbol::LegacyToken => {
                let base: u64 = entry.cell_values.iter().map(|value| u64::from(*value)).sum();
                tokens += base * multiplier;
            }
            Symbol::Cash { .. } | Symbol::LegacyCash => {
                let base: f64 = entry.cell_values.iter().map(|value| f64::from(*value)).sum();
                cash += base * multiplier as f64;
            }
            Symbol::Stock { ticker } => {
                add_shares(&mut shares, market, ticker, ticket_type, entry.count, multiplier);
            }
            Symbol::LegacyStock => {
                add_shares(
                    &mut shares,
                    market,
                    LEGACY_STOCK_TICKER,
                    ticket_type,
                    entry.count,
                    multiplier,
                );
            }
            Symbol::Multiplier2x | Symbol::Multiplier10x | Symbol::Empty => {}
        }
    }

    if is_bonus {
        tokens = tokens * 5 / 4;
        cash *= 1.25;
        for amount in shares.values_mut() {
            *amount *= 1.25;
        }
    }

    let stock_shares = shares
        .into_iter()
        .filter_map(|(ticker, amount)| {
            let price = market.price(&ticker)?;
            Some((ticker, StockPosition { shares: round2(amount), price_per_share: price }))
        })
        .collect();

    Prize { tokens, cash: round2(cash), stock_shares }
}

fn add_shares(
    shares: &mut BTreeMap<Ticker, f64>,
    market: &MarketTable,
    ticker: &str,
    ticket_type: TicketType,
    count: u8,
    multiplier: u64,
) {
    if !market.contains(ticker) {
        log::warn!("skipping stock run on unlisted ticker {ticker}");
        return;
    }
    let won = ticket_type.shares_per_match() * f64::from(count) * multiplier as f64;
    *shares.entry(ticker.to_string()).or_insert(0.0) += won;
}
