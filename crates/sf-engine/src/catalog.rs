//! Weighted symbol tables for every ticket variant.

use serde::{Deserialize, Serialize};
use sf_core::{SeededRng, SfError, SfResult};

use crate::market::{MAJOR_TICKERS, MarketTable};
use crate::symbols::Symbol;
use crate::ticket::TicketType;

/// Sum every draw table must reach, in percent.
pub const TABLE_TARGET: u32 = 100;

/// Weight pinned on the empty cell in Mystic and Diamond base tables.
const PREMIUM_EMPTY_WEIGHT: u32 = 3;
const PREMIUM_BASE_TARGET: u32 = TABLE_TARGET - PREMIUM_EMPTY_WEIGHT;

/// One symbol with its draw weight in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSymbol {
    pub symbol: Symbol,
    pub weight: u32,
}

impl WeightedSymbol {
    pub fn new(symbol: Symbol, weight: u32) -> Self {
        Self { symbol, weight }
    }
}

/// Draw table for one ticket type in one mode (base or bonus).
///
/// Entry order is part of the contract: [`WeightTable::pick`] walks the
/// cumulative weights in order, so reordering entries changes which symbol a
/// given roll lands on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub ticket_type: TicketType,
    pub is_bonus: bool,
    entries: Vec<WeightedSymbol>,
}

impl WeightTable {
    fn new(ticket_type: TicketType, is_bonus: bool, entries: Vec<WeightedSymbol>) -> Self {
        Self { ticket_type, is_bonus, entries }
    }

    /// Entries in draw order.
    #[inline]
    pub fn entries(&self) -> &[WeightedSymbol] {
        &self.entries
    }

    /// Sum of all entry weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }

    /// Weight assigned to `symbol`, or 0 if the table does not carry it.
    pub fn weight_of(&self, symbol: &Symbol) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.symbol == *symbol)
            .map_or(0, |entry| entry.weight)
    }

    /// Draws one symbol.
    ///
    /// Rolls in `[0, 100)` and walks the cumulative weights until the running
    /// sum reaches the roll. Falls back to an empty cell if the walk overruns,
    /// which cannot happen while the table sums to [`TABLE_TARGET`].
    pub fn pick(&self, rng: &mut SeededRng) -> Symbol {
        let roll = rng.next_f64() * 100.0;
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += f64::from(entry.weight);
            if cumulative >= roll {
                return entry.symbol.clone();
            }
        }
        Symbol::Empty
    }

    /// Checks the table sum and that every stock entry trades on `market`.
    pub fn validate(&self, market: &MarketTable) -> SfResult<()> {
        let total = self.total_weight();
        if total != TABLE_TARGET {
            return Err(SfError::InvalidTable {
                table: self.label(),
                reason: format!("weights sum to {total}, expected {TABLE_TARGET}"),
            });
        }
        for entry in &self.entries {
            if let Symbol::Stock { ticker } = &entry.symbol {
                if !market.contains(ticker) {
                    return Err(SfError::UnknownTicker(ticker.clone()));
                }
            }
        }
        Ok(())
    }

    fn label(&self) -> String {
        let mode = if self.is_bonus { "bonus" } else { "base" };
        format!("{} {mode}", self.ticket_type)
    }
}

/// Every draw table the engine ships: five ticket types, base and bonus each.
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    tables: Vec<WeightTable>,
}

impl SymbolCatalog {
    /// Builds the standard catalog against a market snapshot.
    ///
    /// The Stocks tables play the four cheapest listings on `market`; the
    /// premium tables play the four majors regardless of the snapshot.
    pub fn standard(market: &MarketTable) -> Self {
        let mut tables = Vec::with_capacity(TicketType::ALL.len() * 2);
        for ticket_type in TicketType::ALL {
            tables.push(build_table(ticket_type, false, market));
            tables.push(build_table(ticket_type, true, market));
        }
        Self { tables }
    }

    /// Looks up the table for a ticket type and mode.
    pub fn table(&self, ticket_type: TicketType, is_bonus: bool) -> &WeightTable {
        // standard() pushes base then bonus for each type in ALL order.
        &self.tables[type_index(ticket_type) * 2 + usize::from(is_bonus)]
    }

    /// All tables in construction order.
    #[inline]
    pub fn tables(&self) -> &[WeightTable] {
        &self.tables
    }

    /// Validates every table against `market`.
    pub fn validate(&self, market: &MarketTable) -> SfResult<()> {
        for table in &self.tables {
            table.validate(market)?;
        }
        Ok(())
    }
}

fn type_index(ticket_type: TicketType) -> usize {
    match ticket_type {
        TicketType::Tokens => 0,
        TicketType::Money => 1,
        TicketType::Stocks => 2,
        TicketType::Mystic => 3,
        TicketType::Diamond => 4,
    }
}

fn build_table(ticket_type: TicketType, is_bonus: bool, market: &MarketTable) -> WeightTable {
    let entries = match ticket_type {
        TicketType::Tokens => tokens_entries(is_bonus),
        TicketType::Money => money_entries(is_bonus),
        TicketType::Stocks => stocks_entries(is_bonus, market),
        TicketType::Mystic => mystic_entries(is_bonus),
        TicketType::Diamond => diamond_entries(is_bonus),
    };
    WeightTable::new(ticket_type, is_bonus, entries)
}

fn tokens_entries(is_bonus: bool) -> Vec<WeightedSymbol> {
    let weights: [u32; 8] = if is_bonus {
        [30, 20, 14, 8, 4, 8, 3, 13]
    } else {
        [30, 20, 12, 6, 3, 6, 2, 21]
    };
    let symbols = [
        Symbol::token(10),
        Symbol::token(50),
        Symbol::token(100),
        Symbol::token(500),
        Symbol::token(1000),
        Symbol::Multiplier2x,
        Symbol::Multiplier10x,
        Symbol::Empty,
    ];
    symbols
        .into_iter()
        .zip(weights)
        .map(|(symbol, weight)| WeightedSymbol::new(symbol, weight))
        .collect()
}

fn money_entries(is_bonus: bool) -> Vec<WeightedSymbol> {
    let weights: [u32; 8] = if is_bonus {
        [32, 20, 12, 5, 3, 7, 3, 18]
    } else {
        [32, 18, 10, 4, 2, 6, 2, 26]
    };
    let symbols = [
        Symbol::cash(50),
        Symbol::cash(500),
        Symbol::cash(1000),
        Symbol::cash(5000),
        Symbol::cash(10000),
        Symbol::Multiplier2x,
        Symbol::Multiplier10x,
        Symbol::Empty,
    ];
    symbols
        .into_iter()
        .zip(weights)
        .map(|(symbol, weight)| WeightedSymbol::new(symbol, weight))
        .collect()
}

fn stocks_entries(is_bonus: bool, market: &MarketTable) -> Vec<WeightedSymbol> {
    let (ticker_weights, tail): ([u32; 4], [u32; 3]) = if is_bonus {
        ([29, 22, 15, 10], [8, 4, 12])
    } else {
        ([26, 20, 14, 10], [7, 3, 20])
    };
    let mut entries = Vec::with_capacity(7);
    for (listing, weight) in market.cheapest(4).iter().zip(ticker_weights) {
        entries.push(WeightedSymbol::new(Symbol::stock(listing.ticker.clone()), weight));
    }
    entries.push(WeightedSymbol::new(Symbol::Multiplier2x, tail[0]));
    entries.push(WeightedSymbol::new(Symbol::Multiplier10x, tail[1]));
    entries.push(WeightedSymbol::new(Symbol::Empty, tail[2]));
    entries
}

fn mystic_entries(is_bonus: bool) -> Vec<WeightedSymbol> {
    let mut raw = vec![
        (Symbol::token(100), 2.0),
        (Symbol::token(500), 1.2),
        (Symbol::token(1000), 0.6),
        (Symbol::cash(1000), 2.0),
        (Symbol::cash(5000), 1.2),
        (Symbol::cash(10000), 0.6),
    ];
    for ticker in MAJOR_TICKERS {
        raw.push((Symbol::stock(ticker), 1.5));
    }
    raw.push((Symbol::Multiplier2x, 2.2));
    raw.push((Symbol::Multiplier10x, 1.0));

    let mut entries = rescale_to_target(&raw, PREMIUM_BASE_TARGET);
    entries.push(WeightedSymbol::new(Symbol::Empty, PREMIUM_EMPTY_WEIGHT));
    if is_bonus {
        shift_weight(&mut entries, &Symbol::Empty, &Symbol::token(1000), 1);
        shift_weight(&mut entries, &Symbol::Empty, &Symbol::Multiplier10x, 1);
    }
    entries
}

fn diamond_entries(is_bonus: bool) -> Vec<WeightedSymbol> {
    let mut raw = vec![
        (Symbol::token(100), 1.0),
        (Symbol::token(500), 1.4),
        (Symbol::token(1000), 1.0),
        (Symbol::cash(1000), 1.0),
        (Symbol::cash(5000), 1.4),
        (Symbol::cash(10000), 1.0),
    ];
    for ticker in MAJOR_TICKERS {
        raw.push((Symbol::stock(ticker), 1.6));
    }
    raw.push((Symbol::Multiplier2x, 2.4));
    raw.push((Symbol::Multiplier10x, 1.4));

    let mut entries = rescale_to_target(&raw, PREMIUM_BASE_TARGET);
    entries.push(WeightedSymbol::new(Symbol::Empty, PREMIUM_EMPTY_WEIGHT));
    if is_bonus {
        shift_weight(&mut entries, &Symbol::Empty, &Symbol::cash(10000), 1);
        shift_weight(&mut entries, &Symbol::Empty, &Symbol::Multiplier10x, 1);
    }
    entries
}

/// Scales fractional weights to integers summing to `target`.
///
/// Floors each scaled weight, then hands the remaining units to the entries
/// with the largest fractional parts. Ties keep table order.
fn rescale_to_target(raw: &[(Symbol, f64)], target: u32) -> Vec<WeightedSymbol> {
    let total: f64 = raw.iter().map(|(_, weight)| weight).sum();
    let mut entries = Vec::with_capacity(raw.len());
    let mut fractions = Vec::with_capacity(raw.len());
    let mut assigned = 0u32;
    for (index, (symbol, weight)) in raw.iter().enumerate() {
        let scaled = weight * f64::from(target) / total;
        let floored = scaled.floor();
        assigned += floored as u32;
        fractions.push((index, scaled - floored));
        entries.push(WeightedSymbol::new(symbol.clone(), floored as u32));
    }
    fractions.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut remainder = target.saturating_sub(assigned);
    for (index, _) in fractions {
        if remainder == 0 {
            break;
        }
        entries[index].weight += 1;
        remainder -= 1;
    }
    entries
}

/// Moves draw weight from one symbol to another, keeping the table sum fixed.
fn shift_weight(entries: &mut [WeightedSymbol], from: &Symbol, to: &Symbol, amount: u32) {
    for entry in entries.iter_mut() {
        if entry.symbol == *from {
            entry.weight = entry.weight.saturating_sub(amount);
        } else if entry.symbol == *to {
            entry.weight += amount;
        }
    }
}
