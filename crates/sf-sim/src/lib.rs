//! # sf-sim — Batch Ticket Simulator
//!
//! Scratches large ticket batches against the deterministic engine and
//! reports per-type hit rates and payout totals. Ticket ids are derived from
//! a seed prefix, so a report is reproducible on any machine and at any
//! thread count. Money totals are accumulated in integer cents to keep the
//! parallel reduction order out of the result.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sf_core::{SfError, SfResult};
use sf_engine::{ScratchEngine, ScratchResult, Ticket, TicketType};

/// Batch parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Tickets scratched per ticket type.
    pub tickets_per_type: u64,
    /// Fraction of each batch issued as bonus tickets, in `[0, 1]`.
    pub bonus_ratio: f64,
    /// Prefix for derived ticket ids.
    pub seed_prefix: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tickets_per_type: 10_000, bonus_ratio: 0.2, seed_prefix: "sim".into() }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SfResult<()> {
        if self.tickets_per_type == 0 {
            return Err(SfError::InvalidParam("tickets_per_type must be nonzero".into()));
        }
        if !(0.0..=1.0).contains(&self.bonus_ratio) {
            return Err(SfError::InvalidParam(format!(
                "bonus_ratio {} outside [0, 1]",
                self.bonus_ratio
            )));
        }
        Ok(())
    }
}

/// Aggregates for one ticket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStats {
    pub ticket_type: TicketType,
    pub plays: u64,
    pub wins: u64,
    pub bonus_plays: u64,
    pub total_tokens: u64,
    pub total_cash: f64,
    pub total_stock_value: f64,
    /// Largest token payout on a single ticket.
    pub max_tokens: u64,
    /// Largest cash-plus-share payout on a single ticket.
    pub max_money_value: f64,
}

impl TypeStats {
    /// Fraction of tickets that paid anything.
    pub fn hit_rate(&self) -> f64 {
        if self.plays == 0 { 0.0 } else { self.wins as f64 / self.plays as f64 }
    }

    /// Average token payout per play.
    pub fn average_tokens(&self) -> f64 {
        if self.plays == 0 { 0.0 } else { self.total_tokens as f64 / self.plays as f64 }
    }

    /// Average cash-plus-share payout per play.
    pub fn average_money_value(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            (self.total_cash + self.total_stock_value) / self.plays as f64
        }
    }
}

/// Full batch report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub config: SimConfig,
    pub stats: Vec<TypeStats>,
}

impl SimReport {
    pub fn total_plays(&self) -> u64 {
        self.stats.iter().map(|stats| stats.plays).sum()
    }

    pub fn to_json(&self) -> SfResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| SfError::Serialization(err.to_string()))
    }
}

/// Money totals in cents so the reduction is exact and order-free.
#[derive(Debug, Clone, Copy, Default)]
struct Accum {
    plays: u64,
    wins: u64,
    bonus_plays: u64,
    tokens: u64,
    cash_cents: u64,
    stock_value_cents: u64,
    max_tokens: u64,
    max_money_cents: u64,
}

impl Accum {
    fn record(mut self, result: &ScratchResult) -> Self {
        self.plays += 1;
        if result.ticket.is_bonus {
            self.bonus_plays += 1;
        }
        if result.scan.is_win() {
            self.wins += 1;
        }
        let cash_cents = to_cents(result.prize.cash);
        let stock_cents = to_cents(result.prize.stock_value());
        self.tokens += result.prize.tokens;
        self.cash_cents += cash_cents;
        self.stock_value_cents += stock_cents;
        self.max_tokens = self.max_tokens.max(result.prize.tokens);
        self.max_money_cents = self.max_money_cents.max(cash_cents + stock_cents);
        self
    }

    fn add(self, other: Self) -> Self {
        Self {
            plays: self.plays + other.plays,
            wins: self.wins + other.wins,
            bonus_plays: self.bonus_plays + other.bonus_plays,
            tokens: self.tokens + other.tokens,
            cash_cents: self.cash_cents + other.cash_cents,
            stock_value_cents: self.stock_value_cents + other.stock_value_cents,
            max_tokens: self.max_tokens.max(other.max_tokens),
            max_money_cents: self.max_money_cents.max(other.max_money_cents),
        }
    }

    fn into_stats(self, ticket_type: TicketType) -> TypeStats {
        TypeStats {
            ticket_type,
            plays: self.plays,
            wins: self.wins,
            bonus_plays: self.bonus_plays,
            total_tokens: self.tokens,
            total_cash: cents_to_value(self.cash_cents),
            total_stock_value: cents_to_value(self.stock_value_cents),
            max_tokens: self.max_tokens,
            max_money_value: cents_to_value(self.max_money_cents),
        }
    }
}

fn to_cents(value: f64) -> u64 {
    (value * 100.0).round() as u64
}

fn cents_to_value(cents: u64) -> f64 {
    cents as f64 / 100.0
}

/// Scratches `tickets_per_type` tickets of every type in parallel.
///
/// Ticket ids follow `{prefix}-{type}-{index}`, and the first `bonus_ratio`
/// share of each batch is issued as bonus tickets, so the same config always
/// produces the same report.
pub fn run(config: &SimConfig) -> SfResult<SimReport> {
    config.validate()?;
    let engine = ScratchEngine::new()?;
    let bonus_cut = (config.tickets_per_type as f64 * config.bonus_ratio) as u64;

    let mut stats = Vec::with_capacity(TicketType::ALL.len());
    for ticket_type in TicketType::ALL {
        let accum = (0..config.tickets_per_type)
            .into_par_iter()
            .fold(Accum::default, |accum, index| {
                let id = format!("{}-{}-{}", config.seed_prefix, ticket_type, index);
                let ticket = Ticket::new(id, ticket_type, index < bonus_cut);
                accum.record(&engine.scratch(&ticket))
            })
            .reduce(Accum::default, Accum::add);
        log::info!(
            "{ticket_type}: {} plays, {} wins ({:.1}% hit rate)",
            accum.plays,
            accum.wins,
            100.0 * accum.wins as f64 / accum.plays as f64
        );
        stats.push(accum.into_stats(ticket_type));
    }
    Ok(SimReport { config: config.clone(), stats })
}
