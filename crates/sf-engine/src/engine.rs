//! Ticket orchestration: seed to grid to scan to prize.

use serde::{Deserialize, Serialize};
use sf_core::{SeededRng, SfError, SfResult};

use crate::catalog::SymbolCatalog;
use crate::grid::{self, Grid};
use crate::market::MarketTable;
use crate::prize::{self, Prize};
use crate::scan::{self, ScanOutcome};
use crate::ticket::{Ticket, TicketType};

/// Full outcome of scratching one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScratchResult {
    pub ticket: Ticket,
    pub grid: Grid,
    pub scan: ScanOutcome,
    pub prize: Prize,
}

impl ScratchResult {
    /// Serializes the result for persistence or transport.
    pub fn to_json(&self) -> SfResult<String> {
        serde_json::to_string(self).map_err(|err| SfError::Serialization(err.to_string()))
    }
}

/// Deterministic scratch engine bound to one market snapshot.
///
/// Every outcome is a pure function of the ticket: the id seeds the grid, the
/// scan is mechanical, and prizes are priced off the snapshot this engine was
/// built with.
pub struct ScratchEngine {
    catalog: SymbolCatalog,
    market: MarketTable,
}

impl ScratchEngine {
    /// Engine over the reference market snapshot, validated at startup.
    pub fn new() -> SfResult<Self> {
        Self::with_market(MarketTable::reference())
    }

    /// Engine over a custom market snapshot.
    ///
    /// Fails when the snapshot cannot carry the catalog, e.g. a major ticker
    /// is missing or too few listings remain for the Stocks tables.
    pub fn with_market(market: MarketTable) -> SfResult<Self> {
        let catalog = SymbolCatalog::standard(&market);
        catalog.validate(&market)?;
        log::info!(
            "scratch engine ready: {} listings, {} draw tables",
            market.len(),
            catalog.tables().len()
        );
        Ok(Self { catalog, market })
    }

    /// The market snapshot prizes are priced against.
    #[inline]
    pub fn market(&self) -> &MarketTable {
        &self.market
    }

    /// The draw tables this engine plays.
    #[inline]
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Reveals the grid for a seed. One seed, one grid.
    pub fn generate_grid(&self, seed: &str, ticket_type: TicketType, is_bonus: bool) -> Grid {
        let table = self.catalog.table(ticket_type, is_bonus);
        let mut rng = SeededRng::from_seed(seed);
        grid::generate_grid(table, &mut rng)
    }

    /// Finds every paying run on a grid.
    pub fn scan_grid(&self, grid: &Grid) -> ScanOutcome {
        scan::scan_grid(grid)
    }

    /// Prices a scan against this engine's market snapshot.
    pub fn calculate_prize(
        &self,
        outcome: &ScanOutcome,
        ticket_type: TicketType,
        is_bonus: bool,
    ) -> Prize {
        prize::calculate_prize(&outcome.entries, ticket_type, is_bonus, &self.market)
    }

    /// Runs the full pipeline for one ticket.
    pub fn scratch(&self, ticket: &Ticket) -> ScratchResult {
        let grid = self.generate_grid(ticket.seed(), ticket.ticket_type, ticket.is_bonus);
        let scan = self.scan_grid(&grid);
        let prize = self.calculate_prize(&scan, ticket.ticket_type, ticket.is_bonus);
        ScratchResult { ticket: ticket.clone(), grid, scan, prize }
    }
}
