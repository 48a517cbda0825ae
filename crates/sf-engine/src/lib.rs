//! # sf-engine — Deterministic Scratch-Ticket Engine
//!
//! Reveals, scans, and prices scratch tickets. A ticket's id seeds a 5x5
//! symbol grid, runs of three or more matching symbols pay, and prizes are
//! settled in tokens, cash, or fractional shares priced off a fixed market
//! snapshot. The same ticket always reveals the same grid and the same
//! payout, so every outcome can be audited after the fact.
//!
//! ## Features
//!
//! - Seeded grid generation: one ticket id, one grid
//! - Weighted symbol catalogs per ticket type, base and bonus modes
//! - Run detection across rows, columns, and both diagonals, with
//!   multiplier cells folding into the run they touch
//! - Prize settlement in tokens, cash, and fractional shares
//! - Serializable outcomes for persistence and transport
//!
//! ## Architecture
//!
//! ```text
//! ticket id --> SeededRng --> Grid --> ScanOutcome --> Prize
//!                   |           |                        |
//!            SymbolCatalog  (weighted draw)         MarketTable
//! ```

pub mod catalog;
pub mod engine;
pub mod grid;
pub mod market;
pub mod prize;
pub mod scan;
pub mod symbols;
pub mod ticket;

pub use catalog::{SymbolCatalog, TABLE_TARGET, WeightTable, WeightedSymbol};
pub use engine::{ScratchEngine, ScratchResult};
pub use grid::{CELL_COUNT, Cell, GRID_SIZE, Grid, generate_grid};
pub use market::{LEGACY_STOCK_TICKER, Listing, MAJOR_TICKERS, MarketTable};
pub use prize::{Prize, StockPosition, calculate_prize};
pub use scan::{MIN_RUN, ScanOutcome, WinEntry, scan_grid};
pub use symbols::{LEGACY_VALUE, Symbol, Ticker};
pub use ticket::{Ticket, TicketType};
