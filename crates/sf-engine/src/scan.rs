//! Run detection across rows, columns, and diagonals.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::grid::{GRID_SIZE, Grid};
use crate::symbols::Symbol;

/// Scan directions: right, down, down-right, down-left.
///
/// Every line is walked once in reading order; the reverse directions are
/// never scanned.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Minimum same-symbol count for a run to pay.
pub const MIN_RUN: usize = 3;

/// One paying run: the symbol, how many cells matched, and the product of
/// every multiplier cell the run walked through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinEntry {
    pub symbol: Symbol,
    pub count: u8,
    pub multiplier: u64,
    pub cell_values: Vec<u32>,
}

/// Everything the scanner found on one grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub entries: Vec<WinEntry>,
    /// Flat indices of every cell in a paying run, sorted, deduplicated.
    pub winning_cells: Vec<u8>,
}

impl ScanOutcome {
    #[inline]
    pub fn is_win(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Scans the grid along every direction and collects paying runs.
///
/// Only base symbols can start a run. A start whose nearest non-multiplier
/// predecessor along the direction carries the same symbol is skipped, so a
/// run is walked exactly once from its first base cell.
pub fn scan_grid(grid: &Grid) -> ScanOutcome {
    let mut entries = Vec::new();
    let mut winning = BTreeSet::new();
    for (dr, dc) in DIRECTIONS {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !grid.symbol_at(row, col).is_base() {
                    continue;
                }
                if already_counted(grid, row, col, dr, dc) {
                    continue;
                }
                scan_run(grid, row, col, dr, dc, &mut entries, &mut winning);
            }
        }
    }
    ScanOutcome { entries, winning_cells: winning.into_iter().collect() }
}

#[inline]
fn in_bounds(row: i32, col: i32) -> bool {
    (0..GRID_SIZE as i32).contains(&row) && (0..GRID_SIZE as i32).contains(&col)
}

#[inline]
fn flat(row: usize, col: usize) -> u8 {
    (row * GRID_SIZE + col) as u8
}

/// True when a scan from an earlier start already walked through this cell.
///
/// Probes backwards along the direction, stepping over multiplier cells the
/// same way the forward walk does, and compares the first base or empty cell
/// it lands on against the start symbol.
fn already_counted(grid: &Grid, row: usize, col: usize, dr: i32, dc: i32) -> bool {
    let start = grid.symbol_at(row, col);
    let mut r = row as i32 - dr;
    let mut c = col as i32 - dc;
    while in_bounds(r, c) {
        let behind = grid.symbol_at(r as usize, c as usize);
        if behind.is_multiplier() {
            r -= dr;
            c -= dc;
            continue;
        }
        return behind == start;
    }
    false
}

/// Walks forward from the start, counting same-symbol cells and folding in
/// multiplier cells, until a different base symbol, an empty cell, or the
/// grid edge stops the run.
fn scan_run(
    grid: &Grid,
    row: usize,
    col: usize,
    dr: i32,
    dc: i32,
    entries: &mut Vec<WinEntry>,
    winning: &mut BTreeSet<u8>,
) {
    let start = grid.symbol_at(row, col);
    let mut count: usize = 1;
    let mut multiplier: u64 = 1;
    let mut members = vec![flat(row, col)];
    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;
    while in_bounds(r, c) {
        let symbol = grid.symbol_at(r as usize, c as usize);
        if symbol == start {
            count += 1;
            members.push(flat(r as usize, c as usize));
        } else if symbol.is_multiplier() {
            multiplier *= u64::from(symbol.value());
            members.push(flat(r as usize, c as usize));
        } else {
            break;
        }
        r += dr;
        c += dc;
    }
    if count >= MIN_RUN {
        entries.push(WinEntry {
            symbol: start.clone(),
            count: count as u8,
            multiplier,
            cell_values: vec![start.value(); count],
        });
        winning.extend(members);
    }
}
