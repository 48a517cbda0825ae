//! 5x5 scratch grid and seeded generation.

use serde::{Deserialize, Serialize};
use sf_core::{SeededRng, SfError, SfResult};

use crate::catalog::WeightTable;
use crate::symbols::Symbol;

/// Grid edge length.
pub const GRID_SIZE: usize = 5;

/// Total cell count.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// One scratch cell: flat index plus the symbol revealed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub index: u8,
    pub symbol: Symbol,
}

/// Row-major 5x5 symbol grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from exactly [`CELL_COUNT`] row-major symbols.
    pub fn from_symbols(symbols: Vec<Symbol>) -> SfResult<Self> {
        if symbols.len() != CELL_COUNT {
            return Err(SfError::InvalidParam(format!(
                "grid needs {CELL_COUNT} symbols, got {}",
                symbols.len()
            )));
        }
        let cells = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Cell { index: index as u8, symbol })
            .collect();
        Ok(Self { cells })
    }

    /// Symbol at `(row, col)`. Coordinates must be inside the grid.
    #[inline]
    pub fn symbol_at(&self, row: usize, col: usize) -> &Symbol {
        &self.cells[row * GRID_SIZE + col].symbol
    }

    /// Cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Fills a grid row-major by drawing [`CELL_COUNT`] symbols from `table`.
///
/// Draw order is the determinism contract: cell 0 consumes the first roll,
/// cell 24 the last, so one seed always reveals one grid.
pub fn generate_grid(table: &WeightTable, rng: &mut SeededRng) -> Grid {
    let cells = (0..CELL_COUNT)
        .map(|index| Cell { index: index as u8, symbol: table.pick(rng) })
        .collect();
    Grid { cells }
}
