//! End-to-End Scratch Engine Integration Tests
//!
//! Tests the complete ticket pipeline:
//! - Run detection and payout scenarios
//! - Seeded determinism
//! - Golden tickets with pinned outcomes
//! - Serialization

use std::sync::Arc;

use approx::assert_relative_eq;
use sf_engine::{Grid, ScratchEngine, Symbol, Ticket, TicketType, scan_grid};

const AUDIT_GRIDS: usize = 400;

fn engine() -> ScratchEngine {
    ScratchEngine::new().unwrap()
}

fn grid_from_rows(rows: [[Symbol; 5]; 5]) -> Grid {
    Grid::from_symbols(rows.into_iter().flatten().collect()).unwrap()
}

fn empty_rows() -> [[Symbol; 5]; 5] {
    std::array::from_fn(|_| std::array::from_fn(|_| Symbol::Empty))
}

// ═══════════════════════════════════════════════════════════════════════════════
// PAYOUT SCENARIO TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_trailing_multiplier_doubles_a_token_row() {
    let mut rows = empty_rows();
    rows[0] = [
        Symbol::token(10),
        Symbol::token(10),
        Symbol::token(10),
        Symbol::Multiplier2x,
        Symbol::Empty,
    ];
    let engine = engine();
    let scan = engine.scan_grid(&grid_from_rows(rows));
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].count, 3);
    assert_eq!(scan.entries[0].multiplier, 2);
    assert_eq!(scan.winning_cells, [0, 1, 2, 3]);

    // (10+10+10) * 2 on a type-multiplier-1 ticket.
    let prize = engine.calculate_prize(&scan, TicketType::Tokens, false);
    assert_eq!(prize.tokens, 60);
}

#[test]
fn test_type_multiplier_rescales_the_same_row() {
    let mut rows = empty_rows();
    rows[0] = [
        Symbol::token(10),
        Symbol::token(10),
        Symbol::token(10),
        Symbol::Multiplier2x,
        Symbol::Empty,
    ];
    let engine = engine();
    let scan = engine.scan_grid(&grid_from_rows(rows));

    // The identical scan is worth 50x on Diamond, then 1.25x with bonus.
    let diamond = engine.calculate_prize(&scan, TicketType::Diamond, false);
    assert_eq!(diamond.tokens, 3000);
    let bonus = engine.calculate_prize(&scan, TicketType::Diamond, true);
    assert_eq!(bonus.tokens, 3750);
}

#[test]
fn test_interrupted_token_run_with_multiplier() {
    // A run split by a 2x cell still counts as one run and doubles.
    let mut rows = empty_rows();
    rows[1] = [
        Symbol::token(50),
        Symbol::token(50),
        Symbol::Multiplier2x,
        Symbol::token(50),
        Symbol::Empty,
    ];
    let engine = engine();
    let scan = engine.scan_grid(&grid_from_rows(rows));
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].count, 3);
    assert_eq!(scan.entries[0].multiplier, 2);

    let prize = engine.calculate_prize(&scan, TicketType::Tokens, false);
    assert_eq!(prize.tokens, 300);
}

#[test]
fn test_full_row_pays_as_one_run() {
    let mut rows = empty_rows();
    rows[2] = std::array::from_fn(|_| Symbol::token(100));
    let engine = engine();
    let scan = engine.scan_grid(&grid_from_rows(rows));
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].count, 5);

    let prize = engine.calculate_prize(&scan, TicketType::Tokens, false);
    assert_eq!(prize.tokens, 500);
}

#[test]
fn test_diagonal_stock_run_pays_shares() {
    // Four AAPL cells down the main diagonal on a Stocks ticket.
    let mut rows = empty_rows();
    for i in 0..4 {
        rows[i][i] = Symbol::stock("AAPL");
    }
    let engine = engine();
    let scan = engine.scan_grid(&grid_from_rows(rows));
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].count, 4);

    let prize = engine.calculate_prize(&scan, TicketType::Stocks, false);
    assert_relative_eq!(prize.stock_shares["AAPL"].shares, 1.6);
    assert_relative_eq!(prize.stock_shares["AAPL"].price_per_share, 178.50);
}

#[test]
fn test_cash_run_through_ten_x_cell() {
    let mut rows = empty_rows();
    rows[3] = [
        Symbol::cash(50),
        Symbol::Multiplier10x,
        Symbol::cash(50),
        Symbol::cash(50),
        Symbol::Empty,
    ];
    let engine = engine();
    let scan = engine.scan_grid(&grid_from_rows(rows));
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].count, 3);
    assert_eq!(scan.entries[0].multiplier, 10);

    let prize = engine.calculate_prize(&scan, TicketType::Money, false);
    assert_relative_eq!(prize.cash, 1500.0);
}

#[test]
fn test_bonus_pricing_uplifts_a_real_scan() {
    let engine = engine();
    let grid = engine.generate_grid("ticket-0001", TicketType::Tokens, false);
    let scan = engine.scan_grid(&grid);

    let base = engine.calculate_prize(&scan, TicketType::Tokens, false);
    let bonus = engine.calculate_prize(&scan, TicketType::Tokens, true);
    assert_eq!(base.tokens, 190);
    assert_eq!(bonus.tokens, 237);
}

// ═══════════════════════════════════════════════════════════════════════════════
// DETERMINISM TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_same_ticket_same_outcome() {
    let a = engine();
    let b = engine();
    for ticket_type in TicketType::ALL {
        let ticket = Ticket::new("stability-9", ticket_type, false);
        assert_eq!(a.scratch(&ticket), b.scratch(&ticket));
    }
}

#[test]
fn test_different_seeds_reveal_different_grids() {
    let engine = engine();
    let a = engine.generate_grid("determinism-a", TicketType::Tokens, false);
    let b = engine.generate_grid("determinism-b", TicketType::Tokens, false);
    assert_ne!(a, b);
}

#[test]
fn test_bonus_flag_selects_a_different_table() {
    let engine = engine();
    let base = engine.generate_grid("bonus-split", TicketType::Tokens, false);
    let bonus = engine.generate_grid("bonus-split", TicketType::Tokens, true);
    assert_ne!(base, bonus);
}

#[test]
fn test_outcomes_agree_across_threads() {
    let engine = Arc::new(engine());
    let ticket = Ticket::new("threaded-3", TicketType::Diamond, true);
    let reference = engine.scratch(&ticket);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let ticket = ticket.clone();
            std::thread::spawn(move || engine.scratch(&ticket))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}

#[test]
fn test_scan_matches_free_function() {
    let engine = engine();
    let grid = engine.generate_grid("free-fn-5", TicketType::Mystic, false);
    assert_eq!(engine.scan_grid(&grid), scan_grid(&grid));
}

#[test]
fn test_generated_symbol_mix_tracks_table_weights() {
    // 21% of the Tokens base table is empty; 400 grids give 10000 cells.
    let engine = engine();
    let mut empties = 0usize;
    for i in 0..AUDIT_GRIDS {
        let grid = engine.generate_grid(&format!("audit-{i}"), TicketType::Tokens, false);
        empties += grid.cells().iter().filter(|cell| cell.symbol.is_empty()).count();
    }
    assert!((1800..2400).contains(&empties), "empties = {empties}");
}

#[test]
fn test_no_false_wins_on_generated_grids() {
    // Every emitted run holds a base symbol and at least three cells, and no
    // winning index ever points at an empty cell.
    let engine = engine();
    for i in 0..AUDIT_GRIDS {
        let grid = engine.generate_grid(&format!("audit-{i}"), TicketType::Mystic, false);
        let scan = engine.scan_grid(&grid);
        for entry in &scan.entries {
            assert!(entry.count >= 3, "audit-{i}: short run");
            assert!(entry.symbol.is_base(), "audit-{i}: non-base entry");
            assert_eq!(entry.cell_values.len(), entry.count as usize);
        }
        for &cell in &scan.winning_cells {
            assert!(
                !grid.cells()[cell as usize].symbol.is_empty(),
                "audit-{i}: empty cell {cell} marked winning"
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// GOLDEN TICKET TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_golden_tokens_ticket() {
    let result = engine().scratch(&Ticket::new("ticket-0001", TicketType::Tokens, false));
    assert_eq!(result.scan.entries.len(), 2);
    assert_eq!(result.scan.entries[0].symbol, Symbol::token(10));
    assert_eq!(result.scan.entries[0].count, 4);
    assert_eq!(result.scan.entries[0].multiplier, 1);
    assert_eq!(result.scan.entries[1].symbol, Symbol::token(50));
    assert_eq!(result.scan.entries[1].count, 3);
    assert_eq!(result.scan.winning_cells, [6, 7, 8, 9, 10, 16, 22]);
    assert_eq!(result.prize.tokens, 190);
    assert_eq!(result.prize.cash, 0.0);
}

#[test]
fn test_golden_stocks_ticket() {
    let result = engine().scratch(&Ticket::new("stk-7", TicketType::Stocks, false));
    assert_eq!(result.scan.entries.len(), 2);
    for entry in &result.scan.entries {
        assert_eq!(entry.symbol, Symbol::stock("SOFI"));
        assert_eq!(entry.count, 3);
        assert_eq!(entry.multiplier, 1);
    }
    assert_eq!(result.scan.winning_cells, [5, 9, 11, 14, 17, 19]);
    assert_relative_eq!(result.prize.stock_shares["SOFI"].shares, 2.4);
    assert_relative_eq!(result.prize.stock_value(), 19.08);
}

#[test]
fn test_golden_money_ticket() {
    let result = engine().scratch(&Ticket::new("money-3", TicketType::Money, false));
    assert_eq!(result.scan.entries.len(), 2);
    assert_eq!(result.scan.entries[0].symbol, Symbol::cash(50));
    assert_eq!(result.scan.entries[0].multiplier, 1);
    assert_eq!(result.scan.entries[1].symbol, Symbol::cash(500));
    assert_eq!(result.scan.entries[1].multiplier, 2);
    assert_eq!(result.scan.winning_cells, [0, 3, 6, 8, 12, 13, 18]);
    // 50*3 + 500*3*2.
    assert_relative_eq!(result.prize.cash, 3150.0);
}

#[test]
fn test_golden_mystic_ticket_with_run_multiplier() {
    let result = engine().scratch(&Ticket::new("mystic-17", TicketType::Mystic, false));
    assert_eq!(result.scan.entries.len(), 1);
    let entry = &result.scan.entries[0];
    assert_eq!(entry.symbol, Symbol::token(100));
    assert_eq!(entry.count, 3);
    assert_eq!(entry.multiplier, 2);
    assert_eq!(result.scan.winning_cells, [5, 10, 15, 20]);
    // 100*3 * 2 * 10x type multiplier.
    assert_eq!(result.prize.tokens, 6000);
}

#[test]
fn test_golden_mystic_ticket_with_crossing_runs() {
    let result = engine().scratch(&Ticket::new("mystic-42", TicketType::Mystic, false));
    assert_eq!(result.scan.entries.len(), 2);
    assert_eq!(result.scan.entries[0].symbol, Symbol::token(500));
    assert_eq!(result.scan.entries[0].multiplier, 2);
    assert_eq!(result.scan.entries[1].symbol, Symbol::token(500));
    assert_eq!(result.scan.entries[1].multiplier, 1);
    assert_eq!(result.scan.winning_cells, [3, 8, 11, 12, 13, 14]);
    assert_eq!(result.prize.tokens, 45_000);
}

#[test]
fn test_golden_diamond_ticket_with_two_tickers() {
    let result = engine().scratch(&Ticket::new("diamond-12", TicketType::Diamond, false));
    assert_eq!(result.scan.entries.len(), 2);
    assert_eq!(result.scan.entries[0].symbol, Symbol::stock("AAPL"));
    assert_eq!(result.scan.entries[0].multiplier, 1);
    assert_eq!(result.scan.entries[1].symbol, Symbol::stock("MSFT"));
    assert_eq!(result.scan.entries[1].multiplier, 10);
    assert_eq!(result.scan.winning_cells, [9, 14, 15, 16, 17, 19, 24]);
    assert_relative_eq!(result.prize.stock_shares["AAPL"].shares, 30.0);
    assert_relative_eq!(result.prize.stock_shares["MSFT"].shares, 300.0);
    assert_relative_eq!(result.prize.stock_value(), 126_180.0);
}

#[test]
fn test_golden_losing_tickets() {
    let engine = engine();
    let mystic = engine.scratch(&Ticket::new("ticket-0042", TicketType::Mystic, true));
    assert!(!mystic.scan.is_win());
    assert!(mystic.prize.is_blank());

    let diamond = engine.scratch(&Ticket::new("TCK-2024-000137", TicketType::Diamond, false));
    assert!(!diamond.scan.is_win());
    assert!(diamond.prize.is_blank());
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERIALIZATION TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_result_serializes_with_tagged_symbols() {
    let result = engine().scratch(&Ticket::new("ticket-0001", TicketType::Tokens, false));
    let json = result.to_json().unwrap();
    assert!(json.contains("\"ticket\""));
    assert!(json.contains("\"grid\""));
    assert!(json.contains("\"scan\""));
    assert!(json.contains("\"prize\""));
    assert!(json.contains("\"type\":\"token\""));
}

#[test]
fn test_result_survives_a_round_trip() {
    let result = engine().scratch(&Ticket::new("diamond-12", TicketType::Diamond, false));
    let json = result.to_json().unwrap();
    let back: sf_engine::ScratchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
