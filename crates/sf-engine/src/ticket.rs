//! Ticket types and ticket records

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scratch ticket families.
///
/// Each type routes to its own weight table and carries a global payout
/// multiplier stacked on every win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    Tokens,
    Money,
    Stocks,
    Mystic,
    Diamond,
}

impl TicketType {
    /// All ticket types, in shop order
    pub const ALL: [TicketType; 5] = [
        TicketType::Tokens,
        TicketType::Money,
        TicketType::Stocks,
        TicketType::Mystic,
        TicketType::Diamond,
    ];

    /// Global payout multiplier applied to every win of this type
    pub fn payout_multiplier(self) -> u64 {
        match self {
            TicketType::Mystic => 10,
            TicketType::Diamond => 50,
            _ => 1,
        }
    }

    /// Share fraction granted per matched stock cell
    pub fn shares_per_match(self) -> f64 {
        if self == TicketType::Stocks { 0.4 } else { 0.2 }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketType::Tokens => "Tokens",
            TicketType::Money => "Money",
            TicketType::Stocks => "Stocks",
            TicketType::Mystic => "Mystic",
            TicketType::Diamond => "Diamond",
        };
        write!(f, "{}", name)
    }
}

/// A purchased scratch ticket.
///
/// The id doubles as the grid seed: a ticket's outcome is fixed the moment it
/// is issued and can be re-derived from this record alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub ticket_type: TicketType,
    pub is_bonus: bool,
}

impl Ticket {
    pub fn new(id: impl Into<String>, ticket_type: TicketType, is_bonus: bool) -> Self {
        Self {
            id: id.into(),
            ticket_type,
            is_bonus,
        }
    }

    /// The grid seed
    pub fn seed(&self) -> &str {
        &self.id
    }
}
