//! Test fixtures and factory functions for creating test data.

use quiz_core::Card;

/// Deck ids served by the mock backend.
pub const CAPITALS_DECK: &str = "deck-capitals";
pub const EMPTY_DECK: &str = "deck-empty";

pub fn capital_cards() -> Vec<Card> {
    vec![
        Card::new("fr", "Capital of France", "Paris"),
        Card::new("it", "Capital of Italy", "Rome"),
        Card::new("es", "Capital of Spain", "Madrid"),
        Card::new("de", "Capital of Germany", "Berlin"),
        Card::new("pt", "Capital of Portugal", "Lisbon"),
    ]
}
