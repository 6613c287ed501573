#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // board counts fit in u8/i8

pub mod types;
pub mod rules;
pub mod cards;
pub mod board;
pub mod state;
pub mod deal;
pub mod rng;
pub mod arena;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod search;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, Slot};
pub use crate::cards::{load_cards_from_json, parse_cards_json, Card, CardsDb, Rank};
pub use crate::deal::{initialize_game, CatalogSampler, FixedHands, HandSource};
pub use crate::engine::apply::{
    compare_cards, place_card, place_selected, select_card, try_place_card, PlaceError,
};
pub use crate::engine::score::score;
pub use crate::rng::rng_for_state;
pub use crate::rules::{Rule, Rules};
pub use crate::search::{
    find_all_possible_moves, find_best_move, find_best_move_with_variation, MoveEvaluation,
    SearchConfig,
};
pub use crate::state::{is_terminal, legal_moves, GameState, Move, Player};
pub use crate::types::{Dir, Element, Outcome, Side};
