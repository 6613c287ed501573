// Heuristic move search for the computer opponent.
//
// Candidates are every (card in the acting side's hand, empty cell) pair, scored
// by a static evaluation of the current neighbors rather than a simulated
// placement. Search is O(hand x board) and blind to Same/Plus captures.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::state::{GameState, Move};

pub mod heuristic;
pub mod move_order;

pub use heuristic::{evaluate_move, INVALID_MOVE_SCORE};

/// Tunables for the randomized move choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Chance of playing the top-scored move outright.
    pub best_move_probability: f64,
    /// Otherwise pick uniformly among this many top candidates.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            best_move_probability: 0.7,
            top_k: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEvaluation {
    pub card: Card,
    pub cell: u8,
    pub score: f64,
}

impl MoveEvaluation {
    #[inline]
    pub fn into_move(self) -> Move {
        Move {
            card: self.card,
            cell: self.cell,
        }
    }
}

/// Every placement available to the side to move, scored.
/// Order: hand order, then cell index ascending.
pub fn find_all_possible_moves(state: &GameState) -> Vec<MoveEvaluation> {
    if state.terminal {
        return Vec::new();
    }
    let hand = state.current_hand();
    let mut moves = Vec::with_capacity(hand.len() * (9 - state.board.filled_count() as usize));
    for card in hand {
        for cell in state.board.empty_cells() {
            moves.push(MoveEvaluation {
                card: card.clone(),
                cell,
                score: evaluate_move(state, cell, card),
            });
        }
    }
    moves
}

/// Deterministic argmax; ties go to the first candidate encountered.
pub fn find_best_move(state: &GameState) -> Option<Move> {
    let mut moves = find_all_possible_moves(state);
    let best = move_order::first_best(&moves)?;
    Some(moves.swap_remove(best).into_move())
}

/// Best move most of the time, otherwise one of the top few, per `SearchConfig::default()`.
pub fn find_best_move_with_variation<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Option<Move> {
    find_best_move_with_config(state, SearchConfig::default(), rng)
}

pub fn find_best_move_with_config<R: Rng + ?Sized>(
    state: &GameState,
    config: SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    let mut moves = find_all_possible_moves(state);
    if moves.is_empty() {
        return None;
    }
    move_order::order_by_score(&mut moves);

    let roll: f64 = rng.gen();
    let pick = if roll < config.best_move_probability || moves.len() == 1 {
        0
    } else {
        rng.gen_range(0..config.top_k.clamp(1, moves.len()))
    };
    Some(moves.swap_remove(pick).into_move())
}
