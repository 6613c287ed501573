use crate::board::Board;
use crate::cards::Card;
use crate::engine::apply::compare_cards;
use crate::state::GameState;
use crate::types::Dir;

/// Returned for placements onto occupied or off-board cells.
pub const INVALID_MOVE_SCORE: f64 = -1000.0;

const CORNER_BONUS: f64 = 3.0;
const EDGE_BONUS: f64 = 1.0;
const CAPTURE_BONUS: f64 = 5.0;
const MULTI_CAPTURE_BONUS: f64 = 2.0;
const FRIENDLY_NEIGHBOR_BONUS: f64 = 1.0;
const NO_CAPTURE_PENALTY: f64 = 2.0;

/// 0 = corner, 1 = edge, 2 = center
#[inline]
fn cell_category(cell: u8) -> u8 {
    match cell {
        0 | 2 | 6 | 8 => 0,
        4 => 2,
        _ => 1,
    }
}

#[inline]
fn positional_bonus(cell: u8) -> f64 {
    match cell_category(cell) {
        0 => CORNER_BONUS,
        1 => EDGE_BONUS,
        _ => 0.0,
    }
}

/// Exposure of one side of the card to a future attack from an empty cell.
#[inline]
fn exposure(card: &Card, dir: Dir) -> f64 {
    f64::from(10 - card.rank(dir).value()) / 2.0
}

/// Static value of playing `card` at `cell` for the side to move.
///
/// Only looks at current neighbors and models the base capture rule; Same/Plus
/// captures and follow-up replies are not simulated.
pub fn evaluate_move(state: &GameState, cell: u8, card: &Card) -> f64 {
    if cell >= 9 || !state.board.is_empty(cell) {
        return INVALID_MOVE_SCORE;
    }
    let me = state.next;
    let mut score = positional_bonus(cell);
    let mut captures = 0u32;
    let mut risk = 0.0;

    for dir in Dir::all() {
        let Some(nidx) = Board::neighbors(cell)[Board::dir_index(dir)] else { continue };
        match state.board.get(nidx) {
            Some(slot) if slot.owner != me => {
                if compare_cards(card, &slot.card, dir) {
                    captures += 1;
                    score += CAPTURE_BONUS;
                }
            }
            Some(_) => score += FRIENDLY_NEIGHBOR_BONUS,
            None => risk += exposure(card, dir),
        }
    }

    score += f64::from(card.total_rank()) / 10.0;

    if captures > 1 {
        score += MULTI_CAPTURE_BONUS * f64::from(captures);
    }
    if captures == 0 {
        score -= NO_CAPTURE_PENALTY;
    }

    score - risk
}
