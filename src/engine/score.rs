use crate::state::GameState;
use crate::types::{Outcome, Side};

/// Board margin = (#Blue owned) - (#Red owned).
#[inline]
pub fn score(state: &GameState) -> i8 {
    state.board.owned_by(Side::Blue) as i8 - state.board.owned_by(Side::Red) as i8
}

/// Recompute both players' scores from board ownership.
#[inline]
pub fn update_scores(state: &mut GameState) {
    for player in &mut state.players {
        player.score = state.board.owned_by(player.side);
    }
}

#[inline]
pub fn outcome_for(blue: u8, red: u8) -> Outcome {
    match blue.cmp(&red) {
        std::cmp::Ordering::Greater => Outcome::Win(Side::Blue),
        std::cmp::Ordering::Less => Outcome::Win(Side::Red),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Mark the game over and fix the winner the first time the state becomes terminal.
/// Returns whether the state is terminal.
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.terminal {
        return true;
    }
    if state.is_terminal() {
        state.terminal = true;
        state.winner = Some(outcome_for(state.score(Side::Blue), state.score(Side::Red)));
    }
    state.terminal
}
