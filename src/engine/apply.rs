use std::error::Error;
use std::fmt;

use crate::board::{Board, Slot};
use crate::cards::{Card, Rank};
use crate::engine::score::{check_game_over, update_scores};
use crate::rules::{Rule, Rules};
use crate::state::GameState;
use crate::types::{Dir, Side};

/// Why a placement request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    OutOfRange(u8),
    Occupied(u8),
    CardNotInHand(u32),
    GameOver,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfRange(cell) => write!(f, "Cell index {cell} out of range"),
            PlaceError::Occupied(cell) => write!(f, "Cell {cell} is not empty"),
            PlaceError::CardNotInHand(id) => {
                write!(f, "Card id {id} not in current player's hand")
            }
            PlaceError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl Error for PlaceError {}

/// Decides whether the placed card's facing rank captures the defender's facing-back rank.
pub type CapturePredicate = fn(attack: Rank, defend: Rank) -> bool;

#[inline]
fn basic_capture(attack: Rank, defend: Rank) -> bool {
    attack > defend
}

#[inline]
fn same_capture(attack: Rank, defend: Rank) -> bool {
    attack == defend
}

#[inline]
fn plus_capture(attack: Rank, defend: Rank) -> bool {
    attack.value() + defend.value() == 10
}

/// Modifier rules that take part in capture resolution. Rules without an entry
/// (Open, Random, Same Wall, Elemental, Sudden Death) are accepted but inert here.
const CAPTURE_TABLE: [(Rule, CapturePredicate); 2] =
    [(Rule::Same, same_capture), (Rule::Plus, plus_capture)];

#[inline]
pub fn capture_predicate(rule: Rule) -> Option<CapturePredicate> {
    CAPTURE_TABLE
        .iter()
        .find(|(r, _)| *r == rule)
        .map(|(_, p)| *p)
}

/// Base predicate plus every active modifier that has one.
fn active_predicates(rules: Rules) -> Vec<CapturePredicate> {
    let mut preds: Vec<CapturePredicate> = vec![basic_capture];
    preds.extend(rules.iter().filter_map(capture_predicate));
    preds
}

/// Attacker's rank facing `dir` strictly beats the defender's rank facing back.
#[inline]
pub fn compare_cards(attacker: &Card, defender: &Card, dir: Dir) -> bool {
    basic_capture(attacker.rank(dir), defender.rank(dir.opposite()))
}

/// Opponent-owned neighbors of `cell` that `card` captures under `rules`.
/// Each rule is evaluated independently and the results are unioned; the list is
/// in [Up, Right, Down, Left] order with no duplicates.
pub fn capture_flips(board: &Board, cell: u8, card: &Card, owner: Side, rules: Rules) -> Vec<u8> {
    let preds = active_predicates(rules);
    let mut flipped = Vec::new();
    for dir in Dir::all() {
        let Some(nidx) = Board::neighbors(cell)[Board::dir_index(dir)] else { continue };
        let Some(nslot) = board.get(nidx) else { continue };
        if nslot.owner == owner {
            continue;
        }
        let attack = card.rank(dir);
        let defend = nslot.card.rank(dir.opposite());
        if preds.iter().any(|p| p(attack, defend)) {
            flipped.push(nidx);
        }
    }
    flipped
}

/// Apply a placement as a pure transform: returns a new GameState on success.
/// Validates: game not over, cell in range and empty, card present in the acting side's hand.
pub fn try_place_card(state: &GameState, cell: u8, card: &Card) -> Result<GameState, PlaceError> {
    if state.terminal {
        return Err(PlaceError::GameOver);
    }
    if cell >= 9 {
        return Err(PlaceError::OutOfRange(cell));
    }
    if !state.board.is_empty(cell) {
        return Err(PlaceError::Occupied(cell));
    }
    if state.card_in_current_hand(card.id).is_none() {
        return Err(PlaceError::CardNotInHand(card.id));
    }

    // Clone and mutate
    let mut ns = state.clone();
    let owner = ns.next;
    let Some(placed) = ns.take_from_current_hand(card.id) else {
        return Err(PlaceError::CardNotInHand(card.id));
    };

    let flips = capture_flips(&ns.board, cell, &placed, owner, ns.rules);
    ns.board.set(cell, Some(Slot { card: placed, owner }));
    for idx in flips {
        ns.board.flip(idx, owner);
    }

    ns.selected_card = None;
    update_scores(&mut ns);
    if !check_game_over(&mut ns) {
        ns.next = owner.other();
    }
    Ok(ns)
}

/// Place `card` at `cell` for the acting side. Invalid requests return the input unchanged.
pub fn place_card(state: &GameState, cell: u8, card: &Card) -> GameState {
    try_place_card(state, cell, card).unwrap_or_else(|_| state.clone())
}

/// Stage a card from the acting side's hand. No-op if it is not there or the game is over.
pub fn select_card(state: &GameState, card: &Card) -> GameState {
    if state.terminal || state.card_in_current_hand(card.id).is_none() {
        return state.clone();
    }
    GameState {
        selected_card: Some(card.clone()),
        ..state.clone()
    }
}

/// Place the staged card at `cell`. No-op when nothing is staged.
pub fn place_selected(state: &GameState, cell: u8) -> GameState {
    match &state.selected_card {
        Some(card) => place_card(state, cell, card),
        None => state.clone(),
    }
}
