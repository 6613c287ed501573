use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::rules::Rules;
use crate::types::{Outcome, Side};

/// A candidate placement: play `card` into `cell` (0..=8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub cell: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub hand: Vec<Card>,
    /// Cells this side owns; recomputed from the board after every placement.
    pub score: u8,
}

impl Player {
    #[inline]
    pub fn new(side: Side, hand: Vec<Card>) -> Self {
        Self { side, hand, score: 0 }
    }

    #[inline]
    pub fn holds(&self, card_id: u32) -> bool {
        self.hand.iter().any(|c| c.id == card_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Blue at index 0, Red at index 1.
    pub players: [Player; 2],
    pub next: Side,
    pub rules: Rules,
    /// Card the human has staged for placement, if any.
    pub selected_card: Option<Card>,
    pub terminal: bool,
    /// Fixed when `terminal` first becomes true; None before that.
    pub winner: Option<Outcome>,
}

impl GameState {
    #[inline]
    pub fn with_hands(rules: Rules, hand_blue: Vec<Card>, hand_red: Vec<Card>) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(Side::Blue, hand_blue),
                Player::new(Side::Red, hand_red),
            ],
            next: Side::Blue,
            rules,
            selected_card: None,
            terminal: false,
            winner: None,
        }
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    #[inline]
    pub fn score(&self, side: Side) -> u8 {
        self.player(side).score
    }

    #[inline]
    pub fn current_hand(&self) -> &[Card] {
        &self.player(self.next).hand
    }

    /// Look up a card in the acting side's hand by id.
    #[inline]
    pub fn card_in_current_hand(&self, card_id: u32) -> Option<&Card> {
        self.current_hand().iter().find(|c| c.id == card_id)
    }

    /// Remove a card from the acting side's hand. Only the first match is removed.
    pub fn take_from_current_hand(&mut self, card_id: u32) -> Option<Card> {
        let hand = &mut self.player_mut(self.next).hand;
        let pos = hand.iter().position(|c| c.id == card_id)?;
        Some(hand.remove(pos))
    }

    #[inline]
    pub fn hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    /// Total cards still in play (both hands plus the board).
    #[inline]
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        in_hands + self.board.filled_count() as usize
    }

    /// Returns ordered legal moves for the acting side.
    /// Order: by cell index ascending, then by hand order.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.terminal {
            return Vec::new();
        }
        let hand = self.current_hand();
        let empty = 9 - self.board.filled_count() as usize;
        let mut moves = Vec::with_capacity(empty * hand.len());
        for cell in self.board.empty_cells() {
            for card in hand {
                moves.push(Move {
                    card: card.clone(),
                    cell,
                });
            }
        }
        moves
    }

    /// Board full or both hands empty.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.board.is_full() || self.hands_empty()
    }
}

/// Free-function surface mirroring the methods above.
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
