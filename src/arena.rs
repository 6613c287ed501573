// Seeded computer-vs-computer matches, used by the `selfplay` and `match-cli` tools.

use serde::{Deserialize, Serialize};

use crate::cards::CardsDb;
use crate::deal::{initialize_game, CatalogSampler, DEFAULT_HAND_SIZE, DEFAULT_MAX_LEVEL};
use crate::engine::apply::try_place_card;
use crate::rng::rng_for_state;
use crate::rules::Rules;
use crate::search::{find_best_move_with_config, SearchConfig};
use crate::state::GameState;
use crate::types::{Outcome, Side};

#[derive(Debug, Clone, Copy)]
pub struct MatchSetup {
    pub rules: Rules,
    pub seed: u64,
    pub hand_size: usize,
    pub max_level: [u8; 2],
    pub search: SearchConfig,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            seed: 0x00C0_FFEE,
            hand_size: DEFAULT_HAND_SIZE,
            max_level: [DEFAULT_MAX_LEVEL; 2],
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub card: String,
    pub card_id: u32,
    pub cell: u8,
    pub flipped: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub game_id: u64,
    /// None if the match stalled before reaching a terminal state.
    pub winner: Option<Outcome>,
    pub blue_score: u8,
    pub red_score: u8,
    pub moves: Vec<MoveRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSummary {
    pub games: u64,
    pub blue: u64,
    pub red: u64,
    pub draw: u64,
    pub unfinished: u64,
}

impl ArenaSummary {
    pub fn record(&mut self, m: &MatchRecord) {
        self.games += 1;
        match m.winner {
            Some(Outcome::Win(Side::Blue)) => self.blue += 1,
            Some(Outcome::Win(Side::Red)) => self.red += 1,
            Some(Outcome::Draw) => self.draw += 1,
            None => self.unfinished += 1,
        }
    }
}

/// Cells that changed owner between two consecutive states.
pub fn flipped_cells(before: &GameState, after: &GameState) -> Vec<u8> {
    (0u8..9)
        .filter(|&i| match (before.board.get(i), after.board.get(i)) {
            (Some(a), Some(b)) => a.owner != b.owner,
            _ => false,
        })
        .collect()
}

/// Per-match seed space; the low byte is left for the turn number.
/// Turn 0 seeds the deal, turns 1.. seed the moves.
#[inline]
pub fn match_key(game_id: u64) -> u64 {
    game_id << 8
}

/// Deal a fresh match and let both sides play it out with the variation search.
/// `observe` sees every state, starting with the initial deal.
pub fn play_match_with<F: FnMut(&GameState)>(
    cards: &CardsDb,
    setup: &MatchSetup,
    game_id: u64,
    mut observe: F,
) -> MatchRecord {
    let key = match_key(game_id);
    let mut sampler = CatalogSampler::new(cards, rng_for_state(setup.seed, key, 0))
        .with_hand_size(setup.hand_size)
        .with_max_level(Side::Blue, setup.max_level[0])
        .with_max_level(Side::Red, setup.max_level[1]);
    let mut state = initialize_game(setup.rules, &mut sampler);
    observe(&state);

    let mut moves = Vec::new();
    let mut turn: u8 = 1;
    while !state.terminal {
        let mut rng = rng_for_state(setup.seed, key, turn);
        let Some(mv) = find_best_move_with_config(&state, setup.search, &mut rng) else {
            break;
        };
        let Ok(next) = try_place_card(&state, mv.cell, &mv.card) else {
            break;
        };
        moves.push(MoveRecord {
            side: state.next,
            card: mv.card.name.clone(),
            card_id: mv.card.id,
            cell: mv.cell,
            flipped: flipped_cells(&state, &next),
        });
        state = next;
        observe(&state);
        turn = turn.saturating_add(1);
    }

    MatchRecord {
        game_id,
        winner: state.winner,
        blue_score: state.score(Side::Blue),
        red_score: state.score(Side::Red),
        moves,
    }
}

#[inline]
pub fn play_match(cards: &CardsDb, setup: &MatchSetup, game_id: u64) -> MatchRecord {
    play_match_with(cards, setup, game_id, |_| {})
}
