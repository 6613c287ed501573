use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{Card, CardsDb};
use crate::rules::Rules;
use crate::state::GameState;
use crate::types::Side;

pub const DEFAULT_HAND_SIZE: usize = 5;
/// Levels 1..=5 are the common cards handed out for ordinary matches.
pub const DEFAULT_MAX_LEVEL: u8 = 5;

/// Supplies the starting hand for each side of a new match.
pub trait HandSource {
    fn deal(&mut self, side: Side) -> Vec<Card>;
}

/// Predetermined hands, e.g. a player's chosen deck against a scripted opponent.
#[derive(Debug, Clone, Default)]
pub struct FixedHands {
    pub blue: Vec<Card>,
    pub red: Vec<Card>,
}

impl FixedHands {
    pub fn new(blue: Vec<Card>, red: Vec<Card>) -> Self {
        Self { blue, red }
    }
}

impl HandSource for FixedHands {
    fn deal(&mut self, side: Side) -> Vec<Card> {
        match side {
            Side::Blue => self.blue.clone(),
            Side::Red => self.red.clone(),
        }
    }
}

/// Random hands drawn from a catalog without replacement.
///
/// Every dealt card gets a fresh id from an internal counter, so two hands never
/// share an id even when both drew the same catalog entry.
pub struct CatalogSampler<'a, R: Rng> {
    cards: &'a CardsDb,
    rng: R,
    hand_size: usize,
    max_level: [u8; 2],
    next_id: u32,
}

impl<'a, R: Rng> CatalogSampler<'a, R> {
    pub fn new(cards: &'a CardsDb, rng: R) -> Self {
        Self {
            cards,
            rng,
            hand_size: DEFAULT_HAND_SIZE,
            max_level: [DEFAULT_MAX_LEVEL; 2],
            next_id: 1,
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Highest card level dealt to `side` (harder opponents draw from a wider pool).
    #[must_use]
    pub fn with_max_level(mut self, side: Side, level: u8) -> Self {
        self.max_level[side.index()] = level;
        self
    }
}

impl<R: Rng> HandSource for CatalogSampler<'_, R> {
    fn deal(&mut self, side: Side) -> Vec<Card> {
        let cards = self.cards;
        let pool = cards.up_to_level(self.max_level[side.index()]);
        let picked: Vec<Card> = pool
            .choose_multiple(&mut self.rng, self.hand_size)
            .map(|&c| c.clone())
            .collect();
        picked
            .into_iter()
            .map(|mut card| {
                card.id = self.next_id;
                self.next_id += 1;
                card
            })
            .collect()
    }
}

/// Fresh match: empty board, Blue then Red dealt from `source`, Blue to move.
pub fn initialize_game<H: HandSource + ?Sized>(rules: Rules, source: &mut H) -> GameState {
    let blue = source.deal(Side::Blue);
    let red = source.deal(Side::Red);
    GameState::with_hands(rules, blue, red)
}
