use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Generator used for every seeded draw in the crate (dealing, search variation).
pub type MatchRng = Pcg64;

/// Deterministic RNG factory for a given (seed, game_id, turn) triple.
///
/// The per-state seed is `seed ^ game_id ^ turn`. Equal inputs give equal
/// sequences across runs and threads, so parallel self-play stays reproducible.
/// Turn 0 is conventionally used for dealing, turns 1..=9 for the moves.
#[inline]
pub fn rng_for_state(seed: u64, game_id: u64, turn: u8) -> MatchRng {
    let derived: u64 = seed ^ game_id ^ u64::from(turn);
    Pcg64::seed_from_u64(derived)
}
