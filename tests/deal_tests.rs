use std::collections::HashSet;
use std::path::Path;

use triadcore::arena::{play_match, MatchSetup};
use triadcore::{
    initialize_game, load_cards_from_json, rng_for_state, CatalogSampler, FixedHands, HandSource,
    Outcome, Rule, Rules, Side,
};

fn cards_db() -> triadcore::CardsDb {
    let path = Path::new("data/cards.json");
    load_cards_from_json(path).expect("failed to load cards.json")
}

#[test]
fn bundled_catalog_loads() {
    let cards = cards_db();
    assert_eq!(cards.len(), 74);
    let ultimecia = cards.by_name("Ultimecia").expect("boss card");
    assert_eq!(ultimecia.total_rank(), 40);
    assert!(cards.iter().all(|c| (1..=10).contains(&c.level)));
}

#[test]
fn initialize_game_starts_blue_on_empty_board() {
    let cards = cards_db();
    let mut sampler = CatalogSampler::new(&cards, rng_for_state(1, 2, 0));
    let rules = Rules::from_slice(&[Rule::Open, Rule::Same]);
    let state = initialize_game(rules, &mut sampler);

    assert_eq!(state.board.filled_count(), 0);
    assert_eq!(state.next, Side::Blue);
    assert_eq!(state.rules, rules);
    assert!(!state.terminal);
    assert_eq!(state.winner, None);
    assert_eq!(state.selected_card, None);
    for p in &state.players {
        assert_eq!(p.hand.len(), 5);
        assert_eq!(p.score, 0);
    }
    assert_eq!(state.player(Side::Blue).side, Side::Blue);
    assert_eq!(state.player(Side::Red).side, Side::Red);
}

#[test]
fn dealt_ids_are_unique_across_hands() {
    let cards = cards_db();
    // A pool of level-1 cards only (10 cards) makes shared catalog draws likely.
    let mut sampler = CatalogSampler::new(&cards, rng_for_state(9, 0, 0))
        .with_max_level(Side::Blue, 1)
        .with_max_level(Side::Red, 1);
    for _ in 0..20 {
        let state = initialize_game(Rules::default(), &mut sampler);
        let ids: HashSet<u32> =
            state.players.iter().flat_map(|p| p.hand.iter().map(|c| c.id)).collect();
        assert_eq!(ids.len(), 10);
        assert!(state.players.iter().flat_map(|p| p.hand.iter()).all(|c| c.level == 1));
    }
}

#[test]
fn hands_have_no_duplicate_catalog_cards() {
    let cards = cards_db();
    let mut sampler =
        CatalogSampler::new(&cards, rng_for_state(5, 0, 0)).with_max_level(Side::Blue, 1);
    for _ in 0..20 {
        let hand = sampler.deal(Side::Blue);
        let names: HashSet<&str> = hand.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), hand.len());
    }
}

#[test]
fn per_side_level_caps_apply() {
    let cards = cards_db();
    let mut sampler = CatalogSampler::new(&cards, rng_for_state(3, 0, 0))
        .with_max_level(Side::Blue, 2)
        .with_max_level(Side::Red, 10);
    let blue = sampler.deal(Side::Blue);
    assert!(blue.iter().all(|c| c.level <= 2));
    let red = sampler.deal(Side::Red);
    assert_eq!(red.len(), 5);
}

#[test]
fn small_pool_deals_short_hand() {
    let cards = cards_db();
    let mut sampler = CatalogSampler::new(&cards, rng_for_state(3, 0, 0)).with_hand_size(200);
    let hand = sampler.deal(Side::Red);
    assert_eq!(hand.len(), cards.up_to_level(5).len());
}

#[test]
fn same_seed_same_deal() {
    let cards = cards_db();
    let deal = || {
        let mut sampler = CatalogSampler::new(&cards, rng_for_state(42, 7, 0));
        initialize_game(Rules::default(), &mut sampler)
    };
    let (a, b) = (deal(), deal());
    assert_eq!(a, b);
}

#[test]
fn fixed_hands_are_dealt_verbatim() {
    let cards = cards_db();
    let blue: Vec<_> = (1..=5).filter_map(|id| cards.get(id).cloned()).collect();
    let red: Vec<_> = (6..=10).filter_map(|id| cards.get(id).cloned()).collect();
    let mut source = FixedHands::new(blue.clone(), red.clone());
    let state = initialize_game(Rules::basic_only(), &mut source);
    assert_eq!(state.player(Side::Blue).hand, blue);
    assert_eq!(state.player(Side::Red).hand, red);
}

#[test]
fn seeded_matches_run_to_completion() {
    let cards = cards_db();
    let setup = MatchSetup {
        rules: Rules::from_slice(&[Rule::Same, Rule::Plus]),
        ..MatchSetup::default()
    };
    for game_id in 0..10 {
        let rec = play_match(&cards, &setup, game_id);
        assert_eq!(rec.moves.len(), 9);
        assert_eq!(u32::from(rec.blue_score) + u32::from(rec.red_score), 9);
        let expected = match rec.blue_score.cmp(&rec.red_score) {
            std::cmp::Ordering::Greater => Outcome::Win(Side::Blue),
            std::cmp::Ordering::Less => Outcome::Win(Side::Red),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        assert_eq!(rec.winner, Some(expected));
        assert_eq!(play_match(&cards, &setup, game_id), rec, "match {game_id} not reproducible");
    }
}
