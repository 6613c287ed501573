use std::path::PathBuf;

use clap::Parser;
use triadcore::arena::{play_match_with, MatchSetup};
use triadcore::{load_cards_from_json, score, GameState, Outcome, Rules, Side};

#[derive(Debug, Parser)]
#[command(
    name = "match-cli",
    about = "Play one seeded computer-vs-computer match and print every turn"
)]
struct Args {
    /// Cards JSON path
    #[arg(long, default_value = "data/cards.json")]
    cards: PathBuf,

    /// Rules as comma-separated list (or 'none'):
    /// open,random,same,plus,same_wall,elemental,sudden_death
    #[arg(long, default_value = "open")]
    rules: String,

    /// Base seed for dealing and move variation
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Match number within the seed (selects an independent deal)
    #[arg(long, default_value_t = 0)]
    game: u64,

    /// Cards dealt to each side
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Highest card level dealt to each side (1..=10)
    #[arg(long, default_value_t = 5)]
    max_level: u8,
}

fn side_char(side: Side) -> char {
    match side {
        Side::Blue => 'B',
        Side::Red => 'R',
    }
}

fn print_board(state: &GameState) {
    println!("Board (owner:name [top right bottom left]):");
    for r in 0u8..3 {
        for c in 0u8..3 {
            match state.board.get(r * 3 + c) {
                Some(slot) => {
                    let k = &slot.card;
                    print!(
                        "{}:{:<14} [{} {} {} {}]  ",
                        side_char(slot.owner),
                        k.name,
                        k.top,
                        k.right,
                        k.bottom,
                        k.left
                    );
                }
                None => print!("{:<28}", " ."),
            }
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.hand_size == 0 {
        return Err("hand size must be at least 1".into());
    }
    if !(1..=10).contains(&args.max_level) {
        return Err(format!("max level must be within 1..=10 (got {})", args.max_level).into());
    }

    let cards =
        load_cards_from_json(&args.cards).map_err(|e| format!("Cards load error: {e}"))?;
    eprintln!("[match] Loaded {} cards (max id {}).", cards.len(), cards.max_id());

    let rules = Rules::parse_list(&args.rules).map_err(|e| format!("Rules parse error: {e}"))?;
    let setup = MatchSetup {
        rules,
        seed: args.seed,
        hand_size: args.hand_size,
        max_level: [args.max_level; 2],
        ..MatchSetup::default()
    };

    let mut turn = 0usize;
    let record = play_match_with(&cards, &setup, args.game, |state| {
        if turn == 0 {
            println!("Rules: {:?}", state.rules);
            for p in &state.players {
                let names: Vec<&str> = p.hand.iter().map(|c| c.name.as_str()).collect();
                println!("{:?} hand: {}", p.side, names.join(", "));
            }
        } else {
            print_board(state);
            println!(
                "Score blue={} red={} (margin {})",
                state.score(Side::Blue),
                state.score(Side::Red),
                score(state)
            );
        }
        turn += 1;
    });

    for (i, mv) in record.moves.iter().enumerate() {
        eprintln!(
            "[match] turn {}: {:?} played {} at cell {} flipping {:?}",
            i + 1,
            mv.side,
            mv.card,
            mv.cell,
            mv.flipped
        );
    }

    match record.winner {
        Some(Outcome::Win(side)) => println!("Game over. Winner: {side:?}"),
        Some(Outcome::Draw) => println!("Game over. Draw."),
        None => eprintln!("[match] Warning: match stalled before a terminal state"),
    }

    Ok(())
}
