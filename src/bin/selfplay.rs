use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use triadcore::arena::{play_match, ArenaSummary, MatchRecord, MatchSetup};
use triadcore::{load_cards_from_json, Rules};

#[derive(Debug, Parser)]
#[command(
    name = "selfplay",
    about = "Run seeded computer-vs-computer matches and export results as JSONL"
)]
struct Args {
    /// Cards JSON path
    #[arg(long, default_value = "data/cards.json")]
    cards: PathBuf,

    /// Rules as comma-separated list (or 'none'):
    /// open,random,same,plus,same_wall,elemental,sudden_death
    #[arg(long, default_value = "open")]
    rules: String,

    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    games: u64,

    /// Base seed; output is identical for identical seeds
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Cards dealt per side
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Highest card level dealt to Blue (1..=10)
    #[arg(long, default_value_t = 5)]
    max_level_blue: u8,

    /// Highest card level dealt to Red (1..=10)
    #[arg(long, default_value_t = 5)]
    max_level_red: u8,

    /// Output file for JSONL match records (stdout when omitted)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn write_records<W: Write>(mut w: W, records: &[MatchRecord]) -> io::Result<()> {
    for rec in records {
        serde_json::to_writer(&mut w, rec)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.hand_size == 0 {
        return Err("hand size must be at least 1".into());
    }
    for level in [args.max_level_blue, args.max_level_red] {
        if !(1..=10).contains(&level) {
            return Err(format!("max level must be within 1..=10 (got {level})").into());
        }
    }

    let cards =
        load_cards_from_json(&args.cards).map_err(|e| format!("Cards load error: {e}"))?;
    let rules = Rules::parse_list(&args.rules).map_err(|e| format!("Rules parse error: {e}"))?;
    let setup = MatchSetup {
        rules,
        seed: args.seed,
        hand_size: args.hand_size,
        max_level: [args.max_level_blue, args.max_level_red],
        ..MatchSetup::default()
    };
    eprintln!(
        "[selfplay] games={} seed={:#x} rules={:?} cards={}",
        args.games,
        args.seed,
        rules,
        cards.len()
    );

    let pb = ProgressBar::new(args.games);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] selfplay {bar:40.cyan/blue} {pos}/{len}")?
            .progress_chars("=>-"),
    );

    let records: Vec<MatchRecord> = (0..args.games)
        .into_par_iter()
        .map(|game_id| {
            let rec = play_match(&cards, &setup, game_id);
            pb.inc(1);
            rec
        })
        .collect();
    pb.finish_and_clear();

    let mut summary = ArenaSummary::default();
    for rec in &records {
        summary.record(rec);
    }

    match &args.out {
        Some(path) => {
            let f = File::create(path)
                .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
            write_records(BufWriter::new(f), &records)?;
        }
        None => write_records(io::stdout().lock(), &records)?,
    }

    eprintln!(
        "[selfplay] done: blue={} red={} draw={} unfinished={}",
        summary.blue, summary.red, summary.draw, summary.unfinished
    );
    if summary.unfinished > 0 {
        eprintln!("[selfplay] Warning: {} matches stalled", summary.unfinished);
    }

    Ok(())
}
