//! dice-runner: headless driver for the dicelab core.
//!
//! Usage:
//!   dice-runner --seed 12345 --dice 2 --sides 6 --rolls 10000
//!   dice-runner --weight 2=4.0 --rolls 1000 --json

use anyhow::{bail, Context, Result};
use dicelab_core::{Analyzer, Face, Game, RollRng, WeightedDie};
use std::env;
use std::str::FromStr;

#[derive(serde::Serialize)]
struct FaceTotal {
    face:  Face,
    count: usize,
}

#[derive(serde::Serialize)]
struct ComboEntry {
    faces: Vec<Face>,
    count: usize,
}

#[derive(serde::Serialize)]
struct RunSummary {
    seed:         u64,
    dice:         usize,
    sides:        i64,
    rolls:        usize,
    jackpots:     usize,
    jackpot_rate: f64,
    face_totals:  Vec<FaceTotal>,
    top_combos:   Vec<ComboEntry>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64)?;
    let num_dice = parse_arg(&args, "--dice", 2usize)?;
    let sides = parse_arg(&args, "--sides", 6i64)?;
    let rolls = parse_arg(&args, "--rolls", 1000usize)?;
    let json = args.iter().any(|a| a == "--json");
    let overrides = parse_weight_overrides(&args)?;

    if sides < 1 {
        bail!("--sides must be at least 1");
    }

    let faces: Vec<Face> = (1..=sides).map(Face::Int).collect();
    let mut dice = Vec::with_capacity(num_dice);
    for i in 0..num_dice {
        let mut die = WeightedDie::with_rng(faces.clone(), RollRng::for_die(seed, i as u64))?;
        for (face, weight) in &overrides {
            die.set_weight(face.clone(), *weight)
                .with_context(|| format!("--weight {face}={weight}"))?;
        }
        dice.push(die);
    }

    let mut game = Game::new(dice);
    game.play(rolls)?;
    let analyzer = Analyzer::new(&game)?;

    let summary = summarize(seed, num_dice, sides, rolls, &analyzer);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn summarize(
    seed: u64,
    dice: usize,
    sides: i64,
    rolls: usize,
    analyzer: &Analyzer,
) -> RunSummary {
    let counts = analyzer.face_counts();
    let face_totals = counts
        .faces
        .iter()
        .enumerate()
        .map(|(col, face)| FaceTotal {
            face:  face.clone(),
            count: counts.rows.iter().map(|row| row[col]).sum(),
        })
        .collect();

    let mut combos: Vec<ComboEntry> = analyzer
        .combo_counts()
        .into_iter()
        .map(|(faces, count)| ComboEntry { faces, count })
        .collect();
    combos.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.faces.cmp(&b.faces)));
    combos.truncate(5);

    let jackpots = analyzer.jackpot_count();
    RunSummary {
        seed,
        dice,
        sides,
        rolls,
        jackpots,
        jackpot_rate: if rolls > 0 {
            jackpots as f64 / rolls as f64
        } else {
            0.0
        },
        face_totals,
        top_combos: combos,
    }
}

fn print_summary(s: &RunSummary) {
    println!("dicelab — dice-runner");
    println!("  seed:     {}", s.seed);
    println!("  dice:     {} x d{}", s.dice, s.sides);
    println!("  rolls:    {}", s.rolls);
    println!();
    println!("  jackpots: {} ({:.2}%)", s.jackpots, s.jackpot_rate * 100.0);
    println!("  face totals:");
    for t in &s.face_totals {
        println!("    {:>6}: {}", t.face.to_string(), t.count);
    }
    println!("  top combos:");
    for c in &s.top_combos {
        let key: Vec<String> = c.faces.iter().map(Face::to_string).collect();
        println!("    [{}]: {}", key.join(", "), c.count);
    }
}

fn parse_arg<T: FromStr>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.windows(2).find(|w| w[0] == flag) {
        Some(w) => w[1]
            .parse()
            .with_context(|| format!("invalid value for {flag}: '{}'", w[1])),
        None => Ok(default),
    }
}

/// Collect every `--weight FACE=W` pair. Faces are integer labels
/// since the runner always builds numeric dice.
fn parse_weight_overrides(args: &[String]) -> Result<Vec<(Face, f64)>> {
    let mut overrides = Vec::new();
    for w in args.windows(2) {
        if w[0] != "--weight" {
            continue;
        }
        let (face, weight) = w[1]
            .split_once('=')
            .with_context(|| format!("--weight expects FACE=W, got '{}'", w[1]))?;
        let face: i64 = face
            .parse()
            .with_context(|| format!("invalid face in --weight: '{face}'"))?;
        let weight: f64 = weight
            .parse()
            .with_context(|| format!("invalid weight in --weight: '{weight}'"))?;
        overrides.push((Face::Int(face), weight));
    }
    Ok(overrides)
}
