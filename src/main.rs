use std::collections::HashSet;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use pokerhand::{format_hand, parse_hand, rank_hand, Card, Deck, HAND_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "pokerhand", about = "Rank five-card poker hands")]
struct Cli {
    /// Hands to rank, e.g. "5S JD QH AC 4D".
    hands: Vec<String>,
    /// Number of random hands to draw when no hands are given.
    #[arg(long, short, default_value_t = 1)]
    draw: usize,
    /// Seed for reproducible draws.
    #[arg(long, env = "POKERHAND_SEED")]
    seed: Option<u64>,
    /// Print one JSON object per hand.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let hands = if cli.hands.is_empty() {
        draw_hands(cli.draw, cli.seed)?
    } else {
        cli.hands
            .iter()
            .map(String::as_str)
            .map(read_hand)
            .collect::<Result<Vec<_>>>()?
    };

    for hand in &hands {
        print_ranking(hand, cli.json)?;
    }

    Ok(())
}

fn read_hand(notation: &str) -> Result<Vec<Card>> {
    let hand = parse_hand(notation).with_context(|| format!("Invalid hand \"{notation}\""))?;
    ensure!(
        hand.len() == HAND_SIZE,
        "Hand \"{notation}\" has {} cards, expected {HAND_SIZE}",
        hand.len()
    );

    let distinct: HashSet<_> = hand.iter().collect();
    if distinct.len() != hand.len() {
        warn!(hand = %notation, "Hand contains duplicate cards");
    }

    Ok(hand)
}

fn draw_hands(count: usize, seed: Option<u64>) -> Result<Vec<Vec<Card>>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(count, seed = ?seed, "Drawing hands");

    (0..count)
        .map(|_| Deck::new().draw_hand(&mut rng).context("Failed to draw hand"))
        .collect()
}

fn print_ranking(hand: &[Card], json: bool) -> Result<()> {
    let ranked = rank_hand(hand).with_context(|| format!("Hand \"{}\"", format_hand(hand)))?;

    if json {
        let line = serde_json::json!({
            "hand": format_hand(hand),
            "category": ranked.category(),
            "value": ranked.category().value(),
            "matching_cards": ranked.matching_cards(),
            "description": ranked.description(),
        });
        println!("{line}");
    } else {
        println!("{}: {}", format_hand(hand), ranked);
    }

    Ok(())
}
