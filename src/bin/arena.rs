use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Agent, Difficulty, MinimaxAgent, RandomAgent};
use connect_four::config::{MAX_DIMENSION, MIN_DIMENSION};
use connect_four::driver::play_agents;
use connect_four::game::{GameOutcome, GameState, Player, COLS, ROWS};

/// Pit two Connect Four agents against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play AI-vs-AI Connect Four matches")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    games: u64,

    /// Red agent (moves first): easy, medium, hard, expert or random
    #[arg(long, default_value = "expert")]
    red: String,

    /// Yellow agent: easy, medium, hard, expert or random
    #[arg(long, default_value = "easy")]
    yellow: String,

    /// Base seed; game `i` uses `seed + i`
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = ROWS)]
    rows: usize,

    #[arg(long, default_value_t = COLS)]
    cols: usize,
}

fn make_agent(name: &str, player: Player, seed: Option<u64>) -> Box<dyn Agent> {
    if name.eq_ignore_ascii_case("random") {
        return match seed {
            Some(seed) => Box::new(RandomAgent::seeded(seed)),
            None => Box::new(RandomAgent::new()),
        };
    }
    let difficulty = Difficulty::from_name(name);
    match seed {
        Some(seed) => Box::new(MinimaxAgent::seeded(player, difficulty, seed)),
        None => Box::new(MinimaxAgent::new(player, difficulty)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if !range.contains(&cli.rows) || !range.contains(&cli.cols) {
        bail!("board dimensions must be in {MIN_DIMENSION}..={MAX_DIMENSION}");
    }

    let mut red_wins = 0u64;
    let mut yellow_wins = 0u64;
    let mut draws = 0u64;
    let mut total_moves = 0usize;
    let started = Instant::now();

    for game in 0..cli.games {
        let seed = cli.seed.map(|s| s.wrapping_add(game));
        let mut red = make_agent(&cli.red, Player::Red, seed);
        let mut yellow = make_agent(&cli.yellow, Player::Yellow, seed.map(|s| !s));
        let mut state = GameState::new(cli.rows, cli.cols, Player::Red);

        let outcome = play_agents(&mut state, red.as_mut(), yellow.as_mut())?;
        total_moves += state.board().piece_count();
        match outcome {
            GameOutcome::Winner(Player::Red) => red_wins += 1,
            GameOutcome::Winner(Player::Yellow) => yellow_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        info!(game, ?outcome, moves = state.board().piece_count(), "game finished");
    }

    let games = cli.games.max(1);
    println!("Red    ({:>7}): {red_wins} wins", cli.red);
    println!("Yellow ({:>7}): {yellow_wins} wins", cli.yellow);
    println!("Draws           : {draws}");
    println!(
        "Average length  : {:.1} moves",
        total_moves as f64 / games as f64
    );
    println!("Elapsed         : {:.2?}", started.elapsed());
    Ok(())
}
