use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::Difficulty;
use connect_four::config::AppConfig;
use connect_four::driver;
use connect_four::ui::{CliUi, TerminalUi};

/// Play Connect Four against a minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Use the plain text interface instead of the full-screen one
    #[arg(long)]
    cli: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Skip the menu and play at this difficulty (easy, medium, hard, expert)
    #[arg(long)]
    difficulty: Option<String>,

    /// Seed the AI's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    init_logging(cli.log_file.as_deref(), cli.cli)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    let preset = cli.difficulty.as_deref().map(Difficulty::from_name);

    if cli.cli {
        let mut ui = CliUi::stdio();
        driver::run(&mut ui, &config, preset).context("text game failed")?;
    } else {
        let mut ui = TerminalUi::enter().context("setting up the terminal")?;
        driver::run(&mut ui, &config, preset).context("terminal game failed")?;
    }
    Ok(())
}

/// Logs go to `log_file` when given. Without one, the text UI logs warnings to
/// stderr and the full-screen UI stays silent.
fn init_logging(log_file: Option<&Path>, text_mode: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if text_mode => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}
