//! Line-oriented terminal front end.
//!
//! Each input line is a whitespace separated list of keypad presses,
//! e.g. `12.5 * 4 =`. The commands `history`, `clear-history` and `quit`
//! are handled here rather than by the engine.

use anyhow::{Context, Result};
use chaincalc::config::Config;
use chaincalc::engine::{Action, Calculator};
use chaincalc::history::HistoryEntry;
use chaincalc::render::Render;
use chaincalc::store::{FileStore, KeyValueStore, MemoryStore};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chaincalc", version, about = "Chained two-operand calculator")]
struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the persisted history
    #[arg(long)]
    history_dir: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

/// Prints display and history updates to stdout.
struct TerminalRender<W: Write> {
    out: W,
}

impl<W: Write> Render for TerminalRender<W> {
    fn on_state_changed(&mut self, current_entry: &str, previous_display: &str) {
        let _ = writeln!(self.out, "{previous_display:>24}");
        let _ = writeln!(self.out, "{current_entry:>24}");
        let _ = self.out.flush();
    }

    fn on_history_changed(&mut self, entries: &[HistoryEntry]) {
        let _ = writeln!(self.out, "-- history ({}) --", entries.len());
        for entry in entries {
            let _ = writeln!(self.out, "  {}", entry.expression());
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(dir) = cli.history_dir {
        config.history_dir = Some(dir);
    }
    if cli.ephemeral {
        config.persist = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
        config.validate().context("applying --log-level")?;
    }

    init_tracing(&config.log_level);

    let store: Box<dyn KeyValueStore> = if config.persist {
        let dir = config.history_dir();
        tracing::info!(dir = %dir.display(), "using file store");
        Box::new(FileStore::new(dir))
    } else {
        Box::new(MemoryStore::new())
    };

    let render = TerminalRender { out: io::stdout() };
    let mut calculator = Calculator::new(store, render);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "history" => {
                for entry in calculator.history().render_lines() {
                    println!("  {entry}");
                }
            }
            "clear-history" => calculator.clear_history(),
            input => match Action::parse_sequence(input) {
                Ok(actions) => actions.into_iter().for_each(|a| calculator.apply(a)),
                Err(e) => eprintln!("{e}"),
            },
        }
    }

    Ok(())
}
