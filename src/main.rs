mod cli;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use number_balance::{
    default_steps, BalanceConfig, JsonFileStore, KeyValueStore, MemoryStore, Session,
    SessionOptions, TourSequencer,
};

use crate::cli::{dispatch, parse, Flow, Screen, StdoutShare};

/// Balance the numbers on both sides of the beam.
#[derive(Debug, Parser)]
#[command(name = "number-balance", version, about)]
struct Args {
    /// Seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Don't start the tour on first run
    #[arg(long)]
    no_tour: bool,

    /// Keep settings in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Link attached to shared results
    #[arg(long, value_name = "URL")]
    share_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = BalanceConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let options = SessionOptions {
        auto_tour: !args.no_tour,
        share_url: args.share_url.clone(),
    };

    if args.ephemeral {
        return run(config, MemoryStore::new(), options);
    }

    let path = args.settings.clone().or_else(JsonFileStore::default_path);
    match path.map(JsonFileStore::open) {
        Some(Ok(store)) => {
            tracing::debug!(path = %store.path().display(), "settings loaded");
            run(config, store, options)
        }
        Some(Err(err)) => {
            tracing::warn!(%err, "settings unavailable, using memory");
            run(config, MemoryStore::new(), options)
        }
        None => {
            tracing::warn!("no config directory, using memory");
            run(config, MemoryStore::new(), options)
        }
    }
}

fn run<S: KeyValueStore>(config: BalanceConfig, store: S, options: SessionOptions) -> Result<()> {
    let tour = TourSequencer::new(default_steps());
    let mut session =
        Session::start(config, tour, store, options).with_share_target(Box::new(StdoutShare));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut status: Option<String> = None;

    loop {
        let frame = Screen::board(&session).compose(&session);
        write!(stdout, "{frame}")?;
        if let Some(message) = status.take() {
            writeln!(stdout, "{message}")?;
        }
        write!(stdout, "> ")?;
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }

        match parse(&line) {
            Ok(command) => {
                let (flow, message) = dispatch(&mut session, command);
                if flow == Flow::Quit {
                    break;
                }
                status = message;
            }
            Err(cli::command::ParseError::Empty) => {}
            Err(err) => status = Some(err.to_string()),
        }
    }

    tracing::debug!(actions = session.game().history().len(), "session ended");
    Ok(())
}
