use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rust_2048::{legal_moves, EngineConfig, EngineError, GameRng, Phase, Session};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rust-2048", about = "Play 2048 in the terminal")]
struct Args {
    /// Seed for tile spawns (and for autoplay move choice).
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Probability that a spawned tile is a 4.
    #[arg(long, default_value_t = rust_2048::core::DEFAULT_FOUR_PROBABILITY)]
    four_probability: f64,
    /// Play up to N random legal moves instead of reading stdin.
    #[arg(long)]
    autoplay: Option<u32>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = EngineConfig::new()
        .with_seed(args.seed)
        .with_four_probability(args.four_probability);
    let mut session = Session::new(config).context("invalid engine configuration")?;
    session.start();

    match args.autoplay {
        Some(limit) => autoplay(&mut session, limit),
        None => interactive(&mut session)?,
    }

    println!("{}", session.board());
    println!("Score: {}, moves: {}, max tile: {}", session.score(), session.moves(), session.board().max_tile());
    Ok(())
}

/// Play random legal moves, drawn from a stream separate from spawns.
fn autoplay(session: &mut Session, limit: u32) {
    let mut policy = GameRng::new(session.config().seed).for_context("autoplay");
    for _ in 0..limit {
        let options = legal_moves(session.board());
        let Some(&direction) = policy.choose(&options) else {
            break;
        };
        if let Err(err) = session.play(direction) {
            warn!(%err, "autoplay stopped");
            break;
        }
        if session.phase() == Phase::GameOver {
            break;
        }
    }
    info!(score = session.score(), moves = session.moves(), "autoplay finished");
}

fn interactive(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", session.board());
        print!("score {} | left/right/up/down, restart, quit > ", session.score());
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read stdin")?;
        match line.trim() {
            "quit" | "q" => return Ok(()),
            "restart" => {
                session.restart();
                continue;
            }
            _ => {}
        }

        match session.play_named(&line) {
            Ok(outcome) if !outcome.changed => println!("Nothing moves {}.", outcome.direction),
            Ok(outcome) if outcome.game_over => {
                println!("Game over!");
                return Ok(());
            }
            Ok(_) => {}
            Err(err @ EngineError::InvalidDirection(_)) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }
}
