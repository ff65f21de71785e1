mod console;

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use tracing::{info, Level};
use unosim::{
    constants::{DEFAULT_TARGET_POINTS, MAX_PLAYERS, MIN_PLAYERS},
    MatchConfig, Policy, Uno,
};

use crate::console::{ConsoleInput, ConsoleReporter};

/// Play UNO against robots, or watch robots play each other.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of players, including you.
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Only robots play; you watch.
    #[arg(short, long)]
    watch: bool,

    /// Seed for shuffling, to replay a match.
    #[arg(long)]
    seed: Option<u64>,

    /// Points that win the match.
    #[arg(long, default_value_t = DEFAULT_TARGET_POINTS)]
    target: u32,

    /// Log engine events.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players) {
        bail!("The number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}.");
    }

    let mut policies = Vec::with_capacity(args.players);
    policies.push(if args.watch {
        Policy::Robot
    } else {
        Policy::External(Box::new(ConsoleInput))
    });
    policies.extend((1..args.players).map(|_| Policy::Robot));

    let config = MatchConfig {
        target_points: args.target,
        seed: args.seed,
    };
    let mut uno = Uno::new(policies, config)?;
    info!(players = args.players, watch = args.watch, "A new UNO game is starting");

    let mut reporter = ConsoleReporter {
        show_hands: args.watch,
    };
    uno.play_match(&mut reporter)?;

    Ok(())
}
