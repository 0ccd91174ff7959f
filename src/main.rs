//! Mastermind Solver - CLI
//!
//! Mastermind codebreaker with TUI and CLI modes. Every guess is drawn from
//! the codes still consistent with all feedback received.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use mastermind_solver::{
    commands::{random_secrets, resolve_secret, run_benchmark, run_simple, solve_code, space_report},
    core::{DEFAULT_MAX_TURNS, DEFAULT_SPACE_LIMIT, GameConfig, PlayConfig},
    game::Game,
    logging,
    output::{print_benchmark_result, print_solve_result, print_space_report},
    solver::{Strategy, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver that only ever guesses codes consistent with the feedback so far",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colours (symbols A, B, C, ...)
    #[arg(short, long, global = true, default_value_t = 6)]
    colours: usize,

    /// Code length
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Allow a colour to appear more than once in a code
    #[arg(short, long, global = true)]
    repeats: bool,

    /// Turns before the codebreaker loses
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Strategy: first (default), random, minimax
    #[arg(short, long, global = true, default_value = "first", value_parser = StrategyType::NAMES)]
    strategy: String,

    /// Seed for reproducible secrets and random guesses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Largest code space a game may generate
    #[arg(long, global = true, default_value_t = DEFAULT_SPACE_LIMIT)]
    space_limit: u64,

    /// Log more detail (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbosity", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

impl Cli {
    fn play_config(&self) -> PlayConfig {
        let mut config = PlayConfig::new(GameConfig::new(self.colours, self.length, self.repeats));
        config.max_turns = self.max_turns;
        config.space_limit = self.space_limit;
        config
    }

    fn strategy(&self) -> StrategyType {
        StrategyType::from_name(&self.strategy, self.seed)
    }

    fn rng(&self) -> StdRng {
        self.seed.map_or_else(
            || StdRng::from_rng(&mut rand::rng()),
            StdRng::seed_from_u64,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default): you keep the secret and enter verdicts
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a secret by self-play
    Solve {
        /// The secret to solve (random if omitted)
        secret: Option<String>,

        /// Show candidate counts and guess metrics for each turn
        #[arg(long)]
        verbose: bool,
    },

    /// Benchmark the strategy over random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Report the size of the code space
    Space,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity);

    let config = cli.play_config();
    debug!("Configuration: {config:?}, strategy {}", cli.strategy);

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&config, cli.strategy()),
        Some(Commands::Simple) => run_simple_command(&config, cli.strategy()),
        Some(Commands::Solve { secret, verbose }) => {
            run_solve_command(&cli, &config, secret.as_deref(), *verbose)
        }
        Some(Commands::Benchmark { count }) => run_benchmark_command(&cli, &config, *count),
        Some(Commands::Space) => run_space_command(&cli, &config),
    }
}

fn run_solve_command(
    cli: &Cli,
    config: &PlayConfig,
    secret: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let secret = resolve_secret(&config.game, secret, &mut cli.rng())?;
    let result = solve_code(config, &secret, cli.strategy())?;

    print_solve_result(&result, verbose);

    if !result.success() {
        bail!("secret {} was not found", result.secret);
    }
    Ok(())
}

fn run_benchmark_command(cli: &Cli, config: &PlayConfig, count: usize) -> Result<()> {
    let secrets = random_secrets(&config.game, count, &mut cli.rng())?;

    println!(
        "Running benchmark on {count} random secrets with the {} strategy...",
        cli.strategy().name()
    );

    let mut game_index = 0u64;
    let result = run_benchmark(
        config,
        &secrets,
        || {
            game_index += 1;
            StrategyType::from_name(&cli.strategy, cli.seed.map(|s| s.wrapping_add(game_index)))
        },
        true,
    )?;

    print_benchmark_result(&result);
    Ok(())
}

fn run_space_command(cli: &Cli, config: &PlayConfig) -> Result<()> {
    let report = space_report(config, &mut cli.rng())?;
    print_space_report(&report);
    Ok(())
}

fn run_simple_command(config: &PlayConfig, strategy: StrategyType) -> Result<()> {
    let game = Game::new(config, strategy)?;
    run_simple(game, io::stdin().lock(), io::stdout())?;
    Ok(())
}

fn run_play_command(config: &PlayConfig, strategy: StrategyType) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let game = Game::new(config, strategy)?;
    run_tui(App::new(game))
}
