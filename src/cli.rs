use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use game24::deal::constants::{MAX_CARD, MIN_CARD};
use game24::game::constants::DEFAULT_TIME_LIMIT_SECS;
use game24::game::{GameConfig, GameController};
use game24::{Deal, JsonFileStore, LeaderboardStore, Solver, validate};

use crate::terminal::{TerminalBell, TerminalPresenter, print_leaderboard};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// game24 - make 24 from four numbers before the clock runs out
#[derive(Parser, Debug)]
#[command(name = "game24")]
#[command(about = "Timed 24-point arithmetic game")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Leaderboard file (default: per-user data directory)
    #[arg(long, env = "GAME24_LEADERBOARD", global = true)]
    pub leaderboard: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play a three-round game (default)
    Play {
        /// Player name; asked for when omitted
        #[arg(short, long)]
        name: Option<String>,

        /// Seconds allowed per round
        #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT_SECS,
              value_parser = clap::value_parser!(u64).range(1..))]
        time_limit: u64,

        /// Do not ring the terminal bell
        #[arg(long)]
        mute: bool,
    },
    /// Show one way to make 24, if there is one
    Solve {
        #[arg(num_args = 4, required = true)]
        numbers: Vec<u32>,
    },
    /// Judge an answer against four numbers
    Check {
        expression: String,
        #[arg(num_args = 4, required = true)]
        numbers: Vec<u32>,
    },
    /// Print the leaderboard
    Rank,
    /// Count how many deals can make 24
    Survey {
        #[arg(long, default_value_t = MIN_CARD)]
        min: u32,
        #[arg(long, default_value_t = MAX_CARD)]
        max: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            name: None,
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            mute: false,
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Cannot initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let store = JsonFileStore::new(
        args.leaderboard
            .clone()
            .unwrap_or_else(JsonFileStore::default_path),
    );
    info!("Leaderboard file: {}", store.path().display());

    match args.command.unwrap_or_default() {
        Command::Play {
            name,
            time_limit,
            mute,
        } => play(store, name, time_limit, mute),
        Command::Solve { numbers } => solve(&numbers),
        Command::Check {
            expression,
            numbers,
        } => check(&expression, &numbers),
        Command::Rank => {
            print_leaderboard(&store.load());
            Ok(())
        }
        Command::Survey { min, max } => survey(min, max),
    }
}

fn play(store: JsonFileStore, name: Option<String>, time_limit: u64, mute: bool) -> Result<()> {
    let mut presenter = TerminalPresenter::spawn(time_limit);

    let name = match name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => match presenter.ask_name() {
            Some(name) => name,
            None => bail!("No player name given"),
        },
    };

    let config = GameConfig::with_time_limit(Duration::from_secs(time_limit));
    let mut controller = GameController::new(config, presenter, TerminalBell::new(!mute), store);
    let mut rng = rand::rng();

    loop {
        let summary = controller.play(&name, &mut rng);
        if let Some(rank) = summary.rank {
            println!("{} placed #{} on the leaderboard.", name, rank);
        }

        let again = controller
            .presenter_mut()
            .ask("Play again? [y/N] ")
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"));
        if !again {
            return Ok(());
        }
    }
}

fn parse_deal(numbers: &[u32]) -> Result<Deal> {
    Deal::try_from(numbers).context("Invalid numbers")
}

fn solve(numbers: &[u32]) -> Result<()> {
    let deal = parse_deal(numbers)?;
    match Solver::new().find_solution(&deal) {
        Some(expr) => println!("{} = 24", expr),
        None => {
            warn!("No expression over [{}] makes 24", deal);
            println!("No solution.");
        }
    }
    Ok(())
}

fn check(expression: &str, numbers: &[u32]) -> Result<()> {
    let deal = parse_deal(numbers)?;
    match validate(expression, &deal) {
        Ok(value) if Solver::new().matches(value) => println!("{} = 24. Correct!", expression),
        Ok(value) => println!("{} = {}, not 24.", expression, value),
        Err(e) => println!("Rejected: {}", e),
    }
    Ok(())
}

fn survey(min: u32, max: u32) -> Result<()> {
    if min > max {
        bail!("--min ({}) must not exceed --max ({})", min, max);
    }

    let report = Solver::new().survey(min, max);
    println!(
        "{} of {} deals with cards {}..={} can make 24 ({:.2}%).",
        report.solvable,
        report.deals,
        min,
        max,
        report.solvable_ratio() * 100.0
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_play() {
        let args = CliArgs::try_parse_from(["game24"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.command, None);
            assert_eq!(args.command.unwrap_or_default(), Command::default());
        }
    }

    #[test]
    fn test_parse_play_options() {
        let args = CliArgs::try_parse_from(["game24", "play", "--name", "ann", "-t", "30", "--mute"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(
                args.command,
                Some(Command::Play {
                    name: Some("ann".to_string()),
                    time_limit: 30,
                    mute: true,
                })
            );
        }
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        assert!(CliArgs::try_parse_from(["game24", "play", "-t", "0"]).is_err());
    }

    #[test]
    fn test_parse_solve_needs_four_numbers() {
        let args = CliArgs::try_parse_from(["game24", "solve", "4", "1", "8", "7"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(
                args.command,
                Some(Command::Solve {
                    numbers: vec![4, 1, 8, 7]
                })
            );
        }

        assert!(CliArgs::try_parse_from(["game24", "solve", "4", "1", "8"]).is_err());
        assert!(CliArgs::try_parse_from(["game24", "solve", "4", "1", "8", "x"]).is_err());
    }

    #[test]
    fn test_parse_check() {
        let args = CliArgs::try_parse_from(["game24", "check", "(8-2)*4+0", "8", "2", "4", "0"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(
                args.command,
                Some(Command::Check {
                    expression: "(8-2)*4+0".to_string(),
                    numbers: vec![8, 2, 4, 0],
                })
            );
        }
    }

    #[test]
    fn test_parse_global_leaderboard_path() {
        let args = CliArgs::try_parse_from(["game24", "rank", "--leaderboard", "/tmp/r.json"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.leaderboard, Some(PathBuf::from("/tmp/r.json")));
            assert_eq!(args.command, Some(Command::Rank));
        }
    }

    #[test]
    fn test_survey_rejects_inverted_range() {
        assert!(survey(5, 4).is_err());
    }

    #[test]
    fn test_parse_deal() {
        assert!(parse_deal(&[1, 2, 3, 4]).is_ok());
        assert!(parse_deal(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
