//! Self-play CLI.
//!
//! Plays random Kalaha games and writes one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 100)
//!   --stones N      Stones per pit (default: 6)
//!   --tie-break T   `second` or `draw` (default: second)
//!   --max-turns N   Turn limit per game (default: 1000)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use kalaha::selfplay::{self, SelfPlayConfig, SelfPlayError};
use tracing_subscriber::EnvFilter;

struct Args {
    config: SelfPlayConfig,
    output: Option<String>,
    quiet: bool,
}

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid {} value: '{}'", flag, value))
}

fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut parsed = Args {
        config: SelfPlayConfig::default(),
        output: None,
        quiet: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--games" => parsed.config.num_games = parse_value(flag, iter.next())?,
            "--stones" => parsed.config.stones = parse_value(flag, iter.next())?,
            "--tie-break" => parsed.config.tie_break = parse_value(flag, iter.next())?,
            "--max-turns" => parsed.config.max_turns = parse_value(flag, iter.next())?,
            "--threads" => parsed.config.threads = parse_value(flag, iter.next())?,
            "--seed" => parsed.config.seed = parse_value(flag, iter.next())?,
            "--output" => parsed.output = Some(parse_value(flag, iter.next())?),
            "--quiet" => parsed.quiet = true,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(Some(parsed))
}

fn run(args: Args) -> Result<(), SelfPlayError> {
    let config = &args.config;
    tracing::info!(
        games = config.num_games,
        stones = config.stones,
        threads = config.threads,
        seed = config.seed,
        "starting self-play"
    );

    let start = Instant::now();
    let games = selfplay::run_self_play(config)?;
    let elapsed = start.elapsed();
    tracing::info!(
        games = games.len(),
        secs = elapsed.as_secs_f64(),
        "self-play finished"
    );

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            selfplay::write_jsonl(&games, &mut writer)?;
            tracing::info!(path = %path, "wrote game records");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)?;
        }
    }

    if !args.quiet {
        eprintln!("{}", selfplay::summarize(&games));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            tracing::error!("{}", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(parsed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "self-play failed");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 100)");
    eprintln!("  --stones N       Stones per pit (default: 6)");
    eprintln!("  --tie-break T    second | draw (default: second)");
    eprintln!("  --max-turns N    Turn limit per game (default: 1000)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
