use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docrank::{decode_result, decode_results, rank_stats, Ranker, ResultScorer, ScoringConfig};

mod cli;
use cli::{display, Cli, Commands, ScorerArgs};

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", display::error_prefix(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `rank --json` output stays pipeable.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCRANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank {
            file,
            scorer,
            limit,
            json,
        } => run_rank(file.as_deref(), &scorer, limit, json),
        Commands::Score { record, scorer } => run_score(&record, &scorer),
        Commands::Classify { paths, scorer } => run_classify(&paths, &scorer),
    }
}

fn run_rank(file: Option<&str>, args: &ScorerArgs, limit: Option<usize>, json: bool) -> Result<()> {
    let config = load_config(args)?;
    let input = read_input(file)?;
    let results = decode_results(&input).context("Failed to decode records")?;
    tracing::info!(count = results.len(), "decoded candidate results");

    let mut ranker = Ranker::new(config.scorer());
    if let Some(limit) = limit {
        ranker = ranker.with_limit(limit);
    }

    #[cfg(feature = "parallel")]
    let ranked = ranker.rank_parallel(results);
    #[cfg(not(feature = "parallel"))]
    let ranked = ranker.rank(results);

    if json {
        let out = serde_json::to_string_pretty(&ranked).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        display::print_ranked(&ranked, rank_stats(&ranked));
    }
    Ok(())
}

fn run_score(record: &str, args: &ScorerArgs) -> Result<()> {
    let config = load_config(args)?;
    let result = decode_result(record).context("Failed to decode record")?;
    println!("{}", config.scorer().score(&result));
    Ok(())
}

fn run_classify(paths: &[String], args: &ScorerArgs) -> Result<()> {
    let pattern = load_config(args)?.pattern();
    for path in paths {
        display::print_classification(path, pattern.matches(path));
    }
    Ok(())
}

/// Config file first, then command-line overrides on top.
fn load_config(args: &ScorerArgs) -> Result<ScoringConfig> {
    let config = match &args.config {
        Some(path) => ScoringConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => ScoringConfig::default(),
    };
    config
        .with_overrides(args.penalty)
        .context("Invalid scoring options")
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        None | Some("-") => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path)),
    }
}
