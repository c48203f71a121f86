//! `nstd` — compute NSTD indices from the command line.
//!
//! ```text
//! nstd --graph edges.csv --topics user_topic.json pair 1001 1002
//! nstd --graph edges.csv --topics user_topic.json batch --pairs pairs.csv
//! nstd --topics user_topic.json entropy 1001 1002
//! nstd --config run.json batch
//! ```
//!
//! Results go to stdout as JSON, logs go to stderr. Paths fall back to the
//! config file, then to `NSTD_GRAPH` / `NSTD_TOPICS`. Log level follows
//! `RUST_LOG` (default `info`).

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nstd_indices::{
    batch, load, EntropyCache, EntropyPolicy, IndexEngine, Result, RunConfig, TopicStore,
};

#[derive(Parser)]
#[command(name = "nstd")]
#[command(author, version, about = "NSTD indices for pairs of users", long_about = None)]
struct Cli {
    /// JSON run configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Edge list, one `follower,followee` per line
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Topic vectors as a JSON object `{user: [weights]}`
    #[arg(long, global = true)]
    topics: Option<PathBuf>,

    /// How zero topic weights are treated: `zero_convention` or `reject`
    #[arg(long, global = true)]
    entropy_policy: Option<EntropyPolicy>,

    /// Worker threads for batch evaluation
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Every index family for one ordered pair (i, j)
    Pair {
        user_i: String,
        user_j: String,
    },

    /// Every index family for each pair in a file
    Batch {
        /// Pair list, one `user_i,user_j` per line
        #[arg(long)]
        pairs: Option<PathBuf>,
    },

    /// Cached topic entropies (all users when none are given)
    Entropy {
        users: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "nstd failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let policy = config.engine.entropy_policy;

    match &cli.command {
        Commands::Pair { user_i, user_j } => {
            let graph = load::load_social_graph(config.graph_path()?)?;
            let topics = load::load_topic_store(config.topics_path()?)?;
            let entropies = EntropyCache::build(&topics, policy)?;
            let engine = IndexEngine::new(&graph, &topics, &entropies);

            let report = engine.report(user_i, user_j);
            emit(&report, cli.pretty)
        }
        Commands::Batch { .. } => {
            let pairs = load::load_pairs(config.pairs_path()?)?;
            let graph = load::load_social_graph(config.graph_path()?)?;
            let topics = load::load_topic_store(config.topics_path()?)?;
            let entropies = EntropyCache::build(&topics, policy)?;
            let engine = IndexEngine::new(&graph, &topics, &entropies);

            let pool = batch::thread_pool(config.threads)?;
            let outcome = pool.install(|| batch::evaluate_pairs(&engine, &pairs));
            emit(&outcome, cli.pretty)
        }
        Commands::Entropy { users } => {
            let topics = load::load_topic_store(config.topics_path()?)?;
            let entropies = EntropyCache::build(&topics, policy)?;
            emit(&entropy_table(&topics, &entropies, users), cli.pretty)
        }
    }
}

/// Flags override the config file; the config file overrides the environment.
fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(path) = &cli.graph {
        config.graph_path = Some(path.clone());
    }
    if let Some(path) = &cli.topics {
        config.topics_path = Some(path.clone());
    }
    if let Commands::Batch { pairs: Some(path) } = &cli.command {
        config.pairs_path = Some(path.clone());
    }
    if let Some(policy) = cli.entropy_policy {
        config.engine.entropy_policy = policy;
    }
    if cli.threads.is_some() {
        config.threads = cli.threads;
    }
    config.with_env_fallbacks()
}

/// Requested users map to `None` when they have no topic vector.
fn entropy_table(
    topics: &TopicStore,
    entropies: &EntropyCache,
    users: &[String],
) -> BTreeMap<String, Option<f64>> {
    if users.is_empty() {
        return topics
            .iter()
            .map(|(u, _)| (u.to_string(), entropies.get(u.as_str())))
            .collect();
    }
    users
        .iter()
        .map(|u| (u.clone(), entropies.get(u)))
        .collect()
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
