//! Count a spatial election stored as JSON.
//!
//! ```text
//! elect scenario.json --system instant-runoff --verbose
//! elect scenario.json --all
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spatial_vote::ElectionEngine;
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

#[derive(Parser)]
#[clap(version, about = "Count an election in a spatial model of voting")]
struct Opts {
    /// JSON file with the candidates, voters and configuration
    scenario: PathBuf,

    /// System to count with, overriding the one in the scenario
    #[clap(long, short)]
    system: Option<String>,

    /// Count with every system
    #[clap(long, conflicts_with = "system")]
    all: bool,

    /// Print the tallies behind each result
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let scenario = Scenario::load(&opts.scenario)?;
    tracing::info!(
        candidates = scenario.candidates.len(),
        voters = scenario.voters.len(),
        "scenario loaded"
    );
    if opts.all {
        for line in scenario.count_all(opts.verbose) {
            println!("{}", line);
        }
        return Ok(());
    }

    let system = scenario.system_name(opts.system.as_deref());
    let winner = ElectionEngine::new(scenario.config.clone())
        .elect(&scenario.candidates, &scenario.voters, system, opts.verbose)
        .with_context(|| format!("{} election failed", system))?;
    println!("Winner: {}", winner);
    Ok(())
}
