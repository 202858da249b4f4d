//! Subcommand implementations.

use std::fs;

use anyhow::Context as _;

use visa_generate::{RunOptions, RunSummary, run_generation};
use visa_ingest::{DATA_URL, fetch_dataset};
use visa_rules::{GuideRequest, RuleIndex};

use crate::cli::{GenerateArgs, LookupArgs};
use crate::summary::{print_countries, print_generate_summary, print_guide};

/// Fetches (or reads) the dataset and regenerates every known destination.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let csv = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read dataset file: {}", path.display()))?,
        None => {
            let url = args.url.as_deref().unwrap_or(DATA_URL);
            fetch_dataset(url)?
        }
    };

    let options = RunOptions {
        dry_run: args.dry_run,
    };
    let summary: RunSummary = run_generation(&csv, &args.rules_root, options)?;
    print_generate_summary(&summary, args.dry_run);
    Ok(())
}

/// Loads the rule index and answers one guide query.
pub fn run_lookup(args: &LookupArgs) -> anyhow::Result<()> {
    let index = RuleIndex::load(&args.rules_root)?;
    let request = GuideRequest {
        citizenship: Some(args.citizenship.clone()),
        destination: Some(args.destination.clone()),
        purpose: Some(args.purpose.into()),
        stay_days: args.stay,
        transit: args.transit.clone(),
        transit_hours: args.transit_hours,
    };
    let response = index.guide(&request);
    print_guide(&response);
    Ok(())
}

/// Prints the country catalog.
pub fn run_countries() -> anyhow::Result<()> {
    print_countries();
    Ok(())
}
