// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `taxamatch` CLI: load a JSON dictionary and run one fuzzy-matching
//! query against it.
//!
//! ```bash
//! # dictionary.json: { "Homo sapiens": ["gbif"], "Escherichia coli": ["col"] }
//! taxamatch query --dict dictionary.json --term "homo sapien"
//! taxamatch query --dict dictionary.json --term "e. coli" --source col
//! ```
//!
//! This binary is a thin harness around [`taxamatch::Finder`]: loading the
//! dictionary from disk and printing results are its only jobs. Everything
//! about how a query is matched lives in the library.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use taxamatch::{DataSources, Dictionary, Finder};

#[derive(Parser)]
#[command(name = "taxamatch", version, about = "Fuzzy matching of scientific names")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single query against a dictionary loaded from disk.
    Query {
        /// Path to a JSON file mapping each canonical name to a list of
        /// data-source identifiers, e.g. `{"Homo sapiens": ["gbif"]}`.
        #[arg(long)]
        dict: PathBuf,

        /// The query term, e.g. "homo sapien" or "e. coli".
        #[arg(long)]
        term: String,

        /// Restrict results to these data sources (repeatable). Omit to
        /// search the whole dictionary.
        #[arg(long = "source")]
        sources: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Query { dict, term, sources } => run_query(&dict, &term, sources),
    }
}

fn run_query(dict_path: &PathBuf, term: &str, sources: Vec<String>) -> Result<()> {
    let dictionary = load_dictionary(dict_path)?;
    let data_sources: DataSources = sources.into_iter().collect();

    let spinner = start_spinner(dictionary.len());
    let finder = Finder::new(dictionary);
    stop_spinner(spinner);

    let matches = finder.find_all_matches(term, &data_sources);
    if matches.is_empty() {
        println!("no matches for \"{term}\"");
    } else {
        for name in matches {
            println!("{name}");
        }
    }
    Ok(())
}

fn load_dictionary(path: &PathBuf) -> Result<Dictionary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary file {}", path.display()))?;
    let entries: HashMap<String, HashSet<String>> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as JSON", path.display()))?;
    Ok(Dictionary::new(entries))
}

/// Shows a spinner while the per-strategy indexes are built, when the
/// `parallel` feature (and its `indicatif` dependency) is enabled. A no-op
/// otherwise — construction is fast enough single-threaded not to need one.
#[cfg(feature = "parallel")]
fn start_spinner(dictionary_len: usize) -> Option<indicatif::ProgressBar> {
    let bar = indicatif::ProgressBar::new_spinner();
    bar.set_style(
        indicatif::ProgressStyle::with_template("{spinner} indexing {msg} entries")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    bar.set_message(dictionary_len.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(bar)
}

#[cfg(not(feature = "parallel"))]
fn start_spinner(_dictionary_len: usize) -> Option<()> {
    None
}

#[cfg(feature = "parallel")]
fn stop_spinner(spinner: Option<indicatif::ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}

#[cfg(not(feature = "parallel"))]
fn stop_spinner(_spinner: Option<()>) {}
