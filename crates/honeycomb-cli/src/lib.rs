//! Honeycomb command-line front end.
//!
//! Reads a grid file and a dictionary file, runs the word search and prints
//! the words found, one per line in ascending order.

pub mod input;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueHint};
use honeycomb_search::{FoundWords, SearchConfig, SearchStrategy, WordFinder};
use honeycomb_topology::HoneycombGraph;
use tracing::info;

/// Find every dictionary word traceable through a honeycomb grid
#[derive(Parser, Debug)]
#[command(name = "honeycomb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Grid file: depth on the first line, then one line of letters per ring
    #[arg(value_hint = ValueHint::FilePath)]
    pub grid: PathBuf,

    /// Dictionary file: one word per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub dictionary: PathBuf,

    /// Traversal strategy: recursive, stack or parallel
    #[arg(short, long, env = "HONEYCOMB_STRATEGY", default_value_t = SearchStrategy::Recursive)]
    pub strategy: SearchStrategy,

    /// Print each word's cell path as ring:offset pairs
    #[arg(long)]
    pub paths: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub grid: PathBuf,
    pub dictionary: PathBuf,
    pub search: SearchConfig,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            grid: cli.grid,
            dictionary: cli.dictionary,
            search: SearchConfig {
                strategy: cli.strategy,
                with_paths: cli.paths,
            },
        }
    }
}

/// Load both inputs, search, and write the result to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<FoundWords> {
    let dictionary = input::read_dictionary(&config.dictionary)?;
    let graph = input::read_grid(&config.grid)?;

    info!(
        words = dictionary.len(),
        depth = graph.depth(),
        cells = graph.len(),
        strategy = %config.search.strategy,
        "searching honeycomb"
    );

    let found = WordFinder::new(&dictionary, &graph)
        .with_config(config.search.clone())
        .run();

    write_found(out, &found, &graph).context("failed to write results")?;
    info!(found = found.words.len(), "search finished");

    Ok(found)
}

/// One word per line; with paths, a tab and the path after each word.
pub fn write_found<W: Write>(
    out: &mut W,
    found: &FoundWords,
    graph: &HoneycombGraph,
) -> std::io::Result<()> {
    for word in &found.words {
        match found.paths.get(word) {
            Some(path) => {
                let cells: Vec<String> = path
                    .iter()
                    .map(|&id| graph[id].pos().to_string())
                    .collect();
                writeln!(out, "{}\t{}", word, cells.join(" "))?;
            }
            None => writeln!(out, "{}", word)?,
        }
    }
    out.flush()
}
