//! CLI tool to run sequence operations over JSON input.
//!
//! Usage:
//!   textchain --input words.json sort
//!   echo '["a", "c"]' | textchain merge --other other.json
//!   textchain --input words.json --json split

mod input;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use textchain::Sequence;

#[derive(Parser, Debug)]
#[command(
    name = "textchain",
    about = "Run linked-sequence operations over a JSON array of strings",
    version
)]
struct Args {
    /// Input JSON file path ("-" reads stdin)
    #[arg(short, long, env = "TEXTCHAIN_INPUT", default_value = "-")]
    input: PathBuf,

    /// Print the result as JSON instead of the rendered form
    #[arg(long, default_value = "false")]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sequence
    Render,
    /// Merge-sort the sequence ascending
    Sort,
    /// Reverse the sequence
    Reverse,
    /// Split into front and back halves
    Split,
    /// Sort both inputs, then merge the second into the first
    Merge {
        /// Second JSON input file
        #[arg(short, long, env = "TEXTCHAIN_SECOND")]
        other: PathBuf,
    },
    /// Print the element at an index
    Get { index: usize },
    /// Report whether an element is present
    Contains { element: String },
    /// Remove the first element and print it
    Pop,
}

/// What a command produced, for JSON output.
#[derive(Debug, Serialize)]
struct Report {
    sequence: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    second: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

impl Report {
    fn of(seq: &Sequence) -> Self {
        Self {
            sequence: seq.to_array(),
            second: None,
            value: None,
        }
    }

    fn with_second(mut self, seq: &Sequence) -> Self {
        self.second = Some(seq.to_array());
        self
    }

    fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(command: Command, mut seq: Sequence) -> Result<(Report, Vec<String>)> {
    let output = match command {
        Command::Render => (Report::of(&seq), vec![seq.render()]),
        Command::Sort => {
            seq.merge_sort();
            (Report::of(&seq), vec![seq.render()])
        }
        Command::Reverse => {
            seq.reverse();
            (Report::of(&seq), vec![seq.render()])
        }
        Command::Split => {
            let back = seq.split();
            let lines = vec![seq.render(), back.render()];
            (Report::of(&seq).with_second(&back), lines)
        }
        Command::Merge { other } => {
            let mut second = Sequence::from_array(&input::read_elements(&other)?);
            log::debug!("merging {} + {} elements", seq.len(), second.len());
            seq.merge_sort();
            second.merge_sort();
            seq.merge(&mut second);
            (Report::of(&seq), vec![seq.render()])
        }
        Command::Get { index } => {
            let element = seq.get(index)?.to_owned();
            let report = Report::of(&seq).with_value(element.clone());
            (report, vec![element])
        }
        Command::Contains { element } => {
            let found = seq.contains(&element);
            (Report::of(&seq).with_value(found), vec![found.to_string()])
        }
        Command::Pop => {
            let element = seq.remove_front()?;
            let lines = vec![element.clone(), seq.render()];
            (Report::of(&seq).with_value(element), lines)
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let elements = input::read_elements(&args.input)?;
    log::debug!("read {} elements from {}", elements.len(), args.input.display());

    let seq = Sequence::from_array(&elements);
    let (report, lines) = run(args.command, seq)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
