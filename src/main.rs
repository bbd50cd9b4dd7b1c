//! # dnatrie CLI
//!
//! Reads a text and a pattern set, and prints every text offset at which a
//! pattern starts.
//!
//! ## Usage
//!
//! ```bash
//! # Text, pattern count and patterns on stdin
//! printf 'AATG\n2\nAT\nAG\n' | dnatrie
//!
//! # Patterns from a file, text on stdin
//! echo AATG | dnatrie -p primers.txt
//!
//! # Show the trie edges (to stderr) before matching
//! dnatrie -i problem.txt --dump-trie pre
//! ```

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use dnatrie::input::{self, ProblemInput};
use dnatrie::trie::{build_trie, builder::build_trie_from_file, Order, Trie};

/// Find every offset of a DNA text where one of a set of patterns starts
#[derive(Parser)]
#[command(name = "dnatrie")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read the problem from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Load patterns from FILE, one per line; the input then holds only the text
    #[arg(short, long, value_name = "FILE")]
    patterns: Option<PathBuf>,

    /// Print the trie edge list to stderr in the given order
    #[arg(long, value_name = "ORDER")]
    dump_trie: Option<DumpOrder>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DumpOrder {
    /// Parents before children
    Pre,
    /// Children before parents
    Post,
}

impl From<DumpOrder> for Order {
    fn from(order: DumpOrder) -> Self {
        match order {
            DumpOrder::Pre => Order::PreOrder,
            DumpOrder::Post => Order::PostOrder,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = read_input(cli.input.as_deref())?;
    let (text, trie) = match &cli.patterns {
        Some(path) => {
            let trie = build_trie_from_file(path)
                .with_context(|| format!("failed to load patterns from {}", path.display()))?;
            (input::parse_text(&raw)?, trie)
        }
        None => {
            let problem = ProblemInput::parse(&raw)?;
            let trie = build_trie(&problem.patterns);
            (problem.text, trie)
        }
    };

    if let Some(order) = cli.dump_trie {
        trie.write_edges(order.into(), &mut io::stderr().lock())
            .context("failed to write trie edges")?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_offsets(&trie, text.as_bytes(), &mut out).context("failed to write offsets")?;
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Writes each matching offset followed by a space, as they are found, and ends
/// the line if anything was written.
fn write_offsets<W: Write>(trie: &Trie, text: &[u8], out: &mut W) -> io::Result<()> {
    let mut any = false;
    for offset in trie.matches(text) {
        write!(out, "{offset} ")?;
        any = true;
    }
    if any {
        writeln!(out)?;
    }
    Ok(())
}
