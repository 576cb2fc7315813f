use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use structopt::StructOpt;

use trie_tools::alphabet::Alphabet;
use trie_tools::error::Result;
use trie_tools::wordlist::index::Index;
use trie_tools::wordlist::trie::fixed::FixedTrie;
use trie_tools::wordlist::trie::hash::HashTrie;
use trie_tools::wordlist::trie::variable::VariableTrie;
use trie_tools::wordlist::wordlist::{FileFormat, Wordlist};

/// Build a trie from a dictionary file and answer membership queries
/// from a query file, one boolean per line.
#[derive(StructOpt)]
struct Cli {
    /// The dictionary file, one word per line
    #[structopt(parse(from_os_str))]
    input_path: PathBuf,
    /// The query file, one word per line
    #[structopt(parse(from_os_str))]
    query_path: PathBuf,
    /// Trie variant: variable size (1), fixed size (2), or hash (3)
    #[structopt(short = "v", long = "variant", default_value = "1")]
    variant: u8,
    /// Evaluate queries on the rayon thread pool
    #[structopt(long)]
    parallel: bool,
    /// Print the stats line as JSON
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunStats {
    trie_variant: &'static str,
    word_count: usize,
    node_count: usize,
    query_count: usize,
    construction_time_ms: f64,
    query_time_ms: f64,
}

fn main() -> Result<()> {
    let args = Cli::from_args();
    match args.variant {
        1 => run(VariableTrie::new(), "variable_size", &args),
        2 => run(FixedTrie::new(Alphabet::alphanumeric()), "fixed_size", &args),
        3 => run(HashTrie::new(), "hash", &args),
        other => {
            eprintln!("Invalid trie variant {} (expected 1, 2, or 3)", other);
            std::process::exit(2);
        }
    }
}

fn run<T: Index + Sync>(trie: T, variant: &'static str, args: &Cli) -> Result<()> {
    let build_start = Instant::now();
    let wordlist = Wordlist::build_from_file(trie, &args.input_path, FileFormat::builder().build())?;
    let construction_time_ms = build_start.elapsed().as_secs_f64() * 1e3;

    let queries = read_queries(&args.query_path)?;

    let query_start = Instant::now();
    let results = if args.parallel {
        wordlist.query_all_parallel(&queries)
    } else {
        wordlist.query_all(&queries)
    };
    let query_time_ms = query_start.elapsed().as_secs_f64() * 1e3;

    let result_path = write_results(&args.input_path, &results)?;
    println!("Wrote {} results to {}", results.len(), result_path.display());

    let stats = RunStats {
        trie_variant: variant,
        word_count: wordlist.word_count(),
        node_count: wordlist.node_count(),
        query_count: queries.len(),
        construction_time_ms,
        query_time_ms,
    };
    if args.json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        println!(
            "trie_variant={} word_count={} node_count={} query_count={} construction_time={} query_time={}",
            stats.trie_variant,
            stats.word_count,
            stats.node_count,
            stats.query_count,
            stats.construction_time_ms,
            stats.query_time_ms
        );
    }
    Ok(())
}

fn read_queries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let queries = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()?;
    Ok(queries)
}

/// Writes one lowercase `true`/`false` per query, in query order, to
/// `result_<dictionary stem>.txt` next to the dictionary file.
fn write_results(input_path: &Path, results: &[bool]) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input");
    let name = format!("result_{}.txt", stem);
    let full_path = match input_path.parent() {
        Some(parent) => parent.join(&name),
        None => PathBuf::from(&name),
    };

    let mut out = BufWriter::new(File::create(&full_path)?);
    for result in results {
        writeln!(out, "{}", result)?;
    }
    out.flush()?;
    Ok(full_path)
}
