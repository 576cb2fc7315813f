use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use typed_builder::TypedBuilder;

use crate::error::Result;
use crate::wordlist::index::{Index, InsertOutcome};
use crate::wordlist::trie::search;

/// Dictionary backed by one of the trie variants. Built once from a word
/// source, then queried read-only.
pub struct Wordlist<T: Index> {
    trie: T,
    words: usize,
}

/// Shape of a dictionary file: plain one-word-per-line, or delimited
/// columns with the word in `word_column`.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => {
                let columns: Vec<_> = line.split(delimiter).collect();
                columns.get(self.word_column.unwrap_or(0)).copied()
            }
        }
    }
}

impl<T: Index> Wordlist<T> {
    pub fn build_from_file(trie: T, path: &Path, format: FileFormat) -> Result<Wordlist<T>> {
        println!("Reading words from {:#?}", path);

        let file = File::open(path)?;
        let buf_reader = BufReader::new(file);

        let start = Instant::now();
        let lines = buf_reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        println!("Reading took {}", start.elapsed().as_secs_f64());

        Ok(Wordlist::build_from_lines(
            trie,
            lines.iter().map(|x| x.as_str()),
            &format,
        ))
    }

    pub fn build_from_lines<'a, I>(mut trie: T, lines: I, format: &FileFormat) -> Wordlist<T>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let start = Instant::now();

        let mut malformed: usize = 0;
        let mut outcome = InsertOutcome::default();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let word = match format.parse_line(line) {
                Some(word) => word,
                None => {
                    malformed += 1;
                    continue;
                }
            };
            match trie.insert(word) {
                Ok(true) => outcome.added += 1,
                Ok(false) => outcome.duplicates += 1,
                Err(e) => {
                    outcome.rejected += 1;
                    eprintln!("Rejected {:?}: {}", word, e);
                }
            }
        }

        let count = outcome.added + outcome.duplicates;
        let failures = outcome.rejected + malformed;

        let elapsed = start.elapsed();
        println!(
            "Read {} words in {}s ({} kwps) [{} failures]",
            count,
            (elapsed.as_millis() as f64) / 1000.0,
            (count as f64) / (elapsed.as_millis() as f64).max(1.0),
            failures
        );

        Wordlist {
            trie,
            words: outcome.added,
        }
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn node_count(&self) -> usize;
        }
    }

    /// Distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn query_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<bool> {
        search::query_all(&self.trie, words)
    }

    pub fn query_all_parallel<S>(&self, words: &[S]) -> Vec<bool>
    where
        T: Sync,
        S: AsRef<str> + Sync,
    {
        search::query_all_parallel(&self.trie, words)
    }
}
