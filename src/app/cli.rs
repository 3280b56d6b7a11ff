use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds word ladders between equal-length words in a dictionary.", long_about = None)]
pub struct Cli {
    /// Word list file, one word per line. Use '-' to read from standard input.
    #[clap(short, long, default_value = "-")]
    pub words: PathBuf,

    /// Precompute the full adjacency list while loading instead of
    /// enumerating neighbours lazily during the search.
    #[clap(long)]
    pub eager: bool,

    /// Suppress verbose output, only printing results or errors.
    #[clap(short, long)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Print one shortest ladder between two words, one word per line.
    Shortest {
        /// First word in the ladder (length must match last).
        first: String,
        /// Last word in the ladder (length must match first).
        last: String,
    },
    /// Print every shortest ladder between two words, one ladder per line.
    All {
        /// First word in the ladder (length must match last).
        first: String,
        /// Last word in the ladder (length must match first).
        last: String,
    },
    /// Print the longest shortest-ladder distance over the whole word list,
    /// then every ladder achieving it.
    Longest {
        /// Length of words to use for the ladder (must be greater than 0).
        #[clap(short)]
        n: usize,
    },
    /// Print the greatest number of tied shortest ladders between any pair
    /// of words, then every ladder of every such pair.
    Widest {
        /// Length of words to use for the ladder (must be greater than 0).
        #[clap(short)]
        n: usize,
    },
}
