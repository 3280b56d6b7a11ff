//! Word-list loading.
//!
//! Feeds candidate words from a file (or standard input) into a `WordGraph`.
//! Loading is best effort: lines that are not valid words for the graph's
//! length are skipped silently by `include`; only an I/O failure aborts.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::error::AppError;
use super::verbose_println;
use crate::graph::WordGraph;

/// Reads candidate words from `path`, one per line, into the graph.
///
/// The path `-` reads from standard input instead of a file.
///
/// # Arguments
/// * `path` - The word list file, or `-` for standard input.
/// * `graph` - The graph receiving the words.
/// * `quiet_mode` - Suppresses verbose logging if true.
///
/// # Errors
/// Returns `AppError::InvalidPath` when the path does not name a file, or
/// `AppError::Io` when reading fails mid-stream.
pub fn load_word_list(
    path: &Path,
    graph: &mut WordGraph,
    quiet_mode: bool,
) -> Result<usize, AppError> {
    let before = graph.node_count();
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        include_lines(stdin.lock(), graph)?;
    } else {
        if !path.exists() {
            return Err(AppError::InvalidPath(format!(
                "file not found: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(AppError::InvalidPath(format!(
                "path is not a file: {}",
                path.display()
            )));
        }
        let file = File::open(path)?;
        include_lines(BufReader::new(file), graph)?;
    }
    let added = graph.node_count() - before;
    verbose_println!(
        quiet_mode,
        "   => Included {} word(s) from {}.",
        added,
        path.display()
    );
    Ok(added)
}

fn include_lines<R: BufRead>(reader: R, graph: &mut WordGraph) -> Result<(), AppError> {
    for line in reader.lines() {
        let line = line?;
        graph.include(line.trim());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Strategy;

    #[test]
    fn loads_valid_words_and_skips_the_rest() {
        let path = std::env::temp_dir().join("ladders-reader-test.txt");
        std::fs::write(&path, "cat\nCOT\ncats\nc4t\ndog\ncat\n").expect("unable to write test file");
        let mut graph = WordGraph::new(3, Strategy::Lazy);
        let added = load_word_list(&path, &mut graph, true).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(added, 3);
        assert_eq!(graph.node_id_for("cat"), Some(0));
        assert_eq!(graph.node_id_for("cot"), Some(1));
        assert_eq!(graph.node_id_for("dog"), Some(2));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut graph = WordGraph::new(3, Strategy::Lazy);
        let err = load_word_list(Path::new("no-such-file.txt"), &mut graph, true);
        assert!(matches!(err, Err(AppError::InvalidPath(_))));
    }
}
