//! Main application orchestrator.
//!
//! Coordinates the word ladder search:
//! 1. Initializes logging.
//! 2. Validates the query words or the requested word length.
//! 3. Builds the word graph from the supplied word list. For two-endpoint
//!    modes the endpoints are included first, so they hold ids 0 and 1 and
//!    exist in the graph even when the word list omits them.
//! 4. Dispatches to the requested search mode and prints the ladders.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::{Cli, Mode};
use super::error::AppError;
use super::logger;
use super::reader;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::{is_word, Strategy, WordGraph, WordId};
use crate::search::{longest_ladders, widest_ladders, Extremal, SearchError, ShortestFrom};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Arguments
/// * `cli` - The `Cli` struct containing parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if any unrecoverable error occurs during the process:
/// usage errors for invalid query words or word length, I/O failures while
/// reading the word list, or search errors.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("ladders.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (ladders.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to ladders.log");
            if let Err(e) = logger::flush_global_logger() {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to flush ladders.log after initialization: {}",
                    e
                );
            }
        }
    }

    let strategy = if cli.eager {
        Strategy::Eager
    } else {
        Strategy::Lazy
    };

    let result = match &cli.mode {
        Mode::Shortest { first, last } => run_endpoints(&cli, first, last, strategy, false),
        Mode::All { first, last } => run_endpoints(&cli, first, last, strategy, true),
        Mode::Longest { n } => run_extremal(&cli, *n, strategy, ExtremalMode::Longest),
        Mode::Widest { n } => run_extremal(&cli, *n, strategy, ExtremalMode::Widest),
    };

    // Final flush of ladders.log before exiting.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of ladders.log: {}",
                e
            );
        }
    }

    result
}

/// Runs the two-endpoint modes: one shortest ladder, or every tied shortest
/// ladder, between `first` and `last`.
fn run_endpoints(
    cli: &Cli,
    first: &str,
    last: &str,
    strategy: Strategy,
    all_ladders: bool,
) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let (first, last) = validate_endpoints(first, last)?;

    verbose_println!(
        quiet_mode,
        "\n[STEP 1] Building word graph (length {}, {:?} strategy)...",
        first.len(),
        strategy
    );
    let mut graph = WordGraph::new(first.len(), strategy);
    graph.include(&first);
    graph.include(&last);
    reader::load_word_list(&cli.words, &mut graph, quiet_mode)?;
    verbose_println!(quiet_mode, "   => Graph holds {} word(s).", graph.node_count());

    verbose_println!(
        quiet_mode,
        "\n[STEP 2] Searching for shortest ladder(s) from {:?} to {:?}...",
        first,
        last
    );
    let paths = ShortestFrom::from_word(&graph, &first)?;
    let target = graph
        .node_id_for(&last)
        .ok_or_else(|| SearchError::NodeNotFound(last.clone()))?;

    if all_ladders {
        let ladders = paths.all_paths_to(target);
        if ladders.is_empty() {
            verbose_println!(
                quiet_mode,
                "   => No ladder between {:?} and {:?}.",
                first,
                last
            );
            return Ok(());
        }
        verbose_println!(
            quiet_mode,
            "   => Found {} ladder(s) of length {}.",
            ladders.len(),
            ladders[0].len() - 1
        );
        for ladder in ladders {
            println!("{}", format_ladder(&graph, &ladder));
        }
    } else {
        match paths.path_to(target) {
            Some(ladder) => {
                verbose_println!(
                    quiet_mode,
                    "   => Found a ladder of length {}.",
                    ladder.len() - 1
                );
                for id in &ladder {
                    if let Some(word) = graph.word_for(*id) {
                        println!("{}", word);
                    }
                }
            }
            None => verbose_println!(
                quiet_mode,
                "   => No ladder between {:?} and {:?}.",
                first,
                last
            ),
        }
    }
    Ok(())
}

enum ExtremalMode {
    Longest,
    Widest,
}

/// Runs the whole-dictionary modes: the longest shortest ladder, or the
/// widest shortest-ladder tie, over all words of length `n`.
fn run_extremal(cli: &Cli, n: usize, strategy: Strategy, mode: ExtremalMode) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    if n == 0 {
        return Err(AppError::Usage(
            "word length must be greater than 0".to_string(),
        ));
    }

    verbose_println!(
        quiet_mode,
        "\n[STEP 1] Building word graph (length {}, {:?} strategy)...",
        n,
        strategy
    );
    let mut graph = WordGraph::new(n, strategy);
    reader::load_word_list(&cli.words, &mut graph, quiet_mode)?;
    verbose_println!(quiet_mode, "   => Graph holds {} word(s).", graph.node_count());

    let extremal = match mode {
        ExtremalMode::Longest => {
            verbose_println!(
                quiet_mode,
                "\n[STEP 2] Scanning all pairs for the longest shortest ladder..."
            );
            longest_ladders(&graph)?
        }
        ExtremalMode::Widest => {
            verbose_println!(
                quiet_mode,
                "\n[STEP 2] Scanning all pairs for the widest shortest-ladder tie..."
            );
            widest_ladders(&graph)?
        }
    };
    verbose_println!(
        quiet_mode,
        "   => Extremal value {} achieved by {} pair(s).",
        extremal.value,
        extremal.ends.len()
    );

    println!("{}", extremal.value);
    print_pair_ladders(&graph, &extremal);
    Ok(())
}

/// Prints every ladder of every qualifying pair, one per line.
fn print_pair_ladders(graph: &WordGraph, extremal: &Extremal) {
    // Qualifying pairs arrive grouped by their first id, so one engine run
    // per distinct source covers consecutive pairs.
    let mut cached: Option<(WordId, ShortestFrom)> = None;
    for &(from, to) in &extremal.ends {
        if cached.as_ref().map(|(src, _)| *src) != Some(from) {
            cached = Some((from, ShortestFrom::new(graph, from)));
        }
        if let Some((_, paths)) = &cached {
            for ladder in paths.all_paths_to(to) {
                println!("{}", format_ladder(graph, &ladder));
            }
        }
    }
}

/// Formats a ladder of node ids as its words, space-joined in brackets.
fn format_ladder(graph: &WordGraph, ladder: &[WordId]) -> String {
    let words: Vec<&str> = ladder
        .iter()
        .filter_map(|&id| graph.word_for(id))
        .collect();
    format!("[{}]", words.join(" "))
}

/// Checks the two query words and returns them lowercased.
///
/// # Errors
/// Returns `AppError::Usage` when the words are empty, differ in length, or
/// contain non-alphabetic characters.
fn validate_endpoints(first: &str, last: &str) -> Result<(String, String), AppError> {
    if first.is_empty() || last.is_empty() || first.len() != last.len() {
        return Err(AppError::Usage(
            "first and last words must be non-empty and of equal length".to_string(),
        ));
    }
    for w in [first, last] {
        if !is_word(w) {
            return Err(AppError::Usage(format!(
                "word must not contain punctuation or numerals: {:?}",
                w
            )));
        }
    }
    Ok((first.to_ascii_lowercase(), last.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_lowercased() {
        assert_eq!(
            validate_endpoints("CaT", "DOG").unwrap(),
            ("cat".to_string(), "dog".to_string())
        );
    }

    #[test]
    fn mismatched_or_invalid_endpoints_are_usage_errors() {
        assert!(matches!(
            validate_endpoints("cat", "dogs"),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(validate_endpoints("", ""), Err(AppError::Usage(_))));
        assert!(matches!(
            validate_endpoints("c4t", "dog"),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn ladders_format_as_bracketed_words() {
        let mut graph = WordGraph::new(3, Strategy::Lazy);
        graph.include("cat");
        graph.include("cot");
        graph.include("cog");
        assert_eq!(format_ladder(&graph, &[0, 1, 2]), "[cat cot cog]");
        assert_eq!(format_ladder(&graph, &[0]), "[cat]");
    }
}
