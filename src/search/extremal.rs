use crate::graph::{WordGraph, WordId};

use super::dijkstra::ShortestFrom;
use super::error::SearchError;

/// Result of a whole-dictionary extremal scan: the extremal value and every
/// unordered pair of node ids achieving it, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extremal {
    pub value: usize,
    pub ends: Vec<(WordId, WordId)>,
}

/// Finds the maximum finite shortest-ladder distance over all unordered
/// pairs of words, together with every pair achieving it.
///
/// Runs one single-source search per node and visits each unordered pair
/// exactly once (`i < j` over the stable id ordering). Pairs in different
/// connected components have infinite distance and are excluded. Ties are
/// not broken; every qualifying pair is reported.
///
/// # Errors
/// Returns `SearchError::EmptyGraph` when the graph has no words.
pub fn longest_ladders(graph: &WordGraph) -> Result<Extremal, SearchError> {
    if graph.node_count() == 0 {
        return Err(SearchError::EmptyGraph);
    }
    let mut longest = Extremal {
        value: 0,
        ends: Vec::new(),
    };
    for from in 0..graph.node_count() {
        let paths = ShortestFrom::new(graph, from);
        for to in from + 1..graph.node_count() {
            let Some(length) = paths.dist_to(to) else {
                continue;
            };
            if length > longest.value {
                longest.value = length;
                longest.ends = vec![(from, to)];
            } else if length == longest.value {
                longest.ends.push((from, to));
            }
        }
    }
    Ok(longest)
}

/// Finds the maximum number of distinct tied shortest ladders between any
/// unordered pair of words, together with every pair achieving it.
///
/// The width of a pair is the count of its distinct shortest ladders, via
/// full all-paths reconstruction; it is not an edge-connectivity measure.
/// Pairs with no ladder at all never qualify.
///
/// # Errors
/// Returns `SearchError::EmptyGraph` when the graph has no words.
pub fn widest_ladders(graph: &WordGraph) -> Result<Extremal, SearchError> {
    if graph.node_count() == 0 {
        return Err(SearchError::EmptyGraph);
    }
    let mut widest = Extremal {
        value: 0,
        ends: Vec::new(),
    };
    for from in 0..graph.node_count() {
        let paths = ShortestFrom::new(graph, from);
        for to in from + 1..graph.node_count() {
            let width = paths.all_paths_to(to).len();
            if width == 0 {
                continue;
            }
            if width > widest.value {
                widest.value = width;
                widest.ends = vec![(from, to)];
            } else if width == widest.value {
                widest.ends.push((from, to));
            }
        }
    }
    Ok(widest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Strategy;

    fn graph_from(words: &[&str], strategy: Strategy) -> WordGraph {
        let mut g = WordGraph::new(words[0].len(), strategy);
        for w in words {
            g.include(w);
        }
        g
    }

    #[test]
    fn longest_finds_the_diameter_pair() {
        let words = ["cat", "cot", "cog", "dog", "dot", "bat", "bad"];
        let g = graph_from(&words, Strategy::Lazy);
        let longest = longest_ladders(&g).unwrap();
        // bad-bat-cat-cot-{cog,dot}-dog is the only distance-5 pair.
        assert_eq!(longest.value, 5);
        let ends: Vec<(Option<&str>, Option<&str>)> = longest
            .ends
            .iter()
            .map(|&(u, v)| (g.word_for(u), g.word_for(v)))
            .collect();
        assert_eq!(ends, vec![(Some("dog"), Some("bad"))]);
    }

    #[test]
    fn longest_ignores_disconnected_pairs() {
        // dog is isolated; only cat-cot is connected.
        let g = graph_from(&["cat", "cot", "dog"], Strategy::Lazy);
        let longest = longest_ladders(&g).unwrap();
        assert_eq!(longest.value, 1);
        assert_eq!(longest.ends, vec![(0, 1)]);
    }

    #[test]
    fn widest_counts_tied_shortest_ladders() {
        let g = graph_from(&["cat", "cot", "cog", "dog", "dot"], Strategy::Lazy);
        let widest = widest_ladders(&g).unwrap();
        assert_eq!(widest.value, 2);
        // cat-dog, cot-dog and cog-dot each have two tied shortest ladders.
        assert_eq!(widest.ends, vec![(0, 3), (1, 3), (2, 4)]);
    }

    #[test]
    fn widest_never_reports_disconnected_pairs() {
        let g = graph_from(&["cat", "dog"], Strategy::Lazy);
        let widest = widest_ladders(&g).unwrap();
        assert_eq!(widest.value, 0);
        assert!(widest.ends.is_empty());
    }

    #[test]
    fn empty_graph_is_an_error() {
        let g = WordGraph::new(3, Strategy::Lazy);
        assert!(matches!(longest_ladders(&g), Err(SearchError::EmptyGraph)));
        assert!(matches!(widest_ladders(&g), Err(SearchError::EmptyGraph)));
    }

    #[test]
    fn strategies_agree_on_extremal_results() {
        let words = ["cat", "cot", "cog", "dog", "dot", "bat", "bad"];
        let eager = graph_from(&words, Strategy::Eager);
        let lazy = graph_from(&words, Strategy::Lazy);
        assert_eq!(longest_ladders(&eager), longest_ladders(&lazy));
        assert_eq!(widest_ladders(&eager), widest_ladders(&lazy));
    }
}
