// words.rs
// ──────────────────────────────────────────────────────────────────────────────
// A graph of equal-length lowercase words where edges join words at Hamming
// distance exactly one. Nodes are stored in an arena indexed by dense ids;
// edges are never stored as objects. They are either derived on demand from
// word content (lazy strategy) or recorded as an adjacency table at
// insertion time (eager strategy). Both strategies expose the same node and
// neighbour contract, so search code is agnostic to the choice.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::HashMap;

use super::error::GraphError;
use super::neighbours::{NeighbourIter, Neighbours};

/// Dense, zero-based identifier for a word. Assigned at first insertion and
/// stable for the lifetime of the graph.
pub type WordId = usize;

/// Neighbour enumeration strategy, fixed at graph construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Record edges to all already-known neighbours at insertion, trading
    /// O(V·n·26) preprocessing for O(degree) neighbour queries.
    Eager,
    /// Store no adjacency; recompute the substitution enumeration on every
    /// neighbour query. Nothing to precompute, O(n·26) probes per query.
    Lazy,
}

/// Returns whether s is entirely alphabetical.
pub fn is_word(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns the Hamming distance between the words a and b.
///
/// # Errors
/// Returns `GraphError::LengthMismatch` when the words differ in length.
/// Within one graph this is unreachable; it guards against misuse across
/// graphs of different word lengths.
pub fn hamming(a: &str, b: &str) -> Result<usize, GraphError> {
    if a.len() != b.len() {
        return Err(GraphError::LengthMismatch {
            left: a.to_string(),
            right: b.to_string(),
        });
    }
    Ok(a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count())
}

/// A graph of Hamming distance-1 word paths.
#[derive(Clone, Debug)]
pub struct WordGraph {
    n: usize,
    words: Vec<String>,
    ids: HashMap<String, WordId>,
    // Some(adjacency) for the eager strategy, None for lazy.
    adjacency: Option<Vec<Vec<WordId>>>,
}

impl WordGraph {
    /// Returns a new `WordGraph` for words of `n` characters using the given
    /// neighbour strategy.
    pub fn new(n: usize, strategy: Strategy) -> Self {
        WordGraph {
            n,
            words: Vec::new(),
            ids: HashMap::new(),
            adjacency: match strategy {
                Strategy::Eager => Some(Vec::new()),
                Strategy::Lazy => None,
            },
        }
    }

    /// Returns the word length shared by every node in the graph.
    pub fn word_len(&self) -> usize {
        self.n
    }

    /// Returns the active neighbour strategy.
    pub fn strategy(&self) -> Strategy {
        if self.adjacency.is_some() {
            Strategy::Eager
        } else {
            Strategy::Lazy
        }
    }

    /// Adds `word` to the graph, assigning it the next dense id.
    ///
    /// Best-effort, mirroring dictionary loading: a word of the wrong
    /// length, a word with non-alphabetic characters, or a word already
    /// present (case-insensitively) is silently ignored. Words are
    /// normalized to lowercase before insertion. Under the eager strategy
    /// the new word is also joined to every already-known neighbour, in
    /// both directions.
    pub fn include(&mut self, word: &str) {
        if word.len() != self.n || !is_word(word) {
            return;
        }
        let word = word.to_ascii_lowercase();
        if self.ids.contains_key(&word) {
            return;
        }
        let id = self.words.len();
        // Enumerate neighbours among the words already known before the
        // insertion so the new word cannot appear in its own list.
        let links: Vec<WordId> = match &self.adjacency {
            Some(_) => Neighbours::new(&word, &self.ids).collect(),
            None => Vec::new(),
        };
        self.ids.insert(word.clone(), id);
        self.words.push(word);
        if let Some(adjacency) = self.adjacency.as_mut() {
            for &v in &links {
                adjacency[v].push(id);
            }
            adjacency.push(links);
        }
    }

    /// Returns the number of words in the graph.
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the id for `word`, or `None` if it was never included.
    /// Lookup is case-insensitive, matching `include`'s normalization.
    pub fn node_id_for(&self, word: &str) -> Option<WordId> {
        self.ids.get(&word.to_ascii_lowercase()).copied()
    }

    /// Returns the word with the given id, or `None` for an invalid id.
    pub fn word_for(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Returns an iterator over the neighbours of `id`.
    ///
    /// Lazy graphs yield neighbours in the canonical substitution order
    /// (position ascending, letter ascending); eager graphs yield their
    /// recorded adjacency order. Both produce the same set. An invalid id
    /// yields nothing.
    pub fn neighbours_of(&self, id: WordId) -> NeighbourIter<'_> {
        match &self.adjacency {
            Some(adjacency) => {
                let row = adjacency.get(id).map_or(&[] as &[WordId], Vec::as_slice);
                NeighbourIter::Eager(row.iter().copied())
            }
            None => NeighbourIter::Lazy(self.words.get(id).map(|w| Neighbours::new(w, &self.ids))),
        }
    }

    /// Returns whether `uid` and `vid` are joined by an edge, i.e. whether
    /// their words lie at Hamming distance exactly one. Self-loops and
    /// invalid ids have no edge.
    ///
    /// # Errors
    /// Propagates `GraphError::LengthMismatch` from the Hamming comparison;
    /// unreachable for ids of the same graph.
    pub fn has_edge(&self, uid: WordId, vid: WordId) -> Result<bool, GraphError> {
        if uid == vid {
            return Ok(false);
        }
        let (u, v) = match (self.words.get(uid), self.words.get(vid)) {
            (Some(u), Some(v)) => (u, v),
            _ => return Ok(false),
        };
        Ok(hamming(u, v)? == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(words: &[&str], strategy: Strategy) -> WordGraph {
        let mut g = WordGraph::new(words[0].len(), strategy);
        for w in words {
            g.include(w);
        }
        g
    }

    #[test]
    fn include_assigns_dense_ids_in_order() {
        let g = graph_from(&["cat", "cot", "dog"], Strategy::Lazy);
        assert_eq!(g.word_len(), 3);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node_id_for("cat"), Some(0));
        assert_eq!(g.node_id_for("cot"), Some(1));
        assert_eq!(g.node_id_for("dog"), Some(2));
        assert_eq!(g.word_for(1), Some("cot"));
        assert_eq!(g.word_for(3), None);
    }

    #[test]
    fn include_skips_invalid_and_duplicate_words() {
        let mut g = WordGraph::new(3, Strategy::Lazy);
        g.include("cat");
        g.include("cat");
        g.include("CAT");
        g.include("cats");
        g.include("c4t");
        g.include("");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node_id_for("cat"), Some(0));
    }

    #[test]
    fn include_normalizes_case() {
        let mut g = WordGraph::new(3, Strategy::Lazy);
        g.include("DoG");
        assert_eq!(g.node_id_for("dog"), Some(0));
        assert_eq!(g.node_id_for("dOg"), Some(0));
        assert_eq!(g.word_for(0), Some("dog"));
    }

    #[test]
    fn hamming_counts_differing_positions() {
        assert_eq!(hamming("cat", "cat"), Ok(0));
        assert_eq!(hamming("cat", "cot"), Ok(1));
        assert_eq!(hamming("cat", "dog"), Ok(3));
        assert!(hamming("cat", "cats").is_err());
    }

    #[test]
    fn has_edge_matches_hamming_and_is_symmetric() {
        let g = graph_from(&["cat", "cot", "dog"], Strategy::Lazy);
        for u in 0..g.node_count() {
            for v in 0..g.node_count() {
                let d = hamming(g.word_for(u).unwrap(), g.word_for(v).unwrap()).unwrap();
                assert_eq!(g.has_edge(u, v), Ok(u != v && d == 1));
                assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
            }
        }
    }

    #[test]
    fn eager_and_lazy_agree_on_neighbour_sets() {
        let words = ["cat", "cot", "cog", "dog", "dot", "bat", "bad"];
        let eager = graph_from(&words, Strategy::Eager);
        let lazy = graph_from(&words, Strategy::Lazy);
        assert_eq!(eager.strategy(), Strategy::Eager);
        assert_eq!(lazy.strategy(), Strategy::Lazy);
        for id in 0..eager.node_count() {
            let mut a: Vec<WordId> = eager.neighbours_of(id).collect();
            let mut b: Vec<WordId> = lazy.neighbours_of(id).collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "neighbour sets differ for {:?}", eager.word_for(id));
        }
    }

    #[test]
    fn eager_adjacency_is_symmetric() {
        let g = graph_from(&["cat", "cot", "cog"], Strategy::Eager);
        for u in 0..g.node_count() {
            for v in g.neighbours_of(u) {
                assert!(
                    g.neighbours_of(v).any(|w| w == u),
                    "missing mirror edge {} -> {}",
                    v,
                    u
                );
            }
        }
    }

    #[test]
    fn neighbours_of_invalid_id_is_empty() {
        let g = graph_from(&["cat"], Strategy::Lazy);
        assert_eq!(g.neighbours_of(7).count(), 0);
        let g = graph_from(&["cat"], Strategy::Eager);
        assert_eq!(g.neighbours_of(7).count(), 0);
    }
}
