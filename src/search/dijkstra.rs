use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{WordGraph, WordId};

use super::error::SearchError;

/// Single-source unit-weight shortest path state over a `WordGraph`.
///
/// Dijkstra's algorithm (equivalently BFS layered by distance, since every
/// edge has weight one) runs at construction and the distance table and
/// complete predecessor sets are kept, so both a single shortest ladder and
/// the full set of tied shortest ladders can be reconstructed to any target
/// afterwards without touching the graph again.
pub struct ShortestFrom {
    source: WordId,
    // usize::MAX marks an unreachable node.
    dist: Vec<usize>,
    // preds[v] holds every settled u with dist[u] + 1 == dist[v], which is
    // exactly what all-paths reconstruction needs.
    preds: Vec<Vec<WordId>>,
}

impl ShortestFrom {
    /// Runs the search from the node holding `word`.
    ///
    /// # Errors
    /// Returns `SearchError::NodeNotFound` when the word was never included
    /// in the graph.
    pub fn from_word(graph: &WordGraph, word: &str) -> Result<Self, SearchError> {
        let source = graph
            .node_id_for(word)
            .ok_or_else(|| SearchError::NodeNotFound(word.to_string()))?;
        Ok(Self::new(graph, source))
    }

    /// Runs the search from the node with id `source`. An out-of-range
    /// source yields an all-unreachable table.
    pub fn new(graph: &WordGraph, source: WordId) -> Self {
        let n = graph.node_count();
        let mut dist = vec![usize::MAX; n];
        let mut preds = vec![Vec::new(); n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();
        if source < n {
            dist[source] = 0;
            frontier.push(Reverse((0usize, source)));
        }
        while let Some(Reverse((d, u))) = frontier.pop() {
            if settled[u] {
                // Stale frontier entry; u was settled at a shorter distance.
                continue;
            }
            settled[u] = true;
            let next = d + 1;
            for v in graph.neighbours_of(u) {
                if next < dist[v] {
                    dist[v] = next;
                    preds[v].clear();
                    preds[v].push(u);
                    frontier.push(Reverse((next, v)));
                } else if next == dist[v] {
                    preds[v].push(u);
                }
            }
        }
        ShortestFrom {
            source,
            dist,
            preds,
        }
    }

    /// Returns the id of the source node.
    pub fn source(&self) -> WordId {
        self.source
    }

    /// Returns the number of edges in a shortest ladder to `target`, or
    /// `None` when the target is unreachable or not a valid node.
    pub fn dist_to(&self, target: WordId) -> Option<usize> {
        match self.dist.get(target) {
            Some(&d) if d != usize::MAX => Some(d),
            _ => None,
        }
    }

    /// Reconstructs one shortest ladder from the source to `target`, source
    /// first. Returns `None` when the target is unreachable.
    pub fn path_to(&self, target: WordId) -> Option<Vec<WordId>> {
        self.dist_to(target)?;
        let mut path = vec![target];
        let mut node = target;
        while node != self.source {
            node = self.preds[node][0];
            path.push(node);
        }
        path.reverse();
        Some(path)
    }

    /// Reconstructs every shortest ladder from the source to `target` by
    /// expanding the predecessor sets backwards from the target.
    ///
    /// The number of tied shortest ladders can grow exponentially with
    /// ladder length; everything is materialized and nothing is truncated,
    /// matching the print-everything contract of the all-ladders modes.
    pub fn all_paths_to(&self, target: WordId) -> Vec<Vec<WordId>> {
        if self.dist_to(target).is_none() {
            return Vec::new();
        }
        let mut all = Vec::new();
        let mut suffix = vec![target];
        self.expand(target, &mut suffix, &mut all);
        all
    }

    fn expand(&self, node: WordId, suffix: &mut Vec<WordId>, all: &mut Vec<Vec<WordId>>) {
        if node == self.source {
            let mut path = suffix.clone();
            path.reverse();
            all.push(path);
            return;
        }
        for &p in &self.preds[node] {
            suffix.push(p);
            self.expand(p, suffix, all);
            suffix.pop();
        }
    }
}
