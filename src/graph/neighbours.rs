use std::collections::HashMap;

use super::words::WordId;

/// Deterministic iterator over the ids of words at Hamming distance one
/// from a query word.
///
/// Substitutions are generated position by position (ascending) and letter
/// by letter (`a`..`z`), skipping the letter already at the position, and
/// only substitutions present in `ids` are yielded. A full enumeration
/// therefore costs O(n·26) map probes and never scans the dictionary.
pub struct Neighbours<'a> {
    word: &'a [u8],
    ids: &'a HashMap<String, WordId>,
    pos: usize,
    letter: u8,
    buf: Vec<u8>,
}

impl<'a> Neighbours<'a> {
    pub(crate) fn new(word: &'a str, ids: &'a HashMap<String, WordId>) -> Self {
        Neighbours {
            word: word.as_bytes(),
            ids,
            pos: 0,
            letter: b'a',
            buf: word.as_bytes().to_vec(),
        }
    }

    /// Rewinds the iterator to the first substitution.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.letter = b'a';
    }
}

impl<'a> Iterator for Neighbours<'a> {
    type Item = WordId;

    fn next(&mut self) -> Option<WordId> {
        while self.pos < self.word.len() {
            let (pos, letter) = (self.pos, self.letter);
            self.letter += 1;
            if self.letter > b'z' {
                self.pos += 1;
                self.letter = b'a';
            }
            if letter == self.word[pos] {
                // Substituting the original letter would yield the query
                // word itself, not a neighbour.
                continue;
            }
            self.buf[pos] = letter;
            let hit = std::str::from_utf8(&self.buf)
                .ok()
                .and_then(|w| self.ids.get(w))
                .copied();
            self.buf[pos] = self.word[pos];
            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}

/// Iterator over the neighbours of a node, backed either by a precomputed
/// adjacency row (eager graphs) or by on-the-fly substitution (lazy graphs).
pub enum NeighbourIter<'a> {
    Eager(std::iter::Copied<std::slice::Iter<'a, WordId>>),
    Lazy(Option<Neighbours<'a>>),
}

impl<'a> Iterator for NeighbourIter<'a> {
    type Item = WordId;

    fn next(&mut self) -> Option<WordId> {
        match self {
            NeighbourIter::Eager(it) => it.next(),
            NeighbourIter::Lazy(Some(it)) => it.next(),
            NeighbourIter::Lazy(None) => None,
        }
    }
}
