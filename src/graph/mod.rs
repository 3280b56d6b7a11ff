// ──────────────────────────────────────────────────────────────────────────────
// error module
mod error;
// neighbours module
mod neighbours;
// words module
mod words;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use neighbours::{NeighbourIter, Neighbours};
pub use words::{hamming, is_word, Strategy, WordGraph, WordId};
