// ──────────────────────────────────────────────────────────────────────────────
// error module
mod error;
// dijkstra module
mod dijkstra;
// extremal module
mod extremal;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the search modules.
//─────────────────────────────────────────────────────────────────────────────
pub use dijkstra::ShortestFrom;
pub use error::SearchError;
pub use extremal::{longest_ladders, widest_ladders, Extremal};
