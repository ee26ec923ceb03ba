//! Board state.
//!
//! The `Board` owns every piece in a match and every pending ability
//! marker. It enforces grid bounds and the one-piece, one-marker cell
//! invariant, and nothing else.
//!
//! - `Board`: the mutable grid
//! - `BoardSnapshot`: an O(1) read-only copy for renderers
//! - `Layout`: a starting position from the rules file

mod grid;
mod snapshot;
mod layout;

pub use grid::{AbilityMarker, Board, Cell};
pub use snapshot::BoardSnapshot;
pub use layout::Layout;
