//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`BoardState`](crate::BoardState). Rules are kept apart
//! from board storage so the engine and the invariants can share them.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, has_line};
