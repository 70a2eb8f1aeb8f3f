pub mod board;
pub mod engine;
pub mod error;
pub mod goban;
pub mod group;
pub mod history;
pub mod stone;

/// `(row, col)`. Signed so that off-board input is rejected rather than wrapped.
pub type Point = (i32, i32);

pub use board::{Board, DEFAULT_SIZE};
pub use engine::{Engine, GameState, Placement};
pub use error::{BoardError, MoveError};
pub use goban::{Captures, Goban, Ko};
pub use history::HistoryEntry;
pub use stone::{Cell, Stone};
