use crate::Point;
use crate::board::Board;
use crate::goban::{Captures, Goban};
use crate::stone::Stone;

/// One step of undo/redo history.
///
/// `stone` is the side to move once this entry is restored, and `board` and
/// `captures` are owned copies taken before the position changed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub point: Point,
    pub stone: Stone,
    pub board: Board,
    pub captures: Captures,
}

impl HistoryEntry {
    /// Snapshot `goban` as it stands, tagged with the move at `point`.
    pub fn snapshot(point: Point, goban: &Goban) -> Self {
        HistoryEntry {
            point,
            stone: goban.turn,
            board: goban.board.clone(),
            captures: goban.captures,
        }
    }

    /// Put the snapshot back. Ko is not part of the snapshot and is cleared.
    pub fn restore(self, goban: &mut Goban) {
        goban.board = self.board;
        goban.turn = self.stone;
        goban.captures = self.captures;
        goban.ko = None;
    }
}
