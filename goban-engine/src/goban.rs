use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// Captures indexed by the color that made them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// A point that may not be played on the next move, and by whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}

/// Live position: grid, side to move, ko lock and capture tally.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    pub(crate) board: Board,
    pub(crate) turn: Stone,
    pub(crate) ko: Option<Ko>,
    pub(crate) captures: Captures,
}

impl Goban {
    pub fn new(size: u8) -> Self {
        Self::with_board(Board::new(size), Stone::Black)
    }

    /// Start from an arbitrary position with `turn` to move.
    pub fn with_board(board: Board, turn: Stone) -> Self {
        Goban {
            board,
            turn,
            ko: None,
            captures: Captures::new(),
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.board.in_bounds(row, col)
    }

    /// True if `point` is locked by ko for `stone`.
    pub fn is_ko(&self, point: Point, stone: Stone) -> bool {
        self.ko
            .as_ref()
            .is_some_and(|ko| ko.pos == point && ko.illegal == stone)
    }

    /// Empty the grid and hand the move back to Black.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Stone::Black;
        self.ko = None;
        self.captures = Captures::new();
    }

    /// Ko arises when a lone stone takes exactly one stone.
    pub(crate) fn detect_ko(&self, point: Point, stone: Stone, captured: &[Point]) -> Option<Ko> {
        if captured.len() != 1 {
            return None;
        }
        let lone = self
            .board
            .neighbors(point)
            .iter()
            .all(|&n| self.board.stone_at(n) != Some(stone));
        lone.then(|| Ko {
            pos: captured[0],
            illegal: stone.opp(),
        })
    }
}
