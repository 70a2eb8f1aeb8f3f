use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Point;
use crate::board::{Board, DEFAULT_SIZE};
use crate::error::MoveError;
use crate::goban::{Captures, Goban, Ko};
use crate::history::HistoryEntry;
use crate::stone::Stone;

/// Serializable view handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub size: u8,
    pub turn: Stone,
    pub captures: Captures,
    pub ko: Option<Ko>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub last_move: Option<Point>,
}

/// A committed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub stone: Stone,
    pub captured: Vec<Point>,
    pub ko: Option<Ko>,
}

/// Sole mutator of a game: legality, captures, ko and undo/redo history.
#[derive(Debug, Clone)]
pub struct Engine {
    goban: Goban,
    history: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(DEFAULT_SIZE)
    }
}

impl Engine {
    pub fn new(size: u8) -> Self {
        Self::with_goban(Goban::new(size))
    }

    /// Start from a set-up position with `turn` to move. History starts empty.
    pub fn with_board(board: Board, turn: Stone) -> Self {
        Self::with_goban(Goban::with_board(board, turn))
    }

    fn with_goban(goban: Goban) -> Self {
        Engine {
            goban,
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &Board {
        self.goban.board()
    }

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn turn(&self) -> Stone {
        self.goban.turn()
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.goban.ko()
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.board().stone_at(point)
    }

    /// Point of the most recent move still on the history stack.
    pub fn last_move(&self) -> Option<Point> {
        self.history.last().map(|entry| entry.point)
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    // -- Game actions --

    /// Play for the side to move. Returns false, leaving everything as it was, if the move is illegal.
    pub fn place_stone(&mut self, row: i32, col: i32) -> bool {
        self.try_place(row, col).is_ok()
    }

    /// Play for the side to move, reporting why an illegal move was refused.
    pub fn try_place(&mut self, row: i32, col: i32) -> Result<Placement, MoveError> {
        let point = (row, col);
        let stone = self.goban.turn;

        if let Err(reason) = self.precheck(point, stone) {
            trace!(?point, %stone, %reason, "move rejected");
            return Err(reason);
        }

        self.history.push(HistoryEntry::snapshot(point, &self.goban));

        let captured = match settle(&mut self.goban.board, point, stone) {
            Ok(captured) => captured,
            Err(reason) => {
                self.history.pop();
                trace!(?point, %stone, %reason, "move rejected");
                return Err(reason);
            }
        };

        self.redo.clear();
        self.goban.captures.add(stone, captured.len() as u32);
        self.goban.turn = stone.opp();
        self.goban.ko = self.goban.detect_ko(point, stone, &captured);

        debug!(
            ?point,
            %stone,
            captured = captured.len(),
            ko = ?self.goban.ko.map(|ko| ko.pos),
            "stone placed"
        );

        Ok(Placement {
            point,
            stone,
            captured,
            ko: self.goban.ko,
        })
    }

    /// Whether the side to move could play at `(row, col)`. Never mutates.
    pub fn is_legal(&self, row: i32, col: i32) -> bool {
        let point = (row, col);
        let stone = self.goban.turn;
        if self.precheck(point, stone).is_err() {
            return false;
        }
        let mut scratch = self.goban.board.clone();
        settle(&mut scratch, point, stone).is_ok()
    }

    pub fn undo_move(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.redo.push(HistoryEntry::snapshot(entry.point, &self.goban));
        debug!(point = ?entry.point, "undo");
        entry.restore(&mut self.goban);
        true
    }

    pub fn redo_move(&mut self) -> bool {
        let Some(entry) = self.redo.pop() else {
            return false;
        };
        self.history.push(HistoryEntry::snapshot(entry.point, &self.goban));
        debug!(point = ?entry.point, "redo");
        entry.restore(&mut self.goban);
        true
    }

    pub fn new_game(&mut self) {
        self.goban.reset();
        self.history.clear();
        self.redo.clear();
        debug!(size = self.goban.size(), "new game");
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.goban.board().cells().to_vec(),
            size: self.goban.size(),
            turn: self.goban.turn(),
            captures: *self.goban.captures(),
            ko: self.goban.ko,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            last_move: self.last_move(),
        }
    }

    /// Checks that need no board mutation, in reporting order.
    fn precheck(&self, point: Point, stone: Stone) -> Result<(), MoveError> {
        let (row, col) = point;
        if !self.goban.in_bounds(row, col) {
            return Err(MoveError::OutOfBounds);
        }
        if self.goban.board().stone_at(point).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.goban.is_ko(point, stone) {
            return Err(MoveError::KoViolation);
        }
        Ok(())
    }
}

/// Put `stone` at an empty `point`, take dead opposing groups, and undo the
/// placement again if it turns out to be suicide.
fn settle(board: &mut Board, point: Point, stone: Stone) -> Result<Vec<Point>, MoveError> {
    let (row, col) = point;
    board.set_stone(point, stone);

    let captured = board.resolve_captures(row, col);
    if captured.is_empty() {
        let group = board
            .group_of(row, col)
            .expect("placed stone must form a group");
        if !board.has_liberties(&group) {
            board.clear_stone(point);
            return Err(MoveError::Suicide);
        }
    }

    Ok(captured)
}
