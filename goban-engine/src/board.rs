use std::fmt;

use arrayvec::ArrayVec;

use crate::Point;
use crate::error::BoardError;
use crate::stone::{Cell, Stone};

pub const DEFAULT_SIZE: u8 = 19;

/// Square grid of intersections stored as a flat row-major array.
///
/// Cloning a `Board` yields a fully independent copy, which is what the
/// undo history relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<i8>,
    size: u8,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_SIZE)
    }
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: u8) -> Self {
        Board {
            cells: vec![0i8; size as usize * size as usize],
            size,
        }
    }

    /// Build a board from ASCII rows. 'B' = Black, 'W' = White, anything else = Empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let size = layout.len();
        assert!(
            layout.iter().all(|row| row.chars().count() == size),
            "layout must be square"
        );
        assert!(size <= u8::MAX as usize, "layout too large");

        let cells = layout
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'B' => Stone::Black.to_int(),
                'W' => Stone::White.to_int(),
                _ => 0,
            })
            .collect();

        Board {
            cells,
            size: size as u8,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Raw cell values: 1 = Black, -1 = White, 0 = Empty.
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let size = i32::from(self.size);
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfRange);
        }
        Ok(Cell::from_int(self.cells[self.idx((row, col))]))
    }

    pub fn stone_at(&self, (row, col): Point) -> Option<Stone> {
        self.cell(row, col).ok().and_then(Cell::stone)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == stone.to_int()).count()
    }

    /// Every on-board point, row-major.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = i32::from(self.size);
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// On-board orthogonal neighbors in up, down, left, right order.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (r, c) = (row + dr, col + dc);
            if self.in_bounds(r, c) {
                result.push((r, c));
            }
        }
        result
    }

    // -- Mutation --

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.in_bounds(point.0, point.1) {
            let i = self.idx(point);
            self.cells[i] = stone.to_int();
        }
    }

    pub(crate) fn clear_stone(&mut self, point: Point) {
        if self.in_bounds(point.0, point.1) {
            let i = self.idx(point);
            self.cells[i] = 0;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(0);
    }

    // -- Internal helpers --

    /// Flat index of an on-board point. Callers check bounds first.
    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            let line: String = row
                .iter()
                .map(|&v| Stone::from_int(v).map_or('.', Stone::glyph))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
