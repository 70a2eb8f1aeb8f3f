//! Connectivity and liberty queries over a [`Board`].
//!
//! Groups are never stored; they are recomputed by flood fill whenever a
//! capture or suicide check needs them.

use crate::Point;
use crate::board::Board;
use crate::error::BoardError;
use crate::stone::Stone;

impl Board {
    /// The maximal 4-connected group of same-colored stones containing `(row, col)`,
    /// in discovery order starting with the queried point.
    pub fn group_of(&self, row: i32, col: i32) -> Result<Vec<Point>, BoardError> {
        let stone = self.cell(row, col)?.stone().ok_or(BoardError::EmptyCell)?;
        let mut visited = vec![false; self.cells().len()];
        Ok(self.flood((row, col), stone, &mut visited))
    }

    /// True iff any member of `group` touches an empty point.
    pub fn has_liberties(&self, group: &[Point]) -> bool {
        group.iter().any(|&p| {
            self.neighbors(p)
                .iter()
                .any(|&n| self.stone_at(n).is_none())
        })
    }

    /// Distinct liberties of `group`, first-seen order.
    pub fn liberties(&self, group: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.cells().len()];
        let mut libs = Vec::new();
        for &p in group {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Remove every opposing group left without liberties next to the stone at `(row, col)`.
    ///
    /// Neighbor groups are visited in up, down, left, right order; a group
    /// reached from two directions is only considered once. Returns the
    /// removed points, or nothing if `(row, col)` holds no stone.
    pub fn resolve_captures(&mut self, row: i32, col: i32) -> Vec<Point> {
        let Some(stone) = self.stone_at((row, col)) else {
            return Vec::new();
        };
        let opponent = stone.opp();

        let mut visited = vec![false; self.cells().len()];
        let mut captured = Vec::new();

        for n in self.neighbors((row, col)) {
            if self.stone_at(n) != Some(opponent) || visited[self.idx(n)] {
                continue;
            }
            let group = self.flood(n, opponent, &mut visited);
            if !self.has_liberties(&group) {
                captured.extend(group);
            }
        }

        for &p in &captured {
            self.clear_stone(p);
        }

        captured
    }

    /// Explicit-stack flood fill sharing a visited bitset with the caller.
    fn flood(&self, start: Point, stone: Stone, visited: &mut [bool]) -> Vec<Point> {
        visited[self.idx(start)] = true;
        let mut result = vec![start];
        let mut stack = vec![start];

        while let Some(p) = stack.pop() {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && self.stone_at(n) == Some(stone) {
                    visited[ni] = true;
                    result.push(n);
                    stack.push(n);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn as_set(points: &[Point]) -> HashSet<Point> {
        points.iter().copied().collect()
    }

    #[test]
    fn group_of_single_stone() {
        let board = Board::from_layout(&["+++", "+B+", "+++"]);
        assert_eq!(board.group_of(1, 1), Ok(vec![(1, 1)]));
    }

    #[test]
    fn group_ignores_diagonals() {
        let board = Board::from_layout(&["B++", "+B+", "++B"]);
        assert_eq!(board.group_of(1, 1).unwrap().len(), 1);
    }

    #[test]
    fn group_of_connected_chain() {
        let board = Board::from_layout(&["BB+W", "+B+W", "+BBW", "W+++"]);
        let group = board.group_of(0, 0).unwrap();
        assert_eq!(group[0], (0, 0));
        assert_eq!(
            as_set(&group),
            as_set(&[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn group_of_empty_cell_fails() {
        let board = Board::new(3);
        assert_eq!(board.group_of(1, 1), Err(BoardError::EmptyCell));
        assert_eq!(board.group_of(3, 1), Err(BoardError::OutOfRange));
    }

    #[test]
    fn group_spanning_whole_board() {
        let board = Board::from_layout(&["BBBB", "BBBB", "BBBB", "BBBB"]);
        let group = board.group_of(2, 3).unwrap();
        assert_eq!(as_set(&group).len(), 16);
        assert_eq!(group.len(), 16);
        assert!(!board.has_liberties(&group));
    }

    #[test]
    fn empty_group_has_no_liberties() {
        let board = Board::new(3);
        assert!(!board.has_liberties(&[]));
        assert!(board.liberties(&[]).is_empty());
    }

    #[test]
    fn liberties_are_distinct() {
        let board = Board::from_layout(&["+++", "BB+", "+++"]);
        let group = board.group_of(1, 0).unwrap();
        let libs = board.liberties(&group);
        assert_eq!(as_set(&libs), as_set(&[(0, 0), (2, 0), (0, 1), (2, 1), (1, 2)]));
        assert_eq!(libs.len(), 5);
    }

    #[test]
    fn corner_stone_liberties() {
        let board = Board::from_layout(&["BW+", "W++", "+++"]);
        let group = board.group_of(0, 0).unwrap();
        assert!(!board.has_liberties(&group));
    }

    #[test]
    fn resolve_captures_removes_single_stone() {
        let mut board = Board::from_layout(&["+B++", "BWB+", "+B++", "++++"]);
        let captured = board.resolve_captures(0, 1);
        assert_eq!(captured, vec![(1, 1)]);
        assert_eq!(board.stone_at((1, 1)), None);
    }

    #[test]
    fn resolve_captures_leaves_groups_with_liberties() {
        let mut board = Board::from_layout(&["+B++", "BW++", "+B++", "++++"]);
        let before = board.clone();
        assert!(board.resolve_captures(0, 1).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn resolve_captures_counts_shared_group_once() {
        // The white pair touches the new black stone at (1, 2) from above and the left.
        let mut board = Board::from_layout(&["BWWB", "BW+B", "+BB+", "++++"]);
        board.set_stone((1, 2), Stone::Black);
        let captured = board.resolve_captures(1, 2);
        assert_eq!(as_set(&captured), as_set(&[(0, 1), (0, 2), (1, 1)]));
        assert_eq!(captured.len(), 3);
    }

    #[test]
    fn resolve_captures_multiple_groups() {
        let mut board = Board::from_layout(&["+WB+", "WBW+", "BW++", "++++"]);
        // Black at (0,0) takes the white stones at (0,1) and (1,0).
        board.set_stone((0, 0), Stone::Black);
        let captured = board.resolve_captures(0, 0);
        assert_eq!(captured, vec![(1, 0), (0, 1)]);
        assert_eq!(board.stone_at((1, 0)), None);
        assert_eq!(board.stone_at((0, 1)), None);
        assert_eq!(board.stone_at((1, 2)), Some(Stone::White));
    }

    #[test]
    fn resolve_captures_on_empty_point_is_noop() {
        let mut board = Board::from_layout(&["+W+", "W+W", "+W+"]);
        assert!(board.resolve_captures(1, 1).is_empty());
        assert_eq!(board.stone_count(Stone::White), 4);
    }

    #[test]
    fn resolve_captures_is_deterministic() {
        let layout = ["+B++", "BWB+", "BW+B", "+BB+"];
        let mut a = Board::from_layout(&layout);
        let mut b = Board::from_layout(&layout);
        a.set_stone((2, 2), Stone::Black);
        b.set_stone((2, 2), Stone::Black);
        let ca = a.resolve_captures(2, 2);
        assert_eq!(ca, b.resolve_captures(2, 2));
        assert_eq!(as_set(&ca), as_set(&[(1, 1), (2, 1)]));
    }
}
