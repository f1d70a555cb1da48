//! Two-player tic-tac-toe on a 3x3 board
//!
//! X always moves first. A decided board accepts no further moves until
//! reset.

use std::fmt;

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// Board outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InPlay,
    Won(Mark),
    Draw,
}

/// The eight winning cell triples
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe game state
#[derive(Debug, Clone)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
    turn: Mark,
    outcome: Outcome,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; 9],
            turn: Mark::X,
            outcome: Outcome::InPlay,
        }
    }

    /// Place the current player's mark in a cell (0-8, row major)
    ///
    /// No-op when the game is decided, the index is out of range, or the
    /// cell is occupied. The turn flips only while the game stays undecided.
    pub fn play(&mut self, cell: usize) {
        if self.outcome != Outcome::InPlay || cell >= 9 || self.cells[cell].is_some() {
            return;
        }

        self.cells[cell] = Some(self.turn);
        self.outcome = self.check_outcome();

        if self.outcome == Outcome::InPlay {
            self.turn = self.turn.other();
        }
    }

    /// Clear the board; X moves first again
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The mark occupying a cell, if any
    ///
    /// # Panics
    /// Panics if `cell >= 9`
    #[inline]
    #[must_use]
    pub const fn cell(&self, cell: usize) -> Option<Mark> {
        self.cells[cell]
    }

    /// Whose turn it is
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Mark {
        self.turn
    }

    /// Current outcome
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn check_outcome(&self) -> Outcome {
        for [a, b, c] in WIN_LINES {
            if let Some(mark) = self.cells[a]
                && self.cells[b] == Some(mark)
                && self.cells[c] == Some(mark)
            {
                return Outcome::Won(mark);
            }
        }

        if self.cells.iter().all(Option::is_some) {
            Outcome::Draw
        } else {
            Outcome::InPlay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_moves_first_and_turns_alternate() {
        let mut game = TicTacToe::new();
        assert_eq!(game.turn(), Mark::X);

        game.play(0);
        assert_eq!(game.cell(0), Some(Mark::X));
        assert_eq!(game.turn(), Mark::O);

        game.play(4);
        assert_eq!(game.cell(4), Some(Mark::O));
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn occupied_cell_is_a_no_op() {
        let mut game = TicTacToe::new();
        game.play(0);
        game.play(0); // O tries the same cell

        assert_eq!(game.cell(0), Some(Mark::X));
        assert_eq!(game.turn(), Mark::O); // still O's move
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut game = TicTacToe::new();
        game.play(9);
        game.play(100);
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.outcome(), Outcome::InPlay);
    }

    #[test]
    fn row_win() {
        let mut game = TicTacToe::new();
        // X: 0 1 2, O: 3 4
        for cell in [0, 3, 1, 4, 2] {
            game.play(cell);
        }
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn column_and_diagonal_wins() {
        let mut column = TicTacToe::new();
        // X: 1 4 8, O: 0 3 6
        for cell in [1, 0, 4, 3, 8, 6] {
            column.play(cell);
        }
        assert_eq!(column.outcome(), Outcome::Won(Mark::O));

        let mut diagonal = TicTacToe::new();
        // X: 0 4 8, O: 1 2
        for cell in [0, 1, 4, 2, 8] {
            diagonal.play(cell);
        }
        assert_eq!(diagonal.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn full_board_without_win_is_draw() {
        let mut game = TicTacToe::new();
        // X X O / O O X / X O X with no three in a row
        for cell in [0, 2, 5, 4, 6, 7, 8, 3, 1] {
            game.play(cell);
        }
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn decided_board_accepts_no_moves() {
        let mut game = TicTacToe::new();
        for cell in [0, 3, 1, 4, 2] {
            game.play(cell);
        }
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));

        game.play(5);
        assert_eq!(game.cell(5), None);
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn reset_clears_board() {
        let mut game = TicTacToe::new();
        for cell in [0, 3, 1, 4, 2] {
            game.play(cell);
        }
        game.reset();

        assert_eq!(game.outcome(), Outcome::InPlay);
        assert_eq!(game.turn(), Mark::X);
        assert!((0..9).all(|i| game.cell(i).is_none()));
    }
}
