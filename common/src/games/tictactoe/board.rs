use std::fmt;

use super::types::{BOARD_SIZE, Mark, MarkSymbols, Outcome, Position, WinningLine};
use super::win_detector::{Cells, check_win, check_win_with_line};

const ROW_SEPARATOR: &str = "---------";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw rows. The alternation invariant is not checked,
    /// so this can describe positions that never occur in play.
    pub fn from_rows(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Mark::Empty)
    }

    /// Callers must check `is_valid_move` first.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert!(self.is_valid_move(row, col), "cell ({row}, {col}) is not free");
        self.cells[row][col] = mark;
    }

    pub fn revert_move(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }

    pub fn get_available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    fn count_marks(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    /// The player opens the game, so it is their turn whenever an even number
    /// of marks has been placed.
    pub fn is_player_turn(&self) -> bool {
        self.count_marks() % 2 == 0
    }

    pub fn is_board_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn check_win(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn winning_line(&self, mark: Mark) -> Option<WinningLine> {
        check_win_with_line(&self.cells, mark)
    }

    pub fn is_game_over(&self) -> bool {
        self.check_win(Mark::Player) || self.check_win(Mark::Opponent) || self.is_board_full()
    }

    /// -1 when the player has a line, +1 when the opponent has one, 0
    /// otherwise. Only meaningful once `is_game_over` holds.
    pub fn evaluate(&self) -> i32 {
        if self.check_win(Mark::Player) {
            -1
        } else if self.check_win(Mark::Opponent) {
            1
        } else {
            0
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.check_win(Mark::Player) {
            Some(Outcome::PlayerWin)
        } else if self.check_win(Mark::Opponent) {
            Some(Outcome::OpponentWin)
        } else if self.is_board_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    pub fn render(&self, symbols: &MarkSymbols) -> String {
        let mut out = String::with_capacity((ROW_SEPARATOR.len() + 1) * (BOARD_SIZE + 1) * 2);
        out.push_str(ROW_SEPARATOR);
        out.push('\n');
        for row in &self.cells {
            for &cell in row {
                out.push_str(&format!("| {} ", symbols.symbol(cell)));
            }
            out.push_str("|\n");
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&MarkSymbols::default()))
    }
}
