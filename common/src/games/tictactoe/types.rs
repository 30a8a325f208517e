use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Opponent,
}

/// Characters used to draw each side's marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkSymbols {
    pub player: char,
    pub opponent: char,
}

impl MarkSymbols {
    pub fn new(player: char, opponent: char) -> Self {
        Self { player, opponent }
    }

    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => ' ',
            Mark::Player => self.player,
            Mark::Opponent => self.opponent,
        }
    }
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

/// Cell coordinates. Ordering is row-major, which is also the order the
/// search engine enumerates candidate moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl Outcome {
    /// Payoff from the opponent's (maximizing) point of view.
    pub fn score(&self) -> i32 {
        match self {
            Outcome::PlayerWin => -1,
            Outcome::OpponentWin => 1,
            Outcome::Draw => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}
