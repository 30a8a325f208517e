use std::fmt;
use std::io;

use crate::log;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::types::{Mark, Outcome};

pub const WELCOME_MESSAGE: &str = "Welcome to Tic Tac Toe!";
pub const ROW_PROMPT: &str = "Your turn. Enter row (0-2): ";
pub const COLUMN_PROMPT: &str = "Enter column (0-2): ";
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try again.";
pub const NOT_A_NUMBER_MESSAGE: &str = "Please enter a whole number.";
pub const COMPUTER_MOVE_MESSAGE: &str = "AI's turn. AI placed its move.";
pub const PLAYER_WIN_MESSAGE: &str = "Congratulations! You won!";
pub const OPPONENT_WIN_MESSAGE: &str = "You lost! Better luck next time!";
pub const DRAW_MESSAGE: &str = "It's a draw!";

/// Source of the human player's typed answers.
pub trait MoveInput {
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, SessionError>;
}

pub trait GameOutput {
    fn show_message(&mut self, message: &str) -> io::Result<()>;
    fn show_board(&mut self, board: &Board) -> io::Result<()>;
}

#[derive(Debug)]
pub enum SessionError {
    IoError(io::Error),
    InputClosed,
    NoMoveAvailable,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::IoError(e) => write!(f, "IO error: {}", e),
            SessionError::InputClosed => write!(f, "Input closed before the game finished"),
            SessionError::NoMoveAvailable => {
                write!(f, "Computer has no move on a board that is still in play")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::IoError(e)
    }
}

pub struct TicTacToeSession<I, O> {
    board: Board,
    input: I,
    output: O,
}

impl<I: MoveInput, O: GameOutput> TicTacToeSession<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self::with_board(Board::new(), input, output)
    }

    /// Starts from an existing position instead of an empty board. The board
    /// must satisfy the alternation invariant.
    pub fn with_board(board: Board, input: I, output: O) -> Self {
        Self { board, input, output }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Plays until the board is terminal and returns the result.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        self.output.show_message(WELCOME_MESSAGE)?;
        log!("Session started");

        let outcome = loop {
            if let Some(outcome) = self.board.outcome() {
                break outcome;
            }

            self.output.show_board(&self.board)?;

            if self.board.is_player_turn() {
                self.play_player_turn()?;
            } else {
                self.play_computer_turn()?;
            }
        };

        self.output.show_board(&self.board)?;
        self.declare_result(outcome)?;

        Ok(outcome)
    }

    fn play_player_turn(&mut self) -> Result<(), SessionError> {
        loop {
            let row = self.read_coordinate(ROW_PROMPT)?;
            let col = self.read_coordinate(COLUMN_PROMPT)?;

            match (usize::try_from(row), usize::try_from(col)) {
                (Ok(row), Ok(col)) if self.board.is_valid_move(row, col) => {
                    self.board.apply_move(row, col, Mark::Player);
                    log!("Player placed mark at ({}, {})", row, col);
                    return Ok(());
                }
                _ => {
                    log!("Rejected player move ({}, {})", row, col);
                    self.output.show_message(INVALID_MOVE_MESSAGE)?;
                }
            }
        }
    }

    fn read_coordinate(&mut self, prompt: &str) -> Result<i64, SessionError> {
        loop {
            self.output.show_message(prompt)?;

            let Some(line) = self.input.read_line()? else {
                return Err(SessionError::InputClosed);
            };

            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log!("Could not parse {:?} as a coordinate: {}", line.trim(), e);
                    self.output.show_message(NOT_A_NUMBER_MESSAGE)?;
                }
            }
        }
    }

    fn play_computer_turn(&mut self) -> Result<(), SessionError> {
        let result =
            calculate_minimax_move(&mut self.board).ok_or(SessionError::NoMoveAvailable)?;
        let position = result.position;

        self.board.apply_move(position.row, position.col, Mark::Opponent);
        log!(
            "Computer placed mark at {} (score {}, {} positions searched)",
            position,
            result.score,
            result.nodes
        );

        self.output.show_message(COMPUTER_MOVE_MESSAGE)?;
        Ok(())
    }

    fn declare_result(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        let message = match outcome {
            Outcome::PlayerWin => PLAYER_WIN_MESSAGE,
            Outcome::OpponentWin => OPPONENT_WIN_MESSAGE,
            Outcome::Draw => DRAW_MESSAGE,
        };

        let line = self
            .board
            .winning_line(Mark::Player)
            .or_else(|| self.board.winning_line(Mark::Opponent));
        match line {
            Some(line) => log!(
                "Game over: {:?}, line {} to {}",
                outcome,
                line.start,
                line.end
            ),
            None => log!("Game over: {:?}", outcome),
        }

        self.output.show_message(message)?;
        Ok(())
    }
}
