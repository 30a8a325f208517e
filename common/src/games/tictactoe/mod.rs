mod board;
mod bot_controller;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{SearchResult, calculate_minimax_move, choose_move};
pub use session::{
    COLUMN_PROMPT, COMPUTER_MOVE_MESSAGE, DRAW_MESSAGE, GameOutput, INVALID_MOVE_MESSAGE,
    MoveInput, NOT_A_NUMBER_MESSAGE, OPPONENT_WIN_MESSAGE, PLAYER_WIN_MESSAGE, ROW_PROMPT,
    SessionError, TicTacToeSession, WELCOME_MESSAGE,
};
pub use types::{BOARD_SIZE, Mark, MarkSymbols, Outcome, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line};
