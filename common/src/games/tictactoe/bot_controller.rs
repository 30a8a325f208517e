use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Position,
    pub score: i32,
    /// Positions visited while scoring every candidate.
    pub nodes: u64,
}

/// A mark placed for the duration of one search branch. The cell is emptied
/// again when the guard goes out of scope, whichever way the branch exits.
struct TentativeMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> TentativeMove<'a> {
    fn place(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        board.apply_move(position.row, position.col, mark);
        Self { board, position }
    }
}

impl Deref for TentativeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TentativeMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TentativeMove<'_> {
    fn drop(&mut self) {
        self.board.revert_move(self.position.row, self.position.col);
    }
}

pub fn choose_move(board: &mut Board) -> Option<Position> {
    calculate_minimax_move(board).map(|result| result.position)
}

/// Picks the opponent's move by full-depth minimax. Returns `None` only when
/// the board has no empty cell. The board is explored in place and handed
/// back unchanged.
pub fn calculate_minimax_move(board: &mut Board) -> Option<SearchResult> {
    let mut nodes = 0;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.get_available_moves() {
        let score = {
            let mut tentative = TentativeMove::place(board, position, Mark::Opponent);
            minimax(&mut tentative, false, &mut nodes)
        };

        // Strict comparison keeps the earliest row-major cell among equals.
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move.map(|position| SearchResult {
        position,
        score: best_score,
        nodes,
    })
}

fn minimax(board: &mut Board, is_maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if board.is_game_over() {
        return board.evaluate();
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.get_available_moves() {
            let mut tentative = TentativeMove::place(board, position, Mark::Opponent);
            let eval = minimax(&mut tentative, false, nodes);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in board.get_available_moves() {
            let mut tentative = TentativeMove::place(board, position, Mark::Player);
            let eval = minimax(&mut tentative, true, nodes);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Outcome;

    const E: Mark = Mark::Empty;
    const P: Mark = Mark::Player;
    const O: Mark = Mark::Opponent;

    /// Plays every legal player move from `board`, answering each with the
    /// engine, and records every final outcome.
    fn play_out_all_lines(board: &mut Board, outcomes: &mut Vec<Outcome>) {
        if let Some(outcome) = board.outcome() {
            outcomes.push(outcome);
            return;
        }

        if board.is_player_turn() {
            for p in board.get_available_moves() {
                board.apply_move(p.row, p.col, P);
                play_out_all_lines(board, outcomes);
                board.revert_move(p.row, p.col);
            }
        } else {
            let before = board.clone();
            let p = choose_move(board).unwrap();
            assert_eq!(*board, before);
            board.apply_move(p.row, p.col, O);
            play_out_all_lines(board, outcomes);
            board.revert_move(p.row, p.col);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::from_rows([[P, O, P], [P, O, O], [O, P, P]]);
        assert_eq!(calculate_minimax_move(&mut board), None);
        assert_eq!(choose_move(&mut board), None);
    }

    #[test]
    fn test_blocks_immediate_player_win() {
        let mut board = Board::from_rows([[P, P, E], [E, O, E], [E, E, E]]);
        assert_eq!(choose_move(&mut board), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::from_rows([[O, O, E], [P, P, E], [P, E, E]]);
        let result = calculate_minimax_move(&mut board).unwrap();
        assert_eq!(result.position, Position::new(0, 2));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_empty_board_tie_breaks_to_first_cell() {
        let mut board = Board::new();
        let result = calculate_minimax_move(&mut board).unwrap();
        assert_eq!(result.position, Position::new(0, 0));
        assert_eq!(result.score, 0);
        assert!(result.nodes > 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_equal_wins_keep_smallest_cell() {
        // Both (0, 2) and (2, 0) complete an opponent line.
        let mut board = Board::from_rows([[O, O, E], [O, P, P], [E, P, P]]);
        assert_eq!(choose_move(&mut board), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = Board::from_rows([[P, E, E], [E, E, E], [E, E, E]]);
        let before = board.clone();
        let chosen = choose_move(&mut board).unwrap();
        assert_eq!(board, before);
        assert!(board.is_valid_move(chosen.row, chosen.col));
    }

    #[test]
    fn test_guard_reverts_on_drop() {
        let mut board = Board::new();
        {
            let tentative = TentativeMove::place(&mut board, Position::new(1, 2), O);
            assert_eq!(tentative.cell(1, 2), Some(O));
        }
        assert_eq!(board.cell(1, 2), Some(E));
    }

    #[test]
    fn test_lost_position_scores_minus_one() {
        // Player threatens two lines at once; no reply saves the opponent.
        let mut board = Board::from_rows([[P, E, P], [E, O, E], [P, E, O]]);
        let result = calculate_minimax_move(&mut board).unwrap();
        assert_eq!(result.score, -1);
        assert!(board.is_valid_move(result.position.row, result.position.col));
    }

    #[test]
    fn test_engine_never_loses() {
        let mut outcomes = Vec::new();
        play_out_all_lines(&mut Board::new(), &mut outcomes);
        assert!(!outcomes.is_empty());
        assert!(outcomes.iter().all(|o| *o != Outcome::PlayerWin));
        assert!(outcomes.contains(&Outcome::Draw));
        assert!(outcomes.contains(&Outcome::OpponentWin));
    }
}
