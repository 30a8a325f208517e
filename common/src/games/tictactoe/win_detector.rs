use super::types::{BOARD_SIZE, Mark, Position, WinningLine};

pub type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

pub fn check_win(cells: &Cells, mark: Mark) -> bool {
    check_win_with_line(cells, mark).is_some()
}

pub fn check_win_with_line(cells: &Cells, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| line.iter().all(|p| cells[p.row][p.col] == mark))
        .map(|line| WinningLine::new(mark, line[0], line[BOARD_SIZE - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const P: Mark = Mark::Player;
    const O: Mark = Mark::Opponent;

    #[test]
    fn test_empty_board_has_no_winner() {
        let cells = [[E; 3]; 3];
        assert!(!check_win(&cells, P));
        assert!(!check_win(&cells, O));
        assert!(!check_win(&cells, E));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut cells = [[E; 3]; 3];
            for p in line {
                cells[p.row][p.col] = O;
            }
            let found = check_win_with_line(&cells, O).unwrap();
            assert_eq!(found.start, line[0]);
            assert_eq!(found.end, line[2]);
            assert!(!check_win(&cells, P));
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let cells = [[E, E, P], [E, P, E], [P, E, E]];
        let line = check_win_with_line(&cells, P).unwrap();
        assert_eq!(line.mark, P);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let cells = [[P, P, O], [O, O, P], [P, O, P]];
        assert!(!check_win(&cells, P));
        assert!(!check_win(&cells, O));
    }

    #[test]
    fn test_result_does_not_depend_on_line_order() {
        // Two completed lines for the same mark; detection reports the first one
        // but the boolean answer is the same whichever line is examined.
        let cells = [[P, P, P], [O, O, P], [O, O, P]];
        assert!(check_win(&cells, P));
        let line = check_win_with_line(&cells, P).unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        let reversed_hit = LINES
            .iter()
            .rev()
            .any(|line| line.iter().all(|p| cells[p.row][p.col] == P));
        assert!(reversed_hit);
    }
}
