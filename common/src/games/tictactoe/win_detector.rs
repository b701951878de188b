use super::board::{Board, WIN_LINES};
use super::types::{Mark, Verdict};

/// First completed line in `WIN_LINES` order.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if !mark.is_empty() && mark == cells[b] && mark == cells[c] {
            Some((mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    check_win_with_line(board).map(|(_, line)| line)
}

pub fn evaluate(board: &Board) -> Verdict {
    if let Some(mark) = check_win(board) {
        return Verdict::Win(mark);
    }
    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
        let mut cells = [Mark::Empty; 9];
        for index in line {
            cells[index] = mark;
        }
        Board::from_array(cells)
    }

    #[test]
    fn test_every_line_wins_for_every_mark() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with_line(line, mark);
                assert_eq!(evaluate(&board), Verdict::Win(mark), "line {:?}", line);
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::parse("XOX XOO OXX").unwrap();
        assert_eq!(evaluate(&board), Verdict::Draw);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::empty()), Verdict::Ongoing);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        let board = Board::parse("XO. .X. O..").unwrap();
        assert_eq!(evaluate(&board), Verdict::Ongoing);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::parse("XXX OOX XOO").unwrap();
        assert_eq!(evaluate(&board), Verdict::Win(Mark::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::parse("XXO ... ...").unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_two_winners_reports_first_line_in_scan_order() {
        // Row 0 (O) is scanned before row 2 (X).
        let board = Board::parse("OOO ... XXX").unwrap();
        assert_eq!(evaluate(&board), Verdict::Win(Mark::O));

        // Column 0 (X) comes before column 2 (O).
        let board = Board::parse("X.O X.O X.O").unwrap();
        assert_eq!(evaluate(&board), Verdict::Win(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::parse("XOX .O. ...").unwrap();
        let before = board;
        let _ = evaluate(&board);
        assert_eq!(board, before);
    }
}
