use tictactoe_common::tictactoe::{
    BOARD_SIZE, Board, GameMode, Mark, TicTacToeGameState, Verdict,
};

/// Empty cells show the number the player types to take them; cells on the
/// winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<[usize; 3]>) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit((index + 1) as u32, 10).unwrap_or('?'),
                        mark => mark.symbol(),
                    };
                    if winning_line.is_some_and(|line| line.contains(&index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn describe_status(state: &TicTacToeGameState) -> String {
    match state.verdict() {
        Verdict::Win(mark) => match state.mode() {
            GameMode::VsComputer if mark == state.computer_mark() => {
                format!("Winner: {} (computer)", mark)
            }
            GameMode::VsComputer => format!("Winner: {} (you)", mark),
            GameMode::VsHuman => format!("Winner: {}", mark),
        },
        Verdict::Draw => "It's a Draw!".to_string(),
        Verdict::Ongoing => format!("Next player: {}", state.next_mark()),
    }
}

pub fn render_history(state: &TicTacToeGameState) -> String {
    state
        .move_descriptions()
        .into_iter()
        .map(|description| {
            let marker = if description.is_current { ">" } else { " " };
            format!("{} {}. {}", marker, description.move_number, description.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_hints(mark: Mark, scores: &[(usize, i32)]) -> String {
    let mut lines = vec![format!("Search scores for {}:", mark)];
    for &(index, score) in scores {
        let outlook = match score {
            s if s > 0 => "win",
            0 => "draw",
            _ => "loss",
        };
        lines.push(format!("  cell {}: {:>3} ({})", index + 1, score, outlook));
    }
    lines.join("\n")
}
