use crate::games::RandomSource;
use crate::{log_debug, log_warn};
use super::board::{Board, empty_cell_indices};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark, Verdict};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub difficulty: Difficulty,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState, difficulty: Difficulty) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.computer_mark(),
            difficulty,
        }
    }
}

pub fn calculate_move<R>(input: &BotInput, rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    select_move(&input.board, input.bot_mark, input.difficulty, rng)
}

/// Picks the bot's next cell. Easy and Medium replace the search result with
/// a uniformly random empty cell with the difficulty's probability; Hard
/// never touches `rng`. `None` only when the board has no empty cell, or
/// when `bot_mark` is `Empty`.
pub fn select_move<R>(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    if board.is_full() || bot_mark.opponent().is_none() {
        return None;
    }

    let probability = difficulty.random_move_probability();
    if probability > 0.0 && rng.chance(probability) {
        if let Some(index) = random_move(board, rng) {
            log_debug!("{} bot plays random cell {} ({})", bot_mark, index, difficulty);
            return Some(index);
        }
        log_warn!("Random source picked no empty cell, falling back to search");
    }

    best_move(board, bot_mark)
}

/// Uniform choice among the empty cells. `None` on a full board, or when
/// `rng` answers outside `0..len`.
pub fn random_move<R>(board: &Board, rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let available_moves = empty_cell_indices(board);
    if available_moves.is_empty() {
        return None;
    }
    available_moves
        .get(rng.pick_index(available_moves.len()))
        .copied()
}

/// Full-depth minimax choice for `bot_mark`. Ties keep the lowest index.
pub fn best_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (index, score) in score_moves(board, bot_mark) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    if let Some((index, score)) = best {
        log_debug!("{} bot search picked cell {} with score {}", bot_mark, index, score);
    }
    best.map(|(index, _)| index)
}

/// Minimax score of every empty cell for `bot_mark`, ascending by index.
/// A score of `10 - d` is a forced win `d` plies after the move, `d - 10` a
/// forced loss, `0` a draw under best play.
pub fn score_moves(board: &Board, bot_mark: Mark) -> Vec<(usize, i32)> {
    let Some(opponent_mark) = bot_mark.opponent() else {
        return Vec::new();
    };

    let mut board = *board;
    let mut scores = Vec::new();

    for index in empty_cell_indices(&board) {
        board.set(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board.set(index, Mark::Empty);

        scores.push((index, score));
    }

    scores
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    match evaluate(board) {
        Verdict::Win(winner) if winner == bot_mark => return WIN_SCORE - depth,
        Verdict::Win(_) => return depth - WIN_SCORE,
        Verdict::Draw => return 0,
        Verdict::Ongoing => {}
    }

    let moves = empty_cell_indices(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
