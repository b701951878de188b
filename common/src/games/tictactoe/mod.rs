mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, WIN_LINES, empty_cell_indices};
pub use bot_controller::{
    BotInput, best_move, calculate_move, random_move, score_moves, select_move,
};
pub use game_state::{MoveDescription, TicTacToeGameState};
pub use settings::{MAX_THINKING_DELAY_MS, TicTacToeSettings};
pub use types::{Difficulty, GameMode, Mark, Verdict};
pub use win_detector::{check_win, check_win_with_line, evaluate, winning_line};
