use crate::games::RandomSource;
use crate::log_debug;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::settings::TicTacToeSettings;
use super::types::{Difficulty, GameMode, Mark, Verdict};
use super::win_detector::{evaluate, winning_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescription {
    pub move_number: usize,
    pub label: String,
    pub is_current: bool,
}

/// One game with its full move history. X always moves first, so the side
/// to move follows from the parity of the displayed move.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    history: Vec<Board>,
    current_move: usize,
    mode: GameMode,
    computer_mark: Mark,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, computer_mark: Mark) -> Result<Self, String> {
        if computer_mark.is_empty() {
            return Err("Computer mark must be X or O".to_string());
        }
        Ok(Self {
            history: vec![Board::empty()],
            current_move: 0,
            mode,
            computer_mark,
        })
    }

    pub fn from_settings(settings: &TicTacToeSettings) -> Result<Self, String> {
        Self::new(settings.mode, settings.computer_mark)
    }

    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn next_mark(&self) -> Mark {
        if self.current_move % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn verdict(&self) -> Verdict {
        evaluate(self.board())
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(self.board())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.next_mark() == self.computer_mark
            && self.verdict() == Verdict::Ongoing
    }

    /// Human move for the side to move.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.is_computer_turn() {
            return Err("Not your turn".to_string());
        }
        self.apply_mark(index)
    }

    /// Lets the computer choose and play. `Ok(None)` when the board has no
    /// empty cell left.
    pub fn play_computer_move<R>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Option<usize>, String>
    where
        R: RandomSource + ?Sized,
    {
        if self.mode != GameMode::VsComputer {
            return Err("No computer opponent in this game".to_string());
        }
        if self.verdict().is_terminal() {
            return Err("Game is already over".to_string());
        }
        if self.next_mark() != self.computer_mark {
            return Err("Not the computer's turn".to_string());
        }

        let input = BotInput::from_game_state(self, difficulty);
        let Some(index) = calculate_move(&input, rng) else {
            return Ok(None);
        };
        self.apply_mark(index)?;
        Ok(Some(index))
    }

    fn apply_mark(&mut self, index: usize) -> Result<(), String> {
        if self.verdict().is_terminal() {
            return Err("Game is already over".to_string());
        }

        let mark = self.next_mark();
        let next_board = self.board().with_mark(index, mark)?;

        self.history.truncate(self.current_move + 1);
        self.history.push(next_board);
        self.current_move += 1;

        log_debug!("Move #{}: {} on cell {}", self.current_move, mark, index);
        Ok(())
    }

    /// Moves the cursor to a recorded move. Later moves stay available until
    /// a new mark is placed.
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), String> {
        if move_number >= self.history.len() {
            return Err(format!(
                "Move #{} does not exist, last move is #{}",
                move_number,
                self.history.len() - 1
            ));
        }
        self.current_move = move_number;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::empty());
        self.current_move = 0;
    }

    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        (0..self.history.len())
            .map(|move_number| MoveDescription {
                move_number,
                label: if move_number == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", move_number)
                },
                is_current: move_number == self.current_move,
            })
            .collect()
    }
}
