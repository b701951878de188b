use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_common::games::RandomSource;
use tictactoe_common::tictactoe::{
    TicTacToeGameState, TicTacToeSettings, Verdict, score_moves,
};
use tictactoe_common::{log, log_debug};

use crate::command::{Command, HELP_TEXT};
use crate::render::{describe_status, render_board, render_history, render_hints};

/// Terminal host for one player session: owns the game state and turns
/// typed commands into moves.
pub struct GameRunner<R, W, G> {
    state: TicTacToeGameState,
    settings: TicTacToeSettings,
    input: R,
    output: W,
    rng: G,
}

impl<R, W, G> GameRunner<R, W, G>
where
    R: BufRead,
    W: Write,
    G: RandomSource,
{
    pub fn new(settings: TicTacToeSettings, input: R, output: W, rng: G) -> Result<Self, String> {
        let state = TicTacToeGameState::from_settings(&settings)?;
        Ok(Self {
            state,
            settings,
            input,
            output,
            rng,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), String> {
        log!(
            "Starting {} game, difficulty {}, computer plays {}",
            self.settings.mode,
            self.settings.difficulty,
            self.settings.computer_mark
        );
        self.write_line("Tic-tac-toe. Type help for commands.")?;
        let mut needs_render = true;

        loop {
            if needs_render {
                self.show_position()?;
                needs_render = false;
            }

            if self.state.is_computer_turn() {
                self.play_computer_turn()?;
                needs_render = true;
                continue;
            }

            let Some(line) = self.read_line()? else {
                log_debug!("Input closed");
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    self.write_line(&message)?;
                    continue;
                }
            };

            match command {
                Command::Quit => {
                    self.write_line("Bye!")?;
                    return Ok(());
                }
                command => needs_render = self.handle(command)?,
            }
        }
    }

    /// Returns whether the position changed and must be shown again.
    fn handle(&mut self, command: Command) -> Result<bool, String> {
        match command {
            Command::Place(index) => {
                if self.state.verdict().is_terminal() {
                    self.write_line("The game is over. Type restart or jump <n>.")?;
                    return Ok(false);
                }
                if !self.state.board().is_valid_move(index) {
                    self.write_line(&format!("Cell {} is already taken", index + 1))?;
                    return Ok(false);
                }
                match self.state.place_mark(index) {
                    Ok(()) => Ok(true),
                    Err(message) => {
                        self.write_line(&message)?;
                        Ok(false)
                    }
                }
            }
            Command::Jump(move_number) => match self.state.jump_to(move_number) {
                Ok(()) => Ok(true),
                Err(message) => {
                    self.write_line(&message)?;
                    Ok(false)
                }
            },
            Command::History => {
                let history = render_history(&self.state);
                self.write_line(&history)?;
                Ok(false)
            }
            Command::Restart => {
                self.state.reset();
                log!("Game restarted");
                Ok(true)
            }
            Command::Mode(mode) => {
                self.settings.mode = mode;
                self.state.set_mode(mode);
                self.write_line(&format!("Mode set to {}", mode))?;
                Ok(true)
            }
            Command::Difficulty(difficulty) => {
                self.settings.difficulty = difficulty;
                self.write_line(&format!("Difficulty set to {}", difficulty))?;
                Ok(false)
            }
            Command::Hint => {
                if self.state.verdict() != Verdict::Ongoing {
                    self.write_line("The game is over, nothing to hint.")?;
                    return Ok(false);
                }
                let mark = self.state.next_mark();
                let hints = render_hints(mark, &score_moves(self.state.board(), mark));
                self.write_line(&hints)?;
                Ok(false)
            }
            Command::Help => {
                self.write_line(HELP_TEXT)?;
                Ok(false)
            }
            Command::Quit => Ok(false),
        }
    }

    fn play_computer_turn(&mut self) -> Result<(), String> {
        let mark = self.state.computer_mark();
        self.write_line(&format!("Computer ({}) is thinking...", mark))?;
        if self.settings.thinking_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.settings.thinking_delay_ms));
        }

        if let Some(index) = self
            .state
            .play_computer_move(self.settings.difficulty, &mut self.rng)?
        {
            self.write_line(&format!("Computer plays cell {}", index + 1))?;
        }
        Ok(())
    }

    fn show_position(&mut self) -> Result<(), String> {
        let board = render_board(self.state.board(), self.state.winning_line());
        let status = describe_status(&self.state);
        self.write_line("")?;
        self.write_line(&board)?;
        self.write_line(&status)?;
        if self.state.verdict().is_terminal() {
            log!("{}", status);
            self.write_line("Type restart to play again, jump <n> to revisit a move, or quit.")?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, String> {
        self.write("> ")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 { Ok(None) } else { Ok(Some(line)) }
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }

    fn write_line(&mut self, text: &str) -> Result<(), String> {
        self.write(&format!("{}\n", text))
    }
}
