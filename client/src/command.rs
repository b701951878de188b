use std::str::FromStr;

use tictactoe_common::tictactoe::{CELL_COUNT, Difficulty, GameMode};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index; the player types 1-9.
    Place(usize),
    Jump(usize),
    History,
    Restart,
    Mode(GameMode),
    Difficulty(Difficulty),
    Hint,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                    place your mark (cells are numbered row by row)
  jump <n>               go back to move n (0 is the game start)
  history                list recorded moves
  restart                start a new game
  mode <vs-computer|vs-human>
  difficulty <easy|medium|hard>
  hint                   show how the search rates each free cell
  help                   show this text
  quit                   leave the game";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command, type help for the list of commands".to_string());
        };
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments for '{}'", head));
        }

        let command = match (head.to_ascii_lowercase().as_str(), argument) {
            (cell, None) if cell.chars().all(|c| c.is_ascii_digit()) => {
                Command::Place(parse_cell(cell)?)
            }
            ("jump" | "j", Some(value)) => Command::Jump(
                value
                    .parse()
                    .map_err(|_| format!("'{}' is not a move number", value))?,
            ),
            ("history" | "h", None) => Command::History,
            ("restart" | "r", None) => Command::Restart,
            ("mode", Some(value)) => Command::Mode(value.parse()?),
            ("difficulty" | "d", Some(value)) => Command::Difficulty(value.parse()?),
            ("hint", None) => Command::Hint,
            ("help" | "?", None) => Command::Help,
            ("quit" | "q" | "exit", None) => Command::Quit,
            ("jump" | "j" | "mode" | "difficulty" | "d", None) => {
                return Err(format!("'{}' needs an argument", head));
            }
            _ => {
                return Err(format!(
                    "Unknown command '{}', type help for the list of commands",
                    line.trim()
                ));
            }
        };
        Ok(command)
    }
}

fn parse_cell(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(number - 1),
        _ => Err(format!("Cell must be between 1 and {}", CELL_COUNT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!("1".parse(), Ok(Command::Place(0)));
        assert_eq!(" 9 ".parse(), Ok(Command::Place(8)));
        assert!("0".parse::<Command>().is_err());
        assert!("10".parse::<Command>().is_err());
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!("jump 3".parse(), Ok(Command::Jump(3)));
        assert_eq!("J 0".parse(), Ok(Command::Jump(0)));
        assert_eq!("mode vs-human".parse(), Ok(Command::Mode(GameMode::VsHuman)));
        assert_eq!("difficulty Easy".parse(), Ok(Command::Difficulty(Difficulty::Easy)));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!("history".parse(), Ok(Command::History));
        assert_eq!("restart".parse(), Ok(Command::Restart));
        assert_eq!("hint".parse(), Ok(Command::Hint));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("QUIT".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_errors() {
        assert!("".parse::<Command>().is_err());
        assert!("jump".parse::<Command>().unwrap_err().contains("needs an argument"));
        assert!("jump x".parse::<Command>().is_err());
        assert!("mode online".parse::<Command>().is_err());
        assert!("fly".parse::<Command>().unwrap_err().contains("Unknown command"));
        assert!("1 2".parse::<Command>().is_err());
    }
}
