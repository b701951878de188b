mod command;
mod config;
mod render;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::tictactoe::{Difficulty, GameMode, Mark, TicTacToeSettings};
use tictactoe_common::{log, log_error, logger};

use config::get_config_manager;
use runner::GameRunner;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer or a friend")]
struct Args {
    /// Config file to read (and write with --save-config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// vs-computer or vs-human
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Mark played by the computer; X moves first
    #[arg(long)]
    computer_mark: Option<Mark>,

    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Store the effective settings in the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, settings: &mut TicTacToeSettings) {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(computer_mark) = self.computer_mark {
            settings.computer_mark = computer_mark;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.thinking_delay_ms = delay_ms;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        config.log.prefix.clone()
    };
    logger::init_logger(prefix, config.log.level);

    args.apply_to(&mut config.tictactoe);
    if let Err(e) = config.validate() {
        log_error!("Invalid settings: {}", e);
        return Err(e.into());
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!(
            "Config saved to {}",
            config_manager.provider().file_path().display()
        );
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = GameRunner::new(config.tictactoe, stdin.lock(), stdout.lock(), rng)?;
    if let Err(e) = runner.run() {
        log_error!("Game stopped: {}", e);
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let args = Args::try_parse_from([
            "tictactoe",
            "--mode",
            "vs-human",
            "--difficulty",
            "medium",
            "--computer-mark",
            "x",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        let mut settings = TicTacToeSettings::default();
        args.apply_to(&mut settings);

        assert_eq!(settings.mode, GameMode::VsHuman);
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.computer_mark, Mark::X);
        assert_eq!(settings.thinking_delay_ms, 0);
    }

    #[test]
    fn test_no_flags_keep_config_values() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap();
        let mut settings = TicTacToeSettings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings, TicTacToeSettings::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["tictactoe", "--difficulty", "extreme"]).is_err());
        assert!(Args::try_parse_from(["tictactoe", "--computer-mark", "."]).is_err());
    }
}
