use std::str::FromStr;

use memory_puzzle_core as game;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    /// Zero-based board position.
    Reveal(game::Coord2),
    /// Start over, optionally switching level.
    NewGame(Option<game::LevelConfig>),
    Redraw,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command {0:?}, type ? for help")]
    Unknown(String),
    #[error("Positions are written as \"<row> <col>\", counting from 1")]
    BadPosition,
}

pub(crate) const HELP: &str = "\
Commands:
  <row> <col>   reveal the tile at that position (counting from 1)
  n             new game at the current level
  e / m / h     new game at easy / medium / hard
  ?             show this help
  q             quit";

fn parse_axis(text: &str) -> Result<game::Coord, CommandError> {
    text.parse::<game::Coord>()
        .ok()
        .and_then(|value| value.checked_sub(1))
        .ok_or(CommandError::BadPosition)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty())
            .collect();

        match words.as_slice() {
            [] => Ok(Command::Redraw),
            [row, col] => Ok(Command::Reveal((parse_axis(row)?, parse_axis(col)?))),
            [word] => match word.to_ascii_lowercase().as_str() {
                "q" | "quit" | "exit" => Ok(Command::Quit),
                "?" | "help" => Ok(Command::Help),
                "n" | "new" => Ok(Command::NewGame(None)),
                "e" => Ok(Command::NewGame(Some(game::LevelConfig::EASY))),
                "m" => Ok(Command::NewGame(Some(game::LevelConfig::MEDIUM))),
                "h" => Ok(Command::NewGame(Some(game::LevelConfig::HARD))),
                name => game::LevelConfig::preset(name)
                    .map(|level| Command::NewGame(Some(level)))
                    .ok_or_else(|| CommandError::Unknown(word.to_string())),
            },
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!("1 1".parse::<Command>(), Ok(Command::Reveal((0, 0))));
        assert_eq!("  3   4 ".parse::<Command>(), Ok(Command::Reveal((2, 3))));
        assert_eq!("2,6".parse::<Command>(), Ok(Command::Reveal((1, 5))));
    }

    #[test]
    fn zero_and_garbage_positions_are_rejected() {
        assert_eq!("0 1".parse::<Command>(), Err(CommandError::BadPosition));
        assert_eq!("1 x".parse::<Command>(), Err(CommandError::BadPosition));
        assert_eq!("1 300".parse::<Command>(), Err(CommandError::BadPosition));
    }

    #[test]
    fn single_letters_drive_the_session() {
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("N".parse::<Command>(), Ok(Command::NewGame(None)));
        assert_eq!(
            "h".parse::<Command>(),
            Ok(Command::NewGame(Some(game::LevelConfig::HARD)))
        );
        assert_eq!(
            "medium".parse::<Command>(),
            Ok(Command::NewGame(Some(game::LevelConfig::MEDIUM)))
        );
        assert_eq!("".parse::<Command>(), Ok(Command::Redraw));
    }

    #[test]
    fn unknown_input_is_reported() {
        assert_eq!(
            "flip".parse::<Command>(),
            Err(CommandError::Unknown("flip".to_string()))
        );
        assert_eq!(
            "1 2 3".parse::<Command>(),
            Err(CommandError::Unknown("1 2 3".to_string()))
        );
    }
}
