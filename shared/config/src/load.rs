use std::borrow::Cow;
use std::path::Path;

use board::{BoardError, SquareBoard};
use common::*;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parsing(#[from] ron::de::Error),

    #[error("Invalid board config: {0}")]
    Board(#[from] BoardError),
}

type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub enum ConfigType<'a> {
    String(&'a str),
    File(&'a Path),
}

impl<'a> ConfigType<'a> {
    pub fn load(&self) -> ConfigResult<Config> {
        let bytes = match self {
            ConfigType::String(s) => Cow::Borrowed(*s),
            ConfigType::File(path) => {
                debug!("reading config"; "path" => %path.display());
                let contents = std::fs::read_to_string(*path)?;
                Cow::Owned(contents)
            }
        };

        Ok(ron::de::from_str(&bytes)?)
    }
}

impl Config {
    /// Builds the configured board, failing on a non-positive width
    pub fn create_board(&self) -> ConfigResult<SquareBoard> {
        SquareBoard::new(self.board.width).map_err(ConfigError::Board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Dump};
    use std::io::Write;

    #[test]
    fn parse_full() {
        let cfg = ConfigType::String("(board: (width: 4), dump: (neighbours: true))")
            .load()
            .expect("config should parse");

        assert_eq!(
            cfg,
            Config {
                board: Board { width: 4 },
                dump: Dump { neighbours: true },
            }
        );
        assert_eq!(cfg.create_board().unwrap().width(), 4);
    }

    #[test]
    fn dump_is_optional() {
        let cfg = ConfigType::String("(board: (width: 2))").load().unwrap();
        assert!(!cfg.dump.neighbours);
    }

    #[test]
    fn bad_syntax() {
        let err = ConfigType::String("(board: (width: \"lots\"))")
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parsing(_)));
    }

    #[test]
    fn bad_width() {
        let cfg = ConfigType::String("(board: (width: 0))").load().unwrap();
        assert!(matches!(
            cfg.create_board(),
            Err(ConfigError::Board(BoardError::InvalidWidth(0)))
        ));
    }

    #[test]
    fn from_file() {
        let path = std::env::temp_dir().join(format!("board-config-{}.ron", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            write!(file, "(\n    board: (width: 3),\n)\n").unwrap();
        }

        let cfg = ConfigType::File(&path).load();
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.unwrap().board.width, 3);
    }

    #[test]
    fn missing_file() {
        let path = Path::new("/definitely/not/a/board/config.ron");
        assert!(matches!(
            ConfigType::File(path).load(),
            Err(ConfigError::Io(_))
        ));
    }
}
