use clap::Parser;

use crate::view::{ConfigError, Marks};

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "tic-tac-toe", version)]
pub struct Config {
    /// Mark drawn for the first player
    #[arg(long, env = "TTT_FIRST_MARK", default_value_t = 'X')]
    pub first_mark: char,

    /// Mark drawn for the second player
    #[arg(long, env = "TTT_SECOND_MARK", default_value_t = 'O')]
    pub second_mark: char,

    /// Start the game right away instead of waiting for `play`
    #[arg(long, env = "TTT_AUTOSTART")]
    pub autostart: bool,

    /// Log filter directive, e.g. `debug` or `tic_tac_toe=info`
    #[arg(long = "log", env = "TTT_LOG", default_value = "warn")]
    pub log_filter: String,
}

impl Config {
    pub fn marks(&self) -> Result<Marks, ConfigError> {
        Marks::new(self.first_mark, self.second_mark)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Piece;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["tic-tac-toe"]).unwrap();
        assert_eq!(config.first_mark, 'X');
        assert_eq!(config.second_mark, 'O');
        assert!(!config.autostart);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.marks(), Ok(Marks::default()));
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "tic-tac-toe",
            "--first-mark",
            "A",
            "--second-mark",
            "B",
            "--autostart",
            "--log",
            "debug",
        ])
        .unwrap();
        assert!(config.autostart);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.marks().unwrap().mark(Piece::Second), 'B');
    }

    #[test]
    fn test_same_marks_rejected() {
        let config =
            Config::try_parse_from(["tic-tac-toe", "--first-mark", "O"]).unwrap();
        assert_eq!(config.marks(), Err(ConfigError::DuplicateMark { mark: 'O' }));
    }

    #[test]
    fn test_multi_char_mark_rejected() {
        assert!(Config::try_parse_from(["tic-tac-toe", "--first-mark", "XX"]).is_err());
    }
}
