use std::str::FromStr;

use super::ParseInputError;

/// A user action routed into the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Play,
    Select { row: usize, col: usize },
    NewGame,
}

impl FromStr for Input {
    type Err = ParseInputError;

    /// Accepts `play`, `new` or a `<row> <col>` pair, case and whitespace insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(ParseInputError::Empty),
            [word] if word.eq_ignore_ascii_case("play") => Ok(Self::Play),
            [word] if word.eq_ignore_ascii_case("new") => Ok(Self::NewGame),
            [row, col] => Ok(Self::Select {
                row: parse_coordinate(row)?,
                col: parse_coordinate(col)?,
            }),
            [word] if word.parse::<usize>().is_ok() => {
                Err(ParseInputError::WrongArity { found: 1 })
            }
            [word] => Err(ParseInputError::UnknownCommand {
                command: word.to_string(),
            }),
            _ => Err(ParseInputError::WrongArity { found: words.len() }),
        }
    }
}

fn parse_coordinate(value: &str) -> Result<usize, ParseInputError> {
    value
        .parse()
        .map_err(|_| ParseInputError::InvalidCoordinate {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!("play".parse::<Input>(), Ok(Input::Play));
        assert_eq!("  PLAY \n".parse::<Input>(), Ok(Input::Play));
        assert_eq!("New".parse::<Input>(), Ok(Input::NewGame));
        assert_eq!("2 0".parse::<Input>(), Ok(Input::Select { row: 2, col: 0 }));
        assert_eq!("\t1   1 ".parse::<Input>(), Ok(Input::Select { row: 1, col: 1 }));
    }

    #[test]
    fn test_out_of_range_coordinates_still_parse() {
        // bounds are the controller's business
        assert_eq!("5 7".parse::<Input>(), Ok(Input::Select { row: 5, col: 7 }));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!("".parse::<Input>(), Err(ParseInputError::Empty));
        assert_eq!(
            "jump".parse::<Input>(),
            Err(ParseInputError::UnknownCommand {
                command: "jump".to_string()
            })
        );
        assert_eq!(
            "1 -1".parse::<Input>(),
            Err(ParseInputError::InvalidCoordinate {
                value: "-1".to_string()
            })
        );
        assert_eq!(
            "1".parse::<Input>(),
            Err(ParseInputError::WrongArity { found: 1 })
        );
        assert_eq!(
            "1 2 3".parse::<Input>(),
            Err(ParseInputError::WrongArity { found: 3 })
        );
    }
}
