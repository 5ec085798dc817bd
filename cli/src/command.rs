use bombgrid_core::{CellIndex, Coord, Coord2};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Size exactly as typed, validated by the engine.
    New(String),
    Open(Target),
    Show,
    Restart,
    Help,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Index(CellIndex),
    Coords(Coord2),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Type a command, or `help` to list them")]
    Empty,
    #[error("Unknown command `{0}`, type `help` to list commands")]
    Unknown(String),
    #[error("Expected `open INDEX` or `open ROW COL`")]
    BadCell,
}

pub const HELP: &str = "\
Commands:
  new N         create an N x N grid (N >= 2)
  open I        reveal cell number I
  open ROW COL  reveal the cell at ROW, COL
  show          print the grid
  restart       clear the grid
  help          show this message
  quit          leave the game";

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "new" | "n" => Ok(Command::New(rest.to_string())),
        "open" | "o" => parse_target(rest).map(Command::Open),
        "show" | "s" => Ok(Command::Show),
        "restart" | "retry" => Ok(Command::Restart),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::Unknown(word.to_string())),
    }
}

fn parse_target(args: &str) -> Result<Target, ParseError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [index] => index
            .parse()
            .map(Target::Index)
            .map_err(|_| ParseError::BadCell),
        [row, col] => {
            let row: Coord = row.parse().map_err(|_| ParseError::BadCell)?;
            let col: Coord = col.parse().map_err(|_| ParseError::BadCell)?;
            Ok(Target::Coords((row, col)))
        }
        _ => Err(ParseError::BadCell),
    }
}
