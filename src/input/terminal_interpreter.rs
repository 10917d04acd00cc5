use std::str::FromStr;
use chess::Square;
use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use crate::config::Difficulty;
use super::protocol_interpreter::ProtocolInterpreter;

lazy_static! {
    static ref MOVE_PATTERN: Regex = Regex::new(r"^([a-h][1-8])\s*-?\s*([a-h][1-8])[qrbn]?$")
        .expect("move pattern is a valid regex");
}

/// What a player can type while playing in the terminal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlayCommand {
    Move(Square, Square),
    Targets(Square),  // list where the piece on a square can go
    Board,
    History,
    Reset,
    ToggleMode,
    SetDifficulty(Difficulty),
    SetTimeLimit(u64),  // minutes
    Help,
    Quit,
}

pub const HELP: &str = "\
moves are typed as squares, e.g. `e2e4` or `e7 e8`; promotions use the configured piece
  moves <square>     where the piece on <square> can go
  board              show the board
  history            show the move list
  reset              start over
  mode               switch between player vs player and player vs AI
  level <difficulty> easy, medium or hard
  time <minutes>     set the time limit and restart both clocks
  quit";

pub struct TerminalInterpreter;

impl TerminalInterpreter {
    fn parse_move(line: &str) -> Option<PlayCommand> {
        let captures = MOVE_PATTERN.captures(line)?;

        let source = Square::from_str(&captures[1]).ok()?;
        let dest = Square::from_str(&captures[2]).ok()?;
        Some(PlayCommand::Move(source, dest))
    }
}

impl ProtocolInterpreter for TerminalInterpreter {
    type Command = PlayCommand;

    fn line_to_command(line: &str) -> Option<PlayCommand> {
        let line = line.trim().to_lowercase();
        let mut split = line.split_whitespace();

        match split.next()? {
            "moves" => split.next()
                .and_then(|x| Square::from_str(x).ok())
                .map(PlayCommand::Targets),
            "board" => Some(PlayCommand::Board),
            "history" => Some(PlayCommand::History),
            "reset" => Some(PlayCommand::Reset),
            "mode" => Some(PlayCommand::ToggleMode),
            "level" => split.next()
                .and_then(|x| Difficulty::from_str(x, true).ok())
                .map(PlayCommand::SetDifficulty),
            "time" => split.next()
                .and_then(|x| x.parse::<u64>().ok())
                .filter(|x| *x > 0)
                .map(PlayCommand::SetTimeLimit),
            "help" => Some(PlayCommand::Help),
            "quit" | "exit" => Some(PlayCommand::Quit),
            _ => TerminalInterpreter::parse_move(&line),
        }
    }
}
