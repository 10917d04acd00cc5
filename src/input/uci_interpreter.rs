use std::str::FromStr;
use chess::ChessMove;
use itertools::Itertools;
use log::warn;

use crate::core::position::{GamePosition, Position};
use crate::input::protocol_interpreter::{CalculateOptions, DebugState};
use super::protocol_interpreter::{Command, ProtocolInterpreter};

// Interpreter for the Universal Chess Interface protocol
pub struct UciInterpreter;

impl UciInterpreter {
    fn determine_position<'a>(mut args: impl Iterator<Item=&'a str>) -> Option<GamePosition> {
        let mut position = match args.next() {
            Some("startpos") => GamePosition::default(),
            Some("fen") => {
                let fen = args.by_ref()
                    .take_while(|x| *x != "moves")
                    .join(" ");
                GamePosition::from_fen(&fen)
                    .map_err(|err| warn!("{err}"))
                    .ok()?
            },
            other => {
                warn!("unsupported position parameters {other:?}");
                return None;
            },
        };

        // `take_while` above already consumed "moves" for FEN positions
        for arg in args.skip_while(|x| *x == "moves") {
            let chess_move = ChessMove::from_str(arg)
                .map_err(|_| warn!("non-chess move specified: {arg}"))
                .ok()?;
            position.apply(chess_move)
                .map_err(|err| warn!("{err}"))
                .ok()?;
        }

        Some(position)
    }

    fn determine_calculate_options<'a>(mut args: impl Iterator<Item=&'a str>) -> Option<CalculateOptions> {
        match args.next() {
            Some("depth") => {
                let depth = args.next()?.parse::<u32>()
                    .map_err(|_| warn!("depth must be a positive integer"))
                    .ok()?;
                match depth {
                    0 => None,
                    x => Some(CalculateOptions::Depth(x)),
                }
            },
            // Time controls don't bound a fixed depth search
            _ => Some(CalculateOptions::Configured),
        }
    }

    fn determine_debug_state<'a>(mut args: impl Iterator<Item=&'a str>) -> Option<DebugState> {
        match args.next() {
            Some("on") => Some(DebugState::On),
            Some("off") => Some(DebugState::Off),
            _ => None,
        }
    }
}

impl ProtocolInterpreter for UciInterpreter {
    type Command = Command;

    fn line_to_command(line: &str) -> Option<Command> {
        let mut split = line.split_whitespace();

        let command_word = split.next()?;

        match command_word {
            "uci" => Some(Command::Identify),
            "debug" => UciInterpreter::determine_debug_state(split).map(Command::ToggleDebug),
            "isready" => Some(Command::IsReady),
            "ucinewgame" => Some(Command::NewGame),
            "position" => UciInterpreter::determine_position(split).map(Command::SetPosition),
            "go" => UciInterpreter::determine_calculate_options(split).map(Command::Calculate),
            "stop" => Some(Command::Stop),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}
