use std::io;
use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::thread::sleep;
use std::time::{Duration, Instant};
use anyhow::Context;
use chess::Color;
use clap::Parser;
use itertools::Itertools;
use log::{info, warn, LevelFilter};

use pst_minimax::config::EngineConfig;
use pst_minimax::core::position::{GamePosition, Position};
use pst_minimax::core::search::find_best_move_with;
use pst_minimax::core::search::search_result::SearchOutcome;
use pst_minimax::game::clock::Stopwatch;
use pst_minimax::game::render::{render_board, render_history};
use pst_minimax::game::{Game, GameError};
use pst_minimax::input::command_line::{Cli, Mode};
use pst_minimax::input::protocol_interpreter::{CalculateOptions, Command, DebugState};
use pst_minimax::input::stdin::listen_to_stdin;
use pst_minimax::input::terminal_interpreter::{PlayCommand, TerminalInterpreter, HELP};
use pst_minimax::input::uci_interpreter::UciInterpreter;
use pst_minimax::input::ProtocolSupportError;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;

    match cli.command.clone() {
        None | Some(Mode::Play { .. }) => play_in_terminal(config),
        Some(Mode::Uci) => start_uci_protocol(config),
        Some(Mode::BestMove { fen, depth }) => print_best_move(config, fen, depth),
    }
}

fn print_best_move(config: EngineConfig, fen: Option<String>, depth: Option<u32>) -> anyhow::Result<()> {
    let mut position = match fen {
        Some(fen) => GamePosition::from_fen(&fen)?,
        None => GamePosition::default(),
    };
    let depth = depth.unwrap_or(config.difficulty.depth());

    match find_best_move_with(&mut position, depth, &config.search_config())? {
        Some(outcome) => println!(
            "{} {} ({} nodes)",
            uci_move(&position, &outcome, &config),
            outcome.evaluation(),
            outcome.nodes_searched(),
        ),
        None => println!("no legal moves"),
    }

    Ok(())
}

/// The chosen move in long algebraic notation, with the configured promotion piece when it promotes.
fn uci_move(position: &GamePosition, outcome: &SearchOutcome, config: &EngineConfig) -> String {
    let best_move = outcome.best_move();
    position
        .find_move(best_move.source, best_move.dest, config.promotion.into())
        .map(|x| x.to_string())
        .unwrap_or_else(|| best_move.to_string())
}

fn start_uci_protocol(config: EngineConfig) -> anyhow::Result<()> {
    // Make sure host (GUI) uses UCI protocol
    let mut handshake = String::new();
    loop {
        handshake.clear();
        let read = io::stdin().lock().read_line(&mut handshake).context("failed stdin read")?;

        match handshake.trim() {
            _ if read == 0 => return Ok(()),
            "uci" => break,
            "quit" => return Ok(()),
            // GUI may have tried some other protocol, e.g. `xboard`
            other => warn!("{}", ProtocolSupportError(other.to_string())),
        }
    }

    let (input_tx, input_rx) = channel::<Command>();
    thread::spawn(move || {
        listen_to_stdin::<UciInterpreter>(input_tx);
    });

    identify();
    run_uci_loop(config, input_rx)
}

fn identify() {
    println!("id name pst-minimax {}", env!("CARGO_PKG_VERSION"));
    println!("id author the pst-minimax authors");
    println!("uciok");
}

fn run_uci_loop(config: EngineConfig, input_rx: Receiver<Command>) -> anyhow::Result<()> {
    let mut position = GamePosition::default();

    // Stops when stdin closes
    while let Ok(command) = input_rx.recv() {
        match command {
            Command::Identify => identify(),
            Command::ToggleDebug(DebugState::On) => log::set_max_level(LevelFilter::Debug),
            Command::ToggleDebug(DebugState::Off) => log::set_max_level(LevelFilter::Warn),
            Command::IsReady => println!("readyok"),  // search is synchronous, so always ready here
            Command::NewGame => position = GamePosition::default(),
            Command::SetPosition(new_position) => position = new_position,
            Command::Calculate(options) => {
                let depth = match options {
                    CalculateOptions::Configured => config.difficulty.depth(),
                    CalculateOptions::Depth(depth) => depth.max(1),
                };

                let started = Instant::now();
                match find_best_move_with(&mut position, depth, &config.search_config())? {
                    Some(outcome) => {
                        log_uci_info(&position, &outcome, depth, started.elapsed());
                        println!("bestmove {}", uci_move(&position, &outcome, &config));
                    },
                    None => println!("bestmove 0000"),
                }
            },
            Command::Stop => (),
            Command::Quit => break,
        }
        io::stdout().flush()?;
    }

    Ok(())
}

fn log_uci_info(position: &GamePosition, outcome: &SearchOutcome, depth: u32, elapsed: Duration) {
    // UCI scores are from the engine's point of view
    let score = match position.side_to_move() {
        Color::White => outcome.evaluation().0,
        Color::Black => -outcome.evaluation().0,
    };
    let millis = elapsed.as_millis().max(1);
    let nps = u128::from(outcome.nodes_searched()) * 1000 / millis;

    println!(
        "info depth {depth} score cp {score} nodes {} nps {nps} time {millis} pv {}",
        outcome.nodes_searched(),
        outcome.best_move(),
    );
}

fn play_in_terminal(config: EngineConfig) -> anyhow::Result<()> {
    let (input_tx, input_rx) = channel::<PlayCommand>();
    thread::spawn(move || {
        listen_to_stdin::<TerminalInterpreter>(input_tx);
    });

    let think_delay = Duration::from_millis(config.think_delay_ms);
    let mut game = Game::new(&config);
    println!("type `help` for commands");
    show_position(&game);

    // Runs for the side to move from one command to the next
    let mut turn_clock = Stopwatch::start();

    loop {
        if game.is_ai_turn() && !game.status().is_over() {
            sleep(think_delay);
            match game.play_engine_move() {
                Ok(Some(record)) => println!("AI plays {}", record.san),
                Ok(None) | Err(GameError::GameOver(_)) => (),
                Err(err) => return Err(err.into()),
            }
            // The engine's search time is already on its clock
            turn_clock = Stopwatch::start();
            show_position(&game);
            continue;
        }

        print!("> ");
        io::stdout().flush()?;

        let Ok(command) = input_rx.recv() else {
            return Ok(());
        };
        game.tick(turn_clock.lap());

        match command {
            PlayCommand::Move(source, dest) => {
                match game.play(source, dest).map(|_| ()) {
                    Ok(_) => show_position(&game),
                    Err(err @ (GameError::IllegalMove { .. } | GameError::NotYourTurn | GameError::GameOver(_))) => {
                        println!("{err}");
                    },
                    Err(err) => return Err(err.into()),
                }
            },
            PlayCommand::Targets(square) => {
                match game.targets_from(square).into_iter().map(|x| x.to_string()).join(" ") {
                    targets if targets.is_empty() => println!("no moves from {square}"),
                    targets => println!("{square}: {targets}"),
                }
            },
            PlayCommand::Board => show_position(&game),
            PlayCommand::History => println!("{}", render_history(game.history())),
            PlayCommand::Reset => {
                game.reset();
                show_position(&game);
            },
            PlayCommand::ToggleMode => {
                game.toggle_mode();
                info!("switched to {:?}", game.mode());
                show_position(&game);
            },
            PlayCommand::SetDifficulty(difficulty) => {
                game.set_difficulty(difficulty);
                println!("difficulty set to {difficulty}");
            },
            PlayCommand::SetTimeLimit(minutes) => {
                game.set_time_limit(minutes);
                println!("{}", game.clock());
            },
            PlayCommand::Help => println!("{HELP}"),
            PlayCommand::Quit => return Ok(()),
        }
    }
}

fn show_position(game: &Game) {
    println!("{}", render_board(game.position()));
    println!("{}", game.clock());
    println!("{}", game.status());
}
