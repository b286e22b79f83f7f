//! One-shot move chooser.
//!
//! `material_bot [--seed N] [--sentinel baseline|first-candidate] [--no-mates]
//! [--log-board] [FEN] [-- moves...]`
//!
//! Info lines go to stderr, `bestmove <uci>` to stdout. With no FEN the
//! standard starting position is used.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use material_bot::engines::engine_simple_strategy::SimpleStrategyEngine;
use material_bot::engines::engine_trait::Engine;
use material_bot::errors::{EngineError, EngineResult};
use material_bot::game_state::chess_board::ChessBoard;
use material_bot::utils::long_algebraic::move_to_long_algebraic;

struct Invocation {
    options: Vec<(&'static str, String)>,
    fen: Option<String>,
    moves: Vec<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> EngineResult<Invocation> {
    let mut options = Vec::new();
    let mut fen_fields = Vec::new();
    let mut moves = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| EngineError::InvalidOptionValue {
                        name: "Seed".to_owned(),
                        value: String::new(),
                    })?;
                options.push(("Seed", value));
            }
            "--sentinel" => {
                let value = args
                    .next()
                    .ok_or_else(|| EngineError::InvalidOptionValue {
                        name: "TieBreakSentinel".to_owned(),
                        value: String::new(),
                    })?;
                options.push(("TieBreakSentinel", value));
            }
            "--no-mates" => options.push(("PreferMates", "false".to_owned())),
            "--log-board" => options.push(("LogBoard", "true".to_owned())),
            "--" => {
                moves.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => {
                return Err(EngineError::UnknownOption(flag.to_owned()));
            }
            _ => fen_fields.push(arg),
        }
    }

    let fen = if fen_fields.is_empty() {
        None
    } else {
        Some(fen_fields.join(" "))
    };

    Ok(Invocation { options, fen, moves })
}

fn run() -> EngineResult<bool> {
    let invocation = parse_args(std::env::args().skip(1))?;

    let mut engine = SimpleStrategyEngine::new();
    for (name, value) in &invocation.options {
        engine.set_option(name, value)?;
    }

    let start = match &invocation.fen {
        Some(fen) => ChessBoard::from_fen(fen)?,
        None => ChessBoard::new_game(),
    };
    let board = start.play_uci_sequence(invocation.moves.iter().map(String::as_str))?;

    let out = engine.choose_move(&board)?;
    for line in &out.info_lines {
        eprintln!("{line}");
    }

    match out.best_move {
        Some(mv) => {
            println!("bestmove {}", move_to_long_algebraic(&mv));
            Ok(true)
        }
        None => {
            println!("bestmove (none)");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
