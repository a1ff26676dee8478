use std::{
    collections::BTreeSet,
    io::{self, Write},
    process::ExitCode,
};

use chessreach::{reachable, Piece, Square};
use clap::{error::ErrorKind, CommandFactory, Parser};

/// Find the squares a chess piece can reach from a position on an empty board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chess piece, one of PAWN/ROOK/BISHOP/KNIGHT/QUEEN/KING
    #[arg(long, required = true)]
    piece: String,

    /// Position on the board in algebraic notation, e.g. a5
    #[arg(long, required = true)]
    position: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();
}

fn format_positions(positions: &BTreeSet<Square>) -> String {
    if positions.is_empty() {
        return "Possible Positions | None".to_string();
    }
    let joined = positions
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Possible Positions | {joined}")
}

fn run(args: &Args) -> chessreach::Result<String> {
    let piece: Piece = args.piece.parse()?;
    let origin: Square = args.position.parse()?;
    Ok(format_positions(&reachable(piece, origin)))
}

fn report_invalid<W: Write>(err: &chessreach::ReachError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{err}\n")?;
    Args::command().write_help(out)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.debug);

    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Err(io_err) = report_invalid(&e, &mut io::stderr()) {
                log::warn!("could not write usage: {io_err}");
            }
            ExitCode::FAILURE
        }
    }
}
