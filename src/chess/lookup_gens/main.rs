use std::{fs::File, io::Write, process::ExitCode};

use chessreach::{Piece, ReachTable, Result};

fn write_table_to_file(path: &str, table: &ReachTable) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(&table.to_bytes()?)?;
    Ok(())
}

fn generate(piece_name: &str, path: Option<&str>) -> Result<()> {
    let piece: Piece = piece_name.to_uppercase().parse()?;
    let table = ReachTable::build(piece);

    let default_path = format!("{}_reach.bin", piece_name.to_lowercase());
    let path = path.unwrap_or(&default_path);
    write_table_to_file(path, &table)?;

    log::info!(
        "wrote {} entries for {piece} to {path}",
        table.entry_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        println!("Provide piece to gen table for [pawn,knight,bishop,rook,queen,king] and an optional output path");
        return ExitCode::FAILURE;
    }

    match generate(&args[1], args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
