use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use blunderfish::board::{init, Board, Color, SearchParams, START_FEN};
use blunderfish::find_best_move;

const DEFAULT_DEPTH: u32 = 6;

const USAGE: &str = "usage:
  blunderfish eval <fen>
  blunderfish best <fen> [depth]
  blunderfish perft <fen> <depth>
  blunderfish play [fen] [depth]";

fn parse_depth(arg: Option<&String>) -> Result<u32, Box<dyn Error>> {
    match arg {
        None => Ok(DEFAULT_DEPTH),
        Some(text) => Ok(text.parse::<u32>().map_err(|e| format!("bad depth '{text}': {e}"))?),
    }
}

fn cmd_eval(fen: &str) -> Result<(), Box<dyn Error>> {
    let board = Board::from_fen(fen)?;
    println!("{board}");
    println!("eval (side to move): {}", board.eval());
    Ok(())
}

fn cmd_best(fen: &str, depth: u32) -> Result<(), Box<dyn Error>> {
    let mut board = Board::from_fen(fen)?;
    let moves = board.legal_moves();
    let result = find_best_move(&mut board, moves.as_slice(), depth, &SearchParams::default());
    match result.best_move {
        Some(mv) => {
            let name = board.name_moves(&[mv]).remove(0);
            println!(
                "bestmove {mv} ({name}) score {} depth {} nodes {}",
                result.score, result.depth, result.nodes
            );
        }
        None if board.is_in_check(board.side_to_move()) => println!("no moves: checkmate"),
        None => println!("no moves: stalemate"),
    }
    Ok(())
}

fn cmd_perft(fen: &str, depth: u32) -> Result<(), Box<dyn Error>> {
    let mut board = Board::from_fen(fen)?;
    let mut total = 0;
    for (mv, count) in board.divide(depth) {
        println!("{mv}: {count}");
        total += count;
    }
    println!("\nnodes: {total}");
    Ok(())
}

/// Human plays White by move name, the engine answers as Black.
fn cmd_play(fen: &str, depth: u32) -> Result<(), Box<dyn Error>> {
    let mut board = Board::from_fen(fen)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{board}");
        let moves = board.legal_moves();
        if moves.is_empty() {
            if board.is_in_check(board.side_to_move()) {
                println!("checkmate, {} wins", board.side_to_move().opponent());
            } else {
                println!("stalemate");
            }
            return Ok(());
        }

        if board.side_to_move() == Color::White {
            let names = board.name_moves(moves.as_slice());
            println!("your move ({}):", names.join(" "));
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let input = line.trim();
            if input == "quit" {
                return Ok(());
            }
            let mv = match board.move_from_name(input) {
                Ok(mv) => mv,
                Err(_) => match board.parse_uci_move(input) {
                    Ok(mv) => mv,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                },
            };
            board.apply_move(mv);
        } else {
            let result =
                find_best_move(&mut board, moves.as_slice(), depth, &SearchParams::default());
            let Some(mv) = result.best_move else {
                return Ok(());
            };
            let name = board.name_moves(&[mv]).remove(0);
            println!("engine plays {name} (score {}, depth {})", result.score, result.depth);
            board.apply_move(mv);
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    match args.first().map(String::as_str) {
        Some("eval") => {
            let fen = args.get(1).ok_or(USAGE)?;
            cmd_eval(fen)
        }
        Some("best") => {
            let fen = args.get(1).ok_or(USAGE)?;
            cmd_best(fen, parse_depth(args.get(2))?)
        }
        Some("perft") => {
            let fen = args.get(1).ok_or(USAGE)?;
            let depth = args.get(2).ok_or(USAGE)?;
            cmd_perft(fen, parse_depth(Some(depth))?)
        }
        Some("play") => {
            let fen = args.get(1).map_or(START_FEN, String::as_str);
            cmd_play(fen, parse_depth(args.get(2))?)
        }
        _ => Err(USAGE.into()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
