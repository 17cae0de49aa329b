use std::process;

use capture_chess::coord::Square;
use capture_chess::game::{Game, Outcome};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: replay <move>...");
        eprintln!("Each move is 'RC-RC' (row then column, 0-7),");
        eprintln!("e.g. '64-44' pushes the white king's pawn two squares.");
        process::exit(2);
    }

    let mut game = Game::new();
    println!("{}", game.board());

    for arg in &args {
        let Some((from, to)) = parse_move(arg) else {
            eprintln!("Bad move '{arg}': expected 'RC-RC' with digits in 0..8");
            process::exit(2);
        };
        match game.try_move(from, to) {
            Ok(outcome) => {
                println!("{arg}:");
                println!("{}", game.board());
                if let Outcome::WonBy(winner) = outcome {
                    println!("{winner} wins");
                    return;
                }
            }
            Err(err) => {
                eprintln!("Move '{arg}' rejected: {err}");
                process::exit(1);
            }
        }
    }

    println!("{} to move", game.to_move());
}

fn parse_move(s: &str) -> Option<(Square, Square)> {
    let (from, to) = s.split_once('-')?;
    Some((parse_square(from)?, parse_square(to)?))
}

fn parse_square(s: &str) -> Option<Square> {
    let mut digits = s.chars();
    let row = digits.next()?.to_digit(10)? as u8;
    let col = digits.next()?.to_digit(10)? as u8;
    if digits.next().is_some() {
        return None;
    }
    Square::new(row, col)
}
