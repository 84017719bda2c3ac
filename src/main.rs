// Motor de Damas - partida do motor contra si próprio, com tempos por lance
use damas::*;
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: damas [--threads N] [--depth D] [--seed S] [--rows R] [--cols C] [--max-turns T] [--sequential] [--king-first]");
            return ExitCode::from(2);
        }
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let threads = game.engine().threads();
    let depth = game.engine().config().max_depth;
    println!("=== DAMAS: {} thread(s), profundidade {} ===\n", threads, depth);
    println!("{}", game.board());

    let start = Instant::now();
    let mut search_time = Duration::ZERO;
    let mut searches = 0u32;

    while let Some(turn) = game.step() {
        search_time += turn.stats.elapsed;
        searches += 1;
        println!("{}", turn.mv);
        println!("{}", game.board());
    }

    let total = start.elapsed();
    match game.status() {
        GameStatus::Won(player) => println!("Game over! {} won!", player),
        GameStatus::Draw => println!("Game over! Draw after {} turns.", game.turns()),
        GameStatus::InProgress => {}
    }

    if searches > 0 {
        println!(
            "Average search time with {} thread(s): {}ms over {} move(s)",
            threads,
            (search_time / searches).as_millis(),
            searches
        );
    }
    println!("Total time taken with {} thread(s): {}ms", threads, total.as_millis());

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<GameConfig, ParseError> {
    let mut config = GameConfig::default();
    let mut idx = 0;

    while idx < args.len() {
        let flag = args[idx].as_str();
        match flag {
            "--threads" => config.search.threads = parse_value(args, idx)?,
            "--depth" => config.search.max_depth = parse_value(args, idx)?,
            "--rows" => config.rows = parse_value(args, idx)?,
            "--cols" => config.cols = parse_value(args, idx)?,
            "--max-turns" => config.max_turns = parse_value(args, idx)?,
            "--seed" => config.seed = Some(parse_value(args, idx)?),
            "--sequential" => {
                config.search.mode = SearchMode::Sequential;
                idx += 1;
                continue;
            }
            "--king-first" => {
                config.search.weights = search::ScoreWeights::KING_FIRST;
                idx += 1;
                continue;
            }
            _ => return Err(ParseError::UnknownOption(flag.to_string())),
        }
        idx += 2;
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(args: &[String], idx: usize) -> Result<T, ParseError> {
    let flag = &args[idx];
    let value = args.get(idx + 1).ok_or_else(|| ParseError::MissingValue(flag.clone()))?;
    value.parse().map_err(|_| ParseError::InvalidValue { flag: flag.clone(), value: value.clone() })
}
