//! Self-play game generation binary.
//!
//! Plays the search engine against a uniform-random baseline and writes
//! one JSON game record per line to stdout or a file.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use iago::selfplay::{run_self_play_with_callback, SelfPlayConfig};

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 = entropy (default: 0)");
    eprintln!("  --output FILE    Write JSONL to FILE instead of stdout");
    eprintln!("  --quiet          Suppress per-game progress on stderr");
    eprintln!("  --help           Show this help");
}

fn parse_args() -> Result<(SelfPlayConfig, Option<String>), String> {
    let mut config = SelfPlayConfig::default();
    let mut output = None;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                let v = args.get(i).ok_or("--games requires a value")?;
                config.num_games = v
                    .parse()
                    .map_err(|_| format!("invalid --games value: {}", v))?;
            }
            "--threads" => {
                i += 1;
                let v = args.get(i).ok_or("--threads requires a value")?;
                config.threads = v
                    .parse()
                    .map_err(|_| format!("invalid --threads value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or("--seed requires a value")?;
                config.seed = v
                    .parse()
                    .map_err(|_| format!("invalid --seed value: {}", v))?;
            }
            "--output" => {
                i += 1;
                let v = args.get(i).ok_or("--output requires a value")?;
                output = Some(v.clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                return Err(format!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok((config, output))
}

fn main() {
    let (config, output) = match parse_args() {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {}", msg);
            print_usage();
            process::exit(1);
        }
    };

    let mut out: Box<dyn Write + Send> = match &output {
        Some(path) => match File::create(path) {
            Ok(f) => Box::new(BufWriter::new(f)),
            Err(e) => {
                eprintln!("error: cannot create {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut failed = false;
    run_self_play_with_callback(&config, |game| {
        match serde_json::to_string(&game) {
            Ok(line) => {
                if writeln!(out, "{}", line).is_err() {
                    failed = true;
                }
            }
            Err(e) => {
                eprintln!("error: cannot serialize game {}: {}", game.game_id, e);
                failed = true;
            }
        }
    });

    if out.flush().is_err() {
        failed = true;
    }
    if failed {
        process::exit(1);
    }
}
