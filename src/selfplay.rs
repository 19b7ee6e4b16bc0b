//! Self-play game generation.
//!
//! Plays complete games of the search engine against a uniform-random
//! baseline, alternating the engine's color between games, and records one
//! entry per ply for offline analysis. Records serialize to JSONL.
//!
//! The search itself is single-threaded; parallelism exists only across
//! independent games.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Position, Side};
use crate::protocol::ofen::encode_ofen;
use crate::rules::{apply_move, is_terminal, legal_moves, pass, random_move};
use crate::search::search_root;

/// Configuration for self-play game generation.
#[derive(Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single recorded ply from a self-play game.
#[derive(Clone, Serialize)]
pub struct MoveRecord {
    /// OFEN of the position before the ply.
    pub ofen: String,
    /// Side that acted, as its OFEN character.
    pub side: char,
    /// The move in algebraic notation, or `None` for a pass.
    pub mv: Option<String>,
    /// Root search score for engine moves; `None` for baseline moves.
    pub score: Option<i32>,
}

/// A complete self-play game record.
#[derive(Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Which color the engine played, as its OFEN character.
    pub engine_side: char,
    /// Winner's OFEN character, or `None` for a draw.
    pub winner: Option<char>,
    /// Final (dark, light) token counts.
    pub final_counts: (i32, i32),
    /// All plies in order.
    pub moves: Vec<MoveRecord>,
}

/// Plays one full game: the engine on `engine_side`, the random baseline
/// on the other color.
fn play_game(game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let engine_side = if game_id % 2 == 0 {
        Side::Dark
    } else {
        Side::Light
    };

    let mut pos = Position::opening();
    let mut moves = Vec::new();

    while !is_terminal(&pos) {
        let side = pos.turn;
        let ofen = encode_ofen(&pos);

        if legal_moves(&pos).is_empty() {
            moves.push(MoveRecord {
                ofen,
                side: side.ofen_char(),
                mv: None,
                score: None,
            });
            pos = pass(&pos);
            continue;
        }

        let (mv, score) = if side == engine_side {
            let result = search_root(&pos).expect("legal moves exist");
            (result.best.expect("search must pick a move"), Some(result.score))
        } else {
            (random_move(&pos, rng).expect("legal moves exist"), None)
        };

        moves.push(MoveRecord {
            ofen,
            side: side.ofen_char(),
            mv: Some(mv.to_string()),
            score,
        });
        pos = apply_move(&pos, mv);
    }

    let (dark, light) = pos.token_counts();
    let winner = match dark.cmp(&light) {
        std::cmp::Ordering::Greater => Some(Side::Dark.ofen_char()),
        std::cmp::Ordering::Less => Some(Side::Light.ofen_char()),
        std::cmp::Ordering::Equal => None,
    };

    GameRecord {
        game_id,
        engine_side: engine_side.ofen_char(),
        winner,
        final_counts: (dark, light),
        moves,
    }
}

/// Runs self-play generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs self-play generation, calling `on_game` with each completed game.
///
/// This allows the caller to process games incrementally (e.g. write to
/// disk) rather than waiting for all games to finish.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

/// Derives the RNG for one game from the configured seed.
fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn report_game(n: usize, total: usize, game: &GameRecord, elapsed_secs: f64) {
    let outcome = match game.winner {
        Some(w) => format!("{} wins {}-{}", w, game.final_counts.0, game.final_counts.1),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: engine as {}, {} ({:.1}s)",
        n, total, game.engine_side, outcome, elapsed_secs
    );
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let game_start = Instant::now();
        let mut rng = game_rng(config.seed, i);
        let game = play_game(i, &mut rng);
        if !config.quiet {
            report_game(i + 1, config.num_games, &game, game_start.elapsed().as_secs_f64());
        }
        on_game(game);
    }
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker
/// threads.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        let completed = AtomicUsize::new(0);
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let game_start = Instant::now();
                    let mut rng = game_rng(config_clone.seed, i);
                    let game = play_game(i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report_game(
                            n,
                            config_clone.num_games,
                            &game,
                            game_start.elapsed().as_secs_f64(),
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    // Receive completed games on the main thread and pass to callback.
    for game in rx {
        on_game(game);
    }

    handle.join().expect("selfplay worker thread panicked");
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        let line = serde_json::to_string(game)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
