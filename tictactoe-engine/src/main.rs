//! Engine-vs-engine demo game.
//!
//! Plays the searcher against itself on either preset board and prints each
//! move. Useful for eyeballing engine behavior and as a smoke test.

use std::env;
use std::process;

use tictactoe_core::{Board, Mark, Outcome};
use tictactoe_engine::{SearchConfig, Searcher};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut config = if args.contains(&"--extended".to_string()) {
        SearchConfig::extended()
    } else {
        SearchConfig::classic()
    };
    if args.contains(&"--no-prune".to_string()) {
        config = config.without_pruning();
    }
    if let Some(idx) = args.iter().position(|a| a == "--depth") {
        match args.get(idx + 1).and_then(|d| d.parse::<u8>().ok()) {
            Some(depth) => config = config.with_depth(depth),
            None => {
                eprintln!("--depth requires a number");
                process::exit(1);
            }
        }
    }

    println!("Tic-Tac-Toe Self-Play");
    println!("=====================");
    println!(
        "Board: {size}x{size}, {win_len} in a row, depth {depth}, pruning {pruning}",
        size = config.size,
        win_len = config.win_len,
        depth = config.max_depth,
        pruning = if config.prune { "on" } else { "off" },
    );
    println!();

    let mut board = Board::new(config.size).expect("preset size is supported");
    let mut searcher = Searcher::new(config).expect("preset configuration is valid");

    let mut side = Mark::Player;
    let mut ply = 0u32;
    let mut total_nodes = 0u64;

    let outcome = loop {
        let outcome = searcher.lines().evaluate(&board);
        if outcome.is_over() {
            break outcome;
        }

        let result = searcher
            .best_move(&mut board, side)
            .expect("ongoing game has legal moves");
        board
            .apply(result.pos, side)
            .expect("search returns a legal move");
        ply += 1;
        total_nodes += searcher.stats().nodes;

        println!(
            "ply {ply}: {mark} plays {pos} (score {score}, {nodes} nodes)",
            mark = side.as_char(),
            pos = result.pos,
            score = result.score,
            nodes = searcher.stats().nodes,
        );
        println!("{board}");

        side = side.opponent();
    };

    match outcome {
        Outcome::Win(mark) => println!("{} wins after {ply} plies", mark.as_char()),
        Outcome::Draw => println!("Draw after {ply} plies"),
        Outcome::Ongoing => unreachable!("loop exits on finished games only"),
    }
    println!("Total nodes searched: {total_nodes}");
}
