//! Checkers-Rust: a minimal checkers rules engine.
//!
//! The binary wraps the library's click-driven rules core.
//!
//! ## Usage
//!
//! - `checkers-rust` - Show a demo
//! - `checkers-rust serve` - Start the text protocol server for GUI front ends
//! - `checkers-rust demo` - Run the demo

use anyhow::Result;
use clap::{Parser, Subcommand};

use checkers_rust::board::is_dark;
use checkers_rust::constants::{MAX_GAME_LEN, SETUP_ROWS};
use checkers_rust::game::{Game, str_tile};
use checkers_rust::playout::playout;
use checkers_rust::protocol::ProtocolEngine;

/// Checkers-Rust: a minimal checkers rules engine
#[derive(Parser)]
#[command(name = "checkers-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use with GUI applications
    Serve,
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => {
            // Run protocol server
            let mut engine = ProtocolEngine::new();
            engine.run()?;
        }
        Some(Commands::Demo) | None => {
            // Run demo
            run_demo();
        }
    }
    Ok(())
}

fn run_demo() {
    println!("Checkers-Rust: Minimal Checkers Rules Engine\n");

    // Demo 1: a scripted opening step, click by click
    println!("=== Click Demo ===");
    let mut game = Game::new();
    println!("{}", game.board());

    let front = SETUP_ROWS - 1;
    let col = if is_dark(front, 1) { 1 } else { 2 };
    for tile in [(front, col), (front + 1, col + 1)] {
        let outcome = game.handle_click(tile.0, tile.1);
        println!("click {}: {outcome}", str_tile(tile));
    }
    println!("\n{}", game.board());

    // Demo 2: a random exhibition game
    println!("=== Exhibition Demo ===");
    let mut game = Game::new();
    let stats = playout(&mut game, MAX_GAME_LEN);
    println!(
        "Played {} plies; captures: light {}, dark {}",
        stats.plies, stats.captures_by_light, stats.captures_by_dark
    );
    println!("{} to move in the final position:", game.side_to_move());
    println!("{}", game.board());
}
