//! Text protocol for driving the engine from a GUI front end.
//!
//! The protocol is line-based over stdin/stdout. A front end translates
//! pointer input into tile clicks, sends them as commands, and redraws from
//! the query commands after each response. Responses are prefixed with `=`
//! on success and `?` on failure, and echo an optional numeric command ID.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Set board size (only the compiled size is accepted)
//! - `new_game` - Reset to the starting position, Light to move
//! - `click <tile>` - Report a clicked tile (e.g. `click b3`); the response
//!   is the resulting selection, move, capture, or deselection
//! - `moves <tile>` - List the legal actions of the piece on a tile
//! - `show` - Print the board
//! - `turn` - Return the side to move
//!
//! ## Example
//!
//! ```ignore
//! use checkers_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::constants::N;
use crate::game::{Game, parse_tile, str_tile};

/// The list of known protocol commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "click",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new_game",
    "protocol_version",
    "quit",
    "show",
    "turn",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    /// Current game session
    game: Game,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    /// Create a protocol engine over a fresh game.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            // Execute command
            let (success, message) = self.execute(&command, args);

            // Format and send response
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(stdout, "\n{prefix}{id_str} {message}\n")?;
            stdout.flush()?;

            // Quit if requested
            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let mut chars = trimmed.char_indices();

        // Check if line starts with a digit
        if let Some((_, c)) = chars.next() {
            if c.is_ascii_digit() {
                // Find end of number
                let end = chars
                    .find(|(_, c)| !c.is_ascii_digit())
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());

                if let Ok(id) = trimmed[..end].parse::<u32>() {
                    return (Some(id), trimmed[end..].trim());
                }
            }
        }

        (None, trimmed)
    }

    /// Execute a protocol command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "checkers-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => {
                let commands = KNOWN_COMMANDS.join("\n");
                (true, commands)
            }

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "new_game" => {
                self.game.reset();
                (true, String::new())
            }

            "click" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match parse_tile(args[0]) {
                    Some((row, col)) => {
                        let outcome = self.game.handle_click(row, col);
                        (true, outcome.to_string())
                    }
                    None => (false, format!("invalid tile: {}", args[0])),
                }
            }

            "moves" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match parse_tile(args[0]) {
                    Some(tile) => {
                        let actions: Vec<String> = self
                            .game
                            .moves_from(tile)
                            .iter()
                            .map(|a| {
                                let sep = if a.capture.is_some() { 'x' } else { '-' };
                                format!("{}{sep}{}", str_tile(a.from), str_tile(a.to))
                            })
                            .collect();
                        (true, actions.join(" "))
                    }
                    None => (false, format!("invalid tile: {}", args[0])),
                }
            }

            "show" => (true, format!("\n{}", self.game.board())),

            "turn" => (true, self.game.side_to_move().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
