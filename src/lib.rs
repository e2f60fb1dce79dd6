//! Checkers-Rust: A minimal two-player checkers rules engine.
//!
//! This crate provides the rules core of a click-driven checkers game:
//! board state, move and capture legality, selection and turn handling, and
//! king promotion. Rendering and pointer handling stay in the front end,
//! which reports discrete tile clicks and redraws from the query surface.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine parameters
//! - [`board`] - Board state storage (grid, placement, relocation, capture)
//! - [`game`] - Core rules logic (selection, legality, promotion)
//! - [`playout`] - Random exhibition games for smoke demos
//! - [`protocol`] - Text protocol for GUI front ends
//!
//! ## Example
//!
//! ```
//! use checkers_rust::game::{ClickOutcome, Game};
//!
//! // Create a new game; Light moves first
//! let mut game = Game::new();
//!
//! // Click a Light piece, then an empty diagonal neighbor
//! let selected = game.handle_click(2, 1);
//! assert!(matches!(selected, ClickOutcome::Selected(_)));
//!
//! let moved = game.handle_click(3, 2);
//! assert!(matches!(moved, ClickOutcome::Moved { .. }));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod playout;
pub mod protocol;
