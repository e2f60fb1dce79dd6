//! Constants for board dimensions and exhibition parameters.
//!
//! This module contains all the configuration constants for the checkers
//! engine. The board is always square with play confined to the dark
//! squares; everything below derives from the side length `N`.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board8x8` (default): 8x8 board, English/American layout
//! - `board10x10`: 10x10 board, international layout
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                           # 8x8 (default)
//! cargo build --no-default-features --features board10x10  # 10x10
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Standard checkers sizes are 8 or 10.
#[cfg(feature = "board8x8")]
pub const N: usize = 8;

#[cfg(feature = "board10x10")]
pub const N: usize = 10;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board8x8", feature = "board10x10"))]
compile_error!("Cannot enable both 'board8x8' and 'board10x10' features at the same time");

#[cfg(not(any(feature = "board8x8", feature = "board10x10")))]
compile_error!("Must enable exactly one board size feature: 'board8x8' or 'board10x10'");

/// Rows initially filled with pieces on each side of the board.
#[cfg(feature = "board8x8")]
pub const SETUP_ROWS: usize = 3;

#[cfg(feature = "board10x10")]
pub const SETUP_ROWS: usize = 4;

/// Pieces each side starts with: one per dark square in its setup rows.
pub const PIECES_PER_SIDE: usize = SETUP_ROWS * N / 2;

/// Maximum exhibition length in plies (3 times board area).
pub const MAX_GAME_LEN: usize = N * N * 3;

// =============================================================================
// Movement Offsets
// =============================================================================

/// The four diagonal step offsets as (row, col) deltas.
/// Order: NW, NE, SW, SE. All movement is diagonal; a jump is the same
/// offset doubled.
pub const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
