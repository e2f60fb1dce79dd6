//! Game session and move execution.
//!
//! This module provides the core rules logic for checkers, including:
//! - The click-driven selection state machine
//! - Simple-move and capture legality
//! - King promotion on the far row
//! - Legal-action enumeration for a piece or a whole side
//!
//! A [`Game`] owns the board plus the side-to-move and selection state, so
//! independent sessions are just independent values. The driving front end
//! (text protocol, demo, or a GUI) reports one clicked tile at a time via
//! [`Game::handle_click`] and redraws from the query surface afterwards.
//!
//! Rules deliberately match the simple single-hop game: movement is
//! direction-agnostic even for uncrowned men, captures are never mandatory,
//! jumps never chain, and only a simple move can crown. A crowned piece is a
//! marker with no extra movement rights.

use std::fmt;

use crate::board::{Board, Piece, Side, Tile};
use crate::constants::{DIAGONALS, N};

/// A legal single-hop action available to a piece.
///
/// `capture` names the midpoint tile a jump would clear, `None` for a
/// simple move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub from: Tile,
    pub to: Tile,
    pub capture: Option<Tile>,
}

/// What a single click did to the session.
///
/// An illegal destination is not an error: it folds the selection and waits
/// for the next click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked piece became the selection.
    Selected(Tile),
    /// The selected piece made a simple move; `crowned` reports a promotion
    /// earned by this move.
    Moved { from: Tile, to: Tile, crowned: bool },
    /// The selected piece jumped; the piece on `removed` was taken.
    Captured { from: Tile, to: Tile, removed: Tile },
    /// The click matched no legal action; the selection was dropped.
    Deselected,
    /// No selection was active and the tile held nothing selectable.
    Ignored,
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickOutcome::Selected(t) => write!(f, "selected {}", str_tile(*t)),
            ClickOutcome::Moved { from, to, crowned } => {
                write!(f, "move {} {}", str_tile(*from), str_tile(*to))?;
                if *crowned {
                    write!(f, " crowned")?;
                }
                Ok(())
            }
            ClickOutcome::Captured { from, to, removed } => write!(
                f,
                "capture {} {} removes {}",
                str_tile(*from),
                str_tile(*to),
                str_tile(*removed)
            ),
            ClickOutcome::Deselected => write!(f, "deselected"),
            ClickOutcome::Ignored => write!(f, "ignored"),
        }
    }
}

/// A checkers session: board contents plus turn and selection state.
pub struct Game {
    board: Board,
    to_move: Side,
    selected: Option<Tile>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a session from the standard starting position. Light moves
    /// first.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Side::Light,
            selected: None,
        }
    }

    /// Start a session from an arbitrary position with `to_move` on turn.
    pub fn with_position(board: Board, to_move: Side) -> Self {
        Game {
            board,
            to_move,
            selected: None,
        }
    }

    /// Reset to the starting position and clear all turn/selection state.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn selected(&self) -> Option<Tile> {
        self.selected
    }

    /// Process one clicked tile.
    ///
    /// With no selection active, a click selects a piece of the side to move
    /// and anything else is ignored. With a selection active, the click is
    /// evaluated as a destination: a legal simple move or jump is applied
    /// and the turn passes; any other tile just drops the selection. The
    /// selection never survives the second click, whatever it hit.
    ///
    /// Coordinates must be in `0..N`; the front end owns the mapping from
    /// raw input to tiles, and out-of-range values panic.
    pub fn handle_click(&mut self, row: usize, col: usize) -> ClickOutcome {
        match self.selected.take() {
            None => match self.board.piece_at(row, col) {
                Some(piece) if piece.side == self.to_move => {
                    self.selected = Some((row, col));
                    ClickOutcome::Selected((row, col))
                }
                _ => ClickOutcome::Ignored,
            },
            Some(from) => {
                let to = (row, col);
                if self.is_simple_move(from, to) {
                    self.board.move_piece(from, to);
                    let crowned = self.crown_on_back_row(row, col);
                    self.to_move = self.to_move.opponent();
                    ClickOutcome::Moved { from, to, crowned }
                } else if let Some(removed) = self.capture_midpoint(self.to_move, from, to) {
                    self.board.capture_piece(from, to);
                    self.to_move = self.to_move.opponent();
                    ClickOutcome::Captured { from, to, removed }
                } else {
                    ClickOutcome::Deselected
                }
            }
        }
    }

    /// Legal single-hop actions for the piece on `from`, empty if the tile
    /// holds none. Pure query: ignores whose turn it is.
    pub fn moves_from(&self, from: Tile) -> Vec<Action> {
        let Some(piece) = self.board.piece_at(from.0, from.1) else {
            return Vec::new();
        };
        let side = piece.side;

        let mut actions = Vec::new();
        for (dr, dc) in DIAGONALS {
            if let Some(to) = shift(from, dr, dc) {
                if self.is_simple_move(from, to) {
                    actions.push(Action {
                        from,
                        to,
                        capture: None,
                    });
                }
            }
            if let Some(to) = shift(from, 2 * dr, 2 * dc) {
                if let Some(mid) = self.capture_midpoint(side, from, to) {
                    actions.push(Action {
                        from,
                        to,
                        capture: Some(mid),
                    });
                }
            }
        }
        actions
    }

    /// All actions available to `side`.
    pub fn actions_for(&self, side: Side) -> Vec<Action> {
        let mut actions = Vec::new();
        for piece in self.board.pieces().filter(|p| p.side == side) {
            actions.extend(self.moves_from((piece.row, piece.col)));
        }
        actions
    }

    /// A simple move is one step along both axes onto an empty square.
    fn is_simple_move(&self, from: Tile, to: Tile) -> bool {
        from.0.abs_diff(to.0) == 1 && from.1.abs_diff(to.1) == 1 && self.board.is_empty(to.0, to.1)
    }

    /// A capture is two steps along both axes onto an empty square, over a
    /// midpoint held by the opponent of `side`. Returns the midpoint tile.
    fn capture_midpoint(&self, side: Side, from: Tile, to: Tile) -> Option<Tile> {
        if from.0.abs_diff(to.0) != 2 || from.1.abs_diff(to.1) != 2 {
            return None;
        }
        if !self.board.is_empty(to.0, to.1) {
            return None;
        }
        let mid = ((from.0 + to.0) / 2, (from.1 + to.1) / 2);
        let jumped = self.board.piece_at(mid.0, mid.1)?;
        (jumped.side != side).then_some(mid)
    }

    /// Crown the piece on (row, col) if it reached either back row and is
    /// not already crowned. Returns whether a crown was granted. Only called
    /// after a simple move; captures do not crown.
    fn crown_on_back_row(&mut self, row: usize, col: usize) -> bool {
        if row != 0 && row != N - 1 {
            return false;
        }
        match self.board.piece_at_mut(row, col) {
            Some(piece) if !piece.crowned => {
                piece.crowned = true;
                true
            }
            _ => false,
        }
    }
}

/// Offset a tile by a signed delta, `None` if it leaves the board.
fn shift(tile: Tile, dr: isize, dc: isize) -> Option<Tile> {
    let row = tile.0.checked_add_signed(dr)?;
    let col = tile.1.checked_add_signed(dc)?;
    (row < N && col < N).then_some((row, col))
}

/// Parse a tile in algebraic notation (e.g. "c3") into (row, col).
///
/// Columns are letters from `a` at the left; ranks are numbers from `1` at
/// the top row, matching the board's row order. Returns `None` for anything
/// that does not name a tile on this board.
pub fn parse_tile(s: &str) -> Option<Tile> {
    let s = s.trim().as_bytes();
    if s.len() < 2 || !s[0].is_ascii_alphabetic() {
        return None;
    }

    let col = (s[0].to_ascii_lowercase() - b'a') as usize;
    if !s[1..].iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rank: usize = s[1..]
        .iter()
        .fold(0, |acc, &b| acc * 10 + (b - b'0') as usize);
    if rank == 0 {
        return None;
    }

    let row = rank - 1;
    (row < N && col < N).then_some((row, col))
}

/// Format a tile as algebraic notation (e.g. "c3").
pub fn str_tile(tile: Tile) -> String {
    format!("{}{}", (b'a' + tile.1 as u8) as char, tile.0 + 1)
}
