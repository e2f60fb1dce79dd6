//! Random exhibition games.
//!
//! An exhibition playout picks a uniformly random legal action for the side
//! to move and feeds it through the normal click path, ply after ply, until
//! the side to move has nothing to play or a ply cap is reached. It exists
//! for smoke demos and invariant tests; it evaluates nothing and is not an
//! opponent.

use crate::board::Side;
use crate::game::{ClickOutcome, Game};

/// What happened over one exhibition playout.
#[derive(Debug, Default)]
pub struct PlayoutStats {
    /// Plies actually played
    pub plies: usize,
    /// Pieces taken by Light
    pub captures_by_light: usize,
    /// Pieces taken by Dark
    pub captures_by_dark: usize,
}

/// Play random legal actions until the side to move is stuck or `max_plies`
/// is reached.
///
/// Each ply is applied as two clicks (select, then destination), so the
/// playout exercises exactly the path a front end drives. Uses the thread's
/// `fastrand` generator; seed it with `fastrand::seed` for reproducibility.
pub fn playout(game: &mut Game, max_plies: usize) -> PlayoutStats {
    let mut stats = PlayoutStats::default();

    while stats.plies < max_plies {
        let side = game.side_to_move();
        let actions = game.actions_for(side);
        if actions.is_empty() {
            break;
        }

        let action = actions[fastrand::usize(..actions.len())];
        let selected = game.handle_click(action.from.0, action.from.1);
        debug_assert!(matches!(selected, ClickOutcome::Selected(_)));

        let outcome = game.handle_click(action.to.0, action.to.1);
        debug_assert!(!matches!(
            outcome,
            ClickOutcome::Deselected | ClickOutcome::Ignored
        ));

        if matches!(outcome, ClickOutcome::Captured { .. }) {
            match side {
                Side::Light => stats.captures_by_light += 1,
                Side::Dark => stats.captures_by_dark += 1,
            }
        }
        stats.plies += 1;
    }

    stats
}
