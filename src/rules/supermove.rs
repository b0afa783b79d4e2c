//! Supermoves: how many cards one player action can carry.
//!
//! A run of alternating, descending cards can move as a unit when each card
//! above the bottom one can be parked in a free cell or free stack on the
//! way. The count is found by simulating that parking on a scratch copy of
//! the board, one card at a time, and remembering the deepest point at which
//! the exposed card can land on the destination.

use smallvec::SmallVec;

use super::execute::move_cards;
use super::stacking::{can_move_single, is_stackable};
use crate::board::Board;
use crate::core::{Location, LocationKind};

/// Empty cells then empty stacks, excluding `src` and `dst`.
fn holding_spots(board: &Board, src: Location, dst: Location) -> SmallVec<[Location; 12]> {
    board
        .free_cells()
        .chain(board.free_stacks())
        .filter(|&l| l != src && l != dst)
        .collect()
}

/// Whether the top two cards of `src` form a run (top stackable on second).
fn top_pair_is_run(board: &Board, src: Location) -> bool {
    let pile = board.pile(src);
    match (pile.get(0), pile.get(1)) {
        (Some(&top), Some(&second)) => is_stackable(top, second),
        _ => false,
    }
}

/// Maximum number of cards that can move from `src` to `dst` as one action.
///
/// Returns 0 when no legal move exists, not even a single card. Multi-card
/// moves are only considered stack to stack, and only carry one run.
///
/// Panics if either location is out of range.
#[must_use]
pub fn num_movable(board: &Board, src: Location, dst: Location) -> usize {
    src.assert_valid();
    dst.assert_valid();
    let both_stacks = src.kind() == LocationKind::Stack && dst.kind() == LocationKind::Stack;

    let mut scratch = board.clone();
    let mut parked = 0;
    let mut best = 0;

    loop {
        if can_move_single(&scratch, src, dst) {
            best = parked + 1;
        }

        if !both_stacks || !top_pair_is_run(&scratch, src) {
            break;
        }
        let Some(&spot) = holding_spots(&scratch, src, dst).first() else {
            break;
        };

        scratch = move_cards(&scratch, src, spot, 1);
        parked += 1;
    }

    best
}

/// Whether at least one card can legally move from `src` to `dst`.
#[must_use]
pub fn can_move(board: &Board, src: Location, dst: Location) -> bool {
    num_movable(board, src, dst) > 0
}
