//! Move execution: the unchecked relocation primitive.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Location;

/// A relocation of `count` top cards from `src` to `dst`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub src: Location,
    pub dst: Location,
    pub count: usize,
}

impl Move {
    #[must_use]
    pub const fn new(src: Location, dst: Location, count: usize) -> Self {
        Self { src, dst, count }
    }

    /// Apply this move with [`move_cards`].
    #[must_use]
    pub fn apply(&self, board: &Board) -> Board {
        move_cards(board, self.src, self.dst, self.count)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} card(s) {} -> {}", self.count, self.src, self.dst)
    }
}

/// Take the top `n` cards of `src` and put them, in the same order, on top
/// of `dst`. Returns a new board; `board` is untouched.
///
/// Legality is not checked here. Panics if `src` holds fewer than `n` cards
/// or either location is out of range.
#[must_use]
pub fn move_cards(board: &Board, src: Location, dst: Location, n: usize) -> Board {
    let available = board.len(src);
    assert!(
        n <= available,
        "cannot move {n} card(s) from {src}: only {available} present"
    );

    let mut next = board.clone();
    let mut moved = board.pile(src).clone();
    *next.pile_mut(src) = moved.split_off(n);

    moved.append(next.pile(dst).clone());
    *next.pile_mut(dst) = moved;
    next
}
