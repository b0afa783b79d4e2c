//! Terminal-state detection.

use crate::board::Board;
use crate::core::{LocationKind, KING};

/// True when every foundation is topped by a King.
///
/// Foundations only ever grow Ace-first by one rank of a single suit, so a
/// King on top means the suit is complete.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    LocationKind::Foundation
        .locations()
        .all(|f| board.top(f).is_some_and(|top| top.rank() == KING))
}
