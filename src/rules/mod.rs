//! FreeCell rules as pure functions over [`Board`](crate::board::Board).
//!
//! Queries (`is_stackable`, `can_move`, `num_movable`, `is_won`) never fail:
//! an illegal move is reported as `false` or `0`. Transitions (`move_cards`,
//! `auto_move`) take `&Board` and return a new board.
//!
//! ## Modules
//!
//! - `stacking`: single-card acceptance rules
//! - `execute`: the unchecked move primitive
//! - `supermove`: multi-card move counting
//! - `autoplay`: safe promotion to foundations
//! - `win`: terminal-state check

pub mod stacking;
pub mod execute;
pub mod supermove;
pub mod autoplay;
pub mod win;

pub use stacking::{can_accept_card, can_move_single, is_stackable};
pub use execute::{move_cards, Move};
pub use supermove::{can_move, num_movable};
pub use autoplay::{auto_move, auto_move_traced, foundation_for, min_rank_in_play, NONE_IN_PLAY};
pub use win::is_won;
