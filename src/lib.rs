//! # freecell-engine
//!
//! A rules engine for FreeCell solitaire: deck and board model, move
//! legality, multi-card supermoves, safe auto-play and win detection.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every rule takes a `&Board` and returns a value or
//!    a new `Board`. Nothing mutates its input and there is no global state.
//!
//! 2. **Total Queries**: Illegal moves are `false` or `0`, not errors.
//!    Only caller misuse (out-of-range locations, moving more cards than a
//!    pile holds) panics.
//!
//! 3. **Reproducible Deals**: Shuffling goes through a seedable `GameRng`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: piles are `im::Vector`s, so a board
//!   clone is O(1). Supermove exploration works on a scratch copy.
//!
//! ## Modules
//!
//! - `core`: cards, locations, RNG, configuration
//! - `board`: the board snapshot and dealing
//! - `rules`: stacking, move execution, supermoves, auto-play, win check
//! - `game`: a session object running the move / auto-play / win cycle
//!
//! ## Example
//!
//! ```
//! use freecell_engine::{rules, Board, Location};
//!
//! let board = Board::deal_seeded(42);
//! let src = Location::stack(0);
//! let dst = Location::cell(0);
//!
//! let n = rules::num_movable(&board, src, dst);
//! assert_eq!(n, 1);
//!
//! let next = rules::auto_move(&rules::move_cards(&board, src, dst, n));
//! assert_eq!(next.validate(), Ok(()));
//! assert!(!rules::is_won(&next));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    color_of, make_deck,
    Card, Color, Suit, ParseCardError,
    Location, LocationKind, LocationError,
    GameRng, GameConfig,
};

pub use crate::board::{Board, BoardError};

pub use crate::rules::{
    is_stackable, can_accept_card, can_move_single,
    move_cards, Move,
    can_move, num_movable,
    auto_move, auto_move_traced, min_rank_in_play,
    is_won,
};

pub use crate::game::{FreeCellGame, MoveError, MoveOutcome};
