//! Board model: the sixteen piles of a FreeCell game.
//!
//! ## Key Types
//!
//! - `Board`: immutable snapshot mapping each `Location` to its cards
//! - `BoardError`: a violation of the one-of-each-card invariant
//!
//! Boards are created by [`Board::deal`] (or [`Board::empty`] plus
//! [`Board::with_pile`] for set positions) and are only ever replaced by the
//! functions in [`crate::rules`].

pub mod state;
mod deal;

pub use state::{Board, BoardError};
