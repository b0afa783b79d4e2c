//! Game session built on the pure rules.
//!
//! `FreeCellGame` is a convenience for hosts that want one object holding
//! the current board; everything it does is available as free functions in
//! [`crate::rules`].

mod session;

pub use session::{FreeCellGame, MoveError, MoveOutcome};
