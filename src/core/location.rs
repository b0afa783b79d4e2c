//! Location addressing for the sixteen piles on a FreeCell board.
//!
//! A `Location` is a pile kind plus an index. Any index can be constructed,
//! but only `0..kind.count()` is valid; board accessors check this and panic
//! on misuse, while [`Location::checked`] and [`Location::validate`] let
//! callers test an address without panicking.
//!
//! ```
//! use freecell_engine::core::{Location, LocationKind};
//!
//! assert!(Location::stack(7).validate().is_ok());
//! assert!(Location::cell(4).validate().is_err());
//! assert_eq!(Location::all().count(), 16);
//! assert_eq!(LocationKind::Stack.count(), 8);
//! ```

use serde::{Deserialize, Serialize};

/// Number of free cells.
pub const CELL_COUNT: usize = 4;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau stacks.
pub const STACK_COUNT: usize = 8;

/// Total number of piles on a board.
pub const LOCATION_COUNT: usize = CELL_COUNT + FOUNDATION_COUNT + STACK_COUNT;

/// Kind of pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    /// Single-card holding spot.
    Cell,
    /// Per-suit, Ace-first destination.
    Foundation,
    /// Tableau column.
    Stack,
}

impl LocationKind {
    /// All kinds in enumeration order.
    pub const ALL: [LocationKind; 3] = [LocationKind::Cell, LocationKind::Foundation, LocationKind::Stack];

    /// How many piles of this kind a board has.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            LocationKind::Cell => CELL_COUNT,
            LocationKind::Foundation => FOUNDATION_COUNT,
            LocationKind::Stack => STACK_COUNT,
        }
    }

    /// Iterate over the valid locations of this kind, ascending.
    pub fn locations(self) -> impl Iterator<Item = Location> {
        (0..self.count() as u8).map(move |index| Location { kind: self, index })
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKind::Cell => write!(f, "cell"),
            LocationKind::Foundation => write!(f, "foundation"),
            LocationKind::Stack => write!(f, "stack"),
        }
    }
}

/// Address of a pile: kind plus index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    kind: LocationKind,
    index: u8,
}

impl Location {
    /// Create a location without checking the index.
    #[must_use]
    pub const fn new(kind: LocationKind, index: u8) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub const fn cell(index: u8) -> Self {
        Self::new(LocationKind::Cell, index)
    }

    #[must_use]
    pub const fn foundation(index: u8) -> Self {
        Self::new(LocationKind::Foundation, index)
    }

    #[must_use]
    pub const fn stack(index: u8) -> Self {
        Self::new(LocationKind::Stack, index)
    }

    /// Create a location, rejecting an out-of-range index.
    pub fn checked(kind: LocationKind, index: u8) -> Result<Self, LocationError> {
        let location = Self::new(kind, index);
        location.validate()?;
        Ok(location)
    }

    #[must_use]
    pub const fn kind(self) -> LocationKind {
        self.kind
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < self.kind.count()
    }

    /// Check that the index is in range for the kind.
    pub fn validate(self) -> Result<(), LocationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(LocationError::OutOfRange(self))
        }
    }

    /// Panic with the [`LocationError`] message if the index is out of range.
    pub(crate) fn assert_valid(self) {
        if let Err(err) = self.validate() {
            panic!("{err}");
        }
    }

    /// All sixteen locations: cells, then foundations, then stacks.
    pub fn all() -> impl Iterator<Item = Location> {
        LocationKind::ALL.into_iter().flat_map(LocationKind::locations)
    }

    /// Cells then stacks: the piles whose cards are still in play.
    pub fn in_play() -> impl Iterator<Item = Location> {
        LocationKind::Cell
            .locations()
            .chain(LocationKind::Stack.locations())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// Invalid location address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationError {
    /// Index is not below the kind's pile count.
    OutOfRange(Location),
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::OutOfRange(location) => write!(
                f,
                "{} is out of range (a board has {} {} piles)",
                location,
                location.kind().count(),
                location.kind()
            ),
        }
    }
}

impl std::error::Error for LocationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(LocationKind::Cell.count(), 4);
        assert_eq!(LocationKind::Foundation.count(), 4);
        assert_eq!(LocationKind::Stack.count(), 8);
        assert_eq!(LOCATION_COUNT, 16);
    }

    #[test]
    fn test_all_order() {
        let all: Vec<_> = Location::all().collect();
        assert_eq!(all.len(), LOCATION_COUNT);
        assert_eq!(all[0], Location::cell(0));
        assert_eq!(all[4], Location::foundation(0));
        assert_eq!(all[8], Location::stack(0));
        assert_eq!(all[15], Location::stack(7));
        assert!(all.iter().all(|l| l.is_valid()));
    }

    #[test]
    fn test_in_play_skips_foundations() {
        let in_play: Vec<_> = Location::in_play().collect();
        assert_eq!(in_play.len(), CELL_COUNT + STACK_COUNT);
        assert!(in_play.iter().all(|l| l.kind() != LocationKind::Foundation));
        assert_eq!(in_play[3], Location::cell(3));
        assert_eq!(in_play[4], Location::stack(0));
    }

    #[test]
    fn test_checked() {
        assert_eq!(Location::checked(LocationKind::Stack, 7), Ok(Location::stack(7)));
        assert_eq!(
            Location::checked(LocationKind::Cell, 4),
            Err(LocationError::OutOfRange(Location::cell(4)))
        );
        assert!(Location::foundation(200).validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::stack(3).to_string(), "stack 3");
        let err = Location::cell(9).validate().unwrap_err();
        assert_eq!(err.to_string(), "cell 9 is out of range (a board has 4 cell piles)");
    }
}
