//! The board snapshot: sixteen piles of cards.
//!
//! Each pile is an `im::Vector<Card>` with the *front* (index 0) as the top
//! card, the end cards are added to and removed from. Cloning a board is O(1)
//! and shares structure, so rule functions can take `&Board` and return a new
//! `Board` without ever touching the caller's value.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{make_deck, Card, Location, LocationKind, CELL_COUNT, FOUNDATION_COUNT, STACK_COUNT};

/// Immutable-by-convention board value.
///
/// Public mutation is limited to [`Board::with_pile`], which consumes the
/// board; every rule returns a fresh value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Vector<Card>; CELL_COUNT],
    foundations: [Vector<Card>; FOUNDATION_COUNT],
    stacks: [Vector<Card>; STACK_COUNT],
}

impl Board {
    /// Board with all sixteen piles empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the contents of one pile, listing cards top (front) first.
    ///
    /// Used to set up positions; the result may not hold a full deck.
    ///
    /// Panics if `location` is out of range.
    #[must_use]
    pub fn with_pile(mut self, location: Location, cards: impl IntoIterator<Item = Card>) -> Self {
        *self.pile_mut(location) = cards.into_iter().collect();
        self
    }

    /// Cards at a location, top first.
    ///
    /// Panics if `location` is out of range.
    #[must_use]
    pub fn pile(&self, location: Location) -> &Vector<Card> {
        location.assert_valid();
        let i = location.index();
        match location.kind() {
            LocationKind::Cell => &self.cells[i],
            LocationKind::Foundation => &self.foundations[i],
            LocationKind::Stack => &self.stacks[i],
        }
    }

    pub(crate) fn pile_mut(&mut self, location: Location) -> &mut Vector<Card> {
        location.assert_valid();
        let i = location.index();
        match location.kind() {
            LocationKind::Cell => &mut self.cells[i],
            LocationKind::Foundation => &mut self.foundations[i],
            LocationKind::Stack => &mut self.stacks[i],
        }
    }

    /// Top card at a location, if any.
    #[must_use]
    pub fn top(&self, location: Location) -> Option<Card> {
        self.pile(location).front().copied()
    }

    /// Number of cards at a location.
    #[must_use]
    pub fn len(&self, location: Location) -> usize {
        self.pile(location).len()
    }

    #[must_use]
    pub fn is_empty(&self, location: Location) -> bool {
        self.pile(location).is_empty()
    }

    /// Empty cells, ascending.
    pub fn free_cells(&self) -> impl Iterator<Item = Location> + '_ {
        LocationKind::Cell.locations().filter(move |&l| self.is_empty(l))
    }

    /// Empty stacks, ascending.
    pub fn free_stacks(&self) -> impl Iterator<Item = Location> + '_ {
        LocationKind::Stack.locations().filter(move |&l| self.is_empty(l))
    }

    /// Every card on the board with its location.
    pub fn cards(&self) -> impl Iterator<Item = (Location, Card)> + '_ {
        Location::all().flat_map(move |l| self.pile(l).iter().map(move |&c| (l, c)))
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        Location::all().map(|l| self.len(l)).sum()
    }

    /// Check that the board holds exactly one of each of the 52 cards.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = FxHashSet::default();
        for (_, card) in self.cards() {
            if !seen.insert(card) {
                return Err(BoardError::DuplicateCard(card));
            }
        }

        match make_deck().into_iter().find(|card| !seen.contains(card)) {
            Some(card) => Err(BoardError::MissingCard(card)),
            None => Ok(()),
        }
    }
}

fn write_slot(f: &mut std::fmt::Formatter<'_>, card: Option<Card>) -> std::fmt::Result {
    match card {
        Some(card) => write!(f, "[{card}]"),
        None => write!(f, "[..]"),
    }
}

impl std::fmt::Display for Board {
    /// Cells and foundation tops on the first line, then one line per stack
    /// listed bottom to top.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in LocationKind::Cell.locations() {
            write_slot(f, self.top(cell))?;
        }
        write!(f, "  ")?;
        for foundation in LocationKind::Foundation.locations() {
            write_slot(f, self.top(foundation))?;
        }
        writeln!(f)?;

        for stack in LocationKind::Stack.locations() {
            write!(f, "{}:", stack.index())?;
            for card in self.pile(stack).iter().rev() {
                write!(f, " {card}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A board that breaks the 52-card invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A card of the deck is on no pile.
    MissingCard(Card),
    /// A card appears more than once.
    DuplicateCard(Card),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::MissingCard(card) => write!(f, "card {card} is missing from the board"),
            BoardError::DuplicateCard(card) => write!(f, "card {card} appears more than once"),
        }
    }
}

impl std::error::Error for BoardError {}
