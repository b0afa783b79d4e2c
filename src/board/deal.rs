//! Dealing a fresh game.

use log::debug;

use super::state::Board;
use crate::core::{make_deck, GameRng, Location, LocationKind, STACK_COUNT};

impl Board {
    /// Shuffle a deck with `rng` and deal it round-robin onto the stacks.
    ///
    /// Card `i` of the shuffled deck goes to stack `i % 8`. Each new card is
    /// placed on top, so the first card dealt to a stack ends at its bottom.
    /// Stacks 0-3 receive 7 cards and stacks 4-7 receive 6.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut deck = make_deck();
        rng.shuffle(&mut deck);

        let mut board = Board::empty();
        for (i, card) in deck.into_iter().enumerate() {
            board.pile_mut(Location::stack((i % STACK_COUNT) as u8)).push_front(card);
        }

        debug!("dealt board from seed {}", rng.seed());
        board
    }

    /// Deal reproducibly from a seed.
    #[must_use]
    pub fn deal_seeded(seed: u64) -> Self {
        Self::deal(&mut GameRng::new(seed))
    }

    /// Deal from an OS-random seed.
    #[must_use]
    pub fn deal_random() -> Self {
        Self::deal(&mut GameRng::from_entropy())
    }

    /// Stack sizes, for quick inspection of a deal.
    #[must_use]
    pub fn stack_sizes(&self) -> [usize; STACK_COUNT] {
        let mut sizes = [0; STACK_COUNT];
        for (size, stack) in sizes.iter_mut().zip(LocationKind::Stack.locations()) {
            *size = self.len(stack);
        }
        sizes
    }
}
