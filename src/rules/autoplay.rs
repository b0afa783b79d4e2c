//! Safe auto-play: promoting cards to foundations without stranding play.
//!
//! A card of rank R and color C is promoted only when every opposite-color
//! card still in a cell or stack has rank at least R, so nothing could later
//! need to be built on it. Twos are always safe.

use log::trace;

use super::execute::{move_cards, Move};
use super::stacking::can_accept_card;
use crate::board::Board;
use crate::core::{Card, Color, Location, LocationKind, Suit, KING};

/// Returned by [`min_rank_in_play`] when no card of the color is in play.
pub const NONE_IN_PLAY: u8 = KING + 1;

/// Rank at or below which a card is always safe to promote.
const ALWAYS_SAFE_RANK: u8 = 2;

/// Lowest rank of `color` still in a cell or stack, or [`NONE_IN_PLAY`].
#[must_use]
pub fn min_rank_in_play(board: &Board, color: Color) -> u8 {
    Location::in_play()
        .flat_map(move |l| board.pile(l).iter().copied())
        .filter(|card| card.color() == color)
        .map(Card::rank)
        .min()
        .unwrap_or(NONE_IN_PLAY)
}

/// Foundation that takes `suit`: the one already holding it, else the first
/// empty one.
#[must_use]
pub fn foundation_for(board: &Board, suit: Suit) -> Option<Location> {
    LocationKind::Foundation
        .locations()
        .find(|&f| board.top(f).is_some_and(|top| top.suit() == suit))
        .or_else(|| LocationKind::Foundation.locations().find(|&f| board.is_empty(f)))
}

/// Foundation `card` can be promoted to right now, if it is accepted there
/// and safe to play.
fn safe_destination(board: &Board, card: Card) -> Option<Location> {
    let dest = foundation_for(board, card.suit())?;
    if !can_accept_card(card, LocationKind::Foundation, board.pile(dest)) {
        return None;
    }

    let threshold = min_rank_in_play(board, card.color().opposite()).max(ALWAYS_SAFE_RANK);
    (card.rank() <= threshold).then_some(dest)
}

/// First eligible promotion, scanning cells then stacks in index order.
fn next_promotion(board: &Board) -> Option<Move> {
    Location::in_play().find_map(|src| {
        let card = board.top(src)?;
        safe_destination(board, card).map(|dst| Move::new(src, dst, 1))
    })
}

/// Promote every safe card, restarting the scan after each promotion, and
/// return the final board with the promotions in the order made.
#[must_use]
pub fn auto_move_traced(board: &Board) -> (Board, Vec<Move>) {
    let mut current = board.clone();
    let mut promotions = Vec::new();

    while let Some(mv) = next_promotion(&current) {
        trace!("auto-play {mv}");
        current = move_cards(&current, mv.src, mv.dst, mv.count);
        promotions.push(mv);
    }

    (current, promotions)
}

/// Promote every safe card to the foundations until none is left.
#[must_use]
pub fn auto_move(board: &Board) -> Board {
    auto_move_traced(board).0
}
