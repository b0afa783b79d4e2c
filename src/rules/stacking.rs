//! Single-card legality: stacking, destination acceptance, single moves.

use im::Vector;

use crate::board::Board;
use crate::core::{Card, Location, LocationKind};

/// True if `over` may be placed directly on `under` in a stack:
/// one rank lower and the opposite color.
#[must_use]
pub fn is_stackable(over: Card, under: Card) -> bool {
    over.rank() + 1 == under.rank() && over.color() != under.color()
}

/// Whether a pile of `kind` holding `dest` (top first) accepts `card`.
///
/// - cell: only when empty
/// - foundation: an Ace when empty, otherwise the next rank of the same suit
/// - stack: anything when empty, otherwise a card stackable on the top
#[must_use]
pub fn can_accept_card(card: Card, kind: LocationKind, dest: &Vector<Card>) -> bool {
    match (kind, dest.front()) {
        (LocationKind::Cell, top) => top.is_none(),
        (LocationKind::Foundation, None) => card.rank() == 1,
        (LocationKind::Foundation, Some(top)) => card.suit() == top.suit() && card.rank() == top.rank() + 1,
        (LocationKind::Stack, None) => true,
        (LocationKind::Stack, Some(&top)) => is_stackable(card, top),
    }
}

/// Whether the top card of `src` may move onto `dst` on its own.
///
/// Cards never leave a foundation. Panics if either location is out of range.
#[must_use]
pub fn can_move_single(board: &Board, src: Location, dst: Location) -> bool {
    src.assert_valid();
    dst.assert_valid();
    if src.kind() == LocationKind::Foundation {
        return false;
    }
    match board.top(src) {
        Some(card) => can_accept_card(card, dst.kind(), board.pile(dst)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str) -> Card {
        text.parse().unwrap()
    }

    fn pile(cards: &[&str]) -> Vector<Card> {
        cards.iter().map(|t| c(t)).collect()
    }

    #[test]
    fn test_is_stackable() {
        assert!(is_stackable(c("5H"), c("6S")));
        assert!(is_stackable(c("QC"), c("KD")));
        assert!(!is_stackable(c("5H"), c("6D")), "same color");
        assert!(!is_stackable(c("5H"), c("7S")), "rank gap");
        assert!(!is_stackable(c("6S"), c("5H")), "wrong direction");
        assert!(!is_stackable(c("KS"), c("AH")));
    }

    #[test]
    fn test_cell_acceptance() {
        assert!(can_accept_card(c("KH"), LocationKind::Cell, &pile(&[])));
        assert!(!can_accept_card(c("KH"), LocationKind::Cell, &pile(&["2C"])));
    }

    #[test]
    fn test_foundation_acceptance() {
        let empty = pile(&[]);
        assert!(can_accept_card(c("AS"), LocationKind::Foundation, &empty));
        assert!(!can_accept_card(c("2S"), LocationKind::Foundation, &empty));

        let clubs = pile(&["5C", "4C", "3C", "2C", "AC"]);
        assert!(can_accept_card(c("6C"), LocationKind::Foundation, &clubs));
        assert!(!can_accept_card(c("6S"), LocationKind::Foundation, &clubs));
        assert!(!can_accept_card(c("7C"), LocationKind::Foundation, &clubs));
        assert!(!can_accept_card(c("5C"), LocationKind::Foundation, &clubs));
    }

    #[test]
    fn test_stack_acceptance() {
        assert!(can_accept_card(c("KH"), LocationKind::Stack, &pile(&[])));
        assert!(can_accept_card(c("8D"), LocationKind::Stack, &pile(&["9C", "3H"])));
        assert!(!can_accept_card(c("8S"), LocationKind::Stack, &pile(&["9C"])));
    }

    #[test]
    fn test_can_move_single() {
        let board = Board::empty()
            .with_pile(Location::stack(0), [c("8D"), c("4S")])
            .with_pile(Location::stack(1), [c("9C")])
            .with_pile(Location::foundation(0), [c("AH")])
            .with_pile(Location::cell(0), [c("2H")]);

        assert!(can_move_single(&board, Location::stack(0), Location::stack(1)));
        assert!(can_move_single(&board, Location::stack(0), Location::cell(1)));
        assert!(!can_move_single(&board, Location::stack(0), Location::cell(0)));
        assert!(can_move_single(&board, Location::cell(0), Location::foundation(0)));

        // Empty source
        assert!(!can_move_single(&board, Location::stack(5), Location::stack(6)));

        // Foundations are terminal
        assert!(!can_move_single(&board, Location::foundation(0), Location::cell(1)));
        assert!(!can_move_single(&board, Location::foundation(0), Location::stack(5)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_can_move_single_rejects_bad_foundation_src() {
        let _ = can_move_single(&Board::empty(), Location::foundation(9), Location::stack(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_can_move_single_rejects_bad_dst_from_empty_src() {
        let _ = can_move_single(&Board::empty(), Location::stack(0), Location::stack(200));
    }
}
