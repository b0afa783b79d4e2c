//! Property tests over random play.
//!
//! Random (src, dst) requests are resolved the way a host would: ask how
//! many cards can move, move them, auto-play. The 52-card invariant and the
//! auto-play guarantees must hold after every step.

use freecell_engine::core::{Location, LocationKind};
use freecell_engine::rules::{auto_move, auto_move_traced, min_rank_in_play, move_cards, num_movable};
use freecell_engine::Board;
use proptest::prelude::*;

fn locations() -> Vec<Location> {
    Location::all().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deal_shape(seed in any::<u64>()) {
        let board = Board::deal_seeded(seed);

        prop_assert_eq!(board.validate(), Ok(()));
        prop_assert_eq!(board.free_cells().count(), 4);
        prop_assert!(LocationKind::Foundation.locations().all(|f| board.is_empty(f)));

        let sizes = board.stack_sizes();
        prop_assert_eq!(sizes.iter().sum::<usize>(), 52);
        prop_assert!(sizes.iter().all(|&n| n == 6 || n == 7));
    }

    #[test]
    fn prop_random_play_preserves_deck(
        seed in any::<u64>(),
        picks in prop::collection::vec((0usize..16, 0usize..16), 0..120),
    ) {
        let all = locations();
        let mut board = Board::deal_seeded(seed);

        for (s, d) in picks {
            let (src, dst) = (all[s], all[d]);
            let n = num_movable(&board, src, dst);
            if n == 0 {
                continue;
            }
            prop_assert!(src != dst);

            let before = board.clone();
            let moved = move_cards(&board, src, dst, n);
            prop_assert_eq!(&board, &before);
            prop_assert_eq!(moved.len(src), board.len(src) - n);
            prop_assert_eq!(moved.len(dst), board.len(dst) + n);
            prop_assert_eq!(moved.validate(), Ok(()));

            board = auto_move(&moved);
            prop_assert_eq!(board.validate(), Ok(()));
        }
    }

    #[test]
    fn prop_auto_move_is_safe_and_idempotent(
        seed in any::<u64>(),
        picks in prop::collection::vec((0usize..16, 0usize..16), 0..60),
    ) {
        let all = locations();
        let mut board = Board::deal_seeded(seed);
        for (s, d) in picks {
            let n = num_movable(&board, all[s], all[d]);
            if n > 0 {
                board = move_cards(&board, all[s], all[d], n);
            }
        }

        let (done, promotions) = auto_move_traced(&board);

        // Replay each promotion and check it was safe when made
        let mut step = board.clone();
        for mv in &promotions {
            let card = step.top(mv.src).unwrap();
            prop_assert_eq!(mv.dst.kind(), LocationKind::Foundation);
            let threshold = min_rank_in_play(&step, card.color().opposite()).max(2);
            prop_assert!(card.rank() <= threshold);
            step = move_cards(&step, mv.src, mv.dst, 1);
        }
        prop_assert_eq!(&step, &done);

        prop_assert_eq!(auto_move(&done), done);
    }
}
