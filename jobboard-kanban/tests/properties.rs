//! Property-based tests for sequence reordering and drag reconciliation

use jobboard_kanban::order::{move_in_place, move_item};
use jobboard_kanban::{Card, DragEvent, DropTarget, KanbanBoard};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["Applied", "Interview", "Offer"];

/// A sequence together with two indices inside it
fn sequence_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(any::<u32>(), 1..40).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..len, 0..len)
    })
}

/// Cards with unique ids spread over the fixed categories
fn cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(0..CATEGORIES.len(), 1..20).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, c)| Card::with_id(i.to_string(), format!("Company {i}"), "Role", CATEGORIES[c]))
            .collect()
    })
}

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}

proptest! {
    /// Moving an item to its own index changes nothing
    #[test]
    fn prop_move_to_same_index_is_identity((items, i, _) in sequence_and_indices()) {
        prop_assert_eq!(move_item(&items, i, i), items);
    }

    /// A move keeps every element and puts the moved one at `to`
    #[test]
    fn prop_move_preserves_multiset((items, from, to) in sequence_and_indices()) {
        let moved = move_item(&items, from, to);

        prop_assert_eq!(moved.len(), items.len());
        prop_assert_eq!(sorted(&moved), sorted(&items));
        prop_assert_eq!(moved[to], items[from]);
    }

    /// Out-of-range indices leave the sequence alone
    #[test]
    fn prop_out_of_range_move_is_rejected((items, from, _) in sequence_and_indices()) {
        let mut copy = items.clone();
        prop_assert!(move_in_place(&mut copy, from, items.len()).is_err());
        prop_assert_eq!(copy, items);
    }

    /// Any stream of card drags keeps the set of cards intact and every card
    /// inside a known category
    #[test]
    fn prop_card_drags_preserve_cards(
        seed in cards(),
        hovers in prop::collection::vec((0usize..20, prop::option::of(0usize..23)), 0..30),
    ) {
        let mut board = KanbanBoard::new(CATEGORIES).unwrap().with_cards(seed.clone()).unwrap();
        let original: Vec<String> = seed.iter().map(|c| c.id.to_string()).collect();

        for (active, over) in hovers {
            let active = (active % seed.len()).to_string();
            let over = over.map(|n| {
                if n < 20 {
                    DropTarget::Card((n % seed.len()).to_string().into())
                } else {
                    DropTarget::Column(CATEGORIES[n - 20].into())
                }
            });
            board.dispatch(&DragEvent::start(active.clone()));
            board.dispatch(&DragEvent::over(active.clone(), over.clone()));
            board.dispatch(&DragEvent::end(active, over));
        }

        let cards = board.cards();
        let ids: Vec<String> = cards.iter().map(|c| c.id.to_string()).collect();
        prop_assert_eq!(sorted(&ids), sorted(&original));
        prop_assert!(cards.iter().all(|c| board.is_category(&c.category)));
        prop_assert_eq!(board.columns().len(), CATEGORIES.len());
        prop_assert!(board.session().is_idle());
    }
}
