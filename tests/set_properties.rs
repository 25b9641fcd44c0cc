use hotpot::cards::{Card, Category, Ingredient};
use hotpot::hand::{has_card, is_sorted, sort_hand};
use hotpot::sets::{
    extract_all, extract_category_sets, extract_three_of_a_kind, find_sets_in_hand, SetKind,
    CATEGORY_SET_POINTS, THREE_OF_A_KIND_POINTS,
};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..Ingredient::ALL.len()).prop_map(|i| Card::new(Ingredient::ALL[i]))
}

fn any_hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any_card(), 0..=max)
}

/// Up to five copies of each identity, in random order.
fn capped_pool() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(0usize..=5, Ingredient::ALL.len())
        .prop_map(|counts| {
            let mut pool = Vec::new();
            for (i, n) in counts.into_iter().enumerate() {
                pool.extend(std::iter::repeat(Card::new(Ingredient::ALL[i])).take(n));
            }
            pool
        })
        .prop_shuffle()
}

fn count_of(cards: &[Card], card: Card) -> usize {
    cards.iter().filter(|c| **c == card).count()
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

proptest! {
    #[test]
    fn binary_search_agrees_with_linear_scan(hand in any_hand(20)) {
        let mut hand = hand;
        sort_hand(&mut hand);
        prop_assert!(is_sorted(&hand));
        for &ingredient in Ingredient::ALL.iter() {
            let probe = Card::new(ingredient);
            prop_assert_eq!(has_card(&hand, probe), hand.contains(&probe));
        }
    }

    #[test]
    fn sorting_is_an_idempotent_permutation(hand in any_hand(20)) {
        let mut once = hand.clone();
        sort_hand(&mut once);
        prop_assert_eq!(&once, &sorted(hand));
        let mut twice = once.clone();
        sort_hand(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn detection_does_not_change_the_hand(hand in any_hand(20)) {
        let before = hand.clone();
        let first = find_sets_in_hand(&hand);
        prop_assert_eq!(&hand, &before);
        prop_assert_eq!(first, find_sets_in_hand(&hand));
    }

    #[test]
    fn detection_counts_trips_and_complete_categories(hand in any_hand(20)) {
        let trips = Ingredient::ALL
            .iter()
            .filter(|&&i| count_of(&hand, Card::new(i)) >= 3)
            .count();
        let cats = Category::ALL
            .iter()
            .filter(|c| c.ingredients().iter().all(|&i| count_of(&hand, Card::new(i)) > 0))
            .count();
        let sets = find_sets_in_hand(&hand);
        prop_assert_eq!(sets.iter().filter(|s| s.kind == SetKind::ThreeOfAKind).count(), trips);
        prop_assert_eq!(sets.iter().filter(|s| s.kind == SetKind::CategorySet).count(), cats);
        for set in &sets {
            for card in set.cards {
                prop_assert!(hand.contains(&card));
            }
        }
    }

    #[test]
    fn trips_extraction_is_maximal_and_conserves_cards(pool in capped_pool()) {
        let out = extract_three_of_a_kind(pool.clone());
        let mut recovered = out.leftover.clone();
        for set in &out.sets {
            prop_assert_eq!(set.kind, SetKind::ThreeOfAKind);
            prop_assert!(set.cards.iter().all(|c| *c == set.cards[0]));
            recovered.extend(set.cards);
        }
        prop_assert_eq!(sorted(recovered), sorted(pool.clone()));
        let expected = Ingredient::ALL.iter().filter(|&&i| count_of(&pool, Card::new(i)) >= 3).count();
        prop_assert_eq!(out.sets.len(), expected);
        prop_assert!(extract_three_of_a_kind(out.leftover).sets.is_empty());
    }

    #[test]
    fn category_extraction_is_maximal_and_conserves_cards(pool in capped_pool()) {
        let out = extract_category_sets(pool.clone());
        let mut recovered = out.leftover.clone();
        for set in &out.sets {
            prop_assert_eq!(set.kind, SetKind::CategorySet);
            let slots: Vec<usize> = set.cards.iter().map(|c| c.ingredient().slot()).collect();
            prop_assert_eq!(slots, vec![0, 1, 2]);
            prop_assert!(set.cards.iter().all(|c| c.category() == set.category()));
            recovered.extend(set.cards);
        }
        prop_assert_eq!(sorted(recovered), sorted(pool.clone()));
        let expected: usize = Category::ALL
            .iter()
            .map(|c| c.ingredients().iter().map(|&i| count_of(&pool, Card::new(i))).min().unwrap_or(0))
            .sum();
        prop_assert_eq!(out.sets.len(), expected);
        prop_assert!(extract_category_sets(out.leftover).sets.is_empty());
    }

    #[test]
    fn score_is_fixed_points_per_kind(pool in capped_pool()) {
        let out = extract_all(pool);
        let trips = out.count(SetKind::ThreeOfAKind) as u32;
        let cats = out.count(SetKind::CategorySet) as u32;
        prop_assert_eq!(out.score(), trips * THREE_OF_A_KIND_POINTS + cats * CATEGORY_SET_POINTS);
    }
}
