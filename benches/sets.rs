use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hotpot::cards::parse_cards;
use hotpot::deck::Deck;
use hotpot::hand::{has_card, sort_hand};
use hotpot::sets::{extract_all, find_sets_in_hand};

fn bench_find_sets(c: &mut Criterion) {
    let scattered =
        parse_cards("Fish Corn Tofu Garlic Morel BokChoy RamenNoodles SlicedMeat Shrimp").unwrap();
    let loaded = parse_cards(
        "Fish Fish Fish RamenNoodles HangingNoodles RolledNoodles Garlic HeatRoot DariClove",
    )
    .unwrap();

    let mut g = c.benchmark_group("find_sets_in_hand");
    g.bench_with_input(BenchmarkId::new("no_sets", "9 distinct"), &scattered, |b, input| {
        b.iter(|| find_sets_in_hand(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("three_sets", "trips+2 categories"), &loaded, |b, input| {
        b.iter(|| find_sets_in_hand(black_box(input)))
    });
    g.finish();
}

fn bench_sort_and_search(c: &mut Criterion) {
    let mut deck = Deck::build();
    deck.shuffle_seeded(7);
    let hand: Vec<_> = deck.draw_n(20);
    let probe = hand[13];
    c.bench_function("sort_hand_20", |b| {
        b.iter(|| {
            let mut cards = hand.clone();
            sort_hand(black_box(&mut cards));
            has_card(&cards, black_box(probe))
        })
    });
}

fn bench_extract_full_deck(c: &mut Criterion) {
    let deck = Deck::build();
    c.bench_function("extract_all_96", |b| {
        b.iter(|| extract_all(black_box(deck.as_slice().to_vec())))
    });
}

criterion_group!(benches, bench_find_sets, bench_sort_and_search, bench_extract_full_deck);
criterion_main!(benches);
