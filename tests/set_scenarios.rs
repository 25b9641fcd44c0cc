use hotpot::cards::{parse_cards, Card, Category, Ingredient};
use hotpot::player::{Player, PlayerKind};
use hotpot::sets::{extract_three_of_a_kind, find_sets_in_hand, SetKind};

#[test]
fn three_ramen_among_unrelated_cards() {
    let hand = parse_cards(
        "RamenNoodles RamenNoodles RamenNoodles \
         Fish BokChoy Garlic Corn BeefRolls Brighshroom Dumpling LobsterClaw NapaCabbage",
    )
    .unwrap();
    let sets = find_sets_in_hand(&hand);
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].kind, SetKind::ThreeOfAKind);
    assert_eq!(sets[0].cards, [Card::new(Ingredient::RamenNoodles); 3]);

    let mut player = Player::new("Player 1", PlayerKind::Human);
    let leftover = player.extract_three_of_a_kind(hand);
    assert_eq!(leftover.len(), 9);
    assert_eq!(player.score(), 120);
    assert_eq!(player.sets_count(), 1);
    assert!(!leftover.contains(&Card::new(Ingredient::RamenNoodles)));
}

#[test]
fn one_of_each_noodle_is_a_category_set() {
    let hand = parse_cards("Noodles:RamenNoodles Noodles:HangingNoodles Noodles:RolledNoodles")
        .unwrap();
    let detected = find_sets_in_hand(&hand);
    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0].kind, SetKind::CategorySet);
    assert_eq!(detected[0].category(), Category::Noodles);

    let mut player = Player::new("Computer 1", PlayerKind::Computer);
    let leftover = player.extract_category_sets(hand);
    assert!(leftover.is_empty());
    assert_eq!(player.score(), 60);
    assert_eq!(player.completed_sets()[0].kind, SetKind::CategorySet);
    assert_eq!(player.completed_sets()[0].category(), Category::Noodles);
}

#[test]
fn six_fish_form_one_set_per_call() {
    let pool = vec![Card::new(Ingredient::Fish); 6];
    let out = extract_three_of_a_kind(pool);
    assert_eq!(out.sets.len(), 1);
    assert_eq!(out.leftover, vec![Card::new(Ingredient::Fish); 3]);

    // The leftover is still a group of three, so a second call takes it.
    let again = extract_three_of_a_kind(out.leftover);
    assert_eq!(again.sets.len(), 1);
    assert!(again.leftover.is_empty());
}

#[test]
fn banking_prefers_trips_over_category_sets() {
    let mut player = Player::new("Player 1", PlayerKind::Human);
    for card in parse_cards("Shrimp Shrimp Shrimp Fish LobsterClaw Corn").unwrap() {
        player.add_card(card);
    }
    assert_eq!(player.bank_sets(), 1);
    assert_eq!(player.completed_sets()[0].kind, SetKind::ThreeOfAKind);
    assert_eq!(player.score(), 120);
    assert_eq!(player.hand_size(), 3);
    assert!(player.hand().is_sorted());
}
