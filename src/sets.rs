//! Set detection and extraction over a hand of cards.
//!
//! Detection ([`find_sets_in_hand`]) is read-only and may report the same
//! card in several sets. Extraction ([`extract_three_of_a_kind`],
//! [`extract_category_sets`]) consumes cards from a pool and returns what
//! was formed together with the leftover cards.

use crate::cards::{Card, Category};
use core::fmt;
use tracing::debug;

mod groups;

pub use groups::{CategoryGroups, IdentityGroups};

/// Cards in every completed set.
pub const SET_SIZE: usize = 3;
pub const THREE_OF_A_KIND_POINTS: u32 = 120;
pub const CATEGORY_SET_POINTS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SetKind {
    /// Three copies of the same card.
    ThreeOfAKind,
    /// One of each ingredient of a single category.
    CategorySet,
}

impl SetKind {
    pub const fn points(self) -> u32 {
        match self {
            SetKind::ThreeOfAKind => THREE_OF_A_KIND_POINTS,
            SetKind::CategorySet => CATEGORY_SET_POINTS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SetKind::ThreeOfAKind => "three_of_a_kind",
            SetKind::CategorySet => "category_set",
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of three cards, either detected or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSet {
    pub kind: SetKind,
    pub cards: [Card; SET_SIZE],
}

impl CardSet {
    pub const fn points(&self) -> u32 {
        self.kind.points()
    }

    /// Category shared by every card of the set.
    pub const fn category(&self) -> Category {
        self.cards[0].category()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.cards[0], self.cards[1], self.cards[2])
    }
}

/// Report every set currently formable in `cards` without consuming any.
///
/// Two passes, concatenated:
/// - one three-of-a-kind per identity held at least three times, using the
///   first three copies in hand order;
/// - one category set per category holding all three ingredients, using
///   the first copy of each.
///
/// A card can appear in a set from each pass, and both count toward the
/// win threshold.
///
/// ```
/// use hotpot::cards::parse_cards;
/// use hotpot::sets::{find_sets_in_hand, SetKind};
///
/// let hand = parse_cards("RamenNoodles HangingNoodles RolledNoodles Fish").unwrap();
/// let sets = find_sets_in_hand(&hand);
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].kind, SetKind::CategorySet);
/// ```
pub fn find_sets_in_hand(cards: &[Card]) -> Vec<CardSet> {
    let mut found = Vec::new();

    for (_, group) in IdentityGroups::from_cards(cards.iter().copied()).iter() {
        if group.len() >= SET_SIZE {
            found.push(CardSet { kind: SetKind::ThreeOfAKind, cards: [group[0], group[1], group[2]] });
        }
    }

    for (_, [a, b, c]) in CategoryGroups::from_cards(cards.iter().copied()).iter() {
        if let (Some(&x), Some(&y), Some(&z)) = (a.first(), b.first(), c.first()) {
            found.push(CardSet { kind: SetKind::CategorySet, cards: [x, y, z] });
        }
    }

    found
}

/// Result of an extraction pass: the sets formed and the cards left over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub sets: Vec<CardSet>,
    pub leftover: Vec<Card>,
}

impl Extraction {
    /// Points earned by the formed sets.
    pub fn score(&self) -> u32 {
        self.sets.iter().map(CardSet::points).sum()
    }

    pub fn count(&self, kind: SetKind) -> usize {
        self.sets.iter().filter(|s| s.kind == kind).count()
    }
}

/// Consume one three-of-a-kind per identity held at least three times.
///
/// The first three copies of a group form the set; any further copies go
/// to the leftover untouched, even if there are enough for another set.
/// Leftover comes back in card order.
pub fn extract_three_of_a_kind(pool: Vec<Card>) -> Extraction {
    let mut out = Extraction::default();
    for (_, group) in IdentityGroups::from_cards(pool).into_groups() {
        if group.len() >= SET_SIZE {
            out.sets.push(CardSet { kind: SetKind::ThreeOfAKind, cards: [group[0], group[1], group[2]] });
            out.leftover.extend_from_slice(&group[SET_SIZE..]);
        } else {
            out.leftover.extend(group);
        }
    }
    debug!(sets = out.sets.len(), leftover = out.leftover.len(), "extracted three-of-a-kind sets");
    out
}

/// Consume as many category sets as every category allows.
///
/// Each category forms `min(count per ingredient)` sets, taking one card per
/// ingredient from the end of that ingredient's list. Remaining cards go
/// to the leftover in card order.
pub fn extract_category_sets(pool: Vec<Card>) -> Extraction {
    let mut out = Extraction::default();
    for (_, mut slots) in CategoryGroups::from_cards(pool).into_groups() {
        let possible = slots.iter().map(Vec::len).min().unwrap_or(0);
        for _ in 0..possible {
            let [a, b, c] = &mut slots;
            if let (Some(x), Some(y), Some(z)) = (a.pop(), b.pop(), c.pop()) {
                out.sets.push(CardSet { kind: SetKind::CategorySet, cards: [x, y, z] });
            }
        }
        for slot in slots {
            out.leftover.extend(slot);
        }
    }
    debug!(sets = out.sets.len(), leftover = out.leftover.len(), "extracted category sets");
    out
}

/// Three-of-a-kind extraction, then category extraction on what remains.
pub fn extract_all(pool: Vec<Card>) -> Extraction {
    let trips = extract_three_of_a_kind(pool);
    let cats = extract_category_sets(trips.leftover);
    let mut sets = trips.sets;
    sets.extend(cats.sets);
    Extraction { sets, leftover: cats.leftover }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Ingredient};

    fn c(i: Ingredient) -> Card {
        Card::new(i)
    }

    #[test]
    fn detection_reports_overlapping_sets() {
        // Three ramen plus the other two noodles: one trips and one category set.
        let hand =
            parse_cards("RamenNoodles RamenNoodles RamenNoodles HangingNoodles RolledNoodles")
                .unwrap();
        let sets = find_sets_in_hand(&hand);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].kind, SetKind::ThreeOfAKind);
        assert_eq!(sets[1].kind, SetKind::CategorySet);
        assert_eq!(sets[1].category(), Category::Noodles);
    }

    #[test]
    fn detection_reports_one_set_per_group_and_category() {
        let mut hand = vec![c(Ingredient::Corn); 6];
        hand.extend(parse_cards("Fish Fish LobsterClaw LobsterClaw Shrimp Shrimp").unwrap());
        let sets = find_sets_in_hand(&hand);
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn detection_on_empty_hand_is_empty() {
        assert!(find_sets_in_hand(&[]).is_empty());
    }

    #[test]
    fn trips_extraction_keeps_extra_copies() {
        let pool = vec![c(Ingredient::Fish); 4];
        let out = extract_three_of_a_kind(pool);
        assert_eq!(out.sets.len(), 1);
        assert_eq!(out.leftover, vec![c(Ingredient::Fish)]);
        assert_eq!(out.score(), THREE_OF_A_KIND_POINTS);
    }

    #[test]
    fn category_extraction_forms_min_count_sets() {
        let pool = parse_cards("Garlic Garlic HeatRoot HeatRoot HeatRoot DariClove DariClove Tofu")
            .unwrap();
        let out = extract_category_sets(pool);
        assert_eq!(out.count(SetKind::CategorySet), 2);
        assert_eq!(out.score(), 2 * CATEGORY_SET_POINTS);
        assert_eq!(out.leftover, vec![c(Ingredient::HeatRoot), c(Ingredient::Tofu)]);
        for set in &out.sets {
            assert_eq!(
                set.cards,
                [c(Ingredient::Garlic), c(Ingredient::HeatRoot), c(Ingredient::DariClove)]
            );
        }
    }

    #[test]
    fn extract_all_runs_trips_first() {
        // Trips first takes the three morels, leaving no category set.
        let pool = parse_cards("Morel Morel Morel Brighshroom Enoki").unwrap();
        let out = extract_all(pool);
        assert_eq!(out.count(SetKind::ThreeOfAKind), 1);
        assert_eq!(out.count(SetKind::CategorySet), 0);
        assert_eq!(out.leftover, vec![c(Ingredient::Brighshroom), c(Ingredient::Enoki)]);
    }

    #[test]
    fn set_display_joins_cards() {
        let set = CardSet {
            kind: SetKind::CategorySet,
            cards: [c(Ingredient::Corn), c(Ingredient::Potato), c(Ingredient::Carrot)],
        };
        assert_eq!(set.to_string(), "🥕 Corn | 🥕 Potato | 🥕 Carrot");
        assert_eq!(set.kind.to_string(), "category_set");
    }
}
