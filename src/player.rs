use crate::cards::Card;
use crate::hand::{Hand, HandError};
use crate::sets::{self, CardSet};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerKind {
    Human,
    Computer,
}

/// One seat at the table: hand, discard pile, completed sets and score.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) kind: PlayerKind,
    pub(crate) hand: Hand,
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) completed_sets: Vec<CardSet>,
    pub(crate) score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Hand::new(),
            discard_pile: Vec::new(),
            completed_sets: Vec::new(),
            score: 0,
        }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Sets committed by extraction, oldest first.
    pub fn completed_sets(&self) -> &[CardSet] {
        &self.completed_sets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn sets_count(&self) -> usize {
        self.completed_sets.len()
    }

    /// Append a card; the hand is unsorted until [`Player::sort_hand`].
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Move the card at `index` from the hand onto the discard pile.
    pub fn discard_card_by_index(&mut self, index: usize) -> Result<Card, HandError> {
        let card = self.hand.remove(index)?;
        self.discard_pile.push(card);
        Ok(card)
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub fn pop_discard(&mut self) -> Option<Card> {
        self.discard_pile.pop()
    }

    /// Take the top of `from`'s discard pile into this hand.
    pub fn take_from_discard(&mut self, from: &mut Player) -> Option<Card> {
        let card = from.pop_discard()?;
        self.hand.push(card);
        Some(card)
    }

    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }

    /// Binary-search membership; call [`Player::sort_hand`] first.
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(card)
    }

    /// Sets formable from the current hand. Changes nothing.
    pub fn find_sets_in_hand(&self) -> Vec<CardSet> {
        sets::find_sets_in_hand(self.hand.as_slice())
    }

    /// Extract three-of-a-kind sets from `pool`, commit them, and return the
    /// cards that were not used.
    pub fn extract_three_of_a_kind(&mut self, pool: Vec<Card>) -> Vec<Card> {
        let out = sets::extract_three_of_a_kind(pool);
        self.commit(out.sets);
        out.leftover
    }

    /// Extract category sets from `pool`, commit them, and return the cards
    /// that were not used.
    pub fn extract_category_sets(&mut self, pool: Vec<Card>) -> Vec<Card> {
        let out = sets::extract_category_sets(pool);
        self.commit(out.sets);
        out.leftover
    }

    /// Turn the whole hand into completed sets: three-of-a-kind first, then
    /// category sets. Unused cards stay in the (re-sorted) hand. Returns the
    /// number of sets formed.
    pub fn bank_sets(&mut self) -> usize {
        let before = self.completed_sets.len();
        let pool = self.hand.take_all();
        let leftover = self.extract_three_of_a_kind(pool);
        let leftover = self.extract_category_sets(leftover);
        self.hand.replace(leftover);
        let formed = self.completed_sets.len() - before;
        info!(player = %self.name, formed, score = self.score, "banked sets");
        formed
    }

    fn commit(&mut self, formed: Vec<CardSet>) {
        for set in formed {
            self.score += set.points();
            self.completed_sets.push(set);
        }
    }

    /// Index-prefixed hand listing, one card per line.
    pub fn describe_hand(&self) -> String {
        if self.hand.is_empty() {
            return String::from("(empty hand)");
        }
        self.hand
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{i}: {card}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Completed sets as `Set N [kind]: card | card | card`, one per line.
    pub fn describe_sets(&self) -> String {
        if self.completed_sets.is_empty() {
            return String::from("No completed sets.");
        }
        self.completed_sets
            .iter()
            .enumerate()
            .map(|(i, set)| format!("Set {} [{}]: {}", i + 1, set.kind, set))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
