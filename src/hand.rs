use crate::cards::Card;
use core::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Sort cards in place by [`Card::key`] using insertion sort.
///
/// Stable; equal cards keep their relative order. Hands stay small
/// (around a dozen cards), so the quadratic worst case is fine.
///
/// ```
/// use hotpot::cards::{Card, Ingredient};
/// use hotpot::hand::sort_hand;
///
/// let mut cards = vec![Card::new(Ingredient::Tofu), Card::new(Ingredient::Fish)];
/// sort_hand(&mut cards);
/// assert_eq!(cards[0], Card::new(Ingredient::Fish));
/// ```
pub fn sort_hand(cards: &mut [Card]) {
    for i in 1..cards.len() {
        let held = cards[i];
        let mut j = i;
        while j > 0 && cards[j - 1].key() > held.key() {
            cards[j] = cards[j - 1];
            j -= 1;
        }
        cards[j] = held;
    }
}

/// Binary search for `target` by [`Card::key`].
///
/// `cards` must already be sorted (see [`sort_hand`]). On an unsorted
/// slice the answer is unspecified but the call never panics.
pub fn has_card(cards: &[Card], target: Card) -> bool {
    let key = target.key();
    let (mut lo, mut hi) = (0usize, cards.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cards[mid].key().cmp(&key) {
            Ordering::Equal => return true,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    false
}

/// Whether `cards` is in non-decreasing key order.
pub fn is_sorted(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].key() <= w[1].key())
}

/// A player's held cards.
///
/// `push` appends and breaks ordering until [`Hand::sort`] is called;
/// [`Hand::contains`] relies on that ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a hand from `cards` and sort it.
    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the card at `index`. An out-of-range index is reported and the
    /// hand is left untouched.
    pub fn remove(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.cards.len() {
            return Err(HandError::IndexOutOfRange { index, len: self.cards.len() });
        }
        Ok(self.cards.remove(index))
    }

    pub fn sort(&mut self) {
        sort_hand(&mut self.cards);
    }

    pub fn is_sorted(&self) -> bool {
        is_sorted(&self.cards)
    }

    /// Membership by binary search; the hand must be sorted.
    pub fn contains(&self, card: Card) -> bool {
        has_card(&self.cards, card)
    }

    /// Take every card out, leaving the hand empty.
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub(crate) fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.sort();
    }
}
