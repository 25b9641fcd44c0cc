use crate::cards::{Card, Ingredient};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Copies of every (category, ingredient) pair in a fresh deck.
pub const COPIES_PER_CARD: usize = 4;

/// 8 categories x 3 ingredients x 4 copies.
pub const DECK_SIZE: usize = Ingredient::ALL.len() * COPIES_PER_CARD;

/// The 96-card hotpot deck. Cards are drawn from the tail.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the unshuffled deck in catalog order.
    ///
    /// ```
    /// use hotpot::deck::Deck;
    ///
    /// let deck = Deck::build();
    /// assert_eq!(deck.remaining(), 96);
    /// ```
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for ingredient in Ingredient::ALL {
            for _ in 0..COPIES_PER_CARD {
                cards.push(Card::new(ingredient));
            }
        }
        Self { cards }
    }

    /// An empty deck, mostly useful for driving end-of-game paths.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// A deck holding exactly `cards`; the last element is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Uniform (Fisher-Yates) shuffle with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck, `None` once exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
