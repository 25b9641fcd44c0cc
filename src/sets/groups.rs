use crate::cards::{Card, Category};
use std::collections::BTreeMap;

/// Cards grouped by exact identity (category + ingredient).
///
/// Groups iterate in card order; each group keeps its cards in the order
/// they were seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityGroups {
    groups: BTreeMap<Card, Vec<Card>>,
}

impl IdentityGroups {
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut groups: BTreeMap<Card, Vec<Card>> = BTreeMap::new();
        for card in cards {
            groups.entry(card).or_default().push(card);
        }
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Card, &[Card])> + '_ {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn count(&self, card: Card) -> usize {
        self.groups.get(&card).map_or(0, Vec::len)
    }

    /// Largest group size, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn into_groups(self) -> impl Iterator<Item = (Card, Vec<Card>)> {
        self.groups.into_iter()
    }
}

/// Cards grouped by category, then by ingredient slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: BTreeMap<Category, [Vec<Card>; 3]>,
}

impl CategoryGroups {
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut groups: BTreeMap<Category, [Vec<Card>; 3]> = BTreeMap::new();
        for card in cards {
            groups.entry(card.category()).or_default()[card.ingredient().slot()].push(card);
        }
        Self { groups }
    }

    /// Cards held per ingredient slot of `category`.
    pub fn counts(&self, category: Category) -> [usize; 3] {
        match self.groups.get(&category) {
            Some([a, b, c]) => [a.len(), b.len(), c.len()],
            None => [0; 3],
        }
    }

    /// How many full category sets `category` could form.
    pub fn possible_sets(&self, category: Category) -> usize {
        self.counts(category).into_iter().min().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Vec<Card>; 3])> + '_ {
        self.groups.iter().map(|(k, v)| (*k, v))
    }

    pub fn into_groups(self) -> impl Iterator<Item = (Category, [Vec<Card>; 3])> {
        self.groups.into_iter()
    }
}
