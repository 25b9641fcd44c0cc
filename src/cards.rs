use std::fmt;
use std::str::FromStr;

/// The eight ingredient categories, in catalog declaration order.
///
/// Declaration order is the primary ordering key for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Noodles,
    Seafood,
    Greens,
    Spices,
    Veggies,
    Meat,
    Mushrooms,
    Carbs,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Noodles,
        Category::Seafood,
        Category::Greens,
        Category::Spices,
        Category::Veggies,
        Category::Meat,
        Category::Mushrooms,
        Category::Carbs,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The three ingredients of this category, in declaration order.
    pub const fn ingredients(self) -> [Ingredient; 3] {
        CATALOG[self.index()].1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Noodles => "Noodles",
            Category::Seafood => "Seafood",
            Category::Greens => "Greens",
            Category::Spices => "Spices",
            Category::Veggies => "Veggies",
            Category::Meat => "Meat",
            Category::Mushrooms => "Mushrooms",
            Category::Carbs => "Carbs",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Category::Noodles => "🍜",
            Category::Seafood => "🦞",
            Category::Greens => "🥬",
            Category::Spices => "🌶️",
            Category::Veggies => "🥕",
            Category::Meat => "🥩",
            Category::Mushrooms => "🍄",
            Category::Carbs => "🥟",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 24 ingredients. Variants are grouped by category and follow the
/// catalog order, so `Ingredient as u8 / 3` is the category index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Ingredient {
    RamenNoodles,
    HangingNoodles,
    RolledNoodles,
    Fish,
    LobsterClaw,
    Shrimp,
    BokChoy,
    NapaCabbage,
    GreenOnion,
    Garlic,
    HeatRoot,
    DariClove,
    Corn,
    Potato,
    Carrot,
    BeefRolls,
    SlicedMeat,
    SernukSteak,
    Brighshroom,
    Morel,
    Enoki,
    Dumpling,
    Tofu,
    RiceCake,
}

impl Ingredient {
    pub const ALL: [Ingredient; 24] = [
        Ingredient::RamenNoodles,
        Ingredient::HangingNoodles,
        Ingredient::RolledNoodles,
        Ingredient::Fish,
        Ingredient::LobsterClaw,
        Ingredient::Shrimp,
        Ingredient::BokChoy,
        Ingredient::NapaCabbage,
        Ingredient::GreenOnion,
        Ingredient::Garlic,
        Ingredient::HeatRoot,
        Ingredient::DariClove,
        Ingredient::Corn,
        Ingredient::Potato,
        Ingredient::Carrot,
        Ingredient::BeefRolls,
        Ingredient::SlicedMeat,
        Ingredient::SernukSteak,
        Ingredient::Brighshroom,
        Ingredient::Morel,
        Ingredient::Enoki,
        Ingredient::Dumpling,
        Ingredient::Tofu,
        Ingredient::RiceCake,
    ];

    pub const fn category(self) -> Category {
        Category::ALL[self as usize / 3]
    }

    /// Position of this ingredient within its category (0..3).
    pub const fn slot(self) -> usize {
        self as usize % 3
    }

    pub const fn name(self) -> &'static str {
        match self {
            Ingredient::RamenNoodles => "RamenNoodles",
            Ingredient::HangingNoodles => "HangingNoodles",
            Ingredient::RolledNoodles => "RolledNoodles",
            Ingredient::Fish => "Fish",
            Ingredient::LobsterClaw => "LobsterClaw",
            Ingredient::Shrimp => "Shrimp",
            Ingredient::BokChoy => "BokChoy",
            Ingredient::NapaCabbage => "NapaCabbage",
            Ingredient::GreenOnion => "GreenOnion",
            Ingredient::Garlic => "Garlic",
            Ingredient::HeatRoot => "HeatRoot",
            Ingredient::DariClove => "DariClove",
            Ingredient::Corn => "Corn",
            Ingredient::Potato => "Potato",
            Ingredient::Carrot => "Carrot",
            Ingredient::BeefRolls => "BeefRolls",
            Ingredient::SlicedMeat => "SlicedMeat",
            Ingredient::SernukSteak => "SernukSteak",
            Ingredient::Brighshroom => "Brighshroom",
            Ingredient::Morel => "Morel",
            Ingredient::Enoki => "Enoki",
            Ingredient::Dumpling => "Dumpling",
            Ingredient::Tofu => "Tofu",
            Ingredient::RiceCake => "RiceCake",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category → ingredients table. Immutable for the life of the process.
pub const CATALOG: [(Category, [Ingredient; 3]); 8] = [
    (
        Category::Noodles,
        [Ingredient::RamenNoodles, Ingredient::HangingNoodles, Ingredient::RolledNoodles],
    ),
    (Category::Seafood, [Ingredient::Fish, Ingredient::LobsterClaw, Ingredient::Shrimp]),
    (Category::Greens, [Ingredient::BokChoy, Ingredient::NapaCabbage, Ingredient::GreenOnion]),
    (Category::Spices, [Ingredient::Garlic, Ingredient::HeatRoot, Ingredient::DariClove]),
    (Category::Veggies, [Ingredient::Corn, Ingredient::Potato, Ingredient::Carrot]),
    (Category::Meat, [Ingredient::BeefRolls, Ingredient::SlicedMeat, Ingredient::SernukSteak]),
    (Category::Mushrooms, [Ingredient::Brighshroom, Ingredient::Morel, Ingredient::Enoki]),
    (Category::Carbs, [Ingredient::Dumpling, Ingredient::Tofu, Ingredient::RiceCake]),
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),
    #[error("unknown ingredient: '{0}'")]
    UnknownIngredient(String),
    #[error("{ingredient} does not belong to {category}")]
    Mismatch { category: Category, ingredient: Ingredient },
}

impl FromStr for Category {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| CardParseError::UnknownCategory(s.to_string()))
    }
}

impl FromStr for Ingredient {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Ingredient::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| CardParseError::UnknownIngredient(s.to_string()))
    }
}

/// A hotpot card: category + ingredient.
///
/// Ordering is by category, then by ingredient, both in catalog order.
///
/// ```
/// use hotpot::cards::{Card, Category, Ingredient};
///
/// let card = Card::new(Ingredient::Fish);
/// assert_eq!(card.category(), Category::Seafood);
/// assert_eq!(card.to_string(), "🦞 Fish");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    category: Category,
    ingredient: Ingredient,
}

impl Card {
    pub const fn new(ingredient: Ingredient) -> Self {
        Self { category: ingredient.category(), ingredient }
    }

    pub fn try_new(category: Category, ingredient: Ingredient) -> Result<Self, CardParseError> {
        if ingredient.category() != category {
            return Err(CardParseError::Mismatch { category, ingredient });
        }
        Ok(Self { category, ingredient })
    }

    pub const fn category(self) -> Category {
        self.category
    }

    pub const fn ingredient(self) -> Ingredient {
        self.ingredient
    }

    /// The ordering/grouping key.
    pub const fn key(self) -> (Category, Ingredient) {
        (self.category, self.ingredient)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category.emoji(), self.ingredient)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Accepts `Ingredient` or `Category:Ingredient`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((cat, ing)) => Card::try_new(cat.parse()?, ing.parse()?),
            None => Ok(Card::new(s.parse()?)),
        }
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use hotpot::cards::{parse_cards, Card, Ingredient};
///
/// let cards = parse_cards("Fish, Noodles:RamenNoodles tofu").unwrap();
/// assert_eq!(cards[0], Card::new(Ingredient::Fish));
/// assert_eq!(cards[1], Card::new(Ingredient::RamenNoodles));
/// assert_eq!(cards[2], Card::new(Ingredient::Tofu));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_distinct_ingredients_per_category() {
        for (category, ingredients) in CATALOG {
            assert_eq!(category.ingredients(), ingredients);
            for (slot, ing) in ingredients.iter().enumerate() {
                assert_eq!(ing.category(), category);
                assert_eq!(ing.slot(), slot);
            }
            assert_ne!(ingredients[0], ingredients[1]);
            assert_ne!(ingredients[1], ingredients[2]);
            assert_ne!(ingredients[0], ingredients[2]);
        }
    }

    #[test]
    fn ordering_is_category_then_ingredient() {
        let ramen = Card::new(Ingredient::RamenNoodles);
        let rolled = Card::new(Ingredient::RolledNoodles);
        let fish = Card::new(Ingredient::Fish);
        let rice = Card::new(Ingredient::RiceCake);
        assert!(ramen < rolled);
        assert!(rolled < fish);
        assert!(fish < rice);
        assert!(ramen.key() < fish.key());
    }

    #[test]
    fn try_new_rejects_mismatched_pair() {
        assert!(Card::try_new(Category::Seafood, Ingredient::Fish).is_ok());
        assert!(matches!(
            Card::try_new(Category::Meat, Ingredient::Fish),
            Err(CardParseError::Mismatch { .. })
        ));
    }

    #[test]
    fn card_display_and_from_str() {
        let c = Card::new(Ingredient::Dumpling);
        assert_eq!(c.to_string(), "🥟 Dumpling");
        assert_eq!(Card::from_str("dumpling").unwrap(), c);
        assert_eq!(Card::from_str("Carbs:Dumpling").unwrap(), c);
        assert!(Card::from_str("Meat:Dumpling").is_err());
        assert!(matches!(Card::from_str("Pizza"), Err(CardParseError::UnknownIngredient(_))));
        assert!(matches!(
            Card::from_str("Dessert:Tofu"),
            Err(CardParseError::UnknownCategory(_))
        ));
    }
}
