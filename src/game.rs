use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::HandError;
use crate::player::{Player, PlayerKind};
use rand::Rng;
use tracing::{debug, info};

/// Seats at the table; seats not taken by humans are computers.
pub const MAX_PLAYERS: usize = 4;
pub const DEFAULT_CARDS_PER_HAND: usize = 8;
/// Detected sets needed to win.
pub const DEFAULT_WINNING_SETS: usize = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("too many human players: max {max}, got {got}")]
    TooManyHumans { max: usize, got: usize },
    #[error("cards per hand must be at least 1")]
    NoCardsPerHand,
    #[error("winning set count must be at least 1")]
    NoWinningSets,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("not allowed during the {actual:?} phase")]
    WrongPhase { actual: TurnPhase },
    #[error("no seat {0}")]
    UnknownSeat(usize),
    #[error("cannot take from your own discard pile")]
    StealFromSelf,
    #[error("seat {0} has no discards")]
    EmptyDiscardPile(usize),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Game settings chosen before the deal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub humans: usize,
    pub cards_per_hand: usize,
    pub winning_sets: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            humans: 1,
            cards_per_hand: DEFAULT_CARDS_PER_HAND,
            winning_sets: DEFAULT_WINNING_SETS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_humans(humans: usize) -> Self {
        Self { humans, ..Self::default() }
    }

    /// Set a deterministic shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cards_per_hand(mut self, n: usize) -> Self {
        self.cards_per_hand = n;
        self
    }

    pub fn with_winning_sets(mut self, n: usize) -> Self {
        self.winning_sets = n;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.humans > MAX_PLAYERS {
            return Err(ConfigError::TooManyHumans { max: MAX_PLAYERS, got: self.humans });
        }
        if self.cards_per_hand == 0 {
            return Err(ConfigError::NoCardsPerHand);
        }
        if self.winning_sets == 0 {
            return Err(ConfigError::NoWinningSets);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnPhase {
    /// Take one card from the deck or an opponent's discard pile.
    Draw,
    /// Put one card from hand onto your discard pile.
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameStatus {
    InProgress,
    Won(usize),
    /// Deck ran out before anyone won.
    Exhausted,
    /// A human quit.
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnVerb {
    Draw,
    Steal,
    Discard,
    Win,
    Exhausted,
    Quit,
}

impl TurnVerb {
    pub fn label(self) -> &'static str {
        match self {
            TurnVerb::Draw => "draws",
            TurnVerb::Steal => "takes",
            TurnVerb::Discard => "discards",
            TurnVerb::Win => "wins",
            TurnVerb::Exhausted => "deck empty",
            TurnVerb::Quit => "quits",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TurnLogEntry {
    pub turn: u32,
    pub seat: usize,
    pub verb: TurnVerb,
    pub card: Option<Card>,
    /// Source seat for steals.
    pub from: Option<usize>,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) seed: u64,
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) phase: TurnPhase,
    pub(crate) status: GameStatus,
    pub(crate) turn: u32,
    log: Vec<TurnLogEntry>,
}

impl Game {
    /// Seat players, shuffle a fresh deck and deal.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut deck = Deck::build();
        deck.shuffle_seeded(seed);
        Self::from_parts(GameConfig { seed: Some(seed), ..config }, deck)
    }

    /// Deal from `deck` exactly as given (last card first).
    pub fn from_parts(config: GameConfig, deck: Deck) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut players = Vec::with_capacity(MAX_PLAYERS);
        for i in 1..=config.humans {
            players.push(Player::new(format!("Player {i}"), PlayerKind::Human));
        }
        for i in 1..=(MAX_PLAYERS - config.humans) {
            players.push(Player::new(format!("Computer {i}"), PlayerKind::Computer));
        }
        let mut game = Self {
            seed: config.seed.unwrap_or_default(),
            config,
            deck,
            players,
            current: 0,
            phase: TurnPhase::Draw,
            status: GameStatus::InProgress,
            turn: 1,
            log: Vec::new(),
        };
        game.deal_initial_hands();
        info!(
            humans = game.config.humans,
            deck = game.deck.remaining(),
            seed = game.seed,
            "game started"
        );
        game.begin_turn();
        Ok(game)
    }

    fn deal_initial_hands(&mut self) {
        for _ in 0..self.config.cards_per_hand {
            for p in &mut self.players {
                if let Some(card) = self.deck.draw() {
                    p.add_card(card);
                }
            }
        }
        for p in &mut self.players {
            p.sort_hand();
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the deck was shuffled with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            GameStatus::Won(seat) => Some(seat),
            _ => None,
        }
    }

    /// Number of sets detected in `seat`'s hand right now.
    pub fn sets_in_hand(&self, seat: usize) -> usize {
        self.players.get(seat).map_or(0, |p| p.find_sets_in_hand().len())
    }

    /// Opponents of `seat` with something on their discard pile.
    pub fn steal_candidates(&self, seat: usize) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != seat && p.top_discard().is_some())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn history_recent(&self, n: usize) -> Vec<TurnLogEntry> {
        self.history_recent_offset(n, 0)
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<TurnLogEntry> {
        let len = self.log.len();
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.log[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.log.len()
    }

    fn ensure_phase(&self, expected: TurnPhase) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if self.phase != expected {
            return Err(ActionError::WrongPhase { actual: self.phase });
        }
        Ok(())
    }

    /// Draw the top card of the deck into the current hand.
    ///
    /// Returns `Ok(None)` if the deck is empty, which ends the game.
    pub fn draw_from_deck(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_phase(TurnPhase::Draw)?;
        let Some(card) = self.deck.draw() else {
            self.finish(GameStatus::Exhausted);
            return Ok(None);
        };
        self.players[self.current].add_card(card);
        debug!(seat = self.current, %card, remaining = self.deck.remaining(), "draw");
        self.record(self.current, TurnVerb::Draw, Some(card), None);
        self.after_draw();
        Ok(Some(card))
    }

    /// Take the top of `from`'s discard pile into the current hand.
    pub fn steal_from(&mut self, from: usize) -> Result<Card, ActionError> {
        self.ensure_phase(TurnPhase::Draw)?;
        if from >= self.players.len() {
            return Err(ActionError::UnknownSeat(from));
        }
        if from == self.current {
            return Err(ActionError::StealFromSelf);
        }
        let (actor, source) = pair_mut(&mut self.players, self.current, from);
        let card = actor.take_from_discard(source).ok_or(ActionError::EmptyDiscardPile(from))?;
        debug!(seat = self.current, from, %card, "steal");
        self.record(self.current, TurnVerb::Steal, Some(card), Some(from));
        self.after_draw();
        Ok(card)
    }

    /// Discard the card at `index` of the current (sorted) hand and pass the turn.
    pub fn discard(&mut self, index: usize) -> Result<Card, ActionError> {
        self.ensure_phase(TurnPhase::Discard)?;
        let card = self.players[self.current].discard_card_by_index(index)?;
        debug!(seat = self.current, %card, "discard");
        self.record(self.current, TurnVerb::Discard, Some(card), None);
        if !self.check_win() {
            self.end_turn();
        }
        Ok(card)
    }

    /// End the game at a human's request.
    pub fn quit(&mut self) {
        if self.is_over() {
            return;
        }
        self.record(self.current, TurnVerb::Quit, None, None);
        self.finish(GameStatus::Abandoned);
    }

    fn after_draw(&mut self) {
        if self.check_win() {
            return;
        }
        if self.players[self.current].hand_size() == 0 {
            self.end_turn();
            return;
        }
        self.phase = TurnPhase::Discard;
    }

    /// Sort the current hand and end the game if it holds enough sets.
    fn check_win(&mut self) -> bool {
        let seat = self.current;
        self.players[seat].sort_hand();
        if self.players[seat].find_sets_in_hand().len() >= self.config.winning_sets {
            self.record(seat, TurnVerb::Win, None, None);
            self.finish(GameStatus::Won(seat));
            return true;
        }
        false
    }

    fn end_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.turn += 1;
        self.phase = TurnPhase::Draw;
        self.begin_turn();
    }

    fn begin_turn(&mut self) {
        if self.is_over() {
            return;
        }
        if self.deck.is_empty() {
            self.record(self.current, TurnVerb::Exhausted, None, None);
            self.finish(GameStatus::Exhausted);
        }
    }

    /// Record the outcome and bank every hand into completed sets.
    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        for p in &mut self.players {
            p.bank_sets();
        }
        info!(?status, turn = self.turn, "game over");
    }

    fn record(&mut self, seat: usize, verb: TurnVerb, card: Option<Card>, from: Option<usize>) {
        self.log.push(TurnLogEntry { turn: self.turn, seat, verb, card, from });
    }

    /// Plain-text end-of-game summary.
    pub fn final_report(&self) -> String {
        let mut lines = vec![String::from("Game over!")];
        for p in &self.players {
            lines.push(format!(
                "{} - sets: {}, score: {}, hand size: {}",
                p.name(),
                p.sets_count(),
                p.score(),
                p.hand_size()
            ));
        }
        lines.push(match self.status {
            GameStatus::Won(seat) => format!("{} WINS the game!", self.players[seat].name()),
            GameStatus::Abandoned => format!("{} quit the game.", self.players[self.current].name()),
            _ => format!(
                "No one reached {} sets before deck exhaustion. Draw.",
                self.config.winning_sets
            ),
        });
        lines.join("\n")
    }

    pub fn describe_entry(&self, entry: &TurnLogEntry) -> String {
        let name = self.players.get(entry.seat).map_or("?", |p| p.name());
        match (entry.verb, entry.card, entry.from) {
            (TurnVerb::Steal, Some(card), Some(from)) => {
                let src = self.players.get(from).map_or("?", |p| p.name());
                format!("#{} {name} takes {card} from {src}", entry.turn)
            }
            (verb, Some(card), _) => format!("#{} {name} {} {card}", entry.turn, verb.label()),
            (verb, None, _) => format!("#{} {name} {}", entry.turn, verb.label()),
        }
    }
}

/// Two distinct players mutably at once.
fn pair_mut(players: &mut [Player], a: usize, b: usize) -> (&mut Player, &mut Player) {
    if a < b {
        let (left, right) = players.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Ingredient};

    /// A deck whose draws come out in `draws` order.
    fn deck_in_draw_order(draws: Vec<Card>) -> Deck {
        let mut cards = draws;
        cards.reverse();
        Deck::from_cards(cards)
    }

    /// Deal `hands[seat]` to each seat, followed by `rest` as the draw pile.
    fn rigged_game(hands: [&str; 4], rest: &str, config: GameConfig) -> Game {
        let parsed: Vec<Vec<Card>> = hands.iter().map(|h| parse_cards(h).unwrap()).collect();
        let per_hand = parsed[0].len();
        let mut draws = Vec::new();
        for round in 0..per_hand {
            for hand in &parsed {
                draws.push(hand[round]);
            }
        }
        draws.extend(parse_cards(rest).unwrap());
        Game::from_parts(config.with_cards_per_hand(per_hand), deck_in_draw_order(draws)).unwrap()
    }

    #[test]
    fn config_validation() {
        assert!(GameConfig::with_humans(4).validate().is_ok());
        assert_eq!(
            GameConfig::with_humans(5).validate(),
            Err(ConfigError::TooManyHumans { max: 4, got: 5 })
        );
        let cfg = GameConfig::default().with_cards_per_hand(0);
        assert_eq!(cfg.validate(), Err(ConfigError::NoCardsPerHand));
        let cfg = GameConfig::default().with_winning_sets(0);
        assert_eq!(cfg.validate(), Err(ConfigError::NoWinningSets));
    }

    #[test]
    fn seats_humans_then_computers() {
        let g = Game::new(GameConfig::with_humans(2).with_seed(1)).unwrap();
        let names: Vec<&str> = g.players().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2", "Computer 1", "Computer 2"]);
        assert!(g.players().iter().all(|p| p.hand_size() == DEFAULT_CARDS_PER_HAND));
        assert!(g.players().iter().all(|p| p.hand().is_sorted()));
        assert_eq!(g.deck_remaining(), 96 - 32);
    }

    #[test]
    fn steal_moves_top_discard_between_players() {
        let mut g = rigged_game(
            ["Fish Tofu", "Corn Morel", "Garlic Enoki", "Potato Shrimp"],
            "Carrot Dumpling",
            GameConfig::with_humans(4),
        );
        g.draw_from_deck().unwrap();
        // Seat 0 now holds Fish, Carrot, Tofu (sorted); discard Carrot.
        assert_eq!(g.discard(1).unwrap(), Card::new(Ingredient::Carrot));
        assert_eq!(g.current(), 1);

        assert_eq!(g.steal_from(1), Err(ActionError::StealFromSelf));
        assert_eq!(g.steal_from(2), Err(ActionError::EmptyDiscardPile(2)));
        assert_eq!(g.steal_from(9), Err(ActionError::UnknownSeat(9)));
        assert_eq!(g.steal_from(0).unwrap(), Card::new(Ingredient::Carrot));
        assert_eq!(g.players()[0].top_discard(), None);
        assert_eq!(g.players()[1].hand_size(), 3);
        assert_eq!(g.phase(), TurnPhase::Discard);
        assert!(matches!(g.draw_from_deck(), Err(ActionError::WrongPhase { .. })));
    }

    #[test]
    fn empty_deck_at_turn_start_ends_in_draw() {
        let mut g =
            rigged_game(["Fish", "Corn", "Garlic", "Potato"], "Tofu", GameConfig::with_humans(1));
        g.draw_from_deck().unwrap();
        g.discard(0).unwrap();
        assert_eq!(g.status(), GameStatus::Exhausted);
        assert!(g.final_report().ends_with("No one reached 3 sets before deck exhaustion. Draw."));
        assert_eq!(g.discard(0), Err(ActionError::GameOver));
    }

    #[test]
    fn quit_abandons_and_banks() {
        let mut g = rigged_game(
            ["Fish Fish Fish", "Corn Morel Tofu", "Garlic Enoki Tofu", "Potato Shrimp Tofu"],
            "Dumpling",
            GameConfig::with_humans(1),
        );
        g.quit();
        assert_eq!(g.status(), GameStatus::Abandoned);
        assert_eq!(g.players()[0].score(), 120);
        assert_eq!(g.history_recent(1)[0].verb, TurnVerb::Quit);
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut players = vec![
            Player::new("a", PlayerKind::Human),
            Player::new("b", PlayerKind::Human),
            Player::new("c", PlayerKind::Human),
        ];
        let (x, y) = pair_mut(&mut players, 2, 0);
        assert_eq!((x.name(), y.name()), ("c", "a"));
        let (x, y) = pair_mut(&mut players, 0, 1);
        assert_eq!((x.name(), y.name()), ("a", "b"));
    }
}
