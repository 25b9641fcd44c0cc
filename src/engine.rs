// Narrow game API boundary. Agents (human input, computer policy) and UIs
// drive turns through this trait without reaching into `Game` internals.

use crate::cards::Card;
use crate::game::{ActionError, TurnPhase};

pub trait GameEngine {
    // Turn actions
    fn draw_from_deck(&mut self) -> Result<Option<Card>, ActionError>;
    fn steal_from(&mut self, seat: usize) -> Result<Card, ActionError>;
    fn discard(&mut self, index: usize) -> Result<Card, ActionError>;

    // Queries
    fn current(&self) -> usize;
    fn phase(&self) -> TurnPhase;
    fn is_over(&self) -> bool;
    fn num_players(&self) -> usize;
    fn deck_remaining(&self) -> usize;
    fn hand_size(&self, seat: usize) -> usize;
    fn steal_candidates(&self, seat: usize) -> Vec<usize>;
}

impl GameEngine for crate::game::Game {
    fn draw_from_deck(&mut self) -> Result<Option<Card>, ActionError> {
        self.draw_from_deck()
    }
    fn steal_from(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.steal_from(seat)
    }
    fn discard(&mut self, index: usize) -> Result<Card, ActionError> {
        self.discard(index)
    }

    fn current(&self) -> usize {
        self.current
    }
    fn phase(&self) -> TurnPhase {
        self.phase
    }
    fn is_over(&self) -> bool {
        self.is_over()
    }
    fn num_players(&self) -> usize {
        self.players.len()
    }
    fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    fn hand_size(&self, seat: usize) -> usize {
        self.players.get(seat).map_or(0, |p| p.hand_size())
    }
    fn steal_candidates(&self, seat: usize) -> Vec<usize> {
        self.steal_candidates(seat)
    }
}
