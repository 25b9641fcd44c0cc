//! Agents: pluggable seat controllers.
//!
//! `PlayerAgent` is the seam between the turn engine and whoever decides
//! what a seat does. `HumanAgent` replays intents queued by a UI;
//! `ComputerAgent` plays the random draw/steal/discard policy. `AgentTable`
//! tracks which agent owns which seat and drives the current one.

use crate::engine::GameEngine;
use crate::game::ActionError;
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Computer,
}

/// Seat-level action intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Draw,
    Steal(usize),
    Discard(usize),
}

/// A seat controller that can act for a player when it is their turn.
pub trait PlayerAgent {
    /// Called when `seat` is the current actor. Returns whether anything was played.
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError>;
    /// The kind of this agent (human, computer).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat-intent action; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

mod bots;

pub use bots::{BotProfile, ComputerAgent, DEFAULT_STEAL_CHANCE};

/// Executes user-intended actions when it's their turn.
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError> {
        if engine.is_over() {
            self.pending = None;
            return Ok(false);
        }
        if engine.current() != seat {
            return Ok(false);
        }
        match self.pending.take() {
            Some(Action::Draw) => engine.draw_from_deck().map(|_| true),
            Some(Action::Steal(from)) => engine.steal_from(from).map(|_| true),
            Some(Action::Discard(index)) => engine.discard(index).map(|_| true),
            None => Ok(false),
        }
    }
}

/// Manages a set of optional agents, one per seat, and drives the agent at the
/// current seat when appropriate.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Human) => 'H',
                Some(AgentKind::Computer) => 'C',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        seats.resize_with(n, || None);
        Self { seats, min_action_delay: Duration::from_millis(0), next_action_at: None }
    }

    /// Ensure the table has exactly `n` seats.
    pub fn ensure_len(&mut self, n: usize) {
        if self.seats.len() < n {
            self.seats.resize_with(n, || None);
        }
        if self.seats.len() > n {
            self.seats.truncate(n);
        }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.ensure_len(seat + 1);
        }
        self.seats[seat] = agent;
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    /// Send an action intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: usize, action: Action) -> bool {
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            return agent.receive(action);
        }
        false
    }

    /// Whether any computer agents are assigned.
    pub fn any_computers(&self) -> bool {
        self.seats
            .iter()
            .filter_map(|a| a.as_deref())
            .any(|ag| matches!(ag.kind(), AgentKind::Computer))
    }

    /// Set a global minimum delay between any actions at the table.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the agent assigned to the current seat, if any.
    pub fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        let seat = engine.current();
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            let is_computer = matches!(agent.kind(), AgentKind::Computer);
            let now = Instant::now();
            if is_computer {
                if let Some(next) = self.next_action_at {
                    if now < next {
                        return Ok(false);
                    }
                }
            }
            let acted = agent.on_turn(engine, seat)?;
            if acted && self.min_action_delay > Duration::from_millis(0) {
                self.next_action_at = Some(now + self.min_action_delay);
            }
            return Ok(acted);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameConfig, TurnPhase};

    /// Nobody can reach 99 sets, so only the deck can end these games.
    fn mk_game(humans: usize) -> Game {
        Game::new(GameConfig::with_humans(humans).with_seed(11).with_winning_sets(99)).unwrap()
    }

    #[test]
    fn human_agent_plays_queued_intents_in_order() {
        let mut g = mk_game(1);
        let mut human = HumanAgent::new();
        assert!(!human.on_turn(&mut g, 0).unwrap(), "nothing queued");

        assert!(human.receive(Action::Draw));
        assert!(!human.receive(Action::Discard(0)), "one intent at a time");
        assert!(human.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.phase(), TurnPhase::Discard);

        assert!(human.receive(Action::Discard(0)));
        assert!(human.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.current(), 1);
    }

    #[test]
    fn human_agent_ignores_other_seats_turn() {
        let mut g = mk_game(2);
        let mut human = HumanAgent::new();
        human.receive(Action::Draw);
        assert!(!human.on_turn(&mut g, 1).unwrap());
        assert_eq!(g.current(), 0);
    }

    #[test]
    fn human_agent_surfaces_action_errors() {
        let mut g = mk_game(1);
        let mut human = HumanAgent::new();
        human.receive(Action::Steal(2));
        assert_eq!(human.on_turn(&mut g, 0), Err(ActionError::EmptyDiscardPile(2)));
        assert_eq!(g.phase(), TurnPhase::Draw);
    }

    #[test]
    fn table_drives_current_seat_only() {
        let mut g = mk_game(1);
        let mut table = AgentTable::for_seats(4);
        table.set_agent(0, Some(Box::new(HumanAgent::new())));
        for seat in 1..4 {
            let profile = BotProfile::default().with_seed(seat as u64);
            table.set_agent(seat, Some(Box::new(ComputerAgent::new(profile))));
        }
        assert_eq!(format!("{table:?}"), "AgentTable(HCCC)");
        assert!(table.any_computers());
        assert!(!table.on_turn(&mut g).unwrap(), "human has nothing queued");

        assert!(table.receive(0, Action::Draw));
        assert!(table.on_turn(&mut g).unwrap());
        assert!(table.receive(0, Action::Discard(0)));
        assert!(table.on_turn(&mut g).unwrap());

        // Computers take full turns until it's the human's turn again.
        for _ in 0..3 {
            assert!(table.on_turn(&mut g).unwrap());
        }
        assert_eq!(g.current(), 0);
        assert_eq!(g.deck_remaining(), 96 - 32 - 4);
    }
}
