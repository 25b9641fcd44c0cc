use crate::engine::GameEngine;
use crate::game::{ActionError, TurnPhase};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::time::{Duration, Instant};
use tracing::debug;

use super::{Action, AgentKind, PlayerAgent};

/// Default chance a computer steals instead of drawing when it can.
pub const DEFAULT_STEAL_CHANCE: f64 = 0.4;

/// Configuration for a computer seat's randomness and pacing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct BotProfile {
    /// Probability of taking an opponent's top discard over drawing.
    pub steal_chance: f64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    pub fn new(steal_chance: f64) -> Self {
        Self {
            steal_chance: steal_chance.clamp(0.0, 1.0),
            min_delay_ms: 0,
            max_delay_ms: 0,
            rng_seed: None,
        }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Fixed thinking delay before each turn.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.min_delay_ms = delay_ms;
        self.max_delay_ms = delay_ms;
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::new(DEFAULT_STEAL_CHANCE)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// Pick where to draw from: a uniformly chosen opponent pile with
/// probability `steal_chance` when any exist, else the deck.
fn choose_draw(candidates: &[usize], profile: &BotProfile, rng: &mut impl Rng) -> Action {
    if candidates.is_empty() || rng.random::<f64>() >= profile.steal_chance {
        return Action::Draw;
    }
    Action::Steal(candidates[rng.random_range(0..candidates.len())])
}

/// Uniformly random discard index, `None` for an empty hand.
fn choose_discard(hand_size: usize, rng: &mut impl Rng) -> Option<usize> {
    if hand_size == 0 {
        return None;
    }
    Some(rng.random_range(0..hand_size))
}

fn choose_delay_ms(profile: &BotProfile, state: &mut BotState) -> u64 {
    if profile.max_delay_ms <= profile.min_delay_ms {
        return profile.min_delay_ms;
    }
    state.rng.random_range(profile.min_delay_ms..=profile.max_delay_ms)
}

/// Computer seat: random draw-or-steal, then a random discard.
pub struct ComputerAgent {
    profile: BotProfile,
    state: BotState,
    next_action_at: Option<Instant>,
}

impl ComputerAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state, next_action_at: None }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }

    /// Play one full turn (draw phase and, if the game goes on, discard).
    fn play_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<(), ActionError> {
        if matches!(engine.phase(), TurnPhase::Draw) {
            let candidates = engine.steal_candidates(seat);
            match choose_draw(&candidates, &self.profile, &mut self.state.rng) {
                Action::Steal(from) => {
                    let card = engine.steal_from(from)?;
                    debug!(seat, from, %card, "computer steals");
                }
                _ => {
                    let card = engine.draw_from_deck()?;
                    debug!(seat, drew = card.is_some(), "computer draws");
                }
            }
        }
        if engine.is_over() || engine.current() != seat {
            return Ok(());
        }
        if let Some(index) = choose_discard(engine.hand_size(seat), &mut self.state.rng) {
            engine.discard(index)?;
        }
        Ok(())
    }
}

impl PlayerAgent for ComputerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Computer
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError> {
        if engine.is_over() || engine.current() != seat {
            return Ok(false);
        }
        let now = Instant::now();
        let delay = choose_delay_ms(&self.profile, &mut self.state);
        if delay > 0 {
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + Duration::from_millis(delay));
                    return Ok(false);
                }
                Some(next) if now < next => {
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        self.next_action_at = None;
        self.play_turn(engine, seat)?;
        Ok(true)
    }
}
