use crate::agents::{Action, AgentKind, AgentTable, BotProfile, ComputerAgent, HumanAgent};
use crate::game::{ConfigError, Game, GameConfig, TurnPhase, DEFAULT_WINNING_SETS};
use std::time::{Duration, Instant};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewGame,
    Draw,
    Steal(usize),
    CursorLeft,
    CursorRight,
    Discard,
    Forfeit,
}

/// Startup settings, usually from the command line.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct AppSettings {
    pub humans: usize,
    pub seed: Option<u64>,
    pub bot_delay_ms: u64,
    /// Percent chance a computer steals rather than draws.
    pub steal_chance_pct: u8,
    pub winning_sets: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            humans: 1,
            seed: None,
            bot_delay_ms: 500,
            steal_chance_pct: 40,
            winning_sets: DEFAULT_WINNING_SETS,
        }
    }
}

impl AppSettings {
    pub fn new(humans: usize, seed: Option<u64>, bot_delay_ms: u64, steal_chance_pct: u8) -> Self {
        Self {
            humans,
            seed,
            bot_delay_ms,
            steal_chance_pct: steal_chance_pct.min(100),
            winning_sets: DEFAULT_WINNING_SETS,
        }
    }

    pub fn with_winning_sets(mut self, n: usize) -> Self {
        self.winning_sets = n;
        self
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game instance
    pub game: Game,
    pub agents: AgentTable,
    // Discard selection within the acting human's hand
    pub cursor: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_humans: usize,
    pub cfg_bot_delay_ms: u64,
    pub cfg_steal_chance_pct: u8,
    pub bot_delay_ms: u64,
    pub steal_chance_pct: u8,
    winning_sets: usize,
    next_seed: Option<u64>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(settings: AppSettings) -> Result<Self, ConfigError> {
        let mut config =
            GameConfig::with_humans(settings.humans).with_winning_sets(settings.winning_sets);
        config.seed = settings.seed;
        let game = Game::new(config)?;
        let mut app = Self {
            scene: Scene::Menu,
            game,
            agents: AgentTable::for_seats(0),
            cursor: 0,
            menu_index: 0,
            cfg_humans: settings.humans,
            cfg_bot_delay_ms: settings.bot_delay_ms,
            cfg_steal_chance_pct: settings.steal_chance_pct,
            bot_delay_ms: settings.bot_delay_ms,
            steal_chance_pct: settings.steal_chance_pct,
            winning_sets: settings.winning_sets,
            next_seed: settings.seed.map(|s| s.wrapping_add(1)),
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        };
        app.seat_agents();
        Ok(app)
    }

    /// Seat index whose hand the table shows in full and whose turn keys act on.
    pub fn acting_human(&self) -> Option<usize> {
        let seat = self.game.current();
        matches!(self.agents.agent_kind(seat), Some(AgentKind::Human)).then_some(seat)
    }

    fn can_act(&self) -> bool {
        self.scene == Scene::Table && !self.game.is_over() && self.acting_human().is_some()
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if !self.can_act() {
            return false;
        }
        self.clear_action_error();
        self.agents.receive(self.game.current(), action)
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn move_cursor(&mut self, forward: bool) {
        let Some(seat) = self.acting_human() else {
            return;
        };
        let n = self.game.players()[seat].hand_size();
        if n == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = if forward { (self.cursor + 1) % n } else { (self.cursor + n - 1) % n };
    }

    fn clamp_cursor(&mut self) {
        let n = self.acting_human().map_or(0, |seat| self.game.players()[seat].hand_size());
        if self.cursor >= n {
            self.cursor = n.saturating_sub(1);
        }
    }

    /// Apply one input. Returns `true` when a seat action was queued for
    /// the acting human; the caller should then drive the agents.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        use InputAction as A;
        match (self.scene, action) {
            (_, A::ToggleMenu) => self.toggle_menu(),

            (Scene::Menu, A::MenuNext) => self.menu_next(),
            (Scene::Menu, A::MenuPrev) => self.menu_prev(),
            (Scene::Menu, A::MenuInc) => self.menu_inc(),
            (Scene::Menu, A::MenuDec) => self.menu_dec(),
            (Scene::Menu, A::MenuApply) => self.apply_menu(),
            (Scene::Menu, A::MenuCancel) => self.cancel_menu(),

            (Scene::Table, A::ToggleHelp) => {
                self.history_open = false;
                self.help_open = !self.help_open;
            }
            (Scene::Table, A::ToggleHistory) => {
                self.help_open = false;
                self.history_offset = 0;
                self.history_open = !self.history_open;
            }
            (Scene::Table, A::HistoryUp) if self.history_open => {
                let oldest = self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                self.history_offset = (self.history_offset + 1).min(oldest);
            }
            (Scene::Table, A::HistoryDown) if self.history_open => {
                self.history_offset = self.history_offset.saturating_sub(1);
            }
            (Scene::Table, A::NewGame) if self.game.is_over() => self.new_game(),
            (Scene::Table, A::CursorLeft) => self.move_cursor(false),
            (Scene::Table, A::CursorRight) => self.move_cursor(true),
            (Scene::Table, A::Forfeit) if self.can_act() => self.game.quit(),
            (Scene::Table, A::Draw) => return self.queue_action(Action::Draw),
            (Scene::Table, A::Steal(seat)) => return self.queue_action(Action::Steal(seat)),
            (Scene::Table, A::Discard) => return self.queue_action(Action::Discard(self.cursor)),
            _ => {}
        }
        false
    }

    /// Deal a fresh game with the current settings.
    pub fn new_game(&mut self) {
        let mut config =
            GameConfig::with_humans(self.cfg_humans).with_winning_sets(self.winning_sets);
        config.seed = self.next_seed;
        match Game::new(config) {
            Ok(game) => {
                self.game = game;
                self.next_seed = self.next_seed.map(|s| s.wrapping_add(1));
                self.seat_agents();
                self.cursor = 0;
                self.history_offset = 0;
                self.clear_action_error();
            }
            Err(err) => {
                warn!(%err, "could not start game");
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
            }
        }
    }

    /// One agent per seat: humans take queued input, computers are seeded
    /// from the game seed so a whole game replays from one number.
    fn seat_agents(&mut self) {
        let n = self.game.players().len();
        self.agents = AgentTable::for_seats(n);
        self.agents.set_min_action_delay_ms(150.min(self.bot_delay_ms));
        for seat in 0..n {
            if self.game.players()[seat].is_human() {
                self.agents.set_agent(seat, Some(Box::new(HumanAgent::new())));
            } else {
                let profile = BotProfile::new(f64::from(self.steal_chance_pct) / 100.0)
                    .with_delay_ms(self.bot_delay_ms)
                    .with_seed(self.game.seed().wrapping_add(seat as u64));
                self.agents.set_agent(seat, Some(Box::new(ComputerAgent::new(profile))));
            }
        }
    }

    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table || self.game.is_over() {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        self.agents.ensure_len(self.game.players().len());
        match self.agents.on_turn(&mut self.game) {
            Ok(true) => {
                self.clear_action_error();
                if self.game.phase() == TurnPhase::Draw {
                    self.cursor = 0;
                }
                self.clamp_cursor();
            }
            Ok(false) => {}
            Err(err) => {
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
            }
        }
    }
}
