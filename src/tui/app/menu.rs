use crate::game::MAX_PLAYERS;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Humans,
    BotDelayMs,
    StealChance,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Humans, MenuItem::BotDelayMs, MenuItem::StealChance];

const MAX_BOT_DELAY_MS: u64 = 5_000;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Humans => format!(
                "Human Players: {}  (Computers: {})",
                app.cfg_humans,
                MAX_PLAYERS - app.cfg_humans
            ),
            MenuItem::BotDelayMs => format!("Computer Delay (ms): {}", app.cfg_bot_delay_ms),
            MenuItem::StealChance => format!("Computer Steal Chance: {}%", app.cfg_steal_chance_pct),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Humans => {
                if app.cfg_humans < MAX_PLAYERS {
                    app.cfg_humans += 1;
                }
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = (app.cfg_bot_delay_ms + 100).min(MAX_BOT_DELAY_MS);
            }
            MenuItem::StealChance => {
                app.cfg_steal_chance_pct = (app.cfg_steal_chance_pct + 10).min(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Humans => {
                if app.cfg_humans > 1 {
                    app.cfg_humans -= 1;
                }
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_sub(100);
            }
            MenuItem::StealChance => {
                app.cfg_steal_chance_pct = app.cfg_steal_chance_pct.saturating_sub(10);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        match self.scene {
            Scene::Menu => self.scene = Scene::Table,
            _ => self.open_menu(),
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_humans = self.game.config().humans.max(1);
        self.cfg_bot_delay_ms = self.bot_delay_ms;
        self.cfg_steal_chance_pct = self.steal_chance_pct;
        self.scene = Scene::Menu;
    }

    /// Commit the edited settings and deal a new game.
    pub fn apply_menu(&mut self) {
        self.cfg_humans = self.cfg_humans.min(MAX_PLAYERS);
        self.bot_delay_ms = self.cfg_bot_delay_ms;
        self.steal_chance_pct = self.cfg_steal_chance_pct.min(100);
        self.new_game();
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
