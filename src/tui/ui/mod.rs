//! Rendering only; all state changes go through `AppState`.

mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

/// Render the active scene for one frame.
pub(crate) fn draw(frame: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Table => table::draw_table(frame, app),
        Scene::Menu => menu::draw_menu(frame, app),
    }
}
