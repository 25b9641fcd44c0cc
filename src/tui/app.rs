mod menu;
mod state;

pub use state::{AppSettings, AppState, InputAction, Scene};
