//! Terminal front end: menu, table view and the input loop.

pub mod app;
pub mod controller;
mod ui;
