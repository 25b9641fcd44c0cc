//! hotpot: a turn-based hotpot ingredient card game.
//!
//! Players collect sets from a 96-card deck (8 categories × 3 ingredients ×
//! 4 copies). A set is either three identical cards or one of each
//! ingredient in a category; the first player to hold enough sets at once
//! wins.
//!
//! ## Quick start: find sets in a hand
//! ```
//! use hotpot::cards::parse_cards;
//! use hotpot::hand::{has_card, sort_hand};
//! use hotpot::sets::{extract_all, find_sets_in_hand, SetKind};
//!
//! let mut hand = parse_cards("Fish RamenNoodles Fish HangingNoodles Fish RolledNoodles").unwrap();
//! sort_hand(&mut hand);
//! assert!(has_card(&hand, "Fish".parse().unwrap()));
//!
//! let sets = find_sets_in_hand(&hand);
//! assert_eq!(sets.len(), 2);
//!
//! let banked = extract_all(hand);
//! assert_eq!(banked.count(SetKind::ThreeOfAKind), 1);
//! assert_eq!(banked.score(), 180);
//! assert!(banked.leftover.is_empty());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin hotpot
//! ```
//! or a headless all-computer game with `--simulate`.

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod player;
pub mod sets;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
