//! UNO rules engine.
//!
//! [`hand::Hand`] runs a single round: dealing, legal plays, card effects,
//! turn order, UNO calls and scoring. [`game::Game`] strings hands together
//! and keeps score until a player reaches the target.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod shuffler;
pub mod turn;
