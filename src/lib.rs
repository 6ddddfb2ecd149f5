//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, turn state machine
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

pub use error::{ConfigError, MoveError};
pub use game::{GameEngine, GameStatus, MoveOutcome};
