//! Core Connect Four game logic: board, players, and the turn state machine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, RUN_LENGTH};
pub use engine::{GameEngine, GameStatus, MoveOutcome, WinScan};
pub use player::{PALETTE, PieceColor, Player, PlayerId};

/// Default board geometry.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
