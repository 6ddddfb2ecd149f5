//! Terminal UI for playing Connect Four: the event loop lives in [`App`],
//! drawing in `game_view`.

mod app;
pub mod game_view;

pub use app::App;
