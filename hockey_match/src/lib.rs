//! Match flow around the air hockey engine: menu, countdown, play, result
//! and the persisted match history.

pub mod controller;
pub mod env;
pub mod fsm;
pub mod leaderboard;
pub mod schedule;
pub mod shortcut;

pub use controller::*;
pub use env::*;
pub use fsm::*;
pub use leaderboard::*;
pub use schedule::*;
pub use shortcut::*;
