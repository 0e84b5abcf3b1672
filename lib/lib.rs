/// Chess domain types.
pub mod chess;
/// Turn management, players and observers.
pub mod game;
/// Assorted utilities.
pub mod util;
