//! Core building blocks: errors, RNG, seats and players.

mod error;
mod player;
mod rng;

pub use error::GameError;
pub use player::{Player, Seat, SeatPair, Strategy};
pub use rng::GameRng;
