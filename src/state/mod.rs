//! Round and table state: legality predicates and the trick in progress.

mod game;
mod table;

pub use game::{GameState, HAND_SIZE};
pub use table::{Table, TableSlot};
