//! Game orchestration around the engine: who moves, how a human hands a move
//! over, and what happens after every move.

pub mod controller;
pub mod error;
pub mod move_slot;
pub mod player;

pub use controller::{GameController, GameEnding, GameMode, PlayedMove};
pub use error::{GameError, InputError};
pub use move_slot::{MoveRequest, MoveSlot};
pub use player::{EnginePlayer, HumanPlayer, Player};
