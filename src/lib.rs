pub mod board;
pub mod chess_move;
pub mod game;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod move_generation;
pub mod placement;
pub mod prelude;
pub mod searcher;
