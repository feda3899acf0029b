use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("illegal move: {notation}")]
    IllegalMove { notation: String },
    #[error("a move is already pending")]
    MoveAlreadyPending,
    #[error("the move source was closed")]
    Disconnected,
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}
