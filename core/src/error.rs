use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game configuration")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GameError>;
