use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Please enter a number greater than or equal to 2")]
    InvalidSize,
    #[error("Grid size must be at most 65535")]
    SizeTooLarge,
    #[error("Cell index is outside the grid")]
    InvalidIndex,
    #[error("No board has been created yet")]
    NoBoard,
    #[error("Saved board is inconsistent")]
    CorruptBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
