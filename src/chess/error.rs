#[derive(thiserror::Error, Debug)]
pub enum ReachError {
    #[error("Invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("Unknown piece: {0:?}")]
    UnknownPiece(String),

    #[error("Reach table has {actual} entries, expected {expected}")]
    TableSize { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, ReachError>;
