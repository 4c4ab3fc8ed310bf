/// Errors raised while building the scene
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("text mask has no rows")]
    EmptyTextMask,

    #[error("text mask row {row} is {found} characters wide, expected {expected}")]
    RaggedTextMask {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
