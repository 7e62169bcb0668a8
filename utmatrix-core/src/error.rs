use thiserror::Error;

pub type Result<T> = core::result::Result<T, UtMatrixError>;

/// Where in a container's lifecycle an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// Raised while creating a container.
    Construction,
    /// Raised while addressing an element or a row.
    Access,
    /// Raised by a binary arithmetic operation.
    Operation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtMatrixError {
    #[error("Invalid size: requested {requested}, allowed range is 0..={max}")]
    InvalidSize { requested: i128, max: usize },

    #[error("Invalid start index: {requested} is negative")]
    InvalidStartIndex { requested: i128 },

    #[error("Index {index} out of range {start}..{end}")]
    IndexOutOfRange { index: i128, start: usize, end: usize },

    #[error("Size mismatch: left operand has {left} elements, right operand has {right}")]
    SizeMismatch { left: usize, right: usize },
}

impl UtMatrixError {
    /// Returns the lifecycle stage the error belongs to.
    pub fn stage(&self) -> ErrorStage {
        match self {
            UtMatrixError::InvalidSize { .. } | UtMatrixError::InvalidStartIndex { .. } => {
                ErrorStage::Construction
            }
            UtMatrixError::IndexOutOfRange { .. } => ErrorStage::Access,
            UtMatrixError::SizeMismatch { .. } => ErrorStage::Operation,
        }
    }
}
