use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidId(i64),
    InvalidReview(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(id) => {
                write!(f, "invalid movie id {id}: ids must be positive")
            }
            ModelError::InvalidReview(msg) => {
                write!(f, "invalid review: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
