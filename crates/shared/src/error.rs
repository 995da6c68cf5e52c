use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("no product with id {id} in the list")]
    UnknownProduct { id: ProductId },
    #[error("vote delta must be +1 or -1, got {delta}")]
    InvalidDelta { delta: i64 },
    #[error("unrecognized vote direction '{input}' (expected up or down)")]
    InvalidDirection { input: String },
    #[error("product id {id} appears more than once in the seed")]
    DuplicateProduct { id: ProductId },
    #[error("product {id} is malformed: {reason}")]
    InvalidSeed { id: ProductId, reason: String },
}

impl VoteError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownProduct { .. } => ErrorCode::NotFound,
            Self::InvalidDelta { .. }
            | Self::InvalidDirection { .. }
            | Self::DuplicateProduct { .. }
            | Self::InvalidSeed { .. } => ErrorCode::Validation,
        }
    }
}
