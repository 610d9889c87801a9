use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MissingField,
    InvalidPrice,
}

/// Rejection of an add-item submission. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields (missing {0})")]
    MissingField(FormField),
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField(_) => ErrorCode::MissingField,
            ValidationError::InvalidPrice(_) => ErrorCode::InvalidPrice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseParseError {
    #[error("unknown course {0:?}; expected Starter, Main, Dessert, Beverage or Other")]
    UnknownCourse(String),
}
