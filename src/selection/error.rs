use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionErrorKind {
    InvalidCatalog,
    InvariantViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionError {
    pub kind: SelectionErrorKind,
    pub message: String,
}

impl SelectionError {
    pub fn new(kind: SelectionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SelectionError {}

pub fn invalid_catalog(message: impl Into<String>) -> SelectionError {
    SelectionError::new(SelectionErrorKind::InvalidCatalog, message)
}

pub fn invariant_violation(message: impl Into<String>) -> SelectionError {
    SelectionError::new(SelectionErrorKind::InvariantViolation, message)
}
