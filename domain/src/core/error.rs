//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The question was empty or contained only whitespace.
    #[error("Please enter a question.")]
    EmptyQuestion,

    /// A structured response did not contain an expected field.
    #[error("Malformed response: missing `{0}`")]
    MissingField(String),
}
