//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: completion model identifiers
//! - [`question::Question`]: a validated, non-empty raw question
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
