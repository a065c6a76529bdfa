//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! profile assistant domain.

mod errors;
mod timestamp;
mod username;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;
pub use username::Username;
