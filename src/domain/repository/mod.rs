//! Repository module - records describing a user's hosted repositories.

mod record;

#[cfg(test)]
pub(crate) use record::fixtures;
pub use record::{LanguageBytes, RepositoryRecord, UserRecord};
