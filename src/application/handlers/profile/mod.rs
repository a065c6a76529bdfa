//! Profile application handlers.

mod generate_profile;

pub use generate_profile::{
    GenerateProfileCommand, GenerateProfileHandler, GenerateProfileResult, MAX_REPOS_LIMIT,
};
