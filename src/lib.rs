//! Profile Assistant - Freelancing profile generation from repository history
//!
//! This crate fetches a user's repositories from the code host, derives a
//! skills and technology picture from them, and turns that picture into
//! profile copy: title, overview, skills, portfolio and a spoken
//! self-introduction.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
