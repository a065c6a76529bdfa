//! Proposal application handlers.

mod generate_proposal;

pub use generate_proposal::{
    GenerateProposalCommand, GenerateProposalHandler, GenerateProposalResult, DEFAULT_TONE,
};
