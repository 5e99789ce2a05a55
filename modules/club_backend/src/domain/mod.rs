//! Domain layer - validation and orchestration over the contract

pub mod service;
pub mod validation;

pub use service::{BackendService, ReactionOutcome};
