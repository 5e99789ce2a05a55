//! Club Backend Client
//!
//! Typed contract for the club backend canister: every entity exchanged with it,
//! every operation callable against it, and an unwired placeholder that fails
//! loudly until a real transport is bound.

// Public exports
pub mod contract;
pub use contract::{
    client::BackendApi, error::BackendError, CheckoutSession, ClubRole, EventType, Operation,
    Principal, RecurrenceFrequency, TeamRole, UserRole,
};

pub mod api;
pub use api::unwired::{create_actor, UnwiredBackend};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{BackendService, ReactionOutcome};
