//! Placeholder transport used before canister bindings exist

mod client;

pub use client::{create_actor, UnwiredBackend};
