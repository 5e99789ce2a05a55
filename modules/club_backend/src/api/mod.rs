//! API layer - `BackendApi` implementations

pub mod unwired;
