//! Contract error types for the club backend
//!
//! Transport-agnostic; every `BackendApi` implementation reports through these.

use super::operation::Operation;

/// Club backend errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Operation invoked on a client with no canister bindings behind it
    #[error("Backend actor method \"{operation}\" was called, but no canister bindings are wired.")]
    Unwired {
        /// Invoked operation
        operation: Operation,
    },
    /// Network, authorization or business failure reported by the backend
    #[error("Backend call failed: {message}")]
    Remote {
        /// Opaque failure description
        message: String,
    },
    /// Input or entity rejected by local validation
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Checkout response did not decode as `{ id, url }`
    #[error("Malformed checkout session: {details}")]
    MalformedCheckoutSession {
        /// Decoder error details
        details: String,
    },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Operation named by an unwired-transport failure
    pub fn unwired_operation(&self) -> Option<Operation> {
        match self {
            Self::Unwired { operation } => Some(*operation),
            _ => None,
        }
    }
}

/// Tag outside the closed set of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} tag '{tag}'")]
pub struct UnknownTag {
    /// Enumeration name
    pub kind: &'static str,
    /// Rejected tag
    pub tag: String,
}
